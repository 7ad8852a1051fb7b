pub const UI_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SreeRaksha Monitoring Dashboard</title>
    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            background: #0f172a;
            padding: 20px;
            color: #e2e8f0;
        }
        .container {
            max-width: 1400px;
            margin: 0 auto;
        }
        header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 20px;
        }
        h1 {
            font-size: 2em;
            color: #f8fafc;
        }
        h2 {
            font-size: 1.1em;
            margin-bottom: 12px;
            color: #f1f5f9;
        }
        .clock {
            text-align: right;
            font-family: 'Courier New', monospace;
        }
        .clock .time {
            font-size: 1.5em;
            font-weight: bold;
        }
        .clock .network {
            color: #94a3b8;
            font-size: 0.85em;
        }
        .layout {
            display: grid;
            grid-template-columns: 2fr 3fr;
            gap: 20px;
        }
        .panel {
            background: #1e293b;
            border-radius: 12px;
            padding: 16px;
            margin-bottom: 20px;
            box-shadow: 0 4px 6px rgba(0,0,0,0.3);
        }
        .feed-grid {
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 12px;
        }
        .feed-card {
            background: #0f172a;
            border-radius: 8px;
            padding: 10px;
            cursor: pointer;
            border: 2px solid transparent;
            transition: transform 0.2s;
        }
        .feed-card:hover {
            transform: translateY(-2px);
        }
        .feed-card.alerting {
            border-color: currentColor;
        }
        .feed-card img, .modal img {
            width: 100%;
            border-radius: 6px;
            display: block;
        }
        .feed-name {
            font-weight: bold;
            margin-top: 6px;
        }
        .feed-meta {
            color: #94a3b8;
            font-size: 0.8em;
        }
        .badge {
            display: inline-block;
            padding: 2px 8px;
            border-radius: 10px;
            font-size: 0.75em;
            font-weight: bold;
            margin-right: 4px;
        }
        .tone-red { color: #ef4444; }
        .tone-orange { color: #f97316; }
        .tone-amber { color: #f59e0b; }
        .tone-blue { color: #3b82f6; }
        .tone-emerald { color: #10b981; }
        .tone-slate { color: #64748b; }
        .badge.tone-red { background: #ef4444; color: white; }
        .badge.tone-orange { background: #f97316; color: white; }
        .badge.tone-amber { background: #f59e0b; color: white; }
        .badge.tone-blue { background: #3b82f6; color: white; }
        .badge.tone-emerald { background: #10b981; color: white; }
        .badge.tone-slate { background: #475569; color: white; }
        .stats {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
            gap: 10px;
            margin-bottom: 12px;
        }
        .stat-item {
            text-align: center;
            padding: 10px;
            background: #0f172a;
            border-radius: 6px;
        }
        .stat-value {
            font-size: 1.5em;
            font-weight: bold;
        }
        .stat-label {
            color: #94a3b8;
            font-size: 0.8em;
            margin-top: 5px;
        }
        .stat-trend {
            color: #10b981;
            font-size: 0.7em;
        }
        .gauge {
            height: 10px;
            background: #0f172a;
            border-radius: 5px;
            margin: 6px 0 14px;
            overflow: hidden;
        }
        .gauge div {
            height: 100%;
            background: #10b981;
        }
        .alert-card {
            background: #0f172a;
            border-left: 4px solid currentColor;
            padding: 8px 10px;
            border-radius: 4px;
            margin-bottom: 8px;
        }
        .alert-card .body {
            color: #e2e8f0;
        }
        .map {
            position: relative;
            height: 320px;
            background: linear-gradient(135deg, #1e3a5f 0%, #0f172a 100%);
            border-radius: 8px;
        }
        .marker {
            position: absolute;
            transform: translate(-50%, -50%);
            font-size: 1.3em;
            cursor: pointer;
        }
        .marker.pulsing {
            animation: pulse 1.2s infinite;
        }
        .marker.selected {
            outline: 2px solid white;
            border-radius: 50%;
        }
        .tooltip {
            position: absolute;
            top: 120%;
            left: 50%;
            transform: translateX(-50%);
            background: #f8fafc;
            color: #0f172a;
            font-size: 0.55em;
            padding: 6px 8px;
            border-radius: 4px;
            white-space: nowrap;
            z-index: 5;
        }
        @keyframes pulse {
            0% { opacity: 1; }
            50% { opacity: 0.4; }
            100% { opacity: 1; }
        }
        .legend {
            display: flex;
            gap: 16px;
            margin-top: 8px;
            font-size: 0.85em;
        }
        .chart {
            display: flex;
            align-items: flex-end;
            gap: 12px;
            height: 200px;
            padding-top: 10px;
        }
        .bar-col {
            flex: 1;
            display: flex;
            flex-direction: column;
            align-items: center;
            height: 100%;
        }
        .bar {
            position: relative;
            width: 100%;
            flex: 1;
        }
        .bar div {
            position: absolute;
            left: 0;
            right: 0;
            border-radius: 3px 3px 0 0;
        }
        .bar .total { bottom: 0; background: #ef4444; }
        .bar .resolved { bottom: 0; background: #10b981; }
        .bar .pending { background: #f59e0b; }
        .bar-label {
            color: #94a3b8;
            font-size: 0.75em;
            margin-top: 4px;
        }
        .modal-backdrop {
            position: fixed;
            inset: 0;
            background: rgba(0,0,0,0.7);
            display: none;
            align-items: center;
            justify-content: center;
            z-index: 10;
        }
        .modal-backdrop.open {
            display: flex;
        }
        .modal {
            background: #1e293b;
            border-radius: 12px;
            padding: 20px;
            width: min(900px, 90vw);
            position: relative;
        }
        .modal .close {
            position: absolute;
            top: 10px;
            right: 14px;
            background: none;
            border: none;
            color: #e2e8f0;
            font-size: 1.4em;
            cursor: pointer;
        }
        .modal .overlay {
            margin: 8px 0;
            font-weight: bold;
        }
        .modal button.action, .modal button.control {
            background: #334155;
            color: #e2e8f0;
            border: none;
            padding: 8px 12px;
            border-radius: 6px;
            margin: 6px 6px 0 0;
            cursor: pointer;
        }
        .refresh-info {
            text-align: center;
            color: #64748b;
            margin-top: 10px;
            font-size: 0.9em;
        }
    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>🛡️ SreeRaksha Monitoring Dashboard</h1>
            <div class="clock">
                <div id="clock-time" class="time">--:--:--</div>
                <div id="clock-date"></div>
                <div id="network" class="network"></div>
            </div>
        </header>
        <div class="layout">
            <div>
                <div class="panel">
                    <h2>📹 Live Camera Feeds</h2>
                    <div id="feed-grid" class="feed-grid"></div>
                </div>
                <div class="panel">
                    <h2>🚨 Distress Detection</h2>
                    <div id="distress-stats" class="stats"></div>
                    <div id="distress-gauge"></div>
                    <div id="distress-alerts"></div>
                </div>
            </div>
            <div>
                <div class="panel">
                    <h2>🗺️ Camera Network Map <span id="camera-count" class="badge tone-blue"></span></h2>
                    <div id="map" class="map"></div>
                    <div id="map-legend" class="legend"></div>
                </div>
                <div class="panel">
                    <h2>📊 Alert Frequency <span class="badge tone-slate">24H Overview</span></h2>
                    <div id="kpis" class="stats"></div>
                    <div id="chart" class="chart"></div>
                    <div id="chart-summary" class="legend"></div>
                </div>
            </div>
        </div>
        <div class="refresh-info">Auto-refreshing every second</div>
    </div>
    <div id="modal-backdrop" class="modal-backdrop">
        <div id="modal" class="modal"></div>
    </div>
    <script>
        const MODAL_ACTIONS = ['Capture Evidence', 'Alert Response Team', 'View Timeline', 'Camera Settings', 'Full Screen'];
        const STREAM_CONTROLS = ['Play', 'Pause'];

        // View state lives here; the server only serves data.
        let snapshot = null;
        let modalFeed = null;
        let selectedMarker = null;
        let hoveredMarker = null;

        async function fetchDashboard() {
            try {
                const response = await fetch('/dashboard');
                snapshot = await response.json();
                render();
            } catch (error) {
                console.error('Failed to fetch dashboard:', error);
            }
        }

        function render() {
            if (!snapshot) return;
            renderClock(snapshot);
            renderFeeds(snapshot.feeds);
            renderDistress(snapshot.distress);
            renderMap(snapshot.map);
            renderChart(snapshot.chart);
        }

        function clockText() {
            return snapshot ? new Date(snapshot.currentTime).toLocaleTimeString('en-US', { hour12: false }) : '';
        }

        function renderClock(s) {
            const now = new Date(s.currentTime);
            document.getElementById('clock-time').textContent = now.toLocaleTimeString('en-US', { hour12: false });
            document.getElementById('clock-date').textContent = now.toLocaleDateString('en-US', { weekday: 'long', year: 'numeric', month: 'long', day: 'numeric' });
            const modalClock = document.getElementById('modal-clock');
            if (modalClock) modalClock.textContent = clockText();
            document.getElementById('network').textContent = `${s.network.onlineCameras}/${s.network.totalCameras} cameras online`;
        }

        function renderFeeds(feeds) {
            const grid = document.getElementById('feed-grid');
            grid.innerHTML = '';
            for (const card of feeds) {
                const el = document.createElement('div');
                el.className = `feed-card ${card.feed.hasAlert ? 'alerting tone-' + card.alertTone : ''}`;
                el.innerHTML = `
                    <img src="${card.feed.streamUrl}" alt="${card.feed.name}">
                    <div>
                        <span class="badge tone-${card.statusTone}">${card.statusBadge}</span>
                        <span class="badge tone-${card.qualityTone}">${card.feed.quality}</span>
                        ${card.feed.hasAlert ? `<span class="badge tone-${card.alertTone}">ALERT</span>` : ''}
                    </div>
                    <div class="feed-name">${card.feed.name}</div>
                    <div class="feed-meta">📍 ${card.feed.location} · ${card.feed.lastUpdate}</div>
                `;
                el.addEventListener('click', () => openModal(card));
                grid.appendChild(el);
            }
        }

        function openModal(card) {
            if (modalFeed) return;
            modalFeed = card;
            const modal = document.getElementById('modal');
            modal.innerHTML = `
                <button class="close" onclick="closeModal()">✕</button>
                <h2>${card.feed.name}</h2>
                <div class="feed-meta">📍 ${card.feed.location}</div>
                <div>
                    <span class="badge tone-${card.statusTone}">${card.modalStatusBadge}</span>
                    <span class="badge tone-${card.qualityTone}">${card.feed.quality} Quality</span>
                    ${card.alertHeadline ? `<span class="badge tone-${card.alertTone}">${card.alertHeadline}</span>` : ''}
                </div>
                ${card.feed.status === 'live' ? `<div class="overlay tone-red">🔴 LIVE RECORDING <span id="modal-clock">${clockText()}</span></div>` : ''}
                ${card.detectionOverlay ? `<div class="overlay tone-${card.alertTone}">${card.detectionOverlay}</div>` : ''}
                <img src="${card.feed.streamUrl}" alt="${card.feed.name}">
                <div class="feed-meta">Last Update: ${card.feed.lastUpdate}</div>
                <div>${STREAM_CONTROLS.map(c => `<button class="control">${c}</button>`).join('')}</div>
                <div>${MODAL_ACTIONS.map(a => `<button class="action">${a}</button>`).join('')}</div>
            `;
            document.getElementById('modal-backdrop').classList.add('open');
        }

        function closeModal() {
            modalFeed = null;
            document.getElementById('modal-backdrop').classList.remove('open');
        }

        function renderDistress(d) {
            document.getElementById('distress-stats').innerHTML = `
                <div class="stat-item">
                    <div class="stat-value tone-red">${d.activeAlerts}</div>
                    <div class="stat-label">Active Alerts</div>
                </div>
                <div class="stat-item">
                    <div class="stat-value tone-amber">${d.metrics.isolatedIndividuals}</div>
                    <div class="stat-label">Isolated Individuals</div>
                </div>
                <div class="stat-item">
                    <div class="stat-value tone-emerald">${d.metrics.detectionAccuracy}%</div>
                    <div class="stat-label">Detection Accuracy</div>
                </div>
            `;
            document.getElementById('distress-gauge').innerHTML = `
                <div class="stat-label">AI Detection Confidence</div>
                <div class="gauge"><div style="width: ${d.metrics.detectionAccuracy}%"></div></div>
            `;
            document.getElementById('distress-alerts').innerHTML = '<h2>Recent Detections — Last 30 min</h2>' + d.alerts.map(a => `
                <div class="alert-card tone-${a.tone}">
                    <div class="body">${a.icon} <strong>${a.label}</strong>
                        <span class="badge tone-${a.tone}">${a.severity}</span>
                        <span class="badge tone-slate">${a.status}</span>
                    </div>
                    <div class="feed-meta">${a.cameraName} · ${a.location} · ${a.timestamp} · ${a.confidence}% confidence</div>
                </div>
            `).join('');
        }

        function renderMap(m) {
            const map = document.getElementById('map');
            map.innerHTML = '';
            for (const marker of m.markers) {
                const el = document.createElement('div');
                const selected = selectedMarker === marker.id;
                el.className = `marker tone-${marker.style.tone} ${marker.style.pulsing ? 'pulsing' : ''} ${selected ? 'selected' : ''}`;
                el.style.left = `${marker.position.leftPct}%`;
                el.style.top = `${marker.position.topPct}%`;
                el.textContent = { clock: '◷', triangle: '▲', check: '✔' }[marker.style.icon];
                if (selected || hoveredMarker === marker.id) {
                    const tip = document.createElement('div');
                    tip.className = 'tooltip';
                    tip.innerHTML = marker.tooltip.join('<br>');
                    el.appendChild(tip);
                }
                el.addEventListener('mouseenter', () => { hoveredMarker = marker.id; renderMap(m); });
                el.addEventListener('mouseleave', () => { hoveredMarker = null; renderMap(m); });
                el.addEventListener('click', () => {
                    selectedMarker = selectedMarker === marker.id ? null : marker.id;
                    renderMap(m);
                });
                map.appendChild(el);
            }
            document.getElementById('camera-count').textContent = `${m.cameraCount} Cameras`;
            document.getElementById('map-legend').innerHTML = `
                <span class="tone-emerald">✔ Operational</span>
                <span class="tone-red">▲ High Alert</span>
                <span class="tone-amber">▲ Medium Alert</span>
                <span class="tone-slate">◷ Offline</span>
                <span>${m.counts.online} online · ${m.counts.alerts} alert · ${m.counts.offline} offline</span>
            `;
        }

        function renderChart(c) {
            document.getElementById('kpis').innerHTML = c.kpis.map(k => `
                <div class="stat-item">
                    <div class="stat-value">${k.value}</div>
                    <div class="stat-label">${k.title}</div>
                    <div class="stat-trend">${k.trend}</div>
                </div>
            `).join('');
            document.getElementById('chart').innerHTML = c.bars.map(b => `
                <div class="bar-col" title="${b.hour}: ${b.alerts} alerts, ${b.resolved} resolved, ${b.pending} pending">
                    <div class="bar">
                        <div class="total" style="height: ${b.totalPct}%"></div>
                        <div class="resolved" style="height: ${b.resolvedPct}%"></div>
                        ${b.pendingSegment ? `<div class="pending" style="height: ${b.pendingSegment.heightPct}%; bottom: ${b.pendingSegment.bottomPct}%"></div>` : ''}
                    </div>
                    <div class="bar-label">${b.hour}</div>
                </div>
            `).join('');
            document.getElementById('chart-summary').innerHTML = `
                <span class="tone-amber">Pending: ${c.pendingAlerts} · Requires Attention</span>
                <span>Avg response: ${c.avgResponseSeconds}s · Within Target</span>
                <span class="tone-emerald">System uptime: ${c.systemUptimePct}% · Excellent</span>
            `;
        }

        document.getElementById('modal-backdrop').addEventListener('click', (e) => {
            if (e.target.id === 'modal-backdrop') closeModal();
        });
        document.addEventListener('keydown', (e) => {
            if (e.key === 'Escape') closeModal();
        });

        // Initial load
        fetchDashboard();

        // Auto-refresh every second
        setInterval(fetchDashboard, 1000);
    </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use sreeraksha_core::feeds::ModalAction;

    #[test]
    fn test_page_lists_every_modal_action() {
        for action in ModalAction::ALL {
            assert!(UI_HTML.contains(action.label()), "missing {}", action.label());
        }
    }
}
