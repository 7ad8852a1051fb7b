use crate::snapshot::{ChartPanel, DashboardSnapshot, DistressPanel, FeedCard, MapPanel};
use chrono::{DateTime, Local};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;
use sreeraksha_core::feeds::{ModalAction, StreamControl};
use sreeraksha_core::map::{MapSelection, MarkerEmphasis};
use sreeraksha_core::types::Tone;

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Red => Color::Red,
        Tone::Orange => Color::LightRed,
        Tone::Amber => Color::Yellow,
        Tone::Blue => Color::Blue,
        Tone::Emerald => Color::Green,
        Tone::Slate => Color::DarkGray,
    }
}

fn heading(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
}

pub fn render_header(f: &mut Frame, area: Rect, snapshot: &DashboardSnapshot) {
    let now = snapshot.current_time;
    let line = Line::from(vec![
        Span::styled("SreeRaksha Monitoring", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" │ "),
        Span::styled(now.format("%H:%M:%S").to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::raw(now.format("%A, %B %-d, %Y").to_string()),
        Span::raw(" │ "),
        Span::styled("●", Style::default().fg(Color::Green)),
        Span::raw(format!(
            " {}/{} cameras online",
            snapshot.network.online_cameras, snapshot.network.total_cameras
        )),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));

    let paragraph = Paragraph::new(vec![line])
        .block(block)
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

pub fn render_feed_grid(f: &mut Frame, area: Rect, feeds: &[FeedCard], cursor: usize, columns: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Live Camera Feeds (←↑↓→ select, Enter expand)");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if feeds.is_empty() {
        f.render_widget(Paragraph::new("  (no feeds)"), inner);
        return;
    }

    let columns = columns.max(1);
    let rows = (feeds.len() + columns - 1) / columns;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            let idx = row * columns + col;
            if let Some(card) = feeds.get(idx) {
                render_feed_card(f, *cell, card, idx == cursor);
            }
        }
    }
}

fn render_feed_card(f: &mut Frame, area: Rect, card: &FeedCard, selected: bool) {
    let feed = &card.feed;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(card.status_badge, Style::default().fg(tone_color(card.status_tone))),
            Span::raw(" "),
            Span::styled(feed.quality.as_str(), Style::default().fg(tone_color(card.quality_tone))),
        ]),
        Line::from(Span::styled(feed.name.as_str(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(format!("📍 {}", feed.location)),
        Line::from(Span::styled(feed.last_update.as_str(), Style::default().fg(Color::DarkGray))),
    ];
    if feed.has_alert {
        lines.push(Line::from(Span::styled(
            "⚠ ALERT",
            Style::default().fg(tone_color(card.alert_tone)).add_modifier(Modifier::BOLD),
        )));
    }

    let border = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else if feed.has_alert {
        Style::default().fg(tone_color(card.alert_tone))
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);

    f.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_feed_modal(f: &mut Frame, area: Rect, card: &FeedCard, now: DateTime<Local>) {
    let feed = &card.feed;
    let mut header = vec![
        Span::styled(card.modal_status_badge, Style::default().fg(tone_color(card.status_tone))),
        Span::raw(" │ "),
        Span::styled(
            format!("{} Quality", feed.quality.as_str()),
            Style::default().fg(tone_color(card.quality_tone)),
        ),
    ];
    if let Some(headline) = &card.alert_headline {
        header.push(Span::raw(" │ "));
        header.push(Span::styled(
            headline.as_str(),
            Style::default().fg(tone_color(card.alert_tone)).add_modifier(Modifier::BOLD),
        ));
    }
    let mut lines = vec![
        Line::from(header),
        Line::from(format!("📍 {}", feed.location)),
        Line::from(""),
    ];
    if feed.is_live() {
        lines.push(Line::from(vec![
            Span::styled("🔴 LIVE RECORDING", Style::default().fg(Color::Red)),
            Span::raw(format!(" {}", now.format("%H:%M:%S"))),
        ]));
    }
    if let Some(overlay) = &card.detection_overlay {
        lines.push(Line::from(Span::styled(
            overlay.as_str(),
            Style::default().fg(tone_color(card.alert_tone)).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(format!("Last Update: {}", feed.last_update)));
    lines.push(Line::from(vec![
        Span::raw("Stream: "),
        Span::styled(feed.stream_url.as_str(), Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    let controls: Vec<Span> = StreamControl::ALL
        .iter()
        .map(|c| Span::raw(format!("[{}] ", c.label())))
        .collect();
    lines.push(Line::from(controls));
    lines.push(Line::from(""));
    lines.push(Line::from(heading("Actions:")));
    for action in ModalAction::ALL {
        lines.push(Line::from(format!("  [{}]", action.label())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc or X to close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(feed.name.as_str())
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

pub fn render_distress_panel(f: &mut Frame, area: Rect, panel: &DistressPanel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Distress Detection");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let stats = Line::from(vec![
        Span::raw("Active Alerts: "),
        Span::styled(panel.active_alerts.to_string(), Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw("  │  Isolated Individuals: "),
        Span::styled(
            panel.metrics.isolated_individuals.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(stats), chunks[0]);

    let accuracy = panel.metrics.detection_accuracy;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .percent(u16::from(accuracy.min(100)))
        .label(format!("AI Detection Confidence {}%", accuracy));
    f.render_widget(gauge, chunks[1]);

    let mut lines = vec![Line::from(heading("Recent Detections — Last 30 min"))];
    for alert in &panel.alerts {
        let color = tone_color(alert.tone);
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", alert.icon)),
            Span::styled(alert.label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(format!("[{}]", alert.severity), Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(alert.status, Style::default().fg(if alert.active { Color::Red } else { Color::DarkGray })),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "   {} · {} · {} · {}%",
                alert.camera_name, alert.location, alert.timestamp, alert.confidence
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[2]);
}

/// Draws markers straight into the buffer at their percentage anchors, with
/// tooltips for selected or hovered markers.
pub fn render_map(f: &mut Frame, area: Rect, map: &MapPanel, selection: &MapSelection) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Camera Network Map │ {} Cameras (Tab hover, Space select)", map.camera_count));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 2 || inner.height < 2 {
        return;
    }

    // last row is the legend
    let canvas = Rect { height: inner.height - 1, ..inner };
    let buf = f.buffer_mut();

    let anchor = |pct: f64, origin: u16, span: u16| -> u16 {
        let offset = ((pct / 100.0) * span as f64).floor().max(0.0) as u16;
        origin + offset.min(span.saturating_sub(1))
    };

    let mut tooltips = Vec::new();
    for marker in &map.markers {
        let x = anchor(marker.position.left_pct, canvas.x, canvas.width);
        let y = anchor(marker.position.top_pct, canvas.y, canvas.height);

        let mut style = Style::default().fg(tone_color(marker.style.tone));
        if marker.style.pulsing {
            style = style.add_modifier(Modifier::SLOW_BLINK);
        }
        style = match selection.emphasis(&marker.id) {
            MarkerEmphasis::Selected => style.add_modifier(Modifier::REVERSED | Modifier::BOLD),
            MarkerEmphasis::Hovered => style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            MarkerEmphasis::Normal => style,
        };
        buf.set_string(x, y, marker.style.icon.glyph(), style);

        if selection.tooltip_visible(&marker.id) {
            tooltips.push((x, y, &marker.tooltip));
        }
    }

    // tooltips go on top of every marker
    let right = canvas.x + canvas.width;
    let bottom = canvas.y + canvas.height;
    for (x, y, lines) in tooltips {
        let tx = (x + 2).min(right.saturating_sub(1));
        for (i, line) in lines.iter().enumerate() {
            let ty = y + 1 + i as u16;
            if ty >= bottom {
                break;
            }
            let width = (right - tx) as usize;
            buf.set_stringn(tx, ty, line, width, Style::default().fg(Color::Black).bg(Color::White));
        }
    }

    let legend_y = inner.y + inner.height - 1;
    let legend = [
        ("✔ Operational", Color::Green),
        ("▲ High Alert", Color::Red),
        ("▲ Medium Alert", Color::Yellow),
        ("◷ Offline", Color::DarkGray),
    ];
    let mut x = inner.x;
    for (label, color) in legend {
        let remaining = (inner.x + inner.width).saturating_sub(x) as usize;
        if remaining == 0 {
            break;
        }
        let (end, _) = buf.set_stringn(x, legend_y, label, remaining, Style::default().fg(color));
        x = end + 2;
    }
    let counts = format!(
        "{} online · {} alert · {} offline",
        map.counts.online, map.counts.alerts, map.counts.offline
    );
    let remaining = (inner.x + inner.width).saturating_sub(x) as usize;
    if remaining > 0 {
        buf.set_stringn(x, legend_y, counts, remaining, Style::default().fg(Color::Gray));
    }
}

pub fn render_alert_chart(f: &mut Frame, area: Rect, chart: &ChartPanel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Alert Frequency │ 24H Overview");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let kpi_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, chart.kpis.len().max(1) as u32); chart.kpis.len().max(1)])
        .split(chunks[0]);
    for (kpi, kpi_area) in chart.kpis.iter().zip(kpi_areas.iter()) {
        let lines = vec![
            Line::from(Span::styled(kpi.value.as_str(), Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(kpi.title, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(kpi.trend, Style::default().fg(Color::Green))),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *kpi_area);
    }

    render_bars(f, chunks[1], chart);

    let summary = Line::from(vec![
        Span::styled(format!("Pending: {}", chart.pending_alerts), Style::default().fg(Color::Yellow)),
        Span::raw(" Requires Attention │ "),
        Span::raw(format!("Avg response: {}s Within Target │ ", chart.avg_response_seconds)),
        Span::styled(format!("Uptime: {}%", chart.system_uptime_pct), Style::default().fg(Color::Green)),
        Span::raw(" Excellent"),
    ]);
    f.render_widget(Paragraph::new(summary), chunks[2]);
}

/// Stacked bars: total in red, resolved painted over it in green, then the
/// pending segment in amber at its own offset.
fn render_bars(f: &mut Frame, area: Rect, chart: &ChartPanel) {
    let n = chart.bars.len() as u16;
    if n == 0 || area.height < 2 || area.width < n {
        return;
    }
    let slot = area.width / n;
    let bar_width = slot.saturating_sub(1).max(1) as usize;
    let height = area.height - 1;
    let floor = area.y + height - 1;
    let rows = |pct: f64| ((pct / 100.0) * height as f64).round().clamp(0.0, height as f64) as u16;

    let buf = f.buffer_mut();
    let block_str = "█".repeat(bar_width);
    let mut paint = |x: u16, from: u16, count: u16, color: Color| {
        for r in from..(from + count).min(height) {
            buf.set_string(x, floor - r, &block_str, Style::default().fg(color));
        }
    };

    for (i, bar) in chart.bars.iter().enumerate() {
        let x = area.x + i as u16 * slot;
        paint(x, 0, rows(bar.total_pct), Color::Red);
        paint(x, 0, rows(bar.resolved_pct), Color::Green);
        if let Some(seg) = &bar.pending_segment {
            paint(x, rows(seg.bottom_pct), rows(seg.height_pct), Color::Yellow);
        }
    }

    for (i, bar) in chart.bars.iter().enumerate() {
        let x = area.x + i as u16 * slot;
        buf.set_stringn(x, area.y + height, &bar.hour, slot as usize, Style::default().fg(Color::Gray));
    }
}

pub fn render_help_panel(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(heading("Feeds:")),
        Line::from("  ←↑↓→  Move feed cursor"),
        Line::from("  Enter Expand selected feed"),
        Line::from("  Esc/X Close expanded feed"),
        Line::from(""),
        Line::from(heading("Map:")),
        Line::from("  Tab   Hover next camera"),
        Line::from("  S-Tab Hover previous camera"),
        Line::from("  Space Select/deselect hovered camera"),
        Line::from("  M     Clear hover"),
        Line::from(""),
        Line::from(heading("General:")),
        Line::from("  ?/H   Toggle this help"),
        Line::from("  Q     Quit"),
        Line::from("  Esc   Quit (when nothing is open)"),
        Line::from(""),
        Line::from(Span::styled("Press ? or H to close", Style::default().fg(Color::DarkGray))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Help")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block).alignment(Alignment::Left), area);
}
