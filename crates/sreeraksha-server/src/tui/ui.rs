use crate::snapshot::{DashboardSnapshot, FeedCard};
use crate::tui::app::{TuiApp, FEED_COLUMNS};
use crate::tui::keys::key_to_action;
use crate::tui::widgets;
use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};
use std::io;
use std::time::Duration;
use tokio::time::interval;

pub async fn run_tui(mut app: TuiApp) -> anyhow::Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        return Err(anyhow::anyhow!("TUI requires an interactive terminal"));
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = event_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut TuiApp) -> anyhow::Result<()> {
    let mut redraw = interval(Duration::from_millis(150));

    loop {
        let snapshot = DashboardSnapshot::from_state(&app.state).await;
        terminal.draw(|f| render_ui(f, app, &snapshot))?;

        if event::poll(Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = key_to_action(key.code) {
                        if app.handle_action(action) {
                            return Ok(());
                        }
                    }
                }
            }
        }

        redraw.tick().await;
    }
}

pub(crate) fn render_ui(f: &mut Frame, app: &TuiApp, snapshot: &DashboardSnapshot) {
    let size = f.size();

    // Layout: Header | Main | Footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main
            Constraint::Length(3), // Footer
        ])
        .split(size);

    widgets::render_header(f, chunks[0], snapshot);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    widgets::render_feed_grid(f, left[0], &snapshot.feeds, app.feed_cursor, FEED_COLUMNS);
    widgets::render_distress_panel(f, left[1], &snapshot.distress);
    widgets::render_map(f, right[0], &snapshot.map, &app.map);
    widgets::render_alert_chart(f, right[1], &snapshot.chart);

    render_footer(f, chunks[2]);

    if let Some(feed) = app.modal.selected_feed() {
        let modal_area = centered_rect(70, 70, size);
        widgets::render_feed_modal(f, modal_area, &FeedCard::from_feed(feed), snapshot.current_time);
    }

    if app.show_help {
        let help_area = centered_rect(60, 70, size);
        widgets::render_help_panel(f, help_area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_footer(f: &mut Frame, area: Rect) {
    let line = Line::from(
        "[←↑↓→]Select [Enter]Expand [Esc/X]Close [Tab]Map hover [Space]Map select [?]Help [Q]uit",
    );

    let block = Block::default().borders(Borders::ALL);
    let paragraph = Paragraph::new(vec![line])
        .block(block)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::tui::keys::TuiAction;
    use ratatui::backend::TestBackend;

    async fn rendered(app: &TuiApp) -> String {
        let snapshot = DashboardSnapshot::from_state(&app.state).await;
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();
        terminal.draw(|f| render_ui(f, app, &snapshot)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_renders_all_panels() {
        let app = TuiApp::new(AppState::default());
        let screen = rendered(&app).await;
        assert!(screen.contains("SreeRaksha Monitoring"));
        assert!(screen.contains("21/24 cameras online"));
        assert!(screen.contains("Main Junction Cam-01"));
        assert!(screen.contains("Distress Detection"));
        assert!(screen.contains("Camera Network Map"));
        assert!(screen.contains("Alert Frequency"));
        assert!(screen.contains("Resolution Rate"));
        assert!(!screen.contains("Capture Evidence"));
    }

    #[tokio::test]
    async fn test_modal_overlay() {
        let mut app = TuiApp::new(AppState::default());
        app.handle_action(TuiAction::OpenFeed);
        let screen = rendered(&app).await;
        assert!(screen.contains("Capture Evidence"));
        assert!(screen.contains("Alert Response Team"));
        assert!(screen.contains("DISTRESS DETECTED"));

        app.handle_action(TuiAction::CloseModal);
        let screen = rendered(&app).await;
        assert!(!screen.contains("Capture Evidence"));
    }

    #[tokio::test]
    async fn test_tooltip_follows_hover() {
        let mut app = TuiApp::new(AppState::default());
        assert!(!rendered(&app).await.contains("Last seen: 2 min ago"));

        app.handle_action(TuiAction::NextMarker);
        let screen = rendered(&app).await;
        assert!(screen.contains("Status: alert"));
        assert!(screen.contains("Alert Level: high"));
    }

    #[tokio::test]
    async fn test_help_overlay() {
        let mut app = TuiApp::new(AppState::default());
        app.handle_action(TuiAction::ToggleHelp);
        assert!(rendered(&app).await.contains("Toggle this help"));
    }
}
