use crate::state::AppState;
use crate::tui::keys::TuiAction;
use sreeraksha_core::feeds::FeedModal;
use sreeraksha_core::map::MapSelection;
use tracing::info;

/// Feed grid column count; arrow keys move within it.
pub const FEED_COLUMNS: usize = 2;

/// Terminal view state. The live counters stay in `AppState`; everything
/// here is local to one terminal session.
pub struct TuiApp {
    pub state: AppState,
    pub feed_cursor: usize,
    pub modal: FeedModal,
    pub map: MapSelection,
    pub map_cursor: Option<usize>, // Marker currently hovered via Tab
    pub show_help: bool,
}

impl TuiApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            feed_cursor: 0,
            modal: FeedModal::default(),
            map: MapSelection::default(),
            map_cursor: None,
            show_help: false,
        }
    }

    fn feed_count(&self) -> usize {
        self.state.registry.feeds().len()
    }

    fn move_cursor(&mut self, action: TuiAction) {
        let n = self.feed_count();
        let c = self.feed_cursor;
        self.feed_cursor = match action {
            TuiAction::MoveLeft if c % FEED_COLUMNS > 0 => c - 1,
            TuiAction::MoveRight if c % FEED_COLUMNS + 1 < FEED_COLUMNS && c + 1 < n => c + 1,
            TuiAction::MoveUp if c >= FEED_COLUMNS => c - FEED_COLUMNS,
            TuiAction::MoveDown if c + FEED_COLUMNS < n => c + FEED_COLUMNS,
            _ => c,
        };
    }

    fn open_selected_feed(&mut self) {
        let Some(feed) = self.state.registry.feeds().get(self.feed_cursor) else {
            return;
        };
        if self.modal.open(feed) {
            info!("Opened feed {} ({})", feed.id, feed.name);
            crate::metrics::record_modal_open(&feed.id);
        }
    }

    fn hover_step(&mut self, forward: bool) {
        let locations = self.state.registry.locations();
        let n = locations.len();
        if n == 0 {
            return;
        }
        let next = match (self.map_cursor, forward) {
            (Some(i), true) => (i + 1) % n,
            (Some(i), false) => (i + n - 1) % n,
            (None, true) => 0,
            (None, false) => n - 1,
        };
        self.map.hover_leave();
        self.map.hover_enter(&locations[next].id);
        self.map_cursor = Some(next);
    }

    /// Returns true if the app should quit.
    pub fn handle_action(&mut self, action: TuiAction) -> bool {
        match action {
            TuiAction::Quit => return true,
            TuiAction::Back => {
                if self.show_help {
                    self.show_help = false;
                } else if self.modal.is_open() {
                    self.modal.close();
                } else {
                    return true;
                }
            }
            TuiAction::MoveLeft | TuiAction::MoveRight | TuiAction::MoveUp | TuiAction::MoveDown => {
                // grid is behind the modal
                if !self.modal.is_open() {
                    self.move_cursor(action);
                }
            }
            TuiAction::OpenFeed => self.open_selected_feed(),
            TuiAction::CloseModal => self.modal.close(),
            TuiAction::NextMarker => self.hover_step(true),
            TuiAction::PrevMarker => self.hover_step(false),
            TuiAction::ClickMarker => {
                if let Some(id) = self.map.hovered().map(str::to_string) {
                    self.map.click(&id);
                }
            }
            TuiAction::ClearHover => {
                self.map.hover_leave();
                self.map_cursor = None;
            }
            TuiAction::ToggleHelp => self.show_help = !self.show_help,
        }
        false
    }
}
