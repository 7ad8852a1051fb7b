use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuiAction {
    Quit,
    Back,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    OpenFeed,
    CloseModal,
    NextMarker,
    PrevMarker,
    ClickMarker,
    ClearHover,
    ToggleHelp,
}

pub fn key_to_action(key: KeyCode) -> Option<TuiAction> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(TuiAction::Quit),
        KeyCode::Esc => Some(TuiAction::Back),
        KeyCode::Left => Some(TuiAction::MoveLeft),
        KeyCode::Right => Some(TuiAction::MoveRight),
        KeyCode::Up => Some(TuiAction::MoveUp),
        KeyCode::Down => Some(TuiAction::MoveDown),
        KeyCode::Enter => Some(TuiAction::OpenFeed),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(TuiAction::CloseModal),
        KeyCode::Tab => Some(TuiAction::NextMarker),
        KeyCode::BackTab => Some(TuiAction::PrevMarker),
        KeyCode::Char(' ') => Some(TuiAction::ClickMarker),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(TuiAction::ClearHover),
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => Some(TuiAction::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        assert_eq!(key_to_action(KeyCode::Enter), Some(TuiAction::OpenFeed));
        assert_eq!(key_to_action(KeyCode::Esc), Some(TuiAction::Back));
        assert_eq!(key_to_action(KeyCode::Tab), Some(TuiAction::NextMarker));
        assert_eq!(key_to_action(KeyCode::Char(' ')), Some(TuiAction::ClickMarker));
        assert_eq!(key_to_action(KeyCode::Char('z')), None);
    }
}
