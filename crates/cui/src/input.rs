use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    ToggleSelect,
    ClearSelection,
    Deal,
    PlaySelected,
    RedrawSelected,
    SortByRank,
    SortBySuit,
    ToggleDeckView,
    EnterOrLeaveShop,
    BuySelected,
    NewRun,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::ClearSelection,
        KeyCode::Left => InputAction::MoveLeft,
        KeyCode::Right => InputAction::MoveRight,
        KeyCode::Up => InputAction::MoveUp,
        KeyCode::Down => InputAction::MoveDown,
        KeyCode::Char(' ') => InputAction::ToggleSelect,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char('h') => InputAction::MoveLeft,
        KeyCode::Char('l') => InputAction::MoveRight,
        KeyCode::Char('k') => InputAction::MoveUp,
        KeyCode::Char('j') => InputAction::MoveDown,
        KeyCode::Char('d') => InputAction::Deal,
        KeyCode::Char('p') => InputAction::PlaySelected,
        KeyCode::Char('x') => InputAction::RedrawSelected,
        KeyCode::Char('r') => InputAction::SortByRank,
        KeyCode::Char('u') => InputAction::SortBySuit,
        KeyCode::Char('v') => InputAction::ToggleDeckView,
        KeyCode::Char('s') => InputAction::EnterOrLeaveShop,
        KeyCode::Char('b') => InputAction::BuySelected,
        KeyCode::Char('n') => InputAction::NewRun,
        _ => InputAction::None,
    }
}
