use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::MoveLeft => app.move_hand_cursor(false),
        InputAction::MoveRight => app.move_hand_cursor(true),
        InputAction::MoveUp => app.move_shop_cursor(false),
        InputAction::MoveDown => app.move_shop_cursor(true),
        InputAction::ToggleSelect => app.toggle_selection(),
        InputAction::ClearSelection => {
            if app.show_help {
                app.show_help = false;
            } else if app.show_deck {
                app.show_deck = false;
            } else {
                app.clear_selection();
            }
        }
        InputAction::Deal => app.deal(),
        InputAction::PlaySelected => app.play_selected(),
        InputAction::RedrawSelected => app.redraw_selected(),
        InputAction::SortByRank => app.sort_by_rank(),
        InputAction::SortBySuit => app.sort_by_suit(),
        InputAction::ToggleDeckView => app.show_deck = !app.show_deck,
        InputAction::EnterOrLeaveShop => app.enter_or_leave_shop(),
        InputAction::BuySelected => app.buy_selected(),
        InputAction::NewRun => app.new_run(),
    }
}
