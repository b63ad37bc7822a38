use crate::ui::app::App;
use crate::ui::planner::PlannerIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'y') {
        app.copy_summary();
        return;
    }
    if is_ctrl_char(key, 'p') {
        app.export_pdf();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.reset();
        return;
    }

    let intent = match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => PlannerIntent::FocusNext,
        KeyCode::BackTab | KeyCode::Up => PlannerIntent::FocusPrev,
        KeyCode::Right => PlannerIntent::Next,
        KeyCode::Left => PlannerIntent::Prev,
        KeyCode::Backspace => PlannerIntent::Backspace,
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            PlannerIntent::InputChar(ch)
        }
        _ => return,
    };
    app.dispatch(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
