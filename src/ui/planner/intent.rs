use crate::session::TripSelection;
use crate::ui::mvi::Intent;
use crate::ui::planner::state::StatusLine;

#[derive(Debug, Clone)]
pub enum PlannerIntent {
    FocusNext,
    FocusPrev,
    /// Next option of the focused selector, or one more day.
    Next,
    /// Previous option of the focused selector, or one day less.
    Prev,
    /// Typed character: appended to the origin, or a digit of the duration.
    InputChar(char),
    Backspace,
    /// Start over from the given selection.
    Reset { selection: TripSelection },
    SetStatus(StatusLine),
    ClearStatus,
}

impl Intent for PlannerIntent {}
