use crate::session::TripSession;
use crate::ui::mvi::Reducer;
use crate::ui::planner::intent::PlannerIntent;
use crate::ui::planner::state::{Field, PlannerState, StatusLine};

/// Upper bound for a typed duration.
pub const MAX_DAYS: u32 = 999;

pub struct PlannerReducer;

impl Reducer for PlannerReducer {
    type State = PlannerState;
    type Intent = PlannerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let PlannerState {
            mut session,
            focus,
            status,
            days_cleared,
        } = state;

        match intent {
            PlannerIntent::FocusNext => unchanged(session, focus.next(), status),
            PlannerIntent::FocusPrev => unchanged(session, focus.prev(), status),
            PlannerIntent::Next => step(session, focus, status, 1),
            PlannerIntent::Prev => step(session, focus, status, -1),
            PlannerIntent::InputChar(ch) => match focus {
                Field::Origin => {
                    let mut origin = session.selection().origin.clone();
                    origin.push(ch);
                    session.set_origin(origin);
                    edited(session, focus)
                }
                Field::Days => match ch.to_digit(10) {
                    Some(digit) => {
                        let current = if days_cleared {
                            0
                        } else {
                            session.selection().days
                        };
                        let days = current.saturating_mul(10).saturating_add(digit);
                        session.set_days(days.min(MAX_DAYS));
                        PlannerState {
                            days_cleared: days == 0,
                            ..edited(session, focus)
                        }
                    }
                    None => PlannerState {
                        session,
                        focus,
                        status,
                        days_cleared,
                    },
                },
                _ => unchanged(session, focus, status),
            },
            PlannerIntent::Backspace => match focus {
                Field::Origin => {
                    let mut origin = session.selection().origin.clone();
                    origin.pop();
                    session.set_origin(origin);
                    edited(session, focus)
                }
                Field::Days => {
                    let days = if days_cleared {
                        0
                    } else {
                        session.selection().days / 10
                    };
                    session.set_days(days);
                    PlannerState {
                        days_cleared: days == 0,
                        ..edited(session, focus)
                    }
                }
                _ => unchanged(session, focus, status),
            },
            PlannerIntent::Reset { selection } => PlannerState {
                session: TripSession::new(session.catalog(), selection),
                focus: Field::Origin,
                status: Some(StatusLine::info("Trip reset to defaults")),
                days_cleared: false,
            },
            PlannerIntent::SetStatus(line) => PlannerState {
                session,
                focus,
                status: Some(line),
                days_cleared,
            },
            PlannerIntent::ClearStatus => PlannerState {
                session,
                focus,
                status: None,
                days_cleared,
            },
        }
    }
}

/// Moves the focused selector (or the duration) by `delta`.
fn step(
    mut session: TripSession,
    focus: Field,
    status: Option<StatusLine>,
    delta: isize,
) -> PlannerState {
    match focus {
        Field::State => session.cycle_state(delta),
        Field::Style => session.cycle_style(delta),
        Field::City => session.cycle_city(delta),
        Field::Days => session.adjust_days(delta as i64),
        Field::Origin => return unchanged(session, focus, status),
    }
    edited(session, focus)
}

/// State after a user edit: the previous status no longer applies.
fn edited(session: TripSession, focus: Field) -> PlannerState {
    PlannerState {
        session,
        focus,
        status: None,
        days_cleared: false,
    }
}

fn unchanged(session: TripSession, focus: Field, status: Option<StatusLine>) -> PlannerState {
    PlannerState {
        session,
        focus,
        status,
        days_cleared: false,
    }
}
