use crate::session::TripSession;
use crate::ui::mvi::UiState;

/// Form field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Origin,
    State,
    Style,
    City,
    Days,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Origin,
        Field::State,
        Field::Style,
        Field::City,
        Field::Days,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Origin => "Origin city",
            Field::State => "State",
            Field::Style => "Travel style",
            Field::City => "City",
            Field::Days => "Trip duration (days)",
        }
    }

    pub fn next(self) -> Field {
        self.step(1)
    }

    pub fn prev(self) -> Field {
        self.step(-1)
    }

    /// Fields cycled with Left/Right.
    pub fn is_selector(self) -> bool {
        matches!(self, Field::State | Field::Style | Field::City)
    }

    fn step(self, delta: isize) -> Field {
        let len = Self::ALL.len() as isize;
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as isize;
        Self::ALL[(index + delta).rem_euclid(len) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlannerState {
    pub session: TripSession,
    pub focus: Field,
    /// Outcome of the last copy/export, cleared by the next edit.
    pub status: Option<StatusLine>,
    /// Days was backspaced past its last digit: the next digit replaces the
    /// placeholder minimum instead of extending it.
    pub days_cleared: bool,
}

impl UiState for PlannerState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_around() {
        assert_eq!(Field::Days.next(), Field::Origin);
        assert_eq!(Field::Origin.prev(), Field::Days);
        assert_eq!(Field::State.next(), Field::Style);
    }

    #[test]
    fn only_dropdowns_are_selectors() {
        assert!(Field::City.is_selector());
        assert!(!Field::Origin.is_selector());
        assert!(!Field::Days.is_selector());
    }
}
