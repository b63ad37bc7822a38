use crate::clipboard::ClipboardHandler;
use crate::error::ZilTripsError;
use crate::export::export_pdf;
use crate::session::{TripSelection, TripSession};
use crate::ui::mvi::Reducer;
use crate::ui::planner::{Field, PlannerIntent, PlannerReducer, PlannerState, StatusLine};
use std::path::{Path, PathBuf};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the planner state and the side-effect resources around it.
pub struct App {
    should_quit: bool,
    /// Form state (MVI pattern).
    planner: PlannerState,
    /// Selection restored by a reset.
    defaults: TripSelection,
    export_dir: PathBuf,
    /// Clipboard (resource, managed outside MVI).
    clipboard: ClipboardHandler,
}

impl App {
    pub fn new(session: TripSession, export_dir: PathBuf) -> Self {
        let defaults = session.selection().clone();
        Self {
            should_quit: false,
            planner: PlannerState {
                session,
                ..PlannerState::default()
            },
            defaults,
            export_dir,
            clipboard: ClipboardHandler::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn planner(&self) -> &PlannerState {
        &self.planner
    }

    pub fn session(&self) -> &TripSession {
        &self.planner.session
    }

    pub fn focus(&self) -> Field {
        self.planner.focus
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn dispatch(&mut self, intent: PlannerIntent) {
        tracing::trace!(?intent, "Planner intent");
        dispatch_mvi!(self, planner, PlannerReducer, intent);
    }

    /// Restores the selection the app was started with.
    pub fn reset(&mut self) {
        let selection = self.defaults.clone();
        self.dispatch(PlannerIntent::Reset { selection });
    }

    /// Copies the shareable summary to the system clipboard.
    pub fn copy_summary(&mut self) {
        let summary = self.session().summary();
        let status = match self.clipboard.set_text(summary.text()) {
            Ok(()) => {
                tracing::info!("Summary copied to clipboard");
                StatusLine::info("Summary copied to clipboard")
            }
            Err(err) => failure(err.into()),
        };
        self.dispatch(PlannerIntent::SetStatus(status));
    }

    /// Writes the PDF into the export directory.
    pub fn export_pdf(&mut self) -> Option<PathBuf> {
        let summary = self.session().summary();
        let (status, path) = match export_pdf(&summary, &self.export_dir) {
            Ok(path) => (StatusLine::info(format!("Saved {}", path.display())), Some(path)),
            Err(err) => (failure(err.into()), None),
        };
        self.dispatch(PlannerIntent::SetStatus(status));
        path
    }
}

fn failure(err: ZilTripsError) -> StatusLine {
    tracing::warn!(error = %err, "{}", err.user_message());
    StatusLine::error(format!("{}: {}", err.user_message(), err))
}
