mod intent;
mod reducer;
mod state;

pub use intent::PlannerIntent;
pub use reducer::{PlannerReducer, MAX_DAYS};
pub use state::{Field, PlannerState, StatusKind, StatusLine};
