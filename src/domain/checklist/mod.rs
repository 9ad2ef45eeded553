pub mod daily;
pub mod setup;
pub mod state;

pub use daily::{DAILY_FLAG_COUNT, DailyChecklist, DailyFlag, DailyGroup};
pub use setup::{SETUP_FLAG_COUNT, SetupChecklist, SetupFlag};
pub use state::{DEFAULT_STATE_KEY, DecodedState, PersistedState};
