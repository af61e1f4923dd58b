pub mod control;
pub mod loader;
pub mod worklist;
pub mod worklist_entry;

pub use control::{ControlState, LogLevel};
pub use loader::{FetchError, WorklistClient};
pub use worklist::WorklistState;
pub use worklist_entry::{BadgeTone, StatusIcon, WorklistEntry};
