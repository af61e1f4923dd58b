pub mod control_panel;
pub mod header;
pub mod worklist_table;

pub use control_panel::control_panel;
pub use header::header_panel;
pub use worklist_table::worklist_panel;
