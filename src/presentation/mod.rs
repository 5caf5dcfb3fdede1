pub mod last_saved;
pub mod report;
pub mod status;

pub use last_saved::last_saved_text;
pub use report::DetailedReport;
pub use status::{build_status_text, build_tooltip, group_thousands, StatusLine};
