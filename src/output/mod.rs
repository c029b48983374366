mod error_output;
mod json;
mod progress;
mod report;
pub mod svg;
mod text;

pub use error_output::ErrorOutput;
pub use json::{JsonFormatter, RecordEntry, ResultsRecord};
pub use progress::BuildProgress;
pub use report::{JSON_REPORT_FILE, Report, ReportEmitter, SVG_REPORT_FILE};
pub use text::{ColorMode, TABLE_TITLE, TextFormatter};

pub(crate) use text::ansi;
