//! Output rendering
//! Console, JSON and HTML views of the results panel and job grid

pub mod formatter;

pub use formatter::{ConsoleFormatter, HtmlFormatter, JsonFormatter, OutputFormatter, ReportGenerator};
