pub mod config;
pub mod models;
pub mod date;
pub mod parser;
pub mod storage;
pub mod appender;
pub mod splitter;
pub mod index;

pub use config::Config;
pub use models::*;
pub use appender::{AppendOutcome, WordAppender};
pub use splitter::{SplitReport, WordSplitter};
