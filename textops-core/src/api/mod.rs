//! Configured facade
//!
//! [`TextOps`] carries a [`Config`] (locale, sentence separator, count mode)
//! so callers do not depend on the process-wide default locale.

mod config;
mod output;
mod processor;


pub use config::{defaults, Config, ConfigBuilder};
pub use output::TextStats;
pub use processor::TextOps;
