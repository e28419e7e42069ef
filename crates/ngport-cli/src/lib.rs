//! I/O driver for ngport: reads the React component, writes the Angular files.

pub mod config;
pub mod logging;
pub mod pipeline;

pub use config::PortConfig;
pub use pipeline::{port_source, run, write_artifacts, RunSummary};
