//! Run configuration.
//!
//! The tool ports exactly one component from a fixed location. The paths are
//! relative to the working directory, matching a layout where `react/`,
//! `generated/` and the tool's own directory are siblings.

use std::path::PathBuf;

use ngport_codegen::DEFAULT_COMPONENT_NAME;

/// Default values for configuration
const DEFAULT_INPUT_PATH: &str = "../react/TodoList.jsx";
const DEFAULT_OUTPUT_DIR: &str = "../generated";

/// Where to read the React component and where to write the Angular files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortConfig {
    /// React component source file.
    pub input_path: PathBuf,
    /// Directory receiving the generated files. Created if absent.
    pub output_dir: PathBuf,
    /// Base name of the generated component.
    pub component_name: String,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
        }
    }
}

impl PortConfig {
    /// Display name of the output directory for status messages.
    pub fn output_dir_name(&self) -> String {
        self.output_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_dir.display().to_string())
    }
}
