//! Read, extract, generate, write.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use ngport_codegen::{AngularGenerator, CodeGenerator, ComponentNaming};
use ngport_core::ComponentArtifacts;
use ngport_parser::extract_initial_state;

use crate::config::PortConfig;

/// Outcome of one run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
    /// Number of items extracted from the source (0 means the default was used).
    pub extracted_items: usize,
}

impl RunSummary {
    pub fn used_default_state(&self) -> bool {
        self.extracted_items == 0
    }
}

/// Transform component source text into Angular artifacts. No I/O.
pub fn port_source(source: &str, naming: ComponentNaming) -> Result<(ComponentArtifacts, usize)> {
    let state = extract_initial_state(source);
    let generator = AngularGenerator::with_naming(naming);
    let artifacts = generator
        .generate(&state)
        .with_context(|| format!("generate {} component", generator.framework_name()))?;
    Ok((artifacts, state.len()))
}

/// Write `artifacts` into `dir`, creating it if needed.
pub fn write_artifacts(dir: &Path, artifacts: &ComponentArtifacts) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("create output directory {}", dir.display()))?;

    let mut written = Vec::new();
    for file in artifacts.files() {
        let path = dir.join(&file.path);
        fs::write(&path, &file.content)
            .with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), bytes = file.content.len(), "wrote file");
        written.push(path);
    }
    Ok(written)
}

/// Run the whole port for `config`.
pub fn run(config: &PortConfig) -> Result<RunSummary> {
    let span = info_span!("port", input = %config.input_path.display());
    let _guard = span.enter();

    let source = fs::read_to_string(&config.input_path)
        .with_context(|| format!("read {}", config.input_path.display()))?;
    debug!(bytes = source.len(), "read component source");

    let naming = ComponentNaming::new(&config.component_name)
        .with_context(|| format!("component name {:?}", config.component_name))?;
    let (artifacts, extracted_items) = port_source(&source, naming)?;
    if extracted_items == 0 {
        info!("no initial state extracted, using default items");
    } else {
        info!(items = extracted_items, "extracted initial state");
    }

    let written = write_artifacts(&config.output_dir, &artifacts)?;
    info!(files = written.len(), output = %config.output_dir.display(), "generation complete");

    Ok(RunSummary {
        written,
        extracted_items,
    })
}
