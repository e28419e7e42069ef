//! Code generators for target UI frameworks.

#[cfg(feature = "angular")]
mod angular;

mod templates;

#[cfg(feature = "angular")]
pub use angular::{AngularGenerator, ADD_METHOD, INPUT_FIELD, STATE_FIELD};

pub use templates::{ts_single_quoted, TemplateEngine};

use crate::error::Result;
use crate::naming::ComponentNaming;
use ngport_core::{ComponentArtifacts, GeneratedFile, StateList};

/// Initial state used when none could be extracted.
pub const DEFAULT_INITIAL_STATE: [&str; 2] = ["Learn React", "Build a transpiler"];

/// The state to render: `state` itself, or [`DEFAULT_INITIAL_STATE`] when it
/// is empty.
pub fn effective_state(state: &StateList) -> Vec<&str> {
    if state.is_empty() {
        DEFAULT_INITIAL_STATE.to_vec()
    } else {
        state.iter().map(String::as_str).collect()
    }
}

/// Common trait for code generators.
pub trait CodeGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Names used for the generated component and its files.
    fn naming(&self) -> &ComponentNaming;

    /// Generate the component definition for `state`.
    fn generate_component(&self, state: &StateList) -> Result<String>;

    /// Generate the component's template. Independent of state.
    fn generate_template(&self) -> String;

    /// Generate both artifacts with their file names.
    fn generate(&self, state: &StateList) -> Result<ComponentArtifacts> {
        let naming = self.naming();
        Ok(ComponentArtifacts {
            component: GeneratedFile::new(
                naming.component_file(),
                self.generate_component(state)?,
            ),
            template: GeneratedFile::new(naming.template_file(), self.generate_template()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_state_default() {
        assert_eq!(
            effective_state(&StateList::new()),
            vec!["Learn React", "Build a transpiler"]
        );
    }

    #[test]
    fn test_effective_state_keeps_order() {
        let state = StateList::from(["Walk dog", "Buy milk"]);
        assert_eq!(effective_state(&state), vec!["Walk dog", "Buy milk"]);
    }
}
