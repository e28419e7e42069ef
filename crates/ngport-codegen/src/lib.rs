//! Code generation from extracted React state to Angular components.
//!
//! The generator takes the initial state list pulled out of a React
//! component and emits an Angular component definition plus its template.
//! An empty list falls back to [`DEFAULT_INITIAL_STATE`].
//!
//! # Features
//!
//! - `angular` - Generate Angular/TypeScript components (default)
//!
//! # Example
//!
//! ```
//! use ngport_codegen::{AngularGenerator, CodeGenerator};
//! use ngport_core::StateList;
//!
//! let generator = AngularGenerator::new();
//! let code = generator.generate_component(&StateList::from(["Buy milk"]))?;
//! assert!(code.contains("todos: string[] = ['Buy milk'];"));
//! # Ok::<(), ngport_codegen::CodegenError>(())
//! ```

pub mod behavior;
pub mod error;
pub mod generators;
pub mod naming;

pub use behavior::TodoListModel;
pub use error::{CodegenError, Result};
pub use generators::{effective_state, CodeGenerator, TemplateEngine, DEFAULT_INITIAL_STATE};
pub use naming::{ComponentNaming, DEFAULT_COMPONENT_NAME};

#[cfg(feature = "angular")]
pub use generators::AngularGenerator;
