//! Extraction of initial component state from React source.
//!
//! The extractor looks for the first `useState([...])` call and parses the
//! bracketed literal with a small `nom` grammar that accepts quoted strings
//! only. Source text is never evaluated.

mod extract;
mod grammar;
mod lexer;

pub use extract::{
    extract_initial_state, find_state_literal, try_extract_initial_state, STATE_HOOK_MARKER,
};
pub use grammar::parse_string_list;

use ngport_core::StateList;

/// Parse a React component and return its initial todo state.
///
/// # Example
///
/// ```
/// use ngport_parser::parse_component;
///
/// let source = "const [todos, setTodos] = useState(['Buy milk', 'Walk dog']);";
/// let state = parse_component(source);
/// assert_eq!(state.as_slice(), ["Buy milk", "Walk dog"]);
/// ```
pub fn parse_component(source: &str) -> StateList {
    extract_initial_state(source)
}
