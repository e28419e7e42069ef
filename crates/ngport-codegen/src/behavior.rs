//! Executable model of the generated component's behavior.
//!
//! [`TodoListModel`] mirrors the fields and the `addTodo` method emitted by
//! the Angular generator, so the method's contract can be tested in Rust.
//! Keep it in step with `COMPONENT_TEMPLATE` in `generators::angular`.

use ngport_core::StateList;

use crate::generators::effective_state;

/// Fields of the generated component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListModel {
    /// `todos: string[]`
    pub todos: Vec<String>,
    /// `newTodo: string`, the pending input.
    pub new_todo: String,
}

impl TodoListModel {
    /// Component state right after construction. An empty `initial` starts
    /// with the default items, as the generated field initializer does.
    pub fn new(initial: &StateList) -> Self {
        Self {
            todos: effective_state(initial)
                .into_iter()
                .map(String::from)
                .collect(),
            new_todo: String::new(),
        }
    }

    /// `addTodo()`: if the trimmed input is non-empty, append the input as
    /// typed and clear it. Blank input leaves both fields untouched.
    ///
    /// Returns whether an item was appended.
    pub fn add_todo(&mut self) -> bool {
        if js_trim(&self.new_todo).is_empty() {
            return false;
        }
        self.todos.push(std::mem::take(&mut self.new_todo));
        true
    }
}

/// `String.prototype.trim`: Unicode whitespace plus U+FEFF, which
/// `str::trim` keeps.
fn js_trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::DEFAULT_INITIAL_STATE;

    fn model() -> TodoListModel {
        TodoListModel::new(&StateList::from(["Learn React"]))
    }

    #[test]
    fn test_new_starts_with_empty_input() {
        let m = model();
        assert_eq!(m.todos, vec!["Learn React"]);
        assert_eq!(m.new_todo, "");
    }

    #[test]
    fn test_add_appends_and_resets() {
        let mut m = model();
        m.new_todo = "Ship it".to_string();
        assert!(m.add_todo());
        assert_eq!(m.todos, vec!["Learn React", "Ship it"]);
        assert_eq!(m.new_todo, "");
    }

    #[test]
    fn test_add_keeps_untrimmed_text() {
        let mut m = model();
        m.new_todo = "  padded ".to_string();
        assert!(m.add_todo());
        assert_eq!(m.todos.last().map(String::as_str), Some("  padded "));
    }

    #[test]
    fn test_empty_initial_uses_default_items() {
        let m = TodoListModel::new(&StateList::new());
        assert_eq!(m.todos, DEFAULT_INITIAL_STATE);
    }

    #[cfg(feature = "angular")]
    #[test]
    fn test_model_matches_generated_initializer() {
        use crate::generators::{AngularGenerator, CodeGenerator};

        let gen = AngularGenerator::new();
        for state in [StateList::new(), StateList::from(["Buy milk", "Walk dog"])] {
            let m = TodoListModel::new(&state);
            let quoted: Vec<String> = m.todos.iter().map(|t| format!("'{}'", t)).collect();
            let code = gen.generate_component(&state).unwrap();
            assert!(code.contains(&format!("todos: string[] = [{}];", quoted.join(", "))));
        }
    }

    #[test]
    fn test_byte_order_mark_is_blank() {
        let mut m = model();
        m.new_todo = "\u{FEFF}".to_string();
        assert!(!m.add_todo());
        m.new_todo = " \u{FEFF}\u{00A0}".to_string();
        assert!(!m.add_todo());
        assert_eq!(m.todos, vec!["Learn React"]);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut m = model();
        m.new_todo = " \t\n".to_string();
        assert!(!m.add_todo());
        assert_eq!(m.todos, vec!["Learn React"]);
        assert_eq!(m.new_todo, " \t\n");

        m.new_todo.clear();
        assert!(!m.add_todo());
        assert_eq!(m.todos.len(), 1);
    }
}
