//! Locating the state-initialization call in component source.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use ngport_core::{ExtractError, StateList};

use crate::grammar::parse_string_list;

/// Call name that declares a piece of component state.
pub const STATE_HOOK_MARKER: &str = "useState";

/// `useState( [ ... ] )` with no `]` inside the brackets. Group 1 is the
/// bracketed literal.
static STATE_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}\(\s*(\[[^\]]*\])\s*\)",
        regex::escape(STATE_HOOK_MARKER)
    ))
    .expect("Invalid state call regex")
});

/// Find the bracketed literal of the first state-initialization call.
///
/// Returns the literal text and its byte offset in `source`.
pub fn find_state_literal(source: &str) -> Option<(&str, usize)> {
    STATE_CALL_REGEX
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| (m.as_str(), m.start()))
}

/// Extract the initial state, reporting why extraction failed.
///
/// Only the first call in document order is considered. If its literal is
/// malformed, later calls are not tried.
pub fn try_extract_initial_state(source: &str) -> Result<StateList, ExtractError> {
    let (literal, offset) = find_state_literal(source).ok_or(ExtractError::NoMatch)?;
    debug!(offset, literal, "found state literal");
    parse_string_list(literal)
}

/// Extract the initial state, or an empty list if there is none.
///
/// Never fails: a missing call and a malformed literal both yield an empty
/// list.
pub fn extract_initial_state(source: &str) -> StateList {
    match try_extract_initial_state(source) {
        Ok(list) => {
            debug!(count = list.len(), "extracted initial state");
            list
        }
        Err(err) => {
            debug!(error = %err, "no usable initial state");
            StateList::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TODO_LIST: &str = r#"import React, { useState } from 'react';

export default function TodoList() {
  const [todos, setTodos] = useState(['Buy milk', 'Walk dog']);
  const [newTodo, setNewTodo] = useState('');

  return <ul>{todos.map(t => <li>{t}</li>)}</ul>;
}
"#;

    #[test]
    fn test_extract_populated() {
        let list = extract_initial_state(TODO_LIST);
        assert_eq!(list, StateList::from(["Buy milk", "Walk dog"]));
    }

    #[test]
    fn test_extract_empty_literal() {
        let list = extract_initial_state("const [todos, setTodos] = useState([]);");
        assert!(list.is_empty());
        assert_eq!(
            try_extract_initial_state("const [todos, setTodos] = useState([]);"),
            Ok(StateList::new())
        );
    }

    #[test]
    fn test_extract_whitespace_variants() {
        for source in [
            "useState([ 'A', 'B' ])",
            "useState(['A','B'])",
            "useState(  [\n  'A',\n  'B'\n]  )",
            "React.useState([\"A\", 'B'])",
        ] {
            assert_eq!(
                extract_initial_state(source),
                StateList::from(["A", "B"]),
                "source: {source}"
            );
        }
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(
            try_extract_initial_state("const todos = ['A', 'B'];"),
            Err(ExtractError::NoMatch)
        );
        assert!(extract_initial_state("").is_empty());
    }

    #[test]
    fn test_non_list_call_skipped() {
        let source = "const [n] = useState(0);\nconst [todos] = useState(['A']);";
        assert_eq!(extract_initial_state(source), StateList::from(["A"]));
    }

    #[test]
    fn test_first_match_wins() {
        let source = "useState(['first']); useState(['second']);";
        assert_eq!(extract_initial_state(source), StateList::from(["first"]));
    }

    #[test]
    fn test_malformed_first_match_does_not_fall_through() {
        let source = "useState([1, 2]); useState(['later']);";
        assert!(matches!(
            try_extract_initial_state(source),
            Err(ExtractError::MalformedLiteral { .. })
        ));
        assert!(extract_initial_state(source).is_empty());
    }

    #[test]
    fn test_unsupported_literals() {
        assert!(extract_initial_state("useState([1, 2, 3])").is_empty());
        assert!(extract_initial_state("useState([true, false])").is_empty());
        assert!(extract_initial_state("useState(['a', ['b']])").is_empty());
    }

    #[test]
    fn test_unbalanced_brackets() {
        assert!(extract_initial_state("useState(['a', 'b')").is_empty());
        assert!(extract_initial_state("useState('a', 'b'])").is_empty());
        assert!(extract_initial_state("useState(['a'").is_empty());
    }

    #[test]
    fn test_code_payload_is_not_evaluated() {
        let source = "useState([__import__('os').system('x')])";
        assert!(matches!(
            try_extract_initial_state(source),
            Err(ExtractError::MalformedLiteral { .. })
        ));
        assert!(extract_initial_state(source).is_empty());
    }

    #[test]
    fn test_find_state_literal_offset() {
        let source = "x = useState(['a'])";
        assert_eq!(find_state_literal(source), Some(("['a']", 13)));
    }

    proptest! {
        #[test]
        fn prop_round_trip(items in prop::collection::vec("[a-zA-Z0-9 ,.!?-]{0,16}", 0..8)) {
            let rendered: Vec<String> = items.iter().map(|s| format!("'{}'", s)).collect();
            let source = format!("const [x, setX] = useState([{}]);", rendered.join(", "));
            prop_assert_eq!(extract_initial_state(&source).into_inner(), items);
        }

        #[test]
        fn prop_never_panics(source in ".*") {
            let _ = extract_initial_state(&source);
        }

        #[test]
        fn prop_without_marker_is_empty(source in "[^u]*") {
            prop_assert!(extract_initial_state(&source).is_empty());
        }
    }
}
