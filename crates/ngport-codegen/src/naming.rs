//! Names derived from a component's base name.

use convert_case::{Case, Casing};

use crate::error::{CodegenError, Result};

/// Base name of the component this tool ports.
pub const DEFAULT_COMPONENT_NAME: &str = "TodoList";

/// Selector prefix for generated Angular components.
const SELECTOR_PREFIX: &str = "app";

/// Class name, selector and file names for one generated component.
///
/// Everything is derived from a single PascalCase base name, so `TodoList`
/// becomes selector `app-todo-list`, class `TodoListComponent` and files
/// `TodoList.component.{ts,html,css}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentNaming {
    base: String,
}

impl ComponentNaming {
    /// Derive names from `base`, converting it to PascalCase.
    pub fn new(base: &str) -> Result<Self> {
        let trimmed = base.trim();
        if trimmed.is_empty() {
            return Err(CodegenError::InvalidComponentName {
                name: base.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == ' ')
        {
            return Err(CodegenError::InvalidComponentName {
                name: base.to_string(),
                reason: "only ASCII letters, digits, '_', '-' and spaces are allowed".to_string(),
            });
        }
        let pascal = trimmed.to_case(Case::Pascal);
        if !pascal.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(CodegenError::InvalidComponentName {
                name: base.to_string(),
                reason: "name must start with a letter".to_string(),
            });
        }
        Ok(Self { base: pascal })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn class_name(&self) -> String {
        format!("{}Component", self.base)
    }

    pub fn selector(&self) -> String {
        format!("{}-{}", SELECTOR_PREFIX, self.base.to_case(Case::Kebab))
    }

    pub fn component_file(&self) -> String {
        format!("{}.component.ts", self.base)
    }

    pub fn template_file(&self) -> String {
        format!("{}.component.html", self.base)
    }

    pub fn style_file(&self) -> String {
        format!("{}.component.css", self.base)
    }
}

impl Default for ComponentNaming {
    fn default() -> Self {
        Self {
            base: DEFAULT_COMPONENT_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let naming = ComponentNaming::default();
        assert_eq!(naming.class_name(), "TodoListComponent");
        assert_eq!(naming.selector(), "app-todo-list");
        assert_eq!(naming.component_file(), "TodoList.component.ts");
        assert_eq!(naming.template_file(), "TodoList.component.html");
        assert_eq!(naming.style_file(), "TodoList.component.css");
    }

    #[test]
    fn test_new_matches_default() {
        assert_eq!(
            ComponentNaming::new(DEFAULT_COMPONENT_NAME).unwrap(),
            ComponentNaming::default()
        );
    }

    #[test]
    fn test_new_normalizes_case() {
        let naming = ComponentNaming::new("shopping_cart").unwrap();
        assert_eq!(naming.base(), "ShoppingCart");
        assert_eq!(naming.selector(), "app-shopping-cart");
    }

    #[test]
    fn test_invalid_names() {
        assert!(ComponentNaming::new("").is_err());
        assert!(ComponentNaming::new("   ").is_err());
        assert!(ComponentNaming::new("Todo<List>").is_err());
        assert!(ComponentNaming::new("1List").is_err());
    }
}
