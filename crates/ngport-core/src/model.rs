//! Data passed between the extractor, the generators and the output sink.

/// Ordered initial contents of one piece of component state.
///
/// Element order is the order the values appeared in the source literal and
/// the order they are rendered in generated code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StateList(pub Vec<String>);

impl StateList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for StateList {
    fn from(items: Vec<String>) -> Self {
        StateList(items)
    }
}

impl From<&[&str]> for StateList {
    fn from(items: &[&str]) -> Self {
        StateList(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for StateList {
    fn from(items: [&str; N]) -> Self {
        StateList(items.iter().map(|s| s.to_string()).collect())
    }
}

impl FromIterator<String> for StateList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        StateList(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a StateList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Source files generated for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentArtifacts {
    /// Component definition (class, metadata, fields, behavior).
    pub component: GeneratedFile,
    /// Markup template bound to the component's fields.
    pub template: GeneratedFile,
}

impl ComponentArtifacts {
    /// Files in the order they should be written.
    pub fn files(&self) -> [&GeneratedFile; 2] {
        [&self.component, &self.template]
    }
}
