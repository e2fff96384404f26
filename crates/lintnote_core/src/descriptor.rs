//! Descriptor: the frame of reference a problem's location is resolved in.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::source::LineIndex;

/// The element a problem is attached to.
///
/// Serialized as its fully qualified name only; the line index is bound
/// after loading, from the file the owning response points at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Descriptor {
    full_name: String,
    source: Option<Arc<LineIndex>>,
}

impl Descriptor {
    /// Creates a descriptor without source information.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            source: None,
        }
    }

    /// Attaches the line index of the file this descriptor lives in.
    pub fn with_source(mut self, source: Arc<LineIndex>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replaces the attached line index.
    pub fn set_source(&mut self, source: Arc<LineIndex>) {
        self.source = Some(source);
    }

    /// Fully qualified name, e.g. `acme.library.v1.Book`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Line index of the containing file, if one was bound.
    pub fn source(&self) -> Option<&LineIndex> {
        self.source.as_deref()
    }

    /// Returns true if the descriptor carries no name.
    pub fn is_anonymous(&self) -> bool {
        self.full_name.is_empty()
    }
}

impl From<String> for Descriptor {
    fn from(full_name: String) -> Self {
        Self::new(full_name)
    }
}

impl From<Descriptor> for String {
    fn from(descriptor: Descriptor) -> Self {
        descriptor.full_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_roundtrips_as_name() {
        let descriptor = Descriptor::new("acme.library.v1.Book")
            .with_source(Arc::new(LineIndex::new("message Book {}\n")));

        let json = serde_json::to_string(&descriptor).unwrap();
        assert_eq!(json, "\"acme.library.v1.Book\"");

        let parsed: Descriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.full_name(), "acme.library.v1.Book");
        assert!(parsed.source().is_none());
    }

    #[test]
    fn test_default_is_anonymous() {
        assert!(Descriptor::default().is_anonymous());
        assert!(!Descriptor::new("Book").is_anonymous());
    }
}
