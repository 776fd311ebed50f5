//! Annotations and their argument values

use serde::{Deserialize, Serialize};

use super::SymbolId;

/// An annotation applied to a declaration or parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub id: SymbolId,
    /// Arguments in source order
    #[serde(default)]
    pub params: Vec<(String, AnnotationValue)>,
}

impl Annotation {
    pub fn new(id: SymbolId) -> Self {
        Self {
            id,
            params: Vec::new(),
        }
    }

    /// Append an argument
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.params.push((name.into(), value));
        self
    }
}

/// Value of an annotation argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum AnnotationValue {
    /// Any literal, already in source form (quotes included for strings)
    String(String),
    /// Reference to an enum entry
    Enum { name: String, id: SymbolId },
    /// Class literal
    Class { name: String, id: SymbolId },
    Annotation(Box<Annotation>),
    Array(Vec<AnnotationValue>),
}

impl AnnotationValue {
    pub fn string(value: impl Into<String>) -> Self {
        AnnotationValue::String(value.into())
    }

    pub fn nested(annotation: Annotation) -> Self {
        AnnotationValue::Annotation(Box::new(annotation))
    }
}
