//! Type expressions ("projections")

use serde::{Deserialize, Serialize};

use super::SymbolId;

/// A type expression as it appears in a signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Projection {
    /// A named type with its type arguments, e.g. `Map<K, V>`
    Named {
        id: SymbolId,
        #[serde(default)]
        arguments: Vec<Projection>,
        /// Set when the named type is a function type; the last argument is then
        /// the return type and, for extension function types, the first one is
        /// the receiver
        #[serde(default)]
        function: FunctionMarker,
    },
    /// A use-site variance annotation around a type argument
    Variance(VarianceKind, Box<Projection>),
    Nullable(Box<Projection>),
    /// Star projection / wildcard
    Star,
    /// The platform's universal root type
    PlatformObject,
    /// A primitive of the host type system, by its host name (`int`, `boolean`, ...)
    Primitive(String),
    /// Absence of a value
    Void,
    Dynamic,
    /// Reference to a generic parameter in scope, by raw name
    TypeParameterRef(String),
}

impl Projection {
    /// A non-generic named type
    pub fn named(id: SymbolId) -> Self {
        Self::generic(id, Vec::new())
    }

    pub fn generic(id: SymbolId, arguments: Vec<Projection>) -> Self {
        Projection::Named {
            id,
            arguments,
            function: FunctionMarker::NotFunction,
        }
    }

    /// A function type. `arguments` holds the parameter types followed by the
    /// return type, prefixed with the receiver type when `marker` is
    /// [`FunctionMarker::Extension`].
    pub fn function_type(id: SymbolId, marker: FunctionMarker, arguments: Vec<Projection>) -> Self {
        Projection::Named {
            id,
            arguments,
            function: marker,
        }
    }

    pub fn nullable(self) -> Self {
        Projection::Nullable(Box::new(self))
    }

    pub fn covariant(self) -> Self {
        Projection::Variance(VarianceKind::Covariant, Box::new(self))
    }

    pub fn contravariant(self) -> Self {
        Projection::Variance(VarianceKind::Contravariant, Box::new(self))
    }

    pub fn primitive(name: impl Into<String>) -> Self {
        Projection::Primitive(name.into())
    }

    pub fn type_parameter(name: impl Into<String>) -> Self {
        Projection::TypeParameterRef(name.into())
    }

    /// Whether this is the named type `id`, ignoring any type arguments
    pub fn is_named(&self, id: &SymbolId) -> bool {
        matches!(self, Projection::Named { id: own, .. } if own == id)
    }
}

/// Marks a named type as a function type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionMarker {
    #[default]
    NotFunction,
    Function,
    Extension,
}

impl FunctionMarker {
    pub fn is_function(self) -> bool {
        matches!(self, FunctionMarker::Function | FunctionMarker::Extension)
    }

    pub fn is_extension(self) -> bool {
        self == FunctionMarker::Extension
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VarianceKind {
    /// Producer position, written `out` in Kotlin
    #[serde(alias = "out")]
    Covariant,
    /// Consumer position, written `in` in Kotlin
    #[serde(alias = "in")]
    Contravariant,
}
