//! Resolved declaration model consumed by the signature renderers
//!
//! Everything in here is produced elsewhere (by whatever resolves source code
//! into declarations) and handed over fully built. The renderers only read it.

mod annotation;
mod declaration;
mod file;
mod projection;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

pub use annotation::{Annotation, AnnotationValue};
pub use declaration::{
    Classlike, ClasslikeKind, Declaration, EnumEntry, ExtraModifier, Extras, Function, Modifier,
    Parameter, Property, TypeAlias, TypeParameter, Visibility, WithExtras,
};
pub use file::{ModelError, ModelFile};
pub use projection::{FunctionMarker, Projection, VarianceKind};

/// A compilation target a declaration can be documented for
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Platform(String);

impl Platform {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Platform {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Ordered set of platforms
pub type PlatformSet = BTreeSet<Platform>;

/// An attribute whose value may differ between platforms
pub type PlatformMap<V> = BTreeMap<Platform, V>;

/// Identity of a documented symbol, used as a hyperlink target
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolId {
    /// Dotted package path, e.g. `kotlin.collections`
    pub package: Option<String>,
    /// Dotted chain of enclosing class names, e.g. `Map.Entry`
    pub class_names: Option<String>,
    /// Name of the callable (function or property), if this points at one
    pub callable: Option<String>,
}

impl SymbolId {
    /// Identity of a class-like symbol
    pub fn class(package: impl Into<String>, class_names: impl Into<String>) -> Self {
        Self {
            package: Some(package.into()),
            class_names: Some(class_names.into()),
            callable: None,
        }
    }

    /// Identity of a callable declared in `class_names` (or at top level when `None`)
    pub fn callable(
        package: impl Into<String>,
        class_names: Option<&str>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            package: Some(package.into()),
            class_names: class_names.map(str::to_string),
            callable: Some(name.into()),
        }
    }

    /// `kotlin.Any`
    pub fn kotlin_any() -> Self {
        Self::class("kotlin", "Any")
    }

    /// `kotlin.Unit`
    pub fn kotlin_unit() -> Self {
        Self::class("kotlin", "Unit")
    }

    /// `java.lang.Object`
    pub fn java_object() -> Self {
        Self::class("java.lang", "Object")
    }

    /// Text shown when linking to this symbol
    pub fn display_name(&self) -> &str {
        self.class_names
            .as_deref()
            .or(self.callable.as_deref())
            .unwrap_or_default()
    }
}

/// Text after the last `.` of a qualified name
pub fn simple_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.package.as_deref().unwrap_or_default(),
            self.class_names.as_deref().unwrap_or_default(),
            self.callable.as_deref().unwrap_or_default()
        )
    }
}
