//! Content tree building
//!
//! Renderers never construct nodes themselves. They talk to a
//! [`ContentFactory`] through an [`Emitter`], so the node type is whatever the
//! page assembler wants. [`ContentTree`] is the built-in factory producing
//! inspectable [`ContentNode`]s.

mod emitter;
mod node;

use serde::{Deserialize, Serialize};

use crate::model::{PlatformSet, SymbolId};

pub use emitter::Emitter;
pub use node::{ContentNode, ContentTree};

/// Non-breaking space used between a type and the name it qualifies
pub const NBSP: &str = "\u{a0}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    Monospace,
    Block,
    Bold,
}

/// What a scoped content node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// A single rendered signature
    Symbol,
    /// Wrapper around several signatures of one declaration
    Main,
}

/// Primitive node constructors provided by the page assembler
pub trait ContentFactory {
    type Node;

    fn text(&self, text: &str, styles: &[TextStyle], platforms: &PlatformSet) -> Self::Node;

    fn link(&self, text: &str, target: &SymbolId, platforms: &PlatformSet) -> Self::Node;

    fn group(
        &self,
        children: Vec<Self::Node>,
        styles: &[TextStyle],
        platforms: &PlatformSet,
    ) -> Self::Node;

    /// A node scoped to `owner` and the subset of its platforms it describes
    fn content_for(
        &self,
        owner: &SymbolId,
        kind: ContentKind,
        styles: &[TextStyle],
        platforms: &PlatformSet,
        children: Vec<Self::Node>,
    ) -> Self::Node;
}
