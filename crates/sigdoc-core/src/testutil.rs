//! Test utilities for sigdoc
//!
//! Helpers for building small models and flattening rendered signatures into
//! comparable strings.

use crate::content::{
    ContentFactory, ContentKind, ContentNode, ContentTree, Emitter, TextStyle, NBSP,
};
use crate::model::{Declaration, Platform, PlatformMap, PlatformSet, Projection, SymbolId};
use crate::platform::platform_set;
use crate::signature::{
    JavaSignatureProvider, KotlinSignatureProvider, ProjectionRenderer, SignatureProvider,
};

/// Platform set from names
pub fn platforms(names: &[&str]) -> PlatformSet {
    platform_set(names.iter().copied())
}

/// Map every named platform to the same value
pub fn everywhere<V: Clone>(names: &[&str], value: V) -> PlatformMap<V> {
    names
        .iter()
        .map(|name| (Platform::new(*name), value.clone()))
        .collect()
}

/// Per-platform values from `(platform, value)` pairs
pub fn per_platform<V>(entries: impl IntoIterator<Item = (&'static str, V)>) -> PlatformMap<V> {
    entries
        .into_iter()
        .map(|(name, value)| (Platform::new(name), value))
        .collect()
}

/// Plain text of a node with non-breaking spaces turned into spaces
pub fn render_text(node: &ContentNode) -> String {
    node.plain_text().replace(NBSP, " ")
}

/// One `text [platform, ...]` line per signature in `node`
pub fn symbol_lines(node: &ContentNode) -> Vec<String> {
    node.symbols()
        .into_iter()
        .map(|symbol| {
            let platforms: Vec<&str> = symbol.platforms().iter().map(Platform::as_str).collect();
            format!("{} [{}]", render_text(symbol), platforms.join(", "))
        })
        .collect()
}

/// Kotlin signature of `declaration` with default settings, as text
pub fn kotlin_text(declaration: &Declaration) -> String {
    render_text(&KotlinSignatureProvider::new().signature(declaration))
}

/// Java signature of `declaration` with default settings, as text
pub fn java_text(declaration: &Declaration) -> String {
    render_text(&JavaSignatureProvider::new().signature(declaration))
}

/// A single type expression rendered on its own
pub fn projection_text<R: ProjectionRenderer>(renderer: &R, projection: &Projection) -> String {
    let tree = ContentTree;
    let owner = SymbolId::default();
    let mut out = Emitter::new(&tree, &owner, &platforms(&["test"]));
    renderer.projection(&mut out, projection);
    render_text(&out.finish(ContentKind::Main, &[]))
}

/// Content factory that renders straight to strings, for checking that
/// providers only talk to the factory interface
#[derive(Debug, Clone, Copy, Default)]
pub struct StringFactory;

impl ContentFactory for StringFactory {
    type Node = String;

    fn text(&self, text: &str, _styles: &[TextStyle], _platforms: &PlatformSet) -> String {
        text.to_string()
    }

    fn link(&self, text: &str, _target: &SymbolId, _platforms: &PlatformSet) -> String {
        format!("[{text}]")
    }

    fn group(
        &self,
        children: Vec<String>,
        _styles: &[TextStyle],
        _platforms: &PlatformSet,
    ) -> String {
        children.concat()
    }

    fn content_for(
        &self,
        _owner: &SymbolId,
        _kind: ContentKind,
        _styles: &[TextStyle],
        _platforms: &PlatformSet,
        children: Vec<String>,
    ) -> String {
        children.concat()
    }
}
