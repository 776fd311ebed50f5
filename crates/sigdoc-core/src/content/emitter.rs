//! Scoped content builder

use super::{ContentFactory, ContentKind, TextStyle};
use crate::model::{PlatformMap, PlatformSet, SymbolId};
use crate::platform::group_by_value;

/// Accumulates nodes for one declaration and one set of platforms.
///
/// Every node created through an emitter is tagged with the emitter's
/// platforms unless a narrower set is given explicitly.
pub struct Emitter<'f, F: ContentFactory> {
    factory: &'f F,
    owner: SymbolId,
    platforms: PlatformSet,
    nodes: Vec<F::Node>,
}

impl<'f, F: ContentFactory> Emitter<'f, F> {
    pub fn new(factory: &'f F, owner: &SymbolId, platforms: &PlatformSet) -> Self {
        Self {
            factory,
            owner: owner.clone(),
            platforms: platforms.clone(),
            nodes: Vec::new(),
        }
    }

    fn scoped(&self, owner: &SymbolId, platforms: &PlatformSet) -> Self {
        Self::new(self.factory, owner, platforms)
    }

    pub fn platforms(&self) -> &PlatformSet {
        &self.platforms
    }

    pub fn push(&mut self, node: F::Node) {
        self.nodes.push(node);
    }

    /// Plain text; empty strings emit nothing
    pub fn text(&mut self, text: &str) {
        self.styled_text(text, &[]);
    }

    pub fn styled_text(&mut self, text: &str, styles: &[TextStyle]) {
        if text.is_empty() {
            return;
        }
        let node = self.factory.text(text, styles, &self.platforms);
        self.nodes.push(node);
    }

    pub fn link(&mut self, text: &str, target: &SymbolId) {
        let node = self.factory.link(text, target, &self.platforms);
        self.nodes.push(node);
    }

    /// Wrap whatever `build` emits in a single group node
    pub fn group(&mut self, styles: &[TextStyle], build: impl FnOnce(&mut Self)) {
        let mut inner = self.scoped(&self.owner, &self.platforms);
        build(&mut inner);
        let node = self.factory.group(inner.nodes, styles, &self.platforms);
        self.nodes.push(node);
    }

    /// Emit nodes tagged with `platforms` instead of the current set
    pub fn for_platforms(&mut self, platforms: &PlatformSet, build: impl FnOnce(&mut Self)) {
        let mut inner = self.scoped(&self.owner, platforms);
        build(&mut inner);
        self.nodes.append(&mut inner.nodes);
    }

    /// Emit a nested scoped node for `owner` on `platforms`
    pub fn content_for(
        &mut self,
        owner: &SymbolId,
        kind: ContentKind,
        styles: &[TextStyle],
        platforms: &PlatformSet,
        build: impl FnOnce(&mut Self),
    ) {
        let mut inner = self.scoped(owner, platforms);
        build(&mut inner);
        let node = inner.finish(kind, styles);
        self.nodes.push(node);
    }

    /// `prefix item separator item ... suffix`; nothing at all for an empty list
    pub fn list<T>(
        &mut self,
        items: &[T],
        prefix: &str,
        suffix: &str,
        separator: &str,
        mut render: impl FnMut(&mut Self, &T),
    ) {
        if items.is_empty() {
            return;
        }
        self.text(prefix);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.text(separator);
            }
            render(&mut *self, item);
        }
        self.text(suffix);
    }

    /// Render a per-platform attribute once per distinct token.
    ///
    /// Only the platforms of this emitter are considered. Each distinct,
    /// non-blank token becomes one text node tagged with the platforms that
    /// produce it.
    pub fn platform_text<V>(&mut self, values: &PlatformMap<V>, token: impl Fn(&V) -> String) {
        let groups = group_by_value(
            self.platforms
                .iter()
                .filter_map(|platform| values.get(platform).map(|value| (platform, token(value)))),
        );
        for (text, platforms) in groups {
            if text.trim().is_empty() {
                continue;
            }
            let node = self.factory.text(&text, &[], &platforms);
            self.nodes.push(node);
        }
    }

    /// Close this emitter into one scoped node
    pub fn finish(self, kind: ContentKind, styles: &[TextStyle]) -> F::Node {
        self.factory
            .content_for(&self.owner, kind, styles, &self.platforms, self.nodes)
    }
}
