//! Signature rendering
//!
//! A [`SignatureProvider`] turns one [`Declaration`] into a content node that
//! reads like the declaration's source. Two dialects are provided:
//! [`KotlinSignatureProvider`] and [`JavaSignatureProvider`]. Both walk the
//! same model; they differ in keywords, type syntax and which modifiers and
//! annotations they show.
//!
//! Attributes that may differ between platforms are never rendered per
//! platform. They are grouped by rendered value first, so a signature only
//! forks where its platforms actually disagree.

mod annotations;
mod java;
mod kotlin;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{DialectConfig, SignatureConfig};
use crate::content::{ContentFactory, ContentKind, ContentNode, ContentTree, Emitter, TextStyle};
use crate::model::{
    Declaration, ExtraModifier, Modifier, PlatformMap, PlatformSet, Projection, SymbolId,
    Visibility, WithExtras,
};

pub use annotations::{AnnotationStyle, AtStrategy};
pub use java::{JavaProjections, JavaSignatureProvider};
pub use kotlin::{KotlinProjections, KotlinSignatureProvider};

/// Renders the signature of a declaration
pub trait SignatureProvider {
    type Node;

    fn signature(&self, declaration: &Declaration) -> Self::Node;
}

/// Renders type expressions in one dialect's syntax
pub trait ProjectionRenderer {
    fn projection<F: ContentFactory>(&self, out: &mut Emitter<'_, F>, projection: &Projection);
}

/// Provider usable behind a pointer, e.g. when the dialect is chosen at runtime
pub type DynSignatureProvider = Box<dyn SignatureProvider<Node = ContentNode> + Send + Sync>;

/// Output language of the signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    Kotlin,
    Java,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Kotlin => "kotlin",
            Dialect::Java => "java",
        }
    }

    /// Whether `modifier` belongs to this dialect's language
    pub fn owns(self, modifier: ExtraModifier) -> bool {
        match self {
            Dialect::Kotlin => modifier.is_kotlin_only(),
            Dialect::Java => modifier.is_java_only(),
        }
    }

    /// A provider building [`ContentNode`] trees with this dialect's part of `config`
    pub fn provider(self, config: &SignatureConfig) -> DynSignatureProvider {
        let dialect = config.dialect(self).clone();
        match self {
            Dialect::Kotlin => {
                Box::new(KotlinSignatureProvider::with_factory(ContentTree, dialect))
            }
            Dialect::Java => Box::new(JavaSignatureProvider::with_factory(ContentTree, dialect)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-level signature node: monospace, scoped to `owner`, body in one block
fn symbol<F, B>(factory: &F, owner: &SymbolId, platforms: &PlatformSet, body: B) -> F::Node
where
    F: ContentFactory,
    B: FnOnce(&mut Emitter<'_, F>),
{
    let mut out = Emitter::new(factory, owner, platforms);
    out.group(&[TextStyle::Block], body);
    out.finish(ContentKind::Symbol, &[TextStyle::Monospace])
}

/// Like [`symbol`], emitted as a child of `out`
fn nested_symbol<F, B>(
    out: &mut Emitter<'_, F>,
    owner: &SymbolId,
    platforms: &PlatformSet,
    body: B,
) where
    F: ContentFactory,
    B: FnOnce(&mut Emitter<'_, F>),
{
    out.content_for(
        owner,
        ContentKind::Symbol,
        &[TextStyle::Monospace],
        platforms,
        |out| out.group(&[TextStyle::Block], body),
    );
}

fn keyword_token(keyword: &str, ignored: bool) -> String {
    if ignored || keyword.is_empty() {
        String::new()
    } else {
        format!("{keyword} ")
    }
}

/// Grouped visibility keyword
fn visibility<F: ContentFactory>(
    out: &mut Emitter<'_, F>,
    values: &PlatformMap<Visibility>,
    config: &DialectConfig,
) {
    out.platform_text(values, |v| keyword_token(v.keyword(), config.is_ignored_visibility(*v)));
}

/// Grouped inheritance modifier
fn modifier<F: ContentFactory>(
    out: &mut Emitter<'_, F>,
    values: &PlatformMap<Modifier>,
    config: &DialectConfig,
) {
    out.platform_text(values, |m| keyword_token(m.keyword(), config.is_ignored_modifier(*m)));
}

/// `data inline ` etc., only the modifiers of `dialect`'s language
fn extra_modifiers<A: WithExtras + ?Sized>(annotated: &A, dialect: Dialect) -> String {
    annotated
        .extras()
        .modifiers
        .iter()
        .filter(|m| dialect.owns(**m))
        .map(|m| format!("{} ", m.keyword()))
        .collect()
}

/// Parameter lists are parenthesized even when empty
fn parameter_list<F, T>(
    out: &mut Emitter<'_, F>,
    items: &[T],
    render: impl FnMut(&mut Emitter<'_, F>, &T),
) where
    F: ContentFactory,
{
    if items.is_empty() {
        out.text("()");
    } else {
        out.list(items, "(", ")", ", ", render);
    }
}
