//! Java signatures of the same model

use tracing::{debug_span, trace};

use super::{
    extra_modifiers, modifier, nested_symbol, parameter_list, symbol, visibility, AnnotationStyle,
    Dialect, ProjectionRenderer, SignatureProvider,
};
use crate::config::DialectConfig;
use crate::content::{ContentFactory, ContentKind, ContentTree, Emitter, TextStyle, NBSP};
use crate::model::{
    simple_name, Classlike, ClasslikeKind, Declaration, EnumEntry, Function, PlatformMap,
    PlatformSet, Projection, Property, SymbolId, TypeAlias, TypeParameter, VarianceKind,
    WithExtras,
};
use crate::platform::{group_by_value, group_within};

/// Java type syntax. Nullability is erased and function types are plain
/// generic interfaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaProjections;

impl ProjectionRenderer for JavaProjections {
    fn projection<F: ContentFactory>(&self, out: &mut Emitter<'_, F>, projection: &Projection) {
        match projection {
            Projection::Named { id, arguments, .. } => out.group(&[], |out| {
                out.link(id.display_name(), id);
                out.list(arguments, "<", ">", ", ", |out, arg| self.projection(out, arg));
            }),
            Projection::Variance(kind, inner) => out.group(&[], |out| {
                out.text(match kind {
                    VarianceKind::Covariant => "? extends ",
                    VarianceKind::Contravariant => "? super ",
                });
                self.projection(out, inner);
            }),
            Projection::Nullable(inner) => self.projection(out, inner),
            Projection::Star => out.text("?"),
            Projection::PlatformObject | Projection::Dynamic => {
                out.link("Object", &SymbolId::java_object());
            }
            Projection::Void => out.text("void"),
            Projection::Primitive(name) | Projection::TypeParameterRef(name) => out.text(name),
        }
    }
}

/// Renders declarations as they are seen from Java
pub struct JavaSignatureProvider<F = ContentTree> {
    factory: F,
    config: DialectConfig,
    annotations: AnnotationStyle,
}

impl JavaSignatureProvider {
    pub fn new() -> Self {
        Self::with_factory(ContentTree, DialectConfig::java())
    }
}

impl Default for JavaSignatureProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ContentFactory> JavaSignatureProvider<F> {
    pub fn with_factory(factory: F, config: DialectConfig) -> Self {
        Self {
            factory,
            annotations: AnnotationStyle::from(&config),
            config,
        }
    }

    fn extras<A: WithExtras + ?Sized>(annotated: &A) -> String {
        extra_modifiers(annotated, Dialect::Java)
    }

    fn classlike(&self, c: &Classlike) -> F::Node {
        match &c.extras.actual_typealias {
            Some(aliased) => self.actual_typealias(c, aliased),
            None => self.regular_classlike(c, &c.platforms),
        }
    }

    fn actual_typealias(&self, c: &Classlike, aliased: &PlatformMap<Projection>) -> F::Node {
        let regular: PlatformSet = c
            .platforms
            .iter()
            .filter(|p| !aliased.contains_key(*p))
            .cloned()
            .collect();
        let all: PlatformSet = c.platforms.iter().chain(aliased.keys()).cloned().collect();
        trace!(
            regular = regular.len(),
            aliased = aliased.len(),
            "splitting actual typealias"
        );

        let mut out = Emitter::new(&self.factory, &c.id, &all);
        if !regular.is_empty() {
            out.push(self.regular_classlike(c, &regular));
        }
        for (target, platforms) in group_by_value(aliased) {
            nested_symbol(&mut out, &c.id, &platforms, |out| {
                out.link(class_name(c), &c.id);
                out.text(" = ");
                JavaProjections.projection(out, target);
            });
        }
        out.finish(ContentKind::Main, &[])
    }

    fn regular_classlike(&self, c: &Classlike, platforms: &PlatformSet) -> F::Node {
        symbol(&self.factory, &c.id, platforms, |out| {
            self.annotations.block(out, c);
            visibility(out, &c.visibility, &self.config);
            if c.kind == ClasslikeKind::Class {
                modifier(out, &c.modifier, &self.config);
                out.text(&Self::extras(c));
            }
            out.text(match c.kind {
                ClasslikeKind::Class | ClasslikeKind::Object => "class ",
                ClasslikeKind::Interface => "interface ",
                ClasslikeKind::Enum => "enum ",
                ClasslikeKind::Annotation => "@interface ",
            });
            out.link(class_name(c), &c.id);
            out.list(&c.generics, "<", ">", ", ", |out, t| self.type_parameter_body(out, t));
            for (supertypes, platforms) in group_within(&c.supertypes, out.platforms()) {
                out.for_platforms(&platforms, |out| {
                    out.list(supertypes, " extends ", "", ", ", |out, id| {
                        out.link(id.display_name(), id);
                    });
                });
            }
        })
    }

    fn function(&self, f: &Function) -> F::Node {
        symbol(&self.factory, &f.id, &f.platforms, |out| {
            self.annotations.block(out, f);
            visibility(out, &f.visibility, &self.config);
            modifier(out, &f.modifier, &self.config);
            out.text(&Self::extras(f));
            out.list(&f.generics, "<", "> ", ", ", |out, t| self.type_parameter_body(out, t));
            if !f.is_constructor {
                JavaProjections.projection(out, &f.return_type);
                out.text(NBSP);
            }
            out.link(&f.name, &f.id);
            parameter_list(out, &f.parameters, |out, param| {
                self.annotations.inline(out, param);
                out.text(&Self::extras(param));
                JavaProjections.projection(out, &param.ty);
                out.text(NBSP);
                out.link(param.name.as_deref().unwrap_or_default(), &param.id);
            });
        })
    }

    fn property(&self, p: &Property) -> F::Node {
        symbol(&self.factory, &p.id, &p.platforms, |out| {
            self.annotations.block(out, p);
            visibility(out, &p.visibility, &self.config);
            modifier(out, &p.modifier, &self.config);
            out.text(&Self::extras(p));
            JavaProjections.projection(out, &p.ty);
            out.text(NBSP);
            out.link(&p.name, &p.id);
        })
    }

    fn type_alias(&self, t: &TypeAlias) -> F::Node {
        let mut out = Emitter::new(&self.factory, &t.id, &t.platforms);
        for (underlying, platforms) in group_by_value(&t.underlying) {
            nested_symbol(&mut out, &t.id, &platforms, |out| {
                self.annotations.block(out, t);
                visibility(out, &t.visibility, &self.config);
                JavaProjections.projection(out, &t.ty);
                out.text(" = ");
                JavaProjections.projection(out, underlying);
            });
        }
        out.finish(ContentKind::Main, &[])
    }

    fn type_parameter(&self, t: &TypeParameter) -> F::Node {
        symbol(&self.factory, &t.id, &t.platforms, |out| {
            self.annotations.block(out, t);
            self.type_parameter_body(out, t);
        })
    }

    /// `T extends A & B`
    fn type_parameter_body(&self, out: &mut Emitter<'_, F>, t: &TypeParameter) {
        out.text(simple_name(&t.name));
        out.list(&t.bounds, " extends ", "", " & ", |out, bound| {
            JavaProjections.projection(out, bound);
        });
    }

    fn enum_entry(&self, e: &EnumEntry) -> F::Node {
        Emitter::new(&self.factory, &e.id, &e.platforms)
            .finish(ContentKind::Symbol, &[TextStyle::Monospace])
    }
}

impl<F: ContentFactory> SignatureProvider for JavaSignatureProvider<F> {
    type Node = F::Node;

    fn signature(&self, declaration: &Declaration) -> F::Node {
        let _span =
            debug_span!("signature", dialect = "java", symbol = %declaration.id()).entered();
        match declaration {
            Declaration::Classlike(c) => self.classlike(c),
            Declaration::Function(f) => self.function(f),
            Declaration::Property(p) => self.property(p),
            Declaration::TypeAlias(t) => self.type_alias(t),
            Declaration::TypeParameter(t) => self.type_parameter(t),
            Declaration::EnumEntry(e) => self.enum_entry(e),
        }
    }
}

fn class_name(c: &Classlike) -> &str {
    c.name.as_deref().unwrap_or_else(|| c.id.display_name())
}
