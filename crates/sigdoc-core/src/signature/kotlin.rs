//! Kotlin signatures

use tracing::{debug_span, trace};

use super::{
    extra_modifiers, modifier, nested_symbol, parameter_list, symbol, visibility, AnnotationStyle,
    Dialect, ProjectionRenderer, SignatureProvider,
};
use crate::config::DialectConfig;
use crate::content::{ContentFactory, ContentKind, ContentTree, Emitter, TextStyle, NBSP};
use crate::model::{
    Classlike, ClasslikeKind, Declaration, EnumEntry, ExtraModifier, FunctionMarker, Function,
    Parameter, PlatformMap, PlatformSet, Projection, Property, SymbolId, TypeAlias,
    TypeParameter, VarianceKind, WithExtras,
};
use crate::platform::{group_by_value, group_within};

/// Kotlin type syntax
#[derive(Debug, Clone, Copy, Default)]
pub struct KotlinProjections;

impl KotlinProjections {
    fn named<F: ContentFactory>(
        self,
        out: &mut Emitter<'_, F>,
        id: &SymbolId,
        arguments: &[Projection],
    ) {
        out.group(&[], |out| {
            out.link(id.display_name(), id);
            out.list(arguments, "<", ">", ", ", |out, arg| self.projection(out, arg));
        });
    }

    /// `Receiver.(A, B) -> R`
    fn function_type<F: ContentFactory>(
        self,
        out: &mut Emitter<'_, F>,
        id: &SymbolId,
        marker: FunctionMarker,
        arguments: &[Projection],
    ) {
        let (receiver, rest) = match arguments.split_first() {
            Some((receiver, rest)) if marker.is_extension() => (Some(receiver), rest),
            _ => (None, arguments),
        };
        let Some((result, params)) = rest.split_last() else {
            // no return type to split off
            self.named(out, id, arguments);
            return;
        };
        out.group(&[], |out| {
            if let Some(receiver) = receiver {
                self.projection(out, receiver);
                out.text(".");
            }
            out.text("(");
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    out.text(", ");
                }
                self.projection(out, param);
            }
            out.text(") -> ");
            self.projection(out, result);
        });
    }
}

impl ProjectionRenderer for KotlinProjections {
    fn projection<F: ContentFactory>(&self, out: &mut Emitter<'_, F>, projection: &Projection) {
        match projection {
            Projection::Named {
                id,
                arguments,
                function,
            } => {
                if function.is_function() {
                    self.function_type(out, id, *function, arguments);
                } else {
                    self.named(out, id, arguments);
                }
            }
            Projection::Variance(kind, inner) => out.group(&[], |out| {
                out.text(match kind {
                    VarianceKind::Covariant => "out ",
                    VarianceKind::Contravariant => "in ",
                });
                self.projection(out, inner);
            }),
            Projection::Nullable(inner) => out.group(&[], |out| {
                self.projection(out, inner);
                out.text("?");
            }),
            Projection::Star => out.text("*"),
            Projection::PlatformObject => out.link("Any", &SymbolId::kotlin_any()),
            Projection::Void => out.link("Unit", &SymbolId::kotlin_unit()),
            Projection::Primitive(name) => {
                let id = SymbolId::class("kotlin", capitalize(name));
                self.named(out, &id, &[]);
            }
            Projection::Dynamic => out.text("dynamic"),
            Projection::TypeParameterRef(name) => out.text(name),
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders declarations as Kotlin source
pub struct KotlinSignatureProvider<F = ContentTree> {
    factory: F,
    config: DialectConfig,
    annotations: AnnotationStyle,
}

impl KotlinSignatureProvider {
    pub fn new() -> Self {
        Self::with_factory(ContentTree, DialectConfig::kotlin())
    }
}

impl Default for KotlinSignatureProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ContentFactory> KotlinSignatureProvider<F> {
    pub fn with_factory(factory: F, config: DialectConfig) -> Self {
        Self {
            factory,
            annotations: AnnotationStyle::from(&config),
            config,
        }
    }

    fn extras<A: WithExtras + ?Sized>(annotated: &A) -> String {
        extra_modifiers(annotated, Dialect::Kotlin)
    }

    fn classlike(&self, c: &Classlike) -> F::Node {
        match &c.extras.actual_typealias {
            Some(aliased) => self.actual_typealias(c, aliased),
            None => self.regular_classlike(c, &c.platforms),
        }
    }

    /// Regular header on the platforms without an alias, one alias line per target
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
        let name = class_name(c);
        for (target, platforms) in group_by_value(aliased) {
            nested_symbol(&mut out, &c.id, &platforms, |out| {
                out.text("actual typealias ");
                out.link(name, &c.id);
                out.text(" = ");
                KotlinProjections.projection(out, target);
            });
        }
        out.finish(ContentKind::Main, &[])
    }

    fn regular_classlike(&self, c: &Classlike, platforms: &PlatformSet) -> F::Node {
        symbol(&self.factory, &c.id, platforms, |out| {
            self.annotations.block(out, c);
            visibility(out, &c.visibility, &self.config);
            if c.kind == ClasslikeKind::Class && !c.has_modifier(ExtraModifier::Data) {
                modifier(out, &c.modifier, &self.config);
            }
            match c.kind {
                ClasslikeKind::Class => out.text(&format!("{}class ", Self::extras(c))),
                ClasslikeKind::Interface => out.text("interface "),
                ClasslikeKind::Enum => out.text("enum "),
                ClasslikeKind::Object => out.text("object "),
                ClasslikeKind::Annotation => out.text("annotation class "),
            }
            out.link(class_name(c), &c.id);
            out.list(&c.generics, "<", ">", ", ", |out, t| self.type_parameter_body(out, t));
            if c.kind == ClasslikeKind::Class {
                if let Some(ctor) = c.primary_constructor() {
                    self.primary_constructor(out, ctor);
                }
            }
            for (supertypes, platforms) in group_within(&c.supertypes, out.platforms()) {
                out.for_platforms(&platforms, |out| {
                    out.list(supertypes, " : ", "", ", ", |out, id| {
                        out.link(id.display_name(), id);
                    });
                });
            }
        })
    }

    fn primary_constructor(&self, out: &mut Emitter<'_, F>, ctor: &Function) {
        if !self.annotations.any_visible(ctor) {
            out.list(&ctor.parameters, "(", ")", ", ", |out, param| {
                self.constructor_parameter(out, param);
            });
        } else {
            out.text(NBSP);
            self.annotations.inline(out, ctor);
            out.text("constructor");
            parameter_list(out, &ctor.parameters, |out, param| {
                self.constructor_parameter(out, param);
            });
        }
    }

    fn constructor_parameter(&self, out: &mut Emitter<'_, F>, param: &Parameter) {
        self.annotations.inline(out, param);
        out.styled_text(param.name.as_deref().unwrap_or_default(), &[TextStyle::Bold]);
        out.text(": ");
        KotlinProjections.projection(out, &param.ty);
    }

    fn function(&self, f: &Function) -> F::Node {
        symbol(&self.factory, &f.id, &f.platforms, |out| {
            self.annotations.block(out, f);
            visibility(out, &f.visibility, &self.config);
            modifier(out, &f.modifier, &self.config);
            out.text(&Self::extras(f));
            out.text("fun ");
            out.list(&f.generics, "<", "> ", ", ", |out, t| self.type_parameter_body(out, t));
            if let Some(receiver) = &f.receiver {
                KotlinProjections.projection(out, &receiver.ty);
                out.text(".");
            }
            out.link(&f.name, &f.id);
            parameter_list(out, &f.parameters, |out, param| {
                self.annotations.inline(out, param);
                out.text(&Self::extras(param));
                out.text(param.name.as_deref().unwrap_or_default());
                out.text(": ");
                KotlinProjections.projection(out, &param.ty);
            });
            if documents_return_type(f) {
                out.text(": ");
                KotlinProjections.projection(out, &f.return_type);
            }
        })
    }

    fn property(&self, p: &Property) -> F::Node {
        symbol(&self.factory, &p.id, &p.platforms, |out| {
            self.annotations.block(out, p);
            visibility(out, &p.visibility, &self.config);
            modifier(out, &p.modifier, &self.config);
            out.text(&Self::extras(p));
            out.text(if p.is_mutable() { "var " } else { "val " });
            out.list(&p.generics, "<", "> ", ", ", |out, t| self.type_parameter_body(out, t));
            if let Some(receiver) = &p.receiver {
                KotlinProjections.projection(out, &receiver.ty);
                out.text(".");
            }
            out.link(&p.name, &p.id);
            out.text(": ");
            KotlinProjections.projection(out, &p.ty);
        })
    }

    /// One signature per distinct aliased type
    fn type_alias(&self, t: &TypeAlias) -> F::Node {
        let mut out = Emitter::new(&self.factory, &t.id, &t.platforms);
        for (underlying, platforms) in group_by_value(&t.underlying) {
            nested_symbol(&mut out, &t.id, &platforms, |out| {
                self.annotations.block(out, t);
                visibility(out, &t.visibility, &self.config);
                out.text(&Self::extras(t));
                out.text("typealias ");
                KotlinProjections.projection(out, &t.ty);
                out.text(" = ");
                KotlinProjections.projection(out, underlying);
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

    /// `T : Bound, Other`, also used inside generic lists
    fn type_parameter_body(&self, out: &mut Emitter<'_, F>, t: &TypeParameter) {
        out.text(&Self::extras(t));
        out.link(&t.name, &t.id);
        out.list(&t.bounds, " : ", "", ", ", |out, bound| {
            KotlinProjections.projection(out, bound);
        });
    }

    fn enum_entry(&self, e: &EnumEntry) -> F::Node {
        Emitter::new(&self.factory, &e.id, &e.platforms)
            .finish(ContentKind::Symbol, &[TextStyle::Monospace])
    }
}

impl<F: ContentFactory> SignatureProvider for KotlinSignatureProvider<F> {
    type Node = F::Node;

    fn signature(&self, declaration: &Declaration) -> F::Node {
        let _span =
            debug_span!("signature", dialect = "kotlin", symbol = %declaration.id()).entered();
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

/// Constructors and functions returning nothing show no return type
fn documents_return_type(f: &Function) -> bool {
    !(f.is_constructor
        || matches!(f.return_type, Projection::Void)
        || f.return_type.is_named(&SymbolId::kotlin_unit()))
}
