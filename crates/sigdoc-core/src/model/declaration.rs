//! Declarations and their per-platform attributes

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Annotation, Platform, PlatformMap, PlatformSet, Projection, SymbolId};

/// A documented declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "declaration", rename_all = "kebab-case")]
pub enum Declaration {
    Classlike(Classlike),
    Function(Function),
    Property(Property),
    TypeAlias(TypeAlias),
    TypeParameter(TypeParameter),
    EnumEntry(EnumEntry),
}

impl Declaration {
    pub fn id(&self) -> &SymbolId {
        match self {
            Declaration::Classlike(c) => &c.id,
            Declaration::Function(f) => &f.id,
            Declaration::Property(p) => &p.id,
            Declaration::TypeAlias(t) => &t.id,
            Declaration::TypeParameter(t) => &t.id,
            Declaration::EnumEntry(e) => &e.id,
        }
    }

    /// Declared name; `None` only for anonymous class-likes
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Classlike(c) => c.name.as_deref(),
            Declaration::Function(f) => Some(&f.name),
            Declaration::Property(p) => Some(&p.name),
            Declaration::TypeAlias(t) => Some(&t.name),
            Declaration::TypeParameter(t) => Some(&t.name),
            Declaration::EnumEntry(e) => Some(&e.name),
        }
    }

    /// Platforms the declaration exists on
    pub fn platforms(&self) -> &PlatformSet {
        match self {
            Declaration::Classlike(c) => &c.platforms,
            Declaration::Function(f) => &f.platforms,
            Declaration::Property(p) => &p.platforms,
            Declaration::TypeAlias(t) => &t.platforms,
            Declaration::TypeParameter(t) => &t.platforms,
            Declaration::EnumEntry(e) => &e.platforms,
        }
    }
}

impl WithExtras for Declaration {
    fn extras(&self) -> &Extras {
        match self {
            Declaration::Classlike(c) => &c.extras,
            Declaration::Function(f) => &f.extras,
            Declaration::Property(p) => &p.extras,
            Declaration::TypeAlias(t) => &t.extras,
            Declaration::TypeParameter(t) => &t.extras,
            Declaration::EnumEntry(e) => &e.extras,
        }
    }
}

/// Access to the optional facets attached to a model element
pub trait WithExtras {
    fn extras(&self) -> &Extras;

    fn annotations(&self) -> &[Annotation] {
        &self.extras().annotations
    }

    fn has_modifier(&self, modifier: ExtraModifier) -> bool {
        self.extras().modifiers.contains(&modifier)
    }
}

macro_rules! impl_with_extras {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WithExtras for $ty {
                fn extras(&self) -> &Extras {
                    &self.extras
                }
            }
        )*
    };
}

impl_with_extras!(
    Classlike,
    Function,
    Property,
    TypeAlias,
    TypeParameter,
    EnumEntry,
    Parameter,
);

/// Optional facets of a declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extras {
    /// Annotations in source order
    pub annotations: Vec<Annotation>,
    /// Modifiers beyond visibility and inheritance (`data`, `static`, ...)
    pub modifiers: BTreeSet<ExtraModifier>,
    /// For class-likes that are an `actual typealias` on some platforms:
    /// the aliased type on each of those platforms
    pub actual_typealias: Option<PlatformMap<Projection>>,
    /// Marks the primary constructor among a class's constructors
    pub primary_constructor: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Public,
    Private,
    Protected,
    Internal,
    /// Java's default (no keyword) visibility
    PackagePrivate,
}

impl Visibility {
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Internal => "internal",
            Visibility::PackagePrivate => "",
        }
    }
}

/// Inheritance modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    Abstract,
    Open,
    Final,
    Sealed,
    /// No modifier at all
    Empty,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Abstract => "abstract",
            Modifier::Open => "open",
            Modifier::Final => "final",
            Modifier::Sealed => "sealed",
            Modifier::Empty => "",
        }
    }
}

/// Additional modifiers, each meaningful in exactly one of the two languages.
///
/// The derived ordering is the order in which they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtraModifier {
    // Kotlin
    Expect,
    Actual,
    Override,
    Lateinit,
    Const,
    Tailrec,
    Inline,
    Value,
    Infix,
    Operator,
    Suspend,
    External,
    Inner,
    Data,
    Fun,
    Crossinline,
    Noinline,
    Reified,
    Vararg,
    // Java
    Static,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    Transitive,
}

impl ExtraModifier {
    pub fn keyword(self) -> &'static str {
        match self {
            ExtraModifier::Expect => "expect",
            ExtraModifier::Actual => "actual",
            ExtraModifier::Override => "override",
            ExtraModifier::Lateinit => "lateinit",
            ExtraModifier::Const => "const",
            ExtraModifier::Tailrec => "tailrec",
            ExtraModifier::Inline => "inline",
            ExtraModifier::Value => "value",
            ExtraModifier::Infix => "infix",
            ExtraModifier::Operator => "operator",
            ExtraModifier::Suspend => "suspend",
            ExtraModifier::External => "external",
            ExtraModifier::Inner => "inner",
            ExtraModifier::Data => "data",
            ExtraModifier::Fun => "fun",
            ExtraModifier::Crossinline => "crossinline",
            ExtraModifier::Noinline => "noinline",
            ExtraModifier::Reified => "reified",
            ExtraModifier::Vararg => "vararg",
            ExtraModifier::Static => "static",
            ExtraModifier::Native => "native",
            ExtraModifier::Synchronized => "synchronized",
            ExtraModifier::Transient => "transient",
            ExtraModifier::Volatile => "volatile",
            ExtraModifier::Strictfp => "strictfp",
            ExtraModifier::Transitive => "transitive",
        }
    }

    pub fn is_java_only(self) -> bool {
        matches!(
            self,
            ExtraModifier::Static
                | ExtraModifier::Native
                | ExtraModifier::Synchronized
                | ExtraModifier::Transient
                | ExtraModifier::Volatile
                | ExtraModifier::Strictfp
                | ExtraModifier::Transitive
        )
    }

    pub fn is_kotlin_only(self) -> bool {
        !self.is_java_only()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClasslikeKind {
    Class,
    Interface,
    Enum,
    Object,
    Annotation,
}

/// Classes, interfaces, enums, objects and annotation classes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classlike {
    pub kind: ClasslikeKind,
    pub id: SymbolId,
    /// `None` for anonymous objects
    #[serde(default)]
    pub name: Option<String>,
    pub platforms: PlatformSet,
    #[serde(default)]
    pub visibility: PlatformMap<Visibility>,
    #[serde(default)]
    pub modifier: PlatformMap<Modifier>,
    #[serde(default)]
    pub generics: Vec<TypeParameter>,
    /// Direct supertypes declared on each platform
    #[serde(default)]
    pub supertypes: PlatformMap<Vec<SymbolId>>,
    #[serde(default)]
    pub constructors: Vec<Function>,
    #[serde(default)]
    pub extras: Extras,
}

impl Classlike {
    pub fn new(
        kind: ClasslikeKind,
        id: SymbolId,
        name: impl Into<String>,
        platforms: impl IntoIterator<Item = Platform>,
    ) -> Self {
        Self {
            kind,
            id,
            name: Some(name.into()),
            platforms: platforms.into_iter().collect(),
            visibility: PlatformMap::new(),
            modifier: PlatformMap::new(),
            generics: Vec::new(),
            supertypes: PlatformMap::new(),
            constructors: Vec::new(),
            extras: Extras::default(),
        }
    }

    /// The constructor marked primary, if exactly one is
    pub fn primary_constructor(&self) -> Option<&Function> {
        let mut primaries = self
            .constructors
            .iter()
            .filter(|ctor| ctor.extras.primary_constructor);
        match (primaries.next(), primaries.next()) {
            (Some(ctor), None) => Some(ctor),
            _ => None,
        }
    }
}

/// Functions and constructors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub id: SymbolId,
    pub name: String,
    #[serde(default)]
    pub is_constructor: bool,
    pub platforms: PlatformSet,
    #[serde(default)]
    pub visibility: PlatformMap<Visibility>,
    #[serde(default)]
    pub modifier: PlatformMap<Modifier>,
    #[serde(default)]
    pub generics: Vec<TypeParameter>,
    #[serde(default)]
    pub receiver: Option<Parameter>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub return_type: Projection,
    #[serde(default)]
    pub extras: Extras,
}

impl Function {
    pub fn new(
        id: SymbolId,
        name: impl Into<String>,
        platforms: impl IntoIterator<Item = Platform>,
        return_type: Projection,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            is_constructor: false,
            platforms: platforms.into_iter().collect(),
            visibility: PlatformMap::new(),
            modifier: PlatformMap::new(),
            generics: Vec::new(),
            receiver: None,
            parameters: Vec::new(),
            return_type,
            extras: Extras::default(),
        }
    }
}

/// A value parameter or receiver of a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: SymbolId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Projection,
    #[serde(default)]
    pub extras: Extras,
}

impl Parameter {
    pub fn new(id: SymbolId, name: impl Into<String>, ty: Projection) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ty,
            extras: Extras::default(),
        }
    }

    /// An unnamed receiver parameter
    pub fn receiver(id: SymbolId, ty: Projection) -> Self {
        Self {
            id,
            name: None,
            ty,
            extras: Extras::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: SymbolId,
    pub name: String,
    pub platforms: PlatformSet,
    #[serde(default)]
    pub visibility: PlatformMap<Visibility>,
    #[serde(default)]
    pub modifier: PlatformMap<Modifier>,
    #[serde(default)]
    pub generics: Vec<TypeParameter>,
    #[serde(default)]
    pub receiver: Option<Parameter>,
    #[serde(rename = "type")]
    pub ty: Projection,
    #[serde(default)]
    pub getter: Option<Function>,
    /// Present for mutable properties
    #[serde(default)]
    pub setter: Option<Function>,
    #[serde(default)]
    pub extras: Extras,
}

impl Property {
    pub fn new(
        id: SymbolId,
        name: impl Into<String>,
        platforms: impl IntoIterator<Item = Platform>,
        ty: Projection,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            platforms: platforms.into_iter().collect(),
            visibility: PlatformMap::new(),
            modifier: PlatformMap::new(),
            generics: Vec::new(),
            receiver: None,
            ty,
            getter: None,
            setter: None,
            extras: Extras::default(),
        }
    }

    pub fn is_mutable(&self) -> bool {
        self.setter.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub id: SymbolId,
    pub name: String,
    pub platforms: PlatformSet,
    #[serde(default)]
    pub visibility: PlatformMap<Visibility>,
    /// The alias itself as a type, including its own type parameters
    #[serde(rename = "type")]
    pub ty: Projection,
    /// The aliased type on each platform
    pub underlying: PlatformMap<Projection>,
    #[serde(default)]
    pub generics: Vec<TypeParameter>,
    #[serde(default)]
    pub extras: Extras,
}

impl TypeAlias {
    pub fn new(id: SymbolId, name: impl Into<String>, underlying: PlatformMap<Projection>) -> Self {
        Self {
            ty: Projection::named(id.clone()),
            id,
            name: name.into(),
            platforms: underlying.keys().cloned().collect(),
            visibility: PlatformMap::new(),
            underlying,
            generics: Vec::new(),
            extras: Extras::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub id: SymbolId,
    pub name: String,
    pub platforms: PlatformSet,
    /// Upper bounds, empty when unbounded
    #[serde(default)]
    pub bounds: Vec<Projection>,
    #[serde(default)]
    pub extras: Extras,
}

impl TypeParameter {
    pub fn new(
        id: SymbolId,
        name: impl Into<String>,
        platforms: impl IntoIterator<Item = Platform>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            platforms: platforms.into_iter().collect(),
            bounds: Vec::new(),
            extras: Extras::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumEntry {
    pub id: SymbolId,
    pub name: String,
    pub platforms: PlatformSet,
    #[serde(default)]
    pub extras: Extras,
}

impl EnumEntry {
    pub fn new(
        id: SymbolId,
        name: impl Into<String>,
        platforms: impl IntoIterator<Item = Platform>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            platforms: platforms.into_iter().collect(),
            extras: Extras::default(),
        }
    }
}
