//! Integration tests for signature rendering across dialects and platforms

use sigdoc_core::config::{DialectConfig, SignatureConfig};
use sigdoc_core::content::{ContentKind, ContentNode, ContentTree};
use sigdoc_core::model::{
    Annotation, AnnotationValue, Classlike, ClasslikeKind, Declaration, ExtraModifier,
    FunctionMarker, Function, ModelError, ModelFile, Modifier, Parameter, Projection, Property,
    SymbolId, TypeAlias, TypeParameter, Visibility,
};
use sigdoc_core::signature::{
    AtStrategy, Dialect, JavaProjections, JavaSignatureProvider, KotlinProjections,
    KotlinSignatureProvider, SignatureProvider,
};
use sigdoc_core::testutil::{
    everywhere, java_text, kotlin_text, per_platform, platforms, projection_text, render_text,
    symbol_lines, StringFactory,
};

fn kotlin(name: &str) -> Projection {
    Projection::named(SymbolId::class("kotlin", name))
}

fn leaves(node: &ContentNode) -> Vec<&ContentNode> {
    if node.children().is_empty() {
        vec![node]
    } else {
        node.children().iter().flat_map(leaves).collect()
    }
}

/// Platforms of the first leaf whose text is `text`
fn tagged(node: &ContentNode, text: &str) -> Vec<String> {
    leaves(node)
        .into_iter()
        .find(|leaf| leaf.plain_text() == text)
        .map(|leaf| leaf.platforms().iter().map(ToString::to_string).collect())
        .unwrap_or_default()
}

#[test]
fn test_extension_function_type() {
    let handler = Projection::function_type(
        SymbolId::class("kotlin", "Function3"),
        FunctionMarker::Extension,
        vec![kotlin("String"), kotlin("Int"), kotlin("Boolean"), kotlin("Unit")],
    );
    assert_eq!(
        projection_text(&KotlinProjections, &handler),
        "String.(Int, Boolean) -> Unit"
    );

    let property = Property::new(
        SymbolId::callable("pkg", None, "handler"),
        "handler",
        platforms(&["jvm"]),
        handler,
    );
    assert_eq!(
        kotlin_text(&Declaration::Property(property)),
        "val handler: String.(Int, Boolean) -> Unit"
    );
}

#[test]
fn test_typealias_splits_by_underlying_type() {
    let alias = TypeAlias::new(
        SymbolId::class("pkg", "X"),
        "X",
        per_platform([("js", kotlin("Int")), ("jvm", kotlin("Long"))]),
    );
    let node = KotlinSignatureProvider::new().signature(&Declaration::TypeAlias(alias.clone()));

    assert_eq!(node.kind(), Some(ContentKind::Main));
    assert_eq!(
        symbol_lines(&node),
        vec!["typealias X = Int [js]", "typealias X = Long [jvm]"]
    );

    let java = JavaSignatureProvider::new().signature(&Declaration::TypeAlias(alias));
    assert_eq!(symbol_lines(&java), vec!["X = Int [js]", "X = Long [jvm]"]);
}

#[test]
fn test_typealias_shared_underlying_is_single_symbol() {
    let mut alias = TypeAlias::new(
        SymbolId::class("pkg", "Id"),
        "Id",
        everywhere(&["js", "jvm", "native"], kotlin("String")),
    );
    alias.visibility = everywhere(&["js", "jvm", "native"], Visibility::Internal);
    let node = KotlinSignatureProvider::new().signature(&Declaration::TypeAlias(alias));

    assert_eq!(
        symbol_lines(&node),
        vec!["internal typealias Id = String [js, jvm, native]"]
    );
}

#[test]
fn test_ignored_modifier_is_suppressed() {
    let mut function = Function::new(
        SymbolId::callable("pkg", Some("Shape"), "area"),
        "area",
        platforms(&["js", "jvm"]),
        kotlin("Double"),
    );
    function.modifier = per_platform([("js", Modifier::Final), ("jvm", Modifier::Open)]);
    let node = KotlinSignatureProvider::new().signature(&Declaration::Function(function));

    let text = render_text(&node);
    assert_eq!(text, "open fun area(): Double");
    assert!(!text.contains("final"));
    assert_eq!(tagged(&node, "open "), vec!["jvm"]);
}

#[test]
fn test_visibility_grouped_across_platforms() {
    let mut class = Classlike::new(
        ClasslikeKind::Class,
        SymbolId::class("pkg", "Cache"),
        "Cache",
        platforms(&["js", "jvm", "native"]),
    );
    class.visibility = per_platform([
        ("js", Visibility::Internal),
        ("jvm", Visibility::Public),
        ("native", Visibility::Internal),
    ]);
    let node = KotlinSignatureProvider::new().signature(&Declaration::Classlike(class));

    assert_eq!(render_text(&node), "internal class Cache");
    assert_eq!(tagged(&node, "internal "), vec!["js", "native"]);
    assert_eq!(node.symbols().len(), 1);
}

#[test]
fn test_supertypes_grouped_per_distinct_list() {
    let base = SymbolId::class("pkg", "Base");
    let serializable = SymbolId::class("java.io", "Serializable");
    let mut class = Classlike::new(
        ClasslikeKind::Class,
        SymbolId::class("pkg", "Foo"),
        "Foo",
        platforms(&["js", "jvm", "native"]),
    );
    class.supertypes = per_platform([
        ("js", vec![base.clone()]),
        ("jvm", vec![base.clone(), serializable.clone()]),
        ("native", vec![base]),
    ]);

    let node = KotlinSignatureProvider::new().signature(&Declaration::Classlike(class.clone()));
    assert_eq!(render_text(&node), "class Foo : Base : Base, Serializable");
    assert_eq!(tagged(&node, "Serializable"), vec!["jvm"]);
    assert_eq!(tagged(&node, "Base"), vec!["js", "native"]);

    let java = JavaSignatureProvider::new().signature(&Declaration::Classlike(class));
    assert_eq!(render_text(&java), "class Foo extends Base extends Base, Serializable");
}

#[test]
fn test_java_erases_nullability() {
    let property = Property::new(
        SymbolId::callable("pkg", Some("User"), "nickname"),
        "nickname",
        platforms(&["jvm"]),
        kotlin("String").nullable(),
    );
    let declaration = Declaration::Property(property);

    assert_eq!(kotlin_text(&declaration), "val nickname: String?");
    assert_eq!(java_text(&declaration), "String nickname");
}

#[test]
fn test_at_strategy_counts_in_signatures() {
    let inner = Annotation::new(SymbolId::class("pkg", "Tag"))
        .with_param("value", AnnotationValue::string("\"x\""));
    let outer = Annotation::new(SymbolId::class("pkg", "Tags"))
        .with_param("value", AnnotationValue::Array(vec![AnnotationValue::nested(inner)]));
    let mut function = Function::new(
        SymbolId::callable("pkg", None, "run"),
        "run",
        platforms(&["jvm"]),
        Projection::Void,
    );
    function.extras.annotations = vec![outer];
    let declaration = Declaration::Function(function);

    let kotlin_signature = kotlin_text(&declaration);
    assert_eq!(kotlin_signature, "@Tags(value = [Tag(value = \"x\")])fun run()");
    assert_eq!(kotlin_signature.matches('@').count(), 1);

    let java_signature = java_text(&declaration);
    assert_eq!(java_signature, "@Tags(value = {@Tag(value = \"x\")})void run()");
    assert_eq!(java_signature.matches('@').count(), 2);

    let never = DialectConfig {
        at_strategy: AtStrategy::Never,
        ..DialectConfig::kotlin()
    };
    let silent = KotlinSignatureProvider::with_factory(ContentTree, never).signature(&declaration);
    assert_eq!(render_text(&silent).matches('@').count(), 0);
}

#[test]
fn test_every_projection_renders_in_both_dialects() {
    let list = SymbolId::class("kotlin.collections", "List");
    let all = vec![
        Projection::generic(list.clone(), vec![kotlin("Int")]),
        Projection::function_type(
            SymbolId::class("kotlin", "Function1"),
            FunctionMarker::Function,
            vec![kotlin("Int"), kotlin("Unit")],
        ),
        kotlin("Int").covariant(),
        kotlin("Int").contravariant(),
        kotlin("Int").nullable(),
        Projection::Star,
        Projection::PlatformObject,
        Projection::primitive("int"),
        Projection::Void,
        Projection::Dynamic,
        Projection::type_parameter("T"),
    ];

    for projection in &all {
        assert!(
            !projection_text(&KotlinProjections, projection).is_empty(),
            "{projection:?} renders empty in kotlin"
        );
        assert!(
            !projection_text(&JavaProjections, projection).is_empty(),
            "{projection:?} renders empty in java"
        );
    }
}

#[test]
fn test_every_annotation_value_renders_in_both_dialects() {
    let values = vec![
        AnnotationValue::string("1"),
        AnnotationValue::Enum {
            name: "Level.HIGH".to_string(),
            id: SymbolId::class("pkg", "Level.HIGH"),
        },
        AnnotationValue::Class {
            name: "Foo".to_string(),
            id: SymbolId::class("pkg", "Foo"),
        },
        AnnotationValue::nested(Annotation::new(SymbolId::class("pkg", "Inner"))),
        AnnotationValue::Array(vec![AnnotationValue::string("2")]),
    ];

    for value in values {
        let mut entry = TypeParameter::new(SymbolId::class("pkg", "Box"), "T", platforms(&["jvm"]));
        entry.extras.annotations =
            vec![Annotation::new(SymbolId::class("pkg", "A")).with_param("v", value.clone())];
        let declaration = Declaration::TypeParameter(entry);

        for text in [kotlin_text(&declaration), java_text(&declaration)] {
            let rendered = text.split("v = ").nth(1).unwrap_or_default();
            assert!(!rendered.starts_with(')'), "{value:?} renders empty in {text}");
        }
    }
}

#[test]
fn test_actual_typealias_splits_platforms() {
    let id = SymbolId::class("pkg", "Date");
    let mut class = Classlike::new(
        ClasslikeKind::Class,
        id,
        "Date",
        platforms(&["js", "jvm", "native"]),
    );
    class.extras.modifiers.insert(ExtraModifier::Expect);
    class.extras.actual_typealias = Some(per_platform([(
        "jvm",
        Projection::named(SymbolId::class("java.util", "Date")),
    )]));
    let declaration = Declaration::Classlike(class.clone());

    let node = KotlinSignatureProvider::new().signature(&declaration);
    assert_eq!(node.kind(), Some(ContentKind::Main));
    assert_eq!(
        symbol_lines(&node),
        vec![
            "expect class Date [js, native]",
            "actual typealias Date = Date [jvm]",
        ]
    );

    let java = JavaSignatureProvider::new().signature(&declaration);
    assert_eq!(
        symbol_lines(&java),
        vec!["class Date [js, native]", "Date = Date [jvm]"]
    );

    class.extras.actual_typealias = Some(everywhere(
        &["js", "jvm", "native"],
        Projection::named(SymbolId::class("platform", "Date")),
    ));
    let aliased = KotlinSignatureProvider::new().signature(&Declaration::Classlike(class));
    assert_eq!(
        symbol_lines(&aliased),
        vec!["actual typealias Date = Date [js, jvm, native]"]
    );
}

#[test]
fn test_generic_class_in_both_dialects() {
    let id = SymbolId::class("pkg", "Box");
    let mut t = TypeParameter::new(id.clone(), "T", platforms(&["jvm"]));
    t.bounds = vec![kotlin("Comparable")];
    let mut class = Classlike::new(ClasslikeKind::Class, id, "Box", platforms(&["jvm"]));
    class.generics = vec![t];
    let declaration = Declaration::Classlike(class);

    assert_eq!(kotlin_text(&declaration), "class Box<T : Comparable>");
    assert_eq!(java_text(&declaration), "class Box<T extends Comparable>");
}

#[test]
fn test_primary_constructor_parameters() {
    let id = SymbolId::class("pkg", "Point");
    let mut class = Classlike::new(ClasslikeKind::Class, id.clone(), "Point", platforms(&["jvm"]));
    class.extras.modifiers.insert(ExtraModifier::Data);
    let mut ctor = Function::new(
        id.clone(),
        "Point",
        platforms(&["jvm"]),
        Projection::named(id.clone()),
    );
    ctor.is_constructor = true;
    ctor.extras.primary_constructor = true;
    ctor.parameters = vec![
        Parameter::new(id.clone(), "x", kotlin("Int")),
        Parameter::new(id, "y", kotlin("Int")),
    ];
    class.constructors.push(ctor);

    assert_eq!(
        kotlin_text(&Declaration::Classlike(class)),
        "data class Point(x: Int, y: Int)"
    );
}

#[test]
fn test_extension_function_with_everything() {
    let id = SymbolId::callable("pkg", None, "firstOr");
    let mut function = Function::new(
        id.clone(),
        "firstOr",
        platforms(&["jvm"]),
        Projection::type_parameter("T"),
    );
    function.extras.annotations = vec![Annotation::new(SymbolId::class("kotlin", "Deprecated"))
        .with_param("message", AnnotationValue::string("\"old\""))];
    function.extras.modifiers = [ExtraModifier::Suspend, ExtraModifier::Static]
        .into_iter()
        .collect();
    function.generics = vec![TypeParameter::new(id.clone(), "T", platforms(&["jvm"]))];
    function.receiver = Some(Parameter::receiver(
        id.clone(),
        Projection::generic(
            SymbolId::class("kotlin.collections", "List"),
            vec![Projection::type_parameter("T")],
        ),
    ));
    function.parameters = vec![Parameter::new(id, "default", Projection::type_parameter("T"))];

    assert_eq!(
        kotlin_text(&Declaration::Function(function)),
        "@Deprecated(message = \"old\")suspend fun <T> List<T>.firstOr(default: T): T"
    );
}

#[test]
fn test_parameter_annotations_and_modifiers() {
    let id = SymbolId::callable("pkg", None, "f");
    let mut xs = Parameter::new(id.clone(), "xs", Projection::primitive("int"));
    xs.extras.annotations = vec![Annotation::new(SymbolId::class("pkg", "Ann"))];
    xs.extras.modifiers.insert(ExtraModifier::Vararg);
    let mut function = Function::new(id, "f", platforms(&["jvm"]), Projection::Void);
    function.parameters = vec![xs];
    let declaration = Declaration::Function(function);

    assert_eq!(kotlin_text(&declaration), "fun f(@Ann() vararg xs: Int)");
    assert_eq!(java_text(&declaration), "void f(@Ann() int xs)");
}

#[test]
fn test_override_extension_property() {
    let id = SymbolId::callable("pkg", None, "len");
    let mut property = Property::new(id.clone(), "len", platforms(&["jvm"]), kotlin("Int"));
    property.extras.modifiers.insert(ExtraModifier::Override);
    property.receiver = Some(Parameter::receiver(id, kotlin("String")));
    let declaration = Declaration::Property(property);

    assert_eq!(kotlin_text(&declaration), "override val String.len: Int");
    assert_eq!(java_text(&declaration), "Int len");
}

#[test]
fn test_unit_return_type_is_hidden() {
    let function = Function::new(
        SymbolId::callable("pkg", None, "log"),
        "log",
        platforms(&["jvm"]),
        kotlin("Unit"),
    );
    assert_eq!(kotlin_text(&Declaration::Function(function)), "fun log()");
}

#[test]
fn test_custom_factory() {
    let mut function = Function::new(
        SymbolId::callable("pkg", None, "inc"),
        "inc",
        platforms(&["jvm"]),
        kotlin("Int"),
    );
    function.parameters = vec![Parameter::new(
        SymbolId::callable("pkg", None, "inc"),
        "x",
        kotlin("Int"),
    )];
    let declaration = Declaration::Function(function);

    let kotlin = KotlinSignatureProvider::with_factory(StringFactory, DialectConfig::kotlin());
    assert_eq!(kotlin.signature(&declaration), "fun [inc](x: [Int]): [Int]");

    let java = JavaSignatureProvider::with_factory(StringFactory, DialectConfig::java());
    assert_eq!(java.signature(&declaration), "[Int]\u{a0}[inc]([Int]\u{a0}[x])");
}

#[test]
fn test_configured_java_brackets() {
    let config = SignatureConfig::parse(
        "[java]\nlist_brackets = \"[]\"\nclass_suffix = \"::class.java\"\n",
    )
    .unwrap();
    let annotation = Annotation::new(SymbolId::class("pkg", "Uses")).with_param(
        "value",
        AnnotationValue::Array(vec![AnnotationValue::Class {
            name: "Foo".to_string(),
            id: SymbolId::class("pkg", "Foo"),
        }]),
    );
    let mut function = Function::new(
        SymbolId::callable("pkg", None, "run"),
        "run",
        platforms(&["jvm"]),
        Projection::Void,
    );
    function.extras.annotations = vec![annotation];

    let node = Dialect::Java.provider(&config).signature(&Declaration::Function(function));
    assert_eq!(render_text(&node), "@Uses(value = [Foo::class.java])void run()");
}

const MODEL: &str = r#"{
    "declarations": [
        {
            "declaration": "function",
            "id": { "package": "demo", "callable": "greet" },
            "name": "greet",
            "platforms": ["jvm", "js"],
            "visibility": { "jvm": "public", "js": "public" },
            "parameters": [
                {
                    "id": { "package": "demo", "callable": "greet" },
                    "name": "name",
                    "type": { "kind": "named", "value": { "id": { "package": "kotlin", "class_names": "String" } } }
                }
            ],
            "return_type": { "kind": "void" }
        },
        {
            "declaration": "enum-entry",
            "id": { "package": "demo", "class_names": "Color.RED" },
            "name": "RED",
            "platforms": ["jvm"]
        }
    ]
}"#;

#[test]
fn test_model_file_end_to_end() {
    let model = ModelFile::parse(MODEL).unwrap();
    model.validate().unwrap();

    let config = SignatureConfig::default();
    let kotlin = Dialect::Kotlin.provider(&config);
    let java = Dialect::Java.provider(&config);
    let greet = &model.declarations[0];

    assert_eq!(symbol_lines(&kotlin.signature(greet)), vec!["fun greet(name: String) [js, jvm]"]);
    assert_eq!(java.signature(greet).plain_text(), "public void\u{a0}greet(String\u{a0}name)");
    assert_eq!(render_text(&kotlin.signature(&model.declarations[1])), "");
}

#[test]
fn test_model_validation_reports_missing_platform() {
    let broken = MODEL.replace(
        r#""visibility": { "jvm": "public", "js": "public" },"#,
        r#""visibility": { "jvm": "public" },"#,
    );
    let model = ModelFile::parse(&broken).unwrap();
    let err = model.validate().unwrap_err();

    assert!(matches!(
        err,
        ModelError::MissingPlatform { ref platform, .. } if platform.as_str() == "js"
    ));
    assert_eq!(err.to_string(), "demo//greet: visibility has no value for platform 'js'");
}
