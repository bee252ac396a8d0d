//! Byte-exact rendering of small trees.

use cppforge_ast::{
    BasicType, Enum, EnumValue, Function, Include, Namespace, Node, NodeRef, SourceFile,
    TypeExpression, Variable,
};
use cppforge_printer::{
    CodePrinter, Dispatch, Indent, LineEnding, PrinterConfiguration, Settings,
    create_default_printer,
};

fn printer() -> CodePrinter {
    create_default_printer(PrinterConfiguration::default()).expect("Failed to build printer")
}

#[test]
fn test_empty_file() {
    let text = printer().print(&SourceFile::new()).unwrap();
    assert_eq!(text, "\n");
}

#[test]
fn test_includes_only() {
    let file = SourceFile::new()
        .include(Include::local("foo.hpp"))
        .include(Include::local("bar.h"));
    let text = printer().print(&file).unwrap();
    assert_eq!(text, "#include \"foo.hpp\"\n#include \"bar.h\"\n\n");
}

#[test]
fn test_enum_definition() {
    let e = Enum::new("foo")
        .value(EnumValue::implicit("A", 0))
        .value(EnumValue::explicit("B", 7))
        .value(EnumValue::implicit("C", 8));
    let text = printer().print(&e).unwrap();
    assert_eq!(text, "enum foo\n{\n    A,\n    B = 7,\n    C\n};\n");
}

#[test]
fn test_function_declaration_with_enum_argument() {
    let text_enum = Enum::new("TextEnum").next("FIRST").next("SECOND");
    let f = Function::new("foo")
        .returns(TypeExpression::basic(BasicType::Long))
        .argument(Variable::new(
            TypeExpression::new(text_enum).const_().pointer(),
            "a",
        ))
        .argument(
            Variable::new(TypeExpression::basic(BasicType::Int).pointer(), "b")
                .default_value("nullptr"),
        );
    let text = printer().print(NodeRef::Function(&f)).unwrap();
    assert_eq!(text, "long foo(const TextEnum* a, int* b = nullptr);\n");
}

#[test]
fn test_triple_pointer() {
    let ty = TypeExpression::basic(BasicType::Float)
        .pointer()
        .pointer()
        .pointer();
    assert_eq!(printer().print(&ty).unwrap(), "float***");
}

fn sample_namespace() -> Namespace {
    let foo2 = Function::new("foo2")
        .returns(TypeExpression::basic(BasicType::Bool))
        .body("return true;");
    let bar = Function::new("bar")
        .returns(TypeExpression::basic(BasicType::Double))
        .argument(Variable::new(
            TypeExpression::basic(BasicType::Char).const_(),
            "a",
        ));
    Namespace::new("TestNamespace")
        .item(Node::Function(
            Function::new("foo").returns(TypeExpression::basic(BasicType::Float)),
        ))
        .item(Namespace::new("TestNested").item(Node::Function(foo2)))
        .item(Node::Function(bar))
}

#[test]
fn test_nested_namespace() {
    let text = printer().print(&sample_namespace()).unwrap();
    assert_eq!(
        text,
        "namespace TestNamespace\n{\n    float foo();\n    namespace TestNested\n    {\n        bool foo2()\n        {\n            return true;\n        }\n    }\n    double bar(const char a);\n}\n"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let printer = printer();
    let ns = sample_namespace();
    assert_eq!(printer.print(&ns).unwrap(), printer.print(&ns).unwrap());
}

#[test]
fn test_explicit_configuration_overrides_printer_default() {
    let printer = printer();
    let config = PrinterConfiguration::new(Indent::Tabs(1), LineEnding::CrLf);
    let e = Enum::new("E").next("X").next("Y");
    let text = printer.render((&e).into(), &config, None).unwrap();
    assert_eq!(text, "enum E\r\n{\r\n\tX,\r\n\tY\r\n};\r\n");
}

#[test]
fn test_tree_from_json() {
    let json = r#"{
        "kind": "namespace",
        "node": {
            "name": "geo",
            "content": [
                {
                    "kind": "enum",
                    "node": {
                        "name": "Axis",
                        "scope": "class",
                        "values": [
                            { "name": "X" },
                            { "name": "Y", "value": 4, "is_default": false }
                        ]
                    }
                },
                {
                    "kind": "variable",
                    "node": {
                        "name": "origin",
                        "type": {
                            "details": { "kind": "stub_type", "node": { "name": "Point" } },
                            "modifiers": { "is_const": true }
                        },
                        "default_value": "{}"
                    }
                }
            ]
        }
    }"#;
    let tree: Node = serde_json::from_str(json).unwrap();
    let text = printer().print(&tree).unwrap();
    assert_eq!(
        text,
        "namespace geo\n{\n    enum class Axis\n    {\n        X,\n        Y = 4\n    };\n    const Point origin = {};\n}\n"
    );
}

#[test]
fn test_settings_file_drives_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cppforge.toml");
    std::fs::write(&path, "[printer]\nindent_width = 2\n").unwrap();

    let settings = Settings::from_file(&path).unwrap();
    let config = settings.printer.configuration().unwrap();
    let printer = create_default_printer(config).unwrap();
    let ns = Namespace::new("n").item(Node::Variable(Variable::new(
        TypeExpression::basic(BasicType::Int),
        "x",
    )));
    assert_eq!(printer.print(&ns).unwrap(), "namespace n\n{\n  int x;\n}\n");
}

#[test]
fn test_missing_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().starts_with("failed to read"));
}
