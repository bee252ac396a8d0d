//! Snapshot tests for whole-file rendering.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use cppforge_ast::{
    AccessSpecifier, Attribute, AttributeDeclaration, BaseClass, BasicType, Class, Comment,
    Constructor, Enum, EnumScope, ExternC, Field, Function, FunctionModifiers, FunctionType,
    Include, Initializer, Namespace, Node, Section, SourceFile, Template, TemplateParameter,
    TypeExpression, Typedef, Union, Using, UsingNamespace, Variable,
};
use cppforge_printer::{PrinterConfiguration, create_default_printer};

fn render(node: &Node) -> String {
    let printer =
        create_default_printer(PrinterConfiguration::default()).expect("Failed to build printer");
    printer.print(node).expect("Failed to render tree")
}

fn double() -> TypeExpression {
    TypeExpression::basic(BasicType::Double)
}

#[test]
fn test_class_hierarchy_header() {
    let kind = || TypeExpression::new(Enum::forward("Kind"));

    let shape = Class::new("Shape")
        .comment(Comment::one_line(" Base of every drawable shape."))
        .member(Section::new(AccessSpecifier::Public))
        .member(Node::Destructor(Function::new("Shape").modifiers(
            FunctionModifiers {
                is_virtual: true,
                is_default: true,
                ..Default::default()
            },
        )))
        .member(Node::Method(Function::new("area").returns(double()).modifiers(
            FunctionModifiers {
                is_pure_virtual: true,
                is_const: true,
                ..Default::default()
            },
        )))
        .member(Node::Method(
            Function::new("kind")
                .returns(kind())
                .modifiers(FunctionModifiers {
                    is_const: true,
                    ..Default::default()
                })
                .body("return kind_;"),
        ))
        .member(Field::new(kind(), "kind_").access(AccessSpecifier::Protected));

    let circle = Class::new_struct("Circle")
        .base(BaseClass::new(Class::forward("Shape")))
        .member(
            Constructor::new("Circle")
                .argument(Variable::new(double(), "radius"))
                .initializer(Initializer::new("radius_", "radius"))
                .modifiers(FunctionModifiers {
                    is_explicit: true,
                    ..Default::default()
                })
                .body(""),
        )
        .member(Node::Method(
            Function::new("area")
                .returns(double())
                .attribute(AttributeDeclaration::new().attribute(Attribute::new("nodiscard")))
                .modifiers(FunctionModifiers {
                    is_const: true,
                    is_override: true,
                    ..Default::default()
                })
                .body("return 3.14159 * radius_ * radius_;"),
        ))
        .member(Field::new(double(), "radius_").access(AccessSpecifier::Private));

    let file = SourceFile::new()
        .header_guard("SHAPES_HPP")
        .include(Include::standard("cstdint"))
        .include(Include::local("base.hpp"))
        .item(
            Namespace::new("shapes")
                .item(
                    Enum::new("Kind")
                        .scoped(EnumScope::Class)
                        .underlying(TypeExpression::stub("uint8_t").namespace("std"))
                        .next("Circle")
                        .next("Square"),
                )
                .item(shape)
                .item(circle),
        );

    insta::assert_snapshot!("class_hierarchy_header", render(&file.into()));
}

#[test]
fn test_c_api_file() {
    let callback = Typedef::new(
        "event_cb",
        TypeExpression::new(
            FunctionType::new(TypeExpression::basic(BasicType::Void))
                .argument(TypeExpression::stub("event").const_().pointer())
                .argument(TypeExpression::basic(BasicType::Int)),
        )
        .pointer(),
    );
    let node_ptr = || TypeExpression::new(Union::forward("node")).pointer();

    let list = Union::new("node")
        .member(Field::new(node_ptr(), "next"))
        .member(Field::new(TypeExpression::stub("size_t"), "size"));

    let api = ExternC::new()
        .item(Node::Function(
            Function::new("queue_push")
                .returns(TypeExpression::basic(BasicType::Int))
                .argument(Variable::new(node_ptr(), "head"))
                .argument(Variable::new(TypeExpression::new(callback.clone()), "cb")),
        ))
        .item(Node::Function(
            Function::new("queue_len")
                .returns(TypeExpression::stub("size_t"))
                .argument(Variable::new(node_ptr().const_(), "head")),
        ));

    let file = SourceFile::new()
        .include(Include::standard("stddef.h"))
        .item(Comment::multi_line(
            "Event queue C API.\nGenerated, do not edit.",
        ))
        .item(callback)
        .item(list)
        .item(api);

    insta::assert_snapshot!("c_api_file", render(&file.into()));
}

#[test]
fn test_template_namespace() {
    let t = TemplateParameter::new("T");
    let getter = |returns: TypeExpression, body: &str| {
        Node::Method(
            Function::new("get")
                .returns(returns)
                .modifiers(FunctionModifiers {
                    is_const: true,
                    ..Default::default()
                })
                .body(body),
        )
    };

    let generic = Class::new("Box")
        .template(Template::new().parameter(t.clone()))
        .member(Section::new(AccessSpecifier::Public))
        .member(getter(
            TypeExpression::new(t.clone()).const_().reference(),
            "return value_;",
        ))
        .member(Section::new(AccessSpecifier::Private))
        .member(Field::new(TypeExpression::new(t), "value_"));

    let specialised = Class::new("Box")
        .template(Template::new().specialisation(TypeExpression::basic(BasicType::Bool)))
        .member(Section::new(AccessSpecifier::Public))
        .member(getter(
            TypeExpression::basic(BasicType::Bool),
            "return bits_ & 1;",
        ))
        .member(Section::new(AccessSpecifier::Private))
        .member(
            Field::new(TypeExpression::basic(BasicType::UnsignedChar), "bits_").default_value("0"),
        );

    let ns = Namespace::new("util")
        .item(UsingNamespace::new(["std"]))
        .item(generic)
        .item(specialised)
        .item(Using::new(
            "Flag",
            TypeExpression::new(Class::forward("Box"))
                .template_argument(TypeExpression::basic(BasicType::Bool)),
        ));

    insta::assert_snapshot!("template_namespace", render(&ns.into()));
}
