//! Functions, methods, constructors and destructors.

use cppforge_ast::{Function, NodeKind, NodeRef};

use super::{print_preamble, requires_clause, specialisation_suffix, template_header};
use crate::{Dispatch, Error, Formatter, PrinterConfiguration, Render, Result};

/// Declaration or definition of any function-like node.
///
/// `explicit`, `virtual`, `override` and `final` only make sense inside a
/// class body, so they are printed only when the context is a class or
/// union. Pure virtual functions print `virtual` and `= 0` anywhere.
pub struct FunctionRenderer;

impl Render for FunctionRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let function = node
            .as_function()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let in_class = matches!(
            context.map(|c| c.kind()),
            Some(NodeKind::Class | NodeKind::Union)
        );

        let mut fmt = Formatter::new(*configuration);
        print_preamble(
            printer,
            &mut fmt,
            function.comment.as_ref(),
            &function.attributes,
            node,
        )?;
        if let Some(template) = &function.template {
            fmt.print_line(&template_header(printer, template, configuration, node)?);
        }

        let signature = signature(printer, function, node, configuration, in_class)?;
        let m = &function.modifiers;
        let Some(body) = function
            .body
            .as_deref()
            .filter(|_| !(m.is_pure_virtual || m.is_default || m.is_delete))
        else {
            fmt.print_line(&format!("{signature};"));
            return Ok(fmt.into_text());
        };

        match node.as_constructor() {
            Some(ctor) if !ctor.initializers.is_empty() => {
                fmt.print_line(&format!("{signature} :"));
                fmt.push_indent();
                let last = ctor.initializers.len() - 1;
                for (i, init) in ctor.initializers.iter().enumerate() {
                    let comma = if i == last { "" } else { "," };
                    fmt.print_line(&format!("{}({}){comma}", init.name, init.value));
                }
                fmt.push_dedent();
            }
            _ => {
                fmt.print_line(&signature);
            }
        }
        fmt.print_line("{");
        fmt.push_indent();
        for line in body.lines() {
            fmt.print_line(line);
        }
        fmt.push_dedent();
        fmt.print_line("}");
        Ok(fmt.into_text())
    }

    fn is_fallback_handler(&self) -> bool {
        true
    }
}

/// Everything from the leading specifiers to the trailing `= default`.
fn signature(
    printer: &dyn Dispatch,
    function: &Function,
    node: NodeRef<'_>,
    configuration: &PrinterConfiguration,
    in_class: bool,
) -> Result<String> {
    let m = &function.modifiers;
    let mut text = String::new();

    let prefixes = [
        (in_class && m.is_explicit, "explicit "),
        (m.is_pure_virtual || (in_class && m.is_virtual), "virtual "),
        (m.is_constexpr, "constexpr "),
        (m.is_consteval, "consteval "),
        (m.is_inline, "inline "),
        (m.is_static, "static "),
    ];
    for (set, word) in prefixes {
        if set {
            text.push_str(word);
        }
    }

    if let Some(return_type) = &function.return_type {
        text.push_str(&printer.render(return_type.into(), configuration, Some(node))?);
        text.push(' ');
    }
    for namespace in &function.namespaces {
        text.push_str(namespace);
        text.push_str("::");
    }
    if node.kind() == NodeKind::Destructor && !function.name.starts_with('~') {
        text.push('~');
    }
    text.push_str(&function.name);
    text.push_str(&specialisation_suffix(
        printer,
        function.template.as_ref(),
        configuration,
        node,
    )?);

    let arguments = function
        .arguments
        .iter()
        .map(|arg| printer.render(NodeRef::Argument(arg), configuration, Some(node)))
        .collect::<Result<Vec<_>>>()?;
    text.push('(');
    text.push_str(&arguments.join(", "));
    text.push(')');

    let qualifiers = [
        (m.is_const, " const"),
        (m.is_volatile, " volatile"),
        (m.is_noexcept, " noexcept"),
    ];
    let specifiers = [
        (in_class && m.is_override, " override"),
        (in_class && m.is_final, " final"),
        (m.is_pure_virtual, " = 0"),
        (m.is_default, " = default"),
        (m.is_delete, " = delete"),
    ];
    for (set, word) in qualifiers {
        if set {
            text.push_str(word);
        }
    }
    text.push_str(&requires_clause(
        printer,
        &function.requires,
        configuration,
        node,
    )?);
    for (set, word) in specifiers {
        if set {
            text.push_str(word);
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CodePrinter, renderers::test_printer};
    use cppforge_ast::{
        BasicType, Class, Concept, Constructor, FunctionModifiers, Initializer, Template,
        TemplateParameter, TypeExpression, Variable,
    };

    fn in_class(printer: &CodePrinter, node: NodeRef<'_>) -> String {
        let class = Class::new("Owner");
        printer
            .render(node, printer.configuration(), Some((&class).into()))
            .unwrap()
    }

    #[test]
    fn test_definition_with_body() {
        let f = Function::new("answer")
            .returns(TypeExpression::basic(BasicType::Int))
            .body("int x = 41;\nreturn x + 1;");
        assert_eq!(
            test_printer().print(NodeRef::Function(&f)).unwrap(),
            "int answer()\n{\n    int x = 41;\n    return x + 1;\n}\n"
        );
    }

    #[test]
    fn test_specifier_order() {
        let f = Function::new("make")
            .returns(TypeExpression::stub("Widget"))
            .modifiers(FunctionModifiers {
                is_static: true,
                is_inline: true,
                is_constexpr: true,
                is_noexcept: true,
                ..Default::default()
            });
        assert_eq!(
            test_printer().print(NodeRef::Function(&f)).unwrap(),
            "constexpr inline static Widget make() noexcept;\n"
        );
    }

    #[test]
    fn test_class_scope_modifiers_need_class_context() {
        let printer = test_printer();
        let f = Function::new("draw")
            .returns(TypeExpression::basic(BasicType::Void))
            .modifiers(FunctionModifiers {
                is_virtual: true,
                is_const: true,
                is_override: true,
                ..Default::default()
            });
        assert_eq!(
            in_class(&printer, NodeRef::Method(&f)),
            "virtual void draw() const override;\n"
        );
        assert_eq!(
            printer.print(NodeRef::Method(&f)).unwrap(),
            "void draw() const;\n"
        );
    }

    #[test]
    fn test_pure_virtual_ignores_body() {
        let f = Function::new("area")
            .returns(TypeExpression::basic(BasicType::Double))
            .body("return 0;")
            .modifiers(FunctionModifiers {
                is_pure_virtual: true,
                is_const: true,
                ..Default::default()
            });
        assert_eq!(
            in_class(&test_printer(), NodeRef::Method(&f)),
            "virtual double area() const = 0;\n"
        );
    }

    #[test]
    fn test_destructor_and_defaulted() {
        let printer = test_printer();
        let d = Function::new("Widget").modifiers(FunctionModifiers {
            is_virtual: true,
            is_default: true,
            ..Default::default()
        });
        assert_eq!(
            in_class(&printer, NodeRef::Destructor(&d)),
            "virtual ~Widget() = default;\n"
        );
        let d = Function::new("~Widget").namespace("Widget").body("");
        assert_eq!(
            printer.print(NodeRef::Destructor(&d)).unwrap(),
            "Widget::~Widget()\n{\n}\n"
        );
    }

    #[test]
    fn test_constructor_initializer_list() {
        let ctor = Constructor::new("Point")
            .argument(Variable::new(TypeExpression::basic(BasicType::Int), "x"))
            .argument(Variable::new(TypeExpression::basic(BasicType::Int), "y"))
            .initializer(Initializer::new("x_", "x"))
            .initializer(Initializer::new("y_", "y"))
            .body("");
        assert_eq!(
            test_printer().print(&ctor).unwrap(),
            "Point(int x, int y) :\n    x_(x),\n    y_(y)\n{\n}\n"
        );
    }

    #[test]
    fn test_explicit_constructor_declaration() {
        let ctor = Constructor::new("Buffer")
            .argument(Variable::new(TypeExpression::stub("size_t"), "size"))
            .modifiers(FunctionModifiers {
                is_explicit: true,
                ..Default::default()
            });
        assert_eq!(
            in_class(&test_printer(), (&ctor).into()),
            "explicit Buffer(size_t size);\n"
        );
    }

    #[test]
    fn test_template_function() {
        let t = TemplateParameter::new("T");
        let f = Function::new("max")
            .template(Template::new().parameter(t.clone()))
            .returns(TypeExpression::new(t.clone()))
            .argument(Variable::new(TypeExpression::new(t.clone()).const_().reference(), "a"))
            .argument(Variable::new(TypeExpression::new(t).const_().reference(), "b"))
            .body("return a < b ? b : a;");
        assert_eq!(
            test_printer().print(NodeRef::Function(&f)).unwrap(),
            "template<typename T>\nT max(const T& a, const T& b)\n{\n    return a < b ? b : a;\n}\n"
        );
    }

    #[test]
    fn test_requires_clauses() {
        let t = TemplateParameter::new("T");
        let concept_t = Concept::requirement("Concept").argument(TypeExpression::new(t.clone()));
        let f = Function::new("foo")
            .template(
                Template::new()
                    .parameter(t)
                    .requires(concept_t.clone())
                    .requires("or")
                    .requires("true"),
            )
            .returns(TypeExpression::basic(BasicType::Void))
            .requires("true")
            .requires("||")
            .requires(concept_t);
        assert_eq!(
            test_printer().print(NodeRef::Function(&f)).unwrap(),
            "template<typename T> requires Concept<T> or true\nvoid foo() requires true || Concept<T>;\n"
        );
    }

    #[test]
    fn test_constrained_parameter_and_trailing_qualifiers() {
        let constrained = TemplateParameter::new("T").constraint(
            Concept::requirement("DefaultConcept").argument(TypeExpression::basic(BasicType::Int)),
        );
        let f = Function::new("foo")
            .template(Template::new().parameter(constrained))
            .returns(TypeExpression::basic(BasicType::Void));
        assert_eq!(
            test_printer().print(NodeRef::Function(&f)).unwrap(),
            "template<DefaultConcept<int> T>\nvoid foo();\n"
        );

        let m = Function::new("get")
            .returns(TypeExpression::basic(BasicType::Int))
            .modifiers(FunctionModifiers {
                is_const: true,
                is_delete: true,
                ..Default::default()
            })
            .requires("true");
        assert_eq!(
            in_class(&test_printer(), NodeRef::Method(&m)),
            "int get() const requires true = delete;\n"
        );
    }

    #[test]
    fn test_explicit_specialisation() {
        let f = Function::new("size_of")
            .template(Template::new().specialisation(TypeExpression::basic(BasicType::Char)))
            .returns(TypeExpression::basic(BasicType::Int));
        assert_eq!(
            test_printer().print(NodeRef::Function(&f)).unwrap(),
            "template<>\nint size_of<char>();\n"
        );
    }
}
