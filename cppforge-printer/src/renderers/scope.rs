//! Namespaces, `extern "C"` blocks and aliases.

use cppforge_ast::NodeRef;

use super::{print_nested, print_preamble};
use crate::{Dispatch, Error, Formatter, PrinterConfiguration, Render, Result};

/// `namespace Name { ... }` with content one level deeper. Nested namespaces
/// are printed as nested blocks, never collapsed to `A::B`.
pub struct NamespaceRenderer;

impl Render for NamespaceRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let namespace = node
            .as_namespace()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut fmt = Formatter::new(*configuration);
        if namespace.name.is_empty() {
            fmt.print_line("namespace");
        } else {
            fmt.print_line(&format!("namespace {}", namespace.name));
        }
        fmt.print_line("{");
        print_nested(printer, &mut fmt, &namespace.content, node)?;
        fmt.print_line("}");
        Ok(fmt.into_text())
    }
}

/// `extern "C"` linkage: inline for a single declaration, a block otherwise.
pub struct ExternCRenderer;

impl Render for ExternCRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let extern_c = node
            .as_extern_c()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut fmt = Formatter::new(*configuration);
        if let [single] = extern_c.content.as_slice() {
            let child = printer.render(single.as_node_ref(), configuration, Some(node))?;
            fmt.print_line(&format!("extern \"C\" {}", child.trim()));
            return Ok(fmt.into_text());
        }
        fmt.print_line("extern \"C\"");
        fmt.print_line("{");
        print_nested(printer, &mut fmt, &extern_c.content, node)?;
        fmt.print_line("}");
        Ok(fmt.into_text())
    }
}

/// `typedef <declarator>;`
pub struct TypedefRenderer;

impl Render for TypedefRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let typedef = node
            .as_typedef()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut fmt = Formatter::new(*configuration);
        print_preamble(printer, &mut fmt, typedef.comment.as_ref(), &[], node)?;
        // The typedef context makes the type renderer place the alias name.
        let declarator = printer.render((&typedef.ty).into(), configuration, Some(node))?;
        fmt.print_line(&format!("typedef {declarator};"));
        Ok(fmt.into_text())
    }
}

/// `using Name = <type>;`
pub struct UsingRenderer;

impl Render for UsingRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let using = node
            .as_using()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let mut fmt = Formatter::new(*configuration);
        print_preamble(printer, &mut fmt, using.comment.as_ref(), &[], node)?;
        let ty = printer.render((&using.ty).into(), configuration, Some(node))?;
        fmt.print_line(&format!("using {} = {ty};", using.name));
        Ok(fmt.into_text())
    }
}

/// `using namespace a::b;`
pub struct UsingNamespaceRenderer;

impl Render for UsingNamespaceRenderer {
    fn render(
        &self,
        _printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let using = node
            .as_using_namespace()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        Ok(configuration.format_line(&format!(
            "using namespace {};",
            using.namespaces.join("::")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::test_printer;
    use cppforge_ast::{
        BasicType, ExternC, Function, FunctionType, Namespace, Node, TypeExpression, Typedef,
        Using, UsingNamespace, Variable,
    };

    #[test]
    fn test_anonymous_namespace() {
        let ns = Namespace::new("").item(Node::Variable(Variable::new(
            TypeExpression::basic(BasicType::Int),
            "counter",
        )));
        assert_eq!(
            test_printer().print(&ns).unwrap(),
            "namespace\n{\n    int counter;\n}\n"
        );
    }

    #[test]
    fn test_typedefs() {
        let printer = test_printer();
        let t = Typedef::new("Byte", TypeExpression::basic(BasicType::UnsignedChar));
        assert_eq!(printer.print(&t).unwrap(), "typedef unsigned char Byte;\n");

        let callback = FunctionType::new(TypeExpression::basic(BasicType::Void))
            .argument(TypeExpression::basic(BasicType::Int));
        let t = Typedef::new("Callback", TypeExpression::new(callback).pointer());
        assert_eq!(
            printer.print(&t).unwrap(),
            "typedef void (*Callback)(int);\n"
        );
    }

    #[test]
    fn test_using_alias_and_directive() {
        let printer = test_printer();
        let u = Using::new(
            "Names",
            TypeExpression::stub("vector")
                .namespace("std")
                .template_argument(TypeExpression::stub("string").namespace("std")),
        );
        assert_eq!(
            printer.print(&u).unwrap(),
            "using Names = std::vector<std::string>;\n"
        );
        let d = UsingNamespace::new(["std", "chrono"]);
        assert_eq!(printer.print(&d).unwrap(), "using namespace std::chrono;\n");
    }

    #[test]
    fn test_extern_c_single_declaration() {
        let f = Function::new("init").returns(TypeExpression::basic(BasicType::Int));
        let block = ExternC::new().item(Node::Function(f));
        assert_eq!(
            test_printer().print(&block).unwrap(),
            "extern \"C\" int init();\n"
        );
    }

    #[test]
    fn test_extern_c_block() {
        let block = ExternC::new()
            .item(Node::Function(
                Function::new("start").returns(TypeExpression::basic(BasicType::Void)),
            ))
            .item(Node::Function(
                Function::new("stop").returns(TypeExpression::basic(BasicType::Void)),
            ));
        assert_eq!(
            test_printer().print(&block).unwrap(),
            "extern \"C\"\n{\n    void start();\n    void stop();\n}\n"
        );
    }
}
