//! Type expressions, base types and template parameters.

use cppforge_ast::{FunctionType, Node, NodeRef, ReferenceKind, TypeModifiers};

use crate::{Dispatch, Error, PrinterConfiguration, Render, Result};

/// Prints a type at its usage site, including the declarator around a
/// declared name when the context is a variable, argument, field or typedef.
pub struct TypeExpressionRenderer;

impl Render for TypeExpressionRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let ty = node
            .as_type_expression()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let name = context.and_then(|c| c.declared_name());

        let prefix = modifier_prefix(&ty.modifiers);
        let declarator = format!(
            "{}{}{}",
            "*".repeat(ty.pointer),
            reference_suffix(ty.reference),
            name.unwrap_or_default()
        );
        let arrays: String = ty
            .arrays
            .iter()
            .map(|size| format!("[{}]", size.as_deref().unwrap_or_default()))
            .collect();

        if let Node::FunctionType(function) = &*ty.details {
            let (ret, args) = signature_parts(printer, function, configuration, node)?;
            let inner = format!("{declarator}{arrays}");
            return Ok(if inner.is_empty() {
                format!("{prefix}{ret}({args})")
            } else if ty.pointer == 0 && ty.reference == ReferenceKind::None && ty.arrays.is_empty()
            {
                format!("{prefix}{ret} {inner}({args})")
            } else {
                format!("{prefix}{ret} ({inner})({args})")
            });
        }

        let base = printer.render(ty.details.as_node_ref(), configuration, Some(node))?;
        let mut head = prefix;
        for namespace in &ty.namespaces {
            head.push_str(namespace);
            head.push_str("::");
        }
        head.push_str(&base);
        if !ty.template_arguments.is_empty() {
            let args = ty
                .template_arguments
                .iter()
                .map(|arg| printer.render(arg.into(), configuration, Some(node)))
                .collect::<Result<Vec<_>>>()?;
            head.push('<');
            head.push_str(&args.join(", "));
            head.push('>');
        }

        let indirection = format!(
            "{}{}",
            "*".repeat(ty.pointer),
            reference_suffix(ty.reference)
        );
        Ok(match name {
            // T (*name)[N]
            _ if ty.pointer_to_array && ty.is_array() && !indirection.is_empty() => {
                format!("{head} ({declarator}){arrays}")
            }
            Some(name) => format!("{head}{indirection} {name}{arrays}"),
            None => format!("{head}{indirection}{arrays}"),
        })
    }
}

fn modifier_prefix(modifiers: &TypeModifiers) -> String {
    let words = [
        (modifiers.is_static, "static"),
        (modifiers.is_const, "const"),
        (modifiers.is_constexpr, "constexpr"),
        (modifiers.is_volatile, "volatile"),
        (modifiers.is_restrict, "restrict"),
        (modifiers.is_template, "template"),
    ];
    words
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, word)| format!("{word} "))
        .collect()
}

fn reference_suffix(reference: ReferenceKind) -> &'static str {
    match reference {
        ReferenceKind::None => "",
        ReferenceKind::LValue => "&",
        ReferenceKind::RValue => "&&",
    }
}

/// Return type and comma separated argument types of a function type.
fn signature_parts(
    printer: &dyn Dispatch,
    function: &FunctionType,
    configuration: &PrinterConfiguration,
    context: NodeRef<'_>,
) -> Result<(String, String)> {
    let ret = printer.render(
        NodeRef::TypeExpression(&function.return_type),
        configuration,
        Some(context),
    )?;
    let args = function
        .arguments
        .iter()
        .map(|arg| printer.render(arg.into(), configuration, Some(context)))
        .collect::<Result<Vec<_>>>()?;
    Ok((ret, args.join(", ")))
}

/// `int`, `unsigned long`, `void`, ...
pub struct BasicTypeRenderer;

impl Render for BasicTypeRenderer {
    fn render(
        &self,
        _printer: &dyn Dispatch,
        node: NodeRef<'_>,
        _configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        node.as_basic_type()
            .map(|ty| ty.as_str().to_string())
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))
    }
}

/// Pass-through for types the tree does not model.
pub struct StubTypeRenderer;

impl Render for StubTypeRenderer {
    fn render(
        &self,
        _printer: &dyn Dispatch,
        node: NodeRef<'_>,
        _configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        node.as_stub_type()
            .map(|ty| ty.name.clone())
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))
    }
}

/// Function type id, e.g. `int(char, bool)`.
pub struct FunctionTypeRenderer;

impl Render for FunctionTypeRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let function = node
            .as_function_type()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let (ret, args) = signature_parts(printer, function, configuration, node)?;
        Ok(format!("{ret}({args})"))
    }
}

/// Template parameter declaration: `typename T = int`, `typename... Ts`,
/// `Integral T`.
pub struct TemplateParameterRenderer;

impl Render for TemplateParameterRenderer {
    fn render(
        &self,
        printer: &dyn Dispatch,
        node: NodeRef<'_>,
        configuration: &PrinterConfiguration,
        _context: Option<NodeRef<'_>>,
    ) -> Result<String> {
        let param = node
            .as_template_parameter()
            .ok_or_else(|| Error::node_mismatch(self.name(), node.kind()))?;
        let specifier = match &param.constraint {
            Some(concept) => printer.render((&**concept).into(), configuration, Some(node))?,
            None => param.specifier.clone(),
        };
        let variadic = if param.is_variadic { "..." } else { "" };
        let mut text = format!("{specifier}{variadic} {}", param.name);
        if let Some(default) = &param.default_value {
            text.push_str(" = ");
            text.push_str(default);
        }
        Ok(text)
    }
}
