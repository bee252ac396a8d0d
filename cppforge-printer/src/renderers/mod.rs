//! Default renderers for every node kind.

mod annotation;
mod class;
mod concept;
mod enums;
mod file;
mod function;
mod scope;
mod types;
mod usage;
mod variable;

pub use annotation::{AttributeDeclarationRenderer, AttributeRenderer, CommentRenderer};
pub use class::{BaseClassRenderer, ClassRenderer, SectionRenderer, UnionRenderer};
pub use concept::{ConceptRenderer, ConceptRequirementRenderer};
pub use enums::EnumRenderer;
pub use file::{IncludeRenderer, SourceFileRenderer};
pub use function::FunctionRenderer;
pub use scope::{
    ExternCRenderer, NamespaceRenderer, TypedefRenderer, UsingNamespaceRenderer, UsingRenderer,
};
pub use types::{
    BasicTypeRenderer, FunctionTypeRenderer, StubTypeRenderer, TemplateParameterRenderer,
    TypeExpressionRenderer,
};
pub use usage::UsageRenderer;
pub use variable::{ArgumentRenderer, VariableRenderer};

use cppforge_ast::{AttributeDeclaration, Comment, NodeKind, NodeRef, RequiresTerm, Template};

use crate::{CodePrinter, Dispatch, Formatter, PrinterConfiguration, Result};

/// Build a printer with the full default renderer set registered.
pub fn create_default_printer(configuration: PrinterConfiguration) -> Result<CodePrinter> {
    use NodeKind::*;

    let mut printer = CodePrinter::new(configuration);
    printer
        .register(TypeExpressionRenderer, TypeExpression, None)?
        .register(BasicTypeRenderer, BasicType, None)?
        .register(StubTypeRenderer, StubType, None)?
        .register(FunctionTypeRenderer, FunctionType, None)?
        .register(TemplateParameterRenderer, TemplateParameter, None)?
        .register(UsageRenderer, TemplateParameter, Some(TypeExpression))?
        .register(ConceptRenderer, Concept, None)?
        .register(ConceptRequirementRenderer, Concept, Some(TemplateParameter))?
        .register(FunctionRenderer, Function, None)?
        .register(FunctionRenderer, Method, None)?
        .register(FunctionRenderer, Constructor, None)?
        .register(FunctionRenderer, Destructor, None)?
        .register(ArgumentRenderer, Argument, None)?
        .register(VariableRenderer, Variable, None)?
        .register(VariableRenderer, Field, None)?
        .register(ClassRenderer, Class, None)?
        .register(UsageRenderer, Class, Some(TypeExpression))?
        .register(UsageRenderer, Class, Some(BaseClass))?
        .register(SectionRenderer, Section, None)?
        .register(BaseClassRenderer, BaseClass, None)?
        .register(UnionRenderer, Union, None)?
        .register(UsageRenderer, Union, Some(TypeExpression))?
        .register(EnumRenderer, Enum, None)?
        .register(UsageRenderer, Enum, Some(TypeExpression))?
        .register(NamespaceRenderer, Namespace, None)?
        .register(TypedefRenderer, Typedef, None)?
        .register(UsageRenderer, Typedef, Some(TypeExpression))?
        .register(UsageRenderer, Typedef, Some(BaseClass))?
        .register(UsingRenderer, Using, None)?
        .register(UsageRenderer, Using, Some(TypeExpression))?
        .register(UsageRenderer, Using, Some(BaseClass))?
        .register(UsingNamespaceRenderer, UsingNamespace, None)?
        .register(ExternCRenderer, ExternC, None)?
        .register(IncludeRenderer, Include, None)?
        .register(SourceFileRenderer, SourceFile, None)?
        .register(AttributeRenderer, Attribute, None)?
        .register(AttributeDeclarationRenderer, AttributeDeclaration, None)?
        .register(CommentRenderer, Comment, None)?;
    Ok(printer)
}

/// Comment and attribute lines printed ahead of a declaration.
fn print_preamble(
    printer: &dyn Dispatch,
    fmt: &mut Formatter,
    comment: Option<&Comment>,
    attributes: &[AttributeDeclaration],
    owner: NodeRef<'_>,
) -> Result<()> {
    let configuration = fmt.configuration();
    if let Some(comment) = comment {
        fmt.push_raw(&printer.render(comment.into(), &configuration, Some(owner))?);
    }
    for attribute in attributes {
        let line = printer.render(attribute.into(), &configuration, Some(owner))?;
        fmt.print_line(&line);
    }
    Ok(())
}

/// `template<typename T, int N>`; `template<>` for an explicit specialisation.
/// A `requires` clause on the template follows the closing bracket.
fn template_header(
    printer: &dyn Dispatch,
    template: &Template,
    configuration: &PrinterConfiguration,
    owner: NodeRef<'_>,
) -> Result<String> {
    Ok(format!(
        "{}{}",
        template_parameters(printer, template, configuration, owner)?,
        requires_clause(printer, &template.requires, configuration, owner)?
    ))
}

fn template_parameters(
    printer: &dyn Dispatch,
    template: &Template,
    configuration: &PrinterConfiguration,
    owner: NodeRef<'_>,
) -> Result<String> {
    let parameters = template
        .parameters
        .iter()
        .map(|p| printer.render(p.into(), configuration, Some(owner)))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("template<{}>", parameters.join(", ")))
}

/// ` requires A<T> && true`, or nothing when there are no terms.
fn requires_clause(
    printer: &dyn Dispatch,
    terms: &[RequiresTerm],
    configuration: &PrinterConfiguration,
    owner: NodeRef<'_>,
) -> Result<String> {
    if terms.is_empty() {
        return Ok(String::new());
    }
    let mut text = String::from(" requires");
    for term in terms {
        text.push(' ');
        match term {
            RequiresTerm::Expression(expression) => text.push_str(expression),
            RequiresTerm::Concept(concept) => {
                text.push_str(&printer.render(concept.into(), configuration, Some(owner))?)
            }
        }
    }
    Ok(text)
}

/// `<int, char>` after a specialised name, or nothing.
fn specialisation_suffix(
    printer: &dyn Dispatch,
    template: Option<&Template>,
    configuration: &PrinterConfiguration,
    owner: NodeRef<'_>,
) -> Result<String> {
    let Some(template) = template.filter(|t| !t.specialisations.is_empty()) else {
        return Ok(String::new());
    };
    let arguments = template
        .specialisations
        .iter()
        .map(|ty| printer.render(ty.into(), configuration, Some(owner)))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("<{}>", arguments.join(", ")))
}

/// Render each child one level deeper and append the results.
fn print_nested(
    printer: &dyn Dispatch,
    fmt: &mut Formatter,
    content: &[cppforge_ast::Node],
    owner: NodeRef<'_>,
) -> Result<()> {
    let inner = fmt.configuration().nested();
    for child in content {
        fmt.push_raw(&printer.render(child.as_node_ref(), &inner, Some(owner))?);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_printer() -> CodePrinter {
    create_default_printer(PrinterConfiguration::default())
        .expect("default registrations are unique")
}
