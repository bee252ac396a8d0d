//! C++20 concepts and `requires` clauses.

use serde::{Deserialize, Serialize};

use crate::{Comment, Template, TemplateParameter, TypeExpression};

/// A concept definition, or a reference to one used as a requirement.
///
/// As a definition it prints `template<...>` and `concept Name = body;`.
/// As a requirement (`is_requirement`) it prints `Name<A, B>`, the form used
/// as a constrained template parameter's specifier or inside a `requires`
/// clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    #[serde(default = "default_template")]
    pub template: Template,
    /// Constraint expression, emitted verbatim.
    #[serde(default = "default_body")]
    pub body: String,
    #[serde(default)]
    pub is_requirement: bool,
    /// Template arguments of a requirement.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeExpression>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<String>,
    #[serde(default)]
    pub comment: Option<Comment>,
}

fn default_template() -> Template {
    Template::new().parameter(TemplateParameter::new("T"))
}

fn default_body() -> String {
    "true".to_string()
}

impl Concept {
    /// A definition over a single `typename T` parameter.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: default_template(),
            body: body.into(),
            is_requirement: false,
            arguments: Vec::new(),
            namespaces: Vec::new(),
            comment: None,
        }
    }

    /// A use of the named concept as a constraint.
    pub fn requirement(name: impl Into<String>) -> Self {
        Self {
            is_requirement: true,
            ..Self::new(name, default_body())
        }
    }

    pub fn template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn argument(mut self, argument: TypeExpression) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    pub fn comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// One token of a `requires` clause: raw text such as `true` or `&&`, or a
/// concept requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequiresTerm {
    Expression(String),
    Concept(Concept),
}

impl From<&str> for RequiresTerm {
    fn from(text: &str) -> Self {
        RequiresTerm::Expression(text.to_string())
    }
}

impl From<Concept> for RequiresTerm {
    fn from(concept: Concept) -> Self {
        RequiresTerm::Concept(concept)
    }
}
