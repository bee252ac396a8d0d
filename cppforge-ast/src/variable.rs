//! Variables, function arguments and data members.

use serde::{Deserialize, Serialize};

use crate::{AccessSpecifier, AttributeDeclaration, Comment, TypeExpression};

/// A named, typed declaration with an optional initializer.
///
/// Backs both namespace-scope variables and function arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpression,
    /// Initializer expression, emitted verbatim after ` = `.
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeDeclaration>,
}

impl Variable {
    pub fn new(ty: TypeExpression, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            default_value: None,
            comment: None,
            attributes: Vec::new(),
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn attribute(mut self, attribute: AttributeDeclaration) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// A data member of a class, struct or union.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(flatten)]
    pub variable: Variable,
    #[serde(default)]
    pub access: Option<AccessSpecifier>,
}

impl Field {
    pub fn new(ty: TypeExpression, name: impl Into<String>) -> Self {
        Self {
            variable: Variable::new(ty, name),
            access: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.variable.default_value = Some(value.into());
        self
    }

    pub fn access(mut self, access: AccessSpecifier) -> Self {
        self.access = Some(access);
        self
    }

    pub fn comment(mut self, comment: Comment) -> Self {
        self.variable.comment = Some(comment);
        self
    }

    pub fn attribute(mut self, attribute: AttributeDeclaration) -> Self {
        self.variable.attributes.push(attribute);
        self
    }
}
