//! Enumerations.

use serde::{Deserialize, Serialize};

use crate::{AttributeDeclaration, Comment, TypeExpression};

/// Scope keyword of a scoped enumeration (`enum class` / `enum struct`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumScope {
    Class,
    Struct,
}

impl EnumScope {
    pub fn keyword(&self) -> &'static str {
        match self {
            EnumScope::Class => "class",
            EnumScope::Struct => "struct",
        }
    }
}

/// One enumerator.
///
/// `is_default` decides the spelling: default members print bare and take
/// their value implicitly, explicit members print `= value`. The flag is
/// authoritative even when `value` happens to equal the implicit number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub value: i64,
    #[serde(default = "default_true")]
    pub is_default: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
}

fn default_true() -> bool {
    true
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: i64, is_default: bool) -> Self {
        Self {
            name: name.into(),
            value,
            is_default,
            comment: None,
        }
    }

    /// An implicitly numbered enumerator.
    pub fn implicit(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, value, true)
    }

    /// An enumerator with an explicit `= value`.
    pub fn explicit(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, value, false)
    }

    pub fn comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}

/// An enumeration definition or forward declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub scope: Option<EnumScope>,
    /// Underlying integer type; `None` leaves it implicit.
    #[serde(default)]
    pub underlying: Option<TypeExpression>,
    #[serde(default)]
    pub values: Vec<EnumValue>,
    #[serde(default)]
    pub is_declaration: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeDeclaration>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: None,
            underlying: None,
            values: Vec::new(),
            is_declaration: false,
            comment: None,
            attributes: Vec::new(),
        }
    }

    pub fn forward(name: impl Into<String>) -> Self {
        Self {
            is_declaration: true,
            ..Self::new(name)
        }
    }

    pub fn scoped(mut self, scope: EnumScope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn underlying(mut self, ty: TypeExpression) -> Self {
        self.underlying = Some(ty);
        self
    }

    pub fn value(mut self, value: EnumValue) -> Self {
        self.values.push(value);
        self
    }

    /// Append an implicitly numbered enumerator, continuing from the previous one.
    pub fn next(self, name: impl Into<String>) -> Self {
        let value = self.values.last().map_or(0, |v| v.value + 1);
        self.value(EnumValue::implicit(name, value))
    }

    pub fn comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}
