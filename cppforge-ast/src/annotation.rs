//! Comments and standard attributes attached to declarations.

use serde::{Deserialize, Serialize};

/// Comment delimiter style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentMarker {
    /// `//` on every line.
    #[default]
    OneLine,
    /// `/* ... */`.
    MultiLine,
}

/// A comment block, stored as lines without delimiters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub marker: CommentMarker,
    #[serde(default)]
    pub lines: Vec<String>,
}

impl Comment {
    /// A `//` comment, one entry per line of `text`.
    pub fn one_line(text: &str) -> Self {
        Self {
            marker: CommentMarker::OneLine,
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// A `/* */` comment, one entry per line of `text`.
    pub fn multi_line(text: &str) -> Self {
        Self {
            marker: CommentMarker::MultiLine,
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One attribute, e.g. `nodiscard` or `gnu::always_inline`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    /// Argument list; `None` omits the parentheses entirely.
    #[serde(default)]
    pub arguments: Option<Vec<String>>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            arguments: None,
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments
            .get_or_insert_with(Vec::new)
            .push(argument.into());
        self
    }
}

/// A `[[...]]` attribute list, optionally with `using ns :`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDeclaration {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub using_namespace: Option<String>,
}

impl AttributeDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn using_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.using_namespace = Some(namespace.into());
        self
    }
}
