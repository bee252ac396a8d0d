//! Namespaces, linkage blocks and type aliases.

use serde::{Deserialize, Serialize};

use crate::{Comment, Node, TypeExpression};

/// A namespace block. An empty name is an anonymous namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    #[serde(default)]
    pub content: Vec<Node>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Vec::new(),
        }
    }

    pub fn item(mut self, item: impl Into<Node>) -> Self {
        self.content.push(item.into());
        self
    }
}

/// An `extern "C"` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternC {
    #[serde(default)]
    pub content: Vec<Node>,
}

impl ExternC {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: impl Into<Node>) -> Self {
        self.content.push(item.into());
        self
    }
}

/// `using namespace a::b;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsingNamespace {
    pub namespaces: Vec<String>,
}

impl UsingNamespace {
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }
}

/// `typedef <type> Name;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typedef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpression,
    #[serde(default)]
    pub comment: Option<Comment>,
}

impl Typedef {
    pub fn new(name: impl Into<String>, ty: TypeExpression) -> Self {
        Self {
            name: name.into(),
            ty,
            comment: None,
        }
    }
}

/// `using Name = <type>;`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Using {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpression,
    #[serde(default)]
    pub comment: Option<Comment>,
}

impl Using {
    pub fn new(name: impl Into<String>, ty: TypeExpression) -> Self {
        Self {
            name: name.into(),
            ty,
            comment: None,
        }
    }

    pub fn comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }
}
