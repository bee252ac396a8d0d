//! Classes, structs and unions.

use serde::{Deserialize, Serialize};

use crate::{AttributeDeclaration, Comment, Node, Template};

/// Member access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessSpecifier {
    Public,
    Protected,
    Private,
}

impl AccessSpecifier {
    /// Get the keyword spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessSpecifier::Public => "public",
            AccessSpecifier::Protected => "protected",
            AccessSpecifier::Private => "private",
        }
    }
}

/// `class` or `struct` keyword; also decides the initial member access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    Struct,
}

impl ClassKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Struct => "struct",
        }
    }

    /// Access of members declared before any access label.
    pub fn default_access(&self) -> AccessSpecifier {
        match self {
            ClassKind::Class => AccessSpecifier::Private,
            ClassKind::Struct => AccessSpecifier::Public,
        }
    }
}

/// Explicit access label (`public:`) inside a class body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub access: AccessSpecifier,
}

impl Section {
    pub fn new(access: AccessSpecifier) -> Self {
        Self { access }
    }
}

/// One parent in a class inheritance list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseClass {
    /// The parent type; usually a forward-declared class or a stub.
    pub base: Box<Node>,
    #[serde(default = "public_access")]
    pub access: AccessSpecifier,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<String>,
}

fn public_access() -> AccessSpecifier {
    AccessSpecifier::Public
}

impl BaseClass {
    pub fn new(base: impl Into<Node>) -> Self {
        Self {
            base: Box::new(base.into()),
            access: AccessSpecifier::Public,
            is_virtual: false,
            namespaces: Vec::new(),
        }
    }

    pub fn access(mut self, access: AccessSpecifier) -> Self {
        self.access = access;
        self
    }

    pub fn virtual_(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }
}

/// A class or struct definition or forward declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub template: Option<Template>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<BaseClass>,
    /// Members, nested types and access labels in declaration order.
    #[serde(default)]
    pub content: Vec<Node>,
    #[serde(default)]
    pub is_declaration: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeDeclaration>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Class,
            template: None,
            bases: Vec::new(),
            content: Vec::new(),
            is_declaration: false,
            comment: None,
            attributes: Vec::new(),
        }
    }

    pub fn new_struct(name: impl Into<String>) -> Self {
        Self {
            kind: ClassKind::Struct,
            ..Self::new(name)
        }
    }

    /// A forward declaration, also used to name the class from inside itself.
    pub fn forward(name: impl Into<String>) -> Self {
        Self {
            is_declaration: true,
            ..Self::new(name)
        }
    }

    pub fn base(mut self, base: BaseClass) -> Self {
        self.bases.push(base);
        self
    }

    pub fn member(mut self, member: impl Into<Node>) -> Self {
        self.content.push(member.into());
        self
    }

    pub fn template(mut self, template: Template) -> Self {
        self.template = Some(template);
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

/// A union definition or forward declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Union {
    pub name: String,
    #[serde(default)]
    pub content: Vec<Node>,
    #[serde(default)]
    pub is_declaration: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeDeclaration>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Vec::new(),
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

    pub fn member(mut self, member: impl Into<Node>) -> Self {
        self.content.push(member.into());
        self
    }
}
