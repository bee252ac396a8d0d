//! Heterogeneous node enumeration and its borrowed mirror.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Attribute, AttributeDeclaration, BaseClass, BasicType, Class, Comment, Concept, Constructor,
    Enum, ExternC, Field, Function, FunctionType, Include, Namespace, Section, SourceFile, StubType,
    TemplateParameter, TypeExpression, Typedef, Union, Using, UsingNamespace, Variable,
};

/// Declares `Node`, `NodeRef` and `NodeKind` from one variant list so the
/// three enums can never drift apart.
macro_rules! node_variants {
    ($( $(#[$doc:meta])* $kind:ident($ty:ty) ),* $(,)?) => {
        /// An owned syntax tree node.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "kind", content = "node", rename_all = "snake_case")]
        pub enum Node {
            $( $(#[$doc])* $kind($ty), )*
        }

        /// A borrowed view of a node.
        ///
        /// Render calls and contexts use this type so that nodes stored as
        /// plain struct fields (a `TypeExpression` inside a `Variable`, an
        /// argument inside a `Function`) can take part in dispatch without
        /// being wrapped in [`Node`].
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum NodeRef<'a> {
            $( $(#[$doc])* $kind(&'a $ty), )*
        }

        /// Runtime type tag of a node.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $( $(#[$doc])* $kind, )*
        }

        impl Node {
            /// Get the runtime type tag.
            pub fn kind(&self) -> NodeKind {
                match self {
                    $( Node::$kind(_) => NodeKind::$kind, )*
                }
            }

            /// Borrow this node for rendering.
            pub fn as_node_ref(&self) -> NodeRef<'_> {
                match self {
                    $( Node::$kind(n) => NodeRef::$kind(n), )*
                }
            }
        }

        impl NodeRef<'_> {
            /// Get the runtime type tag.
            pub fn kind(&self) -> NodeKind {
                match self {
                    $( NodeRef::$kind(_) => NodeKind::$kind, )*
                }
            }
        }

        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$( NodeKind::$kind, )*];

            /// The kind's name as it appears in diagnostics.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( NodeKind::$kind => stringify!($kind), )*
                }
            }
        }
    };
}

node_variants! {
    /// A type as used at some site: modifiers, base type, declarator suffixes.
    TypeExpression(TypeExpression),
    /// A built-in arithmetic or void type.
    BasicType(BasicType),
    /// A type the tree does not model, printed by name only.
    StubType(StubType),
    /// A function signature used as a type.
    FunctionType(FunctionType),
    /// A template parameter declaration or generic type usage.
    TemplateParameter(TemplateParameter),
    /// A concept definition or requirement.
    Concept(Concept),
    /// A free function.
    Function(Function),
    /// A member function.
    Method(Function),
    /// A class constructor.
    Constructor(Constructor),
    /// A class destructor.
    Destructor(Function),
    /// A function argument.
    Argument(Variable),
    /// A variable declared at namespace or block scope.
    Variable(Variable),
    /// A data member of a class or union.
    Field(Field),
    /// A class or struct.
    Class(Class),
    /// A union.
    Union(Union),
    /// An explicit access specifier label inside a class body.
    Section(Section),
    /// One entry of a class inheritance list.
    BaseClass(BaseClass),
    /// An enumeration.
    Enum(Enum),
    /// A namespace block.
    Namespace(Namespace),
    /// A `typedef` alias.
    Typedef(Typedef),
    /// A `using Name = type;` alias.
    Using(Using),
    /// A `using namespace` directive.
    UsingNamespace(UsingNamespace),
    /// An `extern "C"` linkage block.
    ExternC(ExternC),
    /// An `#include` directive.
    Include(Include),
    /// A whole header or implementation file.
    SourceFile(SourceFile),
    /// A single attribute inside `[[...]]`.
    Attribute(Attribute),
    /// A `[[...]]` attribute list.
    AttributeDeclaration(AttributeDeclaration),
    /// A comment block.
    Comment(Comment),
}

impl NodeKind {
    /// The kind this one specializes, if any.
    ///
    /// Subtype nodes embed their supertype's data, so a renderer written for
    /// the supertype can read them.
    pub fn supertype(&self) -> Option<NodeKind> {
        match self {
            NodeKind::Method => Some(NodeKind::Function),
            NodeKind::Constructor | NodeKind::Destructor => Some(NodeKind::Method),
            NodeKind::Argument | NodeKind::Field => Some(NodeKind::Variable),
            _ => None,
        }
    }

    /// Iterate over the strict supertypes, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = NodeKind> {
        std::iter::successors(self.supertype(), NodeKind::supertype)
    }

    /// Returns true if `self` is a strict subtype of `other`.
    pub fn is_subtype_of(self, other: NodeKind) -> bool {
        self.ancestors().any(|k| k == other)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> NodeRef<'a> {
    /// The node's own name, for nodes that have one.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            NodeRef::StubType(n) => Some(&n.name),
            NodeRef::TemplateParameter(n) => Some(&n.name),
            NodeRef::Concept(n) => Some(&n.name),
            NodeRef::Function(n) | NodeRef::Method(n) | NodeRef::Destructor(n) => Some(&n.name),
            NodeRef::Constructor(n) => Some(&n.function.name),
            NodeRef::Argument(n) | NodeRef::Variable(n) => Some(&n.name),
            NodeRef::Field(n) => Some(&n.variable.name),
            NodeRef::Class(n) => Some(&n.name),
            NodeRef::Union(n) => Some(&n.name),
            NodeRef::Enum(n) => Some(&n.name),
            NodeRef::Namespace(n) => Some(&n.name),
            NodeRef::Typedef(n) => Some(&n.name),
            NodeRef::Using(n) => Some(&n.name),
            NodeRef::Include(n) => Some(&n.value),
            NodeRef::Attribute(n) => Some(&n.name),
            NodeRef::BasicType(n) => Some(n.as_str()),
            _ => None,
        }
    }

    /// The name introduced by a declarator at this site.
    ///
    /// Only declaration sites whose type is written around the name
    /// (`int* p`, `int a[3]`, `void (*cb)(int)`) report one.
    pub fn declared_name(&self) -> Option<&'a str> {
        match *self {
            NodeRef::Argument(n) | NodeRef::Variable(n) => Some(&n.name),
            NodeRef::Field(n) => Some(&n.variable.name),
            NodeRef::Typedef(n) => Some(&n.name),
            _ => None,
        }
    }

    pub fn as_type_expression(&self) -> Option<&'a TypeExpression> {
        match *self {
            NodeRef::TypeExpression(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_basic_type(&self) -> Option<&'a BasicType> {
        match *self {
            NodeRef::BasicType(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_stub_type(&self) -> Option<&'a StubType> {
        match *self {
            NodeRef::StubType(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_function_type(&self) -> Option<&'a FunctionType> {
        match *self {
            NodeRef::FunctionType(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_template_parameter(&self) -> Option<&'a TemplateParameter> {
        match *self {
            NodeRef::TemplateParameter(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_concept(&self) -> Option<&'a Concept> {
        match *self {
            NodeRef::Concept(n) => Some(n),
            _ => None,
        }
    }

    /// Function data of any function-like node.
    pub fn as_function(&self) -> Option<&'a Function> {
        match *self {
            NodeRef::Function(n) | NodeRef::Method(n) | NodeRef::Destructor(n) => Some(n),
            NodeRef::Constructor(n) => Some(&n.function),
            _ => None,
        }
    }

    pub fn as_constructor(&self) -> Option<&'a Constructor> {
        match *self {
            NodeRef::Constructor(n) => Some(n),
            _ => None,
        }
    }

    /// Variable data of any variable-like node.
    pub fn as_variable(&self) -> Option<&'a Variable> {
        match *self {
            NodeRef::Argument(n) | NodeRef::Variable(n) => Some(n),
            NodeRef::Field(n) => Some(&n.variable),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&'a Field> {
        match *self {
            NodeRef::Field(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&'a Class> {
        match *self {
            NodeRef::Class(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&'a Union> {
        match *self {
            NodeRef::Union(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_section(&self) -> Option<&'a Section> {
        match *self {
            NodeRef::Section(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_base_class(&self) -> Option<&'a BaseClass> {
        match *self {
            NodeRef::BaseClass(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&'a Enum> {
        match *self {
            NodeRef::Enum(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_namespace(&self) -> Option<&'a Namespace> {
        match *self {
            NodeRef::Namespace(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_typedef(&self) -> Option<&'a Typedef> {
        match *self {
            NodeRef::Typedef(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_using(&self) -> Option<&'a Using> {
        match *self {
            NodeRef::Using(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_using_namespace(&self) -> Option<&'a UsingNamespace> {
        match *self {
            NodeRef::UsingNamespace(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_extern_c(&self) -> Option<&'a ExternC> {
        match *self {
            NodeRef::ExternC(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_include(&self) -> Option<&'a Include> {
        match *self {
            NodeRef::Include(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_source_file(&self) -> Option<&'a SourceFile> {
        match *self {
            NodeRef::SourceFile(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_attribute(&self) -> Option<&'a Attribute> {
        match *self {
            NodeRef::Attribute(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_attribute_declaration(&self) -> Option<&'a AttributeDeclaration> {
        match *self {
            NodeRef::AttributeDeclaration(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&'a Comment> {
        match *self {
            NodeRef::Comment(n) => Some(n),
            _ => None,
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        node.as_node_ref()
    }
}

macro_rules! node_ref_from {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for NodeRef<'a> {
                fn from(node: &'a $ty) -> Self {
                    NodeRef::$ty(node)
                }
            }

            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$ty(node)
                }
            }
        )*
    };
}

// Function and Variable back several kinds each, so they get no blanket
// conversion; pick the variant explicitly.
node_ref_from!(
    TypeExpression,
    BasicType,
    StubType,
    FunctionType,
    TemplateParameter,
    Concept,
    Constructor,
    Field,
    Class,
    Union,
    Section,
    BaseClass,
    Enum,
    Namespace,
    Typedef,
    Using,
    UsingNamespace,
    ExternC,
    Include,
    SourceFile,
    Attribute,
    AttributeDeclaration,
    Comment,
);
