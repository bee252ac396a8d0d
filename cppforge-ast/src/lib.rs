//! Syntax tree node model for the cppforge C++ code generator.
//!
//! This crate provides the data the printer reads: classes, functions,
//! concepts, enums, namespaces, templates, typedefs, unions, using-aliases and the
//! type expressions that tie them together. Trees are built either by hand
//! with the fluent builders or deserialized from JSON.
//!
//! # Architecture
//!
//! ```text
//! tree provider (builders / JSON) → cppforge-ast (Node) → cppforge-printer (text)
//! ```
//!
//! The node types are designed to be:
//! - Owned: a node exclusively owns its children, in declaration order
//! - Acyclic: usage sites refer to definitions by forward declaration or stub
//! - Printer agnostic: nothing here knows how a node is rendered

mod annotation;
mod class;
mod concept;
mod enums;
mod file;
mod function;
mod node;
mod scope;
mod types;
mod variable;

pub use annotation::{Attribute, AttributeDeclaration, Comment, CommentMarker};
pub use class::{AccessSpecifier, BaseClass, Class, ClassKind, Section, Union};
pub use concept::{Concept, RequiresTerm};
pub use enums::{Enum, EnumScope, EnumValue};
pub use file::{Include, SourceFile};
pub use function::{Constructor, Function, FunctionModifiers, Initializer};
pub use node::{Node, NodeKind, NodeRef};
pub use scope::{ExternC, Namespace, Typedef, Using, UsingNamespace};
pub use types::{
    BasicType, FunctionType, ReferenceKind, StubType, Template, TemplateParameter, TypeExpression,
    TypeModifiers,
};
pub use variable::{Field, Variable};
