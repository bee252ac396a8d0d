//! Functions, methods, constructors and destructors.

use serde::{Deserialize, Serialize};

use crate::{
    AccessSpecifier, AttributeDeclaration, Comment, RequiresTerm, Template, TypeExpression, Variable,
};

/// Specifiers attached to a function declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionModifiers {
    pub is_const: bool,
    pub is_explicit: bool,
    pub is_static: bool,
    pub is_virtual: bool,
    pub is_pure_virtual: bool,
    pub is_inline: bool,
    pub is_final: bool,
    pub is_override: bool,
    pub is_delete: bool,
    pub is_default: bool,
    pub is_constexpr: bool,
    pub is_consteval: bool,
    pub is_volatile: bool,
    pub is_noexcept: bool,
}

/// A function-like declaration.
///
/// The same data backs free functions, methods and destructors; which one
/// it is depends on the [`Node`](crate::Node) variant holding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    /// Qualification for out-of-class definitions, e.g. `["Foo"]` in `Foo::bar`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<String>,
    /// `None` for constructors and destructors.
    #[serde(default)]
    pub return_type: Option<TypeExpression>,
    #[serde(default)]
    pub arguments: Vec<Variable>,
    #[serde(default)]
    pub modifiers: FunctionModifiers,
    #[serde(default)]
    pub template: Option<Template>,
    /// Trailing `requires` clause terms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<RequiresTerm>,
    /// Body text without braces; `None` makes this a declaration.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub access: Option<AccessSpecifier>,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeDeclaration>,
}

impl Function {
    /// A declaration with no return type and no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespaces: Vec::new(),
            return_type: None,
            arguments: Vec::new(),
            modifiers: FunctionModifiers::default(),
            template: None,
            requires: Vec::new(),
            body: None,
            access: None,
            comment: None,
            attributes: Vec::new(),
        }
    }

    pub fn returns(mut self, ty: TypeExpression) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn argument(mut self, argument: Variable) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    /// Turn the declaration into a definition with the given body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn modifiers(mut self, modifiers: FunctionModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn requires(mut self, term: impl Into<RequiresTerm>) -> Self {
        self.requires.push(term.into());
        self
    }

    pub fn access(mut self, access: AccessSpecifier) -> Self {
        self.access = Some(access);
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

    pub fn is_declaration(&self) -> bool {
        self.body.is_none()
    }
}

/// One entry of a constructor's member initializer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initializer {
    pub name: String,
    pub value: String,
}

impl Initializer {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A class constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(flatten)]
    pub function: Function,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initializers: Vec<Initializer>,
}

impl Constructor {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            function: Function::new(class_name),
            initializers: Vec::new(),
        }
    }

    pub fn argument(mut self, argument: Variable) -> Self {
        self.function.arguments.push(argument);
        self
    }

    pub fn initializer(mut self, initializer: Initializer) -> Self {
        self.initializers.push(initializer);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.function.body = Some(body.into());
        self
    }

    pub fn modifiers(mut self, modifiers: FunctionModifiers) -> Self {
        self.function.modifiers = modifiers;
        self
    }

    pub fn access(mut self, access: AccessSpecifier) -> Self {
        self.function.access = Some(access);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BasicType;

    #[test]
    fn test_declaration_until_body_set() {
        let f = Function::new("foo").returns(TypeExpression::basic(BasicType::Int));
        assert!(f.is_declaration());
        assert!(!f.body("return 0;").is_declaration());
    }

    #[test]
    fn test_constructor_from_json_flattens_function() {
        let json = r#"{
            "name": "Point",
            "body": "",
            "initializers": [{ "name": "x", "value": "0" }]
        }"#;
        let ctor: Constructor = serde_json::from_str(json).unwrap();
        assert_eq!(ctor.function.name, "Point");
        assert!(!ctor.function.is_declaration());
        assert_eq!(ctor.initializers, vec![Initializer::new("x", "0")]);
    }
}
