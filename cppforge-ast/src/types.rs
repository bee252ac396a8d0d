//! Type expressions and the base types they refer to.

use serde::{Deserialize, Serialize};

use crate::{Concept, Node, RequiresTerm};

/// A built-in type spelled with keywords only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicType {
    Int,
    UnsignedInt,
    Short,
    UnsignedShort,
    Char,
    UnsignedChar,
    Bool,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
    LongDouble,
    Void,
    Auto,
}

impl BasicType {
    /// Get the keyword spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            BasicType::Int => "int",
            BasicType::UnsignedInt => "unsigned int",
            BasicType::Short => "short",
            BasicType::UnsignedShort => "unsigned short",
            BasicType::Char => "char",
            BasicType::UnsignedChar => "unsigned char",
            BasicType::Bool => "bool",
            BasicType::Long => "long",
            BasicType::UnsignedLong => "unsigned long",
            BasicType::LongLong => "long long",
            BasicType::UnsignedLongLong => "unsigned long long",
            BasicType::Float => "float",
            BasicType::Double => "double",
            BasicType::LongDouble => "long double",
            BasicType::Void => "void",
            BasicType::Auto => "auto",
        }
    }

    /// Returns true for the unsigned integer types.
    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            BasicType::UnsignedInt
                | BasicType::UnsignedShort
                | BasicType::UnsignedChar
                | BasicType::UnsignedLong
                | BasicType::UnsignedLongLong
        )
    }
}

/// A type the tree intentionally does not model, e.g. `std::string`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubType {
    pub name: String,
}

impl StubType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Qualifiers written in front of a type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeModifiers {
    pub is_static: bool,
    pub is_const: bool,
    pub is_constexpr: bool,
    pub is_volatile: bool,
    pub is_restrict: bool,
    pub is_template: bool,
}

/// Reference declarator applied after any pointers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    #[default]
    None,
    /// `T&`
    LValue,
    /// `T&&`
    RValue,
}

/// Usage of a type at some site: function argument, return value, field,
/// typedef target.
///
/// `details` is the base type. It is owned, so a site that needs to name its
/// own enclosing definition stores a forward declaration or a [`StubType`]
/// instead of the definition itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeExpression {
    pub details: Box<Node>,
    #[serde(default)]
    pub modifiers: TypeModifiers,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub template_arguments: Vec<TypeExpression>,
    /// Number of `*` declarators.
    #[serde(default)]
    pub pointer: usize,
    #[serde(default)]
    pub reference: ReferenceKind,
    /// Array dimensions, outermost first; `None` is an unsized `[]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arrays: Vec<Option<String>>,
    /// With both pointers and arrays: `T (*p)[N]` instead of the default
    /// array of pointers `T* p[N]`.
    #[serde(default)]
    pub pointer_to_array: bool,
}

impl TypeExpression {
    pub fn new(details: impl Into<Node>) -> Self {
        Self {
            details: Box::new(details.into()),
            modifiers: TypeModifiers::default(),
            namespaces: Vec::new(),
            template_arguments: Vec::new(),
            pointer: 0,
            reference: ReferenceKind::None,
            arrays: Vec::new(),
            pointer_to_array: false,
        }
    }

    /// Type expression over a built-in type.
    pub fn basic(ty: BasicType) -> Self {
        Self::new(ty)
    }

    /// Type expression over an unmodelled type name.
    pub fn stub(name: impl Into<String>) -> Self {
        Self::new(StubType::new(name))
    }

    /// Add one pointer level.
    pub fn pointer(mut self) -> Self {
        self.pointer += 1;
        self
    }

    /// Set the pointer depth.
    pub fn pointers(mut self, depth: usize) -> Self {
        self.pointer = depth;
        self
    }

    pub fn reference(mut self) -> Self {
        self.reference = ReferenceKind::LValue;
        self
    }

    pub fn rvalue_reference(mut self) -> Self {
        self.reference = ReferenceKind::RValue;
        self
    }

    /// Append a sized array dimension.
    pub fn array(mut self, size: impl Into<String>) -> Self {
        self.arrays.push(Some(size.into()));
        self
    }

    /// Append an unsized `[]` dimension.
    pub fn unsized_array(mut self) -> Self {
        self.arrays.push(None);
        self
    }

    /// Read pointers as pointing to the whole array.
    pub fn pointer_to_array(mut self) -> Self {
        self.pointer_to_array = true;
        self
    }

    pub fn const_(mut self) -> Self {
        self.modifiers.is_const = true;
        self
    }

    pub fn static_(mut self) -> Self {
        self.modifiers.is_static = true;
        self
    }

    pub fn constexpr(mut self) -> Self {
        self.modifiers.is_constexpr = true;
        self
    }

    pub fn volatile(mut self) -> Self {
        self.modifiers.is_volatile = true;
        self
    }

    pub fn restrict(mut self) -> Self {
        self.modifiers.is_restrict = true;
        self
    }

    pub fn template(mut self) -> Self {
        self.modifiers.is_template = true;
        self
    }

    /// Qualify the base type with one more namespace segment.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.push(namespace.into());
        self
    }

    pub fn template_argument(mut self, argument: TypeExpression) -> Self {
        self.template_arguments.push(argument);
        self
    }

    /// Returns true if any array dimension is present.
    pub fn is_array(&self) -> bool {
        !self.arrays.is_empty()
    }
}

/// A function signature used as a type, e.g. the target of a callback
/// pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionType {
    pub return_type: Box<TypeExpression>,
    #[serde(default)]
    pub arguments: Vec<TypeExpression>,
}

impl FunctionType {
    pub fn new(return_type: TypeExpression) -> Self {
        Self {
            return_type: Box::new(return_type),
            arguments: Vec::new(),
        }
    }

    pub fn argument(mut self, argument: TypeExpression) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// One parameter of a template declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateParameter {
    pub name: String,
    /// `typename`, `class`, or a non-type parameter's type such as `int`.
    #[serde(default = "default_specifier")]
    pub specifier: String,
    /// Concept requirement written in place of `specifier`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Box<Concept>>,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub is_variadic: bool,
}

fn default_specifier() -> String {
    "typename".to_string()
}

impl TemplateParameter {
    /// A `typename` parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specifier: default_specifier(),
            constraint: None,
            default_value: None,
            is_variadic: false,
        }
    }

    pub fn specifier(mut self, specifier: impl Into<String>) -> Self {
        self.specifier = specifier.into();
        self
    }

    /// Constrain the parameter with a concept: `Integral T`.
    pub fn constraint(mut self, concept: Concept) -> Self {
        self.constraint = Some(Box::new(concept));
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }
}

/// Template header of a function or class.
///
/// An empty parameter list with specialisation arguments is an explicit
/// specialisation (`template<> void f<int>()`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub parameters: Vec<TemplateParameter>,
    pub specialisations: Vec<TypeExpression>,
    /// Terms of a `requires` clause following the header.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<RequiresTerm>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter(mut self, parameter: TemplateParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn specialisation(mut self, argument: TypeExpression) -> Self {
        self.specialisations.push(argument);
        self
    }

    pub fn requires(mut self, term: impl Into<RequiresTerm>) -> Self {
        self.requires.push(term.into());
        self
    }
}
