//! Whole source files and their include directives.

use serde::{Deserialize, Serialize};

use crate::Node;

/// An `#include` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Include {
    /// Path between the delimiters.
    pub value: String,
    /// `<...>` when true, `"..."` otherwise.
    #[serde(default)]
    pub is_standard: bool,
}

impl Include {
    /// A quoted, project-local include.
    pub fn local(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_standard: false,
        }
    }

    /// An angle-bracket include.
    pub fn standard(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_standard: true,
        }
    }
}

/// A header or implementation file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    #[serde(default)]
    pub includes: Vec<Include>,
    #[serde(default)]
    pub content: Vec<Node>,
    /// Macro name for an `#ifndef`/`#define` include guard.
    #[serde(default)]
    pub header_guard: Option<String>,
}

impl SourceFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, include: Include) -> Self {
        self.includes.push(include);
        self
    }

    pub fn item(mut self, item: impl Into<Node>) -> Self {
        self.content.push(item.into());
        self
    }

    pub fn header_guard(mut self, name: impl Into<String>) -> Self {
        self.header_guard = Some(name.into());
        self
    }
}
