use std::path::PathBuf;

use cppforge_ast::NodeKind;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for printer operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no renderer registered for {kind}{}", describe_name(.name))]
    #[diagnostic(
        code(cppforge::unregistered_type),
        help("register a renderer for {kind}, or enable fallback to reuse a supertype renderer")
    )]
    UnregisteredType {
        kind: NodeKind,
        name: Option<String>,
    },

    #[error("a renderer for {kind} in {} context is already registered", describe_context(.context))]
    #[diagnostic(
        code(cppforge::ambiguous_registration),
        help("each (kind, context) pair accepts exactly one renderer")
    )]
    AmbiguousRegistration {
        kind: NodeKind,
        context: Option<NodeKind>,
    },

    #[error("no renderer for {kind} matches {} context", describe_context(.context))]
    #[diagnostic(
        code(cppforge::unresolved_context),
        help("register a context-free renderer for {kind} to handle any other context")
    )]
    UnresolvedContext {
        kind: NodeKind,
        context: Option<NodeKind>,
    },

    #[error("{renderer} cannot render a {kind} node")]
    #[diagnostic(code(cppforge::node_mismatch))]
    NodeMismatch {
        renderer: &'static str,
        kind: NodeKind,
    },

    #[error("invalid printer configuration: {message}")]
    #[diagnostic(code(cppforge::invalid_configuration))]
    InvalidConfiguration { message: String },

    #[error("failed to parse printer settings")]
    #[diagnostic(code(cppforge::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn describe_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" '{name}'"),
        None => String::new(),
    }
}

fn describe_context(context: &Option<NodeKind>) -> String {
    match context {
        Some(kind) => kind.to_string(),
        None => "the default".to_string(),
    }
}

impl Error {
    pub fn unregistered_type(kind: NodeKind, name: Option<&str>) -> Box<Self> {
        Box::new(Error::UnregisteredType {
            kind,
            name: name.map(str::to_string),
        })
    }

    pub fn ambiguous_registration(kind: NodeKind, context: Option<NodeKind>) -> Box<Self> {
        Box::new(Error::AmbiguousRegistration { kind, context })
    }

    pub fn unresolved_context(kind: NodeKind, context: Option<NodeKind>) -> Box<Self> {
        Box::new(Error::UnresolvedContext { kind, context })
    }

    pub fn node_mismatch(renderer: &'static str, kind: NodeKind) -> Box<Self> {
        Box::new(Error::NodeMismatch { renderer, kind })
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidConfiguration {
            message: message.into(),
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
