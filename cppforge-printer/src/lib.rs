//! Context-sensitive C++ source printer for cppforge syntax trees.
//!
//! # Architecture
//!
//! ```text
//! CodePrinter (registry) ──resolve (kind, context)──▶ Render impl
//!        ▲                                               │
//!        └──────────── Dispatch::render(child) ◀─────────┘
//! ```
//!
//! A [`CodePrinter`] maps node kinds, optionally narrowed by the kind of the
//! node they are rendered from, to [`Render`] implementations. Renderers
//! build their output with a [`Formatter`] and hand children back to the
//! printer through the [`Dispatch`] capability, passing themselves as the
//! child's context. That is how an enum prints as a full definition at
//! namespace scope and as a bare name inside a type expression.
//!
//! # Example
//!
//! ```
//! use cppforge_ast::{BasicType, TypeExpression};
//! use cppforge_printer::{PrinterConfiguration, create_default_printer};
//!
//! let printer = create_default_printer(PrinterConfiguration::default()).unwrap();
//! let ty = TypeExpression::basic(BasicType::Float).pointers(3);
//! assert_eq!(printer.print(&ty).unwrap(), "float***");
//! ```

mod config;
mod error;
mod formatter;
mod printer;
mod render;
pub mod renderers;

pub use config::{Indent, LineEnding, PrinterConfiguration, PrinterSettings, Settings};
pub use error::{Error, Result};
pub use formatter::Formatter;
pub use printer::CodePrinter;
pub use render::{Dispatch, Render};
pub use renderers::create_default_printer;
