//! # span-lint-core
//!
//! Core framework for span-based structural lint rules over Rust source.
//!
//! A span rule inspects one declaration at a time: it resolves the
//! declaration's body byte range to line numbers through a per-file
//! [`LineIndex`], measures how many lines the body occupies, and evaluates
//! that span against an ordered list of severity thresholds, producing at
//! most one [`Violation`] per node. This crate provides:
//!
//! - [`DeclRule`] trait for per-declaration rules
//! - [`SpanRule`] engine implementing the span decision procedure
//! - [`SyntaxNode`] extraction from `syn` ASTs with byte-range metadata
//! - [`Linter`] for orchestrating rule execution over a file tree
//! - [`Violation`] and [`LintResult`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use span_lint_core::Linter;
//!
//! let linter = Linter::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = linter.run()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod line_index;
mod linter;
mod rule;
mod span;
mod syntax;
mod types;

pub use config::{Config, ConfigError, LinterConfig, RuleConfig};
pub use context::FileContext;
pub use line_index::{LineIndex, Position};
pub use linter::{Linter, LinterBuilder, LinterError};
pub use rule::{DeclRule, RuleBox};
pub use span::SpanRule;
pub use syntax::{extract_declarations, DeclarationKind, SyntaxNode};
pub use types::{
    LintResult, Location, RuleDescription, RuleParameter, Severity, Violation,
    ViolationDiagnostic,
};
