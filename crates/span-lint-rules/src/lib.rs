//! # span-lint-rules
//!
//! Built-in span rules for span-lint.
//!
//! ## Available Rules
//!
//! | Identifier | Name | Default limits |
//! |------------|------|----------------|
//! | `type_body_length` | Type Body Length | warning 200 / error 350 |
//! | `function_body_length` | Function Body Length | warning 40 / error 100 |
//!
//! ## Usage
//!
//! ```ignore
//! use span_lint_core::Linter;
//! use span_lint_rules::{FunctionBodyLength, TypeBodyLength};
//!
//! let linter = Linter::builder()
//!     .root("./src")
//!     .rule(TypeBodyLength::new())
//!     .rule(FunctionBodyLength::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod function_body_length;
mod presets;
mod type_body_length;

pub use function_body_length::FunctionBodyLength;
pub use presets::{all_rules, configured_rules, default_rules};
pub use type_body_length::TypeBodyLength;

/// Re-export core types for convenience.
pub use span_lint_core::{DeclRule, Severity, Violation};
