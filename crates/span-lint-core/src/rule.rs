//! Rule trait for per-declaration lint rules.

use crate::context::FileContext;
use crate::syntax::SyntaxNode;
use crate::types::{RuleDescription, Violation};

/// A lint rule evaluated once per declaration node.
///
/// The linter feeds every extracted [`SyntaxNode`] of a file to every
/// registered rule; each rule independently returns a (possibly empty)
/// list of violations. Implementations must be pure functions of their
/// inputs: no I/O, no shared mutable state, identical output for
/// identical input. That makes a single rule instance safe to invoke
/// concurrently across nodes and files.
///
/// # Example
///
/// ```ignore
/// use span_lint_core::{DeclRule, FileContext, RuleDescription, SyntaxNode, Violation};
///
/// static DESCRIPTION: RuleDescription = RuleDescription {
///     identifier: "my_rule",
///     name: "My Rule",
///     description: "Checks something about declarations.",
/// };
///
/// struct MyRule;
///
/// impl DeclRule for MyRule {
///     fn description(&self) -> &'static RuleDescription {
///         &DESCRIPTION
///     }
///
///     fn check(&self, ctx: &FileContext, node: &SyntaxNode) -> Vec<Violation> {
///         Vec::new()
///     }
/// }
/// ```
pub trait DeclRule: Send + Sync {
    /// Returns the static metadata identifying this rule.
    fn description(&self) -> &'static RuleDescription;

    /// Checks a single declaration node and returns any violations found.
    ///
    /// At most one violation per node is the contract for span rules;
    /// the trait does not enforce it for other rule families.
    fn check(&self, ctx: &FileContext, node: &SyntaxNode) -> Vec<Violation>;
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn DeclRule>;
