//! Span-based violation engine.
//!
//! [`SpanRule`] is the decision procedure shared by every rule that limits
//! how many lines a declaration body may occupy: filter by declaration
//! kind, resolve the body's byte range to line numbers, and evaluate the
//! resulting span against an ordered list of severity thresholds. Concrete
//! rules wrap an instance with their own description, applicability set,
//! and default thresholds.

use crate::context::FileContext;
use crate::line_index::LineIndex;
use crate::syntax::{DeclarationKind, SyntaxNode};
use crate::types::{Location, RuleDescription, RuleParameter, Severity, Violation};

/// Decision procedure for body-span limits.
///
/// Parameters are held most severe first and evaluated front to back with
/// an early return, so a node exceeding the error threshold reports the
/// error alone. Exactly zero or one violation is produced per node.
#[derive(Debug, Clone)]
pub struct SpanRule {
    description: &'static RuleDescription,
    /// Subject used in messages (e.g., "Type body").
    subject: &'static str,
    kinds: &'static [DeclarationKind],
    /// Ordered most severe first. Distinct severities per parameter.
    parameters: Vec<RuleParameter>,
}

impl SpanRule {
    /// Creates an engine with explicit parameters, ordered most severe
    /// first.
    #[must_use]
    pub fn new(
        description: &'static RuleDescription,
        subject: &'static str,
        kinds: &'static [DeclarationKind],
        parameters: Vec<RuleParameter>,
    ) -> Self {
        Self {
            description,
            subject,
            kinds,
            parameters,
        }
    }

    /// Creates an engine with the usual warning/error pair.
    #[must_use]
    pub fn with_levels(
        description: &'static RuleDescription,
        subject: &'static str,
        kinds: &'static [DeclarationKind],
        warning: u64,
        error: u64,
    ) -> Self {
        Self::new(
            description,
            subject,
            kinds,
            vec![
                RuleParameter::new(Severity::Error, error),
                RuleParameter::new(Severity::Warning, warning),
            ],
        )
    }

    /// Returns the rule metadata this engine stamps violations with.
    #[must_use]
    pub fn description(&self) -> &'static RuleDescription {
        self.description
    }

    /// Replaces the threshold value for the parameter with the given
    /// severity, keeping the evaluation order intact.
    #[must_use]
    pub fn threshold(mut self, severity: Severity, value: u64) -> Self {
        for parameter in &mut self.parameters {
            if parameter.severity == severity {
                parameter.value = value;
            }
        }
        self
    }

    /// Returns the configured value for a severity, if any.
    #[must_use]
    pub fn threshold_value(&self, severity: Severity) -> Option<u64> {
        self.parameters
            .iter()
            .find(|p| p.severity == severity)
            .map(|p| p.value)
    }

    /// Whether this rule evaluates nodes of the given kind.
    #[must_use]
    pub fn applies(&self, kind: DeclarationKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Measures the line span of a node's body.
    ///
    /// The span is the number of line breaks strictly between the body's
    /// delimiters: the end line minus the start line of the resolved byte
    /// range. Missing body metadata and offsets the index cannot resolve
    /// both yield `None`; neither is an error, the node is simply not
    /// checked.
    #[must_use]
    pub fn measure(node: &SyntaxNode, index: &LineIndex) -> Option<u64> {
        let body_start = node.body_start_offset?;
        let body_length = node.body_length?;
        let start_line = index.position(body_start)?.line;
        let end_line = index.position(body_start + body_length)?.line;
        Some((end_line - start_line) as u64)
    }

    /// Evaluates a measured span against the configured parameters.
    ///
    /// Returns the first parameter whose value the span strictly exceeds;
    /// a span equal to a threshold does not violate it.
    #[must_use]
    pub fn evaluate(&self, span: u64) -> Option<&RuleParameter> {
        self.parameters
            .iter()
            .find(|parameter| span > parameter.value)
    }

    /// Runs the full decision procedure for one node.
    ///
    /// Applicability, measurement, and threshold evaluation in sequence;
    /// every failure short-circuits to an empty list. The violation is
    /// located at the declaration offset, not the body offset, and its
    /// message quotes the least severe configured limit as guidance
    /// regardless of which threshold fired.
    #[must_use]
    pub fn check_node(&self, ctx: &FileContext, node: &SyntaxNode) -> Vec<Violation> {
        if !self.applies(node.kind) {
            return Vec::new();
        }
        let Some(span) = Self::measure(node, ctx.index) else {
            return Vec::new();
        };
        let Some(parameter) = self.evaluate(span) else {
            return Vec::new();
        };
        let Some(location) = node
            .declaration_offset
            .and_then(|offset| resolve_location(ctx, offset))
        else {
            return Vec::new();
        };
        let Some(guidance) = self.parameters.last() else {
            return Vec::new();
        };

        vec![Violation::new(
            self.description.identifier,
            parameter.severity,
            location,
            format!(
                "{} should span {} lines or less: currently spans {} lines",
                self.subject, guidance.value, span
            ),
        )]
    }
}

fn resolve_location(ctx: &FileContext, offset: usize) -> Option<Location> {
    let position = ctx.index.position(offset)?;
    Some(
        Location::new(ctx.relative_path.clone(), position.line, position.column)
            .with_offset(offset),
    )
}
