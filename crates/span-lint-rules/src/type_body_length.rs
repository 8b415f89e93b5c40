//! Rule limiting how many lines a type body may span.
//!
//! # Rationale
//!
//! A type whose body runs for hundreds of lines is doing too much.
//! This rule measures the lines between a type declaration's braces and
//! reports a warning past 200 lines and an error past 350.
//!
//! # Configuration
//!
//! - `warning`: span above which a warning fires (default: 200)
//! - `error`: span above which an error fires (default: 350)

use span_lint_core::{
    DeclRule, DeclarationKind, FileContext, RuleConfig, RuleDescription, Severity, SpanRule,
    SyntaxNode, Violation,
};

/// Rule description for `type_body_length`.
pub static DESCRIPTION: RuleDescription = RuleDescription {
    identifier: "type_body_length",
    name: "Type Body Length",
    description: "Type bodies should not span too many lines.",
};

/// Default warning threshold in lines.
pub const DEFAULT_WARNING: u64 = 200;

/// Default error threshold in lines.
pub const DEFAULT_ERROR: u64 = 350;

/// Kinds this rule evaluates. Protocol-like (`trait`) and extension-like
/// (`impl`) declarations stay outside the set.
const TYPE_KINDS: &[DeclarationKind] = &[
    DeclarationKind::Struct,
    DeclarationKind::Enum,
    DeclarationKind::Union,
];

/// Flags type declarations whose bodies span too many lines.
#[derive(Debug, Clone)]
pub struct TypeBodyLength {
    engine: SpanRule,
}

impl Default for TypeBodyLength {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeBodyLength {
    /// Creates the rule with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: SpanRule::with_levels(
                &DESCRIPTION,
                "Type body",
                TYPE_KINDS,
                DEFAULT_WARNING,
                DEFAULT_ERROR,
            ),
        }
    }

    /// Sets the warning threshold.
    #[must_use]
    pub fn warning(mut self, value: u64) -> Self {
        self.engine = self.engine.threshold(Severity::Warning, value);
        self
    }

    /// Sets the error threshold.
    #[must_use]
    pub fn error(mut self, value: u64) -> Self {
        self.engine = self.engine.threshold(Severity::Error, value);
        self
    }

    /// Builds the rule from a configuration table.
    ///
    /// Non-positive values are the loader's responsibility; anything that
    /// does not fit a threshold falls back to the default.
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let warning = config.get_int("warning", DEFAULT_WARNING as i64);
        let error = config.get_int("error", DEFAULT_ERROR as i64);
        Self::new()
            .warning(u64::try_from(warning).unwrap_or(DEFAULT_WARNING))
            .error(u64::try_from(error).unwrap_or(DEFAULT_ERROR))
    }
}

impl DeclRule for TypeBodyLength {
    fn description(&self) -> &'static RuleDescription {
        &DESCRIPTION
    }

    fn check(&self, ctx: &FileContext, node: &SyntaxNode) -> Vec<Violation> {
        self.engine.check_node(ctx, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use span_lint_core::{extract_declarations, LineIndex};
    use std::path::Path;

    fn check_source(rule: &TypeBodyLength, source: &str) -> Vec<Violation> {
        let ast = syn::parse_file(source).expect("fixture must parse");
        let index = LineIndex::new(source);
        let nodes = extract_declarations(&ast, &index);
        let ctx = FileContext::new(Path::new("test.rs"), Path::new("."), &index);
        nodes.iter().flat_map(|n| rule.check(&ctx, n)).collect()
    }

    fn struct_with_fields(count: usize) -> String {
        let mut source = String::from("struct Big {\n");
        for i in 0..count {
            source.push_str(&format!("    field{i}: u32,\n"));
        }
        source.push_str("}\n");
        source
    }

    #[test]
    fn flags_struct_body_over_warning_threshold() {
        let rule = TypeBodyLength::new().warning(3).error(10);
        // 5 fields: body spans 6 lines.
        let violations = check_source(&rule, &struct_with_fields(5));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(violations[0].rule, "type_body_length");
        assert_eq!(
            violations[0].message,
            "Type body should span 3 lines or less: currently spans 6 lines"
        );
    }

    #[test]
    fn escalates_to_error_past_error_threshold() {
        let rule = TypeBodyLength::new().warning(3).error(10);
        let violations = check_source(&rule, &struct_with_fields(10));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Error);
        // The message still quotes the warning limit as guidance.
        assert!(violations[0].message.contains("span 3 lines or less"));
    }

    #[test]
    fn allows_struct_at_the_threshold() {
        let rule = TypeBodyLength::new().warning(6).error(10);
        assert!(check_source(&rule, &struct_with_fields(5)).is_empty());
    }

    #[test]
    fn reports_at_the_declaration_line() {
        let rule = TypeBodyLength::new().warning(3).error(10);
        let violations = check_source(&rule, &struct_with_fields(5));
        assert_eq!(violations[0].location.line, 1);
    }

    #[test]
    fn ignores_long_function_bodies() {
        let mut source = String::from("fn long() {\n");
        for i in 0..20 {
            source.push_str(&format!("    let _x{i} = {i};\n"));
        }
        source.push_str("}\n");

        let rule = TypeBodyLength::new().warning(3).error(10);
        assert!(check_source(&rule, &source).is_empty());
    }

    #[test]
    fn ignores_trait_and_impl_bodies() {
        let mut source = String::from("trait T {\n");
        for i in 0..10 {
            source.push_str(&format!("    fn m{i}(&self);\n"));
        }
        source.push_str("}\nstruct S;\nimpl S {\n");
        for i in 0..10 {
            source.push_str(&format!("    fn n{i}(&self) {{}}\n"));
        }
        source.push_str("}\n");

        let rule = TypeBodyLength::new().warning(3).error(10);
        assert!(check_source(&rule, &source).is_empty());
    }

    #[test]
    fn flags_enums_too() {
        let mut source = String::from("enum E {\n");
        for i in 0..6 {
            source.push_str(&format!("    V{i},\n"));
        }
        source.push_str("}\n");

        let rule = TypeBodyLength::new().warning(3).error(100);
        let violations = check_source(&rule, &source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn from_config_reads_thresholds() {
        let config = span_lint_core::Config::parse(
            "[rules.type_body_length]\nwarning = 4\nerror = 8\n",
        )
        .expect("config must parse");
        let rule = TypeBodyLength::from_config(config.rule("type_body_length").unwrap());

        // 5 fields: span 6 > 4 → warning; 10 fields: span 11 > 8 → error.
        assert_eq!(
            check_source(&rule, &struct_with_fields(5))[0].severity,
            Severity::Warning
        );
        assert_eq!(
            check_source(&rule, &struct_with_fields(10))[0].severity,
            Severity::Error
        );
    }

    #[test]
    fn default_thresholds_match_the_documented_limits() {
        let rule = TypeBodyLength::new();
        // 201 fields: span 202 > 200 → warning citing 200.
        let violations = check_source(&rule, &struct_with_fields(201));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert!(violations[0].message.contains("200 lines or less"));

        // 350 fields: span 351 > 350 → error.
        let violations = check_source(&rule, &struct_with_fields(350));
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0]
            .message
            .ends_with("currently spans 351 lines"));
    }
}
