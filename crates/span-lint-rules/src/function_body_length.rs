//! Rule limiting how many lines a function body may span.
//!
//! Same decision procedure as `type_body_length`, instantiated over
//! function-like declarations with tighter defaults.
//!
//! # Configuration
//!
//! - `warning`: span above which a warning fires (default: 40)
//! - `error`: span above which an error fires (default: 100)

use span_lint_core::{
    DeclRule, DeclarationKind, FileContext, RuleConfig, RuleDescription, Severity, SpanRule,
    SyntaxNode, Violation,
};

/// Rule description for `function_body_length`.
pub static DESCRIPTION: RuleDescription = RuleDescription {
    identifier: "function_body_length",
    name: "Function Body Length",
    description: "Function bodies should not span too many lines.",
};

/// Default warning threshold in lines.
pub const DEFAULT_WARNING: u64 = 40;

/// Default error threshold in lines.
pub const DEFAULT_ERROR: u64 = 100;

const FUNCTION_KINDS: &[DeclarationKind] = &[DeclarationKind::Function];

/// Flags functions whose bodies span too many lines.
#[derive(Debug, Clone)]
pub struct FunctionBodyLength {
    engine: SpanRule,
}

impl Default for FunctionBodyLength {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionBodyLength {
    /// Creates the rule with default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: SpanRule::with_levels(
                &DESCRIPTION,
                "Function body",
                FUNCTION_KINDS,
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
    #[must_use]
    pub fn from_config(config: &RuleConfig) -> Self {
        let warning = config.get_int("warning", DEFAULT_WARNING as i64);
        let error = config.get_int("error", DEFAULT_ERROR as i64);
        Self::new()
            .warning(u64::try_from(warning).unwrap_or(DEFAULT_WARNING))
            .error(u64::try_from(error).unwrap_or(DEFAULT_ERROR))
    }
}

impl DeclRule for FunctionBodyLength {
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

    fn check_source(rule: &FunctionBodyLength, source: &str) -> Vec<Violation> {
        let ast = syn::parse_file(source).expect("fixture must parse");
        let index = LineIndex::new(source);
        let nodes = extract_declarations(&ast, &index);
        let ctx = FileContext::new(Path::new("test.rs"), Path::new("."), &index);
        nodes.iter().flat_map(|n| rule.check(&ctx, n)).collect()
    }

    fn function_with_statements(count: usize) -> String {
        let mut source = String::from("fn work() {\n");
        for i in 0..count {
            source.push_str(&format!("    let _x{i} = {i};\n"));
        }
        source.push_str("}\n");
        source
    }

    #[test]
    fn flags_long_function_bodies() {
        let rule = FunctionBodyLength::new().warning(3).error(10);
        let violations = check_source(&rule, &function_with_statements(5));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(violations[0].rule, "function_body_length");
        assert_eq!(
            violations[0].message,
            "Function body should span 3 lines or less: currently spans 6 lines"
        );
    }

    #[test]
    fn flags_methods_inside_impl_blocks() {
        let mut source = String::from("struct S;\nimpl S {\n    fn m(&self) {\n");
        for i in 0..5 {
            source.push_str(&format!("        let _x{i} = {i};\n"));
        }
        source.push_str("    }\n}\n");

        let rule = FunctionBodyLength::new().warning(3).error(10);
        let violations = check_source(&rule, &source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 3);
    }

    #[test]
    fn ignores_trait_method_stubs() {
        let source = "trait T {\n    fn stub(&self);\n}\n";
        let rule = FunctionBodyLength::new().warning(0).error(1);
        assert!(check_source(&rule, source).is_empty());
    }

    #[test]
    fn ignores_long_type_bodies() {
        let mut source = String::from("struct Big {\n");
        for i in 0..20 {
            source.push_str(&format!("    field{i}: u32,\n"));
        }
        source.push_str("}\n");

        let rule = FunctionBodyLength::new().warning(3).error(10);
        assert!(check_source(&rule, &source).is_empty());
    }

    #[test]
    fn short_functions_pass() {
        let rule = FunctionBodyLength::new();
        assert!(check_source(&rule, &function_with_statements(10)).is_empty());
    }
}
