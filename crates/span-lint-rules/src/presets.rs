//! Rule set construction helpers.

use crate::{FunctionBodyLength, TypeBodyLength};
use span_lint_core::{Config, RuleBox};

/// Returns all available rules with default thresholds.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(TypeBodyLength::new()),
        Box::new(FunctionBodyLength::new()),
    ]
}

/// Returns the default rule set.
///
/// Currently identical to [`all_rules`]; kept separate so a future rule
/// can ship disabled by default.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Builds the rule set from a configuration, applying per-rule threshold
/// overrides and dropping disabled rules.
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    if config.is_rule_enabled(crate::type_body_length::DESCRIPTION.identifier) {
        let rule = match config.rule(crate::type_body_length::DESCRIPTION.identifier) {
            Some(rule_config) => {
                tracing::debug!("Applying configured thresholds for type_body_length");
                TypeBodyLength::from_config(rule_config)
            }
            None => TypeBodyLength::new(),
        };
        rules.push(Box::new(rule));
    }

    if config.is_rule_enabled(crate::function_body_length::DESCRIPTION.identifier) {
        let rule = match config.rule(crate::function_body_length::DESCRIPTION.identifier) {
            Some(rule_config) => {
                tracing::debug!("Applying configured thresholds for function_body_length");
                FunctionBodyLength::from_config(rule_config)
            }
            None => FunctionBodyLength::new(),
        };
        rules.push(Box::new(rule));
    }

    rules
}
