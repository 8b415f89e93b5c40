//! Check command implementation.

use anyhow::{Context, Result};
use span_lint_core::{Config, DeclRule, Linter, RuleBox};
use span_lint_rules::configured_rules;
use std::path::Path;

use super::output;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let source = crate::config_resolver::resolve(path, config_path);
    let config = match source.path() {
        Some(p) => {
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
        None => Config::default(),
    };

    let rules = match rules_filter {
        Some(filter) => {
            let identifiers: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(&config, &identifiers)
        }
        None => configured_rules(&config),
    };

    let mut builder = Linter::builder().root(path).config(config);
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let linter = builder.build().context("Failed to build linter")?;

    tracing::info!("Linting {:?} with {} rules", path, linter.rule_count());

    let result = linter.run().context("Lint failed")?;

    output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(config: &Config, identifiers: &[&str]) -> Vec<RuleBox> {
    let available = configured_rules(config);

    for identifier in identifiers {
        if !available
            .iter()
            .any(|rule| rule.description().identifier == *identifier)
        {
            tracing::warn!("Unknown rule: {}", identifier);
        }
    }

    available
        .into_iter()
        .filter(|rule| identifiers.contains(&rule.description().identifier))
        .collect()
}
