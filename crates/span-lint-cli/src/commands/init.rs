//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# span-lint configuration

[linter]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/vendor/**",
    "**/generated/**",
]

# Rule configurations
# Each rule can be enabled/disabled and have its line limits adjusted.
# `warning` should stay below `error`; the linter does not reorder them.

[rules.type_body_length]
enabled = true
# warning = 200
# error = 350

[rules.function_body_length]
enabled = true
# warning = 40
# error = 100
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("span-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created span-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit span-lint.toml to configure rules");
    println!("  2. Run: span-lint check");

    Ok(())
}
