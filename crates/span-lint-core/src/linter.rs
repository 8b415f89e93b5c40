//! Linter for orchestrating rule execution over a file tree.

use crate::config::Config;
use crate::context::FileContext;
use crate::line_index::LineIndex;
use crate::rule::{DeclRule, RuleBox};
use crate::syntax::extract_declarations;
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during linting.
#[derive(Debug, Error)]
pub enum LinterError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a Rust source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: bool,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: DeclRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the linter.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved for a
    /// relative root.
    pub fn build(self) -> Result<Linter, LinterError> {
        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.linter.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.linter.exclude.clone());
        }

        if exclude_patterns.is_empty() {
            exclude_patterns.extend(["**/target/**".to_string(), "**/vendor/**".to_string()]);
        }

        Ok(Linter {
            root,
            rules: self.rules,
            exclude_patterns,
            config: self.config.unwrap_or_default(),
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// Orchestrates rule execution: discovers files, parses them, builds the
/// per-file line index, and feeds every declaration node to every enabled
/// rule.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Config,
    fail_on_parse_error: bool,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Lints all files under the root and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or on the first parse
    /// failure when `fail_on_parse_error` is set.
    pub fn run(&self) -> Result<LintResult, LinterError> {
        info!("Starting lint at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to lint", files.len());

        for file_path in &files {
            match self.lint_file(file_path) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(LinterError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(LinterError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        // Sort violations by file, then line, then column
        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Lint complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Lints a single file and returns violations.
    ///
    /// The line index is built once here, before any rule runs, and is
    /// shared read-only by every evaluation for this file.
    fn lint_file(&self, path: &Path) -> Result<Vec<Violation>, LinterError> {
        debug!("Linting: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let ast = syn::parse_file(&content).map_err(|e| LinterError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let index = LineIndex::new(&content);
        let nodes = extract_declarations(&ast, &index);
        let ctx = FileContext::new(path, &self.root, &index);
        let mut violations = Vec::new();

        for rule in &self.rules {
            let identifier = rule.description().identifier;
            if !self.config.is_rule_enabled(identifier) {
                debug!("Skipping disabled rule: {}", identifier);
                continue;
            }

            for node in &nodes {
                violations.extend(rule.check(&ctx, node));
            }
        }

        Ok(violations)
    }

    /// Discovers all Rust source files to lint.
    fn discover_files(&self) -> Result<Vec<PathBuf>, LinterError> {
        let pattern = format!("{}/**/*.rs", self.root.display());
        let mut files = Vec::new();

        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| LinterError::Io(e.into_error()))?;

            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_patterns {
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(&path_str) {
                    return true;
                }
            }

            // Also check as substring for patterns like "**/target/**"
            let normalized_pattern = pattern.replace("**", "");
            if !normalized_pattern.is_empty() && path_str.contains(&normalized_pattern) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{DeclarationKind, SyntaxNode};
    use crate::types::{Location, RuleDescription, Severity};

    static FLAG_STRUCTS: RuleDescription = RuleDescription {
        identifier: "flag_structs",
        name: "Flag Structs",
        description: "Flags every struct declaration",
    };

    struct FlagStructs;

    impl DeclRule for FlagStructs {
        fn description(&self) -> &'static RuleDescription {
            &FLAG_STRUCTS
        }

        fn check(&self, ctx: &FileContext, node: &SyntaxNode) -> Vec<Violation> {
            if node.kind != DeclarationKind::Struct {
                return Vec::new();
            }
            let line = node
                .declaration_offset
                .and_then(|offset| ctx.index.position(offset))
                .map_or(0, |pos| pos.line);
            vec![Violation::new(
                FLAG_STRUCTS.identifier,
                Severity::Warning,
                Location::new(ctx.relative_path.clone(), line, 1),
                "struct found",
            )]
        }
    }

    #[test]
    fn run_feeds_every_node_to_every_rule() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        std::fs::write(
            tmp.path().join("lib.rs"),
            "struct A;\nstruct B;\nfn f() {}\n",
        )
        .expect("write fixture");

        let linter = Linter::builder()
            .root(tmp.path())
            .rule(FlagStructs)
            .build()
            .expect("Failed to build linter");

        let result = linter.run().expect("lint run");
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.violations.len(), 2);
        // Sorted by line.
        assert_eq!(result.violations[0].location.line, 1);
        assert_eq!(result.violations[1].location.line, 2);
    }

    #[test]
    fn builder_resolves_relative_root() {
        let linter = Linter::builder()
            .root(".")
            .exclude("**/target/**")
            .build()
            .expect("Failed to build linter");

        assert!(linter.root().is_absolute());
        assert_eq!(linter.rule_count(), 0);
    }

    #[test]
    fn exclude_patterns_match() {
        let linter = Linter::builder()
            .root(".")
            .exclude("**/target/**")
            .exclude("**/vendor/**")
            .build()
            .expect("Failed to build linter");

        assert!(linter.should_exclude(Path::new("/foo/target/debug/main.rs")));
        assert!(linter.should_exclude(Path::new("/foo/vendor/lib.rs")));
        assert!(!linter.should_exclude(Path::new("/foo/src/lib.rs")));
    }

    #[test]
    fn config_excludes_are_merged() {
        let config = Config::parse("[linter]\nexclude = [\"**/generated/**\"]\n").unwrap();
        let linter = Linter::builder()
            .root(".")
            .config(config)
            .build()
            .expect("Failed to build linter");

        assert!(linter.should_exclude(Path::new("/foo/generated/code.rs")));
    }
}
