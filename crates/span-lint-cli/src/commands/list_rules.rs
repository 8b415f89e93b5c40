//! List rules command implementation.

use span_lint_rules::{all_rules, DeclRule};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<25} {:<25} Description", "Identifier", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        let description = rule.description();
        println!(
            "{:<25} {:<25} {}",
            description.identifier, description.name, description.description
        );
    }

    println!("\nEach rule accepts `warning` and `error` line limits in its config table.");
    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  span-lint check --rules type_body_length");
    println!("  span-lint check --rules type_body_length,function_body_length");
}
