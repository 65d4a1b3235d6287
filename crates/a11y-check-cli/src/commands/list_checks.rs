//! List checks command implementation.

use a11y_check_core::IssueKind;
use a11y_check_rules::check_catalog;

/// Runs the list-checks command.
pub fn run() {
    println!("Available checks:\n");
    println!("{:<25} Description", "Name");
    println!("{}", "-".repeat(80));

    for (name, description) in check_catalog() {
        println!("{name:<25} {description}");
    }

    println!("\nIssue kinds (configure under [issues.<kind>]):\n");
    for kind in IssueKind::ALL.iter().copied() {
        println!("  {:<32} {}", kind.name(), kind.description());
    }

    println!("\nPresets:");
    println!("  full       - All checks (default)");
    println!("  essential  - Checks reporting errors only");

    println!("\nUse --checks to run specific checks, e.g.:");
    println!("  a11y-check check --checks heading-order,text-contrast docs/");
}
