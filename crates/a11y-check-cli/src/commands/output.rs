//! Shared output formatting for check results.

use a11y_check_core::{DocumentContext, Issue, IssueDiagnostic, Severity};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use super::check::FileReport;
use crate::OutputFormat;

/// Print check results in the specified format.
pub fn print(reports: &[FileReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(reports),
        OutputFormat::Json => return print_json(reports),
        OutputFormat::Compact => print_compact(reports),
    }
    Ok(())
}

fn print_text(reports: &[FileReport]) {
    let mut errors = 0;
    let mut warnings = 0;
    let mut hidden = 0;

    for report in reports {
        let ctx = DocumentContext::new(&report.document);
        for issue in report.issues.visible() {
            match node_text(&ctx, issue) {
                Some(text) => {
                    let name = format!("{} ({})", report.path.display(), issue.location_label());
                    let diagnostic = IssueDiagnostic::new(issue, name, text);
                    println!("{:?}", miette::Report::new(diagnostic));
                }
                None => {
                    let severity_indicator = match issue.severity {
                        Severity::Error => "\x1b[31merror\x1b[0m",
                        Severity::Warning => "\x1b[33mwarning\x1b[0m",
                    };
                    println!(
                        "{} at {}: {}",
                        issue.kind,
                        report.path.display(),
                        issue.location_label()
                    );
                    println!("  {}: {}", severity_indicator, issue.message);
                    if !issue.additional_info.is_empty() {
                        println!("  = note: {}", issue.additional_info.join(", "));
                    }
                    println!();
                }
            }
        }
        let (e, w) = report.issues.count_by_severity();
        errors += e;
        warnings += w;
        hidden += report.issues.len() - report.issues.visible().count();
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s) ({} hidden) in {} file(s)\x1b[0m",
        summary_color,
        errors,
        warnings,
        hidden,
        reports.len()
    );
}

/// Text of the paragraph an issue points into, if it has a text range.
fn node_text<'a>(ctx: &'a DocumentContext<'a>, issue: &Issue) -> Option<&'a str> {
    issue.location.start?;
    let node = ctx.node_context(issue.location.node?)?;
    node.paragraph()
        .map(|p| p.text.as_str())
        .filter(|text| !text.is_empty())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a Path,
    issues: Vec<&'a Issue>,
}

fn print_json(reports: &[FileReport]) -> Result<()> {
    let json: Vec<JsonReport<'_>> = reports
        .iter()
        .map(|report| JsonReport {
            path: &report.path,
            issues: report.issues.iter().collect(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_compact(reports: &[FileReport]) {
    for report in reports {
        for issue in report.issues.visible() {
            println!("{}: {}", report.path.display(), issue);
        }
    }
}
