//! End-to-end scans of a JSON document snapshot.

use a11y_check::{AccessibilityCheck, Config, Document, IssueKind, NodeId, Severity};
use std::collections::BTreeSet;
use std::path::Path;

fn fixture() -> Document {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/report.json");
    Document::from_path(&path).unwrap()
}

fn checked(config: Config) -> AccessibilityCheck {
    let mut checker = AccessibilityCheck::new(config);
    checker.check(Some(&fixture()));
    checker
}

fn count(checker: &AccessibilityCheck, kind: IssueKind) -> usize {
    checker.issues().by_kind(kind).len()
}

#[test]
fn reports_expected_kinds() {
    let checker = checked(Config::default());

    assert_eq!(count(&checker, IssueKind::DocumentTitle), 1);
    assert_eq!(count(&checker, IssueKind::StyleLanguage), 1);
    assert_eq!(count(&checker, IssueKind::DocumentLanguage), 0);
    assert_eq!(count(&checker, IssueKind::ManualNumbering), 1);
    assert_eq!(count(&checker, IssueKind::HeadingOrder), 1);
    assert_eq!(count(&checker, IssueKind::TextSpaces), 1);
    assert_eq!(count(&checker, IssueKind::HyperlinkIsText), 1);
    assert_eq!(count(&checker, IssueKind::HyperlinkNoName), 1);
    assert_eq!(count(&checker, IssueKind::NoAltGraphic), 1);
    assert_eq!(count(&checker, IssueKind::TableMergeSplit), 1);
    assert_eq!(count(&checker, IssueKind::AvoidFootnotes), 1);
}

#[test]
fn issue_details() {
    let checker = checked(Config::default());
    let issues = checker.issues();

    let spaces = issues.by_kind(IssueKind::TextSpaces)[0];
    assert_eq!(spaces.location.node, Some(NodeId(4)));
    assert_eq!((spaces.location.start, spaces.location.end), (Some(4), Some(5)));

    let order = issues.by_kind(IssueKind::HeadingOrder)[0];
    assert!(order.message.contains("skipped from level 1 to level 3"));

    let title = issues.by_kind(IssueKind::DocumentTitle)[0];
    assert_eq!(title.severity, Severity::Error);
    assert_eq!(title.location.node, None);
}

#[test]
fn document_checks_come_first() {
    let checker = checked(Config::default());
    let first = checker.issues().iter().next().unwrap();
    assert_eq!(first.kind, IssueKind::StyleLanguage);
}

#[test]
fn repeated_checks_are_idempotent() {
    let document = fixture();
    let mut checker = AccessibilityCheck::default();

    let key = |checker: &AccessibilityCheck| -> BTreeSet<_> {
        checker
            .issues()
            .iter()
            .map(|i| (i.kind, i.location.node, i.location.start, i.location.end))
            .collect()
    };

    checker.check(Some(&document));
    let first = key(&checker);
    let len = checker.issues().len();
    checker.check(Some(&document));
    assert_eq!(key(&checker), first);
    assert_eq!(checker.issues().len(), len);
}

#[test]
fn hidden_kinds_are_recorded_but_not_counted() {
    let visible = checked(Config::default());
    let config = Config::parse(
        r#"
        [issues.text-spaces]
        enabled = false
        "#,
    )
    .unwrap();
    let hidden = checked(config);

    let spaces = hidden.issues().by_kind(IssueKind::TextSpaces);
    assert_eq!(spaces.len(), 1);
    assert!(spaces[0].hidden);

    let (errors, warnings) = visible.issues().count_by_severity();
    assert_eq!(hidden.issues().count_by_severity(), (errors, warnings - 1));
    assert!(hidden.issues().format_report().contains("(1 hidden)"));
}

#[test]
fn severity_overrides_apply() {
    let config = Config::parse(
        r#"
        [issues.avoid-footnotes]
        severity = "error"
        [issues.document-title]
        severity = "warning"
        "#,
    )
    .unwrap();
    let checker = checked(config);
    let issues = checker.issues();
    assert_eq!(issues.by_kind(IssueKind::AvoidFootnotes)[0].severity, Severity::Error);
    assert_eq!(issues.by_kind(IssueKind::DocumentTitle)[0].severity, Severity::Warning);
}

#[test]
fn disabled_checks_do_not_run() {
    let config = Config::parse(
        r#"
        [checks.heading-order]
        enabled = false
        [checks.drawing-objects]
        enabled = false
        "#,
    )
    .unwrap();
    let checker = checked(config);
    assert_eq!(count(&checker, IssueKind::HeadingOrder), 0);
    assert_eq!(count(&checker, IssueKind::TextSpaces), 1);
}

#[test]
fn essential_preset_skips_warnings_checks() {
    let config = Config::parse(r#"preset = "essential""#).unwrap();
    let checker = checked(config);
    assert_eq!(count(&checker, IssueKind::TextSpaces), 0);
    assert_eq!(count(&checker, IssueKind::AvoidFootnotes), 0);
    assert_eq!(count(&checker, IssueKind::HeadingOrder), 1);
    assert_eq!(count(&checker, IssueKind::DocumentTitle), 1);
}

#[test]
fn check_node_matches_full_scan_for_that_node() {
    let document = fixture();
    let mut checker = AccessibilityCheck::default();
    checker.check(Some(&document));

    let node = checker.check_node(Some(&document), NodeId(5));
    let from_scan: Vec<_> = checker
        .issues()
        .iter()
        .filter(|i| i.location.node == Some(NodeId(5)))
        .map(|i| i.kind)
        .collect();
    let kinds: Vec<_> = node.iter().map(|i| i.kind).collect();
    assert_eq!(kinds, from_scan);

    assert!(checker.check_node(Some(&document), NodeId(999)).is_empty());
}

#[test]
fn snapshot_round_trips_through_json() {
    let document = fixture();
    let json = serde_json::to_string(&document).unwrap();
    let again = Document::from_json(&json).unwrap();
    let mut checker = AccessibilityCheck::default();
    checker.check(Some(&again));
    assert_eq!(checker.issues(), checked(Config::default()).issues());
}
