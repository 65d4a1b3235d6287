//! Core types for accessibility issues and scan results.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::Config;
use crate::context::NodeId;
use crate::utils::text;

/// Severity level for accessibility issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Should be addressed.
    Warning,
    /// Blocks access for some readers and must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

macro_rules! issue_kinds {
    ($($variant:ident => $name:literal: $doc:literal,)*) => {
        /// The closed set of issue kinds a scan can report.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum IssueKind {
            $(
                #[doc = $doc]
                $variant,
            )*
        }

        impl IssueKind {
            /// Every issue kind.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Kebab-case name used in configuration files.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// One-line description of the problem.
            #[must_use]
            pub fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $doc,)*
                }
            }

            /// Looks up a kind by its configuration name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

issue_kinds! {
    DocumentTitle => "document-title": "Document title is not set.",
    DocumentLanguage => "document-language": "Document default language is not set.",
    StyleLanguage => "style-language": "A paragraph style has no language.",
    DocumentBackground => "document-background": "A page style uses a background image.",
    LinkedGraphic => "linked-graphic": "A linked graphic points to a missing file.",
    NoAltGraphic => "no-alt-graphic": "An image has no alternative text.",
    NoAltOle => "no-alt-ole": "An embedded object has no alternative text.",
    NoAltShape => "no-alt-shape": "A drawing object has no alternative text.",
    TableMergeSplit => "table-merge-split": "A table contains merged or split cells.",
    TableFormatting => "table-formatting": "A table is used for layout.",
    TableHeadings => "table-headings": "A table contains headings.",
    TextNewLines => "text-new-lines": "Empty lines or repeated newlines are used for spacing.",
    TextSpaces => "text-spaces": "Repeated spaces are used for spacing.",
    TextTabs => "text-tabs": "Tabs are used for alignment.",
    TextEmptyNumberedParagraph => "text-empty-numbered-paragraph": "An empty paragraph sits between numbered paragraphs.",
    DirectFormatting => "direct-formatting": "Direct formatting conveys meaning.",
    HyperlinkIsText => "hyperlink-is-text": "Hyperlink text is the raw link.",
    HyperlinkShort => "hyperlink-short": "Hyperlink text is too short.",
    HyperlinkNoName => "hyperlink-no-name": "A hyperlink has no name.",
    LinkInHeaderFooter => "link-in-header-footer": "A link or reference sits in a header or footer.",
    FakeFootnote => "fake-footnote": "A footnote marker is typed by hand.",
    FakeCaption => "fake-caption": "A caption is typed by hand.",
    ManualNumbering => "manual-numbering": "List numbering is typed by hand.",
    TextContrast => "text-contrast": "Text contrast is insufficient.",
    TextBlinking => "text-blinking": "Text blinks.",
    HeadingOrder => "heading-order": "A heading skips an outline level.",
    HeadingStart => "heading-start": "Outline levels do not start at level 1.",
    NonInteractiveForms => "non-interactive-forms": "A form is simulated with placeholder characters.",
    FloatingText => "floating-text": "Text floats outside the reading order.",
    ContentControl => "content-control": "A content control sits in a header or footer.",
    AvoidFootnotes => "avoid-footnotes": "The document uses footnotes.",
    AvoidEndnotes => "avoid-endnotes": "The document uses endnotes.",
    Fontworks => "fontworks": "A Fontwork object is used.",
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What the host should navigate to for an issue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueObject {
    /// Nothing to navigate to.
    #[default]
    None,
    /// A text range.
    Text,
    /// A formatted text range.
    TextFormatting,
    /// A hyperlink.
    Link,
    /// An image.
    Graphic,
    /// An embedded object.
    Ole,
    /// A drawing object.
    Shape,
    /// A table.
    Table,
    /// The document as a whole.
    Document,
    /// A footnote.
    Footnote,
    /// An endnote.
    Endnote,
    /// A page style.
    PageStyle,
    /// A paragraph style.
    ParagraphStyle,
}

/// Where in the document an issue was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Node the issue belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeId>,
    /// First character of the offending text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    /// End of the offending text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    /// Name of the offending object or style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

/// An accessibility issue found during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue kind.
    pub kind: IssueKind,
    /// Severity of this issue.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Where the issue was found.
    pub location: Location,
    /// What the host should navigate to.
    pub object: IssueObject,
    /// Extra details, such as the names of offending formatting types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_info: Vec<String>,
    /// Hidden by configuration.
    pub hidden: bool,
}

impl Issue {
    /// Creates a new issue without location.
    #[must_use]
    pub fn new(kind: IssueKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
            location: Location::default(),
            object: IssueObject::None,
            additional_info: Vec::new(),
            hidden: false,
        }
    }

    /// Attaches the originating node.
    pub fn set_node(&mut self, node: NodeId) -> &mut Self {
        self.location.node = Some(node);
        self
    }

    /// Attaches a character range within the node's text.
    pub fn set_range(&mut self, start: usize, end: usize) -> &mut Self {
        self.location.start = Some(start);
        self.location.end = Some(end);
        self
    }

    /// Sets what the host should navigate to.
    pub fn set_object(&mut self, object: IssueObject) -> &mut Self {
        self.object = object;
        self
    }

    /// Attaches the name of the offending object or style.
    pub fn set_object_id(&mut self, object_id: impl Into<String>) -> &mut Self {
        self.location.object_id = Some(object_id.into());
        self
    }

    /// Attaches extra details.
    pub fn set_additional_info(&mut self, info: Vec<String>) -> &mut Self {
        self.additional_info = info;
        self
    }

    /// Formats the issue for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!("{} at {}\n", self.kind, self.location_label());
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if !self.additional_info.is_empty() {
            let _ = writeln!(output, "  = note: {}", self.additional_info.join(", "));
        }
        output
    }

    /// Short description of the location, e.g. `node 4 [3..6]` or `object "Image1"`.
    #[must_use]
    pub fn location_label(&self) -> String {
        use std::fmt::Write;
        let mut label = String::new();
        match self.location.node {
            Some(node) => {
                let _ = write!(label, "node {}", node.0);
            }
            None => label.push_str("document"),
        }
        if let (Some(start), Some(end)) = (self.location.start, self.location.end) {
            let _ = write!(label, " [{start}..{end}]");
        }
        if let Some(object_id) = &self.location.object_id {
            let _ = write!(label, " object \"{object_id}\"");
        }
        label
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location_label(),
            self.severity,
            self.kind,
            self.message
        )
    }
}

/// Renders a text issue as a miette diagnostic over the node's text.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct IssueDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl IssueDiagnostic {
    /// Builds a diagnostic for `issue` over `text`, the text of its node.
    #[must_use]
    pub fn new(issue: &Issue, source_name: impl AsRef<str>, text: &str) -> Self {
        let start = issue.location.start.unwrap_or(0);
        let end = issue.location.end.unwrap_or(start).max(start);
        let from = text::byte_offset(text, start);
        let to = text::byte_offset(text, end);
        Self {
            message: format!("[{}] {}", issue.kind, issue.message),
            help: (!issue.additional_info.is_empty()).then(|| issue.additional_info.join(", ")),
            source_code: NamedSource::new(source_name, text.to_string()),
            span: SourceSpan::from((from, to - from)),
            label_message: issue.severity.to_string(),
        }
    }
}

/// Enabled/disabled snapshot for every issue kind.
///
/// Built once per scanner from [`Config`]; consulted once per created issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueOptions {
    enabled: BTreeMap<IssueKind, bool>,
    severity: BTreeMap<IssueKind, Severity>,
}

impl Default for IssueOptions {
    fn default() -> Self {
        Self {
            enabled: IssueKind::ALL.iter().map(|kind| (*kind, true)).collect(),
            severity: BTreeMap::new(),
        }
    }
}

impl IssueOptions {
    /// Snapshot with every kind enabled, then overridden by `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut options = Self::default();
        for kind in IssueKind::ALL {
            if let Some(enabled) = config.issue_enabled(*kind) {
                options.enabled.insert(*kind, enabled);
            }
            if let Some(severity) = config.issue_severity(*kind) {
                options.severity.insert(*kind, severity);
            }
        }
        options
    }

    /// Snapshot from an explicit map. Kinds missing from the map are a
    /// programming error when an issue of that kind is created.
    #[must_use]
    pub fn from_map(enabled: BTreeMap<IssueKind, bool>) -> Self {
        Self {
            enabled,
            severity: BTreeMap::new(),
        }
    }

    /// Whether issues of `kind` are shown; `None` if the kind is unknown.
    #[must_use]
    pub fn is_enabled(&self, kind: IssueKind) -> Option<bool> {
        self.enabled.get(&kind).copied()
    }

    /// Severity override for `kind`.
    #[must_use]
    pub fn severity_override(&self, kind: IssueKind) -> Option<Severity> {
        self.severity.get(&kind).copied()
    }
}

/// Ordered issues of one scan, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCollection {
    issues: Vec<Issue>,
}

impl IssueCollection {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of issues, hidden ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// All issues, hidden ones included.
    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    /// Issues not hidden by configuration.
    pub fn visible(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|issue| !issue.hidden)
    }

    /// Issues of one kind.
    #[must_use]
    pub fn by_kind(&self, kind: IssueKind) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.kind == kind).collect()
    }

    /// Removes every issue.
    pub fn clear(&mut self) {
        self.issues.clear();
    }

    /// Appends an issue and returns a handle to it.
    pub fn push(&mut self, issue: Issue) -> &mut Issue {
        self.issues.push(issue);
        let last = self.issues.len() - 1;
        &mut self.issues[last]
    }

    /// Appends all issues of another collection.
    pub fn extend(&mut self, other: Self) {
        self.issues.extend(other.issues);
    }

    /// Returns true if there are any visible errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_issues_at(Severity::Error)
    }

    /// Checks if any visible issue meets or exceeds the given severity.
    #[must_use]
    pub fn has_issues_at(&self, severity: Severity) -> bool {
        self.visible().any(|i| i.severity >= severity)
    }

    /// Counts visible issues as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.visible().fold((0, 0), |(errors, warnings), issue| match issue.severity {
            Severity::Error => (errors + 1, warnings),
            Severity::Warning => (errors, warnings + 1),
        })
    }

    /// Formats visible issues as a human-readable report.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for issue in self.visible() {
            let _ = writeln!(report, "{}", issue.format());
        }
        let (errors, warnings) = self.count_by_severity();
        let hidden = self.len() - self.visible().count();
        let _ = writeln!(
            report,
            "Found {errors} error(s), {warnings} warning(s) ({hidden} hidden)"
        );
        report
    }
}

impl<'a> IntoIterator for &'a IssueCollection {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

/// Write handle that checks report issues through.
///
/// Applies the configured severity overrides and the hidden-flag policy to
/// every issue it creates.
pub struct IssueSink<'a> {
    issues: &'a mut IssueCollection,
    options: &'a IssueOptions,
}

impl<'a> IssueSink<'a> {
    /// Creates a sink appending to `issues`.
    pub fn new(issues: &'a mut IssueCollection, options: &'a IssueOptions) -> Self {
        Self { issues, options }
    }

    /// Creates, records and returns an issue so the caller can attach its location.
    pub fn add_issue(
        &mut self,
        message: impl Into<String>,
        kind: IssueKind,
        severity: Severity,
    ) -> &mut Issue {
        let severity = self.options.severity_override(kind).unwrap_or(severity);
        let mut issue = Issue::new(kind, severity, message);
        issue.hidden = match self.options.is_enabled(kind) {
            Some(enabled) => !enabled,
            None => {
                debug_assert!(false, "issue kind `{kind}` missing from issue options");
                false
            }
        };
        self.issues.push(issue)
    }

    /// Number of issues recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if nothing was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_issue(severity: Severity) -> Issue {
        let mut issue = Issue::new(IssueKind::TextSpaces, severity, "Avoid repeated spaces.");
        issue.set_node(NodeId(3)).set_range(4, 5);
        issue
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in IssueKind::ALL {
            assert_eq!(IssueKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(IssueKind::from_name("nope"), None);
    }

    #[test]
    fn kind_serializes_as_config_name() {
        let json = serde_json::to_string(&IssueKind::TextEmptyNumberedParagraph).unwrap();
        assert_eq!(json, "\"text-empty-numbered-paragraph\"");
    }

    #[test]
    fn display_includes_location() {
        let display = make_issue(Severity::Warning).to_string();
        assert_eq!(
            display,
            "node 3 [4..5]: warning [text-spaces] Avoid repeated spaces."
        );
    }

    #[test]
    fn format_includes_additional_info() {
        let mut issue = make_issue(Severity::Warning);
        issue.set_additional_info(vec!["Weight".into(), "Font Color".into()]);
        assert!(issue.format().contains("= note: Weight, Font Color"));
    }

    #[test]
    fn sink_hides_disabled_kinds() {
        let mut enabled = BTreeMap::new();
        enabled.insert(IssueKind::TextSpaces, false);
        enabled.insert(IssueKind::TextTabs, true);
        let options = IssueOptions::from_map(enabled);
        let mut issues = IssueCollection::new();
        let mut sink = IssueSink::new(&mut issues, &options);
        sink.add_issue("spaces", IssueKind::TextSpaces, Severity::Warning);
        sink.add_issue("tabs", IssueKind::TextTabs, Severity::Warning);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues.visible().count(), 1);
        assert_eq!(issues.count_by_severity(), (0, 1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "missing from issue options")]
    fn sink_asserts_on_unknown_kind() {
        let options = IssueOptions::from_map(BTreeMap::new());
        let mut issues = IssueCollection::new();
        IssueSink::new(&mut issues, &options).add_issue(
            "title",
            IssueKind::DocumentTitle,
            Severity::Error,
        );
    }

    #[test]
    fn has_issues_at_respects_threshold() {
        let mut issues = IssueCollection::new();
        issues.push(make_issue(Severity::Warning));
        assert!(!issues.has_issues_at(Severity::Error));
        assert!(issues.has_issues_at(Severity::Warning));
        assert!(!issues.has_errors());
    }

    #[test]
    fn report_counts_hidden_issues() {
        let mut issues = IssueCollection::new();
        issues.push(make_issue(Severity::Error));
        issues.push(make_issue(Severity::Warning)).hidden = true;
        let report = issues.format_report();
        assert!(report.contains("Found 1 error(s), 0 warning(s) (1 hidden)"));
    }

    #[test]
    fn report_format() {
        let mut issues = IssueCollection::new();
        issues.push(make_issue(Severity::Warning));
        insta::assert_snapshot!(issues.format_report(), @r"
text-spaces at node 3 [4..5]
  warning: Avoid repeated spaces.

Found 0 error(s), 1 warning(s) (0 hidden)
");
    }

    #[test]
    fn diagnostic_span_uses_byte_offsets() {
        let mut issue = Issue::new(IssueKind::TextSpaces, Severity::Warning, "spaces");
        issue.set_range(3, 5);
        let diagnostic = IssueDiagnostic::new(&issue, "node 0", "äöü  x");
        assert_eq!(diagnostic.span, SourceSpan::from((6, 2)));
    }
}
