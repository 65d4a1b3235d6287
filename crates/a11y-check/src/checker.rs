//! Stateful accessibility check over a host document.

use a11y_check_core::document::Document;
use a11y_check_core::{Config, IssueCollection, NodeId, Scanner};
use a11y_check_rules::Preset;
use tracing::debug;

/// Runs the configured preset over a document and keeps the last result.
///
/// The scanner is built lazily: the checker starts uninitialized and
/// becomes ready on the first [`init`](Self::init), [`check`](Self::check)
/// or [`check_node`](Self::check_node) call.
pub struct AccessibilityCheck {
    config: Config,
    scanner: Option<Scanner>,
    issues: IssueCollection,
}

impl AccessibilityCheck {
    /// Creates an uninitialized checker.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scanner: None,
            issues: IssueCollection::new(),
        }
    }

    /// The configuration the scanner is built from.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the scanner has been built.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.scanner.is_some()
    }

    /// Builds the scanner from the configured preset. Does nothing when
    /// already ready.
    pub fn init(&mut self) -> &mut Scanner {
        let config = &self.config;
        self.scanner.get_or_insert_with(|| {
            let preset = Preset::from_config(config);
            debug!("Building scanner with preset: {}", preset.name());
            preset.scanner(config)
        })
    }

    /// Clears the previous result and scans `document`.
    ///
    /// Without a document nothing is checked and the previous result is
    /// kept; an empty collection therefore does not mean "no problems".
    pub fn check(&mut self, document: Option<&Document>) {
        let Some(document) = document else {
            debug!("No document to check");
            return;
        };
        let mut issues = std::mem::take(&mut self.issues);
        self.init().scan_into(document, &mut issues);
        self.issues = issues;
    }

    /// Checks one node of `document` without touching the stored result.
    ///
    /// Returns an empty collection without a document or for an unknown
    /// node id.
    pub fn check_node(&mut self, document: Option<&Document>, id: NodeId) -> IssueCollection {
        match document {
            Some(document) => self.init().scan_node(document, id),
            None => IssueCollection::new(),
        }
    }

    /// Issues of the last full check.
    #[must_use]
    pub fn issues(&self) -> &IssueCollection {
        &self.issues
    }
}

impl Default for AccessibilityCheck {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl std::fmt::Debug for AccessibilityCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessibilityCheck")
            .field("ready", &self.is_ready())
            .field("issues", &self.issues.len())
            .finish_non_exhaustive()
    }
}
