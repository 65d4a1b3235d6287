//! # a11y-check
//!
//! Accessibility checker for office documents.
//!
//! This is the main facade crate that re-exports core functionality and the
//! built-in checks, and adds [`AccessibilityCheck`], the stateful entry
//! point a host keeps around while the user edits.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use a11y_check::{AccessibilityCheck, Config, Document};
//!
//! let document = Document::from_path("report.json".as_ref())?;
//! let mut checker = AccessibilityCheck::new(Config::default());
//! checker.check(Some(&document));
//!
//! for issue in checker.issues().visible() {
//!     println!("{issue}");
//! }
//! ```
//!
//! ## Online Checking
//!
//! After an edit, re-check just the touched paragraph:
//!
//! ```rust,ignore
//! let node_issues = checker.check_node(Some(&document), NodeId(12));
//! ```
//!
//! ## Custom Scanners
//!
//! ```rust,ignore
//! use a11y_check::Scanner;
//! use a11y_check::rules::{HeadingOrder, TextContrast};
//!
//! let mut scanner = Scanner::builder()
//!     .node_check(HeadingOrder::new())
//!     .node_check(TextContrast::new())
//!     .build();
//! let issues = scanner.scan(&document);
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use a11y_check_core::*;

/// Built-in checks and presets.
pub mod rules {
    pub use a11y_check_rules::*;
}

mod checker;

pub use checker::AccessibilityCheck;
