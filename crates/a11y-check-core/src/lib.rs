//! # a11y-check-core
//!
//! Core framework for accessibility checking of word-processor documents.
//!
//! This crate provides the foundational traits and types for building
//! accessibility checks. It includes:
//!
//! - [`document`], a read-only snapshot of the host document
//! - [`NodeCheck`] trait for checks that run once per scan node
//! - [`DocumentCheck`] trait for document-wide checks
//! - [`Scanner`] for orchestrating check execution
//! - [`Issue`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use a11y_check_core::{document::Document, Scanner};
//!
//! let document = Document::from_path("report.json".as_ref())?;
//! let mut scanner = Scanner::builder()
//!     .node_check(MyCheck::new())
//!     .build();
//!
//! let issues = scanner.scan(&document);
//! print!("{}", issues.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod config;
mod context;
mod object;
mod scanner;
mod types;

pub mod document;

/// Utility modules for check implementations.
pub mod utils;

pub use check::{CheckError, DocumentCheck, DocumentCheckBox, NodeCheck, NodeCheckBox};
pub use config::{CheckConfig, Config, ConfigError, IssueConfig};
pub use context::{AnchoredShape, Area, DocumentContext, NodeContext, NodeId, NodeKind, ScanNode};
pub use document::{Document, DocumentError};
pub use object::{check_shape, DRAWING_OBJECTS};
pub use scanner::{Scanner, ScannerBuilder};
pub use types::{
    Issue, IssueCollection, IssueDiagnostic, IssueKind, IssueObject, IssueOptions, IssueSink,
    Location, Severity,
};
