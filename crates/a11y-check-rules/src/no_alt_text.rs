//! Check for images and embedded objects without alternative text.
//!
//! # Rationale
//!
//! Screen readers announce an image or chart by its alternative text. An
//! object without a title or description is either skipped or read out as
//! its file name.
//!
//! # Detected Patterns
//!
//! - Graphic or OLE object with blank title and description, not marked decorative
//! - Linked graphic whose local file does not exist
//!
//! Remote links (`http:`, `https:`...) are never fetched.

use std::path::{Path, PathBuf};

use a11y_check_core::document::{Graphic, OleObject};
use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, NodeKind, Severity,
};
use tracing::debug;
use url::Url;

/// Check name for no-alt-text.
pub const NAME: &str = "no-alt-text";

fn missing_alt(title: &str, description: &str, decorative: bool) -> bool {
    !decorative && title.trim().is_empty() && description.trim().is_empty()
}

/// Resolves a graphic link to a local path, or `None` for remote links.
fn local_path(link: &str, base_dir: Option<&Path>) -> Option<PathBuf> {
    let path = match Url::parse(link) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().ok()?,
        // Single-letter schemes are Windows drive letters.
        Ok(url) if url.scheme().len() > 1 => return None,
        _ => PathBuf::from(link),
    };
    if path.is_relative() {
        if let Some(base) = base_dir {
            return Some(base.join(path));
        }
    }
    Some(path)
}

/// Flags graphics and OLE objects that screen readers cannot describe.
#[derive(Debug, Clone, Default)]
pub struct NoAltText;

impl NoAltText {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_graphic(ctx: &NodeContext<'_>, graphic: &Graphic, sink: &mut IssueSink<'_>) {
        if missing_alt(&graphic.title, &graphic.description, graphic.decorative) {
            sink.add_issue(
                format!("{} - Missing alternative text.", graphic.name),
                IssueKind::NoAltGraphic,
                Severity::Error,
            )
            .set_node(ctx.id())
            .set_object(IssueObject::Graphic)
            .set_object_id(&graphic.name);
        }

        let Some(link) = graphic.link.as_deref() else {
            return;
        };
        let Some(path) = local_path(link, ctx.document().base_dir()) else {
            debug!("Not checking remote graphic link {link}");
            return;
        };
        if let Err(e) = std::fs::metadata(&path) {
            debug!("Linked graphic {} is broken: {e}", path.display());
            sink.add_issue(
                format!("{} - Linked graphic \"{link}\" cannot be found.", graphic.name),
                IssueKind::LinkedGraphic,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_object(IssueObject::Graphic)
            .set_object_id(&graphic.name);
        }
    }

    fn check_ole(ctx: &NodeContext<'_>, ole: &OleObject, sink: &mut IssueSink<'_>) {
        if missing_alt(&ole.title, &ole.description, ole.decorative) {
            sink.add_issue(
                format!("{} - Missing alternative text.", ole.name),
                IssueKind::NoAltOle,
                Severity::Error,
            )
            .set_node(ctx.id())
            .set_object(IssueObject::Ole)
            .set_object_id(&ole.name);
        }
    }
}

impl NodeCheck for NoAltText {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Images and embedded objects need alternative text"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        match ctx.kind() {
            NodeKind::Graphic(graphic) => Self::check_graphic(ctx, graphic, sink),
            NodeKind::Ole(ole) => Self::check_ole(ctx, ole, sink),
            NodeKind::Paragraph(_) | NodeKind::Table(_) => {}
        }
        Ok(())
    }
}
