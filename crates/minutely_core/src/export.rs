//! Artifact serialization and the render-backend boundary.
//!
//! Every artifact kind first becomes plain text (also used for clipboard
//! copy), then flows through [`crate::layout::wrap`] and
//! [`crate::paginate::paginate`] under one fixed geometry. The actual PDF/print backend sits behind
//! [`RenderBackend`]; a backend failure is a rendering-time condition only
//! and never touches the generated document or capture state.

use std::path::Path;

use crate::error::AppError;
use crate::layout;
use crate::models::{ActionItem, GeneratedDocument, Minutes};
use crate::paginate::{self, PageGeometry, PagedDocument};

/// One of the three generated outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Summary,
    Minutes,
    Actions,
}

impl ArtifactKind {
    /// Document title for this artifact kind.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Summary => "Meeting Summary",
            Self::Minutes => "Minutes of Meeting",
            Self::Actions => "Action Items",
        }
    }
}

/// Serialize the minutes per variant: free text as-is, items as `•` bullets
/// joined by newlines.
pub fn minutes_text(minutes: &Minutes) -> String {
    match minutes {
        Minutes::Text(text) => text.clone(),
        Minutes::Items(items) => items
            .iter()
            .map(|item| format!("• {item}"))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Serialize action items as an indented field-by-field dump.
///
/// Lossless: every field of every item appears, with the display-level
/// fallbacks (`Unassigned`, `TBD`, `medium`) substituted for absent values.
pub fn actions_text(items: &[ActionItem]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}. {}\n", index + 1, item.task));
        out.push_str(&format!("   owner: {}\n", item.owner_display()));
        out.push_str(&format!("   deadline: {}\n", item.deadline_display()));
        out.push_str(&format!("   priority: {}", item.priority));
        out.push('\n');
    }
    out
}

/// Plain-text serialization of one artifact, independent of pagination.
///
/// This is the clipboard-copy surface; [`render`] feeds the same text into
/// the layout engine.
pub fn plain_text(kind: ArtifactKind, document: &GeneratedDocument) -> String {
    match kind {
        ArtifactKind::Summary => document.summary.clone(),
        ArtifactKind::Minutes => minutes_text(&document.minutes),
        ArtifactKind::Actions => actions_text(&document.action_items),
    }
}

/// Render one artifact into a titled page sequence.
///
/// The text is wrapped to the geometry's usable width under `measure` and
/// paginated with the geometry's margin and line height.
pub fn render<F>(
    kind: ArtifactKind,
    document: &GeneratedDocument,
    geometry: &PageGeometry,
    measure: F,
) -> PagedDocument
where
    F: Fn(&str) -> f32,
{
    let text = plain_text(kind, document);
    let lines = layout::wrap(&text, geometry.max_text_width(), measure);
    PagedDocument {
        title: kind.title().to_string(),
        pages: paginate::paginate(lines, geometry),
    }
}

/// PDF/print rendering backend boundary.
///
/// Implementations draw whatever they are told at the given coordinates;
/// pagination decisions were already made upstream. Any failure maps to
/// [`AppError::ExportBackend`].
pub trait RenderBackend {
    /// Open a new output document with the given title.
    fn begin_document(&mut self, title: &str) -> Result<(), AppError>;
    /// Draw one line of text at `(x, y)` on the current page.
    fn draw_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), AppError>;
    /// Start a new page.
    fn add_page(&mut self) -> Result<(), AppError>;
    /// Finalize and persist the document.
    fn finish(&mut self, path: &Path) -> Result<(), AppError>;
}

/// Feed a paginated document into a render backend.
///
/// Walks the page/line structure issuing draw calls, adding a backend page
/// exactly where the paginator started a new [`Page`](crate::paginate::Page).
pub fn export_document(
    document: &PagedDocument,
    geometry: &PageGeometry,
    backend: &mut dyn RenderBackend,
    path: &Path,
) -> Result<(), AppError> {
    backend.begin_document(&document.title)?;
    for (index, page) in document.pages.iter().enumerate() {
        if index > 0 {
            backend.add_page()?;
        }
        for line in &page.lines {
            backend.draw_text(&line.text, geometry.margin, line.y)?;
        }
    }
    backend.finish(path)?;
    tracing::debug!(
        title = %document.title,
        pages = document.pages.len(),
        "exported document"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{
        actions_text, export_document, minutes_text, plain_text, render, ArtifactKind,
        RenderBackend,
    };
    use crate::error::AppError;
    use crate::layout::monospace_measure;
    use crate::models::{ActionItem, GeneratedDocument, Minutes, Priority};
    use crate::paginate::PageGeometry;

    fn sample_document() -> GeneratedDocument {
        GeneratedDocument {
            summary: "Budget approved.".to_string(),
            minutes: Minutes::Items(vec![
                "Discussed budget".to_string(),
                "Approved roadmap".to_string(),
            ]),
            action_items: vec![ActionItem {
                task: "Send report".to_string(),
                owner: Some("Alice".to_string()),
                deadline: Some("Fri".to_string()),
                priority: Priority::High,
            }],
        }
    }

    #[test]
    fn titles_follow_artifact_kind() {
        assert_eq!(ArtifactKind::Summary.title(), "Meeting Summary");
        assert_eq!(ArtifactKind::Minutes.title(), "Minutes of Meeting");
        assert_eq!(ArtifactKind::Actions.title(), "Action Items");
    }

    #[test]
    fn minutes_items_serialize_as_bullets() {
        let doc = sample_document();
        assert_eq!(
            minutes_text(&doc.minutes),
            "• Discussed budget\n• Approved roadmap"
        );
    }

    #[test]
    fn minutes_text_variant_is_used_verbatim() {
        let minutes = Minutes::Text("Key points\nwere noted".to_string());
        assert_eq!(minutes_text(&minutes), "Key points\nwere noted");
    }

    #[test]
    fn actions_dump_contains_every_field_literal() {
        let doc = sample_document();
        let text = actions_text(&doc.action_items);
        assert!(text.contains("Send report"));
        assert!(text.contains("Alice"));
        assert!(text.contains("Fri"));
        assert!(text.contains("high"));
    }

    #[test]
    fn actions_dump_substitutes_display_defaults() {
        let items = vec![ActionItem {
            task: "X".to_string(),
            ..ActionItem::default()
        }];
        let text = actions_text(&items);
        assert!(text.contains("owner: Unassigned"));
        assert!(text.contains("deadline: TBD"));
        assert!(text.contains("priority: medium"));
    }

    #[test]
    fn empty_action_list_serializes_to_empty_text() {
        assert_eq!(actions_text(&[]), "");
    }

    #[test]
    fn long_summary_paginates_to_multiple_pages() {
        let word = "deliverable ";
        let doc = GeneratedDocument {
            summary: word.repeat(500).trim_end().to_string(),
            ..GeneratedDocument::default()
        };
        let geometry = PageGeometry {
            page_width: 60.0,
            page_height: 50.0,
            margin: 10.0,
            line_height: 5.0,
        };
        let paged = render(
            ArtifactKind::Summary,
            &doc,
            &geometry,
            monospace_measure(1.0),
        );
        assert!(paged.pages.len() > 1);
        assert!(!paged.pages.last().unwrap().lines.is_empty());
        assert_eq!(
            paged.line_count(),
            paged.pages.iter().map(|p| p.lines.len()).sum::<usize>()
        );
    }

    #[test]
    fn plain_text_summary_is_the_raw_string() {
        let doc = sample_document();
        assert_eq!(plain_text(ArtifactKind::Summary, &doc), "Budget approved.");
    }

    /// Backend that records calls and can be told to fail on draw.
    #[derive(Default)]
    struct RecordingBackend {
        ops: Vec<String>,
        fail_draw: bool,
        saved_to: Option<PathBuf>,
    }

    impl RenderBackend for RecordingBackend {
        fn begin_document(&mut self, title: &str) -> Result<(), AppError> {
            self.ops.push(format!("begin:{title}"));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, _x: f32, _y: f32) -> Result<(), AppError> {
            if self.fail_draw {
                return Err(AppError::ExportBackend("device lost".to_string()));
            }
            self.ops.push(format!("draw:{text}"));
            Ok(())
        }

        fn add_page(&mut self) -> Result<(), AppError> {
            self.ops.push("page".to_string());
            Ok(())
        }

        fn finish(&mut self, path: &Path) -> Result<(), AppError> {
            self.saved_to = Some(path.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn export_adds_backend_pages_at_paginator_boundaries() {
        let doc = GeneratedDocument {
            summary: "alpha beta gamma delta epsilon zeta".to_string(),
            ..GeneratedDocument::default()
        };
        let geometry = PageGeometry {
            page_width: 30.0,
            page_height: 24.0,
            margin: 6.0,
            line_height: 6.0,
        };
        let paged = render(
            ArtifactKind::Summary,
            &doc,
            &geometry,
            monospace_measure(1.0),
        );
        let mut backend = RecordingBackend::default();
        export_document(&paged, &geometry, &mut backend, Path::new("out.txt")).unwrap();

        let page_breaks = backend.ops.iter().filter(|op| *op == "page").count();
        assert_eq!(page_breaks, paged.pages.len() - 1);
        let draws = backend.ops.iter().filter(|op| op.starts_with("draw:")).count();
        assert_eq!(draws, paged.line_count());
        assert_eq!(backend.ops[0], "begin:Meeting Summary");
        assert_eq!(backend.saved_to.as_deref(), Some(Path::new("out.txt")));
    }

    #[test]
    fn backend_failure_surfaces_as_export_backend_error() {
        let paged = render(
            ArtifactKind::Summary,
            &sample_document(),
            &PageGeometry::default(),
            monospace_measure(2.0),
        );
        let mut backend = RecordingBackend {
            fail_draw: true,
            ..RecordingBackend::default()
        };
        let err = export_document(
            &paged,
            &PageGeometry::default(),
            &mut backend,
            Path::new("out.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::ExportBackend(_)));
    }
}
