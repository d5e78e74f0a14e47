//! Plain-text render backend.
//!
//! Stands in for the PDF/print backend: a character device that ignores
//! coordinates and separates pages with form feeds, so pagination remains
//! visible in the output file.

use std::path::Path;

use minutely_core::{AppError, RenderBackend};

/// Render backend writing a titled, form-feed paginated text file.
#[derive(Debug, Default)]
pub struct TextFileBackend {
    title: String,
    pages: Vec<Vec<String>>,
}

impl TextFileBackend {
    fn current_page(&mut self) -> Result<&mut Vec<String>, AppError> {
        self.pages
            .last_mut()
            .ok_or_else(|| AppError::ExportBackend("document not started".to_string()))
    }
}

impl RenderBackend for TextFileBackend {
    fn begin_document(&mut self, title: &str) -> Result<(), AppError> {
        self.title = title.to_string();
        self.pages = vec![Vec::new()];
        Ok(())
    }

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32) -> Result<(), AppError> {
        self.current_page()?.push(text.to_string());
        Ok(())
    }

    fn add_page(&mut self) -> Result<(), AppError> {
        if self.pages.is_empty() {
            return Err(AppError::ExportBackend("document not started".to_string()));
        }
        self.pages.push(Vec::new());
        Ok(())
    }

    fn finish(&mut self, path: &Path) -> Result<(), AppError> {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.len()));
        out.push_str("\n\n");
        for (index, page) in self.pages.iter().enumerate() {
            if index > 0 {
                out.push_str("\u{c}\n");
            }
            for line in page {
                out.push_str(line);
                out.push('\n');
            }
        }
        std::fs::write(path, out).map_err(|err| AppError::ExportBackend(err.to_string()))
    }
}
