//! Page-filling over wrapped lines.
//!
//! Greedy, single-pass, deterministic: a page break never reconsiders lines
//! already placed (no widow/orphan control). Pages and placements are
//! transient values computed per export request.

use serde::Serialize;

/// Fixed width/height/margin/line-height parameters governing pagination.
///
/// Defaults match an A4 sheet in millimetres with the unified export
/// geometry (one margin, one line height) used for every artifact kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub line_height: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 15.0,
            line_height: 6.0,
        }
    }
}

impl PageGeometry {
    /// Usable text width: full page width minus both margins.
    pub fn max_text_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }
}

/// One line placed on a page at a vertical offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePlacement {
    pub text: String,
    pub y: f32,
}

/// Ordered line placements bounded by the page height.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub lines: Vec<LinePlacement>,
}

/// A titled, paginated rendering of one artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedDocument {
    pub title: String,
    pub pages: Vec<Page>,
}

impl PagedDocument {
    /// Total number of line placements across all pages.
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|page| page.lines.len()).sum()
    }
}

/// Lay out `lines` onto fixed-height pages.
///
/// A running vertical cursor starts at `margin`; when it exceeds
/// `page_height - margin` the current page closes and a new one opens with
/// the cursor reset. Each line is placed at the cursor, which then advances
/// by `line_height`. The final open page is always included, even when it
/// holds zero or one lines.
///
/// # Returns
/// The pages in order; every input line appears in exactly one placement.
pub fn paginate(lines: Vec<String>, geometry: &PageGeometry) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut current = Page::default();
    let mut cursor = geometry.margin;

    for text in lines {
        if cursor > geometry.page_height - geometry.margin {
            pages.push(std::mem::take(&mut current));
            cursor = geometry.margin;
        }
        current.lines.push(LinePlacement { text, y: cursor });
        cursor += geometry.line_height;
    }
    pages.push(current);
    pages
}

#[cfg(test)]
mod tests {
    use super::{paginate, PageGeometry};

    fn short_geometry() -> PageGeometry {
        PageGeometry {
            page_width: 100.0,
            page_height: 40.0,
            margin: 10.0,
            line_height: 5.0,
        }
    }

    fn numbered_lines(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn every_input_line_is_placed_exactly_once() {
        let geometry = short_geometry();
        for count in [0, 1, 4, 5, 6, 37] {
            let pages = paginate(numbered_lines(count), &geometry);
            let placed: usize = pages.iter().map(|p| p.lines.len()).sum();
            assert_eq!(placed, count, "count: {count}");
        }
    }

    #[test]
    fn per_page_line_count_is_bounded() {
        let geometry = short_geometry();
        let capacity = ((geometry.page_height - 2.0 * geometry.margin) / geometry.line_height)
            .floor() as usize
            + 1;
        let pages = paginate(numbered_lines(57), &geometry);
        assert!(pages.len() > 1);
        for page in &pages {
            assert!(page.lines.len() <= capacity);
        }
    }

    #[test]
    fn cursor_starts_at_margin_and_advances_by_line_height() {
        let geometry = short_geometry();
        let pages = paginate(numbered_lines(3), &geometry);
        assert_eq!(pages.len(), 1);
        let ys: Vec<f32> = pages[0].lines.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![10.0, 15.0, 20.0]);
    }

    #[test]
    fn page_break_resets_cursor_to_margin() {
        let geometry = short_geometry();
        // Capacity is 5 lines (y = 10..=30); the 6th opens a new page.
        let pages = paginate(numbered_lines(6), &geometry);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].lines.len(), 5);
        assert_eq!(pages[1].lines[0].y, geometry.margin);
        assert_eq!(pages[1].lines[0].text, "line 5");
    }

    #[test]
    fn empty_input_yields_one_empty_page() {
        let pages = paginate(Vec::new(), &short_geometry());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines.is_empty());
    }

    #[test]
    fn default_geometry_is_a4_with_unified_margins() {
        let geometry = PageGeometry::default();
        assert_eq!(geometry.max_text_width(), 180.0);
        assert_eq!(geometry.line_height, 6.0);
    }
}
