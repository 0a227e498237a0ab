// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flowing single-column page layout on top of lopdf
//!
//! Positions are in millimetres from the top-left corner of an A4 page.
//! Text is laid out as full-width cells stacked downward; a cell that would
//! cross the bottom margin starts a new page. Every page gets the running
//! header title and a centered `Page N` footer.

use crate::error::Result;
use crate::fonts::{encode_win_ansi, FontStyle};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, StringFormat};

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
pub const MARGIN: f64 = 10.0;
/// Cells ending below this distance from the bottom edge trigger a break
pub const BREAK_MARGIN: f64 = 20.0;
/// Default cell height
pub const LINE_HEIGHT: f64 = 10.0;

/// Padding between a left-aligned cell border and its text
const CELL_PADDING: f64 = 1.0;
const PT_PER_MM: f64 = 72.0 / 25.4;
const FOOTER_OFFSET: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

/// Page-by-page text layout, finished into PDF bytes with [`PageLayout::finish`]
pub struct PageLayout {
    title: String,
    pages: Vec<Vec<Operation>>,
    x: f64,
    y: f64,
    font: FontStyle,
    size: f64,
}

impl PageLayout {
    /// Empty document whose pages carry `title` as header
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pages: Vec::new(),
            x: MARGIN,
            y: MARGIN,
            font: FontStyle::Regular,
            size: 10.0,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Vertical cursor position in mm from the top edge
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_font(&mut self, font: FontStyle, size: f64) {
        self.font = font;
        self.size = size;
    }

    /// Close the current page and start a new one with its header drawn
    pub fn add_page(&mut self) {
        let (font, size) = (self.font, self.size);
        if !self.pages.is_empty() {
            self.footer();
        }
        self.pages.push(Vec::new());
        self.x = MARGIN;
        self.y = MARGIN;

        self.header();
        self.set_font(font, size);
    }

    /// Move to the start of the next line, `h` mm down
    pub fn ln(&mut self, h: f64) {
        self.x = MARGIN;
        self.y += h;
    }

    /// Full-width text line followed by a line break
    pub fn line(&mut self, text: &str) {
        self.cell(text, LINE_HEIGHT, Align::Left, true);
    }

    /// Text cell spanning to the right margin. Breaks the page first when the
    /// cell would end inside the bottom margin.
    pub fn cell(&mut self, text: &str, h: f64, align: Align, line_break: bool) {
        if self.pages.is_empty() {
            self.add_page();
        }
        if self.y + h > PAGE_HEIGHT - BREAK_MARGIN {
            let x = self.x;
            self.add_page();
            self.x = x;
        }

        self.place_text(text, h, align);
        if line_break {
            self.ln(h);
        } else {
            self.x = PAGE_WIDTH - MARGIN;
        }
    }

    fn header(&mut self) {
        self.set_font(FontStyle::Bold, 15.0);
        let title = self.title.clone();
        self.place_text(&title, LINE_HEIGHT, Align::Center);
        self.ln(LINE_HEIGHT);
        self.ln(10.0);
    }

    fn footer(&mut self) {
        self.y = PAGE_HEIGHT - FOOTER_OFFSET;
        self.x = MARGIN;
        self.set_font(FontStyle::Italic, 8.0);
        let label = format!("Page {}", self.pages.len());
        self.place_text(&label, LINE_HEIGHT, Align::Center);
    }

    fn place_text(&mut self, text: &str, h: f64, align: Align) {
        let width = PAGE_WIDTH - MARGIN - self.x;
        let text_width = self.font.text_width(text, self.size) / PT_PER_MM;
        let dx = match align {
            Align::Left => CELL_PADDING,
            Align::Center => (width - text_width) / 2.0,
        };
        // Baseline sits slightly below the vertical center of the cell
        let baseline = self.y + 0.5 * h + 0.3 * self.size / PT_PER_MM;

        let Some(page) = self.pages.last_mut() else {
            return;
        };
        page.push(Operation::new("BT", vec![]));
        page.push(Operation::new(
            "Tf",
            vec![self.font.resource_name().into(), real(self.size)],
        ));
        page.push(Operation::new(
            "Td",
            vec![
                real((self.x + dx) * PT_PER_MM),
                real((PAGE_HEIGHT - baseline) * PT_PER_MM),
            ],
        ));
        page.push(Operation::new(
            "Tj",
            vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
        ));
        page.push(Operation::new("ET", vec![]));
    }

    /// Draw the last footer and serialize the document
    pub fn finish(mut self) -> Result<Vec<u8>> {
        if self.pages.is_empty() {
            self.add_page();
        }
        self.footer();

        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for style in FontStyle::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => style.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(style.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let content_id = doc.add_object(lopdf::Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                real(PAGE_WIDTH * PT_PER_MM),
                real(PAGE_HEIGHT * PT_PER_MM),
            ],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(self.title.as_str()),
            "Producer" => Object::string_literal(concat!("lux-lite ", env!("CARGO_PKG_VERSION"))),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        tracing::debug!(pages = count, bytes = buffer.len(), "Wrote PDF");
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|window| window == needle.as_bytes())
    }

    #[test]
    fn test_header_moves_cursor() {
        let mut layout = PageLayout::new("Title");
        layout.add_page();
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.y(), 30.0);

        layout.line("first");
        assert_eq!(layout.y(), 40.0);
    }

    #[test]
    fn test_automatic_page_break() {
        let mut layout = PageLayout::new("Title");
        layout.add_page();
        // 30 mm header, 10 mm lines, break trigger at 277 mm: 24 lines fit
        for i in 0..24 {
            layout.line(&format!("line {i}"));
        }
        assert_eq!(layout.page_count(), 1);
        layout.line("overflow");
        assert_eq!(layout.page_count(), 2);
        assert_eq!(layout.y(), 40.0);
    }

    #[test]
    fn test_finish_writes_pdf() {
        let mut layout = PageLayout::new("Room Report");
        layout.add_page();
        layout.line("Hello (world)");
        layout.add_page();
        layout.line("Second");
        let bytes = layout.finish().unwrap();

        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(contains(&bytes, "Helvetica-Bold"));
        assert!(contains(&bytes, "(Page 1)"));
        assert!(contains(&bytes, "(Page 2)"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_empty_layout_still_has_a_page() {
        let bytes = PageLayout::new("Empty").finish().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
