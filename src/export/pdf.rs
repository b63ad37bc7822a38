use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::export::text::{to_latin1_lossy, wrap};
use crate::export::ExportError;
use crate::summary::TripSummary;

pub const DOCUMENT_TITLE: &str = "ZilTrips - Travel Summary";

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_TOP: f32 = 10.0;
const MARGIN_BOTTOM: f32 = 10.0;
const CELL_WIDTH: f32 = 180.0;

const TITLE_SIZE: f32 = 16.0;
const TITLE_LINE_HEIGHT: f32 = 10.0;
const BODY_SIZE: f32 = 12.0;
const BODY_LINE_HEIGHT: f32 = 8.0;
const SECTION_GAP: f32 = 4.0;

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;
const MM_PER_PT: f32 = 0.3528;

/// Renders the two-block travel document: title, then the summary body.
pub fn render_pdf(summary: &TripSummary) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Summary",
    );
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Render(e.to_string()))?;

    {
        let layer = doc.get_page(page).get_layer(layer);
        let mut cursor = PageCursor::new(&doc, layer);

        cursor.multi_cell(&to_latin1_lossy(DOCUMENT_TITLE), &bold, TITLE_SIZE, TITLE_LINE_HEIGHT);
        cursor.skip(SECTION_GAP);
        cursor.multi_cell(
            &to_latin1_lossy(summary.text()),
            &regular,
            BODY_SIZE,
            BODY_LINE_HEIGHT,
        );
    }

    doc.save_to_bytes()
        .map_err(|e| ExportError::Render(e.to_string()))
}

/// Tracks the vertical write position and opens new pages on overflow.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
    pages: usize,
}

impl<'a> PageCursor<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: PAGE_HEIGHT - MARGIN_TOP,
            pages: 1,
        }
    }

    fn multi_cell(&mut self, text: &str, font: &IndirectFontRef, size: f32, line_height: f32) {
        for line in wrap(text, chars_per_line(size)) {
            if self.y - line_height < MARGIN_BOTTOM {
                self.new_page();
            }
            self.y -= line_height;
            if !line.is_empty() {
                let baseline = self.y + (line_height - size * MM_PER_PT) / 2.0;
                self.layer
                    .use_text(line, size, Mm(MARGIN_LEFT), Mm(baseline), font);
            }
        }
    }

    fn skip(&mut self, height: f32) {
        self.y -= height;
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Summary {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN_TOP;
        tracing::debug!(page = self.pages, "PDF body overflowed onto a new page");
    }
}

fn chars_per_line(size: f32) -> usize {
    (CELL_WIDTH / (size * MM_PER_PT * AVG_GLYPH_EM)).floor() as usize
}
