//! Tabular PDF layout for customer reports.
//!
//! The document is a single continuous flow on one A4 page: rows that
//! overflow the physical boundary are clipped rather than paginated. Column
//! offsets, row height, and colors follow the report's observable contract;
//! everything is positioned in PostScript points from the top-left corner
//! and converted to the PDF coordinate space when drawn.

use printpdf::{
    BuiltinFont, Color, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon, Rgb,
};
use printpdf::path::{PaintMode, WindingOrder};

use crate::domain::entities::customer::Customer;
use crate::domain::value_objects::period::ReportPeriod;
use crate::errors::DomainError;

// A4 geometry in PostScript points
const PAGE_WIDTH_PT: f64 = 595.28;
const PAGE_HEIGHT_PT: f64 = 841.89;
const MARGIN_PT: f64 = 30.0;

const TITLE_SIZE: f64 = 20.0;
const BODY_SIZE: f64 = 12.0;
const ROW_HEIGHT_PT: f64 = 20.0;

// Fixed column bands: header label and horizontal offset
const COLUMNS: [(&str, f64); 6] = [
    ("No", 30.0),
    ("Name", 70.0),
    ("Email", 190.0),
    ("Phone", 340.0),
    ("Pincode", 420.0),
    ("Address", 480.0),
];
const TABLE_LEFT_PT: f64 = 30.0;
const TABLE_RIGHT_PT: f64 = 550.0;

// Average Helvetica glyph width relative to the font size; close enough
// for centering short lines
const GLYPH_WIDTH_RATIO: f64 = 0.5;

fn title_color() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.478, 1.0, None))
}

fn text_color() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn band_color() -> Color {
    Color::Rgb(Rgb::new(0.949, 0.949, 0.949, None))
}

fn mm(pt: f64) -> Mm {
    Mm((pt * 25.4 / 72.0) as f32)
}

/// Convert a distance from the top edge into the PDF's bottom-left origin
fn from_top(pt: f64) -> Mm {
    mm(PAGE_HEIGHT_PT - pt)
}

fn centered_x(text: &str, font_size: f64) -> Mm {
    let width = text.chars().count() as f64 * font_size * GLYPH_WIDTH_RATIO;
    mm(((PAGE_WIDTH_PT - width) / 2.0).max(MARGIN_PT))
}

fn render_failure(error: printpdf::Error) -> DomainError {
    DomainError::Internal {
        message: format!("PDF rendering failed: {}", error),
    }
}

/// Title line of a report, with the period word capitalized
pub fn title_line(period: ReportPeriod) -> String {
    format!("Customer {} Report", period.title_word())
}

/// Summary line under the title carrying the matched customer count
pub fn summary_line(total: usize) -> String {
    format!("Total Customers: {}", total)
}

fn shade_band(layer: &PdfLayerReference, top_pt: f64) {
    let left = mm(TABLE_LEFT_PT);
    let right = mm(TABLE_RIGHT_PT);
    let top = from_top(top_pt);
    let bottom = from_top(top_pt + ROW_HEIGHT_PT);

    layer.add_polygon(Polygon {
        rings: vec![vec![
            (Point::new(left, top), false),
            (Point::new(right, top), false),
            (Point::new(right, bottom), false),
            (Point::new(left, bottom), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
}

/// Render the report document and return the PDF bytes
///
/// Layout, top to bottom: centered title in the period color, centered
/// total count, fixed-offset column headers over a horizontal rule, then
/// one row per customer in the given order. Every even row (0-based) gets
/// a light band painted behind the text.
pub fn render(period: ReportPeriod, customers: &[Customer]) -> Result<Vec<u8>, DomainError> {
    let (doc, page, layer) = PdfDocument::new(
        title_line(period),
        mm(PAGE_WIDTH_PT),
        mm(PAGE_HEIGHT_PT),
        "report",
    );
    let layer = doc.get_page(page).get_layer(layer);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_failure)?;

    let mut cursor = MARGIN_PT + TITLE_SIZE;

    // Title, centered, in the period color
    let title = title_line(period);
    layer.set_fill_color(title_color());
    layer.use_text(
        title.as_str(),
        TITLE_SIZE as f32,
        centered_x(&title, TITLE_SIZE),
        from_top(cursor),
        &font,
    );
    cursor += 2.0 * ROW_HEIGHT_PT;

    // Total matched customers, centered
    let summary = summary_line(customers.len());
    layer.set_fill_color(text_color());
    layer.use_text(
        summary.as_str(),
        BODY_SIZE as f32,
        centered_x(&summary, BODY_SIZE),
        from_top(cursor),
        &font,
    );
    cursor += 2.0 * ROW_HEIGHT_PT;

    // Column headers over a horizontal rule
    for (label, x) in COLUMNS {
        layer.use_text(label, BODY_SIZE as f32, mm(x), from_top(cursor), &font);
    }
    cursor += 8.0;
    layer.set_outline_color(text_color());
    layer.set_outline_thickness(1.0);
    layer.add_line(Line {
        points: vec![
            (Point::new(mm(TABLE_LEFT_PT), from_top(cursor)), false),
            (Point::new(mm(TABLE_RIGHT_PT), from_top(cursor)), false),
        ],
        is_closed: false,
    });
    cursor += ROW_HEIGHT_PT;

    // One row per customer, in selection order
    for (index, customer) in customers.iter().enumerate() {
        if index % 2 == 0 {
            layer.set_fill_color(band_color());
            shade_band(&layer, cursor - BODY_SIZE - 2.0);
            layer.set_fill_color(text_color());
        }

        let number = (index + 1).to_string();
        let cells = [
            number.as_str(),
            customer.name.as_str(),
            customer.email.as_str(),
            customer.phone.as_str(),
            customer.pincode.as_str(),
            customer.address.as_deref().unwrap_or(""),
        ];
        for ((_, x), cell) in COLUMNS.iter().zip(cells) {
            layer.use_text(cell, BODY_SIZE as f32, mm(*x), from_top(cursor), &font);
        }
        cursor += ROW_HEIGHT_PT;
    }

    doc.save_to_bytes().map_err(render_failure)
}
