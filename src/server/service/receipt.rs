//! PDF receipts for income entries.

use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::server::{error::internal::InternalError, model::ledger::LedgerEntry};

// A5 portrait.
const PAGE_WIDTH: f32 = 148.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 15.0;
const LINE_HEIGHT: f32 = 8.0;
const VALUE_COLUMN: f32 = 60.0;

/// Renders a one-page receipt for a ledger entry.
///
/// # Arguments
/// - `issuer` - Business name printed in the "From" line
/// - `entry` - Income entry the receipt is for
/// - `issued_at` - Time printed as the generation timestamp
///
/// # Returns
/// - `Ok(Vec<u8>)` - PDF bytes
/// - `Err(InternalError::PdfRender)` - Font registration or serialisation failed
pub fn render_receipt(
    issuer: &str,
    entry: &LedgerEntry,
    issued_at: DateTime<Utc>,
) -> Result<Vec<u8>, InternalError> {
    let render_err = |reason: String| InternalError::PdfRender {
        entry_id: entry.id,
        reason,
    };

    let (doc, page, layer) = PdfDocument::new(
        format!("Receipt {}", entry.id),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Receipt".to_string(),
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| render_err(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| render_err(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT - MARGIN - 10.0;
    layer.use_text("INVOICE", 22.0, Mm(MARGIN), Mm(y), &bold);
    y -= LINE_HEIGHT * 2.0;

    let details = [
        ("From", issuer.to_string()),
        ("Bill To", entry.party.clone()),
        ("Invoice #", entry.id.to_string()),
        ("Invoice Label", entry.label.clone()),
        ("Invoice Date", entry.entry_date.format("%Y-%m-%d").to_string()),
        ("Payment Status", entry.payment_status.to_string()),
        ("Amount", format!("{:.2}", entry.amount)),
    ];
    for (label, value) in details {
        layer.use_text(label, 11.0, Mm(MARGIN), Mm(y), &bold);
        layer.use_text(value, 11.0, Mm(VALUE_COLUMN), Mm(y), &regular);
        y -= LINE_HEIGHT;
    }

    layer.use_text(
        "This is a computer-generated receipt and does not require a signature.",
        8.0,
        Mm(MARGIN),
        Mm(MARGIN + LINE_HEIGHT),
        &regular,
    );
    layer.use_text(
        format!("Generated {}", issued_at.format("%Y-%m-%d %H:%M UTC")),
        8.0,
        Mm(MARGIN),
        Mm(MARGIN),
        &regular,
    );

    drop(layer);
    doc.save_to_bytes().map_err(|e| render_err(e.to_string()))
}
