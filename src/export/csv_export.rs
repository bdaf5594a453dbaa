use crate::errors::{AppError, AppResult};
use crate::export::model::{VisitExport, get_headers};
use crate::models::Visit;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Render visits as CSV text.
///
/// The header is plain; every data field is double-quoted with inner quotes
/// doubled. Records end with `\n`.
pub fn build_csv(visits: &[Visit]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for v in visits {
        wtr.write_record(VisitExport::from(v).to_record())?;
    }

    let body = wtr
        .into_inner()
        .map_err(|e| AppError::Other(format!("CSV buffer error: {}", e.error())))?;
    let body = String::from_utf8(body)
        .map_err(|e| AppError::Other(format!("CSV encoding error: {e}")))?;

    let mut out = get_headers().join(",");
    out.push('\n');
    out.push_str(&body);
    Ok(out)
}
