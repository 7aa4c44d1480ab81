//! RFC 4180 CSV with the canonical record header.

use std::io::Write;

use irah_core::models::record::EvaluationRecord;
use irah_core::schema::COLUMNS;

use crate::error::ExportError;

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn row(record: &EvaluationRecord) -> [String; 9] {
    [
        escape(&record.case_id),
        record.timestamp.to_string(),
        record.fugulin.to_string(),
        record.asg.id().to_string(),
        record.mrc.to_string(),
        record.triagem.to_string(),
        record.charlson.to_string(),
        format!("{:.2}", record.index),
        record.tier.id().to_string(),
    ]
}

/// Write the header and one line per record. Lines end with CRLF.
pub fn write_csv<W: Write>(mut writer: W, records: &[EvaluationRecord]) -> Result<(), ExportError> {
    writer.write_all(COLUMNS.join(",").as_bytes())?;
    writer.write_all(b"\r\n")?;
    for record in records {
        writer.write_all(row(record).join(",").as_bytes())?;
        writer.write_all(b"\r\n")?;
    }
    writer.flush()?;
    Ok(())
}
