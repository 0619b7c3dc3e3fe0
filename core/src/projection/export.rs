//! CSV export of the filtered view.
//!
//! Output is byte-deterministic for a given row sequence:
//!   - header is exactly EXPORT_HEADER
//!   - dates as YYYY-MM-DD, floats via f64's shortest round-trip Display
//!   - `\n` record terminator, quoting only where csv requires it
//!   - the derived color column is never written
//!
//! ExportCache memoizes encoded bytes by an MD5 digest of the rows, so
//! re-rendering an unchanged view does not re-encode.

use std::{collections::HashMap, io::Write, sync::Arc};

use crate::{
    error::DashResult,
    projection::DATE_FORMAT,
    record::IncidentRecord,
};

pub const EXPORT_HEADER: [&str; 5] = ["Fecha", "Alcaldía", "Tipo de delito", "Latitud", "Longitud"];

/// Stream the rows as CSV into any writer.
pub fn write_csv<W: Write>(records: &[IncidentRecord], out: W) -> DashResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    writer.write_record(EXPORT_HEADER)?;
    for r in records {
        writer.write_record([
            r.date().format(DATE_FORMAT).to_string(),
            r.borough().label().to_string(),
            r.crime_type().label().to_string(),
            r.latitude().to_string(),
            r.longitude().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn to_csv_bytes(records: &[IncidentRecord]) -> DashResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(64 + records.len() * 64);
    write_csv(records, &mut buf)?;
    Ok(buf)
}

/// A ready-to-download export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime:      String,
    pub bytes:     Arc<[u8]>,
}

/// Encoded exports keyed by content digest. Entries never go stale:
/// the same rows always encode to the same bytes.
#[derive(Debug, Default)]
pub struct ExportCache {
    entries: HashMap<String, Arc<[u8]>>,
    hits:    u64,
    misses:  u64,
}

impl ExportCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_encode(&mut self, records: &[IncidentRecord]) -> DashResult<Arc<[u8]>> {
        let key = content_digest(records);
        if let Some(bytes) = self.entries.get(&key) {
            self.hits += 1;
            log::debug!("export cache hit {key} ({} bytes)", bytes.len());
            return Ok(Arc::clone(bytes));
        }
        self.misses += 1;
        let bytes: Arc<[u8]> = to_csv_bytes(records)?.into();
        log::debug!("export cache miss {key}: encoded {} rows, {} bytes", records.len(), bytes.len());
        self.entries.insert(key, Arc::clone(&bytes));
        Ok(bytes)
    }

    pub fn len(&self) -> usize   { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn hits(&self) -> u64    { self.hits }
    pub fn misses(&self) -> u64  { self.misses }
}

/// Digest over exactly the fields that reach the CSV, in row order.
fn content_digest(records: &[IncidentRecord]) -> String {
    let mut context = md5::Context::new();
    context.consume((records.len() as u64).to_le_bytes());
    for r in records {
        context.consume(r.date().format(DATE_FORMAT).to_string());
        context.consume([0u8]);
        context.consume(r.borough().label());
        context.consume([0u8]);
        context.consume(r.crime_type().label());
        context.consume([0u8]);
        context.consume(r.latitude().to_bits().to_le_bytes());
        context.consume(r.longitude().to_bits().to_le_bytes());
    }
    format!("{:x}", context.finalize())
}
