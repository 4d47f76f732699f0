//! Delimited-text export of the full stock snapshot.
//!
//! Format contract: `;`-separated fields, UTF-8 with byte-order mark, one
//! row per record, no quoting. Values must not themselves contain `;`
//! (caller contract — the catalog forbids it).

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use crate::errors::ServiceError;
use crate::models::stock_record::StockRecord;
use crate::services::classifier;

const BOM: &[u8] = b"\xEF\xBB\xBF";

const HEADER: [&str; 9] = [
    "PRODUCT",
    "CODE",
    "STORE",
    "LOCATION",
    "QUANTITY",
    "EXPIRATION",
    "BATCH",
    "STATUS_TEXT",
    "DAYS_REMAINING",
];

/// Date format used in the export body (dd/mm/yyyy).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Serializes the unfiltered snapshot using stock-list status labels.
pub fn export_stock(
    records: &[StockRecord],
    reference_date: NaiveDate,
) -> Result<String, ServiceError> {
    let mut buffer = Vec::with_capacity(BOM.len() + records.len() * 64);
    buffer.extend_from_slice(BOM);

    {
        let mut writer = WriterBuilder::new()
            .delimiter(b';')
            .quote_style(QuoteStyle::Never)
            .from_writer(&mut buffer);

        writer.write_record(HEADER)?;

        for record in records {
            let days = record.days_remaining(reference_date);
            writer.write_record([
                record.product_description.clone(),
                record.product_code.clone().unwrap_or_default(),
                record.store_name.clone(),
                record.location_name.clone().unwrap_or_default(),
                record.quantity.to_string(),
                record.expiration_date.format(DATE_FORMAT).to_string(),
                record.batch_code.clone().unwrap_or_default(),
                classifier::expiry_label(days),
                days.to_string(),
            ])?;
        }

        writer
            .flush()
            .map_err(|e| ServiceError::ExportError(e.to_string()))?;
    }

    String::from_utf8(buffer).map_err(|e| ServiceError::ExportError(e.to_string()))
}

/// Writes the export to a file.
pub fn export_stock_to_path(
    records: &[StockRecord],
    reference_date: NaiveDate,
    path: &Path,
) -> Result<(), ServiceError> {
    let contents = export_stock(records, reference_date)?;
    fs::write(path, contents).map_err(|e| ServiceError::ExportError(e.to_string()))?;
    info!(rows = records.len(), path = %path.display(), "stock export written");
    Ok(())
}
