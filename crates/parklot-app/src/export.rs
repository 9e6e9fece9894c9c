//! CSV export of the receipt ledger

use std::io::Write;
use std::path::Path;

use parklot_domain::ParkingReceipt;
use parklot_types::Result;
use serde::Serialize;

const HEADER: [&str; 8] = [
    "identifier",
    "category",
    "owner",
    "slot",
    "arrival",
    "departure",
    "billed_hours",
    "fee",
];

#[derive(Debug, Serialize)]
struct ReceiptRow<'a> {
    identifier: &'a str,
    category: &'static str,
    owner: &'a str,
    slot: usize,
    arrival: String,
    departure: String,
    billed_hours: u64,
    fee: f64,
}

impl<'a> From<&'a ParkingReceipt> for ReceiptRow<'a> {
    fn from(receipt: &'a ParkingReceipt) -> Self {
        let record = &receipt.record;
        Self {
            identifier: record.identifier(),
            category: record.category().label(),
            owner: record.owner(),
            slot: record.slot(),
            arrival: record.arrival().to_rfc3339(),
            departure: receipt.departure.to_rfc3339(),
            billed_hours: receipt.billed_hours,
            fee: receipt.fee,
        }
    }
}

/// Write receipts as CSV. The header row is written even for an empty ledger.
pub fn write_receipts<W: Write>(writer: W, receipts: &[ParkingReceipt]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for receipt in receipts {
        csv_writer.serialize(ReceiptRow::from(receipt))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export receipts to a CSV file
pub fn export_receipts(path: &Path, receipts: &[ParkingReceipt]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    write_receipts(file, receipts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_ledger_has_header() {
        let mut buf = Vec::new();
        write_receipts(&mut buf, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "identifier,category,owner,slot,arrival,departure,billed_hours,fee\n"
        );
    }

    #[test]
    fn test_export_empty_ledger_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        export_receipts(&path, &[]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("identifier,category,owner"));
        assert_eq!(text.lines().count(), 1);
    }
}
