//! Text reports: receipts and lot status

use crate::model::ParkingReceipt;

use super::LotAllocator;

const TIME_FORMAT: &str = "%H:%M:%S";

/// Render a parking receipt
pub fn format_receipt(receipt: &ParkingReceipt, currency: &str) -> String {
    let record = &receipt.record;
    let mut out = String::new();
    out.push_str("==============================\n");
    out.push_str("        PARKING RECEIPT       \n");
    out.push_str("==============================\n");
    out.push_str(&format!("Vehicle ID:   {}\n", record.identifier()));
    out.push_str(&format!("Vehicle Type: {}\n", record.category()));
    out.push_str(&format!("Owner:        {}\n", record.owner()));
    out.push_str(&format!("Slot:         {}\n", record.slot()));
    out.push_str(&format!("Entry Time:   {}\n", record.arrival().format(TIME_FORMAT)));
    out.push_str(&format!("Exit Time:    {}\n", receipt.departure.format(TIME_FORMAT)));
    out.push_str(&format!(
        "Billed:       {} h x {}{:.2}\n",
        receipt.billed_hours,
        currency,
        record.category().hourly_rate()
    ));
    out.push('\n');
    out.push_str(&format!("Parking Fee:  {}{:.2}\n", currency, receipt.fee));
    out.push_str("Thank you for parking with us!\n");
    out
}

/// Render the dashboard: headline stats plus one line per slot
pub fn generate_status_report(lot: &LotAllocator, currency: &str) -> String {
    let state = lot.query_state();

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("                 Parking Lot Status               \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!("  Status:            {}\n", state.status()));
    report.push_str(&format!("  Capacity:          {}\n", state.capacity));
    report.push_str(&format!("  Occupied:          {}\n", state.occupied_slots.len()));
    report.push_str(&format!("  Available:         {}\n", state.available_slots.len()));
    report.push_str(&format!("  Occupancy rate:    {:.1}%\n", state.occupancy_rate));
    report.push_str(&format!("  Total admissions:  {}\n", lot.total_admissions()));
    report.push_str(&format!("  Revenue:           {}{:.2}\n", currency, lot.total_revenue()));
    report.push('\n');

    report.push_str(&format!(
        "{:>4}  {:<10} {:<6} {:<20} {:>8}\n",
        "Slot", "ID", "Type", "Owner", "Entry"
    ));
    report.push_str("-".repeat(52).as_str());
    report.push('\n');
    for slot in 1..=state.capacity {
        match lot.slot_status(slot) {
            Some(record) => report.push_str(&format!(
                "{:>4}  {:<10} {:<6} {:<20} {:>8}\n",
                slot,
                truncate_str(record.identifier(), 10),
                record.category().label(),
                truncate_str(record.owner(), 20),
                record.arrival().format(TIME_FORMAT)
            )),
            None => report.push_str(&format!("{:>4}  (empty)\n", slot)),
        }
    }

    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
