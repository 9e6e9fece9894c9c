//! Output formatting module

use parklot_app::{EventOutcome, QuickParked, SessionReport};
use parklot_domain::service::{format_receipt, generate_status_report};
use parklot_domain::{LotAllocator, LotStatus, OccupancySnapshot, VehicleRecord};
use parklot_types::{OutputFormat, Result, VehicleCategory};
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct StatusView<'a> {
    status: LotStatus,
    snapshot: OccupancySnapshot,
    total_revenue: f64,
    total_admissions: u64,
    vehicles: Vec<&'a VehicleRecord>,
}

#[derive(Serialize)]
struct RateView {
    category: VehicleCategory,
    label: &'static str,
    hourly_rate: f64,
}

pub fn render_status(output_format: OutputFormat, lot: &LotAllocator, currency: &str) -> Result<String> {
    if output_format == OutputFormat::Json {
        let view = StatusView {
            status: lot.status(),
            snapshot: lot.query_state(),
            total_revenue: lot.total_revenue(),
            total_admissions: lot.total_admissions(),
            vehicles: lot.vehicles().collect(),
        };
        Ok(serde_json::to_string_pretty(&view)? + "\n")
    } else {
        Ok(generate_status_report(lot, currency))
    }
}

pub fn render_rates(output_format: OutputFormat, currency: &str) -> Result<String> {
    if output_format == OutputFormat::Json {
        let rates: Vec<RateView> = VehicleCategory::ALL
            .into_iter()
            .map(|category| RateView {
                category,
                label: category.label(),
                hourly_rate: category.hourly_rate(),
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rates)? + "\n");
    }

    let mut out = String::new();
    out.push_str("Hourly Rates\n");
    out.push_str("============\n");
    for category in VehicleCategory::ALL {
        out.push_str(&format!(
            "{:<8} {}{:.2}/h\n",
            category.label(),
            currency,
            category.hourly_rate()
        ));
    }
    out.push_str("\nStays are billed per started hour, minimum one hour.\n");
    Ok(out)
}

pub fn render_quick_parked(output_format: OutputFormat, parked: &[QuickParked]) -> Result<String> {
    if output_format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(parked)? + "\n");
    }
    Ok(parked
        .iter()
        .map(|p| format!("{} {} ({}) parked in Slot {}\n", p.category, p.id, p.owner, p.slot))
        .collect())
}

/// One replayed event in table mode
pub fn render_outcome(step: usize, outcome: &EventOutcome, currency: &str) -> String {
    match outcome {
        EventOutcome::Admitted { id, category, slot, at } => format!(
            "[{:>3}] {} {} parked in Slot {} at {}\n",
            step,
            category,
            id,
            slot,
            at.format("%H:%M:%S")
        ),
        EventOutcome::Released { receipt } => format!(
            "[{:>3}] Vehicle {} removed, fee {}{:.2}\n{}\n",
            step,
            receipt.record.identifier(),
            currency,
            receipt.fee,
            format_receipt(receipt, currency)
        ),
        EventOutcome::Found { record } => format!(
            "[{:>3}] Found: {} ({}) in Slot {}, owner {}\n",
            step,
            record.identifier(),
            record.category(),
            record.slot(),
            record.owner()
        ),
        EventOutcome::Status { snapshot } => format!(
            "[{:>3}] Status {}: {:.1}% occupied, free slots {:?}\n",
            step,
            snapshot.status(),
            snapshot.occupancy_rate,
            snapshot.available_slots
        ),
        EventOutcome::Reset => format!("[{:>3}] Lot reset\n", step),
        EventOutcome::Cleared { vehicles } => format!(
            "[{:>3}] Emergency clear: {} vehicles removed, fees not collected\n",
            step,
            vehicles.len()
        ),
        EventOutcome::Failed { action, error } => {
            format!("[{:>3}] {} failed: {}\n", step, action, error)
        }
    }
}

pub fn render_report_summary(report: &SessionReport, currency: &str) -> String {
    let failures = report.outcomes.iter().filter(|o| o.is_failure()).count();
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "\nSession Summary");
    let _ = writeln!(out, "===============");
    let _ = writeln!(out, "Events:           {}", report.outcomes.len());
    let _ = writeln!(out, "Failed events:    {}", failures);
    let _ = writeln!(out, "Admissions:       {}", report.total_admissions);
    let _ = writeln!(out, "Receipts issued:  {}", report.receipts.len());
    let _ = writeln!(out, "Revenue:          {}{:.2}", currency, report.total_revenue);
    let _ = writeln!(
        out,
        "Final status:     {} ({:.1}% occupied)",
        report.final_state.status(),
        report.final_state.occupancy_rate
    );
    out
}
