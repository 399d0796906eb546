//! Entry loop: collect employees for one pay period until `End`.

use tracing::{info, warn};

use crate::domain::entities::PayRecord;
use crate::domain::ports::RecordStore;
use crate::domain::services::RunningTotals;
use crate::domain::value_objects::PayPeriod;
use crate::error::PayrollResult;
use crate::presentation::views::render_pay_stub;
use crate::presentation::{Console, UiContext};

use super::collect::{collect_employee, Entry};

/// Run the entry loop and return this run's totals.
///
/// Each accepted employee is shown, then appended to the store. A closed
/// input stream ends the loop like `End` does; a half-entered employee is
/// dropped without being stored.
pub fn run_entry<S: RecordStore + ?Sized>(
    console: &mut dyn Console,
    ui: &UiContext,
    store: &S,
    period: PayPeriod,
) -> PayrollResult<RunningTotals> {
    let mut totals = RunningTotals::default();

    loop {
        let input = match collect_employee(console, ui) {
            Ok(Entry::Employee(input)) => input,
            Ok(Entry::End) => break,
            Err(e) if e.is_input_closed() => {
                warn!("{e}; ending entry");
                break;
            }
            Err(e) => return Err(e),
        };

        let record = PayRecord::new(period, input.name, input.hours, input.rate, input.tax_rate);
        let pay = record.pay();

        console.emit("\n")?;
        console.emit(&render_pay_stub(&record, &pay, ui.color))?;
        console.emit("\n")?;

        store.append(&record)?;
        totals.add(record.hours, &pay);
    }

    info!(employees = totals.employee_count, "entry finished");
    Ok(totals)
}
