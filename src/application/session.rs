//! Session Use Case
//!
//! The whole program run: pay period, entry loop, run summary, report.

use tracing::{info, warn};

use crate::domain::ports::RecordStore;
use crate::domain::services::RunningTotals;
use crate::domain::value_objects::ReportFilter;
use crate::error::PayrollResult;
use crate::presentation::views::{render_notice, render_run_summary};
use crate::presentation::{Console, UiContext};

use super::collect::{collect_pay_period, collect_report_filter};
use super::entry::run_entry;
use super::report::{ReportOutcome, ReportUseCase};

const NO_PERIOD_MESSAGE: &str = "No pay period entered; nothing was recorded.";

/// Result of a full session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Input ended before a pay period was entered
    Abandoned,
    Completed {
        run_totals: RunningTotals,
        report: ReportOutcome,
    },
}

pub struct SessionUseCase<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    ui: UiContext,
}

impl<'a, S: RecordStore + ?Sized> SessionUseCase<'a, S> {
    pub fn new(store: &'a S, ui: UiContext) -> Self {
        Self { store, ui }
    }

    pub fn execute(&self, console: &mut dyn Console) -> PayrollResult<SessionOutcome> {
        let period = match collect_pay_period(console, &self.ui) {
            Ok(period) => period,
            Err(e) if e.is_input_closed() => {
                warn!("{e}");
                console.emit(&render_notice(NO_PERIOD_MESSAGE, self.ui.color))?;
                return Ok(SessionOutcome::Abandoned);
            }
            Err(e) => return Err(e),
        };
        info!(%period, "pay period set");

        let run_totals = run_entry(console, &self.ui, self.store, period)?;

        console.emit("\n")?;
        console.emit(&render_run_summary(&run_totals, self.ui.color))?;

        let report = self.report(console, None)?;

        Ok(SessionOutcome::Completed { run_totals, report })
    }

    /// Run the report, prompting for the filter when none is given.
    /// A closed input stream at that prompt means `All`.
    pub fn report(
        &self,
        console: &mut dyn Console,
        filter: Option<ReportFilter>,
    ) -> PayrollResult<ReportOutcome> {
        let filter = match filter {
            Some(filter) => filter,
            None => {
                console.emit("\n")?;
                match collect_report_filter(console, &self.ui) {
                    Ok(filter) => filter,
                    Err(e) if e.is_input_closed() => {
                        info!("{e}; reporting all records");
                        ReportFilter::All
                    }
                    Err(e) => return Err(e),
                }
            }
        };

        ReportUseCase::new(self.store, self.ui).execute(console, filter)
    }
}
