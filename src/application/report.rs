//! Report Use Case
//!
//! Reads the whole history, keeps the records matching the filter, and shows
//! each one with freshly computed pay followed by the totals.

use tracing::{debug, info};

use crate::domain::ports::RecordStore;
use crate::domain::services::RunningTotals;
use crate::domain::value_objects::ReportFilter;
use crate::error::PayrollResult;
use crate::presentation::views::{
    render_notice, render_pay_stub, render_report_header, render_report_totals, NO_DATA_MESSAGE,
    NO_MATCH_MESSAGE,
};
use crate::presentation::{Console, UiContext};

/// Result of one report run
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// The history file does not exist yet
    NoData,
    Completed {
        totals: RunningTotals,
        /// Stored lines that could not be read back
        skipped: usize,
    },
}

impl ReportOutcome {
    pub fn totals(&self) -> Option<&RunningTotals> {
        match self {
            ReportOutcome::NoData => None,
            ReportOutcome::Completed { totals, .. } => Some(totals),
        }
    }
}

pub struct ReportUseCase<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    ui: UiContext,
}

impl<'a, S: RecordStore + ?Sized> ReportUseCase<'a, S> {
    pub fn new(store: &'a S, ui: UiContext) -> Self {
        Self { store, ui }
    }

    pub fn execute(
        &self,
        console: &mut dyn Console,
        filter: ReportFilter,
    ) -> PayrollResult<ReportOutcome> {
        let color = self.ui.color;
        console.emit("\n")?;
        console.emit(&render_report_header(color))?;

        let Some(stored) = self.store.load()? else {
            console.emit(&render_notice(NO_DATA_MESSAGE, color))?;
            return Ok(ReportOutcome::NoData);
        };

        let mut totals = RunningTotals::default();
        for record in stored
            .records
            .iter()
            .filter(|record| filter.matches(&record.from))
        {
            let pay = record.pay();
            console.emit("\n")?;
            console.emit(&render_pay_stub(record, &pay, color))?;
            totals.add(record.hours, &pay);
        }

        debug!(
            read = stored.records.len(),
            matched = totals.employee_count,
            skipped = stored.skipped,
            "report scan finished"
        );

        if totals.is_empty() {
            console.emit(&render_notice(NO_MATCH_MESSAGE, color))?;
        }

        console.emit("\n")?;
        console.emit(&render_report_totals(&totals, color))?;

        info!(%filter, matched = totals.employee_count, "report complete");
        Ok(ReportOutcome::Completed {
            totals,
            skipped: stored.skipped,
        })
    }
}
