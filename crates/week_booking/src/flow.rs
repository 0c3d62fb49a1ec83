use jiff::civil::Date;

use crate::catalog::PlanOption;
use crate::dialog::{DatePickerDialog, DialogOutcome};
use crate::selection::DateSelection;

/// What the footer shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterInfo {
    pub price: String,
    pub days: String,
}

impl Default for FooterInfo {
    fn default() -> Self {
        Self {
            price: "$0".to_owned(),
            days: "0 days".to_owned(),
        }
    }
}

/// What the summary card shows for the selected plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanSummary {
    pub label: String,
    pub week_count: u32,
    pub total_days: u32,
}

/// A plan together with a confirmed start date: the result of the whole page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Booking {
    pub plan: PlanOption,
    pub start_date: Date,
}

/// State of the booking page: which plan is chosen, the confirmed start date,
/// and the start-date dialog while it is open.
#[derive(Clone, Debug)]
pub struct WeekSelectorFlow {
    catalog: Vec<PlanOption>,
    default_date: DateSelection,

    selected_plan: Option<u32>,
    start_date: Option<Date>,
    date_dialog: Option<DatePickerDialog>,
}

impl WeekSelectorFlow {
    /// `default_date` is what the date picker shows until a start date is confirmed.
    pub fn new(catalog: Vec<PlanOption>, default_date: DateSelection) -> Self {
        Self {
            catalog,
            default_date,
            selected_plan: None,
            start_date: None,
            date_dialog: None,
        }
    }

    pub fn from_config(config: &crate::BookingConfig) -> Self {
        Self::new(config.catalog.clone(), config.default_date)
    }

    pub fn catalog(&self) -> &[PlanOption] {
        &self.catalog
    }

    // ------------------------------------------------------------------------
    // Plan:

    /// Selects the plan with the given id. Returns `false` (and changes nothing)
    /// if there is no such plan.
    pub fn select_plan(&mut self, id: u32) -> bool {
        if self.catalog.iter().any(|plan| plan.id == id) {
            if self.selected_plan != Some(id) {
                log::debug!("Selected plan {id}");
            }
            self.selected_plan = Some(id);
            true
        } else {
            log::debug!("Ignoring unknown plan id {id}");
            false
        }
    }

    pub fn selected_plan(&self) -> Option<&PlanOption> {
        let id = self.selected_plan?;
        self.catalog.iter().find(|plan| plan.id == id)
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected_plan == Some(id)
    }

    /// Back to nothing chosen: no plan, no start date, no dialog.
    pub fn clear_plan(&mut self) {
        self.selected_plan = None;
        self.start_date = None;
        self.date_dialog = None;
    }

    pub fn plan_summary(&self) -> Option<PlanSummary> {
        self.selected_plan().map(|plan| PlanSummary {
            label: plan.label.clone(),
            week_count: plan.week_count,
            total_days: plan.total_days(),
        })
    }

    pub fn footer(&self) -> FooterInfo {
        self.selected_plan()
            .map(|plan| FooterInfo {
                price: plan.price.clone(),
                days: plan.day_count.clone(),
            })
            .unwrap_or_default()
    }

    // ------------------------------------------------------------------------
    // Start date:

    pub fn start_date(&self) -> Option<Date> {
        self.start_date
    }

    /// E.g. "March 15, 2025", or a prompt if no date has been confirmed.
    pub fn start_date_label(&self) -> String {
        self.start_date.map_or_else(
            || "Select start date".to_owned(),
            |date| date.strftime("%B %-d, %Y").to_string(),
        )
    }

    pub fn is_dialog_open(&self) -> bool {
        self.date_dialog.is_some()
    }

    pub fn date_dialog(&self) -> Option<&DatePickerDialog> {
        self.date_dialog.as_ref()
    }

    pub fn date_dialog_mut(&mut self) -> Option<&mut DatePickerDialog> {
        self.date_dialog.as_mut()
    }

    /// Opens the start-date dialog on the last confirmed date, or on the default date.
    ///
    /// Only possible once a plan is selected. Returns whether the dialog is open.
    pub fn open_date_dialog(&mut self) -> bool {
        if self.selected_plan.is_none() {
            log::debug!("No plan selected, not opening the date picker");
            return false;
        }
        if self.date_dialog.is_none() {
            let initial = self
                .start_date
                .map_or(self.default_date, DateSelection::from_date);
            self.date_dialog = Some(DatePickerDialog::open(initial));
        }
        true
    }

    /// Confirms the open dialog and stores its date as the start date.
    ///
    /// Returns the new start date, or `None` if no dialog was open.
    pub fn confirm_date_dialog(&mut self) -> Option<Date> {
        let outcome = self.date_dialog.take()?.confirm();
        self.finish_dialog(outcome);
        self.start_date
    }

    /// Closes the open dialog, keeping the previous start date.
    pub fn cancel_date_dialog(&mut self) {
        if let Some(dialog) = self.date_dialog.take() {
            self.finish_dialog(dialog.cancel());
        }
    }

    /// Applies how a dialog ended. The dialog is closed either way.
    pub fn finish_dialog(&mut self, outcome: DialogOutcome) {
        self.date_dialog = None;
        match outcome {
            DialogOutcome::Confirmed(selection) => match selection.to_date() {
                Ok(date) => {
                    log::info!("Start date set to {date}");
                    self.start_date = Some(date);
                }
                Err(err) => {
                    log::warn!("Ignoring start date {selection}: {err}");
                }
            },
            DialogOutcome::Cancelled => {}
        }
    }

    // ------------------------------------------------------------------------

    /// The chosen plan and start date, once both are known.
    pub fn booking(&self) -> Option<Booking> {
        Some(Booking {
            plan: self.selected_plan()?.clone(),
            start_date: self.start_date?,
        })
    }
}

impl Default for WeekSelectorFlow {
    fn default() -> Self {
        Self::from_config(&crate::BookingConfig::default())
    }
}
