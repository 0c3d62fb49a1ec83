use crate::calendar::Month;
use crate::selection::DateSelection;

/// How a [`DatePickerDialog`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The user confirmed this selection.
    Confirmed(DateSelection),

    /// The user backed out. Nothing should change.
    Cancelled,
}

/// The start-date dialog: an open dialog holds a selection the user is editing,
/// and ends by being confirmed or cancelled.
///
/// Both terminal actions consume the dialog, so a closed dialog can't be picked on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatePickerDialog {
    selection: DateSelection,
}

impl DatePickerDialog {
    /// Opens the dialog showing `initial`.
    pub fn open(initial: DateSelection) -> Self {
        log::debug!("Opening date picker on {initial}");
        Self { selection: initial }
    }

    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    pub fn pick_day(&mut self, day: u8) {
        self.selection.set_day(day);
    }

    pub fn pick_month(&mut self, month: Month) {
        self.selection.set_month(month);
    }

    pub fn pick_year(&mut self, year: i16) {
        self.selection.set_year(year);
    }

    pub fn confirm(self) -> DialogOutcome {
        log::debug!("Date picker confirmed {}", self.selection);
        DialogOutcome::Confirmed(self.selection)
    }

    pub fn cancel(self) -> DialogOutcome {
        log::debug!("Date picker cancelled");
        DialogOutcome::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_hands_back_the_edited_selection() {
        let mut dialog = DatePickerDialog::open(DateSelection::default());
        dialog.pick_year(2025);
        dialog.pick_month(Month::March);
        dialog.pick_day(15);

        assert_eq!(
            dialog.confirm(),
            DialogOutcome::Confirmed(DateSelection::new(15, Month::March, 2025))
        );
    }

    #[test]
    fn cancel_carries_nothing() {
        let mut dialog = DatePickerDialog::open(DateSelection::default());
        dialog.pick_day(20);
        assert_eq!(dialog.cancel(), DialogOutcome::Cancelled);
    }

    #[test]
    fn picks_keep_the_day_valid() {
        let mut dialog = DatePickerDialog::open(DateSelection::new(31, Month::January, 2025));
        dialog.pick_month(Month::February);
        assert_eq!(dialog.selection().day(), 28);
        dialog.pick_year(2024);
        dialog.pick_day(29);
        assert_eq!(dialog.selection().day(), 29);
    }
}
