//! Logic behind a week-based booking page: choose a plan, then pick a start date.
//!
//! Nothing in here draws anything. The front end (see the `week_booking_app` crate)
//! reads state from a [`WeekSelectorFlow`] and feeds user picks back into it.
//!
//! ```
//! use week_booking::{Month, WeekSelectorFlow};
//!
//! let mut flow = WeekSelectorFlow::default();
//! flow.select_plan(2);
//! flow.open_date_dialog();
//! if let Some(dialog) = flow.date_dialog_mut() {
//!     dialog.pick_month(Month::March);
//!     dialog.pick_day(15);
//! }
//! flow.confirm_date_dialog();
//! assert_eq!(flow.start_date_label(), "March 15, 2025");
//! ```

#![forbid(unsafe_code)]

pub mod calendar;
pub mod catalog;
mod config;
pub mod dialog;
mod error;
pub mod flow;
pub mod scroll;
pub mod selection;

pub use calendar::{Month, days_in_month};
pub use catalog::PlanOption;
pub use config::BookingConfig;
pub use dialog::{DatePickerDialog, DialogOutcome};
pub use error::{Error, Result};
pub use flow::{Booking, FooterInfo, PlanSummary, WeekSelectorFlow};
pub use scroll::WheelLayout;
pub use selection::DateSelection;

#[test]
fn out_of_range_year_is_a_date_error() {
    let selection = DateSelection::new(1, Month::January, 10_000);
    assert!(matches!(selection.to_date(), Err(Error::Date(_))));
}
