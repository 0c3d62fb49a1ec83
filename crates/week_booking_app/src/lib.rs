//! egui front end for the week booking page.
//!
//! All state lives in [`week_booking::WeekSelectorFlow`]; the widgets in here only
//! draw it and feed clicks back.

#![forbid(unsafe_code)]

mod app;
pub mod date_picker;
pub mod footer;
pub mod header;
pub mod week_selector;

pub use app::BookingApp;
pub use date_picker::{DatePicker, DatePickerAction};
pub use footer::{Footer, FooterAction};
pub use week_selector::WeekSelector;

/// Highlight color for selected entries and primary buttons.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x85, 0x2d, 0xfe);
