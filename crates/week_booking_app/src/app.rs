use week_booking::{Booking, BookingConfig, WeekSelectorFlow};

use crate::footer::{Footer, FooterAction};
use crate::header::header_ui;
use crate::week_selector::WeekSelector;

/// The whole booking page.
pub struct BookingApp {
    config: BookingConfig,
    flow: WeekSelectorFlow,

    /// The last booking the user pressed "Next" on, waiting for the host application.
    submitted: Option<Booking>,
}

impl Default for BookingApp {
    fn default() -> Self {
        Self::new(BookingConfig::default())
    }
}

impl BookingApp {
    pub fn new(config: BookingConfig) -> Self {
        let flow = WeekSelectorFlow::from_config(&config);
        Self {
            config,
            flow,
            submitted: None,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    pub fn flow(&self) -> &WeekSelectorFlow {
        &self.flow
    }

    pub fn flow_mut(&mut self) -> &mut WeekSelectorFlow {
        &mut self.flow
    }

    /// Hands over the booking submitted with "Next", if any.
    pub fn take_submitted(&mut self) -> Option<Booking> {
        self.submitted.take()
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        egui::Panel::top("header").show_inside(ui, header_ui);

        let footer = self.flow.footer();
        let footer_action = egui::Panel::bottom("footer")
            .show_inside(ui, |ui| Footer::new(&footer).ui(ui))
            .inner;

        egui::CentralPanel::default().show_inside(ui, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| WeekSelector::new(&mut self.flow, &self.config).ui(ui));
        });

        match footer_action {
            Some(FooterAction::Back) => {
                log::debug!("Back: clearing plan selection");
                self.flow.clear_plan();
            }
            Some(FooterAction::Next) => self.submit(),
            None => {}
        }
    }

    fn submit(&mut self) {
        if let Some(booking) = self.flow.booking() {
            log::info!(
                "Booking {} ({}) starting {}",
                booking.plan.label,
                booking.plan.price,
                booking.start_date
            );
            self.submitted = Some(booking);
        } else {
            log::debug!("Next pressed before choosing a plan and a start date");
        }
    }
}

impl eframe::App for BookingApp {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        self.show(ui);
    }
}
