use egui::{Button, Color32, RichText, Ui};

use crate::ACCENT;

const NAVIGATION: [&str; 4] = ["HOME", "PROGRAMS & SERVICES", "ABOUT", "CONTACT"];

/// Brand, navigation and sign-in. Navigation and sign-in belong to the host site,
/// so they only log here.
pub fn header_ui(ui: &mut Ui) {
    egui::Sides::new().show(
        ui,
        |ui| {
            ui.label(RichText::new("SUPER BASE").size(22.0).strong().color(ACCENT));
        },
        |ui| {
            let sign_in = Button::new(RichText::new("SIGN IN").strong().color(Color32::WHITE))
                .fill(ACCENT);
            if ui.add(sign_in).clicked() {
                log::debug!("Sign in clicked");
            }
            ui.label("🛍");
            for entry in NAVIGATION.iter().rev() {
                if ui.link(RichText::new(*entry).strong()).clicked() {
                    log::debug!("Navigation to {entry:?} clicked");
                }
            }
        },
    );
}
