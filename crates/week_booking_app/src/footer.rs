use egui::{Button, Color32, RichText, Ui};
use week_booking::FooterInfo;

use crate::ACCENT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooterAction {
    Back,
    Next,
}

/// Price of the chosen plan, and the Back/Next navigation.
pub struct Footer<'a> {
    info: &'a FooterInfo,
}

impl<'a> Footer<'a> {
    pub fn new(info: &'a FooterInfo) -> Self {
        Self { info }
    }

    /// "$70 FOR 10 DAYS"
    pub fn price_text(&self) -> String {
        format!("{} FOR {}", self.info.price, self.info.days.to_uppercase())
    }

    pub fn ui(self, ui: &mut Ui) -> Option<FooterAction> {
        let mut action = None;
        egui::Sides::new().show(
            ui,
            |ui| {
                ui.label(RichText::new(self.price_text()).strong());
                ui.label(RichText::new("(1 ACTIVITY PER DAY)").weak());
            },
            |ui| {
                let next = Button::new(RichText::new("NEXT").strong().color(Color32::WHITE))
                    .fill(ACCENT);
                if ui.add(next).clicked() {
                    action = Some(FooterAction::Next);
                }
                if ui.add(Button::new("BACK").frame(false)).clicked() {
                    action = Some(FooterAction::Back);
                }
            },
        );
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_text_shouts_the_days() {
        let info = FooterInfo {
            price: "$105".to_owned(),
            days: "15 days".to_owned(),
        };
        assert_eq!(Footer::new(&info).price_text(), "$105 FOR 15 DAYS");
        assert_eq!(Footer::new(&FooterInfo::default()).price_text(), "$0 FOR 0 DAYS");
    }
}
