use egui::text::LayoutJob;
use egui::{Align, Button, Color32, FontSelection, Frame, RichText, Ui, vec2};
use week_booking::{BookingConfig, PlanOption, WeekSelectorFlow};

use crate::ACCENT;
use crate::date_picker::{DatePicker, DatePickerAction};

const CARD_SIZE: egui::Vec2 = egui::Vec2::new(180.0, 96.0);

/// The plan cards, the summary of the chosen plan and the start-date dialog.
pub struct WeekSelector<'a> {
    flow: &'a mut WeekSelectorFlow,
    config: &'a BookingConfig,
}

impl<'a> WeekSelector<'a> {
    pub fn new(flow: &'a mut WeekSelectorFlow, config: &'a BookingConfig) -> Self {
        Self { flow, config }
    }

    pub fn ui(self, ui: &mut Ui) {
        let Self { flow, config } = self;

        ui.horizontal(|ui| {
            if ui.small_button("⏴").on_hover_text("Start over").clicked() {
                flow.clear_plan();
            }
            ui.label(RichText::new(&config.program_name).weak());
        });
        ui.add_space(8.0);

        ui.heading("How many weeks would you like to continue?");
        ui.horizontal(|ui| {
            ui.label("Your sessions will be scheduled on:");
            ui.label(RichText::new(config.session_days.join(", ")).strong());
        });
        ui.add_space(16.0);

        let mut clicked_plan = None;
        ui.horizontal_wrapped(|ui| {
            for plan in flow.catalog() {
                if plan_card_ui(ui, plan, flow.is_selected(plan.id)).clicked() {
                    clicked_plan = Some(plan.id);
                }
            }
        });
        if let Some(id) = clicked_plan {
            flow.select_plan(id);
        }

        if let Some(summary) = flow.plan_summary() {
            ui.add_space(24.0);
            Frame::group(ui.style()).inner_margin(egui::Margin::same(16)).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(&summary.label);
                    ui.label(
                        RichText::new(format!(
                            "({} Weeks × 5 Days) = {} Days",
                            summary.week_count, summary.total_days
                        ))
                        .size(16.0),
                    );
                    ui.add_space(12.0);

                    let button = Button::new(flow.start_date_label())
                        .min_size(vec2(ui.available_width(), 40.0));
                    if ui.add(button).clicked() {
                        flow.open_date_dialog();
                    }
                });
            });
        }

        date_dialog_ui(ui, flow, config);
    }
}

fn plan_card_ui(ui: &mut Ui, plan: &PlanOption, selected: bool) -> egui::Response {
    let title_color = if selected {
        ACCENT
    } else {
        ui.visuals().strong_text_color()
    };

    let mut text = LayoutJob {
        halign: Align::Center,
        ..Default::default()
    };
    RichText::new(&plan.label)
        .size(20.0)
        .strong()
        .color(title_color)
        .append_to(&mut text, ui.style(), FontSelection::Default, Align::Center);
    RichText::new(format!("\n{} for {}", plan.price, plan.day_count))
        .size(13.0)
        .color(Color32::GRAY)
        .append_to(&mut text, ui.style(), FontSelection::Default, Align::Center);

    ui.add(Button::selectable(selected, text).min_size(CARD_SIZE))
}

fn date_dialog_ui(ui: &Ui, flow: &mut WeekSelectorFlow, config: &BookingConfig) {
    let schedule = flow
        .selected_plan()
        .map(|plan| plan.label.clone())
        .unwrap_or_default();
    let Some(dialog) = flow.date_dialog_mut() else {
        DatePicker::forget_scroll(ui.ctx());
        return;
    };

    match DatePicker::new(dialog, config).schedule(schedule).show(ui.ctx()) {
        Some(DatePickerAction::Confirm) => {
            flow.confirm_date_dialog();
        }
        Some(DatePickerAction::Cancel) => flow.cancel_date_dialog(),
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;

    use super::*;

    struct SelectorState {
        flow: WeekSelectorFlow,
        config: BookingConfig,
    }

    #[test]
    fn closing_the_dialog_outside_the_picker_resets_its_scroll() {
        let config = BookingConfig::default();
        let mut flow = WeekSelectorFlow::from_config(&config);
        flow.select_plan(1);
        flow.open_date_dialog();

        let mut harness = Harness::builder().with_size(vec2(1280.0, 960.0)).build_ui_state(
            |ui, state: &mut SelectorState| WeekSelector::new(&mut state.flow, &state.config).ui(ui),
            SelectorState { flow, config },
        );
        harness.run();
        assert!(DatePicker::is_scroll_synced(&harness.ctx));

        harness.state_mut().flow.cancel_date_dialog();
        harness.run();
        assert!(
            !DatePicker::is_scroll_synced(&harness.ctx),
            "a reopened dialog must scroll to its selection"
        );

        harness.state_mut().flow.open_date_dialog();
        harness.run();
        assert!(DatePicker::is_scroll_synced(&harness.ctx));
    }

    #[test]
    fn back_to_no_plan_resets_the_picker_scroll() {
        let config = BookingConfig::default();
        let mut flow = WeekSelectorFlow::from_config(&config);
        flow.select_plan(2);
        flow.open_date_dialog();

        let mut harness = Harness::builder().with_size(vec2(1280.0, 960.0)).build_ui_state(
            |ui, state: &mut SelectorState| WeekSelector::new(&mut state.flow, &state.config).ui(ui),
            SelectorState { flow, config },
        );
        harness.run();

        harness.state_mut().flow.clear_plan();
        harness.run();
        assert!(!DatePicker::is_scroll_synced(&harness.ctx));
    }
}
