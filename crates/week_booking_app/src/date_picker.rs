use egui::scroll_area::ScrollBarVisibility;
use egui::{Button, Color32, Context, Id, Modal, RichText, ScrollArea, Ui, vec2};
use week_booking::{BookingConfig, DatePickerDialog, DateSelection, Month, WheelLayout};

use crate::ACCENT;

/// What the user asked the date picker to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePickerAction {
    Confirm,
    Cancel,
}

/// Modal with a day, a month and a year wheel, editing an open [`DatePickerDialog`].
///
/// Each wheel keeps its selected entry centered: whenever the selection differs from
/// the one we last scrolled to (and on the first frame), all three wheels jump to it.
pub struct DatePicker<'a> {
    dialog: &'a mut DatePickerDialog,
    years: Vec<i16>,
    wheel: WheelLayout,
    schedule: String,
    session_days: &'a [String],
}

impl<'a> DatePicker<'a> {
    pub fn new(dialog: &'a mut DatePickerDialog, config: &'a BookingConfig) -> Self {
        Self {
            dialog,
            years: config.years().collect(),
            wheel: config.wheel,
            schedule: "weekly".to_owned(),
            session_days: &config.session_days,
        }
    }

    /// Name of the schedule in the preview line, e.g. `"2 Weeks"`.
    #[inline]
    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    pub fn id() -> Id {
        Id::new("start_date_picker")
    }

    fn synced_id() -> Id {
        Self::id().with("synced_selection")
    }

    /// Shows the picker as a modal.
    ///
    /// Escape or a click outside the modal counts as [`DatePickerAction::Cancel`].
    pub fn show(self, ctx: &Context) -> Option<DatePickerAction> {
        let modal = Modal::new(Self::id()).show(ctx, |ui| self.ui(ui));
        let action = modal
            .inner
            .or_else(|| modal.should_close().then_some(DatePickerAction::Cancel));

        if action.is_some() {
            Self::forget_scroll(ctx);
        }
        action
    }

    /// Makes the next picker shown scroll its wheels to its selection.
    ///
    /// Call this whenever the picker is not shown, so a reopened dialog never
    /// inherits the scroll state of a closed one.
    pub fn forget_scroll(ctx: &Context) {
        ctx.data_mut(|data| data.remove::<DateSelection>(Self::synced_id()));
    }

    #[cfg(test)]
    pub(crate) fn is_scroll_synced(ctx: &Context) -> bool {
        ctx.data(|data| data.get_temp::<DateSelection>(Self::synced_id()).is_some())
    }

    /// The contents of the modal.
    pub fn ui(self, ui: &mut Ui) -> Option<DatePickerAction> {
        let Self {
            dialog,
            years,
            wheel,
            schedule,
            session_days,
        } = self;

        let selection = *dialog.selection();
        let synced = ui.data(|data| data.get_temp::<DateSelection>(Self::synced_id()));
        let scroll_to_selection = synced != Some(selection);
        if scroll_to_selection && !ui.is_sizing_pass() {
            ui.data_mut(|data| data.insert_temp(Self::synced_id(), selection));
        }

        ui.set_width(360.0);
        ui.vertical_centered(|ui| {
            ui.heading("Select start date");
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let days = selection.days();
            if let Some(day) = wheel_ui(
                ui,
                "day_wheel",
                &wheel,
                64.0,
                &days,
                selection.day(),
                scroll_to_selection,
                |day| day.to_string(),
            ) {
                log::debug!("Picked day {day}");
                dialog.pick_day(day);
            }

            if let Some(month) = wheel_ui(
                ui,
                "month_wheel",
                &wheel,
                140.0,
                &Month::ALL,
                selection.month(),
                scroll_to_selection,
                |month| month.name().to_owned(),
            ) {
                log::debug!("Picked {month}");
                dialog.pick_month(month);
            }

            if let Some(year) = wheel_ui(
                ui,
                "year_wheel",
                &wheel,
                96.0,
                &years,
                selection.year(),
                scroll_to_selection,
                |year| year.to_string(),
            ) {
                log::debug!("Picked year {year}");
                dialog.pick_year(year);
            }
        });

        ui.add_space(12.0);
        ui.label(preview_text(&schedule, dialog.selection(), session_days));
        ui.label("We'll automatically set your end date, and you can renew whenever you like.");
        ui.separator();

        let (cancelled, confirmed) = egui::Sides::new().show(
            ui,
            |ui| ui.button("Cancel").clicked(),
            |ui| {
                let confirm = Button::new(RichText::new("Confirm").strong().color(Color32::WHITE))
                    .fill(ACCENT);
                ui.add(confirm).clicked()
            },
        );

        if confirmed {
            Some(DatePickerAction::Confirm)
        } else if cancelled {
            Some(DatePickerAction::Cancel)
        } else {
            None
        }
    }
}

/// One scrollable column of the picker. Returns the item the user clicked, if any.
#[expect(clippy::too_many_arguments)]
fn wheel_ui<T: Copy + PartialEq>(
    ui: &mut Ui,
    id_salt: &str,
    wheel: &WheelLayout,
    width: f32,
    items: &[T],
    selected: T,
    scroll_to_selection: bool,
    label: impl Fn(T) -> String,
) -> Option<T> {
    let mut scroll_area = ScrollArea::vertical()
        .id_salt(id_salt)
        .auto_shrink([true, false])
        .min_scrolled_height(wheel.viewport_height)
        .max_height(wheel.viewport_height)
        .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden);

    if scroll_to_selection {
        // A value missing from the wheel leaves the scroll position alone.
        if let Some(offset) = wheel.offset_for(items, &selected) {
            scroll_area = scroll_area.vertical_scroll_offset(offset);
        }
    }

    let mut picked = None;
    scroll_area.show(ui, |ui| {
        // The wheels sit in a row, but each one stacks its items.
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.spacing_mut().item_spacing.y = 0.0;
            ui.add_space(wheel.padding);
            for &item in items {
                let is_selected = item == selected;
                let mut text = RichText::new(label(item)).size(18.0);
                if is_selected {
                    text = text.strong().color(ACCENT);
                }
                let button =
                    Button::selectable(is_selected, text).min_size(vec2(width, wheel.item_height));
                if ui.add(button).clicked() && !is_selected {
                    picked = Some(item);
                }
            }
            ui.add_space(wheel.padding);
        });
    });
    picked
}

/// "NB: You've chosen a 2 Weeks schedule starting on 15 March 2025, with sessions on Mon, Tue, and Sat."
pub fn preview_text(schedule: &str, selection: &DateSelection, session_days: &[String]) -> String {
    format!(
        "NB: You've chosen a {schedule} schedule starting on {selection}, with sessions on {}.",
        join_with_and(session_days)
    )
}

/// `["Mon", "Tue", "Thu"]` becomes `"Mon, Tue, and Thu"`.
fn join_with_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use egui_kittest::kittest::Queryable as _;

    use super::*;

    struct PickerState {
        dialog: DatePickerDialog,
        config: BookingConfig,
        action: Option<DatePickerAction>,
    }

    fn picker_harness(initial: DateSelection) -> Harness<'static, PickerState> {
        Harness::builder().with_size(vec2(600.0, 700.0)).build_ui_state(
            |ui, state: &mut PickerState| {
                let PickerState {
                    dialog,
                    config,
                    action,
                } = state;
                if let Some(new_action) = DatePicker::new(dialog, config).schedule("2 Weeks").ui(ui) {
                    *action = Some(new_action);
                }
            },
            PickerState {
                dialog: DatePickerDialog::open(initial),
                config: BookingConfig::default(),
                action: None,
            },
        )
    }

    /// Asserts that the entries labelled `labels` sit in the middle of the wheel row.
    ///
    /// The row is spaced equally from the heading above and the preview below, so its
    /// center is halfway between the two.
    fn assert_centered(harness: &Harness<'_, PickerState>, labels: [&str; 3]) {
        let wheel = harness.state().config.wheel;
        let heading_bottom = harness.get_by_label("Select start date").rect().bottom();
        let preview_top = harness.get_by_label_contains("NB: ").rect().top();
        let row_center = (heading_bottom + preview_top) / 2.0;

        assert!(
            preview_top - heading_bottom >= wheel.viewport_height,
            "wheel viewport is only {} tall",
            preview_top - heading_bottom
        );
        for label in labels {
            let rect = harness.get_by_label(label).rect();
            assert!(
                (rect.height() - wheel.item_height).abs() < 1.0,
                "{label} is {} tall",
                rect.height()
            );
            let center = rect.center().y;
            assert!(
                (center - row_center).abs() < 2.0,
                "{label} at {center}, wheel center at {row_center}"
            );
        }
    }

    #[test]
    fn wheels_center_the_selection() {
        let mut harness = picker_harness(DateSelection::new(15, Month::March, 2025));
        harness.run();
        assert_centered(&harness, ["15", "March", "2025"]);

        let february = harness.get_by_label("February").rect();
        let march = harness.get_by_label("March").rect();
        assert!(
            (march.center().y - february.center().y - harness.state().config.wheel.item_height)
                .abs()
                < 1.0,
            "month entries are stacked one item apart"
        );
    }

    #[test]
    fn wheels_center_the_first_entries() {
        let mut harness = picker_harness(DateSelection::new(1, Month::January, 2010));
        harness.run();
        assert_centered(&harness, ["1", "January", "2010"]);
    }

    #[test]
    fn picking_scrolls_the_new_selection_to_the_center() {
        let mut harness = picker_harness(DateSelection::new(15, Month::March, 2025));
        harness.run();

        harness.get_by_label("2024").click_accesskit();
        harness.run();

        assert_eq!(harness.state().dialog.selection().year(), 2024);
        assert_centered(&harness, ["15", "March", "2024"]);
    }

    #[test]
    fn picking_a_shorter_month_clamps_the_day() {
        let mut harness = picker_harness(DateSelection::new(31, Month::January, 2025));
        harness.run();

        harness.get_by_label("April").click_accesskit();
        harness.run();

        let selection = *harness.state().dialog.selection();
        assert_eq!(selection, DateSelection::new(30, Month::April, 2025));
        assert!(harness.query_by_label("31").is_none(), "April has no 31st");
        harness.get_by_label_contains("starting on 30 April 2025");
    }

    #[test]
    fn buttons_report_confirm_and_cancel() {
        let mut harness = picker_harness(DateSelection::default());
        harness.run();

        harness.get_by_label("Cancel").click();
        harness.run();
        assert_eq!(harness.state().action, Some(DatePickerAction::Cancel));

        harness.get_by_label("Confirm").click();
        harness.run();
        assert_eq!(harness.state().action, Some(DatePickerAction::Confirm));
    }

    fn days(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn joins_session_days() {
        assert_eq!(join_with_and(&[]), "");
        assert_eq!(join_with_and(&days(&["Mon"])), "Mon");
        assert_eq!(join_with_and(&days(&["Mon", "Fri"])), "Mon and Fri");
        assert_eq!(
            join_with_and(&days(&["Mon", "Tue", "Thu", "Fri", "Sat"])),
            "Mon, Tue, Thu, Fri, and Sat"
        );
    }

    #[test]
    fn preview_names_schedule_date_and_days() {
        let selection = DateSelection::new(15, Month::March, 2025);
        assert_eq!(
            preview_text("2 Weeks", &selection, &days(&["Mon", "Sat"])),
            "NB: You've chosen a 2 Weeks schedule starting on 15 March 2025, with sessions on Mon and Sat."
        );
    }
}
