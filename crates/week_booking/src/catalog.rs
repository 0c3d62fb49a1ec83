//! The plans a user can book.

/// A selectable pricing and duration tier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct PlanOption {
    pub id: u32,

    /// E.g. `"2 Weeks"`.
    pub label: String,

    /// Multiplied by [`DAYS_PER_WEEK`] for the summary's day total.
    pub week_count: u32,

    /// E.g. `"10 days"`.
    pub day_count: String,

    /// E.g. `"$70"`.
    pub price: String,
}

/// Session days per week: Mon, Tue, Thu, Fri, Sat.
pub const DAYS_PER_WEEK: u32 = 5;

impl PlanOption {
    pub fn new(
        id: u32,
        label: impl Into<String>,
        week_count: u32,
        day_count: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            week_count,
            day_count: day_count.into(),
            price: price.into(),
        }
    }

    /// `week_count * DAYS_PER_WEEK`.
    ///
    /// NOTE: the built-in `week_count` values (5, 10, 15, 20) already count session days,
    /// so this total is five times the `day_count` label (plan 2 says "10 days" and gives 50).
    /// Kept as is until product decides which number is meant.
    pub fn total_days(&self) -> u32 {
        self.week_count * DAYS_PER_WEEK
    }
}

/// The built-in plans.
pub fn default_catalog() -> Vec<PlanOption> {
    vec![
        PlanOption::new(1, "1 Weeks", 5, "05 days", "$35"),
        PlanOption::new(2, "2 Weeks", 10, "10 days", "$70"),
        PlanOption::new(3, "3 Weeks", 15, "15 days", "$105"),
        PlanOption::new(4, "4 Weeks", 20, "20 days", "$140"),
    ]
}
