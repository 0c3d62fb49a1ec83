//! Keeping the picked value in the middle of its wheel.
//!
//! A wheel is a vertical list of equally tall items with some empty padding above
//! and below, shown through a viewport of fixed height. Whenever the selection
//! changes, the front end asks [`WheelLayout::offset_for`] where to scroll and
//! jumps there without animation.

/// Geometry of one date picker wheel, in points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct WheelLayout {
    /// Height of a single item.
    pub item_height: f32,

    /// Height of the visible part of the wheel.
    pub viewport_height: f32,

    /// Empty space above the first item and below the last one.
    ///
    /// Half a viewport minus half an item lets the first and last items reach the center.
    pub padding: f32,
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self {
            item_height: 48.0,
            viewport_height: 256.0,
            padding: 104.0,
        }
    }
}

impl WheelLayout {
    /// Total height of a wheel holding `item_count` items, padding included.
    pub fn content_height(&self, item_count: usize) -> f32 {
        2.0 * self.padding + item_count as f32 * self.item_height
    }

    /// Largest offset the wheel can be scrolled to.
    pub fn max_offset(&self, item_count: usize) -> f32 {
        (self.content_height(item_count) - self.viewport_height).max(0.0)
    }

    /// Offset that puts the center of item `index` at the center of the viewport,
    /// limited to what the wheel can actually scroll.
    pub fn centered_offset(&self, index: usize, item_count: usize) -> f32 {
        let item_center = self.padding + (index as f32 + 0.5) * self.item_height;
        let offset = item_center - 0.5 * self.viewport_height;
        offset.clamp(0.0, self.max_offset(item_count))
    }

    /// Where to scroll so that `selected` is centered.
    ///
    /// `None` if `selected` is not one of `items`, in which case nothing should scroll.
    pub fn offset_for<T: PartialEq>(&self, items: &[T], selected: &T) -> Option<f32> {
        let index = items.iter().position(|item| item == selected)?;
        Some(self.centered_offset(index, items.len()))
    }
}
