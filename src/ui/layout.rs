//! # Layout Calculator
//!
//! Pane geometry for the dual-pane browser screens.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐ ─┐
//! │ header                                       │  │ header_height
//! └──────────────────────────────────────────────┘ ─┘
//! ┌───────────────┐┌─────────────────────────────┐ ─┐
//! │ categories    ││ items                       │  │
//! │               ││                             │  │ body_height
//! │               │├─────────────────────────────┤  │
//! │               ││ widget (optional)           │  │
//! └───────────────┘└─────────────────────────────┘ ─┘
//!  footer                                            footer_height
//! ```
//!
//! Everything is computed from the terminal size alone, so the same numbers
//! drive rendering, keyboard scrolling and mouse hit-testing.

use ratatui::layout::Rect;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
/// Border thickness on each side of a pane.
pub const BORDER: u16 = 1;
/// Horizontal padding inside a pane border.
pub const PADDING: u16 = 1;
/// Share of the width given to the categories pane, in percent.
pub const LEFT_PANE_PERCENT: u16 = 30;
pub const MIN_LEFT_WIDTH: u16 = 16;
/// Default minimum width kept for the items pane.
pub const MIN_RIGHT_WIDTH: u16 = 36;
/// The widget needs at least this much room to be shown.
pub const WIDGET_MIN_WIDTH: u16 = 44;
pub const WIDGET_MIN_BODY_HEIGHT: u16 = 20;
/// Outer height of the widget region, borders included.
pub const WIDGET_HEIGHT: u16 = 7;

/// Geometry of a dual-pane screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserLayout {
    pub header_height: u16,
    pub footer_height: u16,
    pub body_height: u16,
    /// Outer rectangle of the categories pane.
    pub left: Rect,
    /// Outer rectangle of the items pane (widget region excluded).
    pub right: Rect,
    /// Content area of the categories pane.
    pub left_inner: Rect,
    /// Content area of the items pane.
    pub right_inner: Rect,
    /// Optional decorative region beneath the item list.
    pub widget: Option<Rect>,
}

impl BrowserLayout {
    /// Visible rows in the categories list.
    pub fn category_rows(&self) -> usize {
        usize::from(self.left_inner.height.max(1))
    }

    /// Visible rows in the items list.
    pub fn item_rows(&self) -> usize {
        usize::from(self.right_inner.height.max(1))
    }

    /// Which pane contains column `x`.
    pub fn pane_at_column(&self, x: u16) -> PaneHit {
        if x < self.right.x {
            PaneHit::Categories
        } else {
            PaneHit::Items
        }
    }

    /// Translate a screen position into `(pane, visible row)` when it falls on
    /// a list row.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(PaneHit, usize)> {
        if contains(self.left_inner, x, y) {
            return Some((PaneHit::Categories, usize::from(y - self.left_inner.y)));
        }
        if contains(self.right_inner, x, y) {
            return Some((PaneHit::Items, usize::from(y - self.right_inner.y)));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneHit {
    Categories,
    Items,
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && y >= rect.y
        && x < rect.x.saturating_add(rect.width)
        && y < rect.y.saturating_add(rect.height)
}

/// Shrink a pane by its border and padding, never below 1x1.
fn inner(outer: Rect) -> Rect {
    let inset_x = BORDER + PADDING;
    let dx = inset_x.min(outer.width.saturating_sub(1));
    let dy = BORDER.min(outer.height.saturating_sub(1));
    Rect {
        x: outer.x.saturating_add(dx),
        y: outer.y.saturating_add(dy),
        width: outer.width.saturating_sub(2 * inset_x).max(1),
        height: outer.height.saturating_sub(2 * BORDER).max(1),
    }
}

/// Compute pane geometry for a terminal of `width` x `height`.
///
/// Degenerate sizes still produce dimensions of at least 1 and panes that do
/// not overlap; the right pane is kept at `min_right_width` when the
/// terminal is wide enough.
pub fn compute(
    width: u16,
    height: u16,
    min_right_width: u16,
    widget_enabled: bool,
) -> BrowserLayout {
    let width = width.max(2);
    let height = height.max(1);

    let footer_height = FOOTER_HEIGHT;
    let header_height = HEADER_HEIGHT
        .min(height.saturating_sub(footer_height + 1))
        .max(1);
    let body_height = height.saturating_sub(header_height + footer_height).max(1);

    let preferred_left = (u32::from(width) * u32::from(LEFT_PANE_PERCENT) / 100) as u16;
    let left_width = preferred_left
        .max(MIN_LEFT_WIDTH)
        .min(width.saturating_sub(min_right_width))
        .clamp(1, width - 1);
    let right_width = width - left_width;

    let body_y = header_height;
    let left = Rect::new(0, body_y, left_width, body_height);
    let mut right = Rect::new(left_width, body_y, right_width, body_height);

    let widget = if widget_enabled
        && right_width >= WIDGET_MIN_WIDTH
        && body_height >= WIDGET_MIN_BODY_HEIGHT
    {
        right.height = body_height - WIDGET_HEIGHT;
        Some(Rect::new(
            left_width,
            body_y + right.height,
            right_width,
            WIDGET_HEIGHT,
        ))
    } else {
        None
    };

    BrowserLayout {
        header_height,
        footer_height,
        body_height,
        left,
        right,
        left_inner: inner(left),
        right_inner: inner(right),
        widget,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_terminal() {
        let layout = compute(120, 40, MIN_RIGHT_WIDTH, false);
        assert_eq!(layout.header_height, 3);
        assert_eq!(layout.footer_height, 1);
        assert_eq!(layout.body_height, 36);
        assert_eq!(layout.left, Rect::new(0, 3, 36, 36));
        assert_eq!(layout.right, Rect::new(36, 3, 84, 36));
        assert_eq!(layout.left_inner, Rect::new(2, 4, 32, 34));
        assert_eq!(layout.category_rows(), 34);
        assert_eq!(layout.item_rows(), 34);
        assert!(layout.widget.is_none());
    }

    #[test]
    fn test_widget_reserved_when_room() {
        let layout = compute(120, 40, MIN_RIGHT_WIDTH, true);
        let widget = layout.widget.expect("widget fits");
        assert_eq!(widget.height, WIDGET_HEIGHT);
        assert_eq!(widget.y, layout.right.y + layout.right.height);
        assert_eq!(layout.right.height + widget.height, layout.body_height);
        assert_eq!(layout.item_rows(), usize::from(36 - WIDGET_HEIGHT - 2));
    }

    #[test]
    fn test_widget_dropped_when_short() {
        let layout = compute(120, 20, MIN_RIGHT_WIDTH, true);
        assert!(layout.widget.is_none());
    }

    #[test]
    fn test_right_pane_keeps_minimum_width() {
        let layout = compute(60, 30, 50, false);
        assert_eq!(layout.right.width, 50);
        assert_eq!(layout.left.width, 10);
    }

    #[test]
    fn test_tiny_terminal_is_usable() {
        let layout = compute(10, 3, MIN_RIGHT_WIDTH, true);
        assert!(layout.header_height >= 1);
        assert!(layout.footer_height >= 1);
        assert!(layout.body_height >= 1);
        for rect in [
            layout.left,
            layout.right,
            layout.left_inner,
            layout.right_inner,
        ] {
            assert!(rect.width >= 1 && rect.height >= 1, "{:?}", rect);
        }
        assert!(layout.left.x + layout.left.width <= layout.right.x);
        assert!(layout.widget.is_none());
    }

    #[test]
    fn test_zero_sized_terminal() {
        let layout = compute(0, 0, MIN_RIGHT_WIDTH, false);
        assert!(layout.left.width >= 1 && layout.right.width >= 1);
        assert!(layout.left.x + layout.left.width <= layout.right.x);
        assert!(layout.category_rows() >= 1);
    }

    #[test]
    fn test_hit_test_maps_rows() {
        let layout = compute(120, 40, MIN_RIGHT_WIDTH, false);
        assert_eq!(layout.hit_test(5, 4), Some((PaneHit::Categories, 0)));
        assert_eq!(layout.hit_test(50, 10), Some((PaneHit::Items, 6)));
        // Header, border and footer rows are not list rows
        assert_eq!(layout.hit_test(5, 1), None);
        assert_eq!(layout.hit_test(5, 3), None);
        assert_eq!(layout.hit_test(50, 39), None);
    }

    #[test]
    fn test_pane_at_column() {
        let layout = compute(120, 40, MIN_RIGHT_WIDTH, false);
        assert_eq!(layout.pane_at_column(0), PaneHit::Categories);
        assert_eq!(layout.pane_at_column(35), PaneHit::Categories);
        assert_eq!(layout.pane_at_column(36), PaneHit::Items);
    }
}
