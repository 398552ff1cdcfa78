//! Cursor and scroll math shared by every list-like pane.
//!
//! For a list of `count` rows shown in a window of `height` rows, a valid
//! `(cursor, scroll)` pair satisfies:
//!
//! ```text
//! 0 <= scroll <= max(0, count - height)
//! scroll <= cursor <= scroll + height - 1     (when count > 0)
//! cursor == 0 && scroll == 0                  (when count == 0)
//! ```
//!
//! A `height` of zero is treated as one.

/// Largest valid scroll offset.
pub fn max_scroll(count: usize, height: usize) -> usize {
    count.saturating_sub(height.max(1))
}

/// Clamp a cursor into `[0, count - 1]` (0 for an empty list).
pub fn clamp_cursor(cursor: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        cursor.min(count - 1)
    }
}

/// Move a cursor by `delta` rows without wrapping.
pub fn step(cursor: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let cursor = clamp_cursor(cursor, count);
    let moved = if delta.is_negative() {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        cursor.saturating_add(delta.unsigned_abs())
    };
    clamp_cursor(moved, count)
}

/// Scroll offset that keeps `cursor` visible, moving as little as possible
/// from `scroll`. When the cursor is above the window the window's top
/// follows it; when below, the window moves down just enough to make it the
/// bottom row.
pub fn follow(cursor: usize, scroll: usize, count: usize, height: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let height = height.max(1);
    let cursor = clamp_cursor(cursor, count);
    let mut scroll = scroll.min(max_scroll(count, height));
    if cursor < scroll {
        scroll = cursor;
    } else if cursor >= scroll + height {
        scroll = cursor + 1 - height;
    }
    scroll
}

/// Clamp both values against the current list size and window height.
pub fn clamp(cursor: usize, scroll: usize, count: usize, height: usize) -> (usize, usize) {
    let cursor = clamp_cursor(cursor, count);
    (cursor, follow(cursor, scroll, count, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid(cursor: usize, scroll: usize, count: usize, height: usize) {
        let h = height.max(1);
        let limit = max_scroll(count, h);
        assert!(scroll <= limit, "scroll {} past {}", scroll, limit);
        if count == 0 {
            assert_eq!((cursor, scroll), (0, 0));
        } else {
            assert!(cursor < count, "cursor {} out of {}", cursor, count);
            let visible = scroll <= cursor && cursor < scroll + h;
            assert!(visible, "cursor {} not visible", cursor);
        }
    }

    #[test]
    fn test_last_of_five_in_window_of_three() {
        assert_eq!(follow(4, 0, 5, 3), 2);
    }

    #[test]
    fn test_follow_up_moves_window_top() {
        assert_eq!(follow(1, 3, 10, 4), 1);
    }

    #[test]
    fn test_follow_inside_window_is_unchanged() {
        assert_eq!(follow(5, 3, 10, 4), 3);
    }

    #[test]
    fn test_step_clamps_at_bounds() {
        assert_eq!(step(0, -1, 5), 0);
        assert_eq!(step(4, 1, 5), 4);
        assert_eq!(step(2, 10, 5), 4);
        assert_eq!(step(3, 0, 0), 0);
    }

    #[test]
    fn test_zero_height_behaves_like_one() {
        assert_eq!(follow(3, 0, 5, 0), 3);
        assert_eq!(max_scroll(5, 0), 4);
    }

    #[test]
    fn test_shrunk_list_reclamps() {
        let (cursor, scroll) = clamp(9, 6, 3, 4);
        assert_eq!((cursor, scroll), (2, 0));
    }

    #[test]
    fn test_random_walks_keep_invariants() {
        // Deterministic pseudo-random walk over several list shapes
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for count in [0usize, 1, 2, 5, 13, 40] {
            for height in [0usize, 1, 3, 7, 50] {
                let (mut cursor, mut scroll) = (0usize, 0usize);
                for _ in 0..200 {
                    seed ^= seed << 13;
                    seed ^= seed >> 7;
                    seed ^= seed << 17;
                    let delta = (seed % 7) as isize - 3;
                    cursor = step(cursor, delta, count);
                    scroll = follow(cursor, scroll, count, height);
                    assert_valid(cursor, scroll, count, height);
                }
            }
        }
    }
}
