//! # Dual-Pane Browser
//!
//! A two-level navigable list: categories on the left, the selected
//! category's items on the right. Used by the hotkeys browser and the
//! package management browser.
//!
//! ## Filtering
//!
//! The item list shown on the right is the category's items narrowed by:
//!
//! - the favorites-only flag (entries favorited in the [`FavoriteStore`])
//! - the text filter (case-insensitive match on key and description)
//!
//! All item navigation operates on that displayed list. Because the list can
//! shrink between frames (a favorite removed, a filter typed), every
//! mutating operation ends by re-clamping cursors and scroll offsets, and
//! the event loop calls [`Browser::sync`] before each frame.
//!
//! ## Focus rules
//!
//! - An empty category list forces focus to the categories pane.
//! - An empty item list forces focus to the categories pane only when no
//!   filter is engaged; with a filter active the items pane keeps focus so
//!   the filter can be turned off from there.

use super::editor::{AliasDraft, AliasEditor};
use super::layout::{self, BrowserLayout, PaneHit};
use super::screen::Screen;
use super::scroll;
use crate::catalog::{CatalogKind, Category, Item};
use crate::favorites::FavoriteStore;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: isize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Categories,
    Items,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct Browser {
    kind: CatalogKind,
    categories: Vec<Category>,
    pub category_index: usize,
    pub category_scroll: usize,
    pub item_cursor: usize,
    pub item_scroll: usize,
    pub pane: Pane,
    /// Text filter applied to the displayed items.
    pub filter: String,
    /// Whether keystrokes currently go into the filter.
    pub filter_editing: bool,
    pub favorites_only: bool,
    /// Inline alias editor; `Some` while the sub-mode is active.
    pub editor: Option<AliasEditor>,
    /// Where Esc leaves to.
    pub return_screen: Screen,
    layout: BrowserLayout,
}

impl Browser {
    pub fn new(kind: CatalogKind, categories: Vec<Category>) -> Self {
        Self {
            kind,
            categories,
            category_index: 0,
            category_scroll: 0,
            item_cursor: 0,
            item_scroll: 0,
            pane: Pane::Categories,
            filter: String::new(),
            filter_editing: false,
            favorites_only: false,
            editor: None,
            return_screen: Screen::MainMenu,
            layout: layout::compute(80, 24, layout::MIN_RIGHT_WIDTH, false),
        }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn layout(&self) -> &BrowserLayout {
        &self.layout
    }

    /// Swap in a new category list (e.g. after the navigation style changed).
    pub fn set_categories(&mut self, categories: Vec<Category>, store: &FavoriteStore) {
        self.categories = categories;
        self.clamp(store);
    }

    /// Reset navigation for a fresh visit, remembering who opened us.
    pub fn open(&mut self, return_screen: Screen, store: &FavoriteStore) {
        self.return_screen = return_screen;
        self.pane = Pane::Categories;
        self.filter_editing = false;
        self.editor = None;
        self.clamp(store);
    }

    pub fn current_category(&self) -> Option<&Category> {
        self.categories.get(self.category_index)
    }

    /// Items of the current category after favorites and text filtering.
    pub fn visible_items(&self, store: &FavoriteStore) -> Vec<&Item> {
        let Some(category) = self.current_category() else {
            return Vec::new();
        };
        category
            .items
            .iter()
            .filter(|item| !self.favorites_only || store.is_favorite(&category.id, &item.key))
            .filter(|item| item.matches(&self.filter))
            .collect()
    }

    pub fn selected_item(&self, store: &FavoriteStore) -> Option<&Item> {
        self.visible_items(store).get(self.item_cursor).copied()
    }

    /// Whether a filter is narrowing the item list.
    pub fn filter_engaged(&self) -> bool {
        self.favorites_only || !self.filter.is_empty()
    }

    /// Adopt a new layout and re-clamp against it.
    pub fn sync(&mut self, layout: BrowserLayout, store: &FavoriteStore) {
        self.layout = layout;
        self.clamp(store);
    }

    /// Restore every cursor/scroll invariant for the current data.
    pub fn clamp(&mut self, store: &FavoriteStore) {
        if self.categories.is_empty() {
            self.category_index = 0;
            self.category_scroll = 0;
            self.item_cursor = 0;
            self.item_scroll = 0;
            self.pane = Pane::Categories;
            return;
        }

        let (index, scroll) = scroll::clamp(
            self.category_index,
            self.category_scroll,
            self.categories.len(),
            self.layout.category_rows(),
        );
        self.category_index = index;
        self.category_scroll = scroll;

        let count = self.visible_items(store).len();
        let (cursor, scroll) = scroll::clamp(
            self.item_cursor,
            self.item_scroll,
            count,
            self.layout.item_rows(),
        );
        self.item_cursor = cursor;
        self.item_scroll = scroll;

        if count == 0 && !self.filter_engaged() {
            self.pane = Pane::Categories;
        }
    }

    fn select_category(&mut self, index: usize, store: &FavoriteStore) {
        if index != self.category_index {
            self.category_index = index;
            self.item_cursor = 0;
            self.item_scroll = 0;
        }
        self.category_scroll = scroll::follow(
            self.category_index,
            self.category_scroll,
            self.categories.len(),
            self.layout.category_rows(),
        );
        self.clamp(store);
    }

    pub fn move_category(&mut self, delta: isize, store: &FavoriteStore) {
        let target = scroll::step(self.category_index, delta, self.categories.len());
        self.select_category(target, store);
    }

    pub fn move_item(&mut self, delta: isize, store: &FavoriteStore) {
        let count = self.visible_items(store).len();
        self.item_cursor = scroll::step(self.item_cursor, delta, count);
        self.item_scroll = scroll::follow(
            self.item_cursor,
            self.item_scroll,
            count,
            self.layout.item_rows(),
        );
        self.clamp(store);
    }

    /// Move within whichever pane has focus.
    pub fn move_selection(&mut self, delta: isize, store: &FavoriteStore) {
        match self.pane {
            Pane::Categories => self.move_category(delta, store),
            Pane::Items => self.move_item(delta, store),
        }
    }

    /// Focus a pane. Item position is kept; only a category change resets it.
    pub fn focus(&mut self, pane: Pane, store: &FavoriteStore) {
        self.pane = pane;
        self.clamp(store);
    }

    pub fn switch_pane(&mut self, store: &FavoriteStore) {
        let next = match self.pane {
            Pane::Categories => Pane::Items,
            Pane::Items => Pane::Categories,
        };
        self.focus(next, store);
    }

    /// Flip favorite membership of `(category_id, item_key)`. Returns whether
    /// it is now a favorite.
    pub fn toggle_favorite(
        &mut self,
        store: &mut FavoriteStore,
        category_id: &str,
        item_key: &str,
    ) -> bool {
        let now_favorite = store.toggle_favorite(category_id, item_key);
        // In favorites-only mode the list may have shrunk under the cursor
        self.clamp(store);
        now_favorite
    }

    /// Toggle the favorite on the selected item, if any.
    pub fn toggle_selected_favorite(&mut self, store: &mut FavoriteStore) -> Option<bool> {
        let category_id = self.current_category()?.id.clone();
        let item_key = self.selected_item(store)?.key.clone();
        Some(self.toggle_favorite(store, &category_id, &item_key))
    }

    pub fn set_favorites_only(&mut self, enabled: bool, store: &FavoriteStore) {
        self.favorites_only = enabled;
        self.item_cursor = 0;
        self.item_scroll = 0;
        self.clamp(store);
    }

    pub fn toggle_favorites_only(&mut self, store: &FavoriteStore) {
        self.set_favorites_only(!self.favorites_only, store);
    }

    /// Scroll the list under the pointer's column.
    pub fn handle_wheel(&mut self, direction: WheelDirection, x: u16, store: &FavoriteStore) {
        let delta = match direction {
            WheelDirection::Up => -WHEEL_STEP,
            WheelDirection::Down => WHEEL_STEP,
        };
        match self.layout.pane_at_column(x) {
            PaneHit::Categories => self.move_category(delta, store),
            PaneHit::Items => self.move_item(delta, store),
        }
    }

    /// Select the row under a click. Returns whether anything was hit.
    pub fn handle_click(&mut self, x: u16, y: u16, store: &FavoriteStore) -> bool {
        let Some((pane, row)) = self.layout.hit_test(x, y) else {
            return false;
        };
        match pane {
            PaneHit::Categories => {
                let index = self.category_scroll + row;
                if index >= self.categories.len() {
                    return false;
                }
                self.pane = Pane::Categories;
                self.select_category(index, store);
            }
            PaneHit::Items => {
                let index = self.item_scroll + row;
                if index >= self.visible_items(store).len() {
                    return false;
                }
                self.pane = Pane::Items;
                self.item_cursor = index;
                self.clamp(store);
            }
        }
        true
    }

    pub fn begin_filter(&mut self) {
        self.filter_editing = true;
    }

    pub fn filter_push(&mut self, c: char, store: &FavoriteStore) {
        self.filter.push(c);
        self.item_cursor = 0;
        self.item_scroll = 0;
        self.clamp(store);
    }

    pub fn filter_pop(&mut self, store: &FavoriteStore) {
        self.filter.pop();
        self.item_cursor = 0;
        self.item_scroll = 0;
        self.clamp(store);
    }

    /// Leave filter typing. `keep == false` also clears the filter.
    pub fn end_filter(&mut self, keep: bool, store: &FavoriteStore) {
        self.filter_editing = false;
        if !keep && !self.filter.is_empty() {
            self.filter.clear();
            self.item_cursor = 0;
            self.item_scroll = 0;
        }
        self.clamp(store);
    }

    /// Open the alias editor for the selected item. Returns whether it opened.
    pub fn open_editor(&mut self, store: &FavoriteStore) -> bool {
        let Some(item) = self.selected_item(store) else {
            return false;
        };
        self.editor = Some(AliasEditor::for_command(&item.key));
        true
    }

    /// Commit the editor. Returns the alias when both fields were filled;
    /// the editor is closed in that case and stays open otherwise.
    pub fn commit_editor(&mut self) -> Option<AliasDraft> {
        let draft = self.editor.as_mut()?.commit()?;
        self.editor = None;
        Some(draft)
    }

    pub fn cancel_editor(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.clear();
        }
        self.editor = None;
    }
}
