//! Dual-pane browser tests
//!
//! Drives the hotkeys and manage browsers through `App::update` the way the
//! event loop does: key presses, mouse events and resizes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use dotwiz::catalog::{Catalog, CatalogKind, Category, Item, NavStyle};
use dotwiz::favorites::FavoriteStore;
use dotwiz::ui::browser::{Browser, Pane};
use dotwiz::ui::layout;
use dotwiz::ui::scroll::max_scroll;
use dotwiz::ui::{App, Effect, Msg, Screen};
use tempfile::TempDir;

struct TestCatalog {
    categories: Vec<Category>,
}

impl Catalog for TestCatalog {
    fn categories(&self, _style: NavStyle) -> Vec<Category> {
        self.categories.clone()
    }
}

fn category(id: &str, keys: &[&str]) -> Category {
    Category {
        id: id.to_string(),
        name: id.to_uppercase(),
        icon: String::new(),
        items: keys
            .iter()
            .map(|k| Item::new(*k, format!("does {}", k)))
            .collect(),
    }
}

fn catalog() -> TestCatalog {
    TestCatalog {
        categories: vec![
            category("git", &["gs", "gc", "gp"]),
            category("tmux", &["prefix c", "prefix n", "prefix p", "prefix d"]),
            category("empty", &[]),
        ],
    }
}

/// App sitting on the hotkeys browser, opened from the main menu.
fn browser_app() -> App {
    let mut app = App::new(
        Box::new(catalog()),
        &catalog(),
        FavoriteStore::in_memory("default"),
        true,
    );
    app.update(Msg::Resize(120, 40));
    app.open_browser(CatalogKind::Hotkeys, Screen::MainMenu);
    app
}

fn press(app: &mut App, code: KeyCode) -> Option<Effect> {
    app.update(Msg::Key(KeyEvent::new(code, KeyModifiers::empty())))
}

fn ctrl(app: &mut App, c: char) -> Option<Effect> {
    let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
    app.update(Msg::Key(key))
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn visible_keys(app: &App) -> Vec<String> {
    app.hotkeys
        .visible_items(&app.store)
        .iter()
        .map(|i| i.key.clone())
        .collect()
}

#[test]
fn test_unfavoriting_last_favorite_keeps_items_focus() {
    let mut app = browser_app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Down);
    assert_eq!(
        press(&mut app, KeyCode::Char('f')),
        Some(Effect::PersistStore)
    );
    assert!(app.store.is_favorite("git", "gc"));

    press(&mut app, KeyCode::Char('F'));
    assert_eq!(visible_keys(&app), vec!["gc"]);
    assert_eq!(app.hotkeys.item_cursor, 0);

    press(&mut app, KeyCode::Char('f'));
    assert!(visible_keys(&app).is_empty());
    assert_eq!(app.hotkeys.item_cursor, 0);
    assert_eq!(app.hotkeys.item_scroll, 0);
    assert_eq!(app.hotkeys.pane, Pane::Items);
}

#[test]
fn test_favorites_only_toggle_restores_list() {
    let mut app = browser_app();
    press(&mut app, KeyCode::Down); // tmux
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('f'));
    let before = visible_keys(&app);

    press(&mut app, KeyCode::Char('F'));
    assert_eq!(visible_keys(&app), vec!["prefix n"]);
    press(&mut app, KeyCode::Char('F'));

    assert_eq!(visible_keys(&app), before);
    assert_eq!(app.hotkeys.category_index, 1);
    assert_eq!(app.hotkeys.item_cursor, 0);
}

#[test]
fn test_favorites_removed_while_filtered_reclamp_cursor() {
    let mut app = browser_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Right);
    for _ in 0..4 {
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Char('F'));
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.hotkeys.item_cursor, 3);

    // Removing the last favorite moves the cursor onto the new last row
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(visible_keys(&app).len(), 3);
    assert_eq!(app.hotkeys.item_cursor, 2);

    // Removing from the middle keeps the index
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Char('f'));
    assert_eq!(visible_keys(&app), vec!["prefix c", "prefix p"]);
    assert_eq!(app.hotkeys.item_cursor, 1);
}

#[test]
fn test_category_change_resets_items_but_pane_switch_does_not() {
    let mut app = browser_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.hotkeys.item_cursor, 2);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.hotkeys.item_cursor, 2);

    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.hotkeys.category_index, 1);
    assert_eq!(app.hotkeys.item_cursor, 0);
}

#[test]
fn test_empty_category_is_navigable() {
    let mut app = browser_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.hotkeys.category_index, 2);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.hotkeys.pane, Pane::Categories);
    assert!(press(&mut app, KeyCode::Char('f')).is_none());
    press(&mut app, KeyCode::Char('a'));
    assert!(app.hotkeys.editor.is_none());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen, Screen::MainMenu);
}

#[test]
fn test_item_actions_need_items_focus() {
    let mut app = browser_app();
    app.store.set_alias("st", "gs");
    assert_eq!(app.hotkeys.pane, Pane::Categories);

    assert!(press(&mut app, KeyCode::Char('f')).is_none());
    assert_eq!(app.store.favorite_count(), 0);
    press(&mut app, KeyCode::Char('a'));
    assert!(app.hotkeys.editor.is_none());
    assert!(press(&mut app, KeyCode::Char('d')).is_none());
    assert_eq!(app.store.aliases().len(), 1);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('a'));
    assert!(app.hotkeys.editor.is_some());
}

#[test]
fn test_emacs_chords_switch_panes() {
    let mut app = browser_app();
    app.set_nav_style(NavStyle::Emacs);

    assert!(ctrl(&mut app, 'f').is_none());
    assert_eq!(app.hotkeys.pane, Pane::Items);
    ctrl(&mut app, 'n');
    assert_eq!(app.hotkeys.item_cursor, 1);

    ctrl(&mut app, 'b');
    assert_eq!(app.hotkeys.pane, Pane::Categories);
    assert_eq!(app.hotkeys.item_cursor, 1);
    assert_eq!(app.store.favorite_count(), 0);

    // Plain letters are not pane keys in Emacs style
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.hotkeys.pane, Pane::Categories);
}

#[test]
fn test_vim_letters_switch_panes() {
    let mut app = browser_app();
    app.set_nav_style(NavStyle::Vim);

    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.hotkeys.pane, Pane::Items);
    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.hotkeys.pane, Pane::Categories);

    // Ctrl chords are not pane keys in Vim style
    ctrl(&mut app, 'f');
    assert_eq!(app.hotkeys.pane, Pane::Categories);
}

#[test]
fn test_filter_enter_keeps_and_esc_clears() {
    let mut app = browser_app();
    press(&mut app, KeyCode::Char('/'));
    assert!(app.hotkeys.filter_editing);
    assert_eq!(app.hotkeys.pane, Pane::Items);
    type_str(&mut app, "gp");
    assert_eq!(visible_keys(&app), vec!["gp"]);

    press(&mut app, KeyCode::Enter);
    assert!(!app.hotkeys.filter_editing);
    assert_eq!(app.hotkeys.filter, "gp");

    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "zz");
    assert!(visible_keys(&app).is_empty());
    assert_eq!(app.hotkeys.pane, Pane::Items);

    press(&mut app, KeyCode::Esc);
    assert!(app.hotkeys.filter.is_empty());
    assert_eq!(visible_keys(&app).len(), 3);
    // Esc while typing only leaves the filter, not the browser
    assert_eq!(app.screen, Screen::Hotkeys);
}

#[test]
fn test_alias_editor_commit_and_delete() {
    let mut app = browser_app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('a'));
    let editor = app.hotkeys.editor.as_ref().expect("editor open");
    assert_eq!(editor.command.value(), "gs");

    // Keys that would normally navigate are text while editing
    type_str(&mut app, "qj");
    assert_eq!(app.screen, Screen::Hotkeys);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Char('é'));
    let editor = app.hotkeys.editor.as_ref().expect("editor open");
    assert_eq!(editor.name.value(), "éq");
    assert_eq!(editor.name.cursor(), 1);

    assert_eq!(press(&mut app, KeyCode::Enter), Some(Effect::PersistStore));
    assert!(app.hotkeys.editor.is_none());
    let command = app.store.aliases().get("éq").map(String::as_str);
    assert_eq!(command, Some("gs"));

    let effect = press(&mut app, KeyCode::Char('d'));
    assert_eq!(effect, Some(Effect::PersistStore));
    assert!(app.store.aliases().is_empty());
    assert!(press(&mut app, KeyCode::Char('d')).is_none());
}

#[test]
fn test_alias_editor_requires_both_fields() {
    let mut app = browser_app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('a'));
    assert!(press(&mut app, KeyCode::Enter).is_none());
    assert!(app.hotkeys.editor.is_some());

    press(&mut app, KeyCode::Tab);
    for _ in 0..2 {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::BackTab);
    type_str(&mut app, "x");
    assert!(press(&mut app, KeyCode::Enter).is_none());

    press(&mut app, KeyCode::Esc);
    assert!(app.hotkeys.editor.is_none());
    assert!(app.store.aliases().is_empty());
    assert_eq!(app.screen, Screen::Hotkeys);
}

#[test]
fn test_mouse_wheel_and_click() {
    let mut app = browser_app();
    let left = app.hotkeys.layout().left_inner;
    let right = app.hotkeys.layout().right_inner;
    let mouse = |kind, column, row| {
        Msg::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    };

    app.update(mouse(MouseEventKind::ScrollDown, right.x + 1, right.y));
    assert_eq!(app.hotkeys.item_cursor, 1);
    assert_eq!(app.hotkeys.category_index, 0);

    app.update(mouse(MouseEventKind::ScrollDown, left.x, left.y));
    assert_eq!(app.hotkeys.category_index, 1);
    assert_eq!(app.hotkeys.item_cursor, 0);

    let click = MouseEventKind::Down(MouseButton::Left);
    app.update(mouse(click, right.x, right.y + 3));
    assert_eq!(app.hotkeys.pane, Pane::Items);
    assert_eq!(app.hotkeys.item_cursor, 3);

    // Header row is not a list row
    app.update(mouse(click, left.x, 0));
    assert_eq!(app.hotkeys.category_index, 1);
    assert_eq!(app.hotkeys.item_cursor, 3);
}

#[test]
fn test_resize_reclamps_scroll() {
    let mut app = App::new(
        Box::new(TestCatalog {
            categories: (0..30)
                .map(|i| category(&format!("c{}", i), &["k"]))
                .collect(),
        }),
        &catalog(),
        FavoriteStore::in_memory("default"),
        true,
    );
    app.update(Msg::Resize(120, 40));
    app.open_browser(CatalogKind::Hotkeys, Screen::MainMenu);
    for _ in 0..29 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.hotkeys.category_scroll, 0);

    app.update(Msg::Resize(120, 10));
    let rows = app.hotkeys.layout().category_rows();
    assert_eq!(app.hotkeys.category_index, 29);
    assert_eq!(app.hotkeys.category_scroll, 30 - rows);
}

#[test]
fn test_browser_returns_to_opener() {
    let mut app = browser_app();
    app.goto(Screen::PostInstallMenu);
    app.open_browser(CatalogKind::Packages, Screen::PostInstallMenu);
    assert_eq!(app.screen, Screen::Manage);

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.screen, Screen::Help);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen, Screen::Manage);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen, Screen::PostInstallMenu);
}

#[test]
fn test_favorites_persist_to_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("favorites").join("default.json");
    let mut app = App::new(
        Box::new(catalog()),
        &catalog(),
        FavoriteStore::load_from(&path, "default"),
        true,
    );
    app.open_browser(CatalogKind::Hotkeys, Screen::MainMenu);
    press(&mut app, KeyCode::Right);
    let effect = press(&mut app, KeyCode::Char('f'));
    assert_eq!(effect, Some(Effect::PersistStore));
    app.store.save().expect("save");

    let reloaded = FavoriteStore::load_from(&path, "default");
    assert!(reloaded.is_favorite("git", "gs"));
}

#[test]
fn test_random_walk_keeps_cursor_visible() {
    // xorshift64 with a fixed seed so failures reproduce
    let mut seed: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move |bound: u64| {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed % bound
    };

    let keys: Vec<String> = (0..60).map(|i| format!("k{}", i)).collect();
    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    let mut store = FavoriteStore::in_memory("default");
    let mut browser = Browser::new(CatalogKind::Hotkeys, vec![category("big", &keys)]);
    let small = layout::compute(80, 14, layout::MIN_RIGHT_WIDTH, false);
    browser.sync(small, &store);
    browser.focus(Pane::Items, &store);

    for step in 0..3_000 {
        match next(10) {
            0..=2 => browser.move_item(next(11) as isize - 5, &store),
            3 | 4 => {
                let key = browser.selected_item(&store).map(|i| i.key.clone());
                if let Some(key) = key {
                    browser.toggle_favorite(&mut store, "big", &key);
                }
            }
            5 | 6 => {
                let digit = char::from(b'0' + next(10) as u8);
                browser.filter_push(digit, &store);
            }
            7 => browser.filter_pop(&store),
            8 => browser.toggle_favorites_only(&store),
            _ => {
                let height = 8 + next(24) as u16;
                let resized = layout::compute(80, height, layout::MIN_RIGHT_WIDTH, false);
                browser.sync(resized, &store);
            }
        }

        let count = browser.visible_items(&store).len();
        let rows = browser.layout().item_rows();
        let limit = max_scroll(count, rows);
        assert!(browser.item_cursor < count.max(1), "step {}", step);
        assert!(browser.item_scroll <= limit, "step {}", step);
        if count > 0 {
            let window = browser.item_scroll..browser.item_scroll + rows;
            assert!(window.contains(&browser.item_cursor), "step {}", step);
        }
    }
}
