//! # Application Model
//!
//! [`App`] is the single root state object. It owns the current [`Screen`],
//! the wizard selections, the deep-dive configuration, the install session,
//! both browsers and the favorites store.
//!
//! ## Dispatch
//!
//! [`App::update`] consumes one [`Msg`] at a time and is the only code that
//! mutates the model. Key presses are routed through [`Screen::route`];
//! mouse events only matter on browser screens; ticks advance the animation
//! frame; install events update the session and pick the result screen.
//!
//! Side effects (spawning the installer, writing files) are returned as an
//! [`Effect`] for the runtime to execute.

use super::browser::{Browser, WheelDirection};
use super::deep_dive::DeepDiveConfig;
use super::event::{Effect, Msg};
use super::layout;
use super::screen::{Screen, ScreenLocal};
use super::theme::Theme;
use crate::catalog::{Catalog, CatalogKind, NavStyle};
use crate::favorites::FavoriteStore;
use crate::install::{InstallEvent, InstallRequest, InstallSession};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info, warn};

/// Ticks the intro animation plays before moving on by itself.
pub const INTRO_TICKS: u64 = 36;

pub struct App {
    pub screen: Screen,
    /// State owned by the active screen; rebuilt by [`App::goto`].
    pub local: ScreenLocal,
    pub width: u16,
    pub height: u16,
    /// Animation frame counter, advanced by every tick.
    pub frame: u64,

    pub theme_index: usize,
    pub nav_style: NavStyle,
    pub deep_dive: bool,
    pub deep_dive_config: DeepDiveConfig,

    pub install: InstallSession,

    pub hotkeys: Browser,
    pub manage: Browser,
    pub store: FavoriteStore,
    hotkey_catalog: Box<dyn Catalog>,

    /// Where Help, About and `QuitConfirm` return to.
    pub overlay_return: Screen,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        hotkey_catalog: Box<dyn Catalog>,
        package_catalog: &dyn Catalog,
        store: FavoriteStore,
        skip_intro: bool,
    ) -> Self {
        let nav_style = NavStyle::default();
        let hotkeys = Browser::new(CatalogKind::Hotkeys, hotkey_catalog.categories(nav_style));
        let manage = Browser::new(CatalogKind::Packages, package_catalog.categories(nav_style));
        let screen = if skip_intro {
            Screen::Welcome
        } else {
            Screen::Intro
        };

        let mut app = Self {
            screen,
            local: ScreenLocal::None,
            width: 80,
            height: 24,
            frame: 0,
            theme_index: 0,
            nav_style,
            deep_dive: false,
            deep_dive_config: DeepDiveConfig::new(),
            install: InstallSession::new(),
            hotkeys,
            manage,
            store,
            hotkey_catalog,
            overlay_return: Screen::MainMenu,
            should_quit: false,
        };
        app.local = ScreenLocal::for_screen(screen, &app);
        app.prepare_frame();
        app
    }

    /// Preselect a theme by id (unknown ids are ignored).
    pub fn with_theme(mut self, id: Option<&str>) -> Self {
        if let Some(index) = id.and_then(Theme::index_of) {
            self.theme_index = index;
        }
        self
    }

    pub fn theme(&self) -> &'static Theme {
        Theme::at(self.theme_index)
    }

    /// Process one message. This is the only mutator of the model.
    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Key(key) => self.on_key(key),
            Msg::Mouse(mouse) => {
                self.on_mouse(mouse);
                None
            }
            Msg::Resize(width, height) => {
                self.width = width;
                self.height = height;
                self.prepare_frame();
                None
            }
            Msg::Tick => {
                self.on_tick();
                None
            }
            Msg::Install(event) => self.on_install_event(event),
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!(screen = ?self.screen, "interrupt, quitting");
            self.should_quit = true;
            return None;
        }
        (self.screen.route().handle)(self, key)
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        let Some(kind) = self.browser_kind() else {
            return;
        };
        let (browser, store) = self.browser_parts(kind);
        if browser.editor.is_some() {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                browser.handle_wheel(WheelDirection::Up, mouse.column, store);
            }
            MouseEventKind::ScrollDown => {
                browser.handle_wheel(WheelDirection::Down, mouse.column, store);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                browser.handle_click(mouse.column, mouse.row, store);
            }
            _ => {}
        }
    }

    fn on_tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if let ScreenLocal::Intro { started_at } = self.local {
            if self.frame.saturating_sub(started_at) >= INTRO_TICKS {
                self.goto(Screen::Welcome);
            }
        }
    }

    fn on_install_event(&mut self, event: InstallEvent) -> Option<Effect> {
        match event {
            InstallEvent::Output(line) => {
                self.install.push_line(line);
                None
            }
            InstallEvent::Done(result) => {
                if !self.install.is_running() {
                    warn!("completion received with no install running");
                    return None;
                }
                let ok = result.is_ok();
                match &result {
                    Ok(()) => info!(
                        steps = self.install.steps_done(),
                        elapsed = ?self.install.elapsed(),
                        "install finished"
                    ),
                    Err(e) => warn!(error = %e, "install failed"),
                }
                self.install.finish(result);
                if self.screen == Screen::Installing {
                    self.goto(if ok {
                        Screen::InstallComplete
                    } else {
                        Screen::InstallError
                    });
                }
                ok.then_some(Effect::PersistConfig)
            }
        }
    }

    /// Recompute the browser layout for the current size and restore every
    /// browser invariant. Called before each draw.
    pub fn prepare_frame(&mut self) {
        let layout = layout::compute(self.width, self.height, layout::MIN_RIGHT_WIDTH, true);
        self.hotkeys.sync(layout, &self.store);
        self.manage.sync(layout, &self.store);
    }

    /// Switch screens, rebuilding the screen-local state.
    pub fn goto(&mut self, screen: Screen) {
        debug!(from = ?self.screen, to = ?screen, "transition");
        self.local = ScreenLocal::for_screen(screen, self);
        self.screen = screen;
    }

    /// Open Help, About or `QuitConfirm` over the current screen.
    pub fn open_overlay(&mut self, overlay: Screen) {
        if !self.screen.is_overlay() {
            self.overlay_return = self.screen;
        }
        self.goto(overlay);
    }

    pub fn close_overlay(&mut self) {
        self.goto(self.overlay_return);
    }

    /// Open a browser that returns to `return_screen` on Esc.
    pub fn open_browser(&mut self, kind: CatalogKind, return_screen: Screen) {
        let (browser, store) = self.browser_parts(kind);
        browser.open(return_screen, store);
        self.goto(match kind {
            CatalogKind::Hotkeys => Screen::Hotkeys,
            CatalogKind::Packages => Screen::Manage,
        });
    }

    /// Catalog shown on the current screen, when it is a browser.
    pub fn browser_kind(&self) -> Option<CatalogKind> {
        match self.screen {
            Screen::Hotkeys => Some(CatalogKind::Hotkeys),
            Screen::Manage => Some(CatalogKind::Packages),
            _ => None,
        }
    }

    pub fn browser(&self, kind: CatalogKind) -> &Browser {
        match kind {
            CatalogKind::Hotkeys => &self.hotkeys,
            CatalogKind::Packages => &self.manage,
        }
    }

    /// A browser together with the store it annotates.
    pub fn browser_parts(&mut self, kind: CatalogKind) -> (&mut Browser, &mut FavoriteStore) {
        let browser = match kind {
            CatalogKind::Hotkeys => &mut self.hotkeys,
            CatalogKind::Packages => &mut self.manage,
        };
        (browser, &mut self.store)
    }

    /// Change the navigation style and reload the style-dependent hotkeys.
    pub fn set_nav_style(&mut self, style: NavStyle) {
        if style == self.nav_style {
            return;
        }
        self.nav_style = style;
        let categories = self.hotkey_catalog.categories(style);
        self.hotkeys.set_categories(categories, &self.store);
    }

    pub fn install_request(&self) -> InstallRequest {
        InstallRequest {
            theme: self.theme().id.to_string(),
            nav_style: self.nav_style,
            deep_dive: self.deep_dive,
            options: self.deep_dive_config.options(),
        }
    }

    /// Begin an installation. A no-op while one is already running.
    pub fn request_install(&mut self) -> Option<Effect> {
        if !self.install.start() {
            debug!("install already running, ignoring request");
            return None;
        }
        let request = self.install_request();
        info!(
            theme = %request.theme,
            style = request.nav_style.id(),
            deep_dive = request.deep_dive,
            "starting install"
        );
        self.goto(Screen::Installing);
        Some(Effect::StartInstall(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Item};
    use crate::error::InstallError;
    use crate::install::OutputLine;

    struct FixedCatalog;

    impl Catalog for FixedCatalog {
        fn categories(&self, style: NavStyle) -> Vec<Category> {
            vec![Category {
                id: "nav".to_string(),
                name: style.id().to_string(),
                icon: String::new(),
                items: vec![Item::new("x", "y")],
            }]
        }
    }

    fn app() -> App {
        App::new(
            Box::new(FixedCatalog),
            &FixedCatalog,
            FavoriteStore::in_memory("default"),
            true,
        )
    }

    #[test]
    fn test_intro_auto_advances() {
        let mut app = App::new(
            Box::new(FixedCatalog),
            &FixedCatalog,
            FavoriteStore::in_memory("default"),
            false,
        );
        assert_eq!(app.screen, Screen::Intro);
        for _ in 0..INTRO_TICKS - 1 {
            app.update(Msg::Tick);
        }
        assert_eq!(app.screen, Screen::Intro);
        app.update(Msg::Tick);
        assert_eq!(app.screen, Screen::Welcome);
    }

    #[test]
    fn test_second_install_request_is_noop() {
        let mut app = app();
        assert!(matches!(
            app.request_install(),
            Some(Effect::StartInstall(_))
        ));
        app.update(Msg::Install(InstallEvent::Output(OutputLine::plain("one"))));

        app.goto(Screen::ConfirmInstall);
        assert!(app.request_install().is_none());
        assert_eq!(app.install.line_count(), 1);
        assert!(app.install.is_running());
    }

    #[test]
    fn test_done_routes_to_result_screen() {
        let mut app = app();
        app.request_install();
        let failed = InstallEvent::Done(Err(InstallError::ExitCode(2)));
        let effect = app.update(Msg::Install(failed));
        assert!(effect.is_none());
        assert_eq!(app.screen, Screen::InstallError);

        app.request_install();
        let effect = app.update(Msg::Install(InstallEvent::Done(Ok(()))));
        assert_eq!(effect, Some(Effect::PersistConfig));
        assert_eq!(app.screen, Screen::InstallComplete);
    }

    #[test]
    fn test_nav_style_reloads_hotkeys() {
        let mut app = app();
        app.set_nav_style(NavStyle::Emacs);
        assert_eq!(app.hotkeys.categories()[0].name, "emacs");
    }

    #[test]
    fn test_with_theme_preselects() {
        let app = app().with_theme(Some("nord"));
        assert_eq!(app.theme().id, "nord");
        let app = app.with_theme(Some("missing"));
        assert_eq!(app.theme().id, "nord");
    }
}
