//! # Themes
//!
//! The color themes offered on the theme screen. The chosen theme's `id` is
//! handed to the setup script (which applies it to the installed tools) and
//! the same palette styles the wizard itself, so the user sees a preview
//! while choosing.

use ratatui::style::Color;

/// Colors used by the wizard, grouped by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Stable identifier passed to the setup script and stored in the config.
    pub id: &'static str,
    /// Name shown in the picker.
    pub name: &'static str,
    pub bg: Color,
    pub fg: Color,
    /// Hints, separators, footer text.
    pub muted: Color,
    /// Focused borders and the selected row.
    pub accent: Color,
    /// Favorites, filter text, step markers.
    pub highlight: Color,
    pub success: Color,
    pub error: Color,
    /// Background of unfocused selections.
    pub surface: Color,
}

impl Theme {
    /// All themes in picker order.
    pub fn all() -> &'static [Theme] {
        &THEMES
    }

    pub fn by_id(id: &str) -> Option<&'static Theme> {
        THEMES.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Picker position of `id`, if it names a theme.
    pub fn index_of(id: &str) -> Option<usize> {
        THEMES.iter().position(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Theme at `index`, falling back to the first one.
    pub fn at(index: usize) -> &'static Theme {
        THEMES.get(index).unwrap_or(&THEMES[0])
    }
}

static THEMES: [Theme; 8] = [
    Theme {
        id: "catppuccin-mocha",
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),
        fg: Color::Rgb(205, 214, 244),
        muted: Color::Rgb(108, 112, 134),
        accent: Color::Rgb(137, 180, 250),
        highlight: Color::Rgb(249, 226, 175),
        success: Color::Rgb(166, 227, 161),
        error: Color::Rgb(243, 139, 168),
        surface: Color::Rgb(69, 71, 90),
    },
    Theme {
        id: "catppuccin-latte",
        name: "Catppuccin Latte",
        bg: Color::Rgb(239, 241, 245),
        fg: Color::Rgb(76, 79, 105),
        muted: Color::Rgb(156, 160, 176),
        accent: Color::Rgb(30, 102, 245),
        highlight: Color::Rgb(223, 142, 29),
        success: Color::Rgb(64, 160, 43),
        error: Color::Rgb(210, 15, 57),
        surface: Color::Rgb(204, 208, 218),
    },
    Theme {
        id: "dracula",
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        muted: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249),
        highlight: Color::Rgb(241, 250, 140),
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        surface: Color::Rgb(68, 71, 90),
    },
    Theme {
        id: "nord",
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        muted: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),
        highlight: Color::Rgb(235, 203, 139),
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        surface: Color::Rgb(67, 76, 94),
    },
    Theme {
        id: "tokyo-night",
        name: "Tokyo Night",
        bg: Color::Rgb(26, 27, 38),
        fg: Color::Rgb(169, 177, 214),
        muted: Color::Rgb(86, 95, 137),
        accent: Color::Rgb(122, 162, 247),
        highlight: Color::Rgb(224, 175, 104),
        success: Color::Rgb(158, 206, 106),
        error: Color::Rgb(247, 118, 142),
        surface: Color::Rgb(41, 46, 66),
    },
    Theme {
        id: "gruvbox",
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        muted: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),
        highlight: Color::Rgb(250, 189, 47),
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        surface: Color::Rgb(80, 73, 69),
    },
    Theme {
        id: "solarized-dark",
        name: "Solarized Dark",
        bg: Color::Rgb(0, 43, 54),
        fg: Color::Rgb(131, 148, 150),
        muted: Color::Rgb(88, 110, 117),
        accent: Color::Rgb(38, 139, 210),
        highlight: Color::Rgb(181, 137, 0),
        success: Color::Rgb(133, 153, 0),
        error: Color::Rgb(220, 50, 47),
        surface: Color::Rgb(7, 54, 66),
    },
    Theme {
        id: "rose-pine",
        name: "Rose Pine",
        bg: Color::Rgb(25, 23, 36),
        fg: Color::Rgb(224, 222, 244),
        muted: Color::Rgb(110, 106, 134),
        accent: Color::Rgb(196, 167, 231),
        highlight: Color::Rgb(246, 193, 119),
        success: Color::Rgb(156, 207, 216),
        error: Color::Rgb(235, 111, 146),
        surface: Color::Rgb(38, 35, 58),
    },
];
