use super::{Category, Item, NavStyle};

fn category(id: &str, name: &str, icon: &str, items: &[(&str, &str)]) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        items: items.iter().map(|(k, d)| Item::new(*k, *d)).collect(),
    }
}

pub(super) fn hotkeys(style: NavStyle) -> Vec<Category> {
    let shell: &[(&str, &str)] = match style {
        NavStyle::Vim => &[
            ("Esc", "Enter normal mode on the command line"),
            ("v", "Edit the current command in $EDITOR"),
            ("k / j", "Walk command history"),
            ("Ctrl+r", "Fuzzy search history (fzf)"),
            ("Ctrl+t", "Insert a file path (fzf)"),
            ("Alt+c", "cd into a directory (fzf)"),
        ],
        NavStyle::Emacs => &[
            ("Ctrl+a / Ctrl+e", "Jump to start / end of line"),
            ("Alt+b / Alt+f", "Move one word back / forward"),
            ("Ctrl+k", "Kill to end of line"),
            ("Ctrl+y", "Yank the last kill"),
            ("Ctrl+r", "Fuzzy search history (fzf)"),
            ("Ctrl+x Ctrl+e", "Edit the current command in $EDITOR"),
        ],
        NavStyle::Arrows => &[
            ("Up / Down", "Walk command history"),
            ("Ctrl+Left / Ctrl+Right", "Move one word"),
            ("Home / End", "Jump to start / end of line"),
            ("Ctrl+r", "Fuzzy search history (fzf)"),
            ("Ctrl+t", "Insert a file path (fzf)"),
        ],
    };

    let tmux: &[(&str, &str)] = match style {
        NavStyle::Vim => &[
            ("prefix + h/j/k/l", "Move between panes"),
            ("prefix + H/J/K/L", "Resize the current pane"),
            ("prefix + [", "Copy mode (vi keys)"),
            ("v / y", "Begin selection / yank in copy mode"),
            ("prefix + |", "Split vertically"),
            ("prefix + -", "Split horizontally"),
            ("prefix + c", "New window"),
        ],
        NavStyle::Emacs => &[
            ("prefix + o", "Cycle panes"),
            ("prefix + Alt+arrows", "Resize the current pane"),
            ("prefix + [", "Copy mode (emacs keys)"),
            ("Ctrl+Space / Alt+w", "Begin selection / copy in copy mode"),
            ("prefix + %", "Split vertically"),
            ("prefix + \"", "Split horizontally"),
            ("prefix + c", "New window"),
        ],
        NavStyle::Arrows => &[
            ("prefix + arrows", "Move between panes"),
            ("prefix + Ctrl+arrows", "Resize the current pane"),
            ("prefix + [", "Copy mode"),
            ("prefix + %", "Split vertically"),
            ("prefix + \"", "Split horizontally"),
            ("prefix + c", "New window"),
        ],
    };

    let editor: &[(&str, &str)] = match style {
        NavStyle::Vim => &[
            ("Space f f", "Find files"),
            ("Space f g", "Live grep"),
            ("Space e", "Toggle file explorer"),
            ("g d", "Go to definition"),
            ("K", "Hover documentation"),
            ("Space c a", "Code actions"),
        ],
        NavStyle::Emacs => &[
            ("Ctrl+x Ctrl+f", "Find file"),
            ("Ctrl+s", "Incremental search"),
            ("Alt+.", "Go to definition"),
            ("Ctrl+x b", "Switch buffer"),
            ("Ctrl+x Ctrl+s", "Save buffer"),
        ],
        NavStyle::Arrows => &[
            ("Ctrl+p", "Find files"),
            ("Ctrl+Shift+f", "Search in project"),
            ("F12", "Go to definition"),
            ("Ctrl+s", "Save file"),
            ("Ctrl+/", "Toggle comment"),
        ],
    };

    vec![
        category("shell", "Shell", "🐚", shell),
        category("tmux", "Tmux", "🪟", tmux),
        category("editor", "Editor", "📝", editor),
        category(
            "git",
            "Git aliases",
            "🌿",
            &[
                ("gst", "git status"),
                ("gco", "git checkout"),
                ("gcm", "git commit -m"),
                ("glg", "git log --graph --oneline"),
                ("gp", "git push"),
                ("lg", "Open lazygit"),
            ],
        ),
        category(
            "terminal",
            "Terminal",
            "💻",
            &[
                ("Ctrl+Shift+t", "New tab"),
                ("Ctrl+Shift+Enter", "New split"),
                ("Ctrl+Shift+c / v", "Copy / paste"),
                ("Ctrl+= / Ctrl+-", "Zoom in / out"),
            ],
        ),
    ]
}

pub(super) fn packages() -> Vec<Category> {
    vec![
        category(
            "core",
            "Core utilities",
            "🧰",
            &[
                ("git", "Distributed version control"),
                ("curl", "Transfer data from URLs"),
                ("stow", "Symlink farm manager for the dotfiles"),
                ("jq", "Command-line JSON processor"),
            ],
        ),
        category(
            "shell",
            "Shell",
            "🐚",
            &[
                ("zsh", "Z shell"),
                ("starship", "Cross-shell prompt"),
                ("zoxide", "Smarter cd"),
                ("fzf", "Fuzzy finder"),
                ("atuin", "Shell history sync"),
            ],
        ),
        category(
            "modern-cli",
            "Modern CLI",
            "⚡",
            &[
                ("ripgrep", "Fast recursive grep"),
                ("fd", "Fast find replacement"),
                ("bat", "cat with syntax highlighting"),
                ("eza", "Modern ls"),
                ("btop", "Resource monitor"),
                ("delta", "Syntax-highlighting pager for git"),
            ],
        ),
        category(
            "editors",
            "Editors",
            "📝",
            &[
                ("neovim", "Hyperextensible Vim-based editor"),
                ("helix", "Post-modern modal editor"),
                ("emacs", "The extensible editor"),
            ],
        ),
        category(
            "terminal",
            "Terminal",
            "💻",
            &[
                ("tmux", "Terminal multiplexer"),
                ("zellij", "Terminal workspace"),
                ("wezterm", "GPU-accelerated terminal"),
                ("alacritty", "OpenGL terminal emulator"),
            ],
        ),
        category(
            "dev",
            "Development",
            "🛠️",
            &[
                ("mise", "Runtime version manager"),
                ("lazygit", "Terminal UI for git"),
                ("gh", "GitHub CLI"),
                ("docker", "Container runtime"),
            ],
        ),
        category(
            "fonts",
            "Fonts",
            "🔤",
            &[
                ("jetbrains-mono-nerd", "JetBrains Mono Nerd Font"),
                ("fira-code-nerd", "Fira Code Nerd Font"),
                ("iosevka", "Iosevka"),
            ],
        ),
    ]
}
