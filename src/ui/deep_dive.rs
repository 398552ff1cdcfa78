//! Deep-dive configuration.
//!
//! Each tool has a small, fixed form of option fields, each field a list of
//! choices. [`DeepDiveConfig`] stores the chosen index per field and is only
//! edited while the matching tool screen is active.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tool {
    Shell,
    Prompt,
    Editor,
    Terminal,
    Multiplexer,
    Git,
    FileManager,
    Fonts,
    CliTools,
    Runtimes,
    Containers,
    Ssh,
}

/// One option of a tool form.
#[derive(Debug)]
pub struct ToolField {
    pub key: &'static str,
    pub label: &'static str,
    pub choices: &'static [&'static str],
}

const YES_NO: &[&str] = &["yes", "no"];
const NO_YES: &[&str] = &["no", "yes"];

static SHELL_FIELDS: [ToolField; 3] = [
    ToolField {
        key: "default",
        label: "Default shell",
        choices: &["zsh", "fish", "bash"],
    },
    ToolField {
        key: "plugins",
        label: "Plugin manager",
        choices: &["zinit", "antidote", "none"],
    },
    ToolField {
        key: "history",
        label: "Shared history",
        choices: YES_NO,
    },
];

static PROMPT_FIELDS: [ToolField; 2] = [
    ToolField {
        key: "engine",
        label: "Prompt",
        choices: &["starship", "oh-my-posh", "pure"],
    },
    ToolField {
        key: "layout",
        label: "Layout",
        choices: &["two-line", "single-line"],
    },
];

static EDITOR_FIELDS: [ToolField; 3] = [
    ToolField {
        key: "editor",
        label: "Editor",
        choices: &["neovim", "helix", "emacs", "vscode"],
    },
    ToolField {
        key: "lsp",
        label: "Language servers",
        choices: YES_NO,
    },
    ToolField {
        key: "distro",
        label: "Config base",
        choices: &["minimal", "lazyvim", "none"],
    },
];

static TERMINAL_FIELDS: [ToolField; 2] = [
    ToolField {
        key: "emulator",
        label: "Emulator",
        choices: &["wezterm", "kitty", "alacritty", "ghostty"],
    },
    ToolField {
        key: "font_size",
        label: "Font size",
        choices: &["13", "14", "15", "12"],
    },
];

static MULTIPLEXER_FIELDS: [ToolField; 2] = [
    ToolField {
        key: "tool",
        label: "Multiplexer",
        choices: &["tmux", "zellij", "none"],
    },
    ToolField {
        key: "prefix",
        label: "Prefix key",
        choices: &["C-a", "C-b", "C-space"],
    },
];

static GIT_FIELDS: [ToolField; 3] = [
    ToolField {
        key: "pager",
        label: "Diff pager",
        choices: &["delta", "diff-so-fancy", "less"],
    },
    ToolField {
        key: "tui",
        label: "Git TUI",
        choices: &["lazygit", "gitui", "none"],
    },
    ToolField {
        key: "sign",
        label: "Sign commits",
        choices: NO_YES,
    },
];

static FILE_MANAGER_FIELDS: [ToolField; 1] = [ToolField {
    key: "tool",
    label: "File manager",
    choices: &["yazi", "lf", "ranger", "none"],
}];

static FONT_FIELDS: [ToolField; 2] = [
    ToolField {
        key: "family",
        label: "Nerd font",
        choices: &["JetBrainsMono", "FiraCode", "Hack", "Iosevka"],
    },
    ToolField {
        key: "ligatures",
        label: "Ligatures",
        choices: YES_NO,
    },
];

static CLI_TOOL_FIELDS: [ToolField; 3] = [
    ToolField {
        key: "finder",
        label: "Fuzzy finder",
        choices: &["fzf", "skim"],
    },
    ToolField {
        key: "ls",
        label: "ls replacement",
        choices: &["eza", "lsd", "none"],
    },
    ToolField {
        key: "cat",
        label: "cat replacement",
        choices: &["bat", "none"],
    },
];

static RUNTIME_FIELDS: [ToolField; 2] = [
    ToolField {
        key: "manager",
        label: "Version manager",
        choices: &["mise", "asdf", "none"],
    },
    ToolField {
        key: "node",
        label: "Install Node.js",
        choices: YES_NO,
    },
];

static CONTAINER_FIELDS: [ToolField; 2] = [
    ToolField {
        key: "engine",
        label: "Engine",
        choices: &["docker", "podman", "none"],
    },
    ToolField {
        key: "tui",
        label: "Container TUI",
        choices: &["lazydocker", "none"],
    },
];

static SSH_FIELDS: [ToolField; 2] = [
    ToolField {
        key: "key_type",
        label: "Key type",
        choices: &["ed25519", "rsa", "skip"],
    },
    ToolField {
        key: "agent",
        label: "Use agent",
        choices: YES_NO,
    },
];

impl Tool {
    pub const ALL: [Tool; 12] = [
        Tool::Shell,
        Tool::Prompt,
        Tool::Editor,
        Tool::Terminal,
        Tool::Multiplexer,
        Tool::Git,
        Tool::FileManager,
        Tool::Fonts,
        Tool::CliTools,
        Tool::Runtimes,
        Tool::Containers,
        Tool::Ssh,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tool::Shell => "shell",
            Tool::Prompt => "prompt",
            Tool::Editor => "editor",
            Tool::Terminal => "terminal",
            Tool::Multiplexer => "multiplexer",
            Tool::Git => "git",
            Tool::FileManager => "file_manager",
            Tool::Fonts => "fonts",
            Tool::CliTools => "cli_tools",
            Tool::Runtimes => "runtimes",
            Tool::Containers => "containers",
            Tool::Ssh => "ssh",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Shell => "Shell",
            Tool::Prompt => "Prompt",
            Tool::Editor => "Editor",
            Tool::Terminal => "Terminal emulator",
            Tool::Multiplexer => "Multiplexer",
            Tool::Git => "Git",
            Tool::FileManager => "File manager",
            Tool::Fonts => "Fonts",
            Tool::CliTools => "CLI tools",
            Tool::Runtimes => "Language runtimes",
            Tool::Containers => "Containers",
            Tool::Ssh => "SSH",
        }
    }

    pub fn fields(self) -> &'static [ToolField] {
        match self {
            Tool::Shell => &SHELL_FIELDS,
            Tool::Prompt => &PROMPT_FIELDS,
            Tool::Editor => &EDITOR_FIELDS,
            Tool::Terminal => &TERMINAL_FIELDS,
            Tool::Multiplexer => &MULTIPLEXER_FIELDS,
            Tool::Git => &GIT_FIELDS,
            Tool::FileManager => &FILE_MANAGER_FIELDS,
            Tool::Fonts => &FONT_FIELDS,
            Tool::CliTools => &CLI_TOOL_FIELDS,
            Tool::Runtimes => &RUNTIME_FIELDS,
            Tool::Containers => &CONTAINER_FIELDS,
            Tool::Ssh => &SSH_FIELDS,
        }
    }
}

/// Chosen option indices for every tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepDiveConfig {
    choices: BTreeMap<Tool, Vec<usize>>,
}

impl Default for DeepDiveConfig {
    fn default() -> Self {
        let choices = Tool::ALL
            .iter()
            .map(|&tool| (tool, vec![0; tool.fields().len()]))
            .collect();
        Self { choices }
    }
}

impl DeepDiveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the chosen value for `field` (0 when out of range).
    pub fn choice(&self, tool: Tool, field: usize) -> usize {
        self.choices
            .get(&tool)
            .and_then(|fields| fields.get(field))
            .copied()
            .unwrap_or(0)
    }

    pub fn value(&self, tool: Tool, field: usize) -> Option<&'static str> {
        let def = tool.fields().get(field)?;
        def.choices.get(self.choice(tool, field)).copied()
    }

    /// Move the choice of `field` by `delta`, wrapping around.
    pub fn cycle(&mut self, tool: Tool, field: usize, delta: isize) {
        let Some(def) = tool.fields().get(field) else {
            return;
        };
        let len = def.choices.len() as isize;
        if len == 0 {
            return;
        }
        let Some(slot) = self.choices.get_mut(&tool).and_then(|f| f.get_mut(field)) else {
            return;
        };
        *slot = (*slot as isize + delta).rem_euclid(len) as usize;
    }

    /// Whether any option of `tool` differs from its default.
    pub fn is_customized(&self, tool: Tool) -> bool {
        self.choices
            .get(&tool)
            .is_some_and(|fields| fields.iter().any(|&c| c != 0))
    }

    /// `(tool.field, value)` pairs for every option, in tool order.
    pub fn options(&self) -> Vec<(String, String)> {
        Tool::ALL
            .iter()
            .flat_map(|&tool| {
                let fields = tool.fields().iter().enumerate();
                fields.filter_map(move |(i, def)| {
                    let value = self.value(tool, i)?;
                    Some((format!("{}.{}", tool.id(), def.key), value.to_string()))
                })
            })
            .collect()
    }
}
