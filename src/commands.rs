//! Command types for the Elm-style architecture
//!
//! `Cmd` values represent side effects performed after an update.
//! `CommandId` and the static registry drive the command palette.

use crate::messages::{AppMsg, Msg, StripMsg, TerminalMsg, UiMsg, WindowMsg};
use crate::model::ui::ModalId;
use crate::{content, messages};

// ============================================================================
// Command Palette Registry
// ============================================================================

/// Identifies a command that can be executed via the command palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // Documents
    OpenHome,
    OpenAbout,
    OpenContact,
    OpenSkills,

    // Panels
    ToggleTerminal,
    ToggleExplorer,

    // Tabs and windows
    CloseTab,
    NextTab,
    PrevTab,
    FloatActiveTab,

    // Theme
    BrowseThemes,

    // Contact helpers
    CopyEmail,
    OpenGithub,

    // UI
    ShowCommandPalette,

    // Application
    Quit,
}

/// A command definition for the command palette
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub label: &'static str,
    pub keybinding: Option<&'static str>,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::OpenHome,
        label: "Go to README",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::OpenAbout,
        label: "Open About",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::OpenContact,
        label: "Open Contact",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::OpenSkills,
        label: "Open Skills",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::ToggleTerminal,
        label: "Toggle Terminal",
        keybinding: Some("Ctrl+`"),
    },
    CommandDef {
        id: CommandId::ToggleExplorer,
        label: "Toggle Explorer",
        keybinding: Some("Ctrl+B"),
    },
    CommandDef {
        id: CommandId::CloseTab,
        label: "Close Tab",
        keybinding: Some("Ctrl+W"),
    },
    CommandDef {
        id: CommandId::NextTab,
        label: "Next Tab",
        keybinding: Some("Ctrl+Tab"),
    },
    CommandDef {
        id: CommandId::PrevTab,
        label: "Previous Tab",
        keybinding: Some("Ctrl+Shift+Tab"),
    },
    CommandDef {
        id: CommandId::FloatActiveTab,
        label: "Float Active Tab",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::BrowseThemes,
        label: "Browse Themes...",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::CopyEmail,
        label: "Copy Email Address",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::OpenGithub,
        label: "Open GitHub Profile",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::ShowCommandPalette,
        label: "Command Palette",
        keybinding: Some("Ctrl+P"),
    },
    CommandDef {
        id: CommandId::Quit,
        label: "Quit",
        keybinding: Some("Ctrl+Q"),
    },
];

impl CommandId {
    /// Messages that execute this command, applied in order
    pub fn to_msgs(self) -> Vec<Msg> {
        match self {
            CommandId::OpenHome => vec![Msg::open_doc(content::HOME_DOC)],
            CommandId::OpenAbout => vec![Msg::open_doc("about")],
            CommandId::OpenContact => vec![Msg::open_doc("contact")],
            CommandId::OpenSkills => vec![Msg::open_doc("skills")],
            CommandId::ToggleTerminal => vec![Msg::Terminal(TerminalMsg::Toggle)],
            CommandId::ToggleExplorer => vec![Msg::Ui(UiMsg::ToggleExplorer)],
            CommandId::CloseTab => vec![Msg::Strip(StripMsg::CloseActiveTab)],
            CommandId::NextTab => vec![Msg::Strip(StripMsg::NextTab)],
            CommandId::PrevTab => vec![Msg::Strip(StripMsg::PrevTab)],
            CommandId::FloatActiveTab => vec![Msg::Window(WindowMsg::FloatActiveTab)],
            CommandId::BrowseThemes => vec![Msg::Ui(UiMsg::Modal(
                messages::ModalMsg::Open(ModalId::ThemeStore),
            ))],
            CommandId::CopyEmail => Vec::new(),
            CommandId::OpenGithub => Vec::new(),
            CommandId::ShowCommandPalette => vec![Msg::Ui(UiMsg::Modal(
                messages::ModalMsg::Open(ModalId::CommandPalette),
            ))],
            CommandId::Quit => vec![Msg::App(AppMsg::Quit)],
        }
    }

    /// Side effect for commands that bypass the message loop entirely
    pub fn direct_cmd(self) -> Option<Cmd> {
        match self {
            CommandId::CopyEmail => Some(Cmd::Batch(vec![
                Cmd::CopyToClipboard(content::CONTACT_EMAIL.to_string()),
                Cmd::Redraw,
            ])),
            CommandId::OpenGithub => {
                Some(Cmd::OpenUrl("https://github.com/avklyver".to_string()))
            }
            _ => None,
        }
    }
}

// ============================================================================
// Fuzzy Filtering
// ============================================================================

/// Score a fuzzy subsequence match of `query` against `target`.
///
/// Returns None when the query is not a subsequence. Higher scores for
/// consecutive matches, word starts, and string starts.
fn fuzzy_match_score(query: &str, target: &str) -> Option<i32> {
    let query_chars: Vec<char> = query.to_lowercase().chars().collect();
    let target_lower = target.to_lowercase();
    let target_chars: Vec<char> = target_lower.chars().collect();

    if query_chars.is_empty() {
        return Some(0);
    }

    let mut query_idx = 0;
    let mut score = 0;
    let mut prev_matched = false;
    let mut prev_was_separator = true; // Start of string counts as separator

    for (i, &tc) in target_chars.iter().enumerate() {
        let is_separator = tc == ' ' || tc == '_' || tc == '-' || tc == '.';

        if query_idx < query_chars.len() && tc == query_chars[query_idx] {
            score += 1;

            // Bonus for consecutive matches
            if prev_matched {
                score += 2;
            }

            // Bonus for matching at word start
            if prev_was_separator {
                score += 3;
            }

            // Bonus for matching at string start
            if i == 0 {
                score += 5;
            }

            query_idx += 1;
            prev_matched = true;
        } else {
            prev_matched = false;
        }

        prev_was_separator = is_separator;
    }

    // All query chars must be found
    if query_idx == query_chars.len() {
        Some(score)
    } else {
        None
    }
}

/// Filter the command registry by a palette query, best matches first.
/// An empty query returns everything in registry order.
pub fn filter_commands(query: &str) -> Vec<&'static CommandDef> {
    if query.is_empty() {
        return COMMANDS.iter().collect();
    }

    let mut matches: Vec<(&'static CommandDef, i32)> = COMMANDS
        .iter()
        .filter_map(|cmd| fuzzy_match_score(query, cmd.label).map(|score| (cmd, score)))
        .collect();

    // Sort by score descending (best matches first)
    matches.sort_by(|a, b| b.1.cmp(&a.1));

    matches.into_iter().map(|(cmd, _)| cmd).collect()
}

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Side effects the runtime performs after an update
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Put text on the system clipboard
    CopyToClipboard(String),
    /// Open a URL in the default browser
    OpenUrl(String),
    /// Persist the current config to disk
    SaveConfig,
    /// Request application exit
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::CopyToClipboard(_) => true,
            Cmd::OpenUrl(_) => false,
            Cmd::SaveConfig => false,
            Cmd::Quit => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}
