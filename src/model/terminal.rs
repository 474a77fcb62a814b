//! Fake terminal: scrollback, input line, and the canned command grammar
//!
//! The terminal never touches a shell. Commands are matched against a small
//! grammar; anything unrecognized falls through to a canned chat responder
//! that does its best impression of being helpful.

use crate::content::{self, DocId, CONTACT_EMAIL};
use crate::theme;

/// Default height of the terminal panel in logical pixels
pub const TERMINAL_DEFAULT_HEIGHT: f32 = 220.0;

/// Scrollback cap; oldest lines are dropped past this
const MAX_SCROLLBACK: usize = 500;

/// How a scrollback line is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command, prompt included
    Command,
    Output,
    Error,
    /// Reply from the chat fallback
    Chat,
}

#[derive(Debug, Clone)]
pub struct TermLine {
    pub kind: LineKind,
    pub text: String,
}

/// Something a command asks the application to do
#[derive(Debug, Clone, PartialEq)]
pub enum TermAction {
    OpenDoc(DocId),
    ApplyTheme(String),
    CopyToClipboard(String),
    OpenUrl(String),
}

/// Terminal panel state
#[derive(Debug, Clone)]
pub struct TerminalState {
    pub open: bool,
    /// Whether keyboard input is routed to the prompt
    pub focused: bool,
    pub height_logical: f32,
    pub lines: Vec<TermLine>,
    pub input: String,
    /// Submitted commands, oldest first
    pub history: Vec<String>,
    /// Position while stepping through history; None = editing a fresh line
    history_cursor: Option<usize>,
    /// The fresh line stashed while history browsing
    draft: String,
    /// Lines scrolled up from the bottom
    pub scroll_offset: usize,
    /// Round-robin position in the chat reply pool
    chat_turn: usize,
}

impl TerminalState {
    pub fn new() -> Self {
        let mut term = Self {
            open: false,
            focused: false,
            height_logical: TERMINAL_DEFAULT_HEIGHT,
            lines: Vec::new(),
            input: String::new(),
            history: Vec::new(),
            history_cursor: None,
            draft: String::new(),
            scroll_offset: 0,
            chat_turn: 0,
        };
        term.push(LineKind::Output, "folio terminal — type `help` to start");
        term
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(TermLine {
            kind,
            text: text.into(),
        });
        if self.lines.len() > MAX_SCROLLBACK {
            let excess = self.lines.len() - MAX_SCROLLBACK;
            self.lines.drain(..excess);
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
        self.history_cursor = None;
    }

    pub fn delete_backward(&mut self) {
        self.input.pop();
    }

    pub fn clear_screen(&mut self) {
        self.lines.clear();
        self.scroll_offset = 0;
    }

    /// Step backwards through history (Up arrow)
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = match self.history_cursor {
            None => {
                self.draft = std::mem::take(&mut self.input);
                self.history.len() - 1
            }
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.history_cursor = Some(next);
        self.input = self.history[next].clone();
    }

    /// Step forwards through history (Down arrow); past the newest entry the
    /// stashed draft comes back
    pub fn history_next(&mut self) {
        match self.history_cursor {
            None => {}
            Some(i) if i + 1 < self.history.len() => {
                self.history_cursor = Some(i + 1);
                self.input = self.history[i + 1].clone();
            }
            Some(_) => {
                self.history_cursor = None;
                self.input = std::mem::take(&mut self.draft);
            }
        }
    }

    /// Submit the input line: echo it, record history, interpret, append the
    /// response, and return any app-level action it produced
    pub fn submit(&mut self) -> Option<TermAction> {
        let raw = std::mem::take(&mut self.input);
        self.history_cursor = None;
        self.scroll_offset = 0;

        let cmd = raw.trim().to_string();
        self.push(LineKind::Command, format!("❯ {}", cmd));
        if cmd.is_empty() {
            return None;
        }
        if self.history.last() != Some(&cmd) {
            self.history.push(cmd.clone());
        }

        let (lines, action) = self.interpret(&cmd);
        for line in lines {
            self.lines.push(line);
        }
        if self.lines.len() > MAX_SCROLLBACK {
            let excess = self.lines.len() - MAX_SCROLLBACK;
            self.lines.drain(..excess);
        }
        action
    }

    // ========================================================================
    // Grammar
    // ========================================================================

    fn interpret(&mut self, cmd: &str) -> (Vec<TermLine>, Option<TermAction>) {
        let mut parts = cmd.split_whitespace();
        let verb = parts.next().unwrap_or("");
        let rest: Vec<&str> = parts.collect();

        let out = |text: &str| TermLine {
            kind: LineKind::Output,
            text: text.to_string(),
        };
        let err = |text: String| TermLine {
            kind: LineKind::Error,
            text,
        };

        match verb {
            "help" => (
                HELP_TEXT.lines().map(out).collect(),
                None,
            ),
            "ls" => {
                let mut lines = Vec::new();
                for section in content::FILE_TREE {
                    lines.push(out(&format!("{}/", section.label)));
                    for id in section.doc_ids {
                        if let Some(doc) = content::document(id) {
                            lines.push(out(&format!("  {}", doc.title)));
                        }
                    }
                }
                (lines, None)
            }
            "cat" | "open" => {
                let Some(name) = rest.first() else {
                    return (vec![err(format!("usage: {} <file>", verb))], None);
                };
                let Some(doc) =
                    content::document(name).or_else(|| content::document_by_title(name))
                else {
                    return (
                        vec![err(format!("{}: no such file: {}", verb, name))],
                        None,
                    );
                };
                if verb == "open" {
                    (
                        vec![out(&format!("opening {}", doc.title))],
                        Some(TermAction::OpenDoc(doc.id)),
                    )
                } else {
                    (doc.body.lines().map(out).collect(), None)
                }
            }
            "themes" => {
                let mut lines = vec![out("built-in themes (try `theme <id>`):")];
                for builtin in theme::BUILTIN_THEMES {
                    lines.push(out(&format!("  {}", builtin.id)));
                }
                (lines, None)
            }
            "theme" => match rest.first() {
                Some(id) => (
                    Vec::new(),
                    Some(TermAction::ApplyTheme(id.to_string())),
                ),
                None => (vec![err("usage: theme <id>".to_string())], None),
            },
            "whoami" => (
                vec![
                    out("astrid v. klyver — systems developer"),
                    out("storage engines, wire protocols, performance forensics"),
                ],
                None,
            ),
            "contact" => {
                if rest.first() == Some(&"--copy") {
                    (
                        vec![out("email copied to clipboard")],
                        Some(TermAction::CopyToClipboard(CONTACT_EMAIL.to_string())),
                    )
                } else {
                    (
                        vec![
                            out(&format!("email:  {}", CONTACT_EMAIL)),
                            out("github: https://github.com/avklyver"),
                            out("(tip: `contact --copy` copies the email)"),
                        ],
                        None,
                    )
                }
            }
            "repo" => {
                let Some(name) = rest.first() else {
                    return (vec![err("usage: repo <project>".to_string())], None);
                };
                let doc = content::document(name)
                    .or_else(|| content::document_by_title(name))
                    .or_else(|| content::document(&format!("project-{}", name)));
                match doc.and_then(|d| d.repo_url) {
                    Some(url) => (
                        vec![out(&format!("opening {}", url))],
                        Some(TermAction::OpenUrl(url.to_string())),
                    ),
                    None => (
                        vec![err(format!("repo: no repository for: {}", name))],
                        None,
                    ),
                }
            }
            "echo" => (vec![out(&rest.join(" "))], None),
            "history" => (
                self.history
                    .iter()
                    .enumerate()
                    .map(|(i, h)| out(&format!("{:>3}  {}", i + 1, h)))
                    .collect(),
                None,
            ),
            "clear" => {
                self.clear_screen();
                (Vec::new(), None)
            }
            _ => (vec![self.chat_reply(cmd)], None),
        }
    }

    /// Canned chat fallback for anything the grammar does not recognize
    fn chat_reply(&mut self, input: &str) -> TermLine {
        let lower = input.to_lowercase();
        let text = if lower.contains("hire") || lower.contains("job") || lower.contains("work") {
            "Good instinct. `contact` has the details; response time is honest.".to_string()
        } else if lower.contains("rust") {
            "Yes, nearly everything here is Rust. `cat skills.json` for the rest.".to_string()
        } else if lower.contains("hello") || lower.contains("hi") {
            "Hello! Try `help` — I'm a small grammar wearing a chat costume.".to_string()
        } else {
            let reply = CHAT_POOL[self.chat_turn % CHAT_POOL.len()];
            self.chat_turn += 1;
            reply.to_string()
        };
        TermLine {
            kind: LineKind::Chat,
            text,
        }
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

const HELP_TEXT: &str = "commands:
  ls                 list the portfolio files
  cat <file>         print a file here
  open <file>        open a file in a tab
  theme <id>         switch theme    (see `themes`)
  themes             list built-in themes
  whoami             short bio
  contact [--copy]   how to reach me
  repo <project>     open a project's repository
  echo <text>        you know this one
  history            submitted commands
  clear              wipe the scrollback
anything else gets answered by a very small language model (a match statement)";

const CHAT_POOL: &[&str] = &[
    "I only really know `help`, but I appreciate the conversation.",
    "That's outside my grammar. The explorer on the left knows more.",
    "Interesting. Have you tried dragging a tab out of the strip?",
    "My training data is one match statement. Try `ls`?",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_file_is_an_error() {
        let mut term = TerminalState::new();
        term.input = "cat nope.txt".to_string();
        let action = term.submit();
        assert!(action.is_none());
        let last = term.lines.last().unwrap();
        assert_eq!(last.kind, LineKind::Error);
        assert!(last.text.contains("no such file"));
    }

    #[test]
    fn test_open_produces_action() {
        let mut term = TerminalState::new();
        term.input = "open about.md".to_string();
        assert_eq!(term.submit(), Some(TermAction::OpenDoc("about")));
    }

    #[test]
    fn test_clear_empties_scrollback() {
        let mut term = TerminalState::new();
        term.input = "ls".to_string();
        term.submit();
        assert!(!term.lines.is_empty());
        term.input = "clear".to_string();
        term.submit();
        assert!(term.lines.is_empty());
    }

    #[test]
    fn test_history_recall_round_trip() {
        let mut term = TerminalState::new();
        for cmd in ["ls", "whoami"] {
            term.input = cmd.to_string();
            term.submit();
        }
        term.input = "dra".to_string();
        term.history_prev();
        assert_eq!(term.input, "whoami");
        term.history_prev();
        assert_eq!(term.input, "ls");
        term.history_next();
        assert_eq!(term.input, "whoami");
        term.history_next();
        // Back past the newest entry restores the draft
        assert_eq!(term.input, "dra");
    }

    #[test]
    fn test_duplicate_history_entries_collapse() {
        let mut term = TerminalState::new();
        for _ in 0..3 {
            term.input = "ls".to_string();
            term.submit();
        }
        assert_eq!(term.history, vec!["ls".to_string()]);
    }

    #[test]
    fn test_chat_fallback_for_unknown_verbs() {
        let mut term = TerminalState::new();
        term.input = "frobnicate the splines".to_string();
        term.submit();
        assert_eq!(term.lines.last().unwrap().kind, LineKind::Chat);
    }

    #[test]
    fn test_theme_command_emits_action() {
        let mut term = TerminalState::new();
        term.input = "theme folio-light".to_string();
        assert_eq!(
            term.submit(),
            Some(TermAction::ApplyTheme("folio-light".to_string()))
        );
    }
}
