//! Tests for the terminal panel: grammar, history, and routing of command
//! actions into the app

mod common;

use common::test_model;
use folio::commands::Cmd;
use folio::messages::{Msg, TerminalMsg};
use folio::model::{LineKind, ToastLevel};
use folio::update::update;

fn type_line(model: &mut folio::model::AppModel, line: &str) -> Option<Cmd> {
    for ch in line.chars() {
        update(model, Msg::Terminal(TerminalMsg::InsertChar(ch)));
    }
    update(model, Msg::Terminal(TerminalMsg::Submit))
}

#[test]
fn test_toggle_tracks_config() {
    let mut model = test_model();
    assert!(!model.terminal.open);
    update(&mut model, Msg::Terminal(TerminalMsg::Toggle));
    assert!(model.terminal.open);
    assert!(model.config.terminal_open);
    update(&mut model, Msg::Terminal(TerminalMsg::Toggle));
    assert!(!model.config.terminal_open);
}

#[test]
fn test_open_command_opens_tab() {
    let mut model = test_model();
    type_line(&mut model, "open about.md");
    assert!(model.workbench.tabs.contains(&"about"));
    assert_eq!(model.workbench.active, "about");
}

#[test]
fn test_theme_command_switches_theme() {
    let mut model = test_model();
    type_line(&mut model, "theme folio-light");
    assert_eq!(model.theme.name, "Folio Light");
    assert_eq!(model.config.theme, "folio-light");
}

#[test]
fn test_unknown_theme_shows_error_toast() {
    let mut model = test_model();
    let before = model.theme.name.clone();
    type_line(&mut model, "theme neon-mistake");
    assert_eq!(model.theme.name, before);
    assert!(model
        .ui
        .toasts
        .iter()
        .any(|t| t.level == ToastLevel::Error));
}

#[test]
fn test_contact_copy_returns_clipboard_cmd() {
    let mut model = test_model();
    let cmd = type_line(&mut model, "contact --copy");
    let Some(Cmd::Batch(cmds)) = cmd else {
        panic!("expected batch, got {:?}", cmd);
    };
    assert!(cmds
        .iter()
        .any(|c| matches!(c, Cmd::CopyToClipboard(text) if text.contains('@'))));
}

#[test]
fn test_cat_prints_document_body() {
    let mut model = test_model();
    type_line(&mut model, "cat skills.json");
    let joined: String = model
        .terminal
        .lines
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    assert!(joined.contains("storage engines"));
}

#[test]
fn test_scroll_clamps_to_scrollback() {
    let mut model = test_model();
    type_line(&mut model, "ls");
    let lines = model.terminal.lines.len();

    update(&mut model, Msg::Terminal(TerminalMsg::Scroll(9999)));
    assert_eq!(model.terminal.scroll_offset, lines);
    update(&mut model, Msg::Terminal(TerminalMsg::Scroll(-9999)));
    assert_eq!(model.terminal.scroll_offset, 0);
}

#[test]
fn test_submit_resets_scroll() {
    let mut model = test_model();
    type_line(&mut model, "ls");
    update(&mut model, Msg::Terminal(TerminalMsg::Scroll(5)));
    type_line(&mut model, "whoami");
    assert_eq!(model.terminal.scroll_offset, 0);
}

#[test]
fn test_history_navigation_via_messages() {
    let mut model = test_model();
    type_line(&mut model, "ls");
    type_line(&mut model, "whoami");

    update(&mut model, Msg::Terminal(TerminalMsg::HistoryPrev));
    assert_eq!(model.terminal.input, "whoami");
    update(&mut model, Msg::Terminal(TerminalMsg::HistoryPrev));
    assert_eq!(model.terminal.input, "ls");
    update(&mut model, Msg::Terminal(TerminalMsg::HistoryNext));
    assert_eq!(model.terminal.input, "whoami");
}

#[test]
fn test_chat_fallback_answers_smalltalk() {
    let mut model = test_model();
    type_line(&mut model, "hello there");
    assert_eq!(model.terminal.lines.last().unwrap().kind, LineKind::Chat);
}

#[test]
fn test_repo_command_returns_open_url() {
    let mut model = test_model();
    let cmd = type_line(&mut model, "repo atlas.rs");
    let Some(Cmd::Batch(cmds)) = cmd else {
        panic!("expected batch");
    };
    assert!(cmds
        .iter()
        .any(|c| matches!(c, Cmd::OpenUrl(url) if url.contains("github.com"))));
}
