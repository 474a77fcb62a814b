//! Theme update handlers

use crate::commands::Cmd;
use crate::messages::ThemeMsg;
use crate::model::{AppModel, ToastLevel};
use crate::theme::load_theme;

/// Update function for theme messages
pub fn update_theme(model: &mut AppModel, msg: ThemeMsg) -> Option<Cmd> {
    match msg {
        ThemeMsg::Apply(id) => match load_theme(&id) {
            Ok(theme) => {
                let name = theme.name.clone();
                model.theme = theme;
                model.config.theme = id;
                model
                    .ui
                    .push_toast(format!("Theme: {}", name), ToastLevel::Success);
                Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::SaveConfig]))
            }
            Err(e) => {
                tracing::warn!("Theme apply failed: {}", e);
                model
                    .ui
                    .push_toast(format!("Unknown theme: {}", id), ToastLevel::Error);
                Some(Cmd::Redraw)
            }
        },
        // Live preview from the theme store: swap colors, never persist
        ThemeMsg::Preview(id) => match load_theme(&id) {
            Ok(theme) => {
                model.theme = theme;
                Some(Cmd::Redraw)
            }
            Err(e) => {
                tracing::debug!("Theme preview failed: {}", e);
                None
            }
        },
    }
}
