//! View module - softbuffer rendering
//!
//! The renderer owns the window surface, a persistent back buffer, and the
//! glyph cache. Each frame repaints the full chrome from the model; nothing
//! here mutates application state.

pub mod font;
pub mod frame;

pub use frame::{Frame, TextPainter};
pub use hit_test::{hit_test_ui, modal_rect, HitTarget};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use crate::commands::filter_commands;
use crate::content;
use crate::geometry::{Rect, TITLE_BAR_HEIGHT};
use crate::layout::{self, ChromeLayout, ExplorerRow};
use crate::model::{AppModel, FloatingWindow, LineKind, ModalState, ToastLevel};
use crate::theme::Theme;

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer. Softbuffer doesn't guarantee buffer contents
    /// are preserved between frames, so we maintain our own and copy on
    /// present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
    scale_factor: f64,
}

impl Renderer {
    /// Create a new renderer, detecting the window's scale factor
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let scale_factor = window.scale_factor();
        let (width, height) = {
            let size = window.inner_size();
            (size.width, size.height)
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
            )
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        let font_bytes = font::load_system_monospace()?;
        let font = Font::from_bytes(font_bytes.as_slice(), FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to load font: {}", e))?;

        let font_size = 13.0 * scale_factor as f32;

        let line_metrics = font
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| anyhow::anyhow!("Font missing horizontal line metrics"))?;

        let (metrics, _) = font.rasterize('M', font_size);
        let char_width = metrics.advance_width;

        let back_buffer = vec![0u32; (width as usize) * (height as usize)];

        Ok(Self {
            font,
            surface,
            back_buffer,
            width,
            height,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width,
            scale_factor,
        })
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Resize surface and back buffer to the new window size
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        self.surface
            .resize(
                NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
                NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
            )
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        self.back_buffer
            .resize((width as usize) * (height as usize), 0);
        Ok(())
    }

    /// Paint the full frame and present it
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let chrome = layout::compute_chrome(model);
        let width = self.width as usize;
        let height = self.height as usize;

        let mut frame = Frame::new(&mut self.back_buffer, width, height);
        let line_height = self.line_metrics.new_line_size.ceil() as usize;
        let ascent = self.line_metrics.ascent;
        let mut text = TextPainter::new(
            &self.font,
            &mut self.glyph_cache,
            self.font_size,
            ascent,
            self.char_width,
            line_height,
        );

        let theme = &model.theme;
        frame.clear(theme.workspace.background.to_argb_u32());

        paint_content(&mut frame, &mut text, model, &chrome);
        if let Some(explorer) = chrome.explorer {
            paint_explorer(&mut frame, &mut text, model, explorer);
        }
        paint_strip(&mut frame, &mut text, model, &chrome);
        if let Some(terminal) = chrome.terminal {
            paint_terminal(&mut frame, &mut text, model, terminal);
        }
        paint_status_bar(&mut frame, &mut text, model, &chrome);

        for window in model.workbench.windows_by_z() {
            paint_window(&mut frame, &mut text, theme, window, model);
        }

        paint_toasts(&mut frame, &mut text, model, &chrome);

        if model.ui.has_modal() {
            frame.dim(0x66);
            paint_modal(&mut frame, &mut text, model, &chrome);
        }

        // Present: copy the back buffer into the surface buffer
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        let n = buffer.len().min(self.back_buffer.len());
        buffer[..n].copy_from_slice(&self.back_buffer[..n]);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

// ============================================================================
// Chrome painters
// ============================================================================

fn paint_content(frame: &mut Frame, text: &mut TextPainter, model: &AppModel, chrome: &ChromeLayout) {
    let theme = &model.theme;
    frame.fill_rect(chrome.content, theme.workspace.background.to_argb_u32());

    let Some(doc) = content::document(model.workbench.active) else {
        return;
    };
    paint_doc_body(
        frame,
        text,
        doc,
        chrome.content,
        theme.workspace.foreground.to_argb_u32(),
        theme.workspace.accent.to_argb_u32(),
    );
}

/// Paint a document body with a line-number gutter
fn paint_doc_body(
    frame: &mut Frame,
    text: &mut TextPainter,
    doc: &content::Document,
    rect: Rect,
    fg: u32,
    accent: u32,
) {
    let line_height = text.line_height().max(1);
    let padding = 12.0;
    let gutter_chars = 4;
    let text_x = rect.x + padding + (gutter_chars as f32 + 1.0) * text.char_width();
    let max_lines = (rect.height as usize).saturating_sub(padding as usize) / line_height;

    frame.set_clip(rect);
    for (i, line) in doc.body.lines().take(max_lines).enumerate() {
        let y = rect.y + padding + (i * line_height) as f32;
        text.draw(
            frame,
            (rect.x + padding) as usize,
            y as usize,
            &format!("{:>width$}", i + 1, width = gutter_chars),
            accent & 0x00FFFFFF | 0x80000000,
        );
        text.draw_clipped(
            frame,
            text_x as usize,
            y as usize,
            line,
            fg,
            rect.right() - text_x - padding,
        );
    }
    frame.clear_clip();
}

fn paint_explorer(frame: &mut Frame, text: &mut TextPainter, model: &AppModel, explorer: Rect) {
    let theme = &model.theme;
    frame.fill_rect(explorer, theme.explorer.background.to_argb_u32());

    for row in layout::explorer_rows(model, explorer) {
        let rect = row.rect();
        match row {
            ExplorerRow::Section { label, .. } => {
                let chevron = if model.ui.explorer.collapsed.contains(label) {
                    "▸"
                } else {
                    "▾"
                };
                text.draw(
                    frame,
                    (rect.x + 8.0) as usize,
                    (rect.y + 4.0) as usize,
                    &format!("{} {}", chevron, label),
                    theme.explorer.accent.to_argb_u32(),
                );
            }
            ExplorerRow::Doc { doc, .. } => {
                let selected = model.ui.explorer.selected == Some(doc);
                if selected {
                    frame.fill_rect_blended(
                        rect,
                        theme.explorer.accent.with_alpha(0x30).to_argb_u32(),
                    );
                }
                let title = content::document(doc).map(|d| d.title).unwrap_or(doc);
                text.draw_clipped(
                    frame,
                    (rect.x + 8.0 + layout::EXPLORER_INDENT) as usize,
                    (rect.y + 4.0) as usize,
                    title,
                    theme.explorer.foreground.to_argb_u32(),
                    rect.width - layout::EXPLORER_INDENT - 16.0,
                );
            }
        }
    }
}

fn paint_strip(frame: &mut Frame, text: &mut TextPainter, model: &AppModel, chrome: &ChromeLayout) {
    let theme = &model.theme;
    frame.fill_rect(chrome.strip, theme.tab_strip.background.to_argb_u32());

    for tab in &chrome.tabs {
        let active = model.workbench.active == tab.doc;
        let (bg, fg) = if active {
            (
                theme.tab_strip.active_background.to_argb_u32(),
                theme.tab_strip.active_foreground.to_argb_u32(),
            )
        } else {
            (
                theme.tab_strip.background.to_argb_u32(),
                theme.tab_strip.inactive_foreground.to_argb_u32(),
            )
        };
        frame.fill_rect(tab.rect, bg);
        if active {
            // Accent line along the top of the active tab
            frame.fill_rect(
                Rect::new(tab.rect.x, tab.rect.y, tab.rect.width, 2.0),
                theme.tab_strip.drop_indicator.to_argb_u32(),
            );
        }

        let title = content::document(tab.doc).map(|d| d.title).unwrap_or(tab.doc);
        text.draw_clipped(
            frame,
            (tab.rect.x + layout::TAB_TEXT_PADDING) as usize,
            (tab.rect.y + (tab.rect.height - text.line_height() as f32) / 2.0) as usize,
            title,
            fg,
            tab.rect.width - 2.0 * layout::TAB_TEXT_PADDING,
        );

        if tab.close.width > 0.0 && !model.ui.is_dragging {
            text.draw(
                frame,
                (tab.close.x + 4.0) as usize,
                (tab.close.y + 1.0) as usize,
                "×",
                theme.tab_strip.inactive_foreground.to_argb_u32(),
            );
        }
    }

    // Strip border
    frame.fill_rect(
        Rect::new(
            chrome.strip.x,
            chrome.strip.bottom() - 1.0,
            chrome.strip.width,
            1.0,
        ),
        theme.tab_strip.border.to_argb_u32(),
    );

    // Dock highlight glow while a dragged window hovers the dock zone
    if model.ui.dock_highlight {
        frame.fill_rect_blended(chrome.strip, theme.tab_strip.dock_highlight.to_argb_u32());
    }

    // Drop indicator between tabs during a drag
    if let Some(index) = model.ui.drop_index {
        let drag_doc = model.drag.as_ref().map(|s| s.doc());
        let others: Vec<&layout::TabRect> = chrome
            .tabs
            .iter()
            .filter(|t| Some(t.doc) != drag_doc)
            .collect();
        let x = match others.get(index) {
            Some(tab) => tab.rect.x,
            None => others
                .last()
                .map(|t| t.rect.right())
                .unwrap_or(chrome.strip.x),
        };
        frame.fill_rect(
            Rect::new(x - 1.0, chrome.strip.y + 2.0, 2.0, chrome.strip.height - 4.0),
            theme.tab_strip.drop_indicator.to_argb_u32(),
        );
    }
}

fn paint_terminal(frame: &mut Frame, text: &mut TextPainter, model: &AppModel, rect: Rect) {
    let theme = &model.theme;
    frame.fill_rect(rect, theme.terminal.background.to_argb_u32());
    frame.fill_rect(
        Rect::new(rect.x, rect.y, rect.width, 1.0),
        theme.tab_strip.border.to_argb_u32(),
    );

    let line_height = text.line_height().max(1);
    let padding = 8.0;
    let input_y = rect.bottom() - padding - line_height as f32;

    // Prompt line
    let prompt = format!("❯ {}", model.terminal.input);
    text.draw_clipped(
        frame,
        (rect.x + padding) as usize,
        input_y as usize,
        &prompt,
        theme.terminal.prompt.to_argb_u32(),
        rect.width - 2.0 * padding,
    );

    // Scrollback above the prompt, newest at the bottom
    let avail_rows =
        ((input_y - rect.y - padding) / line_height as f32).max(0.0) as usize;
    let lines = &model.terminal.lines;
    let end = lines.len().saturating_sub(model.terminal.scroll_offset);
    let start = end.saturating_sub(avail_rows);

    frame.set_clip(rect);
    for (row, line) in lines[start..end].iter().enumerate() {
        let color = match line.kind {
            LineKind::Command => theme.terminal.prompt.to_argb_u32(),
            LineKind::Output => theme.terminal.foreground.to_argb_u32(),
            LineKind::Error => theme.terminal.error.to_argb_u32(),
            LineKind::Chat => theme.terminal.chat.to_argb_u32(),
        };
        text.draw_clipped(
            frame,
            (rect.x + padding) as usize,
            (rect.y + padding + (row * line_height) as f32) as usize,
            &line.text,
            color,
            rect.width - 2.0 * padding,
        );
    }
    frame.clear_clip();
}

fn paint_status_bar(
    frame: &mut Frame,
    text: &mut TextPainter,
    model: &AppModel,
    chrome: &ChromeLayout,
) {
    let theme = &model.theme;
    frame.fill_rect(chrome.status_bar, theme.status_bar.background.to_argb_u32());

    let doc = content::document(model.workbench.active);
    let left = match doc {
        Some(d) => format!("{}  ·  {}", d.title, d.lang.display_name()),
        None => String::new(),
    };
    let y = (chrome.status_bar.y
        + (chrome.status_bar.height - text.line_height() as f32) / 2.0) as usize;
    text.draw(
        frame,
        (chrome.status_bar.x + 10.0) as usize,
        y,
        &left,
        theme.status_bar.foreground.to_argb_u32(),
    );

    let right = format!("{}  ·  ctrl+p", model.theme.name);
    let right_w = text.measure_width(&right);
    text.draw(
        frame,
        (chrome.status_bar.right() - right_w - 10.0) as usize,
        y,
        &right,
        theme.status_bar.foreground.to_argb_u32(),
    );
}

fn paint_window(
    frame: &mut Frame,
    text: &mut TextPainter,
    theme: &Theme,
    window: &FloatingWindow,
    model: &AppModel,
) {
    let focused = model
        .workbench
        .top_window()
        .is_some_and(|t| t.doc == window.doc);
    let border = if focused {
        theme.window.border_focused.to_argb_u32()
    } else {
        theme.window.border.to_argb_u32()
    };

    frame.draw_bordered_rect(window.frame, theme.window.background.to_argb_u32(), border);

    // Title bar
    let title_bar = layout::window_title_bar(window.frame);
    frame.fill_rect(title_bar, theme.window.title_bar_background.to_argb_u32());

    let title = content::document(window.doc)
        .map(|d| d.title)
        .unwrap_or(window.doc);
    text.draw_clipped(
        frame,
        (title_bar.x + 10.0) as usize,
        (title_bar.y + (TITLE_BAR_HEIGHT - text.line_height() as f32) / 2.0) as usize,
        title,
        theme.window.title_bar_foreground.to_argb_u32(),
        title_bar.width - 70.0,
    );

    let button_fg = theme.window.title_bar_foreground.to_argb_u32();
    let maximize = layout::window_maximize_button(window.frame);
    text.draw(
        frame,
        (maximize.x + 3.0) as usize,
        (maximize.y + 1.0) as usize,
        if window.maximized { "❐" } else { "□" },
        button_fg,
    );
    let close = layout::window_close_button(window.frame);
    text.draw(
        frame,
        (close.x + 3.0) as usize,
        (close.y + 1.0) as usize,
        "×",
        button_fg,
    );

    // Body
    if let Some(doc) = content::document(window.doc) {
        let body = Rect::new(
            window.frame.x + 1.0,
            window.frame.y + TITLE_BAR_HEIGHT,
            window.frame.width - 2.0,
            window.frame.height - TITLE_BAR_HEIGHT - 1.0,
        );
        paint_doc_body(
            frame,
            text,
            doc,
            body,
            theme.workspace.foreground.to_argb_u32(),
            theme.workspace.accent.to_argb_u32(),
        );
    }
}

fn paint_toasts(frame: &mut Frame, text: &mut TextPainter, model: &AppModel, chrome: &ChromeLayout) {
    let theme = &model.theme;
    let line_height = text.line_height() as f32;
    let toast_height = line_height + 16.0;
    let mut y = chrome.status_bar.y - 12.0 - toast_height;

    for toast in model.ui.toasts.iter().rev() {
        let width = text.measure_width(&toast.text) + 24.0;
        let rect = Rect::new(chrome.viewport.width - width - 16.0, y, width, toast_height);
        let accent = match toast.level {
            ToastLevel::Info => theme.workspace.accent,
            ToastLevel::Success => theme.tab_strip.drop_indicator,
            ToastLevel::Error => theme.terminal.error,
        };
        frame.draw_bordered_rect(
            rect,
            theme.overlay.background.to_argb_u32(),
            accent.to_argb_u32(),
        );
        text.draw(
            frame,
            (rect.x + 12.0) as usize,
            (rect.y + 8.0) as usize,
            &toast.text,
            theme.overlay.foreground.to_argb_u32(),
        );
        y -= toast_height + 8.0;
    }
}

fn paint_modal(frame: &mut Frame, text: &mut TextPainter, model: &AppModel, chrome: &ChromeLayout) {
    let theme = &model.theme;
    let rect = modal_rect(chrome);
    frame.draw_bordered_rect(
        rect,
        theme.overlay.background.to_argb_u32(),
        theme.overlay.border.to_argb_u32(),
    );

    let line_height = text.line_height() as f32;
    let row_height = line_height + 10.0;
    let padding = 12.0;

    match &model.ui.active_modal {
        Some(ModalState::CommandPalette(state)) => {
            // Input field
            let input_rect = Rect::new(
                rect.x + padding,
                rect.y + padding,
                rect.width - 2.0 * padding,
                row_height,
            );
            frame.fill_rect(input_rect, theme.overlay.input_background.to_argb_u32());
            text.draw_clipped(
                frame,
                (input_rect.x + 8.0) as usize,
                (input_rect.y + 5.0) as usize,
                &format!("{}▏", state.input),
                theme.overlay.foreground.to_argb_u32(),
                input_rect.width - 16.0,
            );

            // Filtered command list
            let list_y = input_rect.bottom() + 8.0;
            let max_rows = ((rect.bottom() - padding - list_y) / row_height) as usize;
            for (i, def) in filter_commands(&state.input).iter().take(max_rows).enumerate() {
                let row = Rect::new(
                    rect.x + padding,
                    list_y + i as f32 * row_height,
                    rect.width - 2.0 * padding,
                    row_height,
                );
                if i == state.selected_index {
                    frame.fill_rect_blended(
                        row,
                        theme.overlay.selection_background.to_argb_u32(),
                    );
                }
                text.draw_clipped(
                    frame,
                    (row.x + 8.0) as usize,
                    (row.y + 5.0) as usize,
                    def.label,
                    theme.overlay.foreground.to_argb_u32(),
                    row.width - 120.0,
                );
                if let Some(binding) = def.keybinding {
                    let w = text.measure_width(binding);
                    text.draw(
                        frame,
                        (row.right() - w - 8.0) as usize,
                        (row.y + 5.0) as usize,
                        binding,
                        theme.tab_strip.inactive_foreground.to_argb_u32(),
                    );
                }
            }
        }
        Some(ModalState::ThemeStore(state)) => {
            text.draw(
                frame,
                (rect.x + padding) as usize,
                (rect.y + padding) as usize,
                "Theme Marketplace",
                theme.overlay.foreground.to_argb_u32(),
            );

            let list_y = rect.y + padding + row_height + 6.0;
            let max_rows = ((rect.bottom() - padding - list_y) / row_height) as usize;
            for (i, info) in state.entries.iter().take(max_rows).enumerate() {
                let row = Rect::new(
                    rect.x + padding,
                    list_y + i as f32 * row_height,
                    rect.width - 2.0 * padding,
                    row_height,
                );
                if i == state.selected_index {
                    frame.fill_rect_blended(
                        row,
                        theme.overlay.selection_background.to_argb_u32(),
                    );
                }
                let label = match &info.description {
                    Some(desc) => format!("{} — {}", info.name, desc),
                    None => info.name.clone(),
                };
                text.draw_clipped(
                    frame,
                    (row.x + 8.0) as usize,
                    (row.y + 5.0) as usize,
                    &label,
                    theme.overlay.foreground.to_argb_u32(),
                    row.width - 16.0,
                );
            }
        }
        None => {}
    }
}
