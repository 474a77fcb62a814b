//! Theme system
//!
//! Provides YAML-based theming with compile-time embedded themes and
//! user-defined themes from the config directory. The theme store modal is a
//! thin UI over `list_available_themes`.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/folio/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into the binary

use std::path::Path;

use serde::Deserialize;

// Embed theme YAML files at compile time
pub const FOLIO_DARK_YAML: &str = include_str!("../themes/folio-dark.yaml");
pub const FOLIO_LIGHT_YAML: &str = include_str!("../themes/folio-light.yaml");
pub const SYNTH_MIDNIGHT_YAML: &str = include_str!("../themes/synth-midnight.yaml");
pub const PAPER_YAML: &str = include_str!("../themes/paper.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "folio-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "folio-dark",
        yaml: FOLIO_DARK_YAML,
    },
    BuiltinTheme {
        id: "folio-light",
        yaml: FOLIO_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "synth-midnight",
        yaml: SYNTH_MIDNIGHT_YAML,
    },
    BuiltinTheme {
        id: "paper",
        yaml: PAPER_YAML,
    },
];

/// Where a theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in the config themes directory
    User,
    /// Built-in theme embedded in the binary
    Builtin,
}

/// Information about an available theme, as shown in the theme store
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "folio-dark", "my-custom-theme")
    pub id: String,
    /// Display name from YAML
    pub name: String,
    /// One-line pitch shown under the name in the store
    pub description: Option<String>,
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// List all available themes from all sources.
///
/// User themes override builtins with the same id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    // Collect user themes (highest priority)
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            let mut paths: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
            paths.sort();
            for path in paths {
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                if seen_ids.insert(id.to_string()) {
                    let (name, description) = match Theme::from_yaml(
                        &std::fs::read_to_string(&path).unwrap_or_default(),
                    ) {
                        Ok(t) => (t.name, t.description),
                        Err(_) => (id.to_string(), None),
                    };
                    themes.push(ThemeInfo {
                        id: id.to_string(),
                        name,
                        description,
                        source: ThemeSource::User,
                    });
                }
            }
        }
    }

    // Add builtins (user themes with the same id take priority)
    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let (name, description) = Theme::from_yaml(builtin.yaml)
                .map(|t| (t.name, t.description))
                .unwrap_or_else(|_| (builtin.id.to_string(), None));
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                description,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

// ============================================================================
// Colors
// ============================================================================

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

// ============================================================================
// Raw YAML Schema
// ============================================================================

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub workspace: SurfaceThemeData,
    pub tab_strip: TabStripThemeData,
    pub window: WindowThemeData,
    pub terminal: TerminalThemeData,
    pub explorer: SurfaceThemeData,
    pub status_bar: SurfaceThemeData,
    #[serde(default)]
    pub overlay: Option<OverlayThemeData>,
}

/// A simple background/foreground pair with an optional accent
#[derive(Debug, Clone, Deserialize)]
pub struct SurfaceThemeData {
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TabStripThemeData {
    pub background: String,
    pub active_background: String,
    pub active_foreground: String,
    pub inactive_foreground: String,
    pub border: String,
    /// Color of the drop indicator shown between tabs during a drag
    pub drop_indicator: String,
    /// Strip glow while a dragged window hovers the dock zone
    #[serde(default)]
    pub dock_highlight: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowThemeData {
    pub background: String,
    pub title_bar_background: String,
    pub title_bar_foreground: String,
    pub border: String,
    #[serde(default)]
    pub border_focused: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TerminalThemeData {
    pub background: String,
    pub foreground: String,
    pub prompt: String,
    pub error: String,
    #[serde(default)]
    pub chat: Option<String>,
}

/// Overlay colors (all optional; defaults derive from the workspace)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OverlayThemeData {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub input_background: Option<String>,
    #[serde(default)]
    pub selection_background: Option<String>,
    #[serde(default)]
    pub border: Option<String>,
}

// ============================================================================
// Resolved Theme
// ============================================================================

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: Option<String>,
    pub workspace: SurfaceTheme,
    pub tab_strip: TabStripTheme,
    pub window: WindowTheme,
    pub terminal: TerminalTheme,
    pub explorer: SurfaceTheme,
    pub status_bar: SurfaceTheme,
    pub overlay: OverlayTheme,
}

#[derive(Debug, Clone)]
pub struct SurfaceTheme {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
}

#[derive(Debug, Clone)]
pub struct TabStripTheme {
    pub background: Color,
    pub active_background: Color,
    pub active_foreground: Color,
    pub inactive_foreground: Color,
    pub border: Color,
    pub drop_indicator: Color,
    pub dock_highlight: Color,
}

#[derive(Debug, Clone)]
pub struct WindowTheme {
    pub background: Color,
    pub title_bar_background: Color,
    pub title_bar_foreground: Color,
    pub border: Color,
    pub border_focused: Color,
}

#[derive(Debug, Clone)]
pub struct TerminalTheme {
    pub background: Color,
    pub foreground: Color,
    pub prompt: Color,
    pub error: Color,
    pub chat: Color,
}

#[derive(Debug, Clone)]
pub struct OverlayTheme {
    pub background: Color,
    pub foreground: Color,
    pub input_background: Color,
    pub selection_background: Color,
    pub border: Color,
}

fn parse(field: &str, value: &str) -> Result<Color, String> {
    Color::from_hex(value).map_err(|e| format!("{}: {}", field, e))
}

fn parse_opt(field: &str, value: &Option<String>, fallback: Color) -> Result<Color, String> {
    match value {
        Some(v) => parse(field, v),
        None => Ok(fallback),
    }
}

impl Theme {
    /// Parse and resolve a theme from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        if data.version != 1 {
            return Err(format!("Unsupported theme version: {}", data.version));
        }
        Self::resolve(data)
    }

    /// Load a builtin theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let builtin = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown builtin theme: {}", id))?;
        Self::from_yaml(builtin.yaml)
    }

    fn resolve(data: ThemeData) -> Result<Self, String> {
        let workspace = resolve_surface("workspace", &data.ui.workspace)?;

        let ts = &data.ui.tab_strip;
        let drop_indicator = parse("tab_strip.drop_indicator", &ts.drop_indicator)?;
        let tab_strip = TabStripTheme {
            background: parse("tab_strip.background", &ts.background)?,
            active_background: parse("tab_strip.active_background", &ts.active_background)?,
            active_foreground: parse("tab_strip.active_foreground", &ts.active_foreground)?,
            inactive_foreground: parse("tab_strip.inactive_foreground", &ts.inactive_foreground)?,
            border: parse("tab_strip.border", &ts.border)?,
            drop_indicator,
            dock_highlight: parse_opt(
                "tab_strip.dock_highlight",
                &ts.dock_highlight,
                drop_indicator.with_alpha(0x60),
            )?,
        };

        let w = &data.ui.window;
        let border = parse("window.border", &w.border)?;
        let window = WindowTheme {
            background: parse("window.background", &w.background)?,
            title_bar_background: parse("window.title_bar_background", &w.title_bar_background)?,
            title_bar_foreground: parse("window.title_bar_foreground", &w.title_bar_foreground)?,
            border,
            border_focused: parse_opt("window.border_focused", &w.border_focused, drop_indicator)?,
        };

        let t = &data.ui.terminal;
        let terminal_fg = parse("terminal.foreground", &t.foreground)?;
        let terminal = TerminalTheme {
            background: parse("terminal.background", &t.background)?,
            foreground: terminal_fg,
            prompt: parse("terminal.prompt", &t.prompt)?,
            error: parse("terminal.error", &t.error)?,
            chat: parse_opt("terminal.chat", &t.chat, terminal_fg)?,
        };

        let o = data.ui.overlay.unwrap_or_default();
        let overlay = OverlayTheme {
            background: parse_opt(
                "overlay.background",
                &o.background,
                workspace.background.with_alpha(0xF2),
            )?,
            foreground: parse_opt("overlay.foreground", &o.foreground, workspace.foreground)?,
            input_background: parse_opt(
                "overlay.input_background",
                &o.input_background,
                tab_strip.background,
            )?,
            selection_background: parse_opt(
                "overlay.selection_background",
                &o.selection_background,
                drop_indicator.with_alpha(0x50),
            )?,
            border: parse_opt("overlay.border", &o.border, tab_strip.border)?,
        };

        Ok(Self {
            name: data.name,
            description: data.description,
            workspace,
            tab_strip,
            window,
            terminal,
            explorer: resolve_surface("explorer", &data.ui.explorer)?,
            status_bar: resolve_surface("status_bar", &data.ui.status_bar)?,
            overlay,
        })
    }
}

fn resolve_surface(section: &str, data: &SurfaceThemeData) -> Result<SurfaceTheme, String> {
    let background = parse(&format!("{}.background", section), &data.background)?;
    let foreground = parse(&format!("{}.foreground", section), &data.foreground)?;
    Ok(SurfaceTheme {
        background,
        foreground,
        accent: parse_opt(&format!("{}.accent", section), &data.accent, foreground)?,
    })
}

impl Default for Theme {
    fn default() -> Self {
        // The embedded default must parse; a broken folio-dark.yaml is a
        // build defect, not a runtime condition
        Theme::from_yaml(FOLIO_DARK_YAML).expect("embedded folio-dark theme must parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_themes_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = Theme::from_yaml(builtin.yaml)
                .unwrap_or_else(|e| panic!("Failed to parse theme '{}': {}", builtin.id, e));
            assert!(
                !theme.name.is_empty(),
                "Theme '{}' has empty name",
                builtin.id
            );
        }
    }

    #[test]
    fn test_unknown_builtin_is_error() {
        assert!(Theme::from_builtin("nonexistent").is_err());
    }

    #[test]
    fn test_version_gate() {
        let yaml = FOLIO_DARK_YAML.replace("version: 1", "version: 9");
        assert!(Theme::from_yaml(&yaml).is_err());
    }
}
