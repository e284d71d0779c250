//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` at the document
//! root. Configuration is sparse: stock defaults cover everything, and a user
//! file only needs the keys it wants to override.
//!
//! ## Config File Location
//!
//! ```text
//! docs/
//! ├── config.toml              # Site configuration (optional)
//! ├── readme.md
//! └── notes/
//!     └── sub.md
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Documentation"        # Site title (index header, page <title>)
//! root_group_label = "根目录"    # Display label for root-level documents
//!
//! # Directory names pruned during the scan (hidden dot-directories are
//! # always pruned in addition to these).
//! ignore = ["node_modules", "dist", "build", "target"]
//!
//! [colors.light]
//! background = "#f6f7f9"
//! surface = "#ffffff"           # Card and sidebar background
//! text = "#1f2328"
//! text_muted = "#656d76"        # Descriptions, timestamps, breadcrumbs
//! border = "#d0d7de"
//! link = "#0969da"
//! accent = "#0969da"            # Active nav marker, hover highlights
//!
//! [colors.dark]
//! background = "#0d1117"
//! surface = "#161b22"
//! text = "#e6edf3"
//! text_muted = "#8b949e"
//! border = "#30363d"
//! link = "#4493f8"
//! accent = "#4493f8"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in the index header and every page `<title>`.
    pub title: String,
    /// Display label for the group of root-level documents.
    pub root_group_label: String,
    /// Directory names pruned during the scan. Dot-directories are always
    /// pruned in addition to these.
    pub ignore: Vec<String>,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_string(),
            root_group_label: "根目录".to_string(),
            ignore: vec![
                "node_modules".to_string(),
                "dist".to_string(),
                "build".to_string(),
                "target".to_string(),
            ],
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.root_group_label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "root_group_label must not be empty".into(),
            ));
        }
        for name in &self.ignore {
            if name.is_empty() {
                return Err(ConfigError::Validation(
                    "ignore entries must not be empty".into(),
                ));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(ConfigError::Validation(format!(
                    "ignore entry '{name}' must be a directory name, not a path"
                )));
            }
        }
        Ok(())
    }

    /// Whether a directory name is pruned by the ignore set.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == name)
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Card and sidebar background color.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Muted text color (descriptions, timestamps, breadcrumbs).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Link color.
    pub link: String,
    /// Accent color (active nav marker, hover highlights).
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f6f7f9".to_string(),
            surface: "#ffffff".to_string(),
            text: "#1f2328".to_string(),
            text_muted: "#656d76".to_string(),
            border: "#d0d7de".to_string(),
            link: "#0969da".to_string(),
            accent: "#0969da".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0d1117".to_string(),
            surface: "#161b22".to_string(),
            text: "#e6edf3".to_string(),
            text_muted: "#8b949e".to_string(),
            border: "#30363d".to_string(),
            link: "#4493f8".to_string(),
            accent: "#4493f8".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading and CSS generation
// =============================================================================

/// Load config from `config.toml` in the given directory.
///
/// Missing file means stock defaults. Unknown keys are rejected and the
/// result is validated.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docboard Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Place this file at the root of the
# document tree. Unknown keys will cause an error.

# Site title, shown in the index header and every page <title>.
title = "Documentation"

# Display label for the group of root-level documents on the index and in
# the sidebar. Nested documents are grouped under their folder path instead.
root_group_label = "根目录"

# Directory names pruned during the scan. Directories whose name starts
# with a dot are always pruned in addition to these.
ignore = ["node_modules", "dist", "build", "target"]

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f6f7f9"
surface = "#ffffff"       # Cards, sidebar
text = "#1f2328"
text_muted = "#656d76"    # Descriptions, timestamps, breadcrumbs
border = "#d0d7de"
link = "#0969da"
accent = "#0969da"        # Active nav marker, hover highlights

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0d1117"
surface = "#161b22"
text = "#e6edf3"
text_muted = "#8b949e"
border = "#30363d"
link = "#4493f8"
accent = "#4493f8"
"##
}

/// Generate CSS custom properties from color config.
///
/// Prefixed to the static stylesheet when the site is emitted, so the
/// stylesheet itself stays a plain asset.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    fn scheme_block(scheme: &ColorScheme) -> String {
        format!(
            "    --color-bg: {};\n    --color-surface: {};\n    --color-text: {};\n    --color-text-muted: {};\n    --color-border: {};\n    --color-link: {};\n    --color-accent: {};",
            scheme.background,
            scheme.surface,
            scheme.text,
            scheme.text_muted,
            scheme.border,
            scheme.link,
            scheme.accent,
        )
    }

    format!(
        ":root {{\n{}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}\n    }}\n}}",
        scheme_block(&colors.light),
        scheme_block(&colors.dark)
            .lines()
            .map(|l| format!("    {l}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
