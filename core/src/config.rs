//! Engine configuration.
//!
//! Only engine-relevant options live here. Key geometry, theming and feedback
//! belong to the host keyboard. Settings persistence is the host's job; the
//! TOML helpers exist for tools and tests.

use crate::state::DEFAULT_FINGERPRINT_WINDOW;
use serde::{Deserialize, Serialize};

/// Active keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Latin keys commit verbatim
    English,
    /// Native Sinhala typewriter layout (direct-key composition)
    Wijesekara,
    /// Phonetic transliteration
    Singlish,
}

impl Layout {
    /// Indicator shown on the language key.
    pub fn indicator(&self) -> &'static str {
        match self {
            Layout::English => "EN",
            Layout::Wijesekara | Layout::Singlish => "SI",
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::Singlish
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Layout active when a session starts
    pub layout: Layout,

    /// Layouts the language key cycles through, in order
    pub enabled_layouts: Vec<Layout>,

    /// UTF-16 units before the cursor captured by the composition fingerprint
    pub fingerprint_window: usize,

    /// UTF-16 units scanned when extracting the current token for suggestions
    pub token_window: usize,

    /// Publish the current token after each commit
    pub suggestions_enabled: bool,

    /// Drop a one-shot shift after the next character
    pub auto_unshift: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: Layout::Singlish,
            enabled_layouts: vec![Layout::Singlish, Layout::Wijesekara, Layout::English],
            fingerprint_window: DEFAULT_FINGERPRINT_WINDOW,
            token_window: 50,
            suggestions_enabled: true,
            auto_unshift: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Layout following `current` in `enabled_layouts`. A layout that is not
    /// enabled restarts the cycle; an empty list keeps `current`.
    pub fn next_layout(&self, current: Layout) -> Layout {
        if self.enabled_layouts.is_empty() {
            return current;
        }
        let next = match self.enabled_layouts.iter().position(|l| *l == current) {
            Some(index) => (index + 1) % self.enabled_layouts.len(),
            None => 0,
        };
        self.enabled_layouts[next]
    }
}
