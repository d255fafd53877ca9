//! Parser configuration.
//!
//! [`ParserConfig`] controls the optional cleanup passes of
//! [`ChatParser`](crate::parser::ChatParser). Defaults match what the
//! interactive analyzer expects: assistant chatter is dropped and
//! misattributed group events are reclassified.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParserConfig;
//!
//! let config = ParserConfig::new()
//!     .with_reclassify_system_events(false);
//! assert!(config.filter_noise_authors);
//! ```

use serde::{Deserialize, Serialize};

use crate::classify::NOISE_AUTHORS;

/// Configuration for chat export parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Drop colon-delimited messages from noise authors (default: true).
    pub filter_noise_authors: bool,

    /// Authors treated as noise when `filter_noise_authors` is set
    /// (default: `["Meta AI"]`). Matched case-insensitively.
    pub noise_authors: Vec<String>,

    /// Run the post-hoc system-phrase reclassification pass (default: true).
    pub reclassify_system_events: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            filter_noise_authors: true,
            noise_authors: NOISE_AUTHORS.iter().map(|a| (*a).to_string()).collect(),
            reclassify_system_events: true,
        }
    }
}

impl ParserConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the noise-author filter.
    #[must_use]
    pub fn with_filter_noise_authors(mut self, enabled: bool) -> Self {
        self.filter_noise_authors = enabled;
        self
    }

    /// Replaces the noise-author table.
    #[must_use]
    pub fn with_noise_authors(mut self, authors: Vec<String>) -> Self {
        self.noise_authors = authors;
        self
    }

    /// Enables or disables the system-phrase reclassification pass.
    #[must_use]
    pub fn with_reclassify_system_events(mut self, enabled: bool) -> Self {
        self.reclassify_system_events = enabled;
        self
    }
}
