//! Config struct definition and default implementation.

use super::types::*;
use crate::engine::LineEnding;
use serde::{Deserialize, Serialize};

/// Configuration for the tinytpl CLI.
///
/// This struct represents the contents of `tinytpl.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Positional values for `$0`..`$9`.
    ///
    /// Values given on the command line replace this list entirely.
    pub values: Vec<String>,

    /// Terminator written after each expanded line.
    pub line_ending: LineEnding,

    /// Whether the last expanded line also gets a terminator.
    #[serde(default = "default_true")]
    pub final_newline: bool,

    /// Default log filter when `TINYTPL_LOG` is not set.
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            line_ending: LineEnding::default(),
            final_newline: default_true(),
            log_level: LogLevel::default(),
        }
    }
}
