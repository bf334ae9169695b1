//! Indentation configuration for the formatting engine.

use serde::{Deserialize, Serialize};

/// Width of the indentation applied to the interior lines of a block.
///
/// The unit is `spaces_per_tab * tabs` spaces. Every formatting call applies
/// exactly one unit, so nested blocks end up indented once per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Number of spaces making up one logical tab.
    pub spaces_per_tab: usize,
    /// Number of logical tabs applied to interior lines.
    pub tabs: usize,
}

impl FormatConfig {
    /// 4-space indentation, one tab per level.
    pub const DEFAULT: Self = Self {
        spaces_per_tab: 4,
        tabs: 1,
    };

    /// 2-space indentation, one tab per level.
    pub const COMPACT: Self = Self {
        spaces_per_tab: 2,
        tabs: 1,
    };

    pub fn new(spaces_per_tab: usize, tabs: usize) -> Self {
        Self {
            spaces_per_tab,
            tabs,
        }
    }

    /// Total number of spaces in one indentation unit.
    pub fn width(&self) -> usize {
        self.spaces_per_tab * self.tabs
    }

    /// The string prefixed to every interior line.
    pub fn unit(&self) -> String {
        " ".repeat(self.width())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
