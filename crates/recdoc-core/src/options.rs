//! Layout options and fixed layout constants.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Default wrap width, in columns.
pub const DEFAULT_WIDTH: usize = 70;

/// Columns of extra indentation for the children of a section.
pub const INDENT_STEP: usize = 2;

/// Columns between the widest aligned term and its definition.
pub const TERM_GAP: usize = 2;

/// A prefixed term wider than this renders on its own line and is excluded
/// from definition-column alignment.
pub const MAX_TERM_COLUMN: usize = 24;

/// Knobs for rendering a document.
///
/// Deserializes with per-field defaults, so a TOML config file may set any
/// subset of fields:
///
/// ```toml
/// width = 60
/// title_colon = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Target line width in columns, indentation included.
    pub width: usize,

    /// Append `:` to section titles before wrapping.
    pub title_colon: bool,

    /// Append `:` to definition terms. Participates in column alignment.
    pub term_colon: bool,

    /// Underline section titles with a line of `-`.
    pub underline_titles: bool,

    /// Leave one empty line between a section title and its first child.
    pub title_gap: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            title_colon: false,
            term_colon: false,
            underline_titles: false,
            title_gap: false,
        }
    }
}

impl RenderOptions {
    /// Reject option combinations that cannot lay out any document.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width == 0 {
            return Err(LayoutError::InvalidWidth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RenderOptions::default().validate().is_ok());
        assert_eq!(RenderOptions::default().width, 70);
    }

    #[test]
    fn zero_width_is_rejected() {
        let opts = RenderOptions {
            width: 0,
            ..RenderOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let opts: RenderOptions =
            serde_json::from_str(r#"{"width": 50, "term_colon": true}"#)
                .expect("options should deserialize");
        assert_eq!(opts.width, 50);
        assert!(opts.term_colon);
        assert!(!opts.title_colon);
    }
}
