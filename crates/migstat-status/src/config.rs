//! Tab-stop settings for the status table.

use serde::{Deserialize, Serialize};

/// Tab-stop parameters for the status table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Minimal cell width including padding.
    pub min_width: usize,
    /// Width of a tab character; only used when `pad_char` is `'\t'`.
    pub tab_width: usize,
    /// Padding added to the widest cell of a column.
    pub padding: usize,
    /// Character used to pad cells.
    pub pad_char: char,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_width: 0,
            tab_width: 8,
            padding: 2,
            pad_char: ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = TableConfig::default();
        assert_eq!(c.min_width, 0);
        assert_eq!(c.tab_width, 8);
        assert_eq!(c.padding, 2);
        assert_eq!(c.pad_char, ' ');
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let c: TableConfig = serde_json::from_str(r#"{"padding": 4}"#).unwrap();
        assert_eq!(c.padding, 4);
        assert_eq!(c.tab_width, 8);
        assert_eq!(c.pad_char, ' ');
    }
}
