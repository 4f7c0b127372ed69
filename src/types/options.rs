//! Sheet options that influence header geometry.

use serde::{Deserialize, Serialize};

/// Per-kind toggles for resize hotspots on column cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResizeFlags {
    /// Column-width hotspots at the trailing edge of leaf cells
    pub col_cell_horizontal: bool,
    /// Row-height hotspots spanning the header
    pub col_cell_vertical: bool,
}

impl Default for ResizeFlags {
    fn default() -> Self {
        Self {
            col_cell_horizontal: true,
            col_cell_vertical: true,
        }
    }
}

/// `interaction.resize`: either a global switch or per-kind flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResizeInteraction {
    Toggle(bool),
    Detailed(ResizeFlags),
}

impl Default for ResizeInteraction {
    fn default() -> Self {
        Self::Toggle(true)
    }
}

/// Kind of resize hotspot a column cell may draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAreaType {
    ColCellHorizontal,
    ColCellVertical,
}

impl ResizeInteraction {
    pub fn allows(&self, kind: ResizeAreaType) -> bool {
        match self {
            Self::Toggle(enabled) => *enabled,
            Self::Detailed(flags) => match kind {
                ResizeAreaType::ColCellHorizontal => flags.col_cell_horizontal,
                ResizeAreaType::ColCellVertical => flags.col_cell_vertical,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionOptions {
    pub resize: ResizeInteraction,
    /// Fields the user may hide; the hidden-column indicator is off when empty
    pub hidden_column_fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipOperation {
    pub hidden_columns: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipOptions {
    pub operation: TooltipOperation,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColCfg {
    /// Explicit column header height; `Some(0)` hides the column header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl ColCfg {
    pub fn hides_header(&self) -> bool {
        self.height.is_some_and(|h| h <= 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMethod {
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

/// Active sort on a field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortParam {
    pub sort_field_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_method: Option<SortMethod>,
}

/// Sort indicator drawn in a header cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortIcon {
    #[default]
    SortNone,
    SortUp,
    SortDown,
}

impl SortIcon {
    pub fn from_param(param: Option<&SortParam>) -> Self {
        match param.and_then(|p| p.sort_method) {
            Some(SortMethod::Asc) => Self::SortUp,
            Some(SortMethod::Desc) => Self::SortDown,
            None => Self::SortNone,
        }
    }
}

/// Custom action icons attached to header cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderActionIcon {
    pub icon_names: Vec<String>,
    /// Fields the icons apply to; empty means every column cell
    pub fields: Vec<String>,
}

impl HeaderActionIcon {
    pub fn applies_to(&self, field: &str) -> bool {
        self.fields.is_empty() || self.fields.iter().any(|f| f == field)
    }
}

/// Sheet options read by column header cells.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderOptions {
    pub interaction: InteractionOptions,
    pub tooltip: TooltipOptions,
    pub col_cfg: ColCfg,
    pub show_default_header_action_icon: bool,
    pub header_action_icons: Vec<HeaderActionIcon>,
    pub sort_params: Vec<SortParam>,
}

impl HeaderOptions {
    pub fn sort_param_for(&self, field: &str) -> Option<&SortParam> {
        self.sort_params.iter().find(|p| p.sort_field_id == field)
    }

    /// Number of custom action icons configured for `field`.
    pub fn action_icon_count(&self, field: &str) -> usize {
        self.header_action_icons
            .iter()
            .filter(|rule| rule.applies_to(field))
            .map(|rule| rule.icon_names.len())
            .sum()
    }

    /// Hidden-column affordances are shown only when both switches are on.
    pub fn hidden_columns_enabled(&self) -> bool {
        !self.interaction.hidden_column_fields.is_empty() && self.tooltip.operation.hidden_columns
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_accepts_bool_or_flags() {
        let off: InteractionOptions = serde_json::from_str(r#"{"resize":false}"#).unwrap();
        assert!(!off.resize.allows(ResizeAreaType::ColCellHorizontal));

        let flags: InteractionOptions =
            serde_json::from_str(r#"{"resize":{"colCellVertical":false}}"#).unwrap();
        assert!(flags.resize.allows(ResizeAreaType::ColCellHorizontal));
        assert!(!flags.resize.allows(ResizeAreaType::ColCellVertical));

        let default = InteractionOptions::default();
        assert!(default.resize.allows(ResizeAreaType::ColCellVertical));
    }

    #[test]
    fn test_action_icon_count() {
        let options = HeaderOptions {
            header_action_icons: vec![
                HeaderActionIcon {
                    icon_names: vec!["Filter".into()],
                    fields: vec![],
                },
                HeaderActionIcon {
                    icon_names: vec!["Info".into(), "Edit".into()],
                    fields: vec!["price".into()],
                },
            ],
            ..HeaderOptions::default()
        };
        assert_eq!(options.action_icon_count("price"), 3);
        assert_eq!(options.action_icon_count("city"), 1);
    }

    #[test]
    fn test_sort_icon_from_param() {
        let param = SortParam {
            sort_field_id: "price".into(),
            sort_method: Some(SortMethod::Desc),
        };
        assert_eq!(SortIcon::from_param(Some(&param)), SortIcon::SortDown);
        assert_eq!(SortIcon::from_param(None), SortIcon::SortNone);
    }

    #[test]
    fn test_hidden_columns_need_both_switches() {
        let mut options = HeaderOptions::default();
        options.interaction.hidden_column_fields = vec!["price".into()];
        assert!(!options.hidden_columns_enabled());
        options.tooltip.operation.hidden_columns = true;
        assert!(options.hidden_columns_enabled());
    }

    #[test]
    fn test_zero_col_height_hides_header() {
        assert!(ColCfg { height: Some(0.0) }.hides_header());
        assert!(!ColCfg { height: Some(30.0) }.hides_header());
        assert!(!ColCfg::default().hides_header());
    }
}
