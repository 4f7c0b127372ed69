//! Style inputs resolved by the theme collaborator.
//!
//! Missing values deserialize to the stock theme; absent optional sizes fall
//! back to zero rather than failing.

use serde::{Deserialize, Serialize};

use crate::layout::Align;

/// Width of the divider drawn next to hidden columns.
pub const SPLIT_LINE_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Horizontal text alignment, matching canvas `textAlign` semantics: the text
/// anchor is the left edge, the center, or the right edge of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// Placement policy of a block that follows this alignment.
    pub fn as_align(self) -> Align {
        match self {
            Self::Left => Align::Start,
            Self::Center => Align::Center,
            Self::Right => Align::End,
        }
    }

    /// Left edge of a text of `width` pixels anchored at `anchor_x`.
    pub fn text_start(self, anchor_x: f64, width: f64) -> f64 {
        match self {
            Self::Left => anchor_x,
            Self::Center => anchor_x - width / 2.0,
            Self::Right => anchor_x - width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextTheme {
    pub text_align: TextAlign,
    pub font_size: f64,
    pub font_weight: u16,
    pub fill: String,
}

impl Default for TextTheme {
    fn default() -> Self {
        Self {
            text_align: TextAlign::Center,
            font_size: 12.0,
            font_weight: 400,
            fill: "#000000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconMargin {
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconTheme {
    pub size: f64,
    pub margin: IconMargin,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            size: 10.0,
            margin: IconMargin {
                left: 4.0,
                right: 4.0,
            },
        }
    }
}

impl IconTheme {
    /// Horizontal space reserved for `count` trailing icons.
    pub fn reserved_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        (self.size + self.margin.left) * count as f64 + self.margin.right
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellTheme {
    pub padding: Padding,
    pub background_color: String,
    pub background_color_opacity: f64,
}

impl Default for CellTheme {
    fn default() -> Self {
        Self {
            padding: Padding {
                top: 4.0,
                right: 8.0,
                bottom: 4.0,
                left: 8.0,
            },
            background_color: "#F5F8FE".to_string(),
            background_color_opacity: 1.0,
        }
    }
}

/// Resize hotspot styling. `size` is the hotspot thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResizeAreaTheme {
    pub size: f64,
    pub background: String,
    pub background_opacity: f64,
}

impl Default for ResizeAreaTheme {
    fn default() -> Self {
        Self {
            size: 3.0,
            background: "#326EF4".to_string(),
            background_opacity: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitLineTheme {
    pub horizontal_border_color: String,
    pub horizontal_border_color_opacity: f64,
}

impl Default for SplitLineTheme {
    fn default() -> Self {
        Self {
            horizontal_border_color: "#CCDBFD".to_string(),
            horizontal_border_color_opacity: 1.0,
        }
    }
}

/// Resolved theme of a column header cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColCellTheme {
    pub cell: CellTheme,
    pub text: TextTheme,
    pub bolder_text: TextTheme,
    pub icon: IconTheme,
    pub resize_area: ResizeAreaTheme,
    pub split_line: SplitLineTheme,
}

impl Default for ColCellTheme {
    fn default() -> Self {
        Self {
            cell: CellTheme::default(),
            text: TextTheme::default(),
            bolder_text: TextTheme {
                font_weight: 700,
                ..TextTheme::default()
            },
            icon: IconTheme::default(),
            resize_area: ResizeAreaTheme::default(),
            split_line: SplitLineTheme::default(),
        }
    }
}
