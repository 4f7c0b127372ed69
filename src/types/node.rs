use serde::{Deserialize, Serialize};

use crate::layout::BBox;

/// Which column group a header node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrozenPosition {
    /// Scrolls with the middle region (default)
    #[default]
    Scrollable,
    /// Pinned to the leading edge
    Head,
    /// Pinned to the trailing edge
    Trailing,
}

/// A header node as laid out by the hierarchy builder.
///
/// `x` of a frozen-head node is measured from the leading pinned edge, `x` of
/// a frozen-trailing node from the trailing pinned edge.
///
/// Group membership is read either from `frozen` or from the tree builder's
/// `isFrozen` / `isFrozenHead` / `isFrozenTrailing` flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawHeaderNode")]
pub struct HeaderNode {
    pub id: String,
    pub key: String,
    pub field: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub is_leaf: bool,
    pub is_totals: bool,
    pub frozen: FrozenPosition,
}

/// Wire shape of [`HeaderNode`] accepting both membership encodings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawHeaderNode {
    id: String,
    key: String,
    field: String,
    label: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    is_leaf: bool,
    is_totals: bool,
    frozen: Option<FrozenPosition>,
    is_frozen: bool,
    is_frozen_head: bool,
    is_frozen_trailing: bool,
}

impl RawHeaderNode {
    /// An explicit `frozen` wins. A bare `isFrozen` pins to the leading edge.
    fn membership(&self) -> FrozenPosition {
        match self.frozen {
            Some(position) => position,
            None if self.is_frozen_trailing => FrozenPosition::Trailing,
            None if self.is_frozen_head || self.is_frozen => FrozenPosition::Head,
            None => FrozenPosition::Scrollable,
        }
    }
}

impl From<RawHeaderNode> for HeaderNode {
    fn from(raw: RawHeaderNode) -> Self {
        let frozen = raw.membership();
        Self {
            id: raw.id,
            key: raw.key,
            field: raw.field,
            label: raw.label,
            x: raw.x,
            y: raw.y,
            width: raw.width,
            height: raw.height,
            is_leaf: raw.is_leaf,
            is_totals: raw.is_totals,
            frozen,
        }
    }
}

impl HeaderNode {
    /// Untransformed box of the node.
    pub fn bbox(&self) -> BBox {
        BBox::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen != FrozenPosition::Scrollable
    }

    pub fn is_frozen_head(&self) -> bool {
        self.frozen == FrozenPosition::Head
    }

    pub fn is_frozen_trailing(&self) -> bool {
        self.frozen == FrozenPosition::Trailing
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(r#"{}"#, FrozenPosition::Scrollable ; "no flags")]
    #[test_case(r#"{"frozen": "trailing"}"#, FrozenPosition::Trailing ; "explicit field")]
    #[test_case(r#"{"isFrozen": true, "isFrozenHead": true}"#, FrozenPosition::Head ; "head flags")]
    #[test_case(r#"{"isFrozen": true, "isFrozenTrailing": true}"#, FrozenPosition::Trailing ; "trailing flags")]
    #[test_case(r#"{"isFrozen": true}"#, FrozenPosition::Head ; "bare frozen flag")]
    #[test_case(r#"{"frozen": "scrollable", "isFrozenHead": true}"#, FrozenPosition::Scrollable ; "field wins over flags")]
    fn test_membership_from_json(json: &str, expected: FrozenPosition) {
        let node: HeaderNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.frozen, expected);
    }

    #[test]
    fn test_serialized_node_reads_back() {
        let node: HeaderNode =
            serde_json::from_str(r#"{"id": "a", "x": 20, "width": 80, "isFrozenHead": true}"#)
                .unwrap();
        let back: HeaderNode =
            serde_json::from_str(&serde_json::to_string(&node).unwrap()).unwrap();
        assert_eq!(back.frozen, FrozenPosition::Head);
        assert_eq!(back.x, 20.0);
    }
}
