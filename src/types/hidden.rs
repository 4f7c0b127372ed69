//! Registry of columns the user has hidden.

use serde::{Deserialize, Serialize};

/// Nearest visible neighbours of a hidden run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySiblingNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl DisplaySiblingNode {
    /// Id of the cell that carries the expand affordance: the following
    /// visible column, or the preceding one when the run is at the end.
    pub fn display_node_id(&self) -> Option<&str> {
        self.next.as_deref().or(self.prev.as_deref())
    }
}

/// One run of hidden columns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HiddenColumnsInfo {
    pub hide_column_node_ids: Vec<String>,
    pub display_sibling_node: DisplaySiblingNode,
}

/// Hidden runs plus the leaf orders needed to tell trailing runs apart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HiddenColumnsDetail {
    pub runs: Vec<HiddenColumnsInfo>,
    /// Leaf column ids currently laid out, in order
    pub column_node_ids: Vec<String>,
    /// Leaf column ids before anything was hidden, in order
    pub init_column_node_ids: Vec<String>,
}

impl HiddenColumnsDetail {
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The run whose expand affordance lives on `node_id`, if any.
    pub fn run_displayed_by(&self, node_id: &str) -> Option<&HiddenColumnsInfo> {
        self.runs
            .iter()
            .find(|run| run.display_sibling_node.display_node_id() == Some(node_id))
    }

    /// True when `node_id` is the last visible leaf but columns after it are
    /// hidden.
    pub fn is_last_column_after_hidden(&self, node_id: &str) -> bool {
        self.column_node_ids.last().map(String::as_str) == Some(node_id)
            && self.init_column_node_ids.last().map(String::as_str) != Some(node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> HiddenColumnsDetail {
        HiddenColumnsDetail {
            runs: vec![
                HiddenColumnsInfo {
                    hide_column_node_ids: vec!["b".into()],
                    display_sibling_node: DisplaySiblingNode {
                        prev: Some("a".into()),
                        next: Some("c".into()),
                    },
                },
                HiddenColumnsInfo {
                    hide_column_node_ids: vec!["e".into()],
                    display_sibling_node: DisplaySiblingNode {
                        prev: Some("d".into()),
                        next: None,
                    },
                },
            ],
            column_node_ids: vec!["a".into(), "c".into(), "d".into()],
            init_column_node_ids: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
        }
    }

    #[test]
    fn test_display_sibling_prefers_next() {
        let detail = detail();
        assert!(detail.run_displayed_by("c").is_some());
        assert!(detail.run_displayed_by("a").is_none());
        assert!(detail.run_displayed_by("d").is_some());
    }

    #[test]
    fn test_last_column_after_hidden() {
        let detail = detail();
        assert!(detail.is_last_column_after_hidden("d"));
        assert!(!detail.is_last_column_after_hidden("c"));

        let untouched = HiddenColumnsDetail {
            column_node_ids: vec!["a".into()],
            init_column_node_ids: vec!["a".into()],
            ..HiddenColumnsDetail::default()
        };
        assert!(!untouched.is_last_column_after_hidden("a"));
    }
}
