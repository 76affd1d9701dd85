// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory source nodes for tests, benches and the demo binary.

use super::{NodeSource, SourceNode};
use crate::model::{NodeKind, SheetRow};

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureNode {
    name: String,
    kind: NodeKind,
    children: Option<Vec<FixtureNode>>,
}

impl FixtureNode {
    /// Node without the child capability.
    pub fn leaf(name: impl Into<String>, kind: NodeKind) -> Self {
        Self { name: name.into(), kind, children: None }
    }

    /// Node carrying an ordered child list (possibly empty).
    pub fn branch(name: impl Into<String>, kind: NodeKind, children: Vec<FixtureNode>) -> Self {
        Self { name: name.into(), kind, children: Some(children) }
    }
}

impl SourceNode for FixtureNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn children(&self) -> Option<&[Self]> {
        self.children.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureSelection {
    roots: Vec<FixtureNode>,
}

impl FixtureSelection {
    pub fn new(roots: Vec<FixtureNode>) -> Self {
        Self { roots }
    }
}

impl NodeSource for FixtureSelection {
    type Node = FixtureNode;

    fn selection(&self) -> &[FixtureNode] {
        &self.roots
    }
}

/// Selection used by the demo binary: a card frame plus a loose component.
pub fn demo_selection() -> FixtureSelection {
    FixtureSelection::new(vec![
        FixtureNode::branch(
            "Card",
            NodeKind::Frame,
            vec![
                FixtureNode::leaf("Button Primary", NodeKind::Instance),
                FixtureNode::leaf("Checkbox", NodeKind::Instance),
                FixtureNode::branch(
                    " Drop Down ",
                    NodeKind::Group,
                    vec![FixtureNode::leaf("Chevron", NodeKind::Vector)],
                ),
            ],
        ),
        FixtureNode::leaf("Switch", NodeKind::Component),
    ])
}

/// Canned rows matching the demo selection.
pub fn demo_rows() -> Vec<SheetRow> {
    [
        ("Button Primary", 5.0),
        ("Button Secondary", 3.0),
        ("Checkbox", 2.0),
        ("Card", 8.0),
        ("Drop Down", 10.0),
        ("Switch", 1.0),
    ]
    .into_iter()
    .map(|(name, time)| SheetRow { name: name.to_owned(), time })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{demo_rows, demo_selection, FixtureNode};
    use crate::model::NodeKind;
    use crate::source::{NodeSource, SourceNode};

    #[test]
    fn leaf_has_no_child_capability() {
        let leaf = FixtureNode::leaf("Switch", NodeKind::Component);
        assert!(leaf.children().is_none());
    }

    #[test]
    fn branch_preserves_child_order() {
        let branch = FixtureNode::branch(
            "Card",
            NodeKind::Frame,
            vec![
                FixtureNode::leaf("First", NodeKind::Text),
                FixtureNode::leaf("Second", NodeKind::Text),
            ],
        );

        let children = branch.children().expect("branch children");
        assert_eq!(children[0].name(), "First");
        assert_eq!(children[1].name(), "Second");
    }

    #[test]
    fn demo_selection_has_two_roots_and_matching_rows() {
        let selection = demo_selection();
        assert_eq!(selection.selection().len(), 2);
        assert_eq!(selection.selection()[0].name(), "Card");
        assert_eq!(selection.selection()[1].name(), "Switch");

        let rows = demo_rows();
        assert!(rows.iter().any(|row| row.name == "Drop Down"));
    }
}
