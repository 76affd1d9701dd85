// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Annotated estimate tree mirroring one source subtree.
///
/// Built once per pass by [`crate::estimate::build_tree`] and never mutated
/// afterwards. The subtree time is fixed at construction, so
/// `subtree_time == matched_time.unwrap_or(0.0) + Σ children' subtree_time`
/// holds at every node by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateTree {
    name: String,
    matched_time: Option<f64>,
    subtree_time: f64,
    is_explicit: bool,
    children: Vec<EstimateTree>,
}

impl EstimateTree {
    pub(crate) fn new(
        name: impl Into<String>,
        matched_time: Option<f64>,
        is_explicit: bool,
        children: Vec<EstimateTree>,
    ) -> Self {
        let own = matched_time.unwrap_or(0.0);
        let subtree_time = own + children.iter().map(EstimateTree::subtree_time).sum::<f64>();
        Self { name: name.into(), matched_time, subtree_time, is_explicit, children }
    }

    /// Raw (untrimmed) source node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` only when the node was explicitly selected and nothing matched.
    pub fn matched_time(&self) -> Option<f64> {
        self.matched_time
    }

    pub fn subtree_time(&self) -> f64 {
        self.subtree_time
    }

    pub fn is_explicit(&self) -> bool {
        self.is_explicit
    }

    /// Children in source order.
    pub fn children(&self) -> &[EstimateTree] {
        &self.children
    }
}
