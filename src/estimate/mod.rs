// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sheet matching and aggregation over a selected hierarchy.
//!
//! [`build_tree`] produces the annotated estimate tree with the subtree roll-up;
//! [`flatten_root`] reproduces the flat legacy result list. Both are pure,
//! synchronous walks over an already-fetched sheet and never call back into the
//! source.

use smallvec::SmallVec;

use crate::model::{EstimateSheet, EstimateTree, FlatEntry};
use crate::source::SourceNode;

/// Recursively annotates `node` and its subtree against `sheet`.
///
/// Only the initial call for a selection root passes `is_explicit = true`. An
/// explicit node with no match gets an absent time so the display can say
/// "no data"; unmatched descendants silently contribute zero instead.
pub fn build_tree<N: SourceNode>(
    node: &N,
    sheet: &EstimateSheet,
    is_explicit: bool,
) -> EstimateTree {
    let children = node
        .children()
        .map(|children| children.iter().map(|child| build_tree(child, sheet, false)).collect())
        .unwrap_or_default();

    let matched_time = match sheet.match_time(node.name()) {
        Some(time) => Some(time),
        None if is_explicit => None,
        None => Some(0.0),
    };

    EstimateTree::new(node.name(), matched_time, is_explicit, children)
}

/// Walks `root` and all descendants pre-order, appending one flat entry per
/// countable node with a sheet match.
///
/// Returns the contribution to the grand total. An unmatched node emits nothing
/// unless it is `root` itself (pointer identity), which emits an absent-time
/// entry instead.
pub fn flatten_root<N: SourceNode>(
    root: &N,
    sheet: &EstimateSheet,
    entries: &mut Vec<FlatEntry>,
) -> f64 {
    let mut total = 0.0;
    let mut stack: SmallVec<[&N; 16]> = SmallVec::new();
    stack.push(root);

    while let Some(node) = stack.pop() {
        if node.kind().is_countable() {
            let name = node.name().trim();
            match sheet.match_time(name) {
                Some(time) => {
                    entries.push(FlatEntry { name: name.to_owned(), time: Some(time) });
                    total += time;
                }
                None if std::ptr::eq(node, root) => {
                    entries.push(FlatEntry { name: name.to_owned(), time: None });
                }
                None => {}
            }
        }

        if let Some(children) = node.children() {
            for child in children.iter().rev() {
                stack.push(child);
            }
        }
    }

    total
}
