// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Node Source capability surface.
//!
//! The host that owns the selected hierarchy sits behind these traits. The core
//! reads names, kinds and child lists only; child access is a capability check,
//! not a type check, and nothing is ever written back.

pub mod fixtures;

use crate::model::NodeKind;

/// Read-only view of one node in the source hierarchy.
pub trait SourceNode {
    fn name(&self) -> &str;

    fn kind(&self) -> NodeKind;

    /// Ordered children, or `None` for nodes that cannot carry children.
    fn children(&self) -> Option<&[Self]>
    where
        Self: Sized;
}

/// Read-only view of the host's current selection.
pub trait NodeSource {
    type Node: SourceNode;

    /// Roots explicitly designated by the user, in selection order.
    fn selection(&self) -> &[Self::Node];
}
