// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// Closed set of element kinds a source node can carry.
///
/// The wire form uses the host's SCREAMING_SNAKE_CASE tags (`COMPONENT_SET`,
/// `SHAPE_WITH_TEXT`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Component,
    Instance,
    Frame,
    Group,
    ComponentSet,
    Ellipse,
    Polygon,
    Rectangle,
    Text,
    ShapeWithText,
    Table,
    Sticky,
    Star,
    Vector,
    Section,
    Page,
    Slice,
    Line,
    Connector,
}

impl NodeKind {
    /// Whether nodes of this kind are eligible for flattened result emission.
    pub fn is_countable(self) -> bool {
        matches!(
            self,
            Self::Component
                | Self::Instance
                | Self::Frame
                | Self::Group
                | Self::ComponentSet
                | Self::Ellipse
                | Self::Polygon
                | Self::Rectangle
                | Self::Text
                | Self::ShapeWithText
                | Self::Table
                | Self::Sticky
                | Self::Star
                | Self::Vector
                | Self::Section
        )
    }
}
