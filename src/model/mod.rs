// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types.
//!
//! The per-run estimate sheet plus the derived tree/flat result types a pass produces.

pub mod flat;
pub mod node_kind;
pub mod sheet;
pub mod tree;

pub use flat::FlatEntry;
pub use node_kind::NodeKind;
pub use sheet::{EstimateSheet, SheetRow};
pub use tree::EstimateTree;
