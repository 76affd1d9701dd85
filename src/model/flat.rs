// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// One flattened legacy result entry.
///
/// The name is trimmed. `time` is absent only when the entry is a selection root
/// that had no sheet match; unmatched descendants are skipped instead of emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry {
    pub name: String,
    pub time: Option<f64>,
}
