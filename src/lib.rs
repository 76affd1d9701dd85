// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Thalassa — sheet-backed time estimation over selected node hierarchies.
//!
//! One pass fetches an estimate sheet, matches node names against it, rolls matched
//! times up through ancestry and emits a combined report for the display layer.

pub mod estimate;
pub mod model;
pub mod provider;
pub mod run;
pub mod source;
