// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sheet provider seam.
//!
//! The sheet is fetched exactly once per pass; the fetch is the pass's only
//! suspension point. A failed fetch aborts the pass with no partial results.
//! No retries and no timeout: a provider that never resolves stalls the pass.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::SheetRow;

/// Asynchronous source of the full estimate row sequence.
#[allow(async_fn_in_trait)]
pub trait SheetProvider {
    /// Fetches the full row sequence. Awaited before any matching begins.
    async fn fetch(&self) -> Result<Vec<SheetRow>, ProviderError>;
}

#[derive(Debug)]
pub enum ProviderError {
    /// The provider could not be reached or rejected the request.
    Unavailable { message: String },
    /// The provider answered but the rows could not be decoded.
    Decode { message: String },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { message } => write!(f, "sheet provider unavailable: {message}"),
            Self::Decode { message } => write!(f, "sheet rows could not be decoded: {message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Fixed rows with an optional simulated round-trip latency.
#[derive(Debug, Clone, Default)]
pub struct StaticSheet {
    rows: Vec<SheetRow>,
    latency: Option<Duration>,
}

impl StaticSheet {
    pub fn new(rows: Vec<SheetRow>) -> Self {
        Self { rows, latency: None }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

impl SheetProvider for StaticSheet {
    async fn fetch(&self) -> Result<Vec<SheetRow>, ProviderError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        Ok(self.rows.clone())
    }
}

/// Reads a JSON array of rows from disk.
#[derive(Debug, Clone)]
pub struct JsonSheetFile {
    path: PathBuf,
}

impl JsonSheetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetProvider for JsonSheetFile {
    async fn fetch(&self) -> Result<Vec<SheetRow>, ProviderError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            ProviderError::Unavailable { message: format!("{}: {err}", self.path.display()) }
        })?;
        serde_json::from_str(&raw).map_err(|err| ProviderError::Decode {
            message: format!("{}: {err}", self.path.display()),
        })
    }
}
