// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Run orchestration.
//!
//! One pass per trigger: fetch the sheet, build one estimate tree per selection
//! root, derive the flat legacy results and emit a single combined report. Passes
//! are served strictly serially; triggers received mid-pass queue on the control
//! channel.

pub mod types;

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::estimate::{build_tree, flatten_root};
use crate::model::{EstimateSheet, FlatEntry};
use crate::provider::{ProviderError, SheetProvider};
use crate::source::NodeSource;

pub use types::{ControlMessage, FlatEntryDto, ReportMessage, ResultsPayload, TreeDto};

/// Phases of one pass. Transitions are strictly linear; the only suspension
/// point is the sheet fetch in `LoadingSheet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    LoadingSheet,
    Building,
    Emitting,
}

#[derive(Debug)]
pub enum RunError {
    Provider(ProviderError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(source) => write!(f, "sheet fetch failed: {source}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Provider(source) => Some(source),
        }
    }
}

/// Drives complete passes over a node source using a sheet provider.
pub struct Runner<S, P> {
    source: S,
    provider: P,
}

impl<S: NodeSource, P: SheetProvider> Runner<S, P> {
    pub fn new(source: S, provider: P) -> Self {
        Self { source, provider }
    }

    /// One complete pass over the current selection.
    ///
    /// An empty selection short-circuits to [`ReportMessage::NoSelection`] without
    /// touching the provider. A provider failure aborts the pass; no partial
    /// results survive it.
    pub async fn run_once(&self) -> Result<ReportMessage, RunError> {
        let selection = self.source.selection();
        if selection.is_empty() {
            debug!("empty selection, sheet fetch skipped");
            return Ok(ReportMessage::NoSelection);
        }

        debug!(state = ?RunState::LoadingSheet, roots = selection.len());
        let rows = self.provider.fetch().await.map_err(RunError::Provider)?;
        let sheet = EstimateSheet::new(rows);

        debug!(state = ?RunState::Building, sheet_rows = sheet.len());
        let mut entries: Vec<FlatEntry> = Vec::new();
        let mut total_time = 0.0;
        let mut trees = Vec::with_capacity(selection.len());
        for root in selection {
            trees.push(build_tree(root, &sheet, true));
            total_time += flatten_root(root, &sheet, &mut entries);
        }

        debug!(state = ?RunState::Emitting, entries = entries.len(), total_time);
        Ok(ReportMessage::ShowResults(ResultsPayload {
            results: entries.iter().map(FlatEntryDto::from).collect(),
            total_time,
            hierarchies: trees.iter().map(TreeDto::from).collect(),
        }))
    }

    /// Serves triggers until the control channel closes or the report receiver
    /// is dropped.
    ///
    /// Runs one implicit pass on start, then one pass per received trigger.
    /// Triggers that arrive while a pass is in flight queue on the channel and
    /// are served in order. A failed pass is logged and emits nothing; the loop
    /// keeps serving.
    pub async fn serve(
        &self,
        mut control: mpsc::Receiver<ControlMessage>,
        reports: mpsc::Sender<ReportMessage>,
    ) {
        self.run_and_report(ControlMessage::Run, &reports).await;
        while let Some(trigger) = control.recv().await {
            if reports.is_closed() {
                break;
            }
            self.run_and_report(trigger, &reports).await;
        }
    }

    async fn run_and_report(&self, trigger: ControlMessage, reports: &mpsc::Sender<ReportMessage>) {
        info!(?trigger, "pass started");
        match self.run_once().await {
            Ok(report) => {
                if reports.send(report).await.is_err() {
                    debug!("report receiver dropped");
                }
            }
            Err(err) => error!(%err, "pass aborted"),
        }
        debug!(state = ?RunState::Idle, "pass finished");
    }
}
