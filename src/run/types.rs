// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Wire messages exchanged with the display layer.
//!
//! Key names and type tags follow the legacy display protocol (`nodeName`,
//! `totalTime`, `hierarchies`, ...); absent times are omitted from the JSON.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{EstimateTree, FlatEntry};

/// Inbound triggers from the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
pub enum ControlMessage {
    /// Implicit trigger fired once on load.
    #[serde(rename = "RUN")]
    Run,
    /// Explicit re-run request.
    #[serde(rename = "RUN_LOOKUP")]
    ReRun,
}

/// Outbound report for one completed pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "payload")]
pub enum ReportMessage {
    #[serde(rename = "NO_SELECTION")]
    NoSelection,
    #[serde(rename = "SHOW_RESULTS")]
    ShowResults(ResultsPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPayload {
    pub results: Vec<FlatEntryDto>,
    pub total_time: f64,
    pub hierarchies: Vec<TreeDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlatEntryDto {
    pub node_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreeDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_time: Option<f64>,
    pub subtree_time: f64,
    pub is_explicit: bool,
    pub children: Vec<TreeDto>,
}

impl From<&FlatEntry> for FlatEntryDto {
    fn from(entry: &FlatEntry) -> Self {
        Self { node_name: entry.name.clone(), time: entry.time }
    }
}

impl From<&EstimateTree> for TreeDto {
    fn from(tree: &EstimateTree) -> Self {
        Self {
            name: tree.name().to_owned(),
            matched_time: tree.matched_time(),
            subtree_time: tree.subtree_time(),
            is_explicit: tree.is_explicit(),
            children: tree.children().iter().map(TreeDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ControlMessage, FlatEntryDto, ReportMessage, ResultsPayload, TreeDto};

    #[test]
    fn no_selection_serializes_to_bare_type_tag() {
        let json = serde_json::to_value(ReportMessage::NoSelection).expect("serialize report");
        assert_eq!(json, serde_json::json!({ "type": "NO_SELECTION" }));
    }

    #[test]
    fn control_messages_use_legacy_tags() {
        let json = serde_json::to_value(ControlMessage::ReRun).expect("serialize control");
        assert_eq!(json, serde_json::json!({ "type": "RUN_LOOKUP" }));

        let parsed: ControlMessage =
            serde_json::from_value(serde_json::json!({ "type": "RUN_LOOKUP" }))
                .expect("deserialize control");
        assert_eq!(parsed, ControlMessage::ReRun);
    }

    #[test]
    fn absent_times_are_omitted_from_json() {
        let payload = ResultsPayload {
            results: vec![FlatEntryDto { node_name: "Card".to_owned(), time: None }],
            total_time: 0.0,
            hierarchies: vec![TreeDto {
                name: "Card".to_owned(),
                matched_time: None,
                subtree_time: 0.0,
                is_explicit: true,
                children: Vec::new(),
            }],
        };

        let json = serde_json::to_value(&payload).expect("serialize payload");
        assert_eq!(json["results"][0], serde_json::json!({ "nodeName": "Card" }));
        assert!(json["hierarchies"][0].get("matchedTime").is_none());
        assert_eq!(json["hierarchies"][0]["isExplicit"], serde_json::json!(true));
    }
}
