// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pins the outbound JSON wire shape consumed by the display layer.

use serde_json::json;
use thalassa::model::{NodeKind, SheetRow};
use thalassa::provider::StaticSheet;
use thalassa::run::Runner;
use thalassa::source::fixtures::{FixtureNode, FixtureSelection};

fn row(name: &str, time: f64) -> SheetRow {
    SheetRow { name: name.to_owned(), time }
}

#[tokio::test]
async fn empty_selection_wire_shape() {
    let runner = Runner::new(FixtureSelection::default(), StaticSheet::new(Vec::new()));

    let report = runner.run_once().await.expect("pass");
    let wire = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(wire, json!({ "type": "NO_SELECTION" }));
}

#[tokio::test]
async fn results_wire_shape_matches_legacy_protocol() {
    let selection = FixtureSelection::new(vec![FixtureNode::branch(
        "Card",
        NodeKind::Frame,
        vec![FixtureNode::leaf(" Button ", NodeKind::Instance)],
    )]);
    let runner = Runner::new(selection, StaticSheet::new(vec![row("Button", 5.0)]));

    let report = runner.run_once().await.expect("pass");
    let wire = serde_json::to_value(&report).expect("serialize report");

    assert_eq!(
        wire,
        json!({
            "type": "SHOW_RESULTS",
            "payload": {
                "results": [
                    { "nodeName": "Card" },
                    { "nodeName": "Button", "time": 5.0 }
                ],
                "totalTime": 5.0,
                "hierarchies": [
                    {
                        "name": "Card",
                        "subtreeTime": 5.0,
                        "isExplicit": true,
                        "children": [
                            {
                                "name": " Button ",
                                "matchedTime": 5.0,
                                "subtreeTime": 5.0,
                                "isExplicit": false,
                                "children": []
                            }
                        ]
                    }
                ]
            }
        })
    );
}
