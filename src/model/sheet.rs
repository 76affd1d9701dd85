// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// One estimate row as delivered by the sheet provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    pub name: String,
    pub time: f64,
}

/// Immutable per-run lookup table over sheet rows.
///
/// Rows keep provider order; duplicate names are allowed and the first match wins.
/// Lookups trim the queried name and compare case-insensitively against the row name.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateSheet {
    rows: Vec<SheetRow>,
    folded_names: Vec<String>,
}

impl EstimateSheet {
    pub fn new(rows: Vec<SheetRow>) -> Self {
        let folded_names = rows.iter().map(|row| row.name.to_lowercase()).collect();
        Self { rows, folded_names }
    }

    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Time of the first row whose name equals `name` after trimming and case folding.
    pub fn match_time(&self, name: &str) -> Option<f64> {
        let folded = name.trim().to_lowercase();
        self.folded_names
            .iter()
            .position(|row_name| *row_name == folded)
            .map(|index| self.rows[index].time)
    }
}

#[cfg(test)]
mod tests {
    use super::{EstimateSheet, SheetRow};

    fn row(name: &str, time: f64) -> SheetRow {
        SheetRow { name: name.to_owned(), time }
    }

    #[test]
    fn matches_trimmed_and_case_folded_names() {
        let sheet = EstimateSheet::new(vec![row("button", 5.0)]);

        assert_eq!(sheet.match_time(" Button "), Some(5.0));
        assert_eq!(sheet.match_time("BUTTON"), Some(5.0));
        assert_eq!(sheet.match_time("Button Primary"), None);
    }

    #[test]
    fn first_matching_row_wins_over_duplicates() {
        let sheet = EstimateSheet::new(vec![row("Switch", 1.0), row("switch", 7.0)]);

        assert_eq!(sheet.match_time("Switch"), Some(1.0));
    }

    #[test]
    fn zero_time_rows_still_match() {
        let sheet = EstimateSheet::new(vec![row("Divider", 0.0)]);

        assert_eq!(sheet.match_time("Divider"), Some(0.0));
    }

    #[test]
    fn empty_trimmed_query_matches_empty_row_name() {
        let sheet = EstimateSheet::new(vec![row("", 2.0)]);

        assert_eq!(sheet.match_time("   "), Some(2.0));

        let sheet = EstimateSheet::new(vec![row("Button", 5.0)]);
        assert_eq!(sheet.match_time("   "), None);
    }

    #[test]
    fn exposes_rows_in_provider_order() {
        let rows = vec![row("Card", 8.0), row("Checkbox", 2.0)];
        let sheet = EstimateSheet::new(rows.clone());

        assert_eq!(sheet.rows(), rows.as_slice());
        assert_eq!(sheet.len(), 2);
        assert!(!sheet.is_empty());
        assert!(EstimateSheet::new(Vec::new()).is_empty());
    }
}
