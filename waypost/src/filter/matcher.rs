// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::filter::SelectionState;
use serde::{Deserialize, Serialize};

/// How a selection combines against an item's tags. Both rules treat an
/// empty selection as matching everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchRule {
    /// At least one selected label per category, every category satisfied.
    #[default]
    Grouped,
    /// Every selected label must be present, ignoring categories.
    All,
}

pub fn item_matches(selection: &SelectionState, item_tags: &[String], rule: MatchRule) -> bool {
    if selection.is_empty() {
        return true;
    }

    match rule {
        MatchRule::Grouped => selection.categories().all(|category| {
            selection
                .selected_in(category)
                .map(|labels| labels.iter().any(|label| item_tags.iter().any(|tag| tag == label)))
                // A category key always holds a non-empty set; treat a
                // missing one as vacuously satisfied.
                .unwrap_or(true)
        }),
        MatchRule::All => selection
            .all_labels()
            .into_iter()
            .all(|label| item_tags.iter().any(|tag| tag.as_str() == label)),
    }
}
