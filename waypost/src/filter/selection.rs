// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::filter::FilterField;
use std::collections::{HashMap, HashSet};

/// Selected tag labels grouped by category. Rebuilt from the current field
/// state on every evaluation; never stored between evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    by_category: HashMap<String, HashSet<String>>,
}

impl SelectionState {
    pub fn from_fields(fields: &[FilterField]) -> Self {
        let mut by_category: HashMap<String, HashSet<String>> = HashMap::new();
        for field in fields {
            if !field.checked {
                continue;
            }
            let label = field.label.trim();
            if label.is_empty() {
                continue;
            }
            by_category
                .entry(field.category_or_default().to_string())
                .or_default()
                .insert(label.to_string());
        }
        Self { by_category }
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.by_category.keys().map(String::as_str)
    }

    pub fn selected_in(&self, category: &str) -> Option<&HashSet<String>> {
        self.by_category.get(category)
    }

    /// Union of every selected label across all categories, for the flat
    /// matching rule.
    pub fn all_labels(&self) -> HashSet<&str> {
        self.by_category
            .values()
            .flat_map(|labels| labels.iter().map(String::as_str))
            .collect()
    }
}
