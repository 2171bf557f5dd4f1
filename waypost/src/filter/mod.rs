// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod engine;
pub mod matcher;
pub mod selection;
pub mod tag_cache;

pub use engine::{FilterEngine, FilterError};
pub use matcher::{MatchRule, item_matches};
pub use selection::SelectionState;
pub use tag_cache::TagCache;

/// Category assigned to filter fields that do not declare one.
pub const DEFAULT_CATEGORY: &str = "default";

/// One selectable control: a tag label paired with the category it filters
/// under. Checked state is owned by the engine after initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterField {
    pub label: String,
    pub category: Option<String>,
    pub checked: bool,
}

impl FilterField {
    pub fn new(label: impl Into<String>, category: Option<String>) -> Self {
        Self {
            label: label.into(),
            category,
            checked: false,
        }
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

/// One record whose visibility the engine controls. Tags are kept as
/// loaded; trimming happens in the extraction step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterableItem {
    pub id: String,
    pub raw_tags: Vec<String>,
}

impl FilterableItem {
    pub fn new(id: impl Into<String>, raw_tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            raw_tags,
        }
    }
}
