// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::filter::{
    FilterField, FilterableItem, MatchRule, SelectionState, TagCache, item_matches,
};
use log::{debug, info};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    FieldOutOfRange { index: usize, field_count: usize },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::FieldOutOfRange { index, field_count } => write!(
                f,
                "Filter field index {} is out of range ({} fields)",
                index, field_count
            ),
        }
    }
}

impl Error for FilterError {}

/// Drives the filter lifecycle: owns field checked-state, evaluates the
/// matching rule over all items on every change, and exposes the per-item
/// visibility verdicts.
pub struct FilterEngine {
    fields: Vec<FilterField>,
    items: Vec<FilterableItem>,
    cache: TagCache,
    rule: MatchRule,
    visible: HashMap<String, bool>,
    visible_count: usize,
}

impl FilterEngine {
    /// Builds the engine and runs the initial evaluation so default
    /// visibility matches an empty selection. Returns `None` when there is
    /// nothing to wire up; that is not an error for the embedding host.
    pub fn initialize(
        fields: Vec<FilterField>,
        items: Vec<FilterableItem>,
        rule: MatchRule,
    ) -> Option<Self> {
        if fields.is_empty() || items.is_empty() {
            info!(
                "Required filter inputs not found ({} fields, {} items), skipping initialization",
                fields.len(),
                items.len()
            );
            return None;
        }

        info!(
            "Initializing filters: {} fields, {} items",
            fields.len(),
            items.len()
        );

        let mut engine = Self {
            fields,
            items,
            cache: TagCache::new(),
            rule,
            visible: HashMap::new(),
            visible_count: 0,
        };
        engine.evaluate();
        Some(engine)
    }

    /// Reacts to one field's checked-state change and re-evaluates.
    /// Returns the new visible count.
    pub fn set_field_checked(&mut self, index: usize, checked: bool) -> Result<usize, FilterError> {
        let field_count = self.fields.len();
        let field = self
            .fields
            .get_mut(index)
            .ok_or(FilterError::FieldOutOfRange { index, field_count })?;
        field.checked = checked;
        Ok(self.evaluate())
    }

    /// Unchecks every field and re-evaluates; every item becomes visible.
    pub fn clear_all(&mut self) -> usize {
        info!("Clearing all filters");
        for field in &mut self.fields {
            field.checked = false;
        }
        self.evaluate()
    }

    /// Full evaluation pass: rebuild the selection, test every item, apply
    /// the verdicts. Returns the visible count.
    pub fn evaluate(&mut self) -> usize {
        let selection = SelectionState::from_fields(&self.fields);

        if selection.is_empty() {
            debug!("No filters selected, showing all items");
            for item in &self.items {
                self.visible.insert(item.id.clone(), true);
            }
            self.visible_count = self.items.len();
            return self.visible_count;
        }

        let mut visible_count = 0;
        for item in &self.items {
            let item_tags = self.cache.tags_for(item);
            let matches = item_matches(&selection, &item_tags, self.rule);
            self.visible.insert(item.id.clone(), matches);
            if matches {
                visible_count += 1;
            }
        }
        self.visible_count = visible_count;
        debug!("Filtering complete: {} items visible", visible_count);
        visible_count
    }

    pub fn fields(&self) -> &[FilterField] {
        &self.fields
    }

    pub fn items(&self) -> &[FilterableItem] {
        &self.items
    }

    pub fn rule(&self) -> MatchRule {
        self.rule
    }

    pub fn is_visible(&self, item_id: &str) -> Option<bool> {
        self.visible.get(item_id).copied()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| self.visible.get(&item.id).copied().unwrap_or(false))
            .map(|item| item.id.as_str())
            .collect()
    }

    /// Raw-tag scans performed so far; flat across repeat evaluations.
    pub fn tag_scan_count(&self) -> u64 {
        self.cache.scan_count()
    }
}
