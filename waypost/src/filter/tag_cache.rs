// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::filter::FilterableItem;
use log::error;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Memoized trimmed tag sequences keyed by item id. Entries are written at
/// most once per item and never evicted; item tag data is immutable after
/// the catalog is loaded.
#[derive(Debug, Default)]
pub struct TagCache {
    entries: RwLock<HashMap<String, Vec<String>>>,
    scans: AtomicU64,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the item's trimmed tags in load order, scanning the raw
    /// tags only on the first request for that item.
    pub fn tags_for(&self, item: &FilterableItem) -> Vec<String> {
        match self.entries.read() {
            Ok(entries) => {
                if let Some(tags) = entries.get(&item.id) {
                    return tags.clone();
                }
            }
            Err(_) => {
                error!("🚨 CRITICAL: TagCache read lock poisoned in tags_for");
                return scan_tags(item);
            }
        }

        let tags = scan_tags(item);
        self.scans.fetch_add(1, Ordering::Relaxed);

        match self.entries.write() {
            Ok(mut entries) => {
                entries.entry(item.id.clone()).or_insert_with(|| tags.clone());
            }
            Err(_) => {
                error!("🚨 CRITICAL: TagCache write lock poisoned in tags_for");
            }
        }
        tags
    }

    /// Number of raw-tag scans performed so far. Stays flat across repeat
    /// lookups for already-cached items.
    pub fn scan_count(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        match self.entries.read() {
            Ok(entries) => entries.len(),
            Err(_) => {
                error!("🚨 CRITICAL: TagCache read lock poisoned in len");
                0
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn scan_tags(item: &FilterableItem) -> Vec<String> {
    item.raw_tags
        .iter()
        .map(|tag| tag.trim().to_string())
        .collect()
}
