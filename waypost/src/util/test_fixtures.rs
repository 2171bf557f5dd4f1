// This file is part of the product Waypost.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug)]
pub struct TestFixtureRoot {
    path: PathBuf,
}

impl TestFixtureRoot {
    pub fn new_fixed(name: &str) -> std::io::Result<Self> {
        let root = fixtures_root().join(name);
        if root.exists() {
            fs::remove_dir_all(&root)?;
        }
        fs::create_dir_all(&root)?;
        Ok(Self { path: root })
    }

    pub fn new_unique(prefix: &str) -> std::io::Result<Self> {
        let name = format!("{}-{}", prefix, Uuid::new_v4());
        Self::new_fixed(&name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config_file(&self) -> PathBuf {
        self.path.join("config.yaml")
    }

    pub fn catalog_file(&self) -> PathBuf {
        self.path.join("catalog.yaml")
    }

    pub fn write_config(&self, content: &str) -> std::io::Result<PathBuf> {
        let path = self.config_file();
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn write_catalog(&self, content: &str) -> std::io::Result<PathBuf> {
        let path = self.catalog_file();
        fs::write(&path, content)?;
        Ok(path)
    }
}

impl Drop for TestFixtureRoot {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn fixtures_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    repo_root.join("target").join("test-fixtures")
}
