// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

pub mod toml_parser;

pub use toml_parser::{Config, ManifestOptions, Paths, DEFAULT_CONFIG_FILE};

use std::path::Path;

use crate::error::Result;

pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    toml_parser::load_config(root, config_path)
}
