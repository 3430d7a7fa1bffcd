// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoContext, PrepError, Result};
use crate::frontend::manifest::DEFAULT_INTENT_ACTION;

/// Имя конфига который ищется в корне проекта если путь не передан явно
pub const DEFAULT_CONFIG_FILE: &str = "iconpacks.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub paths: Paths,
    pub manifest: ManifestOptions,

    // Корень проекта, относительные пути считаются от него
    #[serde(skip)]
    pub base_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Paths {
    pub iconpacks: PathBuf,
    pub drawable: PathBuf,
    pub arrays: PathBuf,
    pub manifest: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct ManifestOptions {
    pub intent_action: String,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            iconpacks: PathBuf::from("iconpacks"),
            drawable: PathBuf::from("app/src/main/res/drawable"),
            arrays: PathBuf::from("app/src/main/res/values/arrays.xml"),
            manifest: PathBuf::from("app/src/main/AndroidManifest.xml"),
        }
    }
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            intent_action: DEFAULT_INTENT_ACTION.to_string(),
        }
    }
}

impl Config {
    pub fn with_base(base_path: &Path) -> Self {
        Self {
            base_path: base_path.to_path_buf(),
            ..Default::default()
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    pub fn iconpacks_dir(&self) -> PathBuf {
        self.resolve(&self.paths.iconpacks)
    }

    pub fn drawable_dir(&self) -> PathBuf {
        self.resolve(&self.paths.drawable)
    }

    pub fn arrays_file(&self) -> PathBuf {
        self.resolve(&self.paths.arrays)
    }

    pub fn manifest_file(&self) -> PathBuf {
        self.resolve(&self.paths.manifest)
    }
}

pub fn parse_config(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|source| PrepError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Загружает конфиг. Явно переданный файл обязан существовать, а
/// `iconpacks.toml` в корне проекта необязателен, без него берутся
/// пути по умолчанию
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(p) => p.to_path_buf(),
        None => {
            let default_path = root.join(DEFAULT_CONFIG_FILE);
            if !default_path.is_file() {
                return Ok(Config::with_base(root));
            }
            default_path
        }
    };

    let content = fs::read_to_string(&path).at(&path)?;
    let mut config = parse_config(&content, &path)?;
    config.base_path = root.to_path_buf();

    Ok(config)
}
