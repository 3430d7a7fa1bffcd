// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Любая из этих ошибок останавливает подготовку целиком
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Config error in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Marker {marker:?} not found in {path:?}")]
    MarkerNotFound { path: PathBuf, marker: &'static str },

    #[error("Name is not valid UTF-8: {0:?}")]
    NonUtf8Name(PathBuf),
}

pub type Result<T> = std::result::Result<T, PrepError>;

/// Привязывает путь к ошибке ввода-вывода, иначе из сообщения непонятно
/// какой файл не удалось прочитать или записать
pub(crate) trait IoContext<T> {
    fn at(self, path: &Path) -> Result<T>;
}

impl<T> IoContext<T> for io::Result<T> {
    fn at(self, path: &Path) -> Result<T> {
        self.map_err(|source| PrepError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
