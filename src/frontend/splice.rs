// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::error::{IoContext, PrepError, Result};

/// Пара маркеров между которыми находится генерируемый текст
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    pub start: &'static str,
    pub end: &'static str,
}

impl Anchors {
    pub const MANIFEST: Anchors = Anchors {
        start: "<!-- START OF ICON PACKS -->",
        end: "<!-- END OF ICON PACKS -->",
    };

    pub const RESOURCES: Anchors = Anchors {
        start: "<resources>",
        end: "</resources>",
    };
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceError {
    #[error("marker {0:?} not found")]
    MarkerNotFound(&'static str),
}

/// Заменяет всё между первым `start` и первым `end` после него на
/// `replacement`. Сами маркеры и текст снаружи остаются как были
pub fn splice(content: &str, anchors: Anchors, replacement: &str) -> std::result::Result<String, SpliceError> {
    let start = content
        .find(anchors.start)
        .ok_or(SpliceError::MarkerNotFound(anchors.start))?
        + anchors.start.len();

    let end = content[start..]
        .find(anchors.end)
        .map(|offset| start + offset)
        .ok_or(SpliceError::MarkerNotFound(anchors.end))?;

    let mut spliced = String::with_capacity(content.len() - (end - start) + replacement.len());
    spliced.push_str(&content[..start]);
    spliced.push_str(replacement);
    spliced.push_str(&content[end..]);

    Ok(spliced)
}

/// Читает файл и возвращает его содержимое с подставленным текстом.
/// Ничего не записывает, запись делает вызывающий код
pub fn splice_file(path: &Path, anchors: Anchors, replacement: &str) -> Result<String> {
    let content = fs::read_to_string(path).at(path)?;

    splice(&content, anchors, replacement).map_err(|SpliceError::MarkerNotFound(marker)| {
        PrepError::MarkerNotFound {
            path: path.to_path_buf(),
            marker,
        }
    })
}
