// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

pub mod arrays;
pub mod manifest;
pub mod splice;

use crate::error::Result;
use crate::packs::{self, IconPack};
use crate::parser::Config;

/// Итог подготовки для финального сообщения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub packs: usize,
    pub resources: usize,
    pub rewritten: usize,
}

/// Фронтенд функция для полной подготовки пакетов иконок. Порядок такой:
/// обход папки, генерация нового манифеста и arrays.xml в памяти,
/// копирование drawable, запись манифеста и arrays.xml.
///
/// Оба файла собираются до любой записи, поэтому если в одном из них нет
/// маркеров, то ни drawable, ни манифест, ни arrays.xml не меняются
pub fn prepare(config: &Config) -> Result<Summary> {
    let icon_packs = plan(config)?;

    let manifest_path = config.manifest_file();
    let arrays_path = config.arrays_file();

    task!("Render activities for {}", manifest_path.display());
    let manifest_content = manifest::prepare_manifest(&manifest_path, &icon_packs, &config.manifest.intent_action)?;

    task!("Render string arrays for {}", arrays_path.display());
    let arrays_content = arrays::prepare_arrays(&arrays_path, &icon_packs)?;

    let report = packs::materialize(&icon_packs, &config.drawable_dir())?;

    task!("Write generated resources");
    manifest::write_manifest(&manifest_path, &manifest_content)?;
    arrays::write_arrays(&arrays_path, &arrays_content)?;

    Ok(Summary {
        packs: icon_packs.len(),
        resources: report.copied,
        rewritten: report.rewritten,
    })
}

/// Только обход папки с пакетами иконок, на диск ничего не пишется
pub fn plan(config: &Config) -> Result<Vec<IconPack>> {
    packs::scan(&config.iconpacks_dir())
}
