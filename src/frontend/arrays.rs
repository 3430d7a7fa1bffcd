// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use std::fs;
use std::path::Path;

use quick_xml::escape::partial_escape;

use crate::error::{IoContext, Result};
use crate::frontend::splice::{splice_file, Anchors};
use crate::packs::IconPack;

/// Для каждого набора три массива строк:
/// - `<slug>` с именами двух других массивов
/// - `mapping_source_<slug>` с исходными `пакет:имя`
/// - `replacement_<slug>` с новыми именами ресурсов
///
/// Последние два всегда одной длины и в одном порядке, элемент N одного
/// соответствует элементу N другого
pub fn render_arrays(packs: &[IconPack]) -> String {
    let mut arrays = String::new();

    for pack in packs {
        let slug = &pack.slug;

        arrays.push_str(&format!("\n<string-array name=\"{}\">\n", slug));
        arrays.push_str(&format!("    <item>mapping_source_{}</item>\n", slug));
        arrays.push_str(&format!("    <item>replacement_{}</item>\n", slug));
        arrays.push_str("</string-array>\n");

        arrays.push_str(&format!("\n<string-array name=\"mapping_source_{}\">\n", slug));
        for (package, resource) in pack.resources() {
            let entry = resource.source_entry(&package.name);
            arrays.push_str(&format!("    <item>{}</item>\n", partial_escape(entry.as_str())));
        }
        arrays.push_str("</string-array>\n");

        arrays.push_str(&format!("\n<string-array name=\"replacement_{}\">\n", slug));
        for (package, resource) in pack.resources() {
            let stem = resource.generated_stem(&package.name, slug);
            arrays.push_str(&format!("    <item>{}</item>\n", partial_escape(stem.as_str())));
        }
        arrays.push_str("</string-array>\n");
    }

    arrays
}

pub fn prepare_arrays(arrays_path: &Path, packs: &[IconPack]) -> Result<String> {
    splice_file(arrays_path, Anchors::RESOURCES, &render_arrays(packs))
}

/// Отдельное обновление только arrays.xml, без копирования drawable
pub fn update_arrays(arrays_path: &Path, packs: &[IconPack]) -> Result<()> {
    let new_content = prepare_arrays(arrays_path, packs)?;
    write_arrays(arrays_path, &new_content)
}

/// Запись уже подготовленного текста, её же использует `frontend::prepare`
pub fn write_arrays(arrays_path: &Path, content: &str) -> Result<()> {
    fs::write(arrays_path, content).at(arrays_path)?;

    info!("Arrays file updated: {}", arrays_path.display());
    Ok(())
}
