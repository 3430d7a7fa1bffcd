// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use std::fs;
use std::path::Path;

use quick_xml::escape::escape;

use crate::error::{IoContext, Result};
use crate::frontend::splice::{splice_file, Anchors};
use crate::packs::IconPack;

/// Action по которому PixelXpert находит activity пакетов иконок
pub const DEFAULT_INTENT_ACTION: &str = "sh.siava.pixelxpert.iconpack";

/// Один блок `<activity>` на каждый пакет иконок, в порядке обхода
pub fn render_activities(packs: &[IconPack], intent_action: &str) -> String {
    let mut activities = String::new();

    for pack in packs {
        activities.push_str(&format!("\n    <activity android:name=\"{}\"\n", pack.slug));
        activities.push_str(&format!("        android:label=\"{}\"\n", escape(pack.name.as_str())));
        activities.push_str("        android:exported=\"true\">\n");
        activities.push_str("        <intent-filter>\n");
        activities.push_str(&format!("            <action android:name=\"{}\" />\n", intent_action));
        activities.push_str("            <category android:name=\"android.intent.category.DEFAULT\" />\n");
        activities.push_str("        </intent-filter>\n");
        activities.push_str("    </activity>\n");
    }

    activities
}

/// Новый текст манифеста без записи на диск. Если маркеров нет, это ошибка
pub fn prepare_manifest(manifest_path: &Path, packs: &[IconPack], intent_action: &str) -> Result<String> {
    splice_file(manifest_path, Anchors::MANIFEST, &render_activities(packs, intent_action))
}

/// Отдельное обновление только манифест, без копирования drawable
pub fn update_manifest(manifest_path: &Path, packs: &[IconPack], intent_action: &str) -> Result<()> {
    let new_content = prepare_manifest(manifest_path, packs, intent_action)?;
    write_manifest(manifest_path, &new_content)
}

/// Запись уже подготовленного текста, её же использует `frontend::prepare`
pub fn write_manifest(manifest_path: &Path, content: &str) -> Result<()> {
    fs::write(manifest_path, content).at(manifest_path)?;

    info!("Manifest file updated: {}", manifest_path.display());
    Ok(())
}
