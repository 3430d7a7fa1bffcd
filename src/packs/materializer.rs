// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::{IoContext, Result};
use crate::packs::pack::IconPack;
use crate::packs::refs;

/// Сколько файлов записано и в скольких из них переписаны ссылки
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaterializeReport {
    pub copied: usize,
    pub rewritten: usize,
}

/// Копирует все ресурсы всех наборов в одну плоскую папку drawable под
/// сгенерированными именами. XML проходит через замену ссылок, остальное
/// копируется как есть. Файлы с совпадающим именем перезаписываются.
/// Исходники в `iconpacks/` не меняются
pub fn materialize(packs: &[IconPack], drawable_dir: &Path) -> Result<MaterializeReport> {
    task!("Copy drawables into {}", drawable_dir.display());

    if !drawable_dir.exists() {
        fs::create_dir_all(drawable_dir).at(drawable_dir)?;
        info!("Created drawable directory {}", drawable_dir.display());
    }

    let mut report = MaterializeReport::default();

    for pack in packs {
        info!("Processing pack: {} ({})", pack.name, pack.slug);

        for (package, resource) in pack.resources() {
            let target = drawable_dir.join(resource.generated_file_name(&package.name, &pack.slug));

            if resource.is_xml() {
                let content = fs::read_to_string(&resource.path).at(&resource.path)?;
                let updated = refs::rewrite_drawable_refs(&content, &package.name, &pack.slug);

                if let Cow::Owned(_) = updated {
                    report.rewritten += 1;
                    info!(" Updated drawable references in {}", resource.path.display());
                }

                fs::write(&target, updated.as_bytes()).at(&target)?;
            } else {
                fs::copy(&resource.path, &target).at(&resource.path)?;
            }

            info!(" Copying {} to {}", resource.path.display(), target.display());
            report.copied += 1;
        }
    }

    Ok(report)
}
