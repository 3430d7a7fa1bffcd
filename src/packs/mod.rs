// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

pub mod materializer;
pub mod pack;
pub mod refs;

pub use materializer::{materialize, MaterializeReport};
pub use pack::{IconPack, PackageEntry, ResourceFile};

use std::ffi::OsStr;
use std::io;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::error::{PrepError, Result};
use crate::naming;

/// Обходит `iconpacks/<пакет иконок>/<android пакет>/<файл>` и собирает
/// список пакетов иконок. Всё что лежит не на своём уровне вложенности
/// игнорируется, как и файлы с неподходящими расширениями. Порядок обхода
/// отсортирован по имени, от него зависит порядок блоков в манифесте и arrays.xml
pub fn scan(iconpacks_dir: &Path) -> Result<Vec<IconPack>> {
    task!("Scan icon packs in {}", iconpacks_dir.display());

    if !iconpacks_dir.is_dir() {
        return Err(PrepError::Io {
            path: iconpacks_dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "icon pack directory not found"),
        });
    }

    let mut packs = Vec::new();

    for pack_dir in children(iconpacks_dir, Kind::Dir)? {
        let mut pack = IconPack::new(entry_name(&pack_dir)?, pack_dir.path());

        for package_dir in children(pack_dir.path(), Kind::Dir)? {
            let mut package = PackageEntry::new(entry_name(&package_dir)?, package_dir.path());

            for file in children(package_dir.path(), Kind::File)? {
                let whitelisted = file
                    .path()
                    .extension()
                    .and_then(OsStr::to_str)
                    .is_some_and(naming::is_drawable_extension);

                if !whitelisted {
                    continue;
                }

                // Не-UTF-8 имя не может стать именем ресурса
                entry_name(&file)?;

                if let Some(resource) = ResourceFile::from_path(file.path()) {
                    package.resources.push(resource);
                }
            }

            if package.resources.is_empty() {
                warn!(" No drawables in {}", package.path.display());
            }

            pack.packages.push(package);
        }

        info!(" Pack {} ({}): {} resources", pack.name, pack.slug, pack.resource_count());
        packs.push(pack);
    }

    info!("Found {} icon packs", packs.len());
    Ok(packs)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Dir,
    File,
}

/// Непосредственные потомки папки нужного типа. Симлинки разворачиваются
fn children(dir: &Path, kind: Kind) -> Result<Vec<DirEntry>> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry?;
        let file_type = entry.file_type();

        let wanted = match kind {
            Kind::Dir => file_type.is_dir(),
            Kind::File => file_type.is_file(),
        };

        if wanted {
            entries.push(entry);
        }
    }

    Ok(entries)
}

fn entry_name(entry: &DirEntry) -> Result<&str> {
    entry
        .file_name()
        .to_str()
        .ok_or_else(|| PrepError::NonUtf8Name(entry.path().to_path_buf()))
}
