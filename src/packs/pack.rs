// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use std::path::{Path, PathBuf};

use crate::naming;

/// Один пакет иконок, то есть одна папка внутри `iconpacks/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPack {
    pub name: String,
    pub slug: String,
    pub path: PathBuf,
    pub packages: Vec<PackageEntry>,
}

/// Папка внутри пакета иконок. Её имя это имя android пакета, иконки
/// которого заменяются
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    pub name: String,
    pub path: PathBuf,
    pub resources: Vec<ResourceFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    pub path: PathBuf,
    pub basename: String,
    pub extension: String,
}

impl IconPack {
    pub fn new(name: &str, path: &Path) -> Self {
        Self {
            name: name.to_string(),
            slug: naming::slugify(name),
            path: path.to_path_buf(),
            packages: Vec::new(),
        }
    }

    /// Все ресурсы пакета вместе с папкой в которой они лежат, в порядке обхода
    pub fn resources(&self) -> impl Iterator<Item = (&PackageEntry, &ResourceFile)> {
        self.packages
            .iter()
            .flat_map(|package| package.resources.iter().map(move |res| (package, res)))
    }

    pub fn resource_count(&self) -> usize {
        self.packages.iter().map(|p| p.resources.len()).sum()
    }
}

impl PackageEntry {
    pub fn new(name: &str, path: &Path) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            resources: Vec::new(),
        }
    }

    pub fn normalized(&self) -> &str {
        naming::normalize_package(&self.name)
    }
}

impl ResourceFile {
    /// Возвращает `None` если у файла нет расширения или оно не из списка
    /// drawable расширений
    pub fn from_path(path: &Path) -> Option<Self> {
        let basename = path.file_stem()?.to_str()?;
        let extension = path.extension()?.to_str()?;

        if !naming::is_drawable_extension(extension) {
            return None;
        }

        Some(Self {
            path: path.to_path_buf(),
            basename: basename.to_string(),
            extension: extension.to_ascii_lowercase(),
        })
    }

    pub fn is_xml(&self) -> bool {
        self.extension == "xml"
    }

    /// Запись для массива mapping_source: `<пакет>:<имя>`, пакет без сокращения
    pub fn source_entry(&self, package: &str) -> String {
        format!("{}:{}", package, self.basename)
    }

    pub fn generated_stem(&self, package: &str, pack_slug: &str) -> String {
        naming::generated_stem(&self.basename, package, pack_slug)
    }

    pub fn generated_file_name(&self, package: &str, pack_slug: &str) -> String {
        naming::generated_file_name(&self.basename, package, pack_slug, &self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_from_path_filters_extensions() {
        let res = ResourceFile::from_path(Path::new("packs/a/com.android.systemui/ic_wifi.XML"))
            .expect("xml resource");
        assert_eq!(res.basename, "ic_wifi");
        assert_eq!(res.extension, "xml");
        assert!(res.is_xml());

        assert!(ResourceFile::from_path(Path::new("README.md")).is_none());
        assert!(ResourceFile::from_path(Path::new("no_extension")).is_none());
        assert!(ResourceFile::from_path(Path::new(".png")).is_none());
    }

    #[test]
    fn basename_keeps_inner_dots() {
        let res = ResourceFile::from_path(Path::new("ic.signal.bars.webp")).expect("webp resource");
        assert_eq!(res.basename, "ic.signal.bars");
        assert_eq!(res.extension, "webp");
        assert!(!res.is_xml());
    }

    #[test]
    fn entries_for_arrays() {
        let res = ResourceFile::from_path(Path::new("ic_qs_wifi.png")).expect("png resource");
        assert_eq!(res.source_entry("com.android.systemui"), "com.android.systemui:ic_qs_wifi");
        assert_eq!(res.generated_stem("com.android.systemui", "my_pack"), "ic_qs_wifi_systemui_my_pack");
        assert_eq!(res.generated_file_name("com.android.systemui", "my_pack"), "ic_qs_wifi_systemui_my_pack.png");
    }

    #[test]
    fn pack_iterates_resources_in_order() {
        let mut pack = IconPack::new("My Pack", Path::new("iconpacks/My Pack"));
        assert_eq!(pack.slug, "my_pack");

        let mut settings = PackageEntry::new("com.android.settings", Path::new("s"));
        settings.resources.push(ResourceFile::from_path(Path::new("a.png")).expect("png"));
        let mut systemui = PackageEntry::new("com.android.systemui", Path::new("u"));
        systemui.resources.push(ResourceFile::from_path(Path::new("b.xml")).expect("xml"));
        systemui.resources.push(ResourceFile::from_path(Path::new("c.jpg")).expect("jpg"));
        pack.packages.push(settings);
        pack.packages.push(systemui);

        let names: Vec<_> = pack
            .resources()
            .map(|(pkg, res)| format!("{}/{}", pkg.normalized(), res.basename))
            .collect();
        assert_eq!(names, ["settings/a", "systemui/b", "systemui/c"]);
        assert_eq!(pack.resource_count(), 3);
    }
}
