// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

/// Расширения ресурсов которые попадают в drawable. Сравнение без учёта регистра
pub const DRAWABLE_EXTENSIONS: &[&str] = &["xml", "png", "jpg", "jpeg", "webp"];

// Короткие имена для системных пакетов, остальные пакеты остаются как есть
const PACKAGE_ALIASES: &[(&str, &str)] = &[
    ("com.android.systemui", "systemui"),
    ("com.android.settings", "settings"),
];

/// Возвращает короткий псевдоним для известного пакета либо сам пакет
pub fn normalize_package(package: &str) -> &str {
    PACKAGE_ALIASES
        .iter()
        .find(|(full, _)| *full == package)
        .map_or(package, |(_, short)| *short)
}

/// Превращает имя пакета иконок в идентификатор: нижний регистр, любой символ
/// кроме ASCII букв и цифр заменяется на `_`
pub fn slugify(pack_name: &str) -> String {
    pack_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Имя ресурса после переименования, без расширения. Используется и для имени
/// файла и для ссылок `@drawable/...` и для массива replacement
pub fn generated_stem(basename: &str, package: &str, pack_slug: &str) -> String {
    format!(
        "{}_{}_{}",
        basename,
        normalize_package(package).to_lowercase(),
        pack_slug
    )
}

pub fn generated_file_name(basename: &str, package: &str, pack_slug: &str, extension: &str) -> String {
    format!(
        "{}.{}",
        generated_stem(basename, package, pack_slug),
        extension.to_ascii_lowercase()
    )
}

pub fn is_drawable_extension(extension: &str) -> bool {
    let extension = extension.to_ascii_lowercase();
    DRAWABLE_EXTENSIONS.contains(&extension.as_str())
}
