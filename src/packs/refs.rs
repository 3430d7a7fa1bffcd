// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::naming;

static DRAWABLE_REF: OnceLock<Regex> = OnceLock::new();

fn drawable_ref() -> &'static Regex {
    DRAWABLE_REF.get_or_init(|| {
        Regex::new(r"@drawable/([a-zA-Z0-9_]+)").expect("drawable reference pattern is valid")
    })
}

/// XML ресурсы (vector, layer-list, selector) ссылаются друг на друга через
/// `@drawable/имя`. После копирования в общую папку все файлы получают
/// суффикс пакета и набора, поэтому ссылки нужно переписать так же.
/// Если ссылок нет, возвращается исходная строка без копирования
pub fn rewrite_drawable_refs<'a>(content: &'a str, package: &str, pack_slug: &str) -> Cow<'a, str> {
    drawable_ref().replace_all(content, |caps: &Captures<'_>| {
        let name = &caps[1];
        let renamed = naming::generated_stem(name, package, pack_slug);

        info!(" Replacing {} with {}", name, renamed);
        format!("@drawable/{}", renamed)
    })
}
