// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use std::fmt;

use colored::{ColoredString, Colorize};

/// Уровень сообщения. От него зависит префикс, его цвет и поток вывода
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Task,
    Info,
    Note,
    Warn,
    Fatal,
}

impl Level {
    fn prefix(self) -> Option<ColoredString> {
        match self {
            Level::Task => Some("TASK:".green().bold()),
            Level::Info => None,
            Level::Note => Some("NOTE:".blue().bold()),
            Level::Warn => Some("WARN:".yellow().bold()),
            Level::Fatal => Some("FATAL:".red().bold().on_black()),
        }
    }

    fn is_stderr(self) -> bool {
        matches!(self, Level::Warn | Level::Fatal)
    }
}

/// Общая точка вывода для всех макросов ниже. Напрямую вызывать не нужно
#[doc(hidden)]
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
    let line = match level.prefix() {
        Some(prefix) => format!("{} {}", prefix, args),
        None => args.to_string(),
    };

    if level.is_stderr() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Начало этапа подготовки. Выводит "TASK: Сообщение", префикс зелёный и жирный
#[macro_export]
macro_rules! task {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Task, format_args!($($arg)*))
    };
}

/// Обычная информация без префикса (скопированные файлы, замены ссылок)
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Info, format_args!($($arg)*))
    };
}

/// Важные заметки, например итог работы. Префикс "NOTE:" синий
#[macro_export]
macro_rules! note {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Note, format_args!($($arg)*))
    };
}

/// Предупреждения в stderr, префикс "WARN:" жёлтый. Подготовка продолжается
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Warn, format_args!($($arg)*))
    };
}

/// Фатальная ошибка: вывод "FATAL: Сообщение" в stderr и выход с кодом 1.
/// Продолжать подготовку после такой ошибки нельзя
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {{
        $crate::logger::emit($crate::logger::Level::Fatal, format_args!($($arg)*));
        ::std::process::exit(1)
    }};
}
