// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

//! Подготовка пакетов иконок перед сборкой: копирование drawable под
//! уникальными именами, activity в манифесте и массивы в arrays.xml

#[macro_use]
pub mod logger;

pub mod build_system;
pub mod error;
pub mod frontend;
pub mod naming;
pub mod packs;
pub mod parser;

pub use error::{PrepError, Result};
