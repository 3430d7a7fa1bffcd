// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use clap::Parser;

use iconpack_prep::build_system::{Actions, BuildSystem};
use iconpack_prep::packs::IconPack;
use iconpack_prep::{fatal, frontend, info, note, parser, task};

fn main() {
    let build_system = BuildSystem::parse();
    task!("iconpack-prep {}", env!("CARGO_PKG_VERSION"));

    let mut config = match parser::load(&build_system.root, build_system.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fatal!("Failed to load config: {}", e),
    };
    build_system.apply_overrides(&mut config);

    match build_system.action() {
        Actions::Run => match frontend::prepare(&config) {
            Ok(summary) => note!(
                "Prepared {} icon packs: {} drawables copied, references rewritten in {}",
                summary.packs,
                summary.resources,
                summary.rewritten
            ),
            Err(e) => fatal!("{}", e),
        },

        Actions::List => match frontend::plan(&config) {
            Ok(packs) => print_plan(&packs),
            Err(e) => fatal!("{}", e),
        },
    }
}

fn print_plan(packs: &[IconPack]) {
    for pack in packs {
        note!("{} ({}) from {}", pack.name, pack.slug, pack.path.display());

        for (package, resource) in pack.resources() {
            info!(
                " {} -> {}",
                resource.source_entry(&package.name),
                resource.generated_file_name(&package.name, &pack.slug)
            );
        }
    }
}
