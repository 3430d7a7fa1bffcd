// Copyright (c) 2025 Spawn
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// https://www.eclipse.org/legal/epl-2.0/
// SPDX-License-Identifier: EPL-2.0

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::parser::Config;

/// Что именно сделать. Без подкоманды выполняется `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Actions {
    /// Copy drawables and regenerate the manifest activities and arrays.xml
    Run,
    /// Print every icon pack and its resource mapping without writing anything
    List,
}

/// Аргументы командной строки. Пути отсюда перекрывают пути из конфига,
/// относительные пути считаются от `--root`
#[derive(Debug, Parser)]
#[command(
    name = "iconpack-prep",
    version,
    about = "Prepares icon pack drawables, manifest activities and resource arrays"
)]
pub struct BuildSystem {
    /// Project root, relative paths are resolved against it
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Config file (defaults to iconpacks.toml in the project root, if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory with one folder per icon pack
    #[arg(long, value_name = "DIR")]
    pub iconpacks: Option<PathBuf>,

    /// Flat drawable output directory
    #[arg(long, value_name = "DIR")]
    pub drawable: Option<PathBuf>,

    /// AndroidManifest.xml with the icon pack markers
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// arrays.xml resource file
    #[arg(long, value_name = "FILE")]
    pub arrays: Option<PathBuf>,

    #[command(subcommand)]
    pub action: Option<Actions>,
}

impl BuildSystem {
    pub fn action(&self) -> Actions {
        self.action.unwrap_or(Actions::Run)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        let paths = &mut config.paths;

        if let Some(p) = &self.iconpacks {
            paths.iconpacks = p.clone();
        }

        if let Some(p) = &self.drawable {
            paths.drawable = p.clone();
        }

        if let Some(p) = &self.manifest {
            paths.manifest = p.clone();
        }

        if let Some(p) = &self.arrays {
            paths.arrays = p.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_to_run_in_current_dir() {
        let cli = BuildSystem::try_parse_from(["iconpack-prep"]).unwrap();
        assert_eq!(cli.action(), Actions::Run);
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(cli.config.is_none());
    }

    #[test]
    fn list_action() {
        let cli = BuildSystem::try_parse_from(["iconpack-prep", "--root", "proj", "list"]).unwrap();
        assert_eq!(cli.action(), Actions::List);
        assert_eq!(cli.root, PathBuf::from("proj"));
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(BuildSystem::try_parse_from(["iconpack-prep", "clean"]).is_err());
    }

    #[test]
    fn overrides_replace_only_given_paths() {
        let cli = BuildSystem::try_parse_from([
            "iconpack-prep",
            "--iconpacks",
            "packs",
            "--arrays",
            "res/values/arrays.xml",
        ])
        .unwrap();

        let mut config = Config::with_base(Path::new("/p"));
        cli.apply_overrides(&mut config);

        assert_eq!(config.iconpacks_dir(), PathBuf::from("/p/packs"));
        assert_eq!(config.arrays_file(), PathBuf::from("/p/res/values/arrays.xml"));
        assert_eq!(config.drawable_dir(), PathBuf::from("/p/app/src/main/res/drawable"));
    }
}
