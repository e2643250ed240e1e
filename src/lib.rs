pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};
pub use config::toml_config::TomlConfig;

pub use core::{engine::AuraEngine, pipeline::SnapshotPipeline};
pub use domain::model::{AuraAnalysis, SelectedPalette};
pub use domain::palette::{PaletteEntry, CHAKRA_PALETTE};
pub use utils::error::{AuraError, Result};
