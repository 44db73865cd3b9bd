use super::*;

mod build_config;
mod config_builder;
mod config_entries;
mod load_toml;
mod master_config;
mod parse_args;

pub use build_config::build_config;
pub use master_config::MasterConfig;

use build_config::*;
use config_builder::*;
use config_entries::*;
use load_toml::*;
use log::LevelFilter;
use parse_args::*;
