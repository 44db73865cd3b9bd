//! General useful bits and bobs

use super::*;

mod config;
mod filesystem;
mod output;
#[cfg(test)]
mod test_helpers;
mod thin_ptr;

pub use config::{build_config, MasterConfig};
pub use filesystem::{real_filesystem, Filesystem, FilesystemTrait};
pub use output::{stdout_output, Output, OutputTrait};
#[cfg(test)]
pub use test_helpers::*;
pub use thin_ptr::ThinPtr;
