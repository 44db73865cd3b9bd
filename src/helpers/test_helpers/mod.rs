use super::*;

use std::collections::HashMap;

mod mock_filesystem;
mod mock_observer;
mod mock_output;

pub use mock_filesystem::*;
pub use mock_observer::*;
pub use mock_output::*;
