//! Things that want to hear about the weather, and the displays that ship with the station

use super::*;

mod display;
mod display_kind;
mod notify_error;
#[allow(clippy::module_inception)]
mod observer;
mod observer_info;

pub use display::{PhoneDisplay, TvDisplay, WatchDisplay};
pub use display_kind::DisplayKind;
pub use notify_error::{NotifyError, NotifyResult};
pub use observer::Observer;
pub use observer_info::ObserverInfo;

use serde::ser::{Serialize, SerializeStruct, Serializer};
