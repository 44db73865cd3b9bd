//! A weather station that tells its observers (phone, TV and watch displays) whenever the weather
//! changes, plus the scripted demo the `weather-station` binary runs.

#[macro_use]
extern crate log;

pub mod demo;
mod helpers;
mod observer;
mod station;

pub use helpers::*;
pub use observer::*;
pub use station::*;

use std::{
    error::Error,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
