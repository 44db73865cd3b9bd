//! The weather station, which owns a list of observers and tells them whenever the weather changes

use super::*;

mod observer_list;
mod shared_weather_station;
mod subject;
mod weather_station;

pub use observer_list::{ObserverList, RemoveReport};
pub use shared_weather_station::SharedWeatherStation;
pub use subject::Subject;
pub use weather_station::WeatherStation;

use observer_list::notify_all;
use weather_station::{log_added, log_observers, log_removed};
