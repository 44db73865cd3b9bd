use super::*;

/// What an observer looks like from the outside: its name and the last weather it received
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverInfo {
    pub name: String,
    pub weather: String,
}

impl ObserverInfo {
    pub fn new(name: &str, weather: &str) -> Self {
        Self {
            name: name.to_string(),
            weather: weather.to_string(),
        }
    }
}

impl Serialize for ObserverInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut info = serializer.serialize_struct("ObserverInfo", 2)?;
        info.serialize_field("weather", &self.weather)?;
        info.serialize_field("name", &self.name)?;
        info.end()
    }
}

/// Formats as pretty JSON, which is how observers show up in the logs
impl std::fmt::Display for ObserverInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json)
    }
}
