use super::*;

/// Which display to build, used where displays are picked at runtime (such as from config)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Phone,
    Tv,
    Watch,
}

impl DisplayKind {
    pub fn build(self, output: &Output) -> Arc<dyn Observer> {
        match self {
            Self::Phone => Arc::new(PhoneDisplay::new(output)),
            Self::Tv => Arc::new(TvDisplay::new(output)),
            Self::Watch => Arc::new(WatchDisplay::new(output)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Tv => "tv",
            Self::Watch => "watch",
        }
    }
}

impl std::str::FromStr for DisplayKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "tv" => Ok(Self::Tv),
            "watch" => Ok(Self::Watch),
            other => Err(format!(
                "{:?} is not a display, valid displays are phone, tv, watch",
                other
            )),
        }
    }
}
