//! Weather and gatekeeper mood
//!
//! Neither is ever stored independently of the resources: both are
//! recomputed by `service::environment::derive_environment`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
}

impl Weather {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sunny => "sunny",
            Weather::Cloudy => "cloudy",
            Weather::Rainy => "rainy",
            Weather::Stormy => "stormy",
        }
    }
}

impl core::fmt::Display for Weather {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Peaceful,
    Concerned,
    Worried,
    Stressed,
    Anxious,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Peaceful => "peaceful",
            Mood::Concerned => "concerned",
            Mood::Worried => "worried",
            Mood::Stressed => "stressed",
            Mood::Anxious => "anxious",
        }
    }
}

impl core::fmt::Display for Mood {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
