//! Weather kinds

use serde::{Deserialize, Serialize};

/// Weather shown in the scene
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Stormy,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 5] = [
        WeatherKind::Sunny,
        WeatherKind::Cloudy,
        WeatherKind::Rainy,
        WeatherKind::Snowy,
        WeatherKind::Stormy,
    ];

    /// Map a weather-service condition group ("Clear", "Rain", ...) to a kind.
    /// Unknown conditions read as sunny.
    pub fn from_condition(condition: &str) -> WeatherKind {
        match condition {
            "Clear" => WeatherKind::Sunny,
            "Clouds" => WeatherKind::Cloudy,
            "Rain" | "Drizzle" => WeatherKind::Rainy,
            "Snow" => WeatherKind::Snowy,
            "Thunderstorm" | "Squall" | "Tornado" => WeatherKind::Stormy,
            _ => WeatherKind::Sunny,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeatherKind::Sunny => "sunny",
            WeatherKind::Cloudy => "cloudy",
            WeatherKind::Rainy => "rainy",
            WeatherKind::Snowy => "snowy",
            WeatherKind::Stormy => "stormy",
        }
    }

    pub fn parse(s: &str) -> Option<WeatherKind> {
        WeatherKind::ALL.into_iter().find(|w| w.name().eq_ignore_ascii_case(s))
    }

    /// Whether the sky is overcast
    pub fn is_overcast(self) -> bool {
        !matches!(self, WeatherKind::Sunny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_condition() {
        assert_eq!(WeatherKind::from_condition("Clear"), WeatherKind::Sunny);
        assert_eq!(WeatherKind::from_condition("Clouds"), WeatherKind::Cloudy);
        assert_eq!(WeatherKind::from_condition("Drizzle"), WeatherKind::Rainy);
        assert_eq!(WeatherKind::from_condition("Snow"), WeatherKind::Snowy);
        assert_eq!(WeatherKind::from_condition("Squall"), WeatherKind::Stormy);
        assert_eq!(WeatherKind::from_condition("Haze"), WeatherKind::Sunny);
    }

    #[test]
    fn test_overcast() {
        assert!(!WeatherKind::Sunny.is_overcast());
        assert!(WeatherKind::ALL.iter().skip(1).all(|w| w.is_overcast()));
    }

    #[test]
    fn test_parse() {
        assert_eq!(WeatherKind::parse("STORMY"), Some(WeatherKind::Stormy));
        assert_eq!(WeatherKind::parse("hail"), None);
    }
}
