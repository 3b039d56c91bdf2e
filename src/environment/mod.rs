//! Season, weather and day/night state with the palette derived from it.

pub mod season;
pub mod time;
pub mod weather;

pub use season::Season;
pub use time::TimeOfDay;
pub use weather::WeatherKind;

use crate::scene::config::EnvironmentConfig;

const NIGHT_SKY: u32 = 0x0A0A2E;
const CLOUDY_SKY: u32 = 0x778899;

/// Environment flags driving sky, light and grass colors.
#[derive(Clone, Debug)]
pub struct EnvironmentState {
    cloudy: bool,
    night: bool,
    season: Season,
    weather: WeatherKind,
    time: TimeOfDay,
    /// Real seconds per in-game day; zero leaves `night` under manual control.
    day_length: f32,
}

impl Default for EnvironmentState {
    fn default() -> Self {
        Self::from_config(&EnvironmentConfig::default())
    }
}

impl EnvironmentState {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        let time = TimeOfDay::new(config.start_hour);
        let mut state = Self {
            cloudy: false,
            night: false,
            season: config.season,
            weather: WeatherKind::Sunny,
            time,
            day_length: config.day_length_seconds.max(0.0),
        };
        state.set_weather(config.weather);
        if state.day_length > 0.0 {
            state.night = state.time.is_night();
        }
        state
    }

    /// Apply a weather kind. Anything but sunny overcasts the sky.
    pub fn set_weather(&mut self, weather: WeatherKind) {
        self.weather = weather;
        self.cloudy = weather.is_overcast();
        log::debug!("Weather set to {}", weather.name());
    }

    pub fn set_season(&mut self, season: Season) {
        if self.season != season {
            log::info!("Season changed to {}", season.name());
        }
        self.season = season;
    }

    pub fn set_night(&mut self, night: bool) {
        self.night = night;
    }

    /// Advance the clock. With a positive day length the night flag follows
    /// the clock; returns true when it flipped.
    pub fn update(&mut self, dt_seconds: f32) -> bool {
        if self.day_length <= 0.0 {
            return false;
        }
        self.time.advance(dt_seconds, self.day_length);
        let night = self.time.is_night();
        let changed = night != self.night;
        if changed {
            log::debug!("{} at hour {:.1}", if night { "Nightfall" } else { "Daybreak" }, self.time.hour());
        }
        self.night = night;
        changed
    }

    pub fn is_cloudy(&self) -> bool {
        self.cloudy
    }

    pub fn is_night(&self) -> bool {
        self.night
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn weather(&self) -> WeatherKind {
        self.weather
    }

    pub fn time(&self) -> &TimeOfDay {
        &self.time
    }

    /// Sky color: night wins over clouds, clouds over the season's sky.
    pub fn sky_color(&self) -> u32 {
        if self.night {
            NIGHT_SKY
        } else if self.cloudy {
            CLOUDY_SKY
        } else {
            self.season.sky_color()
        }
    }

    /// Directional light intensity
    pub fn sun_intensity(&self) -> f32 {
        if self.night {
            0.2
        } else if self.cloudy {
            0.5
        } else {
            1.0
        }
    }

    pub fn grass_color(&self) -> u32 {
        self.season.grass_color()
    }
}
