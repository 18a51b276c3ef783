//! Global field state

use scout_protocol::FieldSnapshot;

use super::conditions::{Terrain, Weather};

/// Global field state affecting both sides
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Current weather condition
    pub weather: Option<Weather>,

    /// Current terrain
    pub terrain: Option<Terrain>,

    /// Trick Room active (slower creatures move first)
    pub trick_room: bool,
}

impl FieldState {
    /// Create a new empty field state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weather, replacing any previous weather
    pub fn set_weather(&mut self, weather: Weather) {
        self.weather = Some(weather);
    }

    pub fn clear_weather(&mut self) {
        self.weather = None;
    }

    /// Set the terrain, replacing any previous terrain
    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.terrain = Some(terrain);
    }

    pub fn clear_terrain(&mut self) {
        self.terrain = None;
    }

    pub fn to_snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            weather: self.weather.map(|w| w.as_str().to_string()),
            terrain: self.terrain.map(|t| t.as_str().to_string()),
            trick_room: self.trick_room,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty() {
        let field = FieldState::new();
        assert!(field.weather.is_none());
        assert!(field.terrain.is_none());
        assert!(!field.trick_room);
    }

    #[test]
    fn test_weather_replaces_previous() {
        let mut field = FieldState::new();
        field.set_weather(Weather::Sun);
        field.set_weather(Weather::Rain);
        assert_eq!(field.weather, Some(Weather::Rain));

        field.clear_weather();
        assert!(field.weather.is_none());
    }

    #[test]
    fn test_terrain_replaces_previous() {
        let mut field = FieldState::new();
        field.set_terrain(Terrain::Electric);
        field.set_terrain(Terrain::Grassy);
        assert_eq!(field.terrain, Some(Terrain::Grassy));
    }

    #[test]
    fn test_to_snapshot() {
        let mut field = FieldState::new();
        field.set_weather(Weather::Sand);
        field.trick_room = true;

        let snapshot = field.to_snapshot();
        assert_eq!(snapshot.weather.as_deref(), Some("Sandstorm"));
        assert_eq!(snapshot.terrain, None);
        assert!(snapshot.trick_room);
    }
}
