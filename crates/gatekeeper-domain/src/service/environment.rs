//! Derived Environment - Weather and mood from the two resources
//!
//! Both tables band on the average of health and calm with inclusive
//! lower bounds. Sums are compared instead of averages so odd totals
//! (e.g. an average of 79.5) never round into the band above.

use crate::model::climate::{Mood, Weather};

/// Map `(health, calm)` to the weather over the castle and the gatekeeper's mood
pub fn derive_environment(health: u8, calm: u8) -> (Weather, Mood) {
    let sum = u16::from(health) + u16::from(calm);
    (weather_for(sum), mood_for(sum))
}

/// `sum` is twice the average, so each threshold is doubled
fn weather_for(sum: u16) -> Weather {
    match sum {
        160.. => Weather::Sunny,
        120.. => Weather::Cloudy,
        80.. => Weather::Rainy,
        _ => Weather::Stormy,
    }
}

fn mood_for(sum: u16) -> Mood {
    match sum {
        160.. => Mood::Peaceful,
        120.. => Mood::Concerned,
        80.. => Mood::Worried,
        40.. => Mood::Stressed,
        _ => Mood::Anxious,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== Weather Bands ==============

    #[test]
    fn test_weather_band_edges() {
        assert_eq!(derive_environment(80, 80).0, Weather::Sunny);
        assert_eq!(derive_environment(100, 60).0, Weather::Sunny);
        assert_eq!(derive_environment(80, 79).0, Weather::Cloudy);
        assert_eq!(derive_environment(60, 60).0, Weather::Cloudy);
        assert_eq!(derive_environment(60, 59).0, Weather::Rainy);
        assert_eq!(derive_environment(40, 40).0, Weather::Rainy);
        assert_eq!(derive_environment(40, 39).0, Weather::Stormy);
        assert_eq!(derive_environment(0, 0).0, Weather::Stormy);
    }

    #[test]
    fn test_thirty_five_is_stormy_not_rainy() {
        // the 40-point boundary is canonical
        assert_eq!(derive_environment(35, 35).0, Weather::Stormy);
    }

    // ============== Mood Bands ==============

    #[test]
    fn test_mood_band_edges() {
        assert_eq!(derive_environment(100, 100).1, Mood::Peaceful);
        assert_eq!(derive_environment(80, 80).1, Mood::Peaceful);
        assert_eq!(derive_environment(70, 60).1, Mood::Concerned);
        assert_eq!(derive_environment(50, 30).1, Mood::Worried);
        assert_eq!(derive_environment(20, 20).1, Mood::Stressed);
        assert_eq!(derive_environment(20, 19).1, Mood::Anxious);
        assert_eq!(derive_environment(0, 10).1, Mood::Anxious);
    }

    // ============== Properties ==============

    #[test]
    fn test_derivation_is_deterministic_over_full_grid() {
        for health in 0..=100u8 {
            for calm in 0..=100u8 {
                let first = derive_environment(health, calm);
                assert_eq!(first, derive_environment(health, calm));
                assert_eq!(first, derive_environment(calm, health));
            }
        }
    }

    #[test]
    fn test_monotonic_in_resources() {
        let rank = |w: Weather| match w {
            Weather::Stormy => 0,
            Weather::Rainy => 1,
            Weather::Cloudy => 2,
            Weather::Sunny => 3,
        };
        for health in 0..100u8 {
            let lower = derive_environment(health, 50).0;
            let higher = derive_environment(health + 1, 50).0;
            assert!(rank(higher) >= rank(lower));
        }
    }
}
