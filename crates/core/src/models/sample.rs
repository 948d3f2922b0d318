//! Reference locations and voyages used by the default deployment.

use chrono::{DateTime, TimeZone, Utc};

use super::{Location, UnLocode, Voyage};

/// Stockholm, Sweden.
pub const SESTO: &str = "SESTO";
/// Melbourne, Australia.
pub const AUMEL: &str = "AUMEL";
/// Hongkong, China.
pub const CNHKG: &str = "CNHKG";
/// New York, United States.
pub const USNYC: &str = "USNYC";
/// Tokyo, Japan.
pub const JNTKO: &str = "JNTKO";
/// Rotterdam, Netherlands.
pub const NLRTM: &str = "NLRTM";
/// Hamburg, Germany.
pub const DEHAM: &str = "DEHAM";
/// Helsinki, Finland.
pub const FIHEL: &str = "FIHEL";

/// Locations seeded into the location store by default.
///
/// New York and Helsinki are visited by sample voyages but are not part of
/// the seeded set.
pub fn locations() -> Vec<Location> {
    vec![
        Location::new(SESTO, "Stockholm"),
        Location::new(AUMEL, "Melbourne"),
        Location::new(CNHKG, "Hongkong"),
        Location::new(JNTKO, "Tokyo"),
        Location::new(NLRTM, "Rotterdam"),
        Location::new(DEHAM, "Hamburg"),
    ]
}

/// Voyages seeded into the voyage store by default.
pub fn voyages() -> Vec<Voyage> {
    vec![v100(), v300(), v400()]
}

/// Hongkong - Tokyo - New York.
pub fn v100() -> Voyage {
    Voyage::builder("V100", CNHKG)
        .add_movement(JNTKO, march(3), march(5))
        .add_movement(USNYC, march(6), march(9))
        .build()
}

/// Tokyo - Rotterdam - Hamburg - Melbourne - Tokyo.
pub fn v300() -> Voyage {
    Voyage::builder("V300", JNTKO)
        .add_movement(NLRTM, march(8), march(11))
        .add_movement(DEHAM, march(11), march(12))
        .add_movement(AUMEL, march(14), march(18))
        .add_movement(JNTKO, march(19), march(21))
        .build()
}

/// Hamburg - Stockholm - Helsinki - Hamburg.
pub fn v400() -> Voyage {
    Voyage::builder("V400", DEHAM)
        .add_movement(SESTO, march(14), march(15))
        .add_movement(FIHEL, march(15), march(16))
        .add_movement(DEHAM, march(20), march(22))
        .build()
}

/// Convenience for building a code from one of the constants above.
pub fn code(value: &str) -> UnLocode {
    UnLocode::new(value)
}

fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 3, day, 0, 0, 0)
        .single()
        .expect("sample schedule dates are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_codes_are_well_formed() {
        for location in locations() {
            assert!(location.unlocode.is_well_formed(), "{}", location.unlocode);
        }
    }

    #[test]
    fn voyages_visit_unseeded_locations() {
        let seeded: Vec<_> = locations().into_iter().map(|l| l.unlocode).collect();
        let visited_new_york = v100()
            .schedule
            .carrier_movements
            .iter()
            .any(|movement| movement.arrival_location == code(USNYC));
        assert!(visited_new_york);
        assert!(!seeded.contains(&code(USNYC)));
        assert!(!seeded.contains(&code(FIHEL)));
    }
}
