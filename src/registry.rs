//! Static taluk registry: the fixture driver values shipped with the tool.
//!
//! Read-only after process start; there is no create/update/delete surface.
//! A future live data source should be passed in where these lookups are
//! made, not patched into this table.

use anyhow::{bail, Result};

use crate::models::DriverSet;

/// One registered taluk and its current driver values.
#[derive(Debug, Clone, Copy)]
pub struct Taluk {
    pub name: &'static str,
    pub drivers: DriverSet,
}

const fn taluk(
    name: &'static str,
    temperature: f64,
    humidity: f64,
    green_cover_pct: f64,
    traffic_index: f64,
    air_quality_index: f64,
    precipitation_mm: f64,
) -> Taluk {
    Taluk {
        name,
        drivers: DriverSet {
            temperature,
            humidity,
            green_cover_pct,
            traffic_index,
            air_quality_index,
            precipitation_mm,
        },
    }
}

/// The nine taluks with fixture data. Pavagada's 70 °C and Koratagere's
/// 60 °C are shipped as-is from the field table; the plausibility checks
/// flag them rather than this registry rejecting them.
static TALUKS: [Taluk; 9] = [
    taluk("Tumakuru", 39.0, 58.0, 25.0, 80.0, 65.0, 6.0),
    taluk("Kunigal", 42.0, 55.0, 18.0, 60.0, 65.0, 4.0),
    taluk("Turuvekere", 41.0, 53.0, 20.0, 45.0, 40.0, 5.0),
    taluk("Tiptur", 43.0, 50.0, 15.0, 85.0, 70.0, 3.0),
    taluk("Chikkanayakanahalli", 38.0, 60.0, 30.0, 50.0, 50.0, 7.0),
    taluk("Sira", 40.0, 57.0, 22.0, 65.0, 58.0, 5.0),
    taluk("Pavagada", 70.0, 52.0, 30.0, 40.0, 35.0, 2.0),
    taluk("Madhugiri", 41.0, 30.0, 20.0, 60.0, 50.0, 30.0),
    taluk("Koratagere", 60.0, 40.0, 25.0, 30.0, 20.0, 6.0),
];

/// All registered taluks, in fixture order.
pub fn all() -> &'static [Taluk] {
    &TALUKS
}

/// Look up a taluk by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static Taluk> {
    TALUKS.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Look up a taluk by name, or fail with the list of known names.
pub fn get(name: &str) -> Result<&'static Taluk> {
    match find(name) {
        Some(taluk) => Ok(taluk),
        None => {
            let known: Vec<&str> = TALUKS.iter().map(|t| t.name).collect();
            bail!("unknown taluk '{}' (known: {})", name, known.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk;

    #[test]
    fn test_nine_taluks_registered() {
        assert_eq!(all().len(), 9);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(find("pavagada").is_some());
        assert!(find("TUMAKURU").is_some());
        assert!(find("Gubbi").is_none());
    }

    #[test]
    fn test_unknown_taluk_error_lists_known_names() {
        let err = get("Gubbi").unwrap_err().to_string();
        assert!(err.contains("unknown taluk 'Gubbi'"));
        assert!(err.contains("Tumakuru"));
    }

    #[test]
    fn test_fixture_values_survive_verbatim() {
        let pavagada = get("Pavagada").unwrap();
        assert_eq!(pavagada.drivers.temperature, 70.0);
        assert_eq!(pavagada.drivers.precipitation_mm, 2.0);
    }

    #[test]
    fn test_tiptur_tops_the_district() {
        let top = all()
            .iter()
            .max_by_key(|t| risk::score(&t.drivers))
            .unwrap();
        assert_eq!(top.name, "Tiptur");
        assert_eq!(risk::score(&top.drivers), 51);
    }
}
