use crate::models::DriverSet;

// Fixed design weights. Higher temperature, traffic and pollution push risk
// up; green cover and rainfall pull it down. Not fitted, not configurable.
const TEMP_WEIGHT: f64 = 0.4;
const HUMIDITY_WEIGHT: f64 = 0.1;
const GREEN_COVER_WEIGHT: f64 = -0.1;
const TRAFFIC_WEIGHT: f64 = 0.2;
const AIQ_WEIGHT: f64 = 0.2;
const PRECIPITATION_WEIGHT: f64 = -0.1;

/// Compute the heatwave-risk percentage for one set of drivers.
///
/// A fixed-weight linear combination, rounded to the nearest integer and
/// clamped to `0..=100`. The clamp is a saturation policy: out-of-range
/// inputs are absorbed here, never rejected (plausibility warnings are the
/// job of [`crate::config::run_checks`]).
pub fn score(drivers: &DriverSet) -> u8 {
    let raw = drivers.temperature * TEMP_WEIGHT
        + drivers.humidity * HUMIDITY_WEIGHT
        + drivers.green_cover_pct * GREEN_COVER_WEIGHT
        + drivers.traffic_index * TRAFFIC_WEIGHT
        + drivers.air_quality_index * AIQ_WEIGHT
        + drivers.precipitation_mm * PRECIPITATION_WEIGHT;

    raw.round().clamp(0.0, 100.0) as u8
}

/// Per-driver signed contribution to the raw score, for the driver
/// breakdown table. `(weight, value * weight)` in report order.
pub fn contributions(drivers: &DriverSet) -> [(f64, f64); 6] {
    let weights = [
        TEMP_WEIGHT,
        HUMIDITY_WEIGHT,
        GREEN_COVER_WEIGHT,
        TRAFFIC_WEIGHT,
        AIQ_WEIGHT,
        PRECIPITATION_WEIGHT,
    ];
    let mut out = [(0.0, 0.0); 6];
    for (slot, ((_, value), weight)) in out.iter_mut().zip(drivers.iter().zip(weights)) {
        *slot = (weight, value * weight);
    }
    out
}

/// What-if mitigation deltas. All three are expressed as improvements:
/// green cover gained, traffic shed, air-quality index lowered.
#[derive(Debug, Clone, Copy, Default)]
pub struct Adjustments {
    pub green_cover_delta: f64,
    pub traffic_delta: f64,
    pub aiq_delta: f64,
}

/// Derive an adjusted driver set for a mitigation scenario.
///
/// Adjusted drivers floor at zero regardless of delta magnitude; there is
/// no ceiling. Temperature, humidity and precipitation pass through. The
/// input is never mutated.
pub fn simulate(drivers: &DriverSet, adjustments: &Adjustments) -> DriverSet {
    DriverSet {
        green_cover_pct: (drivers.green_cover_pct + adjustments.green_cover_delta).max(0.0),
        traffic_index: (drivers.traffic_index - adjustments.traffic_delta).max(0.0),
        air_quality_index: (drivers.air_quality_index - adjustments.aiq_delta).max(0.0),
        ..*drivers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tumakuru() -> DriverSet {
        DriverSet {
            temperature: 39.0,
            humidity: 58.0,
            green_cover_pct: 25.0,
            traffic_index: 80.0,
            air_quality_index: 65.0,
            precipitation_mm: 6.0,
        }
    }

    fn pavagada() -> DriverSet {
        DriverSet {
            temperature: 70.0,
            humidity: 52.0,
            green_cover_pct: 30.0,
            traffic_index: 40.0,
            air_quality_index: 35.0,
            precipitation_mm: 2.0,
        }
    }

    #[test]
    fn test_known_score() {
        // 39*0.4 + 58*0.1 - 25*0.1 + 80*0.2 + 65*0.2 - 6*0.1 = 47.3
        assert_eq!(score(&tumakuru()), 47);
    }

    #[test]
    fn test_implausible_input_still_scores() {
        // 70 °C is physically implausible but accepted as-is:
        // 28 + 5.2 - 3 + 8 + 7 - 0.2 = 45
        assert_eq!(score(&pavagada()), 45);
    }

    #[test]
    fn test_clamp_upper() {
        let mut d = tumakuru();
        d.temperature = 500.0;
        assert_eq!(score(&d), 100);
    }

    #[test]
    fn test_clamp_lower() {
        let d = DriverSet {
            temperature: 0.0,
            humidity: 0.0,
            green_cover_pct: 90.0,
            traffic_index: 0.0,
            air_quality_index: 0.0,
            precipitation_mm: 100.0,
        };
        assert_eq!(score(&d), 0);
    }

    #[test]
    fn test_deterministic() {
        let d = tumakuru();
        assert_eq!(score(&d), score(&d));
    }

    #[test]
    fn test_monotone_increasing_drivers() {
        let base = tumakuru();
        for bump in [
            DriverSet { temperature: base.temperature + 5.0, ..base },
            DriverSet { traffic_index: base.traffic_index + 5.0, ..base },
            DriverSet { air_quality_index: base.air_quality_index + 5.0, ..base },
        ] {
            assert!(score(&bump) >= score(&base));
        }
    }

    #[test]
    fn test_monotone_decreasing_drivers() {
        let base = tumakuru();
        for bump in [
            DriverSet { green_cover_pct: base.green_cover_pct + 5.0, ..base },
            DriverSet { precipitation_mm: base.precipitation_mm + 5.0, ..base },
        ] {
            assert!(score(&bump) <= score(&base));
        }
    }

    #[test]
    fn test_simulate_adjusts_and_passes_through() {
        let base = tumakuru();
        let adjusted = simulate(
            &base,
            &Adjustments { green_cover_delta: 10.0, traffic_delta: 20.0, aiq_delta: 15.0 },
        );
        assert_eq!(adjusted.green_cover_pct, 35.0);
        assert_eq!(adjusted.traffic_index, 60.0);
        assert_eq!(adjusted.air_quality_index, 50.0);
        assert_eq!(adjusted.temperature, base.temperature);
        assert_eq!(adjusted.humidity, base.humidity);
        assert_eq!(adjusted.precipitation_mm, base.precipitation_mm);
        // Original untouched
        assert_eq!(base.green_cover_pct, 25.0);
    }

    #[test]
    fn test_simulate_floors_at_zero() {
        let base = tumakuru();
        let adjusted = simulate(
            &base,
            &Adjustments { green_cover_delta: -999.0, traffic_delta: 999.0, aiq_delta: 999.0 },
        );
        assert_eq!(adjusted.green_cover_pct, 0.0);
        assert_eq!(adjusted.traffic_index, 0.0);
        assert_eq!(adjusted.air_quality_index, 0.0);
    }

    #[test]
    fn test_contributions_sum_to_raw_score() {
        let d = tumakuru();
        let total: f64 = contributions(&d).iter().map(|(_, c)| c).sum();
        assert_eq!(total.round().clamp(0.0, 100.0) as u8, score(&d));
    }
}
