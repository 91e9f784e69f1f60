use crate::models::RiskBand;

/// Map a heatwave score in `0..=100` to its qualitative risk band.
///
/// Half-open bands, evaluated in ascending order:
/// `[0, 25)` Low, `[25, 50)` Moderate, `[50, 75)` High, `[75, 100]` Severe.
pub fn classify(score: u8) -> RiskBand {
    match score {
        0..=24 => RiskBand::Low,
        25..=49 => RiskBand::Moderate,
        50..=74 => RiskBand::High,
        _ => RiskBand::Severe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(classify(0), RiskBand::Low);
        assert_eq!(classify(24), RiskBand::Low);
        assert_eq!(classify(25), RiskBand::Moderate);
        assert_eq!(classify(49), RiskBand::Moderate);
        assert_eq!(classify(50), RiskBand::High);
        assert_eq!(classify(74), RiskBand::High);
        assert_eq!(classify(75), RiskBand::Severe);
        assert_eq!(classify(100), RiskBand::Severe);
    }

    #[test]
    fn test_partition_is_contiguous() {
        // Ascending scores never move to a lower band, and all four bands
        // appear across 0..=100.
        let mut seen = Vec::new();
        let mut prev = classify(0);
        for s in 0..=100u8 {
            let band = classify(s);
            assert!(band_rank(band) >= band_rank(prev), "band dropped at score {}", s);
            if !seen.contains(&band) {
                seen.push(band);
            }
            prev = band;
        }
        assert_eq!(
            seen,
            vec![RiskBand::Low, RiskBand::Moderate, RiskBand::High, RiskBand::Severe]
        );
    }

    fn band_rank(band: RiskBand) -> u8 {
        match band {
            RiskBand::Low => 0,
            RiskBand::Moderate => 1,
            RiskBand::High => 2,
            RiskBand::Severe => 3,
        }
    }

    #[test]
    fn test_advice_and_color_are_band_fixed() {
        assert_eq!(classify(80).color_hex(), "#dc2626");
        assert!(classify(10).advice().contains("hydration"));
    }
}
