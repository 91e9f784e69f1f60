//! Taluk centroids and the geo-referenced marker records a map overlay
//! consumes. Markers carry scores computed by [`crate::risk`]; this module
//! never reimplements the formula.

use serde::Serialize;

use crate::models::RiskBand;
use crate::registry;
use crate::risk;

/// Approximate taluk centroids (lat, lon). Gubbi has coordinates but no
/// fixture data, so it never produces a marker.
static TALUK_COORDS: [(&str, f64, f64); 10] = [
    ("Tumakuru", 13.3411, 77.1010),
    ("Tiptur", 13.2569, 76.4777),
    ("Madhugiri", 13.6601, 77.2123),
    ("Sira", 13.7416, 76.9042),
    ("Pavagada", 14.1001, 77.2806),
    ("Gubbi", 13.3128, 76.9416),
    ("Koratagere", 13.5222, 77.2376),
    ("Chikkanayakanahalli", 13.4167, 76.6167),
    ("Turuvekere", 13.1632, 76.6667),
    ("Kunigal", 13.0232, 77.0256),
];

/// One map marker: position plus the engine's computed risk for the taluk.
#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub taluk: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature: f64,
    pub score: u8,
    pub band: RiskBand,
    pub color: &'static str,
    /// Circle radius in pixels, scaled by score.
    pub radius: f64,
}

/// Build markers for every taluk that has both coordinates and fixture
/// data, in coordinate-table order.
pub fn markers() -> Vec<MapMarker> {
    TALUK_COORDS
        .iter()
        .filter_map(|&(name, latitude, longitude)| {
            let taluk = registry::find(name)?;
            let score = risk::score(&taluk.drivers);
            let band = risk::classify(score);
            Some(MapMarker {
                taluk: taluk.name,
                latitude,
                longitude,
                temperature: taluk.drivers.temperature,
                score,
                band,
                color: band.color_hex(),
                radius: 10.0 + f64::from(score) * 0.3,
            })
        })
        .collect()
}
