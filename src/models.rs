use serde::{Deserialize, Serialize};

/// The six heat-stress drivers tracked for every taluk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Driver {
    Temperature,
    Humidity,
    GreenCoverPct,
    TrafficIndex,
    AirQualityIndex,
    PrecipitationMm,
}

impl Driver {
    /// All drivers, in report order.
    pub const ALL: [Driver; 6] = [
        Driver::Temperature,
        Driver::Humidity,
        Driver::GreenCoverPct,
        Driver::TrafficIndex,
        Driver::AirQualityIndex,
        Driver::PrecipitationMm,
    ];

    /// Key used in config files and JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            Driver::Temperature => "temperature",
            Driver::Humidity => "humidity",
            Driver::GreenCoverPct => "green_cover_pct",
            Driver::TrafficIndex => "traffic_index",
            Driver::AirQualityIndex => "air_quality_index",
            Driver::PrecipitationMm => "precipitation_mm",
        }
    }

    /// Human-readable label with unit, for tables.
    pub fn label(&self) -> &'static str {
        match self {
            Driver::Temperature => "Temperature (°C)",
            Driver::Humidity => "Humidity (%)",
            Driver::GreenCoverPct => "Green cover (%)",
            Driver::TrafficIndex => "Traffic index",
            Driver::AirQualityIndex => "Air quality index",
            Driver::PrecipitationMm => "Precipitation (mm)",
        }
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A complete set of driver values for one taluk.
///
/// Every driver is always present; values are taken as-is, with no declared
/// physical range. Plausibility is checked separately ([`crate::config`]) and
/// never alters what the engine computes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverSet {
    pub temperature: f64,
    pub humidity: f64,
    pub green_cover_pct: f64,
    pub traffic_index: f64,
    pub air_quality_index: f64,
    pub precipitation_mm: f64,
}

impl DriverSet {
    pub fn get(&self, driver: Driver) -> f64 {
        match driver {
            Driver::Temperature => self.temperature,
            Driver::Humidity => self.humidity,
            Driver::GreenCoverPct => self.green_cover_pct,
            Driver::TrafficIndex => self.traffic_index,
            Driver::AirQualityIndex => self.air_quality_index,
            Driver::PrecipitationMm => self.precipitation_mm,
        }
    }

    /// Iterate `(driver, value)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Driver, f64)> + '_ {
        Driver::ALL.iter().map(move |&d| (d, self.get(d)))
    }
}

/// Qualitative risk band derived from a heatwave score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskBand {
    /// Display color as a hex string, for JSON consumers.
    pub fn color_hex(&self) -> &'static str {
        match self {
            RiskBand::Low => "#22c55e",
            RiskBand::Moderate => "#eab308",
            RiskBand::High => "#f97316",
            RiskBand::Severe => "#dc2626",
        }
    }

    /// Display color as RGB components, for terminal cells.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            RiskBand::Low => (0x22, 0xc5, 0x5e),
            RiskBand::Moderate => (0xea, 0xb3, 0x08),
            RiskBand::High => (0xf9, 0x73, 0x16),
            RiskBand::Severe => (0xdc, 0x26, 0x26),
        }
    }

    /// Fixed advisory sentence for the band.
    pub fn advice(&self) -> &'static str {
        match self {
            RiskBand::Low => "Conditions are generally safe. Maintain regular hydration and shade.",
            RiskBand::Moderate => "Avoid peak afternoon exposure and check on vulnerable groups.",
            RiskBand::High => "Limit outdoor work, provide cooling spaces and water points.",
            RiskBand::Severe => {
                "Issue heat alerts, shift working hours and activate emergency protocols."
            }
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskBand::Low => write!(f, "Low"),
            RiskBand::Moderate => write!(f, "Moderate"),
            RiskBand::High => write!(f, "High"),
            RiskBand::Severe => write!(f, "Severe"),
        }
    }
}

/// A driver value that fell outside its configured plausibility bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anomaly {
    pub driver: Driver,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// A fully scored taluk, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub taluk: String,
    pub drivers: DriverSet,
    pub score: u8,
    pub band: RiskBand,
    pub color: &'static str,
    pub advice: &'static str,
    pub anomalies: Vec<Anomaly>,
}
