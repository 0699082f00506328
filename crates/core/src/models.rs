use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Toronto,
    Vancouver,
    Montreal,
    Calgary,
}

impl City {
    // Keyword router scan order.
    pub const ALL: [City; 4] = [Self::Toronto, Self::Vancouver, Self::Montreal, Self::Calgary];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|city| city.name() == value)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Toronto => "Toronto",
            Self::Vancouver => "Vancouver",
            Self::Montreal => "Montreal",
            Self::Calgary => "Calgary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "BC")]
    Bc,
    #[serde(rename = "AB")]
    Ab,
    #[serde(rename = "ON")]
    On,
}

impl Region {
    pub const ALL: [Region; 3] = [Self::Bc, Self::Ab, Self::On];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.code() == value)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Bc => "BC",
            Self::Ab => "AB",
            Self::On => "ON",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Self::Bc => "British Columbia",
            Self::Ab => "Alberta",
            Self::On => "Ontario",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Car,
    Bus,
    Rail,
    Flight,
}

impl TravelMode {
    pub const ALL: [TravelMode; 4] = [Self::Car, Self::Bus, Self::Rail, Self::Flight];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "car" => Some(Self::Car),
            "bus" => Some(Self::Bus),
            "rail" => Some(Self::Rail),
            "flight" => Some(Self::Flight),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Rail => "rail",
            Self::Flight => "flight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    pub aqi: u32,
    pub pm25: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Contained,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildfireAlert {
    pub location: String,
    pub severity: Severity,
    #[serde(rename = "area_ha")]
    pub area_hectares: u32,
    pub status: AlertStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildfireSummary {
    pub region: String,
    pub alert_count: usize,
    pub alerts: Vec<WildfireAlert>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEstimate {
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub distance_km: f64,
    #[serde(rename = "emission_factor_g_per_km")]
    pub emission_factor: f64,
    pub total_co2_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolName {
    #[serde(rename = "get_air_quality")]
    AirQuality,
    #[serde(rename = "estimate_trip_emissions")]
    TripEmissions,
    #[serde(rename = "get_wildfire_alerts")]
    WildfireAlerts,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [Self::AirQuality, Self::TripEmissions, Self::WildfireAlerts];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == value)
    }

    pub fn param_names(self) -> &'static [&'static str] {
        match self {
            Self::AirQuality => &["city"],
            Self::TripEmissions => &["origin", "destination", "mode"],
            Self::WildfireAlerts => &["region"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AirQuality => "get_air_quality",
            Self::TripEmissions => "estimate_trip_emissions",
            Self::WildfireAlerts => "get_wildfire_alerts",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    AirQuality {
        city: String,
    },
    TripEmissions {
        origin: String,
        destination: String,
        mode: String,
    },
    WildfireAlerts {
        region: String,
    },
}

impl ToolCall {
    pub fn name(&self) -> ToolName {
        match self {
            Self::AirQuality { .. } => ToolName::AirQuality,
            Self::TripEmissions { .. } => ToolName::TripEmissions,
            Self::WildfireAlerts { .. } => ToolName::WildfireAlerts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityReport {
    #[serde(skip)]
    pub city: String,
    #[serde(flatten)]
    pub reading: AirQualityReading,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    AirQuality(AirQualityReport),
    Trip(TripEstimate),
    Wildfire(WildfireSummary),
    Error {
        error: String,
    },
}

impl ToolOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: serde_json::Map<String, serde_json::Value>,
}
