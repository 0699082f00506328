use crate::models::{
    AirQualityReading, AlertStatus, City, Region, Severity, TravelMode, WildfireAlert,
};

pub const BASELINE_READING: AirQualityReading = AirQualityReading { aqi: 50, pm25: 9.0 };

pub const DEFAULT_MODE: TravelMode = TravelMode::Car;

pub fn coordinates(city: City) -> (f64, f64) {
    match city {
        City::Toronto => (43.651, -79.347),
        City::Vancouver => (49.282, -123.120),
        City::Montreal => (45.501, -73.567),
        City::Calgary => (51.044, -114.072),
    }
}

pub fn air_quality(city: City) -> AirQualityReading {
    match city {
        City::Toronto => AirQualityReading { aqi: 42, pm25: 7.1 },
        City::Vancouver => AirQualityReading { aqi: 55, pm25: 10.2 },
        City::Montreal => AirQualityReading { aqi: 38, pm25: 6.8 },
        City::Calgary => AirQualityReading { aqi: 45, pm25: 8.3 },
    }
}

// g CO2 per km.
pub fn emission_factor(mode: TravelMode) -> f64 {
    match mode {
        TravelMode::Car => 171.0,
        TravelMode::Bus => 104.0,
        TravelMode::Rail => 41.0,
        TravelMode::Flight => 255.0,
    }
}

struct AlertRecord {
    location: &'static str,
    severity: Severity,
    area_hectares: u32,
    status: AlertStatus,
}

const BC_ALERTS: &[AlertRecord] = &[
    AlertRecord {
        location: "Vancouver Island",
        severity: Severity::Moderate,
        area_hectares: 150,
        status: AlertStatus::Active,
    },
    AlertRecord {
        location: "Okanagan Valley",
        severity: Severity::High,
        area_hectares: 450,
        status: AlertStatus::Active,
    },
];

const AB_ALERTS: &[AlertRecord] = &[AlertRecord {
    location: "Banff National Park",
    severity: Severity::Low,
    area_hectares: 25,
    status: AlertStatus::Contained,
}];

const ON_ALERTS: &[AlertRecord] = &[AlertRecord {
    location: "Northern Ontario",
    severity: Severity::Moderate,
    area_hectares: 200,
    status: AlertStatus::Active,
}];

pub fn wildfire_alerts(region: Region) -> Vec<WildfireAlert> {
    let records = match region {
        Region::Bc => BC_ALERTS,
        Region::Ab => AB_ALERTS,
        Region::On => ON_ALERTS,
    };

    records
        .iter()
        .map(|record| WildfireAlert {
            location: record.location.to_string(),
            severity: record.severity,
            area_hectares: record.area_hectares,
            status: record.status,
        })
        .collect()
}
