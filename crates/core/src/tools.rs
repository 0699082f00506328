use serde_json::json;
use thiserror::Error;

use crate::geo::{haversine_km, round_one_decimal};
use crate::models::{
    AirQualityReading, AirQualityReport, City, Region, ToolCall, ToolName, ToolOutcome, ToolSpec,
    TravelMode, TripEstimate, WildfireSummary,
};
use crate::tables;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("City not found in database")]
    CityNotFound,
}

pub fn get_air_quality(city: &str) -> AirQualityReading {
    City::parse(city)
        .map(tables::air_quality)
        .unwrap_or(tables::BASELINE_READING)
}

// Unknown modes use the car factor but are echoed back as given.
pub fn estimate_trip_emissions(
    origin: &str,
    destination: &str,
    mode: &str,
) -> Result<TripEstimate, LookupError> {
    let (Some(from), Some(to)) = (City::parse(origin), City::parse(destination)) else {
        return Err(LookupError::CityNotFound);
    };

    let distance_km = haversine_km(tables::coordinates(from), tables::coordinates(to));
    let factor =
        tables::emission_factor(TravelMode::parse(mode).unwrap_or(tables::DEFAULT_MODE));
    let total_co2_g = distance_km * factor;

    Ok(TripEstimate {
        origin: origin.to_string(),
        destination: destination.to_string(),
        mode: mode.to_string(),
        distance_km: round_one_decimal(distance_km),
        emission_factor: factor,
        total_co2_g: round_one_decimal(total_co2_g),
    })
}

pub fn get_wildfire_alerts(region: &str) -> WildfireSummary {
    let alerts = Region::parse(region)
        .map(tables::wildfire_alerts)
        .unwrap_or_default();

    WildfireSummary {
        region: region.to_string(),
        alert_count: alerts.len(),
        alerts,
    }
}

pub fn route_tool(call: &ToolCall) -> ToolOutcome {
    match call {
        ToolCall::AirQuality { city } => ToolOutcome::AirQuality(AirQualityReport {
            city: city.clone(),
            reading: get_air_quality(city),
        }),
        ToolCall::TripEmissions {
            origin,
            destination,
            mode,
        } => match estimate_trip_emissions(origin, destination, mode) {
            Ok(estimate) => ToolOutcome::Trip(estimate),
            Err(err) => ToolOutcome::error(err.to_string()),
        },
        ToolCall::WildfireAlerts { region } => ToolOutcome::Wildfire(get_wildfire_alerts(region)),
    }
}

pub fn tool_catalog() -> Vec<ToolSpec> {
    ToolName::ALL
        .into_iter()
        .map(|tool| ToolSpec {
            name: tool.as_str(),
            description: match tool {
                ToolName::AirQuality => "Get air quality data for cities",
                ToolName::TripEmissions => "Estimate CO2 emissions for trips between cities",
                ToolName::WildfireAlerts => "Get wildfire alerts for regions",
            },
            parameters: tool
                .param_names()
                .iter()
                .map(|param| (param.to_string(), json!("string")))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_city_returns_table_entry() {
        let reading = get_air_quality("Toronto");
        assert_eq!(reading.aqi, 42);
        assert_eq!(reading.pm25, 7.1);
        assert_eq!(get_air_quality("Calgary"), tables::air_quality(City::Calgary));
    }

    #[test]
    fn unknown_city_returns_baseline() {
        for city in ["Paris", "", "toronto"] {
            assert_eq!(get_air_quality(city), AirQualityReading { aqi: 50, pm25: 9.0 });
        }
    }

    #[test]
    fn toronto_to_vancouver_by_car() {
        let estimate = estimate_trip_emissions("Toronto", "Vancouver", "car").unwrap();
        assert_eq!(estimate.distance_km, 3361.6);
        assert_eq!(estimate.emission_factor, 171.0);
        assert_eq!(estimate.total_co2_g, 574831.4);

        let raw = haversine_km(
            tables::coordinates(City::Toronto),
            tables::coordinates(City::Vancouver),
        );
        assert_eq!(estimate.total_co2_g, round_one_decimal(raw * 171.0));
    }

    #[test]
    fn unknown_mode_uses_car_factor() {
        let estimate = estimate_trip_emissions("Montreal", "Calgary", "unknown-mode").unwrap();
        assert_eq!(estimate.emission_factor, 171.0);
        assert_eq!(estimate.mode, "unknown-mode");
    }

    #[test]
    fn flight_factor() {
        let estimate = estimate_trip_emissions("Montreal", "Calgary", "flight").unwrap();
        assert_eq!(estimate.distance_km, 3020.3);
        assert_eq!(estimate.total_co2_g, 770178.7);
    }

    #[test]
    fn missing_city_is_not_found() {
        assert_eq!(
            estimate_trip_emissions("Toronto", "Ottawa", "car"),
            Err(LookupError::CityNotFound)
        );
        let outcome = route_tool(&ToolCall::TripEmissions {
            origin: "Paris".to_string(),
            destination: "Toronto".to_string(),
            mode: "car".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "error": "City not found in database" })
        );
    }

    #[test]
    fn wildfire_summaries() {
        let bc = get_wildfire_alerts("BC");
        assert_eq!(bc.alert_count, 2);
        assert_eq!(bc.alerts.len(), 2);

        let unknown = get_wildfire_alerts("XX");
        assert_eq!(unknown.region, "XX");
        assert_eq!(unknown.alert_count, 0);
        assert!(unknown.alerts.is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let calls = [
            ToolCall::AirQuality {
                city: "Montreal".to_string(),
            },
            ToolCall::AirQuality {
                city: "Ottawa".to_string(),
            },
            ToolCall::TripEmissions {
                origin: "Calgary".to_string(),
                destination: "Toronto".to_string(),
                mode: "rail".to_string(),
            },
            ToolCall::TripEmissions {
                origin: "Ottawa".to_string(),
                destination: "Toronto".to_string(),
                mode: "car".to_string(),
            },
            ToolCall::WildfireAlerts {
                region: "ON".to_string(),
            },
        ];

        for call in &calls {
            let first = serde_json::to_string(&route_tool(call)).unwrap();
            let second = serde_json::to_string(&route_tool(call)).unwrap();
            assert_eq!(first, second, "{call:?}");
        }
    }

    #[test]
    fn air_quality_outcome_serialises_as_reading() {
        let outcome = route_tool(&ToolCall::AirQuality {
            city: "Vancouver".to_string(),
        });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "aqi": 55, "pm25": 10.2 })
        );
    }

    #[test]
    fn catalog_lists_three_tools() {
        let names = tool_catalog().iter().map(|spec| spec.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            ["get_air_quality", "estimate_trip_emissions", "get_wildfire_alerts"]
        );
    }
}
