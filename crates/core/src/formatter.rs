use crate::models::ToolOutcome;

/// One sentence per tool; error outcomes fall through to the raw JSON form.
pub fn format_outcome(outcome: &ToolOutcome) -> serde_json::Result<String> {
    let text = match outcome {
        ToolOutcome::AirQuality(report) => format!(
            "Air quality in {}: AQI {}, PM2.5: {:.1} μg/m³",
            report.city, report.reading.aqi, report.reading.pm25
        ),
        ToolOutcome::Trip(estimate) => format!(
            "Trip from {} to {}: {:.1} km, {:.1} g CO2",
            estimate.origin, estimate.destination, estimate.distance_km, estimate.total_co2_g
        ),
        ToolOutcome::Wildfire(summary) if summary.alert_count > 0 => format!(
            "Wildfire alerts for {}: {} active fires.",
            summary.region, summary.alert_count
        ),
        ToolOutcome::Wildfire(summary) => format!(
            "No active wildfire alerts for {} at this time.",
            summary.region
        ),
        ToolOutcome::Error { .. } => {
            format!("Tool result: {}", serde_json::to_string(outcome)?)
        }
    };

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToolCall;
    use crate::tools::route_tool;

    fn render(call: ToolCall) -> String {
        format_outcome(&route_tool(&call)).unwrap()
    }

    #[test]
    fn air_quality_sentence() {
        assert_eq!(
            render(ToolCall::AirQuality {
                city: "Toronto".to_string()
            }),
            "Air quality in Toronto: AQI 42, PM2.5: 7.1 μg/m³"
        );
        assert_eq!(
            render(ToolCall::AirQuality {
                city: "Halifax".to_string()
            }),
            "Air quality in Halifax: AQI 50, PM2.5: 9.0 μg/m³"
        );
    }

    #[test]
    fn trip_sentence() {
        assert_eq!(
            render(ToolCall::TripEmissions {
                origin: "Toronto".to_string(),
                destination: "Vancouver".to_string(),
                mode: "car".to_string(),
            }),
            "Trip from Toronto to Vancouver: 3361.6 km, 574831.4 g CO2"
        );
    }

    #[test]
    fn wildfire_sentences() {
        assert_eq!(
            render(ToolCall::WildfireAlerts {
                region: "BC".to_string()
            }),
            "Wildfire alerts for BC: 2 active fires."
        );
        assert_eq!(
            render(ToolCall::WildfireAlerts {
                region: "NS".to_string()
            }),
            "No active wildfire alerts for NS at this time."
        );
    }

    #[test]
    fn errors_use_raw_json() {
        assert_eq!(
            format_outcome(&ToolOutcome::error("Tool get_weather not found")).unwrap(),
            r#"Tool result: {"error":"Tool get_weather not found"}"#
        );
    }
}
