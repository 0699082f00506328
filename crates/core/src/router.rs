use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{City, Region, ToolCall};
use crate::tables::DEFAULT_MODE;

pub const GREETING: &str = "Hello! I'm your environmental assistant. I can help you with air quality information, trip emissions estimates, and wildfire alerts. What would you like to know?";
pub const AIR_QUALITY_CLARIFICATION: &str = "I can check air quality for Toronto, Vancouver, Montreal, or Calgary. Which city would you like to know about?";
pub const EMISSIONS_CLARIFICATION: &str = "I can estimate emissions for trips between Toronto, Vancouver, Montreal, and Calgary. Please specify origin and destination cities.";
pub const WILDFIRE_CLARIFICATION: &str =
    "I can check wildfire alerts for BC, AB, or ON. Which region would you like to know about?";

const AIR_QUALITY_KEYWORDS: &[&str] = &["air quality", "aqi"];
const EMISSIONS_KEYWORDS: &[&str] = &["emissions", "carbon", "co2"];
const WILDFIRE_KEYWORDS: &[&str] = &["wildfire", "fire"];

static CITY_PATTERNS: Lazy<Vec<(City, Regex)>> = Lazy::new(|| {
    City::ALL
        .into_iter()
        .map(|city| (city, compile(&any_case_word(city.name()))))
        .collect()
});

static REGION_PATTERNS: Lazy<Vec<(Region, Regex)>> = Lazy::new(|| {
    Region::ALL
        .into_iter()
        .map(|region| (region, region_pattern(region)))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    AirQuality,
    Emissions,
    Wildfire,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Tool(ToolCall),
    Clarify(Topic),
    Greeting,
}

impl Route {
    pub fn canned_reply(&self) -> Option<&'static str> {
        match self {
            Self::Tool(_) => None,
            Self::Clarify(Topic::AirQuality) => Some(AIR_QUALITY_CLARIFICATION),
            Self::Clarify(Topic::Emissions) => Some(EMISSIONS_CLARIFICATION),
            Self::Clarify(Topic::Wildfire) => Some(WILDFIRE_CLARIFICATION),
            Self::Greeting => Some(GREETING),
        }
    }
}

// First hit wins.
pub fn detect_topic(message: &str) -> Option<Topic> {
    let lower = message.to_lowercase();

    if contains_any(&lower, AIR_QUALITY_KEYWORDS) {
        Some(Topic::AirQuality)
    } else if contains_any(&lower, EMISSIONS_KEYWORDS) {
        Some(Topic::Emissions)
    } else if contains_any(&lower, WILDFIRE_KEYWORDS) {
        Some(Topic::Wildfire)
    } else {
        None
    }
}

pub fn route_keywords(message: &str) -> Route {
    match detect_topic(message) {
        Some(Topic::AirQuality) => match mentioned_cities(message).first() {
            Some(city) => Route::Tool(ToolCall::AirQuality {
                city: city.name().to_string(),
            }),
            None => Route::Clarify(Topic::AirQuality),
        },
        Some(Topic::Emissions) => match mentioned_cities(message).as_slice() {
            [origin, destination, ..] => Route::Tool(ToolCall::TripEmissions {
                origin: origin.name().to_string(),
                destination: destination.name().to_string(),
                mode: DEFAULT_MODE.as_code().to_string(),
            }),
            _ => Route::Clarify(Topic::Emissions),
        },
        Some(Topic::Wildfire) => match mentioned_region(message) {
            Some(region) => Route::Tool(ToolCall::WildfireAlerts {
                region: region.code().to_string(),
            }),
            None => Route::Clarify(Topic::Wildfire),
        },
        None => Route::Greeting,
    }
}

// Table order, not message order.
pub fn mentioned_cities(message: &str) -> Vec<City> {
    CITY_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(message))
        .map(|(city, _)| *city)
        .collect()
}

pub fn mentioned_region(message: &str) -> Option<Region> {
    REGION_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(message))
        .map(|(region, _)| *region)
}

fn region_pattern(region: Region) -> Regex {
    let code = match region {
        // Exact-case only: the English word "on" must not select Ontario.
        Region::On => format!(r"\b{}\b", regex::escape(region.code())),
        Region::Bc | Region::Ab => any_case_word(region.code()),
    };
    compile(&format!("{code}|{}", any_case_word(region.full_name())))
}

fn any_case_word(word: &str) -> String {
    format!(r"(?i:\b{}\b)", regex::escape(word))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid name pattern")
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
