pub mod decision;
pub mod formatter;
pub mod geo;
pub mod models;
pub mod router;
pub mod tables;
pub mod tools;

pub use decision::{parse_model_reply, resolve_tool_call, ModelDecision, ToolCallError};
pub use formatter::format_outcome;
pub use geo::haversine_km;
pub use models::*;
pub use router::{route_keywords, Route, Topic};
pub use tools::{
    estimate_trip_emissions, get_air_quality, get_wildfire_alerts, route_tool, tool_catalog,
    LookupError,
};
