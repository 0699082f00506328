use eco_core::{tool_catalog, City, Region, ToolName, TravelMode};

pub fn system_prompt() -> String {
    let tools = ToolName::ALL
        .into_iter()
        .zip(tool_catalog())
        .enumerate()
        .map(|(idx, (tool, spec))| {
            format!(
                "{}. {}({}) - {}",
                idx + 1,
                spec.name,
                tool.param_names().join(", "),
                spec.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let cities = City::ALL.map(City::name).join(", ");
    let regions = Region::ALL.map(Region::code).join(", ");
    let modes = TravelMode::ALL.map(TravelMode::as_code).join(", ");

    format!(
        "You are EcoAgents, an environmental assistant. You have access to these tools:\n\n\
         {tools}\n\n\
         When a user asks about these topics, determine which tool to use and call it with the appropriate parameters.\n\
         Always respond in a helpful, conversational manner.\n\n\
         Available cities: {cities}\n\
         Available regions: {regions}\n\
         Available travel modes: {modes}"
    )
}

pub fn user_turn(message: &str) -> String {
    format!(
        "User asks: {message}\n\nDetermine if this requires a tool call. If yes, respond with JSON format: {{\"tool\": \"tool_name\", \"params\": {{...}}}}. If no, respond naturally."
    )
}
