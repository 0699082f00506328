use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eco_agents::{AgentConfig, EcoAgent, RouterStrategy};
use eco_core::{route_tool, ToolCall};
use eco_observability::{init_tracing, AppMetrics};

const DEMO_QUESTIONS: [&str; 4] = [
    "What is the air quality in Toronto?",
    "How much CO2 for a trip from Toronto to Vancouver?",
    "Are there any wildfire alerts in BC?",
    "Hello, how are you?",
];

#[derive(Debug, Parser)]
#[command(name = "ecoagents")]
#[command(about = "EcoAgents environmental assistant CLI")]
struct Cli {
    /// Routing strategy: keyword or model (defaults from ECO_ROUTER).
    #[arg(long, env = "ECO_ROUTER")]
    router: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Chat,
    Ask {
        message: String,
    },
    Demo,
    Tool {
        #[command(subcommand)]
        command: ToolCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ToolCommand {
    AirQuality {
        #[arg(long)]
        city: String,
    },
    Trip {
        #[arg(long)]
        origin: String,
        #[arg(long)]
        destination: String,
        #[arg(long, default_value = "car")]
        mode: String,
    },
    Wildfire {
        #[arg(long)]
        region: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("eco_cli");
    let cli = Cli::parse();

    match cli.command {
        Command::Tool { command } => {
            let call = match command {
                ToolCommand::AirQuality { city } => ToolCall::AirQuality { city },
                ToolCommand::Trip {
                    origin,
                    destination,
                    mode,
                } => ToolCall::TripEmissions {
                    origin,
                    destination,
                    mode,
                },
                ToolCommand::Wildfire { region } => ToolCall::WildfireAlerts { region },
            };
            println!("{}", serde_json::to_string_pretty(&route_tool(&call))?);
        }
        Command::Ask { message } => {
            let agent = build_agent(cli.router.as_deref())?;
            println!("{}", agent.chat(&message).await?);
        }
        Command::Demo => {
            let agent = build_agent(cli.router.as_deref())?;
            for question in DEMO_QUESTIONS {
                println!("Q: {question}");
                println!("A: {}\n", agent.chat(question).await?);
            }
        }
        Command::Chat => run_chat(build_agent(cli.router.as_deref())?).await?,
    }

    Ok(())
}

async fn run_chat(agent: EcoAgent) -> Result<()> {
    println!("EcoAgents chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        println!("\n{}\n", agent.chat(message).await?);
    }

    Ok(())
}

fn build_agent(router: Option<&str>) -> Result<EcoAgent> {
    let mut config = AgentConfig::from_env();
    if let Some(value) = router {
        let strategy = RouterStrategy::parse(value).context("invalid --router value")?;
        config = config.with_strategy(strategy);
    }
    EcoAgent::from_config(&config, AppMetrics::shared())
}
