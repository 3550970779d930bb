//! Copyforge - command-line front end
//!
//! Provides:
//! - Template listing and prompt rendering
//! - One-shot generation with optional export
//! - An interactive session that keeps cooldown, stats and saved outputs

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use copyforge::commands::{
    export_content, generate_copy, list_templates, render_prompt, run_session, Session,
};
use copyforge::models::settings::SettingsUpdate;
use copyforge::storage::ConfigService;
use copyforge::AppState;
use copyforge_core::{FocusArea, GenerationInputs, Length, TemplateId, Tone};

/// Copyforge CLI
#[derive(Parser)]
#[command(name = "copyforge")]
#[command(about = "Marketing copy generator with local fallback synthesis", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path (default ~/.copyforge/config.json)
    #[arg(short, long, env = "COPYFORGE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Remote API key; blank or absent runs in mock mode
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Model override
    #[arg(long, global = true)]
    model: Option<String>,

    /// Cooldown between generations in milliseconds
    #[arg(long, global = true)]
    cooldown_ms: Option<u64>,

    /// Directory for exported files
    #[arg(long, global = true)]
    export_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "COPYFORGE_LOG_LEVEL", default_value = "warn", global = true)]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "COPYFORGE_LOG_JSON", global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the template catalog
    Templates,
    /// Print the prompt a template renders for the given inputs
    Render {
        #[arg(short, long, default_value = "product-description")]
        template: String,
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Generate copy once
    Generate {
        #[arg(short, long, default_value = "product-description")]
        template: String,
        #[command(flatten)]
        inputs: InputArgs,
        /// Also write the copy to the export directory
        #[arg(long)]
        export: bool,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive session reading commands from stdin
    Session {
        #[arg(short, long, default_value = "product-description")]
        template: TemplateId,
        #[command(flatten)]
        inputs: InputArgs,
    },
}

#[derive(Args, Clone)]
struct InputArgs {
    /// Product name (required to generate)
    #[arg(long, default_value = "")]
    product: String,
    #[arg(long, default_value = "")]
    category: String,
    #[arg(long, default_value = "")]
    features: String,
    #[arg(long, default_value = "")]
    audience: String,
    #[arg(long, default_value = "professional")]
    tone: Tone,
    #[arg(long, default_value = "medium")]
    length: Length,
    #[arg(long, default_value = "benefits")]
    focus: FocusArea,
}

impl From<InputArgs> for GenerationInputs {
    fn from(args: InputArgs) -> Self {
        GenerationInputs {
            product_name: args.product,
            category: args.category,
            features: args.features,
            target_audience: args.audience,
            tone: args.tone,
            length: args.length,
            focus_area: args.focus,
        }
    }
}

fn init_tracing(level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.to_string().into());

    // Logs go to stderr so stdout carries only the copy.
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_state(cli: &Cli) -> anyhow::Result<AppState> {
    let mut config_service = match &cli.config {
        Some(path) => ConfigService::from_path(path.clone()),
        None => ConfigService::new(),
    }
    .context("failed to load configuration")?;

    config_service.apply_overrides(SettingsUpdate {
        api_key: cli.api_key.clone(),
        base_url: None,
        model: cli.model.clone(),
        cooldown_ms: cli.cooldown_ms,
        export_dir: cli.export_dir.clone(),
    })?;

    Ok(AppState::new(config_service.get_config_clone())?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.log_json);

    match &cli.command {
        Command::Templates => {
            let templates = list_templates().into_result().map_err(anyhow::Error::msg)?;
            for t in templates {
                println!("{} - {}", t.id, t.display_name);
                println!("  category:     {}", t.category);
                println!("  methodology:  {}", t.methodology);
                println!("  placeholders: {}", t.placeholders.join(", "));
                println!("  preview:      {}", t.preview.replace('\n', " "));
                println!();
            }
        }
        Command::Render { template, inputs } => {
            let prompt = render_prompt(template, &inputs.clone().into())
                .into_result()
                .map_err(anyhow::Error::msg)?;
            println!("{}", prompt);
        }
        Command::Generate {
            template,
            inputs,
            export,
            json,
        } => {
            let state = load_state(&cli)?;
            let inputs: GenerationInputs = inputs.clone().into();
            let result = generate_copy(&state, template, &inputs)
                .await
                .into_result()
                .map_err(anyhow::Error::msg)?;

            if let Some(notice) = result.notice.as_deref().filter(|_| result.source.is_degraded()) {
                eprintln!("[{}] {}", result.source, notice);
            }
            if *json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.text);
            }

            if *export {
                let template_id: TemplateId = template.parse()?;
                let path = export_content(&state, template_id, &result.text)
                    .into_result()
                    .map_err(anyhow::Error::msg)?;
                eprintln!("exported to {}", path.display());
            }
        }
        Command::Session { template, inputs } => {
            let state = load_state(&cli)?;
            let session = Session::new(&state, *template, inputs.clone().into());
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            eprintln!("copyforge session - type `help` for commands");
            run_session(session, stdin, &mut stdout).await?;
        }
    }

    Ok(())
}
