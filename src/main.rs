use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use stagehand_core::orchestrator::Orchestrator;
use stagehand_core::platform::create_platform;
use stagehand_core::references::References;
use stagehand_core::settings::Settings;
use stagehand_core::{apps, logger};

#[derive(Parser, Debug)]
#[command(name = "stagehand", version, about = "Screen-driven Android game automation")]
struct Args {
    /// Rule set to run (ic, mlp)
    app: String,

    /// Settings file; written with defaults when missing
    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,

    /// Use logging stubs instead of adb and the capture program
    #[arg(long)]
    stub: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.settings.exists() {
        Settings::default().save(&args.settings);
    }
    let settings = Settings::load(&args.settings);

    logger::init(&settings.logs, &settings.log_level)?;
    info!("stagehand started with rule set {}", args.app);

    let references = References::load(&settings.references)?;
    let registry = apps::build(&args.app, &references)?;
    info!("{} stage(s) registered", registry.len());

    let platform = create_platform(args.stub, &settings);
    let mut orchestrator = Orchestrator::new(registry, platform, &settings)?;

    let result = orchestrator.run();
    if let Err(e) = &result {
        error!("stopping: {:#}", e);
    }
    result
}
