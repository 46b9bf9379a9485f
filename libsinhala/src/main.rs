use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use libsinhala::{
    create_ime_engine, parse_script, replay, Config, InputPurpose, Layout, TextBuffer,
};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "libsinhala")]
#[command(about = "Replay key scripts through the Sinhala composition engine")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Layout to start on (overrides the configuration)
    #[arg(short, long, value_enum)]
    layout: Option<LayoutArg>,

    /// Text already in the field, before the cursor
    #[arg(long, default_value = "")]
    prefix: String,

    /// Treat the field as a password field (no token output)
    #[arg(long)]
    password: bool,

    /// Print every key's effect, not just the final text
    #[arg(long)]
    steps: bool,

    /// Emit one JSON object per script
    #[arg(long)]
    json: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Key scripts, e.g. "mama<space>gedhara". Read from stdin, one per line,
    /// when none are given.
    scripts: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy)]
enum LayoutArg {
    Singlish,
    Wijesekara,
    English,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Singlish => Layout::Singlish,
            LayoutArg::Wijesekara => Layout::Wijesekara,
            LayoutArg::English => Layout::English,
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_toml(path)
            .map_err(|e| anyhow!("failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };
    if let Some(layout) = cli.layout {
        config.layout = layout.into();
    }
    info!(layout = ?config.layout, "configuration loaded");
    Ok(config)
}

fn run_script(cli: &Cli, config: &Config, script: &str) -> anyhow::Result<()> {
    let mut engine = create_ime_engine(config.clone());
    if cli.password {
        engine.set_input_purpose(InputPurpose::Password);
    }
    let mut buffer = TextBuffer::from_text(&cli.prefix);
    let report = replay(&mut engine, &mut buffer, &parse_script(script), cli.steps);

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "{:>3}. {:<16} erase={} commit={:?} -> {:?}",
            i + 1,
            step.key,
            step.erased,
            step.commit,
            step.text
        );
    }
    println!("{}", report.text);
    if !report.token.is_empty() && cli.steps {
        println!("token: {}", report.token);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", Config::default().to_toml_string()?);
        return Ok(());
    }

    let config = load_config(&cli)?;

    if !cli.scripts.is_empty() {
        for script in &cli.scripts {
            run_script(&cli, &config, script)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("error reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        run_script(&cli, &config, &line)?;
    }
    Ok(())
}
