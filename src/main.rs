use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use onboardflow::cli::{
    handle_config, handle_dashboard, handle_restart, handle_show, handle_start, handle_status,
    handle_theme, OutputFormat,
};
use onboardflow::config::{paths::DATA_DIR_ENV, OnboardPaths, Settings};

#[derive(Parser)]
#[command(
    name = "onboard",
    version,
    about = "Terminal onboarding wizard",
    long_about = "OnboardFlow walks a new user through personal, business and \
                  preference details, saves progress so it can be resumed, and \
                  shows a dashboard once onboarding is complete."
)]
struct Cli {
    /// Directory holding settings and saved progress
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the onboarding wizard (default)
    Start,

    /// Show onboarding progress
    Status,

    /// Print the saved onboarding record
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Show the dashboard for a completed onboarding
    Dashboard,

    /// Clear saved answers and start over
    Restart,

    /// Show or set the color theme
    Theme {
        /// light or dark
        theme: Option<String>,

        /// Switch between light and dark
        #[arg(long, conflicts_with = "theme")]
        toggle: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => OnboardPaths::with_base_dir(dir),
        None => OnboardPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();

    match cli.command.unwrap_or(Commands::Start) {
        Commands::Start => handle_start(&paths, &settings)?,
        Commands::Status => handle_status(&paths)?,
        Commands::Show { format } => handle_show(&paths, format)?,
        Commands::Dashboard => handle_dashboard(&paths, &settings)?,
        Commands::Restart => handle_restart(&paths, &settings)?,
        Commands::Theme { theme, toggle } => handle_theme(&paths, theme, toggle)?,
        Commands::Config => handle_config(&paths, &settings)?,
    }

    Ok(())
}
