pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::glossary::Glossary;
use crate::core::market::{SERIES_DAYS, SeededNormal, generate_market_data};
use crate::core::profile::{ProfileOverrides, UserProfile};
use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, info};

/// One page of the dashboard, as selected on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Home,
    Terms { query: Option<String> },
    Finances { overrides: ProfileOverrides },
    Market { history: bool },
    Dashboard,
}

/// Picks the profile for the finances page: flags layered over the
/// configured profile, or nothing when neither is given.
pub fn resolve_profile(
    config: &AppConfig,
    overrides: ProfileOverrides,
) -> Result<Option<UserProfile>> {
    let input = match (config.profile.clone(), overrides.is_empty()) {
        (base, false) => Some(overrides.apply(base.unwrap_or_default())),
        (Some(base), true) => Some(base),
        (None, true) => None,
    };
    input
        .map(|input| input.validate().context("Invalid profile"))
        .transpose()
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("FLex starting...");

    let config = AppConfig::load_optional(config_path)?;
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Home => print!("{}", cli::home::render(&config.title)),
        AppCommand::Terms { query } => {
            let glossary = Glossary::load(config.glossary.path.as_deref())?;
            print!("{}", cli::terms::run(&glossary, query.as_deref()));
        }
        AppCommand::Finances { overrides } => {
            let profile = resolve_profile(&config, overrides)?;
            cli::finances::run(profile.as_ref());
        }
        AppCommand::Market { history } => {
            let today = Local::now().date_naive();
            let series = generate_market_data(
                &config.market.instruments,
                today,
                SERIES_DAYS,
                &mut SeededNormal::new(config.market.seed),
            )?;
            print!("{}", cli::market::render(today, &series, history));
            print!("{}", cli::ui::footer());
        }
        AppCommand::Dashboard => {
            let glossary = Glossary::load(config.glossary.path.as_deref())?;
            let mut dashboard = cli::dashboard::Dashboard::new(config, glossary);
            dashboard.run(&mut cli::dashboard::StdinPrompt)?;
        }
    }
    Ok(())
}
