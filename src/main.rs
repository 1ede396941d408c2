use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use flex::core::log::init_logging;
use flex::core::profile::ProfileOverrides;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ProfileArgs {
    /// Your name
    #[arg(long)]
    name: Option<String>,
    /// Your age (16-100)
    #[arg(long)]
    age: Option<u32>,
    /// Student status, e.g. "Undergraduate"
    #[arg(long)]
    status: Option<String>,
    /// Monthly income bracket, e.g. "$501-1000"
    #[arg(long)]
    income: Option<String>,
    /// Current savings bracket, e.g. "$101-500"
    #[arg(long)]
    savings: Option<String>,
    /// Current debt bracket, e.g. "None"
    #[arg(long)]
    debt: Option<String>,
    /// A financial goal; repeat for several
    #[arg(long = "goal")]
    goals: Vec<String>,
}

impl From<ProfileArgs> for ProfileOverrides {
    fn from(args: ProfileArgs) -> Self {
        ProfileOverrides {
            name: args.name,
            age: args.age,
            status: args.status,
            income: args.income,
            savings: args.savings,
            debt: args.debt,
            goals: args.goals,
        }
    }
}

impl From<Commands> for flex::AppCommand {
    fn from(cmd: Commands) -> flex::AppCommand {
        match cmd {
            Commands::Home => flex::AppCommand::Home,
            Commands::Terms { query } => flex::AppCommand::Terms { query },
            Commands::Finances(args) => flex::AppCommand::Finances {
                overrides: args.into(),
            },
            Commands::Market { history } => flex::AppCommand::Market { history },
            Commands::Dashboard => flex::AppCommand::Dashboard,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Show the home page
    Home,
    /// Look up a financial term, or list popular topics
    Terms {
        /// Term to explain, matched case-insensitively
        query: Option<String>,
    },
    /// Show your financial health score and recommendations
    Finances(ProfileArgs),
    /// Show bank rates and simulated market data
    Market {
        /// Also print every daily price
        #[arg(long)]
        history: bool,
    },
    /// Start an interactive session
    Dashboard,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => flex::cli::setup::setup_at_path(path),
            None => flex::cli::setup::setup(),
        },
        Some(cmd) => flex::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
