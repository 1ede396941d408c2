//! Interactive dashboard: one in-memory session across page commands.
use super::{finances, home, market, terms, ui};
use crate::core::config::AppConfig;
use crate::core::glossary::Glossary;
use crate::core::market::{SERIES_DAYS, SeededNormal, generate_market_data};
use crate::core::profile::{
    DebtBracket, Goal, IncomeBracket, ProfileInput, SavingsBracket, Status, UserProfile,
};
use crate::core::session::Session;
use anyhow::{Result, anyhow, bail};
use chrono::Local;
use console::Term;
use std::collections::BTreeSet;
use std::io::BufRead;
use std::str::FromStr;
use tracing::{debug, info};

/// Line-oriented input. `None` means the input is closed.
pub trait Prompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads answers from stdin, writing prompts to the terminal.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        let term = Term::stdout();
        term.write_str(&ui::style_text(prompt, ui::StyleType::Highlight))?;
        term.flush()?;

        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    Help,
    Home,
    Search(Option<String>),
    Related(usize),
    Popular,
    Profile,
    Finances,
    Market,
    Reset,
    Quit,
}

impl FromStr for DashboardCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (word, rest) = match s.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (s, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        match word.to_lowercase().as_str() {
            "help" | "?" => Ok(DashboardCommand::Help),
            "home" => Ok(DashboardCommand::Home),
            "search" | "terms" | "term" => Ok(DashboardCommand::Search(arg)),
            "related" => {
                let index = rest
                    .parse::<usize>()
                    .map_err(|_| anyhow!("Usage: related <number>"))?;
                if index == 0 {
                    bail!("Related terms are numbered from 1");
                }
                Ok(DashboardCommand::Related(index))
            }
            "popular" => Ok(DashboardCommand::Popular),
            "profile" | "edit" => Ok(DashboardCommand::Profile),
            "finances" => Ok(DashboardCommand::Finances),
            "market" => Ok(DashboardCommand::Market),
            "reset" => Ok(DashboardCommand::Reset),
            "quit" | "exit" | "q" => Ok(DashboardCommand::Quit),
            "" => bail!("Type a command, or `help` to list them"),
            other => bail!("Unknown command: {other}. Type `help` to list commands"),
        }
    }
}

const HELP: [(&str, &str); 10] = [
    ("home", "Show the home page"),
    ("search <term>", "Look up a financial term (no term: show the last one)"),
    ("related <n>", "Open the n-th related term of the current term"),
    ("popular", "List popular topics"),
    ("profile", "Create or edit your profile"),
    ("finances", "Show your personalized recommendations"),
    ("market", "Show the current market page"),
    ("reset", "Forget your profile and last search"),
    ("help", "Show this list"),
    ("quit", "Leave the dashboard"),
];

fn render_help() -> String {
    let mut output = ui::section("Commands");
    for (command, description) in HELP {
        output.push_str(&format!(
            "  {:<16} {description}\n",
            ui::style_text(command, ui::StyleType::Highlight)
        ));
    }
    output
}

/// Profile summary shown next to every page.
pub fn render_sidebar(session: &Session) -> String {
    match session.profile() {
        Some(profile) => {
            let name = if profile.name.is_empty() {
                "there"
            } else {
                profile.name.as_str()
            };
            format!("Hi, {name}! Status: {}\n", profile.status)
        }
        None => "Please complete your profile with `profile`\n".to_string(),
    }
}

const FORM_INTRO: &str =
    "Let's get to know your financial situation to provide personalized guidance.";

/// Typed in a text field to clear its current value.
const CLEAR_ANSWER: &str = "-";

/// Asks until the answer parses; an empty answer keeps `default`.
fn ask<T, F>(prompt: &mut dyn Prompt, question: &str, default: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let question = if default.is_empty() {
            format!("{question}: ")
        } else {
            format!("{question} [{default}]: ")
        };
        let line = prompt
            .read_line(&question)?
            .ok_or_else(|| anyhow!("Input closed while filling the profile form"))?;
        let answer = line.trim();
        let answer = if answer.is_empty() { default } else { answer };
        match parse(answer) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error)),
        }
    }
}

/// Accepts either a 1-based option number or the exact label.
fn choose<T: Copy + FromStr<Err = crate::core::FlexError>>(
    answer: &str,
    options: &[T],
) -> Result<T> {
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .copied()
            .ok_or_else(|| anyhow!("Choose a number between 1 and {}", options.len()));
    }
    Ok(answer.parse::<T>()?)
}

fn option_menu(labels: &[&str]) -> String {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}) {label}", i + 1))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Walks through the profile form, pre-filled from `existing`.
pub fn fill_profile_form(
    prompt: &mut dyn Prompt,
    existing: Option<&UserProfile>,
) -> Result<UserProfile> {
    let defaults = existing.map(ProfileInput::from).unwrap_or_default();

    println!("{}", ui::section("Basic Information"));
    let name = ask(prompt, "Name (`-` to leave blank)", &defaults.name, |s| {
        Ok(if s == CLEAR_ANSWER {
            String::new()
        } else {
            s.to_string()
        })
    })?;
    let age = ask(prompt, "Age", &defaults.age.to_string(), |s| {
        let age = s.parse::<u32>().map_err(|_| anyhow!("Age must be a number"))?;
        ProfileInput {
            age,
            ..Default::default()
        }
        .validate()?;
        Ok(age)
    })?;

    let labels: Vec<&str> = Status::ALL.iter().map(Status::label).collect();
    println!("  {}", option_menu(&labels));
    let status = ask(prompt, "Status", &defaults.status, |s| {
        choose(s, &Status::ALL)
    })?;

    println!("{}", ui::section("Financial Snapshot"));
    let labels: Vec<&str> = IncomeBracket::ALL.iter().map(IncomeBracket::label).collect();
    println!("  {}", option_menu(&labels));
    let income = ask(prompt, "Monthly Income", &defaults.income, |s| {
        choose(s, &IncomeBracket::ALL)
    })?;

    let labels: Vec<&str> = SavingsBracket::ALL.iter().map(SavingsBracket::label).collect();
    println!("  {}", option_menu(&labels));
    let savings = ask(prompt, "Current Savings", &defaults.savings, |s| {
        choose(s, &SavingsBracket::ALL)
    })?;

    let labels: Vec<&str> = DebtBracket::ALL.iter().map(DebtBracket::label).collect();
    println!("  {}", option_menu(&labels));
    let debt = ask(prompt, "Current Debt", &defaults.debt, |s| {
        choose(s, &DebtBracket::ALL)
    })?;

    println!("{}", ui::section("Financial Goals"));
    let labels: Vec<&str> = Goal::ALL.iter().map(Goal::label).collect();
    println!("  {}", option_menu(&labels));
    let goals = ask(
        prompt,
        "Select your top financial goals (comma separated, `none` for no goals)",
        &defaults.goals.join(", "),
        |s| -> Result<BTreeSet<Goal>> {
            if s.eq_ignore_ascii_case("none") {
                return Ok(BTreeSet::new());
            }
            s.split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(|g| choose(g, &Goal::ALL))
                .collect()
        },
    )?;

    Ok(UserProfile {
        name: name.trim().to_string(),
        age,
        status,
        income,
        savings,
        debt,
        goals,
    })
}

pub struct Dashboard {
    config: AppConfig,
    glossary: Glossary,
    session: Session,
}

impl Dashboard {
    pub fn new(config: AppConfig, glossary: Glossary) -> Self {
        Self {
            config,
            glossary,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the profile form and saves the result. An aborted form leaves
    /// the saved profile untouched and drops the pending edit.
    fn collect_profile(&mut self, prompt: &mut dyn Prompt) -> Result<()> {
        match fill_profile_form(prompt, self.session.profile()) {
            Ok(profile) => {
                self.session.save_profile(profile);
                info!("Profile saved");
                Ok(())
            }
            Err(e) => {
                self.session.cancel_edit();
                Err(e)
            }
        }
    }

    fn show_term(&mut self, query: Option<&str>) -> String {
        match self.session.resolve_term(query) {
            Some(term) => {
                let record = self.glossary.lookup(&term);
                terms::render_term(&term, &record)
            }
            None => terms::render_index(&self.glossary),
        }
    }

    /// Runs one command. Returns `None` when the user quits.
    pub fn execute(
        &mut self,
        command: DashboardCommand,
        prompt: &mut dyn Prompt,
    ) -> Result<Option<String>> {
        debug!(?command, "Executing dashboard command");
        let output = match command {
            DashboardCommand::Quit => return Ok(None),
            DashboardCommand::Help => render_help(),
            DashboardCommand::Home => home::render(&self.config.title),
            DashboardCommand::Popular => terms::render_index(&self.glossary),
            DashboardCommand::Search(query) => self.show_term(query.as_deref()),
            DashboardCommand::Related(index) => {
                let current = self
                    .session
                    .last_term()
                    .ok_or_else(|| anyhow!("Search for a term first"))?;
                let record = self.glossary.lookup(current);
                let related = record
                    .related
                    .get(index.wrapping_sub(1))
                    .ok_or_else(|| {
                        anyhow!("{current} has {} related terms", record.related.len())
                    })?
                    .clone();
                self.show_term(Some(&related))
            }
            DashboardCommand::Profile => {
                self.session.request_edit();
                self.collect_profile(prompt)?;
                "Profile saved! Type `finances` for your personalized insights.\n".to_string()
            }
            DashboardCommand::Finances => {
                if self.session.needs_form() {
                    println!("{}", ui::style_text(FORM_INTRO, ui::StyleType::Info));
                    self.collect_profile(prompt)?;
                }
                match self.session.profile() {
                    Some(profile) => {
                        let score = profile.financial_score();
                        format!(
                            "{}{}",
                            finances::render_health(profile, score),
                            finances::render_recommendations(profile, score)
                        )
                    }
                    None => bail!("Profile is required for your recommendations"),
                }
            }
            DashboardCommand::Market => {
                let today = Local::now().date_naive();
                let series = generate_market_data(
                    &self.config.market.instruments,
                    today,
                    SERIES_DAYS,
                    &mut SeededNormal::new(self.config.market.seed),
                )?;
                market::render(today, &series, false)
            }
            DashboardCommand::Reset => {
                self.session.reset();
                "Profile and search history cleared.\n".to_string()
            }
        };
        Ok(Some(output))
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self, prompt: &mut dyn Prompt) -> Result<()> {
        println!("{}", ui::page_header(&self.config.title));
        println!("{}", render_help());

        loop {
            print!("{}", ui::style_text(&render_sidebar(&self.session), ui::StyleType::Subtle));
            let Some(line) = prompt.read_line("flex> ")? else {
                break;
            };
            let command = match line.parse::<DashboardCommand>() {
                Ok(command) => command,
                Err(e) => {
                    println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error));
                    continue;
                }
            };
            match self.execute(command, prompt) {
                Ok(Some(output)) => println!("{output}"),
                Ok(None) => break,
                Err(e) => println!("{}", ui::style_text(&e.to_string(), ui::StyleType::Error)),
            }
        }
        println!("{}", ui::footer());
        Ok(())
    }
}
