//! Financial health score and the guidance derived from it.
//!
//! The score starts at 50 and moves by a fixed amount per bracket of
//! savings, debt and income. It is a teaching heuristic, not a credit model.
use crate::core::profile::{DebtBracket, IncomeBracket, SavingsBracket, UserProfile};
use tracing::debug;

pub const BASE_SCORE: i32 = 50;
pub const MAX_SCORE: u8 = 100;

fn savings_points(savings: SavingsBracket) -> i32 {
    match savings {
        SavingsBracket::UpTo100 => 0,
        SavingsBracket::UpTo500 => 5,
        SavingsBracket::UpTo1000 => 10,
        SavingsBracket::UpTo5000 => 15,
        SavingsBracket::Over5000 => 20,
    }
}

fn debt_points(debt: DebtBracket) -> i32 {
    match debt {
        DebtBracket::NoDebt => 0,
        DebtBracket::Under1000 => -5,
        DebtBracket::UpTo5000 => -10,
        DebtBracket::UpTo25000 => -15,
        DebtBracket::Over25000 => -20,
    }
}

fn income_points(income: IncomeBracket) -> i32 {
    match income {
        IncomeBracket::UpTo500 => 5,
        IncomeBracket::UpTo1000 => 10,
        IncomeBracket::UpTo2000 => 15,
        IncomeBracket::UpTo3000 => 20,
        IncomeBracket::Over3000 => 25,
    }
}

/// Computes the 0-100 health score for a bracket triple.
pub fn calculate_score(savings: SavingsBracket, debt: DebtBracket, income: IncomeBracket) -> u8 {
    let raw = BASE_SCORE + savings_points(savings) + debt_points(debt) + income_points(income);
    let score = raw.clamp(0, i32::from(MAX_SCORE)) as u8;
    debug!(raw, score, "Calculated financial score");
    score
}

impl UserProfile {
    pub fn financial_score(&self) -> u8 {
        calculate_score(self.savings, self.debt, self.income)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTier {
    Beginning,
    OnTrack,
    DoingWell,
}

impl HealthTier {
    pub fn from_score(score: u8) -> Self {
        if score < 40 {
            HealthTier::Beginning
        } else if score < 70 {
            HealthTier::OnTrack
        } else {
            HealthTier::DoingWell
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            HealthTier::Beginning => {
                "You're at the beginning of your financial journey. Focus on building stability."
            }
            HealthTier::OnTrack => {
                "You're on the right track. Continue building your financial foundation."
            }
            HealthTier::DoingWell => "You're doing well! Focus on growth and future planning.",
        }
    }
}

pub const DEFAULT_ACTION_ITEMS: [&str; 3] = [
    "Continue current financial habits",
    "Review your budget monthly",
    "Consider learning about investing",
];

/// Personalized to-do list for a profile with the given score.
pub fn action_items(profile: &UserProfile, score: u8) -> Vec<&'static str> {
    let mut items = Vec::new();

    if profile.savings.is_low() {
        items.push("Build emergency fund of at least $1,000");
    }
    if !profile.debt.is_manageable() {
        items.push("Focus on paying down high-interest debt");
    }
    if !profile.income.is_low() && profile.savings.is_low() {
        items.push("Increase savings rate to at least 15% of income");
    }
    if score > 60 {
        items.push("Consider starting with low-risk investments");
    }

    if items.is_empty() {
        items.extend(DEFAULT_ACTION_ITEMS);
    }
    items
}

/// Investment advice section, gated on the health score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentGuidance {
    pub headline: &'static str,
    pub suggestions: [&'static str; 3],
    pub show_options: bool,
}

pub fn investment_guidance(score: u8) -> InvestmentGuidance {
    if score < 50 {
        InvestmentGuidance {
            headline: "Before investing, focus on building a solid financial foundation:",
            suggestions: [
                "High-yield savings account for emergency fund",
                "Pay down high-interest debt first",
                "Learn about investment basics while saving",
            ],
            show_options: false,
        }
    } else {
        InvestmentGuidance {
            headline: "Based on your profile, consider these beginner-friendly investments:",
            suggestions: [
                "Low-cost index funds (S&P 500 index funds)",
                "Target-date retirement funds",
                "Education-focused accounts (529 plans)",
            ],
            show_options: true,
        }
    }
}
