//! Student profile and the fixed label sets of each profile field

use crate::core::error::{FlexError, ProfileField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 100;
pub const DEFAULT_AGE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Status {
    HighSchoolStudent,
    Undergraduate,
    Graduate,
    RecentGraduate,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::HighSchoolStudent,
        Status::Undergraduate,
        Status::Graduate,
        Status::RecentGraduate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Status::HighSchoolStudent => "High School Student",
            Status::Undergraduate => "Undergraduate",
            Status::Graduate => "Graduate",
            Status::RecentGraduate => "Recent Graduate",
        }
    }
}

/// Monthly income bracket, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum IncomeBracket {
    UpTo500,
    UpTo1000,
    UpTo2000,
    UpTo3000,
    Over3000,
}

impl IncomeBracket {
    pub const ALL: [IncomeBracket; 5] = [
        IncomeBracket::UpTo500,
        IncomeBracket::UpTo1000,
        IncomeBracket::UpTo2000,
        IncomeBracket::UpTo3000,
        IncomeBracket::Over3000,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IncomeBracket::UpTo500 => "$0-500",
            IncomeBracket::UpTo1000 => "$501-1000",
            IncomeBracket::UpTo2000 => "$1001-2000",
            IncomeBracket::UpTo3000 => "$2001-3000",
            IncomeBracket::Over3000 => "$3000+",
        }
    }

    pub fn is_low(&self) -> bool {
        matches!(self, IncomeBracket::UpTo500 | IncomeBracket::UpTo1000)
    }
}

/// Current savings bracket, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum SavingsBracket {
    UpTo100,
    UpTo500,
    UpTo1000,
    UpTo5000,
    Over5000,
}

impl SavingsBracket {
    pub const ALL: [SavingsBracket; 5] = [
        SavingsBracket::UpTo100,
        SavingsBracket::UpTo500,
        SavingsBracket::UpTo1000,
        SavingsBracket::UpTo5000,
        SavingsBracket::Over5000,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SavingsBracket::UpTo100 => "$0-100",
            SavingsBracket::UpTo500 => "$101-500",
            SavingsBracket::UpTo1000 => "$501-1000",
            SavingsBracket::UpTo5000 => "$1001-5000",
            SavingsBracket::Over5000 => "$5000+",
        }
    }

    pub fn is_low(&self) -> bool {
        matches!(self, SavingsBracket::UpTo100 | SavingsBracket::UpTo500)
    }
}

/// Current debt bracket, ordered from no debt to the largest balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum DebtBracket {
    NoDebt,
    Under1000,
    UpTo5000,
    UpTo25000,
    Over25000,
}

impl DebtBracket {
    pub const ALL: [DebtBracket; 5] = [
        DebtBracket::NoDebt,
        DebtBracket::Under1000,
        DebtBracket::UpTo5000,
        DebtBracket::UpTo25000,
        DebtBracket::Over25000,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DebtBracket::NoDebt => "None",
            DebtBracket::Under1000 => "Less than $1000",
            DebtBracket::UpTo5000 => "$1000-5000",
            DebtBracket::UpTo25000 => "$5001-25000",
            DebtBracket::Over25000 => "$25000+",
        }
    }

    /// Balances above $5000 call for a debt-first budget.
    pub fn is_high(&self) -> bool {
        matches!(self, DebtBracket::UpTo25000 | DebtBracket::Over25000)
    }

    pub fn is_manageable(&self) -> bool {
        matches!(self, DebtBracket::NoDebt | DebtBracket::Under1000)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Goal {
    EmergencyFund,
    PayOffDebt,
    SaveForEducation,
    StartInvesting,
    MajorPurchase,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::EmergencyFund,
        Goal::PayOffDebt,
        Goal::SaveForEducation,
        Goal::StartInvesting,
        Goal::MajorPurchase,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::EmergencyFund => "Emergency Fund",
            Goal::PayOffDebt => "Pay Off Debt",
            Goal::SaveForEducation => "Save for Education",
            Goal::StartInvesting => "Start Investing",
            Goal::MajorPurchase => "Major Purchase",
        }
    }
}

fn parse_label<T: Copy>(
    s: &str,
    all: &[T],
    label: impl Fn(&T) -> &'static str,
    field: ProfileField,
) -> Result<T, FlexError> {
    all.iter()
        .find(|v| label(*v) == s)
        .copied()
        .ok_or_else(|| FlexError::unknown_label(field, s))
}

impl FromStr for Status {
    type Err = FlexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Status::ALL, Status::label, ProfileField::Status)
    }
}

impl FromStr for IncomeBracket {
    type Err = FlexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(
            s,
            &IncomeBracket::ALL,
            IncomeBracket::label,
            ProfileField::Income,
        )
    }
}

impl FromStr for SavingsBracket {
    type Err = FlexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(
            s,
            &SavingsBracket::ALL,
            SavingsBracket::label,
            ProfileField::Savings,
        )
    }
}

impl FromStr for DebtBracket {
    type Err = FlexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &DebtBracket::ALL, DebtBracket::label, ProfileField::Debt)
    }
}

impl FromStr for Goal {
    type Err = FlexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Goal::ALL, Goal::label, ProfileField::Goal)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Display for IncomeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Display for SavingsBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Display for DebtBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated student profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub status: Status,
    pub income: IncomeBracket,
    pub savings: SavingsBracket,
    pub debt: DebtBracket,
    pub goals: BTreeSet<Goal>,
}

/// Unvalidated profile as it arrives from flags, config or the interactive form.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProfileInput {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_income")]
    pub income: String,
    #[serde(default = "default_savings")]
    pub savings: String,
    #[serde(default = "default_debt")]
    pub debt: String,
    #[serde(default = "default_goals")]
    pub goals: Vec<String>,
}

fn default_age() -> u32 {
    DEFAULT_AGE
}

fn default_status() -> String {
    Status::Undergraduate.label().to_string()
}

fn default_income() -> String {
    IncomeBracket::UpTo500.label().to_string()
}

fn default_savings() -> String {
    SavingsBracket::UpTo100.label().to_string()
}

fn default_debt() -> String {
    DebtBracket::NoDebt.label().to_string()
}

fn default_goals() -> Vec<String> {
    vec![Goal::EmergencyFund.label().to_string()]
}

impl Default for ProfileInput {
    fn default() -> Self {
        ProfileInput {
            name: String::new(),
            age: default_age(),
            status: default_status(),
            income: default_income(),
            savings: default_savings(),
            debt: default_debt(),
            goals: default_goals(),
        }
    }
}

impl ProfileInput {
    /// Checks every field against its allowed labels.
    pub fn validate(&self) -> Result<UserProfile, FlexError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(FlexError::AgeOutOfRange(self.age));
        }
        let goals = self
            .goals
            .iter()
            .map(|g| g.parse::<Goal>())
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(UserProfile {
            name: self.name.trim().to_string(),
            age: self.age,
            status: self.status.parse()?,
            income: self.income.parse()?,
            savings: self.savings.parse()?,
            debt: self.debt.parse()?,
            goals,
        })
    }
}

impl From<&UserProfile> for ProfileInput {
    fn from(profile: &UserProfile) -> Self {
        ProfileInput {
            name: profile.name.clone(),
            age: profile.age,
            status: profile.status.label().to_string(),
            income: profile.income.label().to_string(),
            savings: profile.savings.label().to_string(),
            debt: profile.debt.label().to_string(),
            goals: profile.goals.iter().map(|g| g.label().to_string()).collect(),
        }
    }
}

/// Field-by-field replacements for a [`ProfileInput`], as given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileOverrides {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub status: Option<String>,
    pub income: Option<String>,
    pub savings: Option<String>,
    pub debt: Option<String>,
    pub goals: Vec<String>,
}

impl ProfileOverrides {
    pub fn is_empty(&self) -> bool {
        *self == ProfileOverrides::default()
    }

    /// Replaces every field of `base` that has an override.
    pub fn apply(self, base: ProfileInput) -> ProfileInput {
        ProfileInput {
            name: self.name.unwrap_or(base.name),
            age: self.age.unwrap_or(base.age),
            status: self.status.unwrap_or(base.status),
            income: self.income.unwrap_or(base.income),
            savings: self.savings.unwrap_or(base.savings),
            debt: self.debt.unwrap_or(base.debt),
            goals: if self.goals.is_empty() {
                base.goals
            } else {
                self.goals
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for status in Status::ALL {
            assert_eq!(status.label().parse::<Status>().unwrap(), status);
        }
        for debt in DebtBracket::ALL {
            assert_eq!(debt.label().parse::<DebtBracket>().unwrap(), debt);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "$1M+".parse::<IncomeBracket>().unwrap_err();
        match err {
            FlexError::UnknownLabel { field, label } => {
                assert_eq!(field, ProfileField::Income);
                assert_eq!(label, "$1M+");
            }
            other => panic!("Expected UnknownLabel, got {other:?}"),
        }
        // Labels are matched exactly, not case-folded
        assert!("none".parse::<DebtBracket>().is_err());
    }

    #[test]
    fn test_default_input_validates() {
        let profile = ProfileInput::default().validate().unwrap();
        assert_eq!(profile.age, 20);
        assert_eq!(profile.status, Status::Undergraduate);
        assert_eq!(profile.income, IncomeBracket::UpTo500);
        assert_eq!(profile.savings, SavingsBracket::UpTo100);
        assert_eq!(profile.debt, DebtBracket::NoDebt);
        assert_eq!(
            profile.goals.into_iter().collect::<Vec<_>>(),
            vec![Goal::EmergencyFund]
        );
    }

    #[test]
    fn test_age_bounds() {
        let mut input = ProfileInput {
            age: 15,
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(FlexError::AgeOutOfRange(15))
        ));
        input.age = 100;
        assert!(input.validate().is_ok());
        input.age = 101;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_duplicate_goals_collapse() {
        let input = ProfileInput {
            goals: vec![
                "Start Investing".to_string(),
                "Emergency Fund".to_string(),
                "Start Investing".to_string(),
            ],
            ..Default::default()
        };
        let profile = input.validate().unwrap();
        assert_eq!(profile.goals.len(), 2);
        assert_eq!(profile.goals.first(), Some(&Goal::EmergencyFund));
    }

    #[test]
    fn test_bracket_predicates() {
        assert!(DebtBracket::UpTo25000.is_high());
        assert!(DebtBracket::Over25000.is_high());
        assert!(!DebtBracket::UpTo5000.is_high());
        assert!(IncomeBracket::UpTo1000.is_low());
        assert!(!IncomeBracket::UpTo2000.is_low());
        assert!(SavingsBracket::UpTo500.is_low());
        assert!(DebtBracket::Under1000.is_manageable());
    }

    #[test]
    fn test_profile_converts_back_to_input() {
        let input = ProfileInput {
            name: "Maria".to_string(),
            income: "$2001-3000".to_string(),
            ..Default::default()
        };
        let profile = input.validate().unwrap();
        assert_eq!(ProfileInput::from(&profile), input);
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let base = ProfileInput {
            name: "Sam".to_string(),
            debt: "$25000+".to_string(),
            ..Default::default()
        };
        let overrides = ProfileOverrides {
            income: Some("$3000+".to_string()),
            goals: vec!["Start Investing".to_string()],
            ..Default::default()
        };
        assert!(!overrides.is_empty());
        assert!(ProfileOverrides::default().is_empty());

        let merged = overrides.apply(base);
        assert_eq!(merged.name, "Sam");
        assert_eq!(merged.debt, "$25000+");
        assert_eq!(merged.income, "$3000+");
        assert_eq!(merged.goals, vec!["Start Investing".to_string()]);
    }
}
