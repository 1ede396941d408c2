use crate::core::profile::{DebtBracket, IncomeBracket};

/// The three budget templates a student can be steered towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanKind {
    DebtFocused,
    LowIncome,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationSlice {
    pub category: &'static str,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    pub kind: PlanKind,
    pub slices: Vec<AllocationSlice>,
}

const fn slice(category: &'static str, percentage: u8) -> AllocationSlice {
    AllocationSlice {
        category,
        percentage,
    }
}

impl PlanKind {
    /// Picks a plan: high debt first, then low income, otherwise balanced.
    pub fn select(debt: DebtBracket, income: IncomeBracket) -> Self {
        if debt.is_high() {
            PlanKind::DebtFocused
        } else if income.is_low() {
            PlanKind::LowIncome
        } else {
            PlanKind::Balanced
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            PlanKind::DebtFocused => {
                "Based on your current debt level, we recommend a debt-focused savings strategy:"
            }
            PlanKind::LowIncome => {
                "With your current income level, focus on a simplified savings approach:"
            }
            PlanKind::Balanced => {
                "Based on your profile, we recommend a balanced savings strategy:"
            }
        }
    }

    pub fn slices(&self) -> Vec<AllocationSlice> {
        match self {
            PlanKind::DebtFocused => vec![
                slice("Essentials", 50),
                slice("Debt Repayment", 20),
                slice("Emergency Fund", 20),
                slice("Flexible", 10),
            ],
            PlanKind::LowIncome => vec![
                slice("Essentials", 60),
                slice("Emergency Fund", 20),
                slice("Education & Flexible", 20),
            ],
            PlanKind::Balanced => vec![
                slice("Essentials", 50),
                slice("Financial Goals", 30),
                slice("Flexible", 20),
            ],
        }
    }
}

impl AllocationPlan {
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|s| u32::from(s.percentage)).sum()
    }
}

/// Recommended savings allocation for a debt/income pair.
pub fn savings_allocation(debt: DebtBracket, income: IncomeBracket) -> AllocationPlan {
    let kind = PlanKind::select(debt, income);
    AllocationPlan {
        kind,
        slices: kind.slices(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_plan_sums_to_100() {
        for debt in DebtBracket::ALL {
            for income in IncomeBracket::ALL {
                assert_eq!(savings_allocation(debt, income).total(), 100);
            }
        }
    }

    #[test]
    fn test_high_debt_wins_regardless_of_income() {
        for debt in [DebtBracket::UpTo25000, DebtBracket::Over25000] {
            for income in IncomeBracket::ALL {
                assert_eq!(
                    savings_allocation(debt, income).kind,
                    PlanKind::DebtFocused
                );
            }
        }
    }

    #[test]
    fn test_debt_focused_plan_contents() {
        let plan = savings_allocation(DebtBracket::Over25000, IncomeBracket::Over3000);
        let pairs: Vec<_> = plan
            .slices
            .iter()
            .map(|s| (s.category, s.percentage))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Essentials", 50),
                ("Debt Repayment", 20),
                ("Emergency Fund", 20),
                ("Flexible", 10),
            ]
        );
    }

    #[test]
    fn test_low_income_and_balanced_plans() {
        assert_eq!(
            savings_allocation(DebtBracket::UpTo5000, IncomeBracket::UpTo1000).kind,
            PlanKind::LowIncome
        );
        assert_eq!(
            savings_allocation(DebtBracket::NoDebt, IncomeBracket::UpTo2000).kind,
            PlanKind::Balanced
        );
    }
}
