//! Fixed reference data shown on the market and finances pages.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankRate {
    pub bank: &'static str,
    pub savings_rate: f64,
    pub cd_rate_1y: f64,
    pub student_perks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanRate {
    pub loan_type: &'static str,
    pub interest_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestmentOption {
    pub option: &'static str,
    pub risk_level: &'static str,
    pub potential_return: &'static str,
    pub minimum_investment: &'static str,
    pub best_for: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub title: &'static str,
    pub body: &'static str,
}

pub const BANK_RATES: [BankRate; 5] = [
    BankRate {
        bank: "Student Credit Union",
        savings_rate: 2.0,
        cd_rate_1y: 3.5,
        student_perks: true,
    },
    BankRate {
        bank: "Bank A",
        savings_rate: 1.5,
        cd_rate_1y: 3.0,
        student_perks: false,
    },
    BankRate {
        bank: "Bank B",
        savings_rate: 1.8,
        cd_rate_1y: 3.2,
        student_perks: true,
    },
    BankRate {
        bank: "Online Bank",
        savings_rate: 2.5,
        cd_rate_1y: 3.8,
        student_perks: false,
    },
    BankRate {
        bank: "Credit Union",
        savings_rate: 2.2,
        cd_rate_1y: 3.6,
        student_perks: true,
    },
];

pub const LOAN_RATES: [LoanRate; 4] = [
    LoanRate {
        loan_type: "Federal Undergraduate",
        interest_rate: 5.5,
    },
    LoanRate {
        loan_type: "Federal Graduate",
        interest_rate: 6.6,
    },
    LoanRate {
        loan_type: "Private (Good Credit)",
        interest_rate: 7.2,
    },
    LoanRate {
        loan_type: "Private (Average Credit)",
        interest_rate: 10.8,
    },
];

pub const INVESTMENT_OPTIONS: [InvestmentOption; 3] = [
    InvestmentOption {
        option: "High-Yield Savings",
        risk_level: "Very Low",
        potential_return: "1-2%",
        minimum_investment: "$0",
        best_for: "Emergency Fund",
    },
    InvestmentOption {
        option: "Index Funds",
        risk_level: "Moderate",
        potential_return: "7-10%",
        minimum_investment: "$0-100",
        best_for: "Long-term Growth",
    },
    InvestmentOption {
        option: "Target-Date Funds",
        risk_level: "Moderate",
        potential_return: "6-9%",
        minimum_investment: "$0-1000",
        best_for: "Retirement",
    },
];

pub const MARKET_NEWS: [NewsItem; 2] = [
    NewsItem {
        title: "What Rising Interest Rates Mean for Students",
        body: "Interest rates have increased over the past year. Here's what this means for students:

  * Student Loans: Variable rate private loans may see payment increases
  * Savings Accounts: Higher interest rates on savings (a good thing!)
  * Credit Cards: Higher interest on unpaid balances - try to pay in full each month
  * Job Market: Can impact hiring in some sectors as companies adjust spending

Action Item: Now is a good time to check if your savings account is offering a competitive interest rate.",
    },
    NewsItem {
        title: "Budget Apps Gaining Popularity Among Students",
        body: "Recent surveys show more students are using budgeting apps to track expenses.

Popular free options include:
  * Mint
  * EveryDollar
  * Personal Capital

These apps can connect to your accounts and help categorize spending automatically,
making it easier to see where your money goes each month.",
    },
];

/// Bank with the best savings rate, the one worth pointing students to.
pub fn best_savings_rate() -> &'static BankRate {
    BANK_RATES
        .iter()
        .max_by(|a, b| a.savings_rate.total_cmp(&b.savings_rate))
        .unwrap_or(&BANK_RATES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_savings_rate_is_online_bank() {
        let best = best_savings_rate();
        assert_eq!(best.bank, "Online Bank");
        assert_eq!(best.savings_rate, 2.5);
    }

    #[test]
    fn test_cd_rates_beat_savings_rates() {
        assert!(BANK_RATES.iter().all(|b| b.cd_rate_1y > b.savings_rate));
    }

    #[test]
    fn test_loan_rates_ordered_cheapest_first() {
        assert!(
            LOAN_RATES
                .windows(2)
                .all(|w| w[0].interest_rate < w[1].interest_rate)
        );
    }
}
