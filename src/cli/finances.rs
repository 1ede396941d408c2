use super::ui;
use crate::core::allocation::savings_allocation;
use crate::core::profile::{DebtBracket, Goal, IncomeBracket, SavingsBracket, Status, UserProfile};
use crate::core::reference::INVESTMENT_OPTIONS;
use crate::core::score::{HealthTier, MAX_SCORE, action_items, investment_guidance};
use comfy_table::Cell;

/// Shown before a profile exists: what the form asks for.
pub fn render_no_profile() -> String {
    let mut output = ui::page_header("Know Your Finances");
    output.push_str(&ui::style_text(
        "Let's get to know your financial situation to provide personalized guidance.",
        ui::StyleType::Info,
    ));
    output.push('\n');

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Field"),
        ui::header_cell("Flag"),
        ui::header_cell("Options"),
    ]);
    let rows: [(&str, &str, Vec<&str>); 5] = [
        ("Status", "--status", Status::ALL.iter().map(Status::label).collect()),
        (
            "Monthly Income",
            "--income",
            IncomeBracket::ALL.iter().map(IncomeBracket::label).collect(),
        ),
        (
            "Current Savings",
            "--savings",
            SavingsBracket::ALL.iter().map(SavingsBracket::label).collect(),
        ),
        (
            "Current Debt",
            "--debt",
            DebtBracket::ALL.iter().map(DebtBracket::label).collect(),
        ),
        (
            "Financial Goals",
            "--goal",
            Goal::ALL.iter().map(Goal::label).collect(),
        ),
    ];
    for (field, flag, options) in rows {
        table.add_row(vec![
            Cell::new(field),
            Cell::new(flag),
            Cell::new(options.join("\n")),
        ]);
    }
    output.push('\n');
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\nCreate a profile with flags (plus --name and --age), a `profile` section in the config file,\nor interactively with {}.\n",
        ui::style_text("flex dashboard", ui::StyleType::Highlight)
    ));
    output
}

/// Greeting, score line and health tier. The gauge is drawn after this.
pub fn render_health(profile: &UserProfile, score: u8) -> String {
    let mut output = ui::page_header("Know Your Finances");
    let greeting = if profile.name.is_empty() {
        "Hello!".to_string()
    } else {
        format!("Hello, {}!", profile.name)
    };
    output.push_str(&ui::style_text(&greeting, ui::StyleType::Heading));
    output.push('\n');
    output.push_str(&ui::style_text(
        "Based on your profile, here are your personalized recommendations:",
        ui::StyleType::Highlight,
    ));
    output.push('\n');

    output.push_str(&ui::section("Your Financial Health"));
    output.push_str(&format!("  Financial Health Score: {score}/{MAX_SCORE}\n"));
    output
}

/// Tier message, action items, savings plan and investment guidance.
pub fn render_recommendations(profile: &UserProfile, score: u8) -> String {
    let tier = HealthTier::from_score(score);
    let tier_style = match tier {
        HealthTier::Beginning => ui::StyleType::Warning,
        HealthTier::OnTrack => ui::StyleType::Info,
        HealthTier::DoingWell => ui::StyleType::Success,
    };
    let mut output = format!("  {}\n", ui::style_text(tier.message(), tier_style));

    output.push_str(&ui::section("Action Items:"));
    output.push_str(&ui::bullet_list(&action_items(profile, score)));

    output.push_str(&ui::section("Personalized Recommendations"));
    output.push_str(&ui::section("Savings Strategy"));
    let plan = savings_allocation(profile.debt, profile.income);
    output.push_str(&format!("  {}\n", plan.kind.headline()));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Category"),
        ui::header_cell("Percentage"),
        ui::header_cell(""),
    ]);
    for slice in &plan.slices {
        table.add_row(vec![
            Cell::new(slice.category),
            ui::format_percentage_cell(f64::from(slice.percentage)),
            Cell::new(ui::bar(f64::from(slice.percentage), 100.0, 30)),
        ]);
    }
    output.push_str("\n  Recommended Budget Allocation\n");
    output.push_str(&table.to_string());
    output.push('\n');

    output.push_str(&ui::section("Investment Options"));
    output.push_str("  When you're ready to invest, consider these options based on your profile:\n");
    let guidance = investment_guidance(score);
    output.push_str(&format!("  {}\n", guidance.headline));
    output.push_str(&ui::bullet_list(&guidance.suggestions));
    if guidance.show_options {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Option"),
            ui::header_cell("Risk Level"),
            ui::header_cell("Potential Return"),
            ui::header_cell("Minimum Investment"),
            ui::header_cell("Best For"),
        ]);
        for option in &INVESTMENT_OPTIONS {
            table.add_row(vec![
                Cell::new(option.option),
                Cell::new(option.risk_level),
                ui::number_cell(option.potential_return.to_string()),
                ui::number_cell(option.minimum_investment.to_string()),
                Cell::new(option.best_for),
            ]);
        }
        output.push_str(&table.to_string());
        output.push('\n');
    }

    if !profile.goals.is_empty() {
        output.push_str(&ui::section("Your Goals"));
        let goals: Vec<&str> = profile.goals.iter().map(Goal::label).collect();
        output.push_str(&ui::bullet_list(&goals));
    }
    output
}

/// Prints the full report for a profile.
pub fn show_report(profile: &UserProfile) {
    let score = profile.financial_score();
    print!("{}", render_health(profile, score));
    ui::show_score_gauge(score);
    print!("{}", render_recommendations(profile, score));
}

pub fn run(profile: Option<&UserProfile>) {
    match profile {
        Some(profile) => show_report(profile),
        None => print!("{}", render_no_profile()),
    }
    print!("{}", ui::footer());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::ProfileInput;

    fn profile(savings: &str, debt: &str, income: &str) -> UserProfile {
        ProfileInput {
            name: "Alex".to_string(),
            savings: savings.to_string(),
            debt: debt.to_string(),
            income: income.to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_no_profile_lists_options() {
        let page = render_no_profile();
        assert!(page.contains("Let's get to know your financial situation"));
        assert!(page.contains("Recent Graduate"));
        assert!(page.contains("$5001-25000"));
        assert!(page.contains("Major Purchase"));
    }

    #[test]
    fn test_health_section_shows_score() {
        let p = profile("$5000+", "None", "$3000+");
        let page = render_health(&p, p.financial_score());
        assert!(page.contains("Hello, Alex!"));
        assert!(page.contains("Financial Health Score: 95/100"));
    }

    #[test]
    fn test_debt_focused_recommendations() {
        let p = profile("$0-100", "$25000+", "$3000+");
        let score = p.financial_score();
        let page = render_recommendations(&p, score);
        assert!(page.contains("debt-focused savings strategy"));
        assert!(page.contains("Debt Repayment"));
        assert!(page.contains("Focus on paying down high-interest debt"));
        // 50 + 0 - 20 + 25 = 55, enough for the options table
        assert!(page.contains("Target-Date Funds"));
    }

    #[test]
    fn test_low_score_hides_investment_table() {
        let p = profile("$0-100", "$25000+", "$0-500");
        let page = render_recommendations(&p, p.financial_score());
        assert!(page.contains("You're at the beginning of your financial journey"));
        assert!(page.contains("Before investing, focus on building a solid financial foundation:"));
        assert!(!page.contains("Target-Date Funds"));
    }
}
