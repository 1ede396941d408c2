use super::ui;
use crate::core::market::MarketSeries;
use crate::core::reference::{BANK_RATES, LOAN_RATES, MARKET_NEWS, best_savings_rate};
use chrono::NaiveDate;
use comfy_table::Cell;

const DISCLAIMER: &str = "Disclaimer: This information is for educational purposes only and not financial advice. Market data simulated for demonstration purposes.";

fn render_bank_rates() -> String {
    let mut output = ui::section("Bank Interest Rates");
    output.push_str("  Compare current interest rates for accounts popular with students:\n");

    let max_rate = BANK_RATES
        .iter()
        .map(|b| b.cd_rate_1y)
        .fold(0.0, f64::max);
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Bank"),
        ui::header_cell("Savings Rate"),
        ui::header_cell("CD Rate (1-year)"),
        ui::header_cell("Student Account Perks"),
        ui::header_cell("Savings vs. CD"),
    ]);
    for bank in &BANK_RATES {
        table.add_row(vec![
            Cell::new(bank.bank),
            ui::number_cell(format!("{:.1}%", bank.savings_rate)),
            ui::number_cell(format!("{:.1}%", bank.cd_rate_1y)),
            Cell::new(if bank.student_perks { "Yes" } else { "No" }),
            Cell::new(format!(
                "{}\n{}",
                ui::bar(bank.savings_rate, max_rate, 20),
                ui::bar(bank.cd_rate_1y, max_rate, 20)
            )),
        ]);
    }
    output.push_str(&table.to_string());

    let best = best_savings_rate();
    output.push_str(&format!(
        "\n  Tip: Online banks often offer higher interest rates because they have lower overhead costs than\n  traditional banks with physical branches. Top savings rate here: {} ({:.1}%).\n",
        best.bank, best.savings_rate
    ));
    output
}

fn render_performance(series: &[MarketSeries]) -> String {
    let mut output = ui::section("Market Indices Performance");
    let days = series.first().map_or(0, |s| s.points.len());
    output.push_str(&format!("  {days}-Day Market Performance\n"));

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Index"),
        ui::header_cell("Price"),
        ui::header_cell("Day Change"),
        ui::header_cell("Period Change"),
        ui::header_cell("Trend"),
    ]);
    for s in series {
        let prices: Vec<f64> = s.points.iter().map(|p| p.price).collect();
        let period_change = match (prices.first(), prices.last()) {
            (Some(first), Some(last)) if *first != 0.0 => Some((last - first) / first * 100.0),
            _ => None,
        };
        table.add_row(vec![
            Cell::new(&s.name),
            ui::number_cell(
                s.latest()
                    .map_or("N/A".to_string(), |p| format!("${:.2}", p.price)),
            ),
            ui::change_cell(s.daily_change()),
            ui::change_cell(period_change),
            Cell::new(ui::sparkline(&prices)),
        ]);
    }
    output.push_str(&table.to_string());
    output.push_str(
        "\n  What this means: These indices track the performance of large groups of stocks. They're often\n  used as benchmarks to measure how well investments are performing.\n",
    );
    output
}

/// Every simulated point, one row per day.
pub fn render_history(series: &[MarketSeries]) -> String {
    let mut table = ui::new_styled_table();
    let mut header = vec![ui::header_cell("Date")];
    header.extend(series.iter().map(|s| ui::header_cell(&s.name)));
    table.set_header(header);

    let days = series.first().map_or(0, |s| s.points.len());
    for day in 0..days {
        let mut row = Vec::with_capacity(series.len() + 1);
        let date = series[0].points[day].date;
        row.push(Cell::new(date.format("%Y-%m-%d")));
        for s in series {
            row.push(ui::number_cell(
                s.points
                    .get(day)
                    .map_or("N/A".to_string(), |p| format!("{:.2}", p.price)),
            ));
        }
        table.add_row(row);
    }
    format!("{}\n{}\n", ui::section("Daily Prices"), table)
}

fn render_student_insights() -> String {
    let mut output = ui::section("Student Financial Insights");
    output.push_str(&ui::section("Current Student Loan Interest Rates"));

    let max_rate = LOAN_RATES
        .iter()
        .map(|l| l.interest_rate)
        .fold(0.0, f64::max);
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Loan Type"),
        ui::header_cell("Interest Rate"),
        ui::header_cell(""),
    ]);
    for loan in &LOAN_RATES {
        table.add_row(vec![
            Cell::new(loan.loan_type),
            ui::number_cell(format!("{:.1}%", loan.interest_rate)),
            Cell::new(ui::bar(loan.interest_rate, max_rate, 30)),
        ]);
    }
    output.push_str(&table.to_string());
    output.push('\n');

    output.push_str(&ui::section("Beginner-Friendly Market News"));
    for item in &MARKET_NEWS {
        output.push_str(&format!(
            "\n  {}\n",
            ui::style_text(item.title, ui::StyleType::Highlight)
        ));
        output.push_str(&ui::indent(item.body));
    }
    output
}

pub fn render(today: NaiveDate, series: &[MarketSeries], history: bool) -> String {
    let mut output = ui::page_header("Current Market");
    output.push_str(
        "Stay informed about financial markets with information curated for students.\n\
         We focus on what's most relevant for beginners and young investors.\n",
    );
    output.push_str(&ui::section(&format!(
        "Market Data as of {}",
        today.format("%B %d, %Y")
    )));

    output.push_str(&render_bank_rates());
    output.push_str(&render_performance(series));
    if history && !series.is_empty() {
        output.push_str(&render_history(series));
    }
    output.push_str(&render_student_insights());

    output.push_str(&ui::separator());
    output.push_str(&format!(
        "\n{}\n",
        ui::style_text(DISCLAIMER, ui::StyleType::Subtle)
    ));
    output
}
