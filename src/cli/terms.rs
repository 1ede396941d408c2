use super::ui;
use crate::core::glossary::{Glossary, TermRecord};
use comfy_table::Cell;

const POPULAR_COLUMNS: usize = 4;

/// Capitalizes the first letter of every word, lowercasing the rest.
pub fn title_case(term: &str) -> String {
    term.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Intro text and the popular-topics grid.
pub fn render_index(glossary: &Glossary) -> String {
    let mut output = ui::page_header("Financial Information");
    output.push_str(
        "Financial terms can be confusing when you're just starting out. FLex makes them easy to understand,\n\
         with explanations specifically designed for students and beginners.\n",
    );
    output.push_str(&format!(
        "\nSearch with {} (e.g. compound interest, ETF, 401k)\n",
        ui::style_text("flex terms \"<term>\"", ui::StyleType::Highlight)
    ));

    if !glossary.popular.is_empty() {
        output.push_str(&ui::section("Popular Topics:"));
        let mut table = ui::new_styled_table();
        for row in glossary.popular.chunks(POPULAR_COLUMNS) {
            table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
        }
        output.push_str(&table.to_string());
        output.push('\n');
    }
    output
}

/// Explanation, examples and related terms for one search.
pub fn render_term(term: &str, record: &TermRecord) -> String {
    let mut output = ui::section(&title_case(term));

    output.push_str(&ui::section("Simple Explanation"));
    output.push_str(&ui::style_text(
        &ui::indent(&record.content),
        ui::StyleType::Highlight,
    ));

    output.push_str(&ui::section("Real-world Examples"));
    output.push_str(&ui::indent(&record.examples));

    output.push_str(&ui::section("Learn More"));
    output.push_str("  Additional resources and links would appear here.\n");

    if !record.related.is_empty() {
        output.push_str(&ui::section("Related Terms"));
        output.push_str(&ui::numbered_list(&record.related));
    }
    output
}

pub fn run(glossary: &Glossary, query: Option<&str>) -> String {
    let mut output = render_index(glossary);
    if let Some(term) = query.map(str::trim).filter(|q| !q.is_empty()) {
        let record = glossary.lookup(term);
        output.push_str(&render_term(term, &record));
    }
    output.push_str(&ui::footer());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("student loans"), "Student Loans");
        assert_eq!(title_case("CREDIT scores"), "Credit Scores");
        assert_eq!(title_case("checking vs. savings"), "Checking Vs. Savings");
    }

    #[test]
    fn test_index_shows_popular_topics() {
        let glossary = Glossary::builtin().unwrap();
        let page = run(&glossary, None);
        assert!(page.contains("Popular Topics:"));
        assert!(page.contains("Taxes for Students"));
        assert!(!page.contains("Simple Explanation"));
    }

    #[test]
    fn test_known_term_page() {
        let glossary = Glossary::builtin().unwrap();
        let page = run(&glossary, Some("credit SCORES"));
        assert!(page.contains("Credit Scores"));
        assert!(page.contains("financial report card"));
        assert!(page.contains("Jordan"));
        assert!(page.contains("1. Credit Reports"));
        assert!(page.contains("3. Payment History"));
    }

    #[test]
    fn test_unknown_term_page() {
        let glossary = Glossary::builtin().unwrap();
        let page = run(&glossary, Some("ETF"));
        assert!(page.contains("explanation of etf."));
        assert!(page.contains("1. Term 1"));
    }
}
