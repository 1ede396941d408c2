use super::ui;
use comfy_table::Cell;

const WHY_IT_MATTERS: [&str; 4] = [
    "76% of college students wish they had more help preparing for financial decisions",
    "Understanding basic financial concepts can lead to better debt management",
    "Early financial literacy leads to stronger long-term financial outcomes",
    "Many students graduate without understanding critical financial tools",
];

/// (page, description, command that opens it)
const FEATURES: [(&str, &str, &str); 3] = [
    (
        "Financial Information",
        "Learn financial terms and concepts in simple language with real-world examples relevant to students.",
        "flex terms",
    ),
    (
        "Know Your Finances",
        "Get personalized advice based on your financial situation, goals, and student status.",
        "flex finances",
    ),
    (
        "Current Market",
        "Get updates on interest rates and market performance focusing on what matters to students.",
        "flex market",
    ),
];

const HOW_IT_WORKS: [&str; 4] = [
    "Real-Time Data: We pull information from trusted financial sources",
    "Simplified Explanations: Complex terms translated into everyday language",
    "Personalized Insights: Advice tailored to your specific student financial situation",
    "Educational Focus: Everything is presented as a learning opportunity",
];

const TESTIMONIALS: [(&str, &str); 2] = [
    (
        "FLex helped me understand how student loans actually work in a way that finally made sense.",
        "Jamie, Undergraduate Student",
    ),
    (
        "I had no idea what to do with my first paycheck until FLex helped me create a simple budget.",
        "Taylor, Graduate Student",
    ),
];

pub fn render(title: &str) -> String {
    let mut output = ui::page_header(title);
    output.push_str(&ui::style_text("Welcome to FLex", ui::StyleType::Heading));
    output.push('\n');

    output.push_str(&ui::section("About FLex"));
    output.push_str(
        "FLex (Financial Literacy Expert) is an assistant designed specifically for students and beginners\n\
         in the world of finance. Our mission is to simplify financial concepts, help you understand your own\n\
         financial situation, and keep you informed about relevant market trends - all in language that's\n\
         easy to understand.\n",
    );

    output.push_str(&ui::section("Why Financial Literacy Matters"));
    output.push_str(&ui::bullet_list(&WHY_IT_MATTERS));

    output.push_str(&ui::section("How FLex Can Help You"));
    let mut table = ui::new_styled_table();
    table.set_header(
        FEATURES
            .iter()
            .map(|(name, _, _)| ui::header_cell(name))
            .collect::<Vec<_>>(),
    );
    table.add_row(
        FEATURES
            .iter()
            .map(|(_, description, _)| Cell::new(description))
            .collect::<Vec<_>>(),
    );
    table.add_row(
        FEATURES
            .iter()
            .map(|(_, _, command)| Cell::new(ui::style_text(command, ui::StyleType::Highlight)))
            .collect::<Vec<_>>(),
    );
    output.push_str(&table.to_string());
    output.push('\n');

    output.push_str(&ui::section("How It Works"));
    output.push_str(&ui::numbered_list(&HOW_IT_WORKS));

    output.push_str(&ui::section("What Students Say"));
    for (quote, author) in TESTIMONIALS {
        output.push_str(&format!(
            "  \"{quote}\"\n    {}\n",
            ui::style_text(&format!("- {author}"), ui::StyleType::Subtle)
        ));
    }

    output.push_str(&ui::footer());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_lists_every_page() {
        let page = render("FLex - Financial Literacy Assistant");
        assert!(page.contains("Welcome to FLex"));
        for (name, _, command) in FEATURES {
            assert!(page.contains(name), "missing {name}");
            assert!(page.contains(command), "missing {command}");
        }
        assert!(page.contains("Jamie, Undergraduate Student"));
        assert!(page.contains("Not financial advice."));
    }
}
