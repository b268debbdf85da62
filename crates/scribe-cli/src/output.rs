//! Terminal output formatting.

use colored::Colorize;

use scribe_core::model::display_value;
use scribe_core::NormalizedBrief;

/// Print a normalized brief.
pub fn print_brief(normalized: &NormalizedBrief) {
    let brief = normalized.brief();

    println!(
        "{} {}",
        "Research brief".cyan().bold(),
        format!("(from {:?})", normalized.source).dimmed()
    );
    println!();

    print_field("Blog", &display_value(&brief.blog_number));
    print_field("Angle", &display_value(&brief.blog_angle));
    if let Some(keyword) = &brief.primary_keyword {
        print_field("Primary keyword", keyword);
        print_field("Search", &brief.primary_keyword_link().unwrap_or_default());
    }
    print_field("Secondary keywords", &brief.secondary_keywords.join(", "));
    print_field("Question keywords", &brief.question_keywords.join(", "));
    print_field("Content angle", brief.content_angle.as_deref().unwrap_or_default());
    print_field("Structure", &display_value(&brief.recommended_structure));
    print_field("Word count", &display_value(&brief.recommended_word_count));
    print_field(
        "Feasibility",
        brief.ranking_feasibility.as_deref().unwrap_or_default(),
    );
    print_field(
        "Instructions",
        brief.writing_instructions.as_deref().unwrap_or_default(),
    );

    if !brief.extra.is_empty() {
        let keys: Vec<_> = brief.extra.keys().map(String::as_str).collect();
        println!();
        println!("{} {}", "Other fields:".dimmed(), keys.join(", ").dimmed());
    }
}

fn print_field(label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    println!("{}: {}", label.bold(), value);
}
