use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use webnote::model::{Page, PageSummary};
use webnote::session::{MessageLevel, Notice};

const NAME_WIDTH: usize = 40;
const PLACEHOLDER: &str = "Start writing...";

pub(super) fn print_messages(messages: &[Notice]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_pages(pages: &[PageSummary]) {
    for summary in pages {
        let marker = if summary.is_active { "*" } else { " " };
        let number = format!("{}.", summary.index + 1);
        let name = truncate_to_width(&summary.name, NAME_WIDTH);

        if summary.is_empty {
            println!(
                "{} {:>4} {} {}",
                marker,
                number.yellow(),
                name,
                "(empty)".dimmed()
            );
        } else {
            println!("{} {:>4} {}", marker, number.yellow(), name);
        }
    }
}

pub(super) fn print_page(index: usize, page: &Page) {
    println!(
        "{} {}",
        format!("{}.", index + 1).yellow(),
        page.display_name(index).bold()
    );
    println!("--------------------------------");
    if page.text.is_empty() {
        println!("{}", PLACEHOLDER.dimmed());
    } else {
        println!("{}", page.text);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
