use crate::conversation::{DisplayMessage, Widget};
use crate::course::Course;
use console::{measure_text_width, style};

fn box_width() -> usize {
    let term = console::Term::stdout();
    let terminal_width = term.size().1 as usize;
    std::cmp::min(terminal_width.saturating_sub(4), 100).max(40)
}

/// Wraps a line at spaces so that no piece is wider than `max`.
pub fn wrap_line(line: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if measure_text_width(&candidate) <= max || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    lines.push(current);
    lines
}

/// Prints one bot message, followed by the hint for its widget if any.
pub fn display_message(message: &DisplayMessage) {
    let width = box_width();
    let inner = width.saturating_sub(4);

    let top_border = "┌".to_string() + &"─".repeat(width - 2) + "┐";
    let bottom_border = "└".to_string() + &"─".repeat(width - 2) + "┘";

    println!("\n{}", style("📚 PROFESSOR").bold().blue());
    println!("{}", style(&top_border).dim().blue());
    for line in message.text().lines().flat_map(|l| wrap_line(l, inner)) {
        let padding = width.saturating_sub(measure_text_width(&line) + 3);
        println!("│ {}{}│", style(&line).white(), " ".repeat(padding));
    }
    println!("{}", style(&bottom_border).dim().blue());

    match message.widget() {
        Widget::None => {}
        Widget::CourseOptions => display_course_options(),
        Widget::Recommendation => println!(
            "  {} {}",
            style("💡").yellow(),
            style("Type /recommend for a recommendation").cyan()
        ),
    }
}

pub fn display_messages(messages: &[DisplayMessage]) {
    for message in messages {
        display_message(message);
    }
}

pub fn display_course_options() {
    for (i, course) in Course::SELECTABLE.iter().enumerate() {
        println!(
            "  {} {}",
            style(format!("[{}]", i + 1)).bold().cyan(),
            course
        );
    }
    println!(
        "  {}",
        style("Type /course <number|name> to pick a course").dim()
    );
}

/// Prints the plain text of messages, for piped output.
pub fn print_plain(messages: &[DisplayMessage]) {
    for message in messages {
        println!("{}", message.text());
    }
}
