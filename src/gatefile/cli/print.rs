use colored::Colorize;
use gatefile::api::{CmdMessage, FileSummary, MessageLevel};
use gatefile::config::GatefileConfig;
use gatefile::model::GateFile;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SECTION_WIDTH: usize = 24;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_config(config: &GatefileConfig) {
    println!("file-ext = {}", config.file_exts.join(","));
    println!("format = {}", config.format);
}

/// Prints every gate with its sections, then the file totals.
pub(super) fn print_summary(file: &GateFile, summary: &FileSummary) {
    println!("{}", summary.path.bold());

    if file.gates.is_empty() {
        println!("{}", "No gates found.".dimmed());
    }

    for (gate, stats) in file.gates.iter().zip(&summary.gates) {
        println!();
        println!(
            "{} {} {}",
            format!("gate {}", gate.id).yellow(),
            format!("tag {}", gate.tag).dimmed(),
            format!(
                "({} sections, {} items, qty {})",
                stats.sections, stats.items, stats.quantity
            )
            .dimmed()
        );
        for section in &gate.sections {
            let name = truncate_to_width(&section.id, SECTION_WIDTH);
            let padding = SECTION_WIDTH.saturating_sub(name.width());
            let items: Vec<String> = section
                .items
                .iter()
                .map(|i| format!("{}×{}", i.id, i.quantity))
                .collect();
            println!("    {}{}  {}", name, " ".repeat(padding), items.join(" "));
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "{} gates, {} sections, {} items, total quantity {}",
            summary.gates.len(),
            summary.total_sections,
            summary.total_items,
            summary.total_quantity
        )
        .green()
    );
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
