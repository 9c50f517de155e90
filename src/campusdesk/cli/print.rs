use campusdesk::api::{CmdMessage, Listing, MessageLevel};
use campusdesk::config::DeskConfig;
use campusdesk::screen::{ScreenOutcome, ViewStatus};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_listing(listing: &Listing) {
    for line in render_listing(listing) {
        println!("{}", line);
    }
}

/// Table lines for a listing, without colors.
pub(super) fn render_listing(listing: &Listing) -> Vec<String> {
    let mut header = vec!["#".to_string()];
    header.extend(listing.headers.iter().cloned());

    let body: Vec<Vec<String>> = listing
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![format!("{}.", row.ordinal)];
            cells.extend(row.cells.iter().map(|c| truncate_to_width(c, MAX_CELL_WIDTH)));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for cells in &body {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut lines = vec![join_padded(&header, &widths)];
    lines.extend(body.iter().map(|cells| join_padded(cells, &widths)));

    if listing.status == ViewStatus::NoMatches {
        lines.push(listing.empty_message.clone());
    }
    if listing.page.show_controls {
        lines.push(format!(
            "Page {} of {} ({} items){}{}",
            listing.page.current_page,
            listing.page.total_pages,
            listing.page.total_items,
            if listing.page.has_previous { "  < prev" } else { "" },
            if listing.page.has_next { "  next >" } else { "" },
        ));
    }
    lines
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{}{}", cell, " ".repeat(w.saturating_sub(cell.width()))))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

pub(super) fn print_options(options: &[String]) {
    for option in options {
        println!("{}", option);
    }
}

pub(super) fn print_outcomes(outcomes: &[ScreenOutcome]) {
    for outcome in outcomes {
        let line = serde_json::to_string(outcome).unwrap_or_default();
        println!("{}", line.dimmed());
    }
}

pub(super) fn print_config(config: &DeskConfig) {
    for key in DeskConfig::KEYS {
        println!("{} = {}", key, config.get(key).unwrap_or_default());
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
