use colored::*;
use leash_common::log::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;
use crate::terminal::format::Detail;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Emits `msg` verbatim through the formatter.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

fn ruled(title: ColoredString, title_width: usize, rule: &str) -> String {
    let room: usize = TOTAL_WIDTH.saturating_sub(title_width);
    let left: String = rule.repeat(room / 2);
    let right: String = rule.repeat(room - room / 2);
    format!("{}{}{}", left.bright_black(), title, right.bright_black())
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ LEASH v{} ⟧", env!("CARGO_PKG_VERSION"));
    let width: usize = title.width();
    print(&ruled(title.bright_green().bold(), width, "═"));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let width: usize = title.width();
    print(&ruled(title.bright_green(), width, "─"));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// One `> label....: status` line per row, labels padded to the longest.
pub fn result_table(rows: &[Detail]) {
    let label_width: usize = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);

    for (label, status) in rows {
        print(&result_row(label, status, label_width));
    }
}

fn result_row(label: &str, status: &ColoredString, label_width: usize) -> String {
    let dots: String = ".".repeat(label_width + 1 - label.width());
    format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        label.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        status
    )
}

/// `[idx] name` followed by one branch per detail row.
pub fn device_tree(idx: usize, name: &str, details: &[Detail]) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));

    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width + 1 - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let pad: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{pad}{msg}{pad}"));
}

const NO_DEVICES: &str = r#"
         _   _  ___    ____  _______     _____ ____ _____ ____
        | \ | |/ _ \  |  _ \| ____\ \   / /_ _/ ___| ____/ ___|
        |  \| | | | | | | | |  _|  \ \ / / | | |   |  _| \___ \
        | |\  | |_| | | |_| | |___  \ V /  | | |___| |___ ___) |
        |_| \_|\___/  |____/|_____|  \_/  |___\____|_____|____/
"#;

pub fn no_results(q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&NO_DEVICES.red().bold().to_string());
}
