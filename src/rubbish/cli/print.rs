use colored::Colorize;
use crate::commands::{CmdMessage, MessageLevel};
use crate::model::Item;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;
const HEADERS: [&str; 5] = ["ID", "NAME", "CONTAINERID", "DESCRIPTION", "TAGS"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_table(items: &[Item]) {
    if items.is_empty() {
        return;
    }
    print!("{}", format_table(items));
}

pub(super) fn print_lines(items: &[Item]) {
    for line in format_lines(items) {
        println!("{}", line);
    }
}

fn row(item: &Item) -> [String; 5] {
    [
        item.id.clone(),
        item.name.clone(),
        item.container_id.clone(),
        item.description.replace('\n', " "),
        item.tags.join(","),
    ]
}

/// Left-aligned columns padded to the widest cell.
pub fn format_table(items: &[Item]) -> String {
    let rows: Vec<[String; 5]> = items.iter().map(row).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header, &widths);
    for r in &rows {
        push_row(&mut out, r, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        out.push_str(cell);
        if i < last {
            out.push_str(&" ".repeat(width - cell.width() + COLUMN_GAP));
        }
    }
    out.push('\n');
}

pub fn format_lines(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("matched item: {:?}", item))
        .collect()
}
