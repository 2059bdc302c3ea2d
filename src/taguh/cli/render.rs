//! # Rendering Module
//!
//! Turns `CmdResult` data into terminal text. Every function returns a
//! `String` so output can be tested without a terminal; the `print_*`
//! wrappers are the only writers. Colour comes from `colored`, which turns
//! itself off when stdout is not a terminal.

use chrono::Local;
use colored::Colorize;
use taguh::api::{CmdMessage, FileEntry, MessageLevel, TagEntry};
use taguh::model::parse_timestamp;
use unicode_width::UnicodeWidthStr;

/// One file as a labelled block, preceded by a blank line.
pub fn render_file_entry(entry: &FileEntry) -> String {
    let added = match relative_age(&entry.record.created_on) {
        Some(age) => format!("{} {}", entry.record.created_on, format!("({})", age).dimmed()),
        None => entry.record.created_on.clone(),
    };
    format!(
        "\n{} {}\n{} {}\n{} {}\n",
        "File path:".bold(),
        entry.path,
        "Tags:".bold(),
        entry.record.tags.to_csv().cyan(),
        "Added on:".bold(),
        added
    )
}

/// Search results: a lone match is printed as-is, several get a count header.
pub fn render_file_results(entries: &[FileEntry]) -> String {
    let mut output = String::new();
    if entries.len() > 1 {
        output.push_str(&format!("Found {} matching files\n", entries.len()));
    }
    for entry in entries {
        output.push_str(&render_file_entry(entry));
    }
    output
}

pub fn render_file_list(entries: &[FileEntry]) -> String {
    let mut output = String::from("The list of files added to taguh :\n\n");
    for entry in entries {
        output.push_str(&entry.path);
        output.push('\n');
    }
    output.push('\n');
    output
}

/// `name: description` lines with the descriptions aligned.
pub fn render_tag_list(tags: &[TagEntry]) -> String {
    let name_width = tags.iter().map(|t| t.name.width()).max().unwrap_or(0);

    let mut output = String::from("The list of tags added to taguh :\n\n");
    for tag in tags {
        let padding = " ".repeat(name_width - tag.name.width());
        output.push_str(&format!(
            "{}:{} {}\n",
            tag.name.bold(),
            padding,
            tag.record.description
        ));
    }
    output.push('\n');
    output
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn relative_age(created_on: &str) -> Option<String> {
    let created = parse_timestamp(created_on)?;
    let elapsed = Local::now()
        .naive_local()
        .signed_duration_since(created)
        .to_std()
        .ok()?;
    Some(timeago::Formatter::new().convert(elapsed))
}
