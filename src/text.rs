// src/text.rs
use log::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const DEFAULT_TEXT_WIDTH: usize = 80;

/// Plain text for a podcast description. Markup is converted with html2text,
/// anything else is passed through trimmed.
pub fn format_description(description: &str) -> String {
    if description.contains('<') && description.contains('>') && description.contains("</") {
        match html2text::from_read(description.as_bytes(), DEFAULT_TEXT_WIDTH) {
            Ok(text_content) => text_content
                .lines()
                .map(|line| line.trim_end())
                .filter(|line| !line.is_empty())
                .collect::<Vec<&str>>()
                .join(" "),
            Err(e) => {
                warn!("Failed to convert HTML description with html2text: {}", e);
                description.to_string()
            }
        }
    } else {
        description.to_string()
    }
    .trim()
    .to_string()
}

/// Cuts `text` to at most `max_width` terminal columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Number of rows `text` occupies when word-wrapped into `width` columns.
/// Breaks the same way a trimming `Paragraph` does: whole words move to the
/// next row, words wider than a row are split.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    text.lines()
        .map(|line| wrapped_line_height(line, width))
        .sum::<usize>()
        .min(u16::MAX as usize) as u16
}

fn wrapped_line_height(line: &str, width: usize) -> usize {
    let mut rows = 1;
    let mut used = 0;
    for word in line.split_whitespace() {
        let w = word.width();
        if used > 0 && used + 1 + w <= width {
            used += 1 + w;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        if w > width {
            let extra_rows = (w - 1) / width;
            rows += extra_rows;
            used = w - extra_rows * width;
        } else {
            used = w;
        }
    }
    rows
}
