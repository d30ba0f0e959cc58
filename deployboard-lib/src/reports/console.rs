use crate::Result;
use crate::dashboard::{Card, Dashboard, NO_METRICS_NOTE, Notice, NoticeLevel, Section};
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

const INDENT: &str = "  ";
const MIN_CELL_WIDTH: usize = 12;

pub fn generate<W: Write>(dashboard: &Dashboard, use_colors: bool, writer: &mut W) -> Result<()> {
    write_report(dashboard, use_colors, get_terminal_width(), writer)
}

fn write_report<W: Write>(dashboard: &Dashboard, use_colors: bool, width: usize, writer: &mut W) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", dashboard.title.bold())?;
    } else {
        writeln!(writer, "{}", dashboard.title)?;
    }

    if !dashboard.notices.is_empty() {
        writeln!(writer)?;
        for notice in &dashboard.notices {
            write_notice(writer, notice, use_colors, width)?;
        }
    }

    for (index, section) in dashboard.sections.iter().enumerate() {
        writeln!(writer)?;
        if index > 0 {
            writeln!(writer, "═══════════════════════════════════════")?;
            writeln!(writer)?;
        }
        write_section(writer, section, use_colors, width)?;
    }

    Ok(())
}

fn write_notice<W: Write>(writer: &mut W, notice: &Notice, use_colors: bool, width: usize) -> Result<()> {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };

    let colored_tag = if use_colors {
        match notice.level {
            NoticeLevel::Info => tag.green().bold().to_string(),
            NoticeLevel::Warning => tag.yellow().bold().to_string(),
            NoticeLevel::Error => tag.red().bold().to_string(),
        }
    } else {
        tag.to_string()
    };

    // "[" + tag + "] "
    let indent = tag.len() + 3;
    let wrapped_lines = wrap_text(&notice.message, width, indent);
    if let Some(first_line) = wrapped_lines.first() {
        writeln!(writer, "[{colored_tag}] {first_line}")?;
        for line in wrapped_lines.iter().skip(1) {
            writeln!(writer, "{line}")?;
        }
    }

    Ok(())
}

fn write_section<W: Write>(writer: &mut W, section: &Section, use_colors: bool, width: usize) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", section.heading().bold())?;
    } else {
        writeln!(writer, "{}", section.heading())?;
    }

    if let Some(caption) = section.caption() {
        if use_colors {
            writeln!(writer, "{}", caption.dimmed())?;
        } else {
            writeln!(writer, "{caption}")?;
        }
    }

    if section.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "{INDENT}{NO_METRICS_NOTE}")?;
        return Ok(());
    }

    let columns = section.layout.columns().get();
    let cell_width = (width.saturating_sub(INDENT.len()) / columns).max(MIN_CELL_WIDTH);

    for row in section.rows() {
        writeln!(writer)?;
        write_row(writer, row, cell_width, |card| card.label.as_str(), |text| text.to_string(), use_colors)?;
        write_row(writer, row, cell_width, |card| card.value.as_str(), |text| text.cyan().bold().to_string(), use_colors)?;
    }

    Ok(())
}

fn write_row<W: Write>(
    writer: &mut W,
    row: &[Card],
    cell_width: usize,
    text_of: impl Fn(&Card) -> &str,
    colorize: impl Fn(&str) -> String,
    use_colors: bool,
) -> Result<()> {
    write!(writer, "{INDENT}")?;
    for (index, card) in row.iter().enumerate() {
        let text = fit(text_of(card), cell_width - 2);
        if use_colors {
            write!(writer, "{}", colorize(&text))?;
        } else {
            write!(writer, "{text}")?;
        }

        if index + 1 < row.len() {
            let padding = cell_width - text.chars().count();
            write!(writer, "{:padding$}", "")?;
        }
    }
    writeln!(writer)?;

    Ok(())
}

/// Shorten `text` to at most `max` characters, marking the cut with an ellipsis.
fn fit(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let mut result: String = text.chars().take(max.saturating_sub(1)).collect();
    result.push('…');
    result
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}

/// Word-wrap text to fit within a given width, with indentation for continuation lines
fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    if width <= indent {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        // The first line starts after the prefix too, so every line gets the same budget
        let separator_len = usize::from(!current_line.is_empty());
        if !current_line.is_empty() && indent + current_line.len() + separator_len + word.len() > width {
            lines.push(core::mem::take(&mut current_line));
        }

        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| if index == 0 { line } else { format!("{:indent$}{line}", "") })
        .collect()
}
