use crate::Result;
use crate::dashboard::{Dashboard, NO_METRICS_NOTE, NoticeLevel, Section};
use chrono::{DateTime, Local};
use core::fmt::Write;

pub fn generate<W: Write>(dashboard: &Dashboard, timestamp: DateTime<Local>, writer: &mut W) -> Result<()> {
    let title = html_escape(&dashboard.title);

    writeln!(writer, "<!DOCTYPE html>")?;
    writeln!(writer, "<html>")?;
    writeln!(writer, "<head>")?;
    writeln!(writer, "  <meta charset=\"UTF-8\">")?;
    writeln!(writer, "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">")?;
    writeln!(writer, "  <title>{title}</title>")?;
    write_styles(writer)?;
    writeln!(writer, "</head>")?;
    writeln!(writer, "<body>")?;

    writeln!(writer, "  <div class=\"header\">")?;
    writeln!(writer, "    <h1>{title}</h1>")?;
    writeln!(writer, "    <div class=\"timestamp\">Generated {}</div>", timestamp.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(writer, "  </div>")?;

    if !dashboard.notices.is_empty() {
        writeln!(writer, "  <div class=\"notices\">")?;
        for notice in &dashboard.notices {
            writeln!(
                writer,
                "    <div class=\"notice {}\">{}</div>",
                notice_class(notice.level),
                html_escape(&notice.message)
            )?;
        }
        writeln!(writer, "  </div>")?;
    }

    for section in &dashboard.sections {
        write_section(writer, section)?;
    }

    writeln!(writer, "</body>")?;
    writeln!(writer, "</html>")?;

    Ok(())
}

fn write_section<W: Write>(writer: &mut W, section: &Section) -> Result<()> {
    writeln!(writer, "  <section class=\"deployment\">")?;
    writeln!(writer, "    <h2>{}</h2>", html_escape(&section.heading()))?;
    if let Some(caption) = section.caption() {
        writeln!(writer, "    <div class=\"caption\">{}</div>", html_escape(&caption))?;
    }

    if section.is_empty() {
        writeln!(writer, "    <div class=\"notice notice-info\">{NO_METRICS_NOTE}</div>")?;
    } else {
        writeln!(
            writer,
            "    <div class=\"metric-grid\" style=\"grid-template-columns: repeat({}, minmax(0, 1fr));\">",
            section.layout.columns()
        )?;
        for card in &section.cards {
            writeln!(
                writer,
                "      <div class=\"metric-card\" style=\"grid-row: {}; grid-column: {};\">",
                card.position.row + 1,
                card.position.column + 1
            )?;
            writeln!(writer, "        <div class=\"metric-card-label\">{}</div>", html_escape(&card.label))?;
            writeln!(writer, "        <div class=\"metric-card-value\">{}</div>", html_escape(&card.value))?;
            writeln!(writer, "      </div>")?;
        }
        writeln!(writer, "    </div>")?;
    }

    writeln!(writer, "    <hr>")?;
    writeln!(writer, "  </section>")?;

    Ok(())
}

const fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice-info",
        NoticeLevel::Warning => "notice-warning",
        NoticeLevel::Error => "notice-error",
    }
}

fn write_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "  <style>")?;
    writeln!(writer, "    :root {{")?;
    writeln!(writer, "      --bg-color: #f0f2f5;")?;
    writeln!(writer, "      --card-bg: #ffffff;")?;
    writeln!(writer, "      --card-border: #cccccc;")?;
    writeln!(writer, "      --text-color: #1a202c;")?;
    writeln!(writer, "      --label-color: #333333;")?;
    writeln!(writer, "      --value-color: #0072c6;")?;
    writeln!(writer, "      --text-secondary: #64748b;")?;
    writeln!(writer, "      --info-bg: #e0f2fe;")?;
    writeln!(writer, "      --info-text: #075985;")?;
    writeln!(writer, "      --warning-bg: #fef3c7;")?;
    writeln!(writer, "      --warning-text: #92400e;")?;
    writeln!(writer, "      --error-bg: #fee2e2;")?;
    writeln!(writer, "      --error-text: #991b1b;")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "    @media (prefers-color-scheme: dark) {{")?;
    writeln!(writer, "      :root {{")?;
    writeln!(writer, "        --bg-color: #0f172a;")?;
    writeln!(writer, "        --card-bg: #1e293b;")?;
    writeln!(writer, "        --card-border: #334155;")?;
    writeln!(writer, "        --text-color: #e2e8f0;")?;
    writeln!(writer, "        --label-color: #cbd5e1;")?;
    writeln!(writer, "        --value-color: #60a5fa;")?;
    writeln!(writer, "        --text-secondary: #94a3b8;")?;
    writeln!(writer, "        --info-bg: #0c4a6e;")?;
    writeln!(writer, "        --info-text: #e0f2fe;")?;
    writeln!(writer, "        --warning-bg: #78350f;")?;
    writeln!(writer, "        --warning-text: #fef3c7;")?;
    writeln!(writer, "        --error-bg: #7f1d1d;")?;
    writeln!(writer, "        --error-text: #fee2e2;")?;
    writeln!(writer, "      }}")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "    body {{")?;
    writeln!(writer, "      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;")?;
    writeln!(writer, "      background: var(--bg-color);")?;
    writeln!(writer, "      color: var(--text-color);")?;
    writeln!(writer, "      margin: 0;")?;
    writeln!(writer, "      padding: 24px 32px;")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "    .header h1 {{ margin: 0 0 4px 0; }}")?;
    writeln!(writer, "    .timestamp {{ color: var(--text-secondary); font-size: 13px; margin-bottom: 16px; }}")?;
    writeln!(writer, "    .notice {{ border-radius: 6px; padding: 12px 16px; margin-bottom: 12px; }}")?;
    writeln!(writer, "    .notice-info {{ background: var(--info-bg); color: var(--info-text); }}")?;
    writeln!(writer, "    .notice-warning {{ background: var(--warning-bg); color: var(--warning-text); }}")?;
    writeln!(writer, "    .notice-error {{ background: var(--error-bg); color: var(--error-text); }}")?;
    writeln!(writer, "    .caption {{ color: var(--text-secondary); font-size: 14px; margin-bottom: 16px; }}")?;
    writeln!(writer, "    .metric-grid {{ display: grid; column-gap: 20px; }}")?;
    writeln!(writer, "    .metric-card {{")?;
    writeln!(writer, "      background-color: var(--card-bg);")?;
    writeln!(writer, "      border: 1px solid var(--card-border);")?;
    writeln!(writer, "      border-radius: 10px;")?;
    writeln!(writer, "      padding: 25px;")?;
    writeln!(writer, "      text-align: center;")?;
    writeln!(writer, "      box-shadow: 0 4px 8px 0 rgba(0,0,0,0.1);")?;
    writeln!(writer, "      min-height: 150px;")?;
    writeln!(writer, "      display: flex;")?;
    writeln!(writer, "      flex-direction: column;")?;
    writeln!(writer, "      justify-content: center;")?;
    writeln!(writer, "      margin-bottom: 20px;")?;
    writeln!(writer, "      box-sizing: border-box;")?;
    writeln!(writer, "    }}")?;
    writeln!(writer, "    .metric-card-label {{ font-size: 16px; color: var(--label-color); font-weight: normal; margin-bottom: 10px; }}")?;
    writeln!(writer, "    .metric-card-value {{ font-size: 42px; font-weight: bold; color: var(--value-color); }}")?;
    writeln!(writer, "    hr {{ border: none; border-top: 1px solid var(--card-border); margin: 24px 0; }}")?;
    writeln!(writer, "  </style>")?;

    Ok(())
}

fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
