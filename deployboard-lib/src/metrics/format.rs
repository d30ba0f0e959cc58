//! Turning metric keys and values into display text.

use super::MetricValue;
use core::fmt::Write;

/// Substrings that are shown in uppercase wherever they appear in a metric key.
pub const DEFAULT_ACRONYMS: &[&str] = &["pii", "hap"];

/// Format a metric key such as `average_api_latency` as a title such as `Average Api Latency`.
///
/// Uses [`DEFAULT_ACRONYMS`].
#[must_use]
pub fn format_label(key: &str) -> String {
    format_label_with(key, DEFAULT_ACRONYMS)
}

/// Format a metric key as a title, uppercasing the given acronyms.
///
/// Acronyms are matched case-sensitively anywhere in the key, one after another in list order,
/// without regard for word boundaries. Every other character follows the usual capitalization
/// of each underscore-separated word, so `pii_input` becomes `PII Input` and `shap_values`
/// becomes `SHAP Values`.
#[must_use]
pub fn format_label_with<S: AsRef<str>>(key: &str, acronyms: &[S]) -> String {
    let chars: Vec<char> = key.chars().collect();
    let keep_upper = mark_acronyms(&chars, acronyms);

    let mut label = String::with_capacity(key.len());
    let mut word_start = true;
    for (&c, &upper) in chars.iter().zip(&keep_upper) {
        if c == '_' {
            label.push(' ');
            word_start = true;
        } else if word_start || upper {
            label.extend(c.to_uppercase());
            word_start = false;
        } else {
            label.extend(c.to_lowercase());
        }
    }

    label
}

/// Mark the characters covered by acronym matches.
///
/// A later acronym never matches characters already claimed by an earlier one, since those
/// have been uppercased and the match is case-sensitive.
fn mark_acronyms<S: AsRef<str>>(chars: &[char], acronyms: &[S]) -> Vec<bool> {
    let mut marked = vec![false; chars.len()];

    for acronym in acronyms {
        let pattern: Vec<char> = acronym.as_ref().chars().collect();
        if pattern.is_empty() {
            continue;
        }

        let mut start = 0;
        while start + pattern.len() <= chars.len() {
            let end = start + pattern.len();
            let matches = chars.get(start..end).is_some_and(|window| window == pattern.as_slice())
                && marked.get(start..end).is_some_and(|flags| !flags.contains(&true));

            if matches {
                marked.iter_mut().skip(start).take(pattern.len()).for_each(|flag| *flag = true);
                start = end;
            } else {
                start += 1;
            }
        }
    }

    marked
}

/// Format a metric value for display.
///
/// - Missing values show as `N/A`.
/// - Floats with a magnitude in `(0, 1]` show as a percentage with two decimals; other
///   floats, zero included, show with thousands separators and two decimals.
/// - Integers show with thousands separators.
/// - Text is shown as is.
#[must_use]
pub fn format_value(value: &MetricValue) -> String {
    let mut s = String::new();
    write_value(&mut s, value);
    s
}

/// Append the display form of a metric value to a buffer.
pub fn write_value(buf: &mut String, value: &MetricValue) {
    match value {
        MetricValue::Missing => buf.push_str("N/A"),
        MetricValue::Float(f) => write_float(buf, *f),
        MetricValue::Integer(i) => {
            if *i < 0 {
                buf.push('-');
            }
            push_grouped(buf, &i.unsigned_abs().to_string());
        }
        MetricValue::Text(s) => buf.push_str(s),
    }
}

fn write_float(buf: &mut String, f: f64) {
    if f.is_nan() {
        buf.push_str("nan");
        return;
    }

    if f.is_infinite() {
        buf.push_str(if f.is_sign_negative() { "-inf" } else { "inf" });
        return;
    }

    let magnitude = f.abs();
    if magnitude > 0.0 && magnitude <= 1.0 {
        let _ = write!(buf, "{:.2}%", f * 100.0);
        return;
    }

    let digits = format!("{magnitude:.2}");
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    if f.is_sign_negative() {
        buf.push('-');
    }
    push_grouped(buf, whole);
    buf.push('.');
    buf.push_str(fraction);
}

/// Append a run of ASCII digits with a comma between each group of three.
fn push_grouped(buf: &mut String, digits: &str) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            buf.push(',');
        }
        buf.push(c);
    }
}
