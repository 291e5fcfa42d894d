//! Date templates for key prefixes, written with moment-style tokens (`YYYY/MM/DD`).
//!
//! Unknown characters are copied as-is and `[...]` escapes literal text, so any
//! string is a valid template. Single lowercase letters are never tokens, which
//! keeps plain words such as `archive` intact; use the doubled forms (`hh`, `mm`, `ss`).

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::fmt::{Display, Write};

// Longer tokens must come before their prefixes.
const TOKENS: &[&str] = &[
    "YYYY", "YY", "Q", "MMMM", "MMM", "MM", "M", "DDDD", "DDD", "DD", "D", "dddd", "ddd", "HH",
    "H", "hh", "mm", "ss", "SSS", "SS", "A", "X", "ZZ", "Z",
];

pub fn render<Tz>(template: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(end) = rest.find(']') {
                out.push_str(&rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        if let Some(token) = TOKENS.iter().find(|t| rest.starts_with(**t)) {
            write_token(&mut out, token, now);
            rest = &rest[token.len()..];
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn write_token<Tz>(out: &mut String, token: &str, now: &DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (is_pm, hour12) = now.hour12();
    let millis = now.nanosecond() / 1_000_000 % 1000;

    // Writing into a String cannot fail.
    let _ = match token {
        "YYYY" => write!(out, "{:04}", now.year()),
        "YY" => write!(out, "{:02}", now.year().rem_euclid(100)),
        "Q" => write!(out, "{}", now.month0() / 3 + 1),
        "MMMM" => write!(out, "{}", now.format("%B")),
        "MMM" => write!(out, "{}", now.format("%b")),
        "MM" => write!(out, "{:02}", now.month()),
        "M" => write!(out, "{}", now.month()),
        "DDDD" => write!(out, "{:03}", now.ordinal()),
        "DDD" => write!(out, "{}", now.ordinal()),
        "DD" => write!(out, "{:02}", now.day()),
        "D" => write!(out, "{}", now.day()),
        "dddd" => write!(out, "{}", now.format("%A")),
        "ddd" => write!(out, "{}", now.format("%a")),
        "HH" => write!(out, "{:02}", now.hour()),
        "H" => write!(out, "{}", now.hour()),
        "hh" => write!(out, "{:02}", hour12),
        "mm" => write!(out, "{:02}", now.minute()),
        "ss" => write!(out, "{:02}", now.second()),
        "SSS" => write!(out, "{:03}", millis),
        "SS" => write!(out, "{:02}", millis / 10),
        "A" => out.write_str(if is_pm { "PM" } else { "AM" }),
        "X" => write!(out, "{}", now.timestamp()),
        "ZZ" => write!(out, "{}", now.format("%z")),
        "Z" => write!(out, "{}", now.format("%:z")),
        other => out.write_str(other),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 9).unwrap()
    }

    #[test]
    fn test_date_path() {
        assert_eq!(render("YYYY/MM/DD", &sample()), "2024/03/07");
        assert_eq!(render("/YYYY/M/D/", &sample()), "/2024/3/7/");
        assert_eq!(render("YY-Q", &sample()), "24-1");
    }

    #[test]
    fn test_time_tokens() {
        assert_eq!(render("HH:mm:ss", &sample()), "14:05:09");
        assert_eq!(render("hh A", &sample()), "02 PM");
        assert_eq!(render("H:mm", &sample()), "14:05");
        assert_eq!(render("X", &sample()), sample().timestamp().to_string());
        assert_eq!(render("ss.SSS", &sample()), "09.000");
    }

    #[test]
    fn test_names_and_ordinals() {
        assert_eq!(render("MMM MMMM", &sample()), "Mar March");
        assert_eq!(render("ddd dddd", &sample()), "Thu Thursday");
        assert_eq!(render("DDDD", &sample()), "067");
    }

    #[test]
    fn test_escapes_and_literals() {
        assert_eq!(render("[uploads]/YYYY", &sample()), "uploads/2024");
        assert_eq!(render("[YYYY", &sample()), "[2024");
        assert_eq!(render("up_", &sample()), "up_");
        assert_eq!(render("archive", &sample()), "archive");
        assert_eq!(render("iMg", &sample()), "i3g");
        assert_eq!(render("图片/YYYY", &sample()), "图片/2024");
        assert_eq!(render("", &sample()), "");
    }

    #[test]
    fn test_offset_tokens() {
        let offset = FixedOffset::east_opt(8 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(render("Z", &now), "+08:00");
        assert_eq!(render("ZZ", &now), "+0800");
    }
}
