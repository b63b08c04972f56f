//! Frontmatter extraction from YAML (`---`) or TOML (`+++`) blocks.

use anyhow::{Result, anyhow};
use serde_json::Value;

use super::PostMeta;

/// Extract frontmatter and return (metadata, body).
///
/// Returns `None` when the document carries no frontmatter block.
pub fn extract(content: &str) -> Result<Option<(PostMeta, &str)>> {
    let trimmed = content.trim_start();

    if let Some((fm, body)) = fenced(trimmed, "---") {
        return Ok(Some((parse_yaml_like(fm), body)));
    }
    if let Some((fm, body)) = fenced(trimmed, "+++") {
        return Ok(Some((parse_toml(fm)?, body)));
    }
    Ok(None)
}

/// Split a document opening with `fence` at the next line starting with
/// the same fence. Yields `(frontmatter, body)`.
fn fenced<'a>(content: &'a str, fence: &str) -> Option<(&'a str, &'a str)> {
    let rest = content.strip_prefix(fence)?;
    let close = format!("\n{fence}");
    let end = rest.find(&close)?;

    let fm = rest[..end].trim();
    let body = rest[end + close.len()..].trim_start_matches('\n');
    Some((fm, body))
}

/// Parse simple YAML-like frontmatter (key: value).
///
/// Keys are matched case-insensitively, so `translationKey` and
/// `translationkey` both land in the typed field. Anything that is not
/// a standard post field goes to `extra` with its original casing.
fn parse_yaml_like(content: &str) -> PostMeta {
    let mut meta = PostMeta::default();

    for line in content.lines() {
        let Some((key, value)) = line.trim().split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.starts_with('#') {
            continue;
        }
        let value = value.trim();

        match key.to_lowercase().as_str() {
            "title" => meta.title = Some(unquote(value).to_string()),
            "description" => meta.description = Some(unquote(value).to_string()),
            "date" => meta.date = Some(unquote(value).to_string()),
            "translationkey" => meta.translation_key = Some(unquote(value).to_string()),
            "readingtime" => meta.reading_time = value.parse().ok(),
            "tags" => meta.tags = parse_string_list(value),
            _ => {
                meta.extra.insert(key.to_string(), parse_value(value));
            }
        }
    }

    meta
}

fn parse_toml(content: &str) -> Result<PostMeta> {
    toml::from_str(content).map_err(|e| anyhow!("invalid TOML frontmatter: {e}"))
}

/// Strip one layer of matching surrounding quotes.
fn unquote(s: &str) -> &str {
    let s = s.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

/// Parse a comma-separated list, with or without `[...]` brackets.
fn parse_string_list(s: &str) -> Vec<String> {
    let inner = s
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(s);

    inner
        .split(',')
        .map(|item| unquote(item).to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Best-effort typing for custom fields: booleans, null, numbers and
/// comma lists, with plain strings as the fallback.
fn parse_value(s: &str) -> Value {
    match s.to_ascii_lowercase().as_str() {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" | "~" => return Value::Null,
        _ => {}
    }

    if let Ok(n) = s.parse::<i64>() {
        return Value::from(n);
    }
    if let Some(n) = s.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
        return Value::Number(n);
    }

    if s.starts_with('[') || s.contains(',') {
        let items = parse_string_list(s).into_iter().map(Value::String);
        return Value::Array(items.collect());
    }

    Value::String(unquote(s).to_string())
}
