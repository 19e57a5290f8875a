/// Normalization of the professor record's delimited text fields.
///
/// Education and career columns are comma-delimited free text where most
/// entries start with a year; keywords arrive as either a list or one
/// delimited string. Everything is trimmed and empties are dropped before
/// display.
use regex::Regex;

use drwho_common::record::Keywords;

/// Split a comma-delimited field into trimmed entries, sorted ascending by
/// the first 4-digit year found in each entry. Entries without a year use
/// 0 and therefore sort first. The sort is stable, so same-year entries
/// keep their original order.
pub fn split_year_sorted(field: Option<&str>) -> Vec<String> {
    let Some(field) = field else {
        return Vec::new();
    };

    let year_re = Regex::new(r"\d{4}").expect("valid regex");
    let mut entries: Vec<String> = field
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect();
    entries.sort_by_key(|entry| year_of(&year_re, entry));
    entries
}

fn year_of(year_re: &Regex, text: &str) -> i32 {
    year_re
        .find(text)
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .unwrap_or(0)
}

/// Flatten the keywords column into a trimmed, non-empty list regardless
/// of whether it arrived as an array or a delimited string.
pub fn normalize_keywords(keywords: Option<&Keywords>) -> Vec<String> {
    match keywords {
        Some(Keywords::List(items)) => items
            .iter()
            .map(|keyword| keyword.trim())
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Keywords::Delimited(text)) => text
            .split(',')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}
