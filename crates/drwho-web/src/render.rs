/// Shared HTML helpers: escaping, placeholders, the page shell, and link
/// builders for cross-view navigation.

/// Shown wherever the backend left a field absent or blank.
pub const PLACEHOLDER: &str = "N/A";

const STYLE: &str = "\
body{font-family:sans-serif;background:#f3f4f6;margin:0;padding:2rem}\
h1{color:#3b82f6}\
.panel{background:#fff;border-radius:.375rem;box-shadow:0 1px 3px rgba(0,0,0,.15);padding:1rem;margin-bottom:1.5rem}\
.tiles{display:flex;gap:1rem;margin-bottom:1.5rem}\
.tile{flex:1;background:#fff;border-radius:.375rem;box-shadow:0 1px 3px rgba(0,0,0,.15);padding:1rem;display:flex;justify-content:space-between;align-items:center}\
.tile .value{font-size:1.5rem;font-weight:700}\
.tile .icon{font-size:1.75rem}\
.columns{display:flex;gap:1rem;align-items:flex-start}\
.columns>div{flex:1}\
table{width:100%;background:#fff;border-collapse:collapse;box-shadow:0 1px 3px rgba(0,0,0,.15)}\
th{background:#3b82f6;color:#fff;padding:.75rem;text-align:center}\
th a{color:inherit;text-decoration:none}\
td{padding:.75rem;text-align:center;border-top:1px solid #e5e7eb}\
tr:hover td{background:#e5e7eb}\
.filters{display:flex;gap:.5rem;margin-bottom:1rem}\
.filters input{padding:.5rem;border:1px solid #d1d5db;border-radius:.25rem}\
.chip{display:inline-block;background:#dbeafe;color:#2563eb;border-radius:9999px;padding:.25rem .75rem;margin:.125rem;font-size:.875rem}\
.search{display:flex;justify-content:center;gap:0}\
.search input{width:50%;padding:1rem;border:1px solid #d1d5db;border-radius:.5rem 0 0 .5rem}\
.search button{background:#3b82f6;color:#fff;border:0;padding:1rem;border-radius:0 .5rem .5rem 0;cursor:pointer}\
.landing{display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:90vh}\
.landing h1{font-size:3.5rem;margin-bottom:2rem}";

/// Escape text for embedding in HTML element or attribute content.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped text, or the placeholder when absent or blank.
pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => escape(v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Statistic tile value. Zeros display as the placeholder because the
/// backend substitutes 0 for missing numeric columns.
pub fn stat_or_placeholder(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => fmt_number(v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Render a number without a trailing `.0` for whole values.
pub fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Link to a professor detail page, carrying the question forward when
/// there is one.
pub fn professor_href(id: i64, query: Option<&str>) -> String {
    match query {
        Some(q) => format!("/professor/{id}?query={}", urlencoding::encode(q)),
        None => format!("/professor/{id}"),
    }
}

/// Wrap a rendered body in the shared document shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape(r#"<b>&"quoted"'</b>"#),
            "&lt;b&gt;&amp;&quot;quoted&quot;&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn query_parameter_round_trips() {
        let query = "폐암 명의는 누구인가요? & more";
        let href = professor_href(1, Some(query));
        let encoded = href.strip_prefix("/professor/1?query=").unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), query);
    }

    #[test]
    fn placeholder_for_blank_text() {
        assert_eq!(text_or_placeholder(None), PLACEHOLDER);
        assert_eq!(text_or_placeholder(Some("  ")), PLACEHOLDER);
        assert_eq!(text_or_placeholder(Some("서울병원")), "서울병원");
    }

    #[test]
    fn placeholder_for_absent_and_zero_stats() {
        assert_eq!(stat_or_placeholder(None), PLACEHOLDER);
        assert_eq!(stat_or_placeholder(Some(0.0)), PLACEHOLDER);
        assert_eq!(stat_or_placeholder(Some(42.0)), "42");
        assert_eq!(stat_or_placeholder(Some(0.85)), "0.85");
    }

    #[test]
    fn professor_link_carries_the_query() {
        assert_eq!(
            professor_href(7, Some("폐암")),
            "/professor/7?query=%ED%8F%90%EC%95%94"
        );
        assert_eq!(professor_href(7, None), "/professor/7");
    }
}
