/// Results page: question answering followed by the professor table.
///
/// Two sequential backend calls, each absorbed on failure: the QA answer
/// falls back to a fixed message, the professor list to empty. The
/// professor search runs only when a keyword can be derived from the
/// answer text, and each fetched record gets a 1-based display number
/// before the table is sorted or filtered.
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::{error, info};

use drwho_common::record::Professor;

use crate::answer;
use crate::render;
use crate::table::{self, Column, SortDir, TableState};

use super::AppState;

/// Shown in place of the answer when the QA call fails.
const ANSWER_FALLBACK: &str = "답변을 가져오지 못했습니다.";

#[derive(Debug, Default, Deserialize)]
pub struct ResultsParams {
    pub query: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub hospital: Option<String>,
    pub name: Option<String>,
    pub specialty: Option<String>,
}

/// One display row: the record plus its position in the fetched list.
pub struct Row {
    pub no: usize,
    pub professor: Professor,
}

pub async fn show(
    State(state): State<AppState>,
    Query(params): Query<ResultsParams>,
) -> Html<String> {
    let query = params.query.clone().unwrap_or_default();

    let answer_text = fetch_answer(&state, &query).await;
    let rows = fetch_rows(&state, &answer_text).await;

    Html(render::page(
        "검색 결과",
        &render_body(&params, &query, &answer_text, &rows),
    ))
}

async fn fetch_answer(state: &AppState, query: &str) -> String {
    if query.trim().is_empty() {
        return String::new();
    }
    match state.backend.ask(query).await {
        Ok(answer) => answer,
        Err(e) => {
            error!(error = %e, "QA request failed");
            ANSWER_FALLBACK.to_string()
        }
    }
}

/// The keyword the professor search will run on, if any. No answer text
/// or no labeled line means the search is never issued.
fn keyword_for(answer_text: &str) -> Option<String> {
    if answer_text.is_empty() {
        return None;
    }
    answer::extract_main_keyword(answer_text)
}

async fn fetch_rows(state: &AppState, answer_text: &str) -> Vec<Row> {
    let Some(keyword) = keyword_for(answer_text) else {
        return Vec::new();
    };
    info!(keyword = %keyword, "derived main keyword from answer");

    match state.backend.search_professors(&keyword).await {
        Ok(professors) => {
            info!(count = professors.len(), "professor search complete");
            professors
                .into_iter()
                .enumerate()
                .map(|(index, professor)| Row {
                    no: index + 1,
                    professor,
                })
                .collect()
        }
        Err(e) => {
            error!(error = %e, keyword = %keyword, "professor search failed");
            Vec::new()
        }
    }
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column {
            key: "no",
            title: "No",
            accessor: |row| row.no.to_string(),
        },
        Column {
            key: "hospital",
            title: "소속 병원",
            accessor: |row| cell(row.professor.hospital.as_deref()),
        },
        Column {
            key: "name",
            title: "이름",
            accessor: |row| cell(row.professor.doctor_name.as_deref()),
        },
        Column {
            key: "department",
            title: "진료 과목",
            accessor: |row| cell(row.professor.department.as_deref()),
        },
        Column {
            key: "specialty",
            title: "전문 분야",
            accessor: |row| cell(row.professor.specialty.as_deref()),
        },
    ]
}

fn cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => render::PLACEHOLDER.to_string(),
    }
}

fn table_state(params: &ResultsParams) -> TableState {
    TableState {
        sort: params.sort.clone(),
        dir: SortDir::parse(params.dir.as_deref()),
        filters: vec![
            ("hospital".to_string(), params.hospital.clone().unwrap_or_default()),
            ("name".to_string(), params.name.clone().unwrap_or_default()),
            ("specialty".to_string(), params.specialty.clone().unwrap_or_default()),
        ],
    }
}

fn render_body(params: &ResultsParams, query: &str, answer_text: &str, rows: &[Row]) -> String {
    let columns = columns();
    let state = table_state(params);
    let selected = table::select(rows, &columns, &state);

    let mut out = String::new();
    out.push_str("<main>\n<h1>검색 결과</h1>\n");
    out.push_str(&format!("<p>질문: {}</p>\n", render::escape(query)));
    out.push_str(&format!(
        "<div class=\"panel\">\n<h2>GPT 답변</h2>\n<p>{}</p>\n</div>\n",
        render::escape(answer_text)
    ));

    out.push_str(&render_filter_form(params, query));

    out.push_str("<h2>관련 교수 리스트</h2>\n<table>\n<thead>\n<tr>");
    for col in &columns {
        let indicator = if params.sort.as_deref() == Some(col.key) {
            match state.dir {
                SortDir::Desc => " 🔽",
                SortDir::Asc => " 🔼",
            }
        } else {
            ""
        };
        out.push_str(&format!(
            "<th><a href=\"{}\">{}{}</a></th>",
            sort_href(params, col.key),
            col.title,
            indicator
        ));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in selected {
        out.push_str("<tr>");
        for col in &columns {
            let text = (col.accessor)(row);
            if col.key == "name" {
                out.push_str(&format!(
                    "<td><a href=\"{}\">{}</a></td>",
                    render::professor_href(row.professor.id, Some(query)),
                    render::escape(&text)
                ));
            } else {
                out.push_str(&format!("<td>{}</td>", render::escape(&text)));
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</main>");
    out
}

fn render_filter_form(params: &ResultsParams, query: &str) -> String {
    let mut out = String::new();
    out.push_str("<form class=\"filters\" action=\"/search-results\" method=\"get\">\n");
    out.push_str(&format!(
        "<input type=\"hidden\" name=\"query\" value=\"{}\">\n",
        render::escape(query)
    ));
    if let Some(sort) = &params.sort {
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"sort\" value=\"{}\">\n",
            render::escape(sort)
        ));
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"dir\" value=\"{}\">\n",
            SortDir::parse(params.dir.as_deref()).as_str()
        ));
    }
    for (name, placeholder, value) in [
        ("hospital", "소속 병원 필터링", &params.hospital),
        ("name", "이름 필터링", &params.name),
        ("specialty", "전문 분야 필터링", &params.specialty),
    ] {
        out.push_str(&format!(
            "<input type=\"text\" name=\"{}\" placeholder=\"{}\" value=\"{}\">\n",
            name,
            placeholder,
            render::escape(value.as_deref().unwrap_or(""))
        ));
    }
    out.push_str("<button type=\"submit\">필터 적용</button>\n</form>\n");
    out
}

/// Header link that sorts by `col_key`, toggling direction when the
/// column is already the sort key, and preserving the query and filters.
fn sort_href(params: &ResultsParams, col_key: &str) -> String {
    let dir = if params.sort.as_deref() == Some(col_key) {
        SortDir::parse(params.dir.as_deref()).toggled()
    } else {
        SortDir::Asc
    };

    let mut parts: Vec<String> = Vec::new();
    if let Some(query) = &params.query {
        parts.push(format!("query={}", urlencoding::encode(query)));
    }
    parts.push(format!("sort={}", urlencoding::encode(col_key)));
    parts.push(format!("dir={}", dir.as_str()));
    for (name, value) in [
        ("hospital", &params.hospital),
        ("name", &params.name),
        ("specialty", &params.specialty),
    ] {
        if let Some(v) = value {
            if !v.is_empty() {
                parts.push(format!("{name}={}", urlencoding::encode(v)));
            }
        }
    }
    format!("/search-results?{}", parts.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn professor(id: i64, name: &str, hospital: &str) -> Professor {
        serde_json::from_value(serde_json::json!({
            "ID": id,
            "Doctor_Name": name,
            "Hospital": hospital,
        }))
        .unwrap()
    }

    #[test]
    fn no_labeled_line_means_no_search() {
        assert_eq!(keyword_for(""), None);
        assert_eq!(keyword_for("폐암에 대한 일반적인 설명입니다."), None);
        assert_eq!(keyword_for(ANSWER_FALLBACK), None);
    }

    #[test]
    fn labeled_line_drives_the_search() {
        assert_eq!(
            keyword_for("주요 진료분야(Main): Lung-Cancer*").as_deref(),
            Some("Lung")
        );
    }

    #[test]
    fn rows_render_numbered_with_detail_links() {
        let rows = vec![
            Row { no: 1, professor: professor(7, "김철수", "서울병원") },
            Row { no: 2, professor: professor(9, "이영희", "부산병원") },
        ];
        let html = render_body(&ResultsParams::default(), "폐암", "답변", &rows);
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("/professor/7?query=%ED%8F%90%EC%95%94"));
        assert!(html.contains("김철수"));
    }

    #[test]
    fn missing_cells_render_the_placeholder() {
        let record: Professor = serde_json::from_value(serde_json::json!({"ID": 3})).unwrap();
        let rows = vec![Row { no: 1, professor: record }];
        let html = render_body(&ResultsParams::default(), "", "", &rows);
        assert!(html.contains("<td>N/A</td>"));
    }

    #[test]
    fn filters_narrow_the_rendered_rows() {
        let rows = vec![
            Row { no: 1, professor: professor(7, "김철수", "서울병원") },
            Row { no: 2, professor: professor(9, "이영희", "부산병원") },
        ];
        let params = ResultsParams {
            hospital: Some("부산".to_string()),
            ..ResultsParams::default()
        };
        let html = render_body(&params, "폐암", "답변", &rows);
        assert!(html.contains("이영희"));
        assert!(!html.contains("김철수"));
    }

    #[test]
    fn sort_header_link_toggles_direction() {
        let params = ResultsParams {
            query: Some("폐암".to_string()),
            sort: Some("hospital".to_string()),
            dir: Some("asc".to_string()),
            ..ResultsParams::default()
        };
        let href = sort_href(&params, "hospital");
        assert!(href.contains("sort=hospital"));
        assert!(href.contains("dir=desc"));
        assert!(href.contains("query=%ED%8F%90%EC%95%94"));
    }
}
