/// Professor detail page: statistic tiles, profile, style analysis, and
/// keyword chips for one record. A failed fetch renders the not-found
/// page; it is never propagated.
use axum::extract::{Path, Query, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::error;

use drwho_common::record::Professor;

use crate::profile;
use crate::render;

use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    pub query: Option<String>,
}

/// Everything the page shows, derived from one record.
pub struct ProfessorView {
    pub professor: Professor,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub keywords: Vec<String>,
}

impl ProfessorView {
    pub fn from_record(professor: Professor) -> Self {
        let education = profile::split_year_sorted(professor.education_parsed.as_deref());
        let experience = profile::split_year_sorted(professor.experience_parsed.as_deref());
        let keywords = profile::normalize_keywords(professor.keywords.as_ref());
        Self {
            professor,
            education,
            experience,
            keywords,
        }
    }
}

pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<DetailParams>,
) -> Html<String> {
    match state.backend.get_professor(id).await {
        Ok(record) => {
            let view = ProfessorView::from_record(record);
            Html(render::page(
                "Dr.WHO",
                &render_profile(&view, params.query.as_deref()),
            ))
        }
        Err(e) => {
            error!(error = %e, id, "professor fetch failed");
            Html(render::page("Dr.WHO", &render_not_found()))
        }
    }
}

fn render_not_found() -> String {
    "<main>\n<p>교수 정보를 찾을 수 없습니다.</p>\n</main>".to_string()
}

fn render_profile(view: &ProfessorView, query: Option<&str>) -> String {
    let p = &view.professor;

    let mut out = String::new();
    out.push_str("<main>\n");
    out.push_str(&format!(
        "<h1>질문: {}</h1>\n",
        render::text_or_placeholder(query)
    ));

    out.push_str("<div class=\"tiles\">\n");
    for (label, value, icon) in [
        ("총 게시글 수", render::stat_or_placeholder(p.total_posts), "📝"),
        ("총 댓글 수", render::stat_or_placeholder(p.total_comments), "💬"),
        ("긍정 비율", render::stat_or_placeholder(p.positive_ratio), "👍"),
        ("부정 비율", render::stat_or_placeholder(p.negative_ratio), "👎"),
        ("평균 감정 점수", render::stat_or_placeholder(p.avg_sentiment_score), "📊"),
        ("소통 점수", render::stat_or_placeholder(p.communication_score), "📞"),
    ] {
        out.push_str(&format!(
            "<div class=\"tile\"><div><h3>{label}</h3><p class=\"value\">{value}</p></div>\
             <div class=\"icon\">{icon}</div></div>\n"
        ));
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"columns\">\n");

    out.push_str("<div class=\"panel\">\n<h2>기본 정보 및 상세 프로필</h2>\n");
    out.push_str(&format!(
        "<p><strong>이름:</strong> {}</p>\n",
        render::text_or_placeholder(p.doctor_name.as_deref())
    ));
    out.push_str(&format!(
        "<p><strong>소속 병원:</strong> {}</p>\n",
        render::text_or_placeholder(p.hospital.as_deref())
    ));
    out.push_str(&format!(
        "<p><strong>진료 과목:</strong> {}</p>\n",
        render::text_or_placeholder(p.department.as_deref())
    ));
    out.push_str(&format!(
        "<p><strong>전문 분야:</strong> {}</p>\n",
        render::text_or_placeholder(p.specialty.as_deref())
    ));
    out.push_str(&format!(
        "<p><strong>논문 저서 수:</strong> {}개</p>\n",
        render::fmt_number(p.paper_count.unwrap_or(0.0))
    ));

    out.push_str("<h3>학력:</h3>\n");
    if view.education.is_empty() {
        out.push_str("<p>학력 정보가 없습니다.</p>\n");
    } else {
        for entry in &view.education {
            out.push_str(&format!("<p>• {}</p>\n", render::escape(entry)));
        }
    }

    out.push_str("<h3>경력:</h3>\n");
    if view.experience.is_empty() {
        out.push_str("<p>경력 정보가 없습니다.</p>\n");
    } else {
        for entry in &view.experience {
            out.push_str(&format!("<p>• {}</p>\n", render::escape(entry)));
        }
    }
    out.push_str("</div>\n");

    out.push_str("<div>\n<div class=\"panel\">\n<h2>진료 스타일 분석</h2>\n");
    for (icon, label, value) in [
        ("🩺", "진료 스타일", &p.treatment_style),
        ("👍", "고유한 특징", &p.uniqueness),
        ("💬", "상담 스타일", &p.consultation_style),
        ("📝", "환자 평가", &p.patient_evaluation),
    ] {
        out.push_str(&format!(
            "<h3>{icon} {label}</h3>\n<p>{}</p>\n",
            render::text_or_placeholder(value.as_deref())
        ));
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"panel\">\n<h2>주요 키워드</h2>\n");
    if view.keywords.is_empty() {
        out.push_str("<p>키워드가 없습니다.</p>\n");
    } else {
        for keyword in &view.keywords {
            out.push_str(&format!(
                "<span class=\"chip\">#{}</span>\n",
                render::escape(keyword)
            ));
        }
    }
    out.push_str("</div>\n</div>\n</div>\n</main>");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(value: serde_json::Value) -> Professor {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn education_is_listed_in_ascending_year_order() {
        let view = ProfessorView::from_record(record(serde_json::json!({
            "ID": 1,
            "Education_Parsed": "2010 MD, 2005 BS",
        })));
        assert_eq!(view.education, vec!["2005 BS", "2010 MD"]);

        let html = render_profile(&view, None);
        let first = html.find("2005 BS").unwrap();
        let second = html.find("2010 MD").unwrap();
        assert!(first < second);
    }

    #[test]
    fn delimited_keywords_render_exactly_two_chips() {
        let view = ProfessorView::from_record(record(serde_json::json!({
            "ID": 1,
            "keywords": "oncology, surgery",
        })));
        let html = render_profile(&view, None);
        assert_eq!(html.matches("class=\"chip\"").count(), 2);
        assert!(html.contains("#oncology"));
        assert!(html.contains("#surgery"));
    }

    #[test]
    fn list_keywords_render_the_same_chips() {
        let view = ProfessorView::from_record(record(serde_json::json!({
            "ID": 1,
            "keywords": ["oncology", " surgery "],
        })));
        let html = render_profile(&view, None);
        assert_eq!(html.matches("class=\"chip\"").count(), 2);
        assert!(html.contains("#surgery"));
    }

    #[test]
    fn absent_fields_render_placeholders_and_empty_states() {
        let view = ProfessorView::from_record(record(serde_json::json!({"ID": 1})));
        let html = render_profile(&view, None);
        assert!(html.contains("질문: N/A"));
        assert!(html.contains("학력 정보가 없습니다."));
        assert!(html.contains("경력 정보가 없습니다."));
        assert!(html.contains("키워드가 없습니다."));
        assert!(html.contains("논문 저서 수:</strong> 0개"));
        // six tiles, all placeholders
        assert_eq!(html.matches("class=\"tile\"").count(), 6);
    }

    #[test]
    fn zero_statistics_display_the_placeholder() {
        let view = ProfessorView::from_record(record(serde_json::json!({
            "ID": 1,
            "total_posts": 0,
            "positive_ratio": 0.85,
        })));
        let html = render_profile(&view, None);
        assert!(html.contains("0.85"));
        assert!(!html.contains("<p class=\"value\">0</p>"));
    }

    #[test]
    fn not_found_page_carries_the_message() {
        assert!(render_not_found().contains("교수 정보를 찾을 수 없습니다."));
    }
}
