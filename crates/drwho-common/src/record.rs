use serde::{Deserialize, Serialize};

/// One professor profile as returned by the directory backend.
///
/// The backend exposes a flat record whose column names come straight from
/// its source spreadsheet, hence the mixed casing. Every field except the
/// identifier is optional: the backend substitutes "N/A" or 0 for missing
/// cells, older rows omit columns entirely, and absent values render as a
/// placeholder rather than failing. Unknown columns are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professor {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Doctor_Name", default)]
    pub doctor_name: Option<String>,
    #[serde(rename = "Hospital", default)]
    pub hospital: Option<String>,
    #[serde(rename = "Department", default)]
    pub department: Option<String>,
    #[serde(rename = "Specialty", default)]
    pub specialty: Option<String>,
    /// Number of published papers. Arrives as a number; the backend uses 0
    /// for missing values.
    #[serde(rename = "Paper_Count", default)]
    pub paper_count: Option<f64>,
    /// Comma-delimited education entries, e.g. "2010 MD, 2005 BS".
    #[serde(rename = "Education_Parsed", default)]
    pub education_parsed: Option<String>,
    /// Comma-delimited career entries, same format as education.
    #[serde(rename = "Experience_Parsed", default)]
    pub experience_parsed: Option<String>,
    #[serde(default)]
    pub treatment_style: Option<String>,
    #[serde(default)]
    pub uniqueness: Option<String>,
    #[serde(default)]
    pub consultation_style: Option<String>,
    #[serde(default)]
    pub patient_evaluation: Option<String>,
    /// Main keywords; shape varies by how the row was ingested.
    #[serde(default)]
    pub keywords: Option<Keywords>,
    #[serde(default)]
    pub total_posts: Option<f64>,
    #[serde(default)]
    pub total_comments: Option<f64>,
    #[serde(default)]
    pub positive_ratio: Option<f64>,
    #[serde(default)]
    pub negative_ratio: Option<f64>,
    #[serde(default)]
    pub avg_sentiment_score: Option<f64>,
    #[serde(default)]
    pub communication_score: Option<f64>,
}

/// The `keywords` column arrives either as a JSON array or as a single
/// comma-delimited string depending on the backend row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    List(Vec<String>),
    Delimited(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_keyword_list() {
        let record: Professor = serde_json::from_str(
            r#"{
                "ID": 7,
                "Doctor_Name": "김철수",
                "Hospital": "서울병원",
                "keywords": ["폐암", "항암치료"],
                "total_posts": 42
            }"#,
        )
        .unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.doctor_name.as_deref(), Some("김철수"));
        assert!(matches!(record.keywords, Some(Keywords::List(ref k)) if k.len() == 2));
        assert_eq!(record.total_posts, Some(42.0));
    }

    #[test]
    fn deserializes_with_delimited_keywords() {
        let record: Professor = serde_json::from_str(
            r#"{"ID": 1, "keywords": "oncology, surgery"}"#,
        )
        .unwrap();
        assert!(
            matches!(record.keywords, Some(Keywords::Delimited(ref s)) if s == "oncology, surgery")
        );
    }

    #[test]
    fn tolerates_missing_and_unknown_fields() {
        let record: Professor = serde_json::from_str(
            r#"{"ID": 3, "is_cancer_lung": 1, "Paper_Count": 12.0}"#,
        )
        .unwrap();
        assert_eq!(record.id, 3);
        assert_eq!(record.paper_count, Some(12.0));
        assert!(record.doctor_name.is_none());
        assert!(record.keywords.is_none());
    }
}
