use serde::Serialize;

use super::table::{Cell, ResultTable};

#[derive(Debug, Serialize)]
pub struct ReportListItem {
    pub slug: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: String,
    pub title: &'static str,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportResponse {
    pub fn new(slug: &str, title: &'static str, table: ResultTable) -> Self {
        Self {
            report: slug.to_owned(),
            title,
            columns: table.columns,
            rows: table.rows,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub food_types: Vec<String>,
    pub meal_types: Vec<String>,
}

#[cfg(test)]
mod dto_tests {
    use super::*;

    #[test]
    fn report_response_serializes_table_inline() {
        let mut table = ResultTable::new(vec!["status", "claim_count"]);
        table.push_row(vec!["Completed".into(), 2_i64.into()]);
        let response = ReportResponse::new(
            "claims-status-distribution",
            "Claims Status % Distribution",
            table,
        );
        let json = serde_json::to_string(&response).expect("response should serialize");
        assert!(json.contains(r#""report":"claims-status-distribution""#));
        assert!(json.contains(r#""rows":[["Completed",2]]"#));
    }
}
