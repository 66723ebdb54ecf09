use crate::domain::entities::analysis::WasteAnalysis;
use crate::domain::error::DomainError;
use crate::domain::ports::analysis_repository::AnalysisRepository;
use chrono::DateTime;
use rusqlite::{params, Connection};
use std::sync::Mutex;

const SELECT_COLS: &str = "id, meta_campaign_id, ctv_campaign_id, monthly_waste, annual_waste, potential_savings, meta_metrics, ctv_metrics, recommendations, created_at";

pub struct SqliteAnalysisRepo {
    conn: Mutex<Connection>,
}

impl SqliteAnalysisRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_analysis(row: &rusqlite::Row) -> Result<WasteAnalysis, rusqlite::Error> {
        let created_str: String = row.get(9)?;

        Ok(WasteAnalysis {
            id: row.get(0)?,
            meta_campaign_id: row.get(1)?,
            ctv_campaign_id: row.get(2)?,
            monthly_waste: row.get(3)?,
            annual_waste: row.get(4)?,
            potential_savings: row.get(5)?,
            meta_metrics_json: row.get(6)?,
            ctv_metrics_json: row.get(7)?,
            recommendations_json: row.get(8)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        })
    }
}

impl AnalysisRepository for SqliteAnalysisRepo {
    fn add(&self, analysis: &WasteAnalysis) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO waste_analyses (id, meta_campaign_id, ctv_campaign_id, monthly_waste, annual_waste, potential_savings, meta_metrics, ctv_metrics, recommendations, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                analysis.id,
                analysis.meta_campaign_id,
                analysis.ctv_campaign_id,
                analysis.monthly_waste,
                analysis.annual_waste,
                analysis.potential_savings,
                analysis.meta_metrics_json,
                analysis.ctv_metrics_json,
                analysis.recommendations_json,
                analysis.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add analysis: {e}")))?;
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<WasteAnalysis>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SELECT_COLS} FROM waste_analyses WHERE id = ?1"
            ))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_analysis)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }

    fn list(&self, limit: Option<usize>) -> Result<Vec<WasteAnalysis>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM waste_analyses ORDER BY created_at DESC");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let analyses = stmt
            .query_map(params_refs.as_slice(), Self::row_to_analysis)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(analyses)
    }

    fn delete(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM waste_analyses WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete analysis: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Analysis not found: {id}")));
        }
        Ok(())
    }

    fn count(&self) -> Result<usize, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM waste_analyses", [], |row| row.get(0))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(count as usize)
    }
}
