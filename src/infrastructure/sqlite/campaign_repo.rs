use crate::domain::entities::campaign::Campaign;
use crate::domain::error::DomainError;
use crate::domain::ports::campaign_repository::*;
use chrono::DateTime;
use rusqlite::{params, Connection};
use std::sync::Mutex;

const SELECT_COLS: &str = "id, name, platform, monthly_spend, impressions, clicks, brand_searches, conversions, quality_cases, average_case_value, created_at";

pub struct SqliteCampaignRepo {
    conn: Mutex<Connection>,
}

impl SqliteCampaignRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_campaign(row: &rusqlite::Row) -> Result<Campaign, rusqlite::Error> {
        let platform_str: String = row.get(2)?;
        let impressions: i64 = row.get(4)?;
        let clicks: Option<i64> = row.get(5)?;
        let brand_searches: Option<i64> = row.get(6)?;
        let conversions: i64 = row.get(7)?;
        let quality_cases: i64 = row.get(8)?;
        let created_str: String = row.get(10)?;

        Ok(Campaign {
            id: row.get(0)?,
            name: row.get(1)?,
            platform: platform_str
                .parse()
                .map_err(|_| {
                    log::warn!("invalid platform '{platform_str}' in stored campaign");
                    rusqlite::Error::InvalidParameterName(platform_str.clone())
                })?,
            monthly_spend: row.get(3)?,
            impressions: impressions as u64,
            clicks: clicks.map(|c| c as u64),
            brand_searches: brand_searches.map(|b| b as u64),
            conversions: conversions as u64,
            quality_cases: quality_cases as u64,
            average_case_value: row.get(9)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        })
    }
}

impl CampaignRepository for SqliteCampaignRepo {
    fn add(&self, campaign: &Campaign) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO campaigns (id, name, platform, monthly_spend, impressions, clicks, brand_searches, conversions, quality_cases, average_case_value, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                campaign.id,
                campaign.name,
                campaign.platform.to_string(),
                campaign.monthly_spend,
                campaign.impressions as i64,
                campaign.clicks.map(|c| c as i64),
                campaign.brand_searches.map(|b| b as i64),
                campaign.conversions as i64,
                campaign.quality_cases as i64,
                campaign.average_case_value,
                campaign.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add campaign: {e}")))?;
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Campaign>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!("SELECT {SELECT_COLS} FROM campaigns WHERE id = ?1"))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_campaign)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }

    fn list(&self, filter: &CampaignFilter) -> Result<Vec<Campaign>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM campaigns WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(platform) = &filter.platform {
            sql.push_str(&format!(" AND platform = ?{}", param_values.len() + 1));
            param_values.push(Box::new(platform.to_string()));
        }
        sql.push_str(" ORDER BY created_at DESC");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let campaigns = stmt
            .query_map(params_refs.as_slice(), Self::row_to_campaign)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(campaigns)
    }

    fn delete(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM campaigns WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete campaign: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Campaign not found: {id}")));
        }
        Ok(())
    }

    fn stats(&self) -> Result<CampaignStats, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT platform, COUNT(*), COALESCE(SUM(monthly_spend), 0) FROM campaigns GROUP BY platform ORDER BY platform",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let groups = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, f64>(2)?,
                ))
            })
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect::<Vec<_>>();

        let mut stats = CampaignStats::default();
        for (platform, count, spend) in groups {
            stats.total_campaigns += count as usize;
            stats.total_monthly_spend += spend;
            stats.by_platform.push((platform, count as usize));
        }
        Ok(stats)
    }
}
