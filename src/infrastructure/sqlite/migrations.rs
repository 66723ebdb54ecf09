use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS campaigns (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            platform TEXT NOT NULL,
            monthly_spend REAL NOT NULL,
            impressions INTEGER NOT NULL,
            clicks INTEGER,
            brand_searches INTEGER,
            conversions INTEGER NOT NULL,
            quality_cases INTEGER NOT NULL,
            average_case_value REAL NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS waste_analyses (
            id TEXT PRIMARY KEY,
            meta_campaign_id TEXT NOT NULL,
            ctv_campaign_id TEXT NOT NULL,
            monthly_waste REAL NOT NULL,
            annual_waste REAL NOT NULL,
            potential_savings REAL NOT NULL,
            meta_metrics TEXT NOT NULL,
            ctv_metrics TEXT NOT NULL,
            recommendations TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_campaigns_platform ON campaigns(platform);
        CREATE INDEX IF NOT EXISTS idx_campaigns_created ON campaigns(created_at);
        CREATE INDEX IF NOT EXISTS idx_analyses_created ON waste_analyses(created_at);
        ",
    )
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
