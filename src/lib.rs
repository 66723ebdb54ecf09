pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::analyze::{AnalyzeRequest, AnalyzeUseCase, WasteReport};
use crate::application::campaigns::CampaignUseCase;
use crate::application::report::ReportUseCase;
use crate::application::stats::{StatsUseCase, StoreStats};
use crate::domain::entities::analysis::WasteAnalysis;
use crate::domain::entities::campaign::{Campaign, CampaignDraft};
use crate::domain::error::DomainError;
use crate::domain::ports::analysis_repository::AnalysisRepository;
use crate::domain::ports::campaign_repository::CampaignRepository;
use crate::domain::values::platform::Platform;
use crate::domain::values::waste::WasteConfig;
use crate::infrastructure::sqlite::analysis_repo::SqliteAnalysisRepo;
use crate::infrastructure::sqlite::campaign_repo::SqliteCampaignRepo;
use crate::infrastructure::sqlite::migrations::run_migrations;
use rusqlite::Connection;
use std::sync::Arc;

pub struct SpendLens {
    campaign_uc: CampaignUseCase,
    analyze_uc: AnalyzeUseCase,
    report_uc: ReportUseCase,
    stats_uc: StatsUseCase,
}

impl SpendLens {
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let conn1 = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn1
            .pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        let conn2 = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn2
            .pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;

        run_migrations(&conn1)?;
        run_migrations(&conn2)?;

        let campaign_repo: Arc<dyn CampaignRepository> = Arc::new(SqliteCampaignRepo::new(conn1));
        let analysis_repo: Arc<dyn AnalysisRepository> = Arc::new(SqliteAnalysisRepo::new(conn2));

        Ok(Self::with_repos(
            campaign_repo,
            analysis_repo,
            WasteConfig::default(),
        ))
    }

    pub fn with_repos(
        campaign_repo: Arc<dyn CampaignRepository>,
        analysis_repo: Arc<dyn AnalysisRepository>,
        config: WasteConfig,
    ) -> Self {
        Self {
            campaign_uc: CampaignUseCase::new(campaign_repo.clone()),
            analyze_uc: AnalyzeUseCase::new(campaign_repo.clone(), analysis_repo.clone(), config),
            report_uc: ReportUseCase::new(campaign_repo.clone(), analysis_repo.clone()),
            stats_uc: StatsUseCase::new(campaign_repo, analysis_repo),
        }
    }

    // Delegating methods
    pub fn campaign_add(&self, draft: CampaignDraft) -> Result<Campaign, DomainError> {
        self.campaign_uc.add(draft)
    }

    pub fn campaigns(
        &self,
        platform: Option<Platform>,
        limit: Option<usize>,
    ) -> Result<Vec<Campaign>, DomainError> {
        self.campaign_uc.list(platform, limit)
    }

    pub fn campaign_get(&self, id: &str) -> Result<Campaign, DomainError> {
        self.campaign_uc.get(id)
    }

    pub fn campaign_delete(&self, id: &str) -> Result<(), DomainError> {
        self.campaign_uc.delete(id)
    }

    pub fn analyze(&self, request: AnalyzeRequest) -> Result<WasteReport, DomainError> {
        self.analyze_uc.execute(request)
    }

    pub fn analyses(&self, limit: Option<usize>) -> Result<Vec<WasteAnalysis>, DomainError> {
        self.analyze_uc.list(limit)
    }

    pub fn analysis_get(&self, id: &str) -> Result<WasteAnalysis, DomainError> {
        self.analyze_uc.get(id)
    }

    pub fn analysis_delete(&self, id: &str) -> Result<(), DomainError> {
        self.analyze_uc.delete(id)
    }

    pub fn export(&self, analysis_id: &str, format: &str) -> Result<String, DomainError> {
        self.report_uc.export(analysis_id, format)
    }

    pub fn stats(&self) -> Result<StoreStats, DomainError> {
        self.stats_uc.stats()
    }
}
