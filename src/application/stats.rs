use crate::domain::error::DomainError;
use crate::domain::ports::analysis_repository::AnalysisRepository;
use crate::domain::ports::campaign_repository::{CampaignRepository, CampaignStats};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct StoreStats {
    pub campaigns: CampaignStats,
    pub total_analyses: usize,
}

pub struct StatsUseCase {
    campaigns: Arc<dyn CampaignRepository>,
    analyses: Arc<dyn AnalysisRepository>,
}

impl StatsUseCase {
    pub fn new(
        campaigns: Arc<dyn CampaignRepository>,
        analyses: Arc<dyn AnalysisRepository>,
    ) -> Self {
        Self {
            campaigns,
            analyses,
        }
    }

    pub fn stats(&self) -> Result<StoreStats, DomainError> {
        Ok(StoreStats {
            campaigns: self.campaigns.stats()?,
            total_analyses: self.analyses.count()?,
        })
    }
}
