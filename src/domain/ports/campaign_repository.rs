use crate::domain::entities::campaign::Campaign;
use crate::domain::error::DomainError;
use crate::domain::values::platform::Platform;

#[derive(Debug, Clone, Default)]
pub struct CampaignFilter {
    pub platform: Option<Platform>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CampaignStats {
    pub total_campaigns: usize,
    pub by_platform: Vec<(String, usize)>,
    pub total_monthly_spend: f64,
}

pub trait CampaignRepository: Send + Sync {
    fn add(&self, campaign: &Campaign) -> Result<(), DomainError>;
    fn get(&self, id: &str) -> Result<Option<Campaign>, DomainError>;
    fn list(&self, filter: &CampaignFilter) -> Result<Vec<Campaign>, DomainError>;
    fn delete(&self, id: &str) -> Result<(), DomainError>;
    fn stats(&self) -> Result<CampaignStats, DomainError>;
}
