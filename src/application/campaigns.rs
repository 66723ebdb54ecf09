use crate::domain::entities::campaign::{Campaign, CampaignDraft};
use crate::domain::error::DomainError;
use crate::domain::ports::campaign_repository::{CampaignFilter, CampaignRepository};
use crate::domain::values::platform::Platform;
use std::sync::Arc;

pub struct CampaignUseCase {
    repo: Arc<dyn CampaignRepository>,
}

impl CampaignUseCase {
    pub fn new(repo: Arc<dyn CampaignRepository>) -> Self {
        Self { repo }
    }

    pub fn add(&self, draft: CampaignDraft) -> Result<Campaign, DomainError> {
        draft.validate()?;
        let campaign = Campaign::new(draft);
        self.repo.add(&campaign)?;
        Ok(campaign)
    }

    pub fn list(
        &self,
        platform: Option<Platform>,
        limit: Option<usize>,
    ) -> Result<Vec<Campaign>, DomainError> {
        self.repo.list(&CampaignFilter { platform, limit })
    }

    pub fn get(&self, id: &str) -> Result<Campaign, DomainError> {
        self.repo
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Campaign not found: {id}")))
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id)
    }
}
