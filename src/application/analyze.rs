use crate::domain::entities::analysis::WasteAnalysis;
use crate::domain::entities::campaign::{Campaign, CampaignDraft};
use crate::domain::error::DomainError;
use crate::domain::ports::analysis_repository::AnalysisRepository;
use crate::domain::ports::campaign_repository::CampaignRepository;
use crate::domain::values::metrics::{compute_metrics, CampaignMetrics};
use crate::domain::values::platform::Platform;
use crate::domain::values::recommendation::{generate_recommendations, Recommendation};
use crate::domain::values::waste::{compute_waste, WasteConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request shape for a waste analysis: one campaign per channel.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub meta_campaign: CampaignDraft,
    pub ctv_campaign: CampaignDraft,
}

/// The full result of one analysis: waste figures plus owned copies of both
/// channels' metrics and the recommendation list.
#[derive(Debug, Clone, Serialize)]
pub struct WasteReport {
    pub analysis_id: String,
    pub monthly_waste: f64,
    pub annual_waste: f64,
    pub potential_savings: f64,
    pub meta_metrics: CampaignMetrics,
    pub ctv_metrics: CampaignMetrics,
    pub recommendations: Vec<Recommendation>,
}

pub struct AnalyzeUseCase {
    campaigns: Arc<dyn CampaignRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    config: WasteConfig,
}

impl AnalyzeUseCase {
    pub fn new(
        campaigns: Arc<dyn CampaignRepository>,
        analyses: Arc<dyn AnalysisRepository>,
        config: WasteConfig,
    ) -> Self {
        Self {
            campaigns,
            analyses,
            config,
        }
    }

    /// Validate the pair, derive metrics, waste, and recommendations, then
    /// persist both campaigns and the analysis record.
    pub fn execute(&self, request: AnalyzeRequest) -> Result<WasteReport, DomainError> {
        let AnalyzeRequest {
            meta_campaign: meta,
            ctv_campaign: ctv,
        } = request;

        if meta.platform != Platform::Meta {
            return Err(DomainError::invalid_input(
                "meta_campaign.platform",
                "must be meta",
            ));
        }
        if ctv.platform != Platform::Ctv {
            return Err(DomainError::invalid_input(
                "ctv_campaign.platform",
                "must be ctv",
            ));
        }
        meta.validate()?;
        ctv.validate()?;

        let meta_metrics = compute_metrics(&meta)?;
        let ctv_metrics = compute_metrics(&ctv)?;
        let figures = compute_waste(&meta, &meta_metrics, &ctv_metrics, &self.config);
        let recommendations = generate_recommendations(&meta_metrics, &ctv_metrics, &figures);

        let meta_campaign = Campaign::new(meta);
        let ctv_campaign = Campaign::new(ctv);
        self.campaigns.add(&meta_campaign)?;
        self.campaigns.add(&ctv_campaign)?;

        let analysis = WasteAnalysis::new(
            meta_campaign.id.clone(),
            ctv_campaign.id.clone(),
            &figures,
            &meta_metrics,
            &ctv_metrics,
            &recommendations,
        )?;
        self.analyses.add(&analysis)?;
        log::debug!(
            "analysis {} stored: monthly waste {:.2}",
            analysis.id,
            figures.monthly_waste
        );

        Ok(WasteReport {
            analysis_id: analysis.id,
            monthly_waste: figures.monthly_waste,
            annual_waste: figures.annual_waste,
            potential_savings: figures.potential_savings,
            meta_metrics,
            ctv_metrics,
            recommendations,
        })
    }

    pub fn list(&self, limit: Option<usize>) -> Result<Vec<WasteAnalysis>, DomainError> {
        self.analyses.list(limit)
    }

    pub fn get(&self, id: &str) -> Result<WasteAnalysis, DomainError> {
        self.analyses
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Analysis not found: {id}")))
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.analyses.delete(id)
    }
}
