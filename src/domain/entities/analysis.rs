use crate::domain::error::DomainError;
use crate::domain::values::metrics::CampaignMetrics;
use crate::domain::values::recommendation::Recommendation;
use crate::domain::values::waste::WasteFigures;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored waste analysis. Derived metrics and recommendations are kept as
/// serialized JSON strings for inspection and export; the authoritative
/// values are always recomputable from the referenced campaigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteAnalysis {
    pub id: String,
    pub meta_campaign_id: String,
    pub ctv_campaign_id: String,
    pub monthly_waste: f64,
    pub annual_waste: f64,
    pub potential_savings: f64,
    pub meta_metrics_json: String,
    pub ctv_metrics_json: String,
    pub recommendations_json: String,
    pub created_at: DateTime<Utc>,
}

impl WasteAnalysis {
    pub fn new(
        meta_campaign_id: String,
        ctv_campaign_id: String,
        figures: &WasteFigures,
        meta_metrics: &CampaignMetrics,
        ctv_metrics: &CampaignMetrics,
        recommendations: &[Recommendation],
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            meta_campaign_id,
            ctv_campaign_id,
            monthly_waste: figures.monthly_waste,
            annual_waste: figures.annual_waste,
            potential_savings: figures.potential_savings,
            meta_metrics_json: to_json(meta_metrics)?,
            ctv_metrics_json: to_json(ctv_metrics)?,
            recommendations_json: to_json(&recommendations)?,
            created_at: Utc::now(),
        })
    }

    pub fn figures(&self) -> WasteFigures {
        WasteFigures {
            monthly_waste: self.monthly_waste,
            annual_waste: self.annual_waste,
            potential_savings: self.potential_savings,
        }
    }

    pub fn meta_metrics(&self) -> Result<CampaignMetrics, DomainError> {
        from_json(&self.meta_metrics_json)
    }

    pub fn ctv_metrics(&self) -> Result<CampaignMetrics, DomainError> {
        from_json(&self.ctv_metrics_json)
    }

    pub fn recommendations(&self) -> Result<Vec<Recommendation>, DomainError> {
        from_json(&self.recommendations_json)
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, DomainError> {
    serde_json::to_string(value).map_err(|e| DomainError::Parse(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, DomainError> {
    serde_json::from_str(json).map_err(|e| DomainError::Parse(e.to_string()))
}
