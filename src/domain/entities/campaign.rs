use crate::domain::error::DomainError;
use crate::domain::values::platform::Platform;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw monthly figures for one channel's campaign, as entered by the user.
/// Counter fields are unsigned so negative counts are unrepresentable;
/// currency fields are validated in [`CampaignDraft::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub name: String,
    pub platform: Platform,
    pub monthly_spend: f64,
    pub impressions: u64,
    #[serde(default)]
    pub clicks: Option<u64>,
    #[serde(default)]
    pub brand_searches: Option<u64>,
    pub conversions: u64,
    /// Conversions deemed high-value downstream. Conceptually at most
    /// `conversions`; not enforced.
    pub quality_cases: u64,
    pub average_case_value: f64,
}

impl CampaignDraft {
    /// Check field-level validity before any computation: currency amounts
    /// must be finite and non-negative, and the platform's reach counter
    /// must be present (clicks on Meta, brand searches on CTV).
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_input("name", "must not be empty"));
        }
        validate_amount("monthly_spend", self.monthly_spend)?;
        validate_amount("average_case_value", self.average_case_value)?;

        match self.platform {
            Platform::Meta => {
                if self.clicks.is_none() {
                    return Err(DomainError::invalid_input(
                        "clicks",
                        "required for meta campaigns",
                    ));
                }
            }
            Platform::Ctv => {
                if self.brand_searches.is_none() {
                    return Err(DomainError::invalid_input(
                        "brand_searches",
                        "required for ctv campaigns",
                    ));
                }
            }
        }
        Ok(())
    }
}

fn validate_amount(field: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::invalid_input(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(DomainError::invalid_input(field, "must not be negative"));
    }
    Ok(())
}

/// A stored campaign: the draft figures plus identity and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub monthly_spend: f64,
    pub impressions: u64,
    pub clicks: Option<u64>,
    pub brand_searches: Option<u64>,
    pub conversions: u64,
    pub quality_cases: u64,
    pub average_case_value: f64,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    pub fn new(draft: CampaignDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            platform: draft.platform,
            monthly_spend: draft.monthly_spend,
            impressions: draft.impressions,
            clicks: draft.clicks,
            brand_searches: draft.brand_searches,
            conversions: draft.conversions,
            quality_cases: draft.quality_cases,
            average_case_value: draft.average_case_value,
            created_at: Utc::now(),
        }
    }

    pub fn draft(&self) -> CampaignDraft {
        CampaignDraft {
            name: self.name.clone(),
            platform: self.platform,
            monthly_spend: self.monthly_spend,
            impressions: self.impressions,
            clicks: self.clicks,
            brand_searches: self.brand_searches,
            conversions: self.conversions,
            quality_cases: self.quality_cases,
            average_case_value: self.average_case_value,
        }
    }
}
