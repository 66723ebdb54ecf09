//! Per-campaign efficiency metrics.
//!
//! Normalizes one campaign's raw counters into per-unit cost, quality, and
//! return figures:
//! - `cost_per_impression = spend / impressions`
//! - `cost_per_conversion = spend / conversions`
//! - `quality_rate = 100 * quality_cases / conversions`
//! - `cost_per_quality_case = spend / quality_cases`
//! - `roi = 100 * (quality_cases * average_case_value - spend) / spend`
//!
//! A zero denominator is rejected up front with
//! [`DomainError::UndefinedMetric`] rather than producing a non-finite
//! float. The variant-specific reach cost (per click on Meta, per brand
//! search on CTV) is the one exception: a zero counter yields `None`,
//! meaning the figure is unavailable.

use crate::domain::entities::campaign::CampaignDraft;
use crate::domain::error::DomainError;
use crate::domain::values::platform::Platform;
use serde::{Deserialize, Serialize};

/// Cost of one unit of reach, named per platform: Meta campaigns are priced
/// per click, CTV campaigns per brand search. The tag keeps each field legal
/// only for its own platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum ReachCost {
    Meta { cost_per_click: Option<f64> },
    Ctv { cost_per_brand_search: Option<f64> },
}

impl ReachCost {
    pub fn platform(&self) -> Platform {
        match self {
            ReachCost::Meta { .. } => Platform::Meta,
            ReachCost::Ctv { .. } => Platform::Ctv,
        }
    }

    /// The cost figure itself, `None` when the reach counter was zero.
    pub fn value(&self) -> Option<f64> {
        match self {
            ReachCost::Meta { cost_per_click } => *cost_per_click,
            ReachCost::Ctv {
                cost_per_brand_search,
            } => *cost_per_brand_search,
        }
    }
}

/// Derived efficiency metrics for a single campaign. Pure function of the
/// input figures; computed on demand and never treated as authoritative
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub cost_per_impression: f64,
    #[serde(flatten)]
    pub reach_cost: ReachCost,
    pub cost_per_conversion: f64,
    /// Share of conversions that were quality cases, as a percentage.
    pub quality_rate: f64,
    pub cost_per_quality_case: f64,
    /// Return on investment as a percentage of spend.
    pub roi: f64,
}

/// Compute efficiency metrics for one campaign.
///
/// # Errors
/// [`DomainError::UndefinedMetric`] when impressions, conversions, quality
/// cases, or spend is zero, naming the first metric that would be undefined.
pub fn compute_metrics(campaign: &CampaignDraft) -> Result<CampaignMetrics, DomainError> {
    if campaign.impressions == 0 {
        return Err(DomainError::UndefinedMetric {
            metric: "cost_per_impression",
            denominator: "impressions",
        });
    }
    if campaign.conversions == 0 {
        return Err(DomainError::UndefinedMetric {
            metric: "quality_rate",
            denominator: "conversions",
        });
    }
    if campaign.quality_cases == 0 {
        return Err(DomainError::UndefinedMetric {
            metric: "cost_per_quality_case",
            denominator: "quality_cases",
        });
    }
    if campaign.monthly_spend == 0.0 {
        return Err(DomainError::UndefinedMetric {
            metric: "roi",
            denominator: "monthly_spend",
        });
    }

    let spend = campaign.monthly_spend;
    let cost_per_impression = spend / campaign.impressions as f64;
    let cost_per_conversion = spend / campaign.conversions as f64;
    let quality_rate = campaign.quality_cases as f64 / campaign.conversions as f64 * 100.0;
    let cost_per_quality_case = spend / campaign.quality_cases as f64;
    let revenue = campaign.quality_cases as f64 * campaign.average_case_value;
    let roi = (revenue - spend) / spend * 100.0;

    let unit_cost = |count: Option<u64>| match count {
        Some(n) if n > 0 => Some(spend / n as f64),
        _ => None,
    };
    let reach_cost = match campaign.platform {
        Platform::Meta => ReachCost::Meta {
            cost_per_click: unit_cost(campaign.clicks),
        },
        Platform::Ctv => ReachCost::Ctv {
            cost_per_brand_search: unit_cost(campaign.brand_searches),
        },
    };

    Ok(CampaignMetrics {
        cost_per_impression,
        reach_cost,
        cost_per_conversion,
        quality_rate,
        cost_per_quality_case,
        roi,
    })
}
