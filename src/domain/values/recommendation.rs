//! Budget optimization recommendations.
//!
//! A fixed rule engine: two conditional waste findings, then four
//! unconditional records, appended in a fixed order so output is
//! deterministic and comparable across runs.

use crate::domain::values::metrics::CampaignMetrics;
use crate::domain::values::waste::WasteFigures;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Divisor turning annual savings into the whole-thousands figure quoted in
/// the reallocation recommendation. Display scaling only; kept exactly for
/// output compatibility with existing reports.
pub const SAVINGS_DISPLAY_DIVISOR: f64 = 12_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Waste,
    Opportunity,
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationKind::Waste => write!(f, "waste"),
            RecommendationKind::Opportunity => write!(f, "opportunity"),
        }
    }
}

impl FromStr for RecommendationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "waste" => Ok(RecommendationKind::Waste),
            "opportunity" => Ok(RecommendationKind::Opportunity),
            _ => Err(format!("Unknown recommendation kind: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
}

impl Recommendation {
    fn waste(title: &str, description: String) -> Self {
        Self {
            kind: RecommendationKind::Waste,
            title: title.to_string(),
            description,
        }
    }

    fn opportunity(title: &str, description: String) -> Self {
        Self {
            kind: RecommendationKind::Opportunity,
            title: title.to_string(),
            description,
        }
    }
}

/// Generate the recommendation list for an analyzed campaign pair.
pub fn generate_recommendations(
    meta: &CampaignMetrics,
    ctv: &CampaignMetrics,
    figures: &WasteFigures,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if meta.quality_rate < ctv.quality_rate {
        recommendations.push(Recommendation::waste(
            "Low-Quality Lead Volume",
            format!(
                "{:.1}% of Meta conversions are low-value cases",
                100.0 - meta.quality_rate
            ),
        ));
    }

    if meta.cost_per_quality_case > ctv.cost_per_quality_case {
        recommendations.push(Recommendation::waste(
            "High Cost Per Quality Case",
            format!(
                "${:.0} vs ${:.0} for CTV campaigns",
                meta.cost_per_quality_case, ctv.cost_per_quality_case
            ),
        ));
    }

    recommendations.push(Recommendation::waste(
        "Poor Audience Precision",
        "Broad targeting lacks behavioral intent signals".to_string(),
    ));

    let savings_thousands = (figures.potential_savings / SAVINGS_DISPLAY_DIVISOR).round() as i64;
    recommendations.push(Recommendation::opportunity(
        "Reallocate 60% to CTV",
        format!("Potential ${savings_thousands}K annual savings with better targeting"),
    ));

    recommendations.push(Recommendation::opportunity(
        "Implement Cross-Channel Attribution",
        "Track CTV influence on search conversions".to_string(),
    ));

    recommendations.push(Recommendation::opportunity(
        "Behavioral Audience Targeting",
        "Reach high-value prospects before they search".to_string(),
    ));

    recommendations
}
