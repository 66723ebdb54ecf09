//! Shared test helpers.

use spendlens::domain::entities::campaign::CampaignDraft;
use spendlens::domain::values::platform::Platform;
use spendlens::SpendLens;

pub fn setup() -> SpendLens {
    SpendLens::new(":memory:").unwrap()
}

/// Meta side of the reference campaign pair.
pub fn meta_draft() -> CampaignDraft {
    CampaignDraft {
        name: "Meta prospecting".into(),
        platform: Platform::Meta,
        monthly_spend: 25_000.0,
        impressions: 2_500_000,
        clicks: Some(12_500),
        brand_searches: None,
        conversions: 85,
        quality_cases: 12,
        average_case_value: 150_000.0,
    }
}

/// CTV side of the reference campaign pair.
pub fn ctv_draft() -> CampaignDraft {
    CampaignDraft {
        name: "CTV brand response".into(),
        platform: Platform::Ctv,
        monthly_spend: 18_000.0,
        impressions: 1_800_000,
        clicks: None,
        brand_searches: Some(3_200),
        conversions: 156,
        quality_cases: 28,
        average_case_value: 285_000.0,
    }
}
