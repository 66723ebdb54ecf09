//! Cross-channel waste and savings estimation.
//!
//! Compares the Meta channel against the CTV efficiency benchmark:
//! - `monthly_waste = max(0, (meta cpqc - ctv cpqc) * meta quality_cases)`
//! - `annual_waste = monthly_waste * 12`
//! - `potential_savings = max(0, meta spend * reallocation_fraction
//!   * (ctv roi - meta roi) / 100 * 12)`
//!
//! Waste is attributed only to the less-efficient channel, never credited in
//! reverse, so both figures are clamped at zero.

use crate::domain::entities::campaign::CampaignDraft;
use crate::domain::values::metrics::CampaignMetrics;
use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Configuration for the savings projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteConfig {
    /// Fraction of the Meta budget assumed reallocatable to the CTV ROI
    /// profile (0.0–1.0). Default: 0.6.
    pub reallocation_fraction: f64,
}

impl Default for WasteConfig {
    fn default() -> Self {
        Self {
            reallocation_fraction: 0.6,
        }
    }
}

/// Waste and savings estimate for one campaign pair. All figures are
/// non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasteFigures {
    pub monthly_waste: f64,
    pub annual_waste: f64,
    pub potential_savings: f64,
}

/// Estimate wasted spend on the Meta channel relative to the CTV benchmark.
pub fn compute_waste(
    meta: &CampaignDraft,
    meta_metrics: &CampaignMetrics,
    ctv_metrics: &CampaignMetrics,
    config: &WasteConfig,
) -> WasteFigures {
    let cost_per_quality_case_diff =
        meta_metrics.cost_per_quality_case - ctv_metrics.cost_per_quality_case;
    let monthly_waste = (cost_per_quality_case_diff * meta.quality_cases as f64).max(0.0);
    let annual_waste = monthly_waste * MONTHS_PER_YEAR;

    let potential_savings = (meta.monthly_spend * config.reallocation_fraction
        * (ctv_metrics.roi - meta_metrics.roi)
        / 100.0
        * MONTHS_PER_YEAR)
        .max(0.0);

    WasteFigures {
        monthly_waste,
        annual_waste,
        potential_savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::metrics::compute_metrics;
    use crate::domain::values::platform::Platform;

    fn draft(platform: Platform, spend: f64, quality_cases: u64, case_value: f64) -> CampaignDraft {
        CampaignDraft {
            name: format!("{platform} campaign"),
            platform,
            monthly_spend: spend,
            impressions: 1_000_000,
            clicks: (platform == Platform::Meta).then_some(10_000),
            brand_searches: (platform == Platform::Ctv).then_some(3_000),
            conversions: 100,
            quality_cases,
            average_case_value: case_value,
        }
    }

    #[test]
    fn test_reference_figures() {
        let meta = CampaignDraft {
            name: "Meta".into(),
            platform: Platform::Meta,
            monthly_spend: 25_000.0,
            impressions: 2_500_000,
            clicks: Some(12_500),
            brand_searches: None,
            conversions: 85,
            quality_cases: 12,
            average_case_value: 150_000.0,
        };
        let ctv = CampaignDraft {
            name: "CTV".into(),
            platform: Platform::Ctv,
            monthly_spend: 18_000.0,
            impressions: 1_800_000,
            clicks: None,
            brand_searches: Some(3_200),
            conversions: 156,
            quality_cases: 28,
            average_case_value: 285_000.0,
        };
        let meta_metrics = compute_metrics(&meta).unwrap();
        let ctv_metrics = compute_metrics(&ctv).unwrap();

        let figures = compute_waste(&meta, &meta_metrics, &ctv_metrics, &WasteConfig::default());

        // (25000/12 - 18000/28) * 12
        assert!((figures.monthly_waste - 17_285.714_286).abs() < 1e-3);
        assert!((figures.annual_waste - 207_428.571_429).abs() < 1e-3);
        assert!(figures.potential_savings > 0.0);
    }

    #[test]
    fn test_annual_is_twelve_monthlies() {
        let meta = draft(Platform::Meta, 20_000.0, 10, 50_000.0);
        let ctv = draft(Platform::Ctv, 10_000.0, 25, 80_000.0);
        let figures = compute_waste(
            &meta,
            &compute_metrics(&meta).unwrap(),
            &compute_metrics(&ctv).unwrap(),
            &WasteConfig::default(),
        );
        assert_eq!(figures.annual_waste, figures.monthly_waste * 12.0);
    }

    #[test]
    fn test_no_waste_when_meta_is_cheaper() {
        // Meta: 10k / 40 = 250 per quality case; CTV: 20k / 10 = 2000.
        let meta = draft(Platform::Meta, 10_000.0, 40, 90_000.0);
        let ctv = draft(Platform::Ctv, 20_000.0, 10, 50_000.0);
        let figures = compute_waste(
            &meta,
            &compute_metrics(&meta).unwrap(),
            &compute_metrics(&ctv).unwrap(),
            &WasteConfig::default(),
        );
        assert_eq!(figures.monthly_waste, 0.0);
        assert_eq!(figures.annual_waste, 0.0);
    }

    #[test]
    fn test_savings_clamped_when_meta_roi_higher() {
        // Meta converts into far more valuable cases, so reallocating toward
        // CTV would lose money; the projection clamps at zero.
        let meta = draft(Platform::Meta, 10_000.0, 30, 200_000.0);
        let ctv = draft(Platform::Ctv, 10_000.0, 30, 1_000.0);
        let figures = compute_waste(
            &meta,
            &compute_metrics(&meta).unwrap(),
            &compute_metrics(&ctv).unwrap(),
            &WasteConfig::default(),
        );
        assert_eq!(figures.potential_savings, 0.0);
    }

    #[test]
    fn test_reallocation_fraction_scales_savings() {
        let meta = draft(Platform::Meta, 20_000.0, 10, 50_000.0);
        let ctv = draft(Platform::Ctv, 10_000.0, 25, 80_000.0);
        let meta_metrics = compute_metrics(&meta).unwrap();
        let ctv_metrics = compute_metrics(&ctv).unwrap();

        let half = compute_waste(
            &meta,
            &meta_metrics,
            &ctv_metrics,
            &WasteConfig { reallocation_fraction: 0.3 },
        );
        let full = compute_waste(
            &meta,
            &meta_metrics,
            &ctv_metrics,
            &WasteConfig { reallocation_fraction: 0.6 },
        );
        assert!(full.potential_savings > 0.0);
        assert!((half.potential_savings * 2.0 - full.potential_savings).abs() < 1e-6);
    }
}
