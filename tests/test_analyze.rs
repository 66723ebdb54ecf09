mod common;

use common::{ctv_draft, meta_draft, setup};
use spendlens::application::analyze::AnalyzeRequest;
use spendlens::domain::error::DomainError;
use spendlens::domain::values::recommendation::RecommendationKind;

fn reference_request() -> AnalyzeRequest {
    AnalyzeRequest {
        meta_campaign: meta_draft(),
        ctv_campaign: ctv_draft(),
    }
}

#[test]
fn test_reference_pair_waste_figures() {
    let lens = setup();
    let report = lens.analyze(reference_request()).unwrap();

    assert!((report.meta_metrics.quality_rate - 14.12).abs() < 0.01);
    assert!((report.ctv_metrics.quality_rate - 17.95).abs() < 0.01);
    assert!((report.meta_metrics.cost_per_quality_case - 2_083.33).abs() < 0.01);
    assert!((report.ctv_metrics.cost_per_quality_case - 642.86).abs() < 0.01);

    assert!((report.monthly_waste - 17_285.71).abs() < 0.01);
    assert!((report.annual_waste - report.monthly_waste * 12.0).abs() < 1e-9);
    assert!(report.potential_savings > 0.0);
}

#[test]
fn test_analysis_is_persisted() {
    let lens = setup();
    let report = lens.analyze(reference_request()).unwrap();

    let analyses = lens.analyses(None).unwrap();
    assert_eq!(analyses.len(), 1);
    assert_eq!(analyses[0].id, report.analysis_id);

    let stored = lens.analysis_get(&report.analysis_id).unwrap();
    assert_eq!(stored.meta_metrics().unwrap(), report.meta_metrics);
    assert_eq!(stored.ctv_metrics().unwrap(), report.ctv_metrics);
    assert_eq!(stored.recommendations().unwrap(), report.recommendations);

    // Both campaigns were stored alongside the analysis.
    let campaigns = lens.campaigns(None, None).unwrap();
    assert_eq!(campaigns.len(), 2);
    assert!(campaigns.iter().any(|c| c.id == stored.meta_campaign_id));
    assert!(campaigns.iter().any(|c| c.id == stored.ctv_campaign_id));
}

#[test]
fn test_recommendations_for_lagging_meta() {
    let lens = setup();
    let report = lens.analyze(reference_request()).unwrap();

    // Both conditional rules fire, then the fixed tail.
    assert_eq!(report.recommendations.len(), 6);
    assert_eq!(report.recommendations[0].title, "Low-Quality Lead Volume");
    assert_eq!(report.recommendations[1].title, "High Cost Per Quality Case");
    assert_eq!(report.recommendations[2].title, "Poor Audience Precision");
    assert_eq!(report.recommendations[3].title, "Reallocate 60% to CTV");
    assert_eq!(
        report.recommendations[4].title,
        "Implement Cross-Channel Attribution"
    );
    assert_eq!(
        report.recommendations[5].title,
        "Behavioral Audience Targeting"
    );
    assert!(report.recommendations[..3]
        .iter()
        .all(|r| r.kind == RecommendationKind::Waste));
    assert!(report.recommendations[3..]
        .iter()
        .all(|r| r.kind == RecommendationKind::Opportunity));
}

#[test]
fn test_no_waste_when_meta_leads() {
    let lens = setup();
    let mut request = reference_request();
    // Meta now converts cheaply into many high-value cases.
    request.meta_campaign.quality_cases = 80;
    request.meta_campaign.average_case_value = 500_000.0;

    let report = lens.analyze(request).unwrap();
    assert_eq!(report.monthly_waste, 0.0);
    assert_eq!(report.annual_waste, 0.0);
    assert_eq!(report.potential_savings, 0.0);
    // Only the unconditional tail remains.
    assert_eq!(report.recommendations.len(), 4);
    assert_eq!(report.recommendations[0].title, "Poor Audience Precision");
}

#[test]
fn test_platform_mismatch_rejected() {
    let lens = setup();
    let request = AnalyzeRequest {
        meta_campaign: ctv_draft(),
        ctv_campaign: ctv_draft(),
    };

    assert!(matches!(
        lens.analyze(request),
        Err(DomainError::InvalidInput { field, .. }) if field == "meta_campaign.platform"
    ));
    assert!(lens.analyses(None).unwrap().is_empty());
}

#[test]
fn test_zero_conversions_is_undefined_metric() {
    let lens = setup();
    let mut request = reference_request();
    request.ctv_campaign.conversions = 0;

    assert!(matches!(
        lens.analyze(request),
        Err(DomainError::UndefinedMetric {
            denominator: "conversions",
            ..
        })
    ));
    // Nothing is persisted on a failed analysis.
    assert!(lens.campaigns(None, None).unwrap().is_empty());
}

#[test]
fn test_delete_analysis() {
    let lens = setup();
    let report = lens.analyze(reference_request()).unwrap();

    lens.analysis_delete(&report.analysis_id).unwrap();
    assert!(matches!(
        lens.analysis_get(&report.analysis_id),
        Err(DomainError::NotFound(_))
    ));
    assert!(matches!(
        lens.analysis_delete(&report.analysis_id),
        Err(DomainError::NotFound(_))
    ));
}

#[test]
fn test_stats_after_analysis() {
    let lens = setup();
    lens.analyze(reference_request()).unwrap();

    let stats = lens.stats().unwrap();
    assert_eq!(stats.campaigns.total_campaigns, 2);
    assert_eq!(stats.total_analyses, 1);
    assert!((stats.campaigns.total_monthly_spend - 43_000.0).abs() < 1e-9);
    assert!(stats
        .campaigns
        .by_platform
        .iter()
        .any(|(p, n)| p == "meta" && *n == 1));
    assert!(stats
        .campaigns
        .by_platform
        .iter()
        .any(|(p, n)| p == "ctv" && *n == 1));
}
