mod common;

use common::{ctv_draft, meta_draft, setup};
use spendlens::domain::error::DomainError;
use spendlens::domain::values::platform::Platform;

#[test]
fn test_add_and_get_campaign() {
    let lens = setup();
    let campaign = lens.campaign_add(meta_draft()).unwrap();

    assert_eq!(campaign.name, "Meta prospecting");
    assert_eq!(campaign.platform, Platform::Meta);

    let fetched = lens.campaign_get(&campaign.id).unwrap();
    assert_eq!(fetched, campaign);
}

#[test]
fn test_list_campaigns_by_platform() {
    let lens = setup();
    lens.campaign_add(meta_draft()).unwrap();
    lens.campaign_add(ctv_draft()).unwrap();

    let all = lens.campaigns(None, None).unwrap();
    assert_eq!(all.len(), 2);

    let ctv_only = lens.campaigns(Some(Platform::Ctv), None).unwrap();
    assert_eq!(ctv_only.len(), 1);
    assert_eq!(ctv_only[0].platform, Platform::Ctv);
}

#[test]
fn test_list_respects_limit() {
    let lens = setup();
    for i in 0..5 {
        let mut draft = meta_draft();
        draft.name = format!("Meta {i}");
        lens.campaign_add(draft).unwrap();
    }

    let limited = lens.campaigns(None, Some(3)).unwrap();
    assert_eq!(limited.len(), 3);
}

#[test]
fn test_delete_campaign() {
    let lens = setup();
    let campaign = lens.campaign_add(meta_draft()).unwrap();

    lens.campaign_delete(&campaign.id).unwrap();
    assert!(matches!(
        lens.campaign_get(&campaign.id),
        Err(DomainError::NotFound(_))
    ));
}

#[test]
fn test_delete_unknown_campaign_is_not_found() {
    let lens = setup();
    assert!(matches!(
        lens.campaign_delete("no-such-id"),
        Err(DomainError::NotFound(_))
    ));
}

#[test]
fn test_add_rejects_negative_spend() {
    let lens = setup();
    let mut draft = meta_draft();
    draft.monthly_spend = -100.0;

    assert!(matches!(
        lens.campaign_add(draft),
        Err(DomainError::InvalidInput { field, .. }) if field == "monthly_spend"
    ));
}

#[test]
fn test_add_rejects_missing_variant_counter() {
    let lens = setup();
    let mut draft = ctv_draft();
    draft.brand_searches = None;

    assert!(matches!(
        lens.campaign_add(draft),
        Err(DomainError::InvalidInput { field, .. }) if field == "brand_searches"
    ));
}
