pub mod analysis_repository;
pub mod campaign_repository;
