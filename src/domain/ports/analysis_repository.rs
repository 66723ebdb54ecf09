use crate::domain::entities::analysis::WasteAnalysis;
use crate::domain::error::DomainError;

pub trait AnalysisRepository: Send + Sync {
    fn add(&self, analysis: &WasteAnalysis) -> Result<(), DomainError>;
    fn get(&self, id: &str) -> Result<Option<WasteAnalysis>, DomainError>;
    fn list(&self, limit: Option<usize>) -> Result<Vec<WasteAnalysis>, DomainError>;
    fn delete(&self, id: &str) -> Result<(), DomainError>;
    fn count(&self) -> Result<usize, DomainError>;
}
