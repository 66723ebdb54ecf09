use crate::domain::entities::analysis::WasteAnalysis;
use crate::domain::entities::campaign::Campaign;
use crate::domain::error::DomainError;
use crate::domain::ports::analysis_repository::AnalysisRepository;
use crate::domain::ports::campaign_repository::CampaignRepository;
use std::sync::Arc;

/// Rebuilds the side-by-side comparison report for a stored analysis.
///
/// Row set, cell formatting, and CSV quoting are fixed; existing consumers
/// diff exported reports, so the layout must stay byte-stable.
pub struct ReportUseCase {
    campaigns: Arc<dyn CampaignRepository>,
    analyses: Arc<dyn AnalysisRepository>,
}

impl ReportUseCase {
    pub fn new(
        campaigns: Arc<dyn CampaignRepository>,
        analyses: Arc<dyn AnalysisRepository>,
    ) -> Self {
        Self {
            campaigns,
            analyses,
        }
    }

    pub fn export(&self, analysis_id: &str, format: &str) -> Result<String, DomainError> {
        match format {
            "csv" => {
                let analysis = self
                    .analyses
                    .get(analysis_id)?
                    .ok_or_else(|| DomainError::NotFound(format!("Analysis not found: {analysis_id}")))?;
                let meta = self.campaign(&analysis.meta_campaign_id)?;
                let ctv = self.campaign(&analysis.ctv_campaign_id)?;
                let rows = comparison_table(&meta, &ctv, &analysis)?;
                Ok(render_csv(&rows))
            }
            _ => Err(DomainError::invalid_input(
                "format",
                "unsupported export format",
            )),
        }
    }

    fn campaign(&self, id: &str) -> Result<Campaign, DomainError> {
        self.campaigns
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Campaign not found: {id}")))
    }
}

/// Build the comparison table: header, four metric rows, a blank separator,
/// then the waste figures in the Meta column.
pub fn comparison_table(
    meta: &Campaign,
    ctv: &Campaign,
    analysis: &WasteAnalysis,
) -> Result<Vec<Vec<String>>, DomainError> {
    let meta_metrics = analysis.meta_metrics()?;
    let ctv_metrics = analysis.ctv_metrics()?;
    let figures = analysis.figures();

    let row = |cells: [String; 4]| cells.to_vec();
    Ok(vec![
        row(["Metric".into(), "Meta".into(), "CTV".into(), "Difference".into()]),
        row([
            "Monthly Spend".into(),
            format!("{}", meta.monthly_spend),
            format!("{}", ctv.monthly_spend),
            String::new(),
        ]),
        row([
            "Cost Per Impression".into(),
            format!("{:.4}", meta_metrics.cost_per_impression),
            format!("{:.4}", ctv_metrics.cost_per_impression),
            String::new(),
        ]),
        row([
            "Quality Case Rate".into(),
            format!("{:.1}%", meta_metrics.quality_rate),
            format!("{:.1}%", ctv_metrics.quality_rate),
            String::new(),
        ]),
        row([
            "ROI".into(),
            format!("{:.1}%", meta_metrics.roi),
            format!("{:.1}%", ctv_metrics.roi),
            String::new(),
        ]),
        row([String::new(), String::new(), String::new(), String::new()]),
        row([
            "Monthly Waste".into(),
            format!("${:.2}", figures.monthly_waste),
            String::new(),
            String::new(),
        ]),
        row([
            "Annual Waste".into(),
            format!("${:.2}", figures.annual_waste),
            String::new(),
            String::new(),
        ]),
        row([
            "Potential Savings".into(),
            format!("${:.2}", figures.potential_savings),
            String::new(),
            String::new(),
        ]),
    ])
}

/// Render rows as CSV. Cells containing commas, quotes, or newlines are
/// wrapped in quotes with embedded quotes doubled.
pub fn render_csv(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| escape_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_cells_untouched() {
        assert_eq!(escape_cell("Monthly Spend"), "Monthly Spend");
        assert_eq!(escape_cell("$17285.71"), "$17285.71");
    }

    #[test]
    fn test_comma_cell_quoted() {
        assert_eq!(escape_cell("Acme, Inc"), "\"Acme, Inc\"");
    }

    #[test]
    fn test_quote_cell_doubled() {
        assert_eq!(escape_cell("the \"Q3\" push"), "\"the \"\"Q3\"\" push\"");
    }

    #[test]
    fn test_newline_cell_quoted() {
        assert_eq!(escape_cell("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_render_joins_rows_and_cells() {
        let rows = vec![
            vec!["Metric".to_string(), "Meta".to_string()],
            vec!["Monthly Spend".to_string(), "25000".to_string()],
        ];
        assert_eq!(render_csv(&rows), "Metric,Meta\nMonthly Spend,25000");
    }
}
