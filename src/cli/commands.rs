use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spendlens", about = "Cross-channel ad spend efficiency and waste analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a campaign
    CampaignAdd {
        /// JSON data with name, platform (meta, ctv), monthly_spend, impressions,
        /// clicks or brand_searches, conversions, quality_cases, average_case_value
        json: String,
    },
    /// List campaigns
    Campaigns {
        /// Optional platform filter (meta, ctv)
        #[arg(long)]
        platform: Option<String>,
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Show a campaign
    CampaignGet {
        /// Campaign ID
        id: String,
    },
    /// Delete a campaign
    CampaignDelete {
        /// Campaign ID
        id: String,
    },
    /// Analyze a campaign pair and store the result
    Analyze {
        /// JSON with meta_campaign and ctv_campaign objects
        json: String,
    },
    /// List stored analyses
    Analyses {
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Show a stored analysis
    AnalysisGet {
        /// Analysis ID
        id: String,
    },
    /// Delete a stored analysis
    AnalysisDelete {
        /// Analysis ID
        id: String,
    },
    /// Export an analysis as a comparison report
    Export {
        /// Analysis ID
        id: String,
        /// Output format (csv)
        #[arg(long, default_value = "csv")]
        format: String,
    },
    /// Show store statistics
    Stats,
}
