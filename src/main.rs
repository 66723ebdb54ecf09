use clap::Parser;
use spendlens::application::analyze::AnalyzeRequest;
use spendlens::cli::commands::{Cli, Commands};
use spendlens::domain::entities::campaign::CampaignDraft;
use spendlens::domain::values::platform::Platform;
use spendlens::SpendLens;

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let db_path = std::env::var("SPENDLENS_DB").unwrap_or_else(|_| "./spendlens.db".into());

    let lens = match SpendLens::new(&db_path) {
        Ok(lens) => lens,
        Err(e) => {
            eprintln!("Error initializing SpendLens: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(lens, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(lens: SpendLens, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::CampaignAdd { json } => {
            let draft: CampaignDraft = serde_json::from_str(&json)?;
            let campaign = lens.campaign_add(draft)?;
            println!("{}", serde_json::to_string_pretty(&campaign).unwrap());
        }
        Commands::Campaigns { platform, limit } => {
            let platform: Option<Platform> = platform
                .map(|p| p.parse())
                .transpose()
                .map_err(|e: String| e)?;
            let campaigns = lens.campaigns(platform, Some(limit))?;
            println!("{}", serde_json::to_string_pretty(&campaigns).unwrap());
        }
        Commands::CampaignGet { id } => {
            let campaign = lens.campaign_get(&id)?;
            println!("{}", serde_json::to_string_pretty(&campaign).unwrap());
        }
        Commands::CampaignDelete { id } => {
            lens.campaign_delete(&id)?;
            println!("Campaign {id} deleted");
        }
        Commands::Analyze { json } => {
            let request: AnalyzeRequest = serde_json::from_str(&json)?;
            let report = lens.analyze(request)?;
            println!("{}", serde_json::to_string_pretty(&report).unwrap());
        }
        Commands::Analyses { limit } => {
            let analyses = lens.analyses(Some(limit))?;
            println!("{}", serde_json::to_string_pretty(&analyses).unwrap());
        }
        Commands::AnalysisGet { id } => {
            let analysis = lens.analysis_get(&id)?;
            println!("{}", serde_json::to_string_pretty(&analysis).unwrap());
        }
        Commands::AnalysisDelete { id } => {
            lens.analysis_delete(&id)?;
            println!("Analysis {id} deleted");
        }
        Commands::Export { id, format } => {
            let report = lens.export(&id, &format)?;
            println!("{report}");
        }
        Commands::Stats => {
            let stats = lens.stats()?;
            println!("{}", serde_json::to_string_pretty(&stats).unwrap());
        }
    }
    Ok(())
}
