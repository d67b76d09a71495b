mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use otfstats::config::Config;
use otfstats::services::{InStudioWorkouts, OtfClient};

/// Orangetheory class history stats
#[derive(Parser)]
#[command(name = "otfstats")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print class summary and class counts (default)
    Report(ReportArgs),

    /// Fetch workout history and save it as CSV
    Export {
        /// Output file
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct ReportArgs {
    /// Read workouts from a CSV export instead of the API
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Group coaches by full name instead of first name
    #[arg(long)]
    full_names: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            None => run_report(ReportArgs::default()),
            Some(Commands::Report(args)) => run_report(args),
            Some(Commands::Export { path }) => {
                let client = login()?;
                let workouts = client.in_studio_workouts()?;
                workouts.export_csv(&path)?;
                println!("Exported {} workouts to {}", workouts.len(), path.display());
                Ok(())
            }
        }
    }
}

fn login() -> anyhow::Result<OtfClient> {
    let config = Config::from_env()?;
    Ok(OtfClient::login(&config)?)
}

fn run_report(args: ReportArgs) -> anyhow::Result<()> {
    let (member, workouts) = match &args.csv {
        Some(path) => (None, InStudioWorkouts::from_csv_path(path)?),
        None => {
            let client = login()?;
            let member = client.member()?;
            (Some(member), client.in_studio_workouts()?)
        }
    };

    let report = report::Report::build(member.as_ref(), &workouts, !args.full_names)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
