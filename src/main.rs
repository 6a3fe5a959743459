use clap::{Parser, Subcommand};

use roas_cli::calculator::DealTerms;
use roas_cli::channel::VideoType;
use roas_cli::commands;
use roas_cli::config::load_env;

#[derive(Parser)]
#[command(name = "roas-cli")]
#[command(about = "Estimate sponsorship value and ROAS from YouTube channel statistics")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a channel's average views over a recency window
    Analyze {
        /// Channel URL (e.g., https://youtube.com/@CHANNEL or a /channel/ URL)
        channel: String,

        /// Skip videos newer than this many months
        #[arg(short = 's', long, default_value = "3")]
        skip_months: u32,

        /// Number of videos to include (default: 24)
        #[arg(short = 'n', long, default_value = "24")]
        count: usize,

        /// Content stream to analyze
        #[arg(short = 't', long, value_enum, default_value = "long")]
        video_type: VideoType,

        /// Output the full report as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Average manually entered view counts (one per line)
    Views {
        /// File with newline-separated view counts (reads stdin if omitted)
        file: Option<String>,
    },

    /// Estimate ROAS for a quoted sponsorship deal
    Roas {
        /// Average views per video
        #[arg(short = 'v', long)]
        avg_views: f64,

        /// Creator's asking price in dollars
        #[arg(short, long)]
        quote: f64,

        /// Number of 15s integration spots
        #[arg(short, long, default_value = "0")]
        integrations: u32,

        /// Number of full videos (shorts count with --video-type shorts)
        #[arg(short, long, default_value = "0")]
        full: u32,

        /// Add a 5% commission on sales to the cost
        #[arg(short, long)]
        commission: bool,

        /// Content format being sponsored
        #[arg(short = 't', long, value_enum, default_value = "long")]
        video_type: VideoType,
    },

    /// Find the maximum quote that still clears the target ROAS
    Budget {
        /// Average views per video
        #[arg(short = 'v', long)]
        avg_views: f64,

        /// Number of 15s integration spots
        #[arg(short, long, default_value = "0")]
        integrations: u32,

        /// Number of full videos (shorts count with --video-type shorts)
        #[arg(short, long, default_value = "0")]
        full: u32,

        /// Assume a 5% commission comes out of the budget
        #[arg(short, long)]
        commission: bool,

        /// Content format being sponsored
        #[arg(short = 't', long, value_enum, default_value = "long")]
        video_type: VideoType,
    },

    /// Initialize with a YouTube Data API key
    Init {
        /// YouTube Data API key
        #[arg(short = 'k', long)]
        api_key: Option<String>,

        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables
    load_env();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            channel,
            skip_months,
            count,
            video_type,
            json,
        } => commands::analyze::run(&channel, skip_months, count, video_type, json).await,
        Commands::Views { file } => commands::views::run(file.as_deref()),
        Commands::Roas {
            avg_views,
            quote,
            integrations,
            full,
            commission,
            video_type,
        } => {
            let terms = DealTerms {
                average_views: avg_views,
                integration_count: integrations,
                full_count: full,
                video_type,
                commission,
            };
            commands::roas::run(&terms, quote)
        }
        Commands::Budget {
            avg_views,
            integrations,
            full,
            commission,
            video_type,
        } => {
            let terms = DealTerms {
                average_views: avg_views,
                integration_count: integrations,
                full_count: full,
                video_type,
                commission,
            };
            commands::budget::run(&terms)
        }
        Commands::Init { api_key, force } => commands::init::run(api_key, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
