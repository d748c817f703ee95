use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "songgraph")]
#[command(about = "Recommend songs that sound like the ones you already love")]
pub struct Args {
    /// Seed song names (case-insensitive)
    #[arg(required = true, value_name = "SONG")]
    pub seeds: Vec<String>,

    /// Song catalog CSV with audio features
    #[arg(short, long, env = "SONGGRAPH_CATALOG", default_value = "data/spotify_songs.csv")]
    pub catalog: PathBuf,

    /// Number of recommendations (1-10)
    #[arg(short = 'n', long, value_name = "COUNT", default_value = "5", value_parser = parse_limit)]
    pub limit: usize,

    /// Only connect songs with similarity above threshold (0.0-1.0)
    #[arg(short = 'm', long, value_name = "SIMILARITY", default_value = "0.3")]
    pub threshold: f64,

    /// Keep the top N most similar songs from each song's pass
    #[arg(short = 't', long, value_name = "COUNT", default_value = "20")]
    pub top_k: usize,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show catalog and graph statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only print the recommendations
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_limit(value: &str) -> Result<usize, String> {
    let limit: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if (1..=10).contains(&limit) {
        Ok(limit)
    } else {
        Err("must be between 1 and 10".to_string())
    }
}
