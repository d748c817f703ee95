use serde::{Deserialize, Serialize};

use crate::app::LoadedGraph;
use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub seeds: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub unmatched: Vec<String>,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub limit: usize,
    pub threshold: f64,
    pub top_k: usize,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    pub recommendations: Vec<JsonRecommendation>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonRecommendation {
    pub track: String,
    pub artist: String,
    pub album: String,
    pub score: f64,
    pub popularity: f64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub songs: usize,
    pub edges: usize,
    pub build_time_ms: u64,
    pub search_time_ms: u64,
}

pub fn create_json_output(result: SearchResult, loaded: &LoadedGraph) -> JsonOutput {
    let options = &result.display_options;

    let recommendations: Vec<JsonRecommendation> = result
        .recommendations
        .into_iter()
        .map(|recommendation| JsonRecommendation {
            track: recommendation.track_name,
            artist: recommendation.artists,
            album: recommendation.album_name,
            score: recommendation.score,
            popularity: recommendation.popularity,
        })
        .collect();

    JsonOutput {
        query: JsonQuery {
            seeds: result.seed_names,
            unmatched: result.unmatched,
            options: JsonOptions {
                limit: options.limit,
                threshold: options.threshold,
                top_k: options.top_k,
            },
        },
        result: JsonResult {
            found: !recommendations.is_empty(),
            recommendations,
        },
        stats: JsonStats {
            songs: loaded.graph.len(),
            edges: loaded.graph.edge_count(),
            build_time_ms: loaded.build_stats.duration_ms,
            search_time_ms: (result.search_duration * 1000.0) as u64,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
