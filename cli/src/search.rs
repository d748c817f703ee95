use songgraph_core::{Recommendation, SongGraph};
use std::time::Instant;

use crate::args::Args;

pub struct SearchRequest {
    pub seed_keys: Vec<String>,
    /// Catalog track names of the matched seeds
    pub seed_names: Vec<String>,
    /// Seed names with no matching song
    pub unmatched: Vec<String>,
    pub search_args: Args,
}

pub struct SearchResult {
    pub recommendations: Vec<Recommendation>,
    pub seed_names: Vec<String>,
    pub unmatched: Vec<String>,
    pub search_duration: f64,
    pub display_options: Args,
}

pub fn create_search_request(args: Args, graph: &SongGraph) -> Result<SearchRequest, String> {
    let mut seed_keys = Vec::new();
    let mut seed_names = Vec::new();
    let mut unmatched = Vec::new();

    for name in &args.seeds {
        match graph.find_song(name) {
            Some(key) => {
                if seed_keys.iter().any(|seed| seed == key) {
                    continue;
                }
                let display_name = graph
                    .song(key)
                    .and_then(|song| song.metadata.track_name.clone())
                    .unwrap_or_else(|| name.clone());
                seed_keys.push(key.to_string());
                seed_names.push(display_name);
            }
            None => unmatched.push(name.clone()),
        }
    }

    if seed_keys.is_empty() {
        return Err(format!(
            "None of the given songs were found in the catalog: {}",
            quoted_list(&unmatched)
        ));
    }

    Ok(SearchRequest {
        seed_keys,
        seed_names,
        unmatched,
        search_args: args,
    })
}

pub fn execute_search(request: SearchRequest, graph: &SongGraph) -> SearchResult {
    let search_timer = Instant::now();
    let recommendations = graph.recommend(
        request.seed_keys.iter().map(String::as_str),
        request.search_args.limit,
    );

    SearchResult {
        recommendations,
        seed_names: request.seed_names,
        unmatched: request.unmatched,
        search_duration: search_timer.elapsed().as_secs_f64(),
        display_options: request.search_args,
    }
}

pub fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(", ")
}
