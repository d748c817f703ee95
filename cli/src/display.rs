use songgraph_core::{EdgeConfig, Recommendation};

use crate::app::LoadedGraph;
use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult, quoted_list};
use crate::utils::format_number;

pub fn display_loading_info(args: &Args, colors: &ColorScheme) {
    println!("🎵 Loading songs from {}", colors.track_name(&args.catalog.display().to_string()));

    let defaults = EdgeConfig::default();

    if args.threshold != defaults.threshold {
        println!(
            "⚡ Connecting songs with similarity > {}",
            colors.number(&format!("{:.2}", args.threshold))
        );
    }

    if args.top_k != defaults.top_k {
        println!(
            "🔝 Keeping top {} similar songs per song",
            colors.number(&args.top_k.to_string())
        );
    }
}

pub fn display_graph_statistics(loaded: &LoadedGraph, colors: &ColorScheme) {
    let catalog = &loaded.catalog_stats;
    let build = &loaded.build_stats;

    println!(
        "{} Read {} rows: {} songs, {} duplicates, {} skipped",
        colors.stats("📊"),
        colors.number(&format_number(catalog.rows_read)),
        colors.number(&format_number(catalog.songs_added)),
        colors.number(&format_number(catalog.duplicate_rows)),
        colors.number(&format_number(catalog.skipped_rows))
    );
    println!(
        "{} Compared {} pairs, kept {} edges in {} sec",
        colors.stats("🕸️"),
        colors.number(&format_number(build.pairs_compared)),
        colors.number(&format_number(build.edges_added)),
        colors.number(&format!("{:.3}", build.duration_ms as f64 / 1000.0))
    );
}

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    let seeds = request
        .seed_names
        .iter()
        .map(|name| colors.track_name(&format!("\"{}\"", name)).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("🔍 Finding songs like {}", seeds);
}

pub fn display_unmatched(unmatched: &[String], colors: &ColorScheme) {
    if !unmatched.is_empty() {
        println!(
            "{} Not in catalog, ignored: {}",
            colors.warning("⚠️"),
            quoted_list(unmatched)
        );
    }
}

pub fn display_search_results(result: &SearchResult, colors: &ColorScheme) {
    let options = &result.display_options;

    if !options.quiet {
        display_unmatched(&result.unmatched, colors);
        println!("\nRecommended Songs:");
    }

    if result.recommendations.is_empty() {
        println!(
            "{} No similar songs found for {}",
            colors.error("❌"),
            quoted_list(&result.seed_names)
        );
    }

    for (position, recommendation) in result.recommendations.iter().enumerate() {
        println!("{}", format_recommendation(position, recommendation, colors));
    }

    if options.verbose {
        println!("\n---\n");
        println!(
            "{} Ranked {} recommendations in {} sec",
            colors.stats("📊"),
            colors.number(&result.recommendations.len().to_string()),
            colors.number(&format!("{:.3}", result.search_duration))
        );
    }
}

pub fn format_recommendation(position: usize, recommendation: &Recommendation, colors: &ColorScheme) -> String {
    format!(
        "{} {} by {} (score: {})",
        colors.rank(&format!("{}.", position + 1)),
        colors.track_name(&format!("\"{}\"", recommendation.track_name)),
        colors.artist(&recommendation.artists),
        colors.score(&format!("{:.3}", recommendation.score))
    )
}
