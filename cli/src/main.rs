use clap::Parser;
use songgraph::colors::ColorScheme;
use songgraph::display::{
    display_graph_statistics, display_loading_info, display_search_info, display_search_results,
};
use songgraph::json_output::{create_json_output, print_json_output};
use songgraph::logging::init_logging;
use songgraph::{Args, LoadedGraph, SongGraphApp, create_search_request, execute_search};
use songgraph_core::EdgeConfig;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color && !args.json);

    let loaded = match load_graph(&args, &colors) {
        Ok(loaded) => loaded,
        Err(error_message) => exit_with_error(&colors, &error_message),
    };

    let show_progress = !args.json && !args.quiet;
    if show_progress && args.verbose {
        display_graph_statistics(&loaded, &colors);
    }

    let search_request = match create_search_request(args, &loaded.graph) {
        Ok(request) => request,
        Err(error_message) => exit_with_error(&colors, &error_message),
    };

    if show_progress {
        display_search_info(&search_request, &colors);
    }

    let json_mode = search_request.search_args.json;
    let search_result = execute_search(search_request, &loaded.graph);

    if json_mode {
        let json_output = create_json_output(search_result, &loaded);
        print_json_output(&json_output);
    } else {
        display_search_results(&search_result, &colors);
    }
}

fn load_graph(args: &Args, colors: &ColorScheme) -> Result<LoadedGraph, String> {
    if !args.json && !args.quiet {
        display_loading_info(args, colors);
    }

    let app = SongGraphApp::new(args.catalog.clone()).map_err(|e| e.to_string())?;
    app.load_graph(&EdgeConfig::new(args.threshold, args.top_k))
        .map_err(|e| e.to_string())
}

fn exit_with_error(colors: &ColorScheme, error_message: &str) -> ! {
    eprintln!("{} {}", colors.error("❌ Error:"), error_message);
    std::process::exit(1);
}
