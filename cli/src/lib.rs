pub mod app;
pub mod args;
pub mod catalog;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::{LoadedGraph, SongGraphApp};
pub use args::Args;
pub use catalog::{Catalog, CatalogError, CatalogStats, load_catalog, read_catalog};
pub use search::{SearchRequest, SearchResult, create_search_request, execute_search};
pub use utils::format_number;
