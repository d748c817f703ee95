use std::{error::Error, path::PathBuf};

use songgraph_core::{BuildStats, EdgeConfig, FeatureConfiguration, SongGraph};

use crate::catalog::{CatalogStats, load_catalog};

pub struct SongGraphApp {
    pub catalog_path: PathBuf,
}

pub struct LoadedGraph {
    pub graph: SongGraph,
    pub catalog_stats: CatalogStats,
    pub build_stats: BuildStats,
}

impl SongGraphApp {
    pub fn new(catalog_path: PathBuf) -> Result<Self, Box<dyn Error>> {
        if !catalog_path.exists() {
            return Err(format!(
                "Catalog not found: {:?}. Pass --catalog or set SONGGRAPH_CATALOG",
                catalog_path
            )
            .into());
        }

        Ok(Self { catalog_path })
    }

    /// Load every catalog row and run the full similarity pass. Queries are
    /// only possible once this returns.
    pub fn load_graph(&self, edge_config: &EdgeConfig) -> Result<LoadedGraph, Box<dyn Error>> {
        let catalog = load_catalog(&self.catalog_path, FeatureConfiguration::spotify())?;
        let (graph, build_stats) = catalog.builder.build_edges(edge_config)?;

        Ok(LoadedGraph {
            graph,
            catalog_stats: catalog.stats,
            build_stats,
        })
    }
}
