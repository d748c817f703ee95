mod builder;

pub use builder::{BuildStats, SongGraphBuilder};

use crate::error::{GraphError, Result};
use crate::feature_config::FeatureConfiguration;
use crate::similarity::{Song, similarity};
use crate::string_normalization::clean_str;
use rustc_hash::FxHashMap;

pub(crate) struct Vertex {
    pub(crate) song: Song,
    /// Neighbor vertex index -> similarity weight
    pub(crate) neighbors: FxHashMap<usize, f64>,
}

impl Vertex {
    fn new(song: Song) -> Self {
        Self {
            song,
            neighbors: FxHashMap::default(),
        }
    }
}

/// Read-only song similarity graph.
///
/// Vertices live in an arena indexed by insertion order. Each vertex maps
/// neighbor indices to the weight shared by both endpoints of the edge.
/// Nothing mutates the graph after construction, so it can be shared
/// across threads and queried concurrently.
pub struct SongGraph {
    config: FeatureConfiguration,
    pub(crate) vertices: Vec<Vertex>,
    index: FxHashMap<String, usize>,
    track_lookup: FxHashMap<String, usize>,
}

impl SongGraph {
    fn from_vertices(
        config: FeatureConfiguration,
        vertices: Vec<Vertex>,
        index: FxHashMap<String, usize>,
    ) -> Self {
        let track_lookup = build_track_lookup(&vertices);
        Self {
            config,
            vertices,
            index,
            track_lookup,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn feature_configuration(&self) -> &FeatureConfiguration {
        &self.config
    }

    /// Song keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(|vertex| vertex.song.key.as_str())
    }

    pub fn song(&self, key: &str) -> Option<&Song> {
        self.vertex_index(key).map(|idx| &self.vertices[idx].song)
    }

    /// Neighbors of `key` as (neighbor key, weight). Empty for unknown keys.
    pub fn neighbors(&self, key: &str) -> Vec<(&str, f64)> {
        let Some(idx) = self.vertex_index(key) else {
            return vec![];
        };

        let mut neighbors: Vec<(usize, f64)> = self.vertices[idx]
            .neighbors
            .iter()
            .map(|(&neighbor, &weight)| (neighbor, weight))
            .collect();
        neighbors.sort_by_key(|(neighbor, _)| *neighbor);

        neighbors
            .into_iter()
            .map(|(neighbor, weight)| (self.vertices[neighbor].song.key.as_str(), weight))
            .collect()
    }

    pub fn neighbor_count(&self, key: &str) -> usize {
        self.vertex_index(key)
            .map_or(0, |idx| self.vertices[idx].neighbors.len())
    }

    pub fn neighbor_weight(&self, key: &str, neighbor_key: &str) -> Option<f64> {
        let idx = self.vertex_index(key)?;
        let neighbor_idx = self.vertex_index(neighbor_key)?;
        self.vertices[idx].neighbors.get(&neighbor_idx).copied()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        let directed: usize = self.vertices.iter().map(|vertex| vertex.neighbors.len()).sum();
        directed / 2
    }

    pub fn similarity_score(&self, first_key: &str, second_key: &str) -> Result<f64> {
        let first = self.require_song(first_key)?;
        let second = self.require_song(second_key)?;
        similarity(&self.config, first, second)
    }

    /// Find a song key by track name, ignoring case, spacing and diacritics.
    /// The earliest inserted song wins when several share a name.
    pub fn find_song(&self, track_name: &str) -> Option<&str> {
        self.track_lookup
            .get(&clean_str(track_name))
            .map(|&idx| self.vertices[idx].song.key.as_str())
    }

    pub(crate) fn vertex_index(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    fn require_song(&self, key: &str) -> Result<&Song> {
        self.song(key)
            .ok_or_else(|| GraphError::UnknownItem(key.to_string()))
    }
}

fn build_track_lookup(vertices: &[Vertex]) -> FxHashMap<String, usize> {
    let mut lookup = FxHashMap::with_capacity_and_hasher(vertices.len(), Default::default());
    for (idx, vertex) in vertices.iter().enumerate() {
        if let Some(track_name) = &vertex.song.metadata.track_name {
            lookup.entry(clean_str(track_name)).or_insert(idx);
        }
    }
    lookup
}
