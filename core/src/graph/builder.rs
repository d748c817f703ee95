use super::{SongGraph, Vertex};
use crate::error::{GraphError, Result};
use crate::feature_config::{EdgeConfig, FeatureConfiguration};
use crate::similarity::{FeatureMap, Song, SongMetadata, WeightedVector, similarity};
use rustc_hash::FxHashMap;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub struct BuildStats {
    pub songs: usize,
    pub pairs_compared: usize,
    pub edges_added: usize,
    pub duration_ms: u64,
}

/// Construction phase of a [`SongGraph`]. Songs are added here, then
/// [`SongGraphBuilder::build_edges`] runs the pairwise pass and hands back the
/// finished, read-only graph.
pub struct SongGraphBuilder {
    config: FeatureConfiguration,
    vertices: Vec<Vertex>,
    index: FxHashMap<String, usize>,
}

impl SongGraphBuilder {
    pub fn new(config: FeatureConfiguration) -> Self {
        Self {
            config,
            vertices: Vec::new(),
            index: FxHashMap::default(),
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

    /// Add an isolated song. Returns `false` and leaves the existing song
    /// untouched when the key is already present.
    pub fn add_song(&mut self, key: impl Into<String>, features: FeatureMap, metadata: SongMetadata) -> bool {
        let key = key.into();
        if self.index.contains_key(&key) {
            return false;
        }

        self.index.insert(key.clone(), self.vertices.len());
        self.vertices.push(Vertex::new(Song::new(key, features, metadata)));
        true
    }

    /// Connect two songs with an explicit weight in both directions.
    /// A song is never connected to itself.
    pub fn add_edge(&mut self, first_key: &str, second_key: &str, weight: f64) -> Result<()> {
        let first = self.require_index(first_key)?;
        let second = self.require_index(second_key)?;
        if first != second {
            self.connect(first, second, weight);
        }
        Ok(())
    }

    pub fn similarity_score(&self, first_key: &str, second_key: &str) -> Result<f64> {
        let first = self.require_index(first_key)?;
        let second = self.require_index(second_key)?;
        similarity(
            &self.config,
            &self.vertices[first].song,
            &self.vertices[second].song,
        )
    }

    /// Finish without a similarity pass, keeping only explicit edges.
    pub fn freeze(self) -> SongGraph {
        SongGraph::from_vertices(self.config, self.vertices, self.index)
    }

    /// Score every unordered pair once and keep the strongest edges.
    ///
    /// Songs are visited in insertion order. Song `i` is compared with every
    /// later song `j`; candidates scoring strictly above `threshold` are
    /// ranked by descending similarity (earlier `j` first on ties) and the
    /// first `top_k` become symmetric edges. The cap only applies to the
    /// pass of the earlier song, so a later song picked by many earlier
    /// passes can end up with more than `top_k` neighbors.
    ///
    /// This is an O(n²) scan. Any missing feature aborts the build and no
    /// graph is produced.
    pub fn build_edges(mut self, edge_config: &EdgeConfig) -> Result<(SongGraph, BuildStats)> {
        let build_timer = Instant::now();
        let vectors = self.weighted_vectors()?;

        let mut pairs_compared = 0;
        let mut edges_added = 0;

        for i in 0..vectors.len() {
            let candidates = rank_candidates(i, &vectors, edge_config.threshold);
            pairs_compared += vectors.len() - i - 1;

            for (j, weight) in candidates.into_iter().take(edge_config.top_k) {
                self.connect(i, j, weight);
                edges_added += 1;
            }
        }

        let stats = BuildStats {
            songs: self.vertices.len(),
            pairs_compared,
            edges_added,
            duration_ms: build_timer.elapsed().as_millis() as u64,
        };

        tracing::info!(
            songs = stats.songs,
            pairs_compared = stats.pairs_compared,
            edges_added = stats.edges_added,
            duration_ms = stats.duration_ms,
            "built similarity edges"
        );

        Ok((self.freeze(), stats))
    }

    fn weighted_vectors(&self) -> Result<Vec<WeightedVector>> {
        self.vertices
            .iter()
            .map(|vertex| self.config.weighted_vector(&vertex.song))
            .collect()
    }

    fn connect(&mut self, first: usize, second: usize, weight: f64) {
        self.vertices[first].neighbors.insert(second, weight);
        self.vertices[second].neighbors.insert(first, weight);
    }

    fn require_index(&self, key: &str) -> Result<usize> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::UnknownItem(key.to_string()))
    }
}

impl Default for SongGraphBuilder {
    fn default() -> Self {
        Self::new(FeatureConfiguration::default())
    }
}

fn rank_candidates(i: usize, vectors: &[WeightedVector], threshold: f64) -> Vec<(usize, f64)> {
    let mut candidates: Vec<(usize, f64)> = vectors
        .iter()
        .enumerate()
        .skip(i + 1)
        .map(|(j, vector)| (j, vectors[i].similarity(vector)))
        .filter(|(_, score)| *score > threshold)
        .collect();

    // Stable sort keeps enumeration order among equal scores
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}
