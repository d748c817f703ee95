use crate::error::{GraphError, Result};
use crate::graph::SongGraph;
use crate::similarity::Song;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub key: String,
    pub track_name: String,
    pub artists: String,
    pub album_name: String,
    pub score: f64,
    pub popularity: f64,
}

impl Recommendation {
    fn from_song(song: &Song, score: f64) -> Result<Self> {
        let metadata = &song.metadata;
        Ok(Self {
            key: song.key.clone(),
            track_name: required_field(song, metadata.track_name.as_deref(), "track_name")?,
            artists: required_field(song, metadata.artists.as_deref(), "artists")?,
            album_name: required_field(song, metadata.album_name.as_deref(), "album_name")?,
            score,
            popularity: ranking_popularity(song),
        })
    }
}

fn required_field(song: &Song, value: Option<&str>, field: &'static str) -> Result<String> {
    value
        .map(str::to_string)
        .ok_or_else(|| GraphError::MissingMetadata {
            key: song.key.clone(),
            field,
        })
}

/// A non-seed song reachable from at least one seed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub key: String,
    /// Mean weight over the seeds linked to this candidate
    pub score: f64,
    pub popularity: f64,
    /// Number of seeds with an edge to this candidate
    pub match_count: usize,
}

struct Accumulator {
    vertex: usize,
    total_weight: f64,
    match_count: usize,
}

impl SongGraph {
    /// Aggregate neighbor weights of the seeds into ranked candidates.
    ///
    /// Unknown seed keys are ignored. Seeds never score each other. A
    /// candidate's score is averaged only over the seeds that link to it.
    /// Ordering is by descending score, then descending popularity, then
    /// insertion order.
    pub fn score_candidates<'a, I>(&self, seed_keys: I) -> Vec<ScoredCandidate>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let seeds = self.resolve_seeds(seed_keys);
        if seeds.is_empty() {
            return vec![];
        }
        let seed_set: FxHashSet<usize> = seeds.iter().copied().collect();

        let mut positions: FxHashMap<usize, usize> = FxHashMap::default();
        let mut accumulators: Vec<Accumulator> = Vec::new();

        for &seed in &seeds {
            for (&neighbor, &weight) in &self.vertices[seed].neighbors {
                if seed_set.contains(&neighbor) {
                    continue;
                }

                let position = *positions.entry(neighbor).or_insert_with(|| {
                    accumulators.push(Accumulator {
                        vertex: neighbor,
                        total_weight: 0.0,
                        match_count: 0,
                    });
                    accumulators.len() - 1
                });

                let accumulator = &mut accumulators[position];
                accumulator.total_weight += weight;
                accumulator.match_count += 1;
            }
        }

        let mut ranked: Vec<(usize, ScoredCandidate)> = accumulators
            .into_iter()
            .map(|accumulator| {
                let song = &self.vertices[accumulator.vertex].song;
                let candidate = ScoredCandidate {
                    key: song.key.clone(),
                    score: accumulator.total_weight / accumulator.match_count as f64,
                    popularity: ranking_popularity(song),
                    match_count: accumulator.match_count,
                };
                (accumulator.vertex, candidate)
            })
            .collect();

        ranked.sort_by(|(a_vertex, a), (b_vertex, b)| {
            compare_desc(a.score, b.score)
                .then_with(|| compare_desc(a.popularity, b.popularity))
                .then_with(|| a_vertex.cmp(b_vertex))
        });

        ranked.into_iter().map(|(_, candidate)| candidate).collect()
    }

    /// Top `limit` recommendations for the given seed keys.
    ///
    /// Candidates missing display metadata are skipped and the next ranked
    /// candidate takes their place.
    pub fn recommend<'a, I>(&self, seed_keys: I, limit: usize) -> Vec<Recommendation>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.score_candidates(seed_keys)
            .into_iter()
            .filter_map(|candidate| self.to_recommendation(&candidate))
            .take(limit)
            .collect()
    }

    /// Like [`SongGraph::recommend`], with seeds given as track names.
    /// Names that match no song are skipped.
    pub fn recommend_by_name<'a, I>(&self, track_names: I, limit: usize) -> Vec<Recommendation>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let seed_keys: Vec<&str> = track_names
            .into_iter()
            .filter_map(|name| {
                let key = self.find_song(name);
                if key.is_none() {
                    tracing::debug!(name, "no song matches seed name");
                }
                key
            })
            .collect();

        self.recommend(seed_keys, limit)
    }

    /// Known seed indices in caller order, without duplicates.
    fn resolve_seeds<'a, I>(&self, seed_keys: I) -> Vec<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = FxHashSet::default();
        let mut seeds = Vec::new();

        for key in seed_keys {
            match self.vertex_index(key) {
                Some(idx) => {
                    if seen.insert(idx) {
                        seeds.push(idx);
                    }
                }
                None => tracing::debug!(key, "skipping unknown seed"),
            }
        }

        seeds
    }

    fn to_recommendation(&self, candidate: &ScoredCandidate) -> Option<Recommendation> {
        let song = self.song(&candidate.key)?;
        match Recommendation::from_song(song, candidate.score) {
            Ok(recommendation) => Some(recommendation),
            Err(error) => {
                tracing::warn!(%error, "skipping candidate without display metadata");
                None
            }
        }
    }
}

/// Missing or non-finite popularity ranks as 0.
fn ranking_popularity(song: &Song) -> f64 {
    song.metadata
        .popularity
        .filter(|popularity| popularity.is_finite())
        .unwrap_or(0.0)
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
