use songgraph_core::string_normalization::clean_str;
use songgraph_core::{FeatureConfiguration, FeatureMap, SongGraphBuilder, SongMetadata};
use std::{fs::File, io::Read, path::Path};

const TRACK_NAME: &str = "track_name";
const ARTISTS: &str = "artists";
const ALBUM_NAME: &str = "album_name";
const POPULARITY: &str = "popularity";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to open catalog {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read catalog header: {0}")]
    Header(#[from] csv::Error),

    #[error("Catalog is missing required column '{0}'")]
    MissingColumn(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStats {
    pub rows_read: usize,
    pub songs_added: usize,
    pub duplicate_rows: usize,
    pub skipped_rows: usize,
}

pub struct Catalog {
    pub builder: SongGraphBuilder,
    pub stats: CatalogStats,
}

struct ColumnMap {
    track_name: usize,
    artists: usize,
    album_name: usize,
    popularity: usize,
    features: Vec<(String, usize)>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord, config: &FeatureConfiguration) -> Result<Self, CatalogError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
        };

        let features = config
            .feature_names()
            .map(|name| find(name).map(|idx| (name.to_string(), idx)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            track_name: find(TRACK_NAME)?,
            artists: find(ARTISTS)?,
            album_name: find(ALBUM_NAME)?,
            popularity: find(POPULARITY)?,
            features,
        })
    }

    /// `None` when a field is absent or not a finite number.
    fn parse_row(&self, record: &csv::StringRecord) -> Option<(String, FeatureMap, SongMetadata)> {
        let track_name = record.get(self.track_name)?.to_string();
        let metadata = SongMetadata {
            artists: Some(record.get(self.artists)?.to_string()),
            album_name: Some(record.get(self.album_name)?.to_string()),
            popularity: Some(parse_number(record.get(self.popularity)?)?),
            track_name: Some(track_name.clone()),
        };

        let mut features = FeatureMap::default();
        for (name, idx) in &self.features {
            features.insert(name.clone(), parse_number(record.get(*idx)?)?);
        }

        Some((clean_str(&track_name), features, metadata))
    }
}

/// `None` for anything but a finite number, so `nan` and `inf` rows are skipped.
fn parse_number(field: &str) -> Option<f64> {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

pub fn load_catalog(path: &Path, config: FeatureConfiguration) -> Result<Catalog, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_catalog(file, config)
}

/// Map catalog rows onto songs by header name. Rows with missing or
/// non-numeric fields are skipped; repeated song keys keep the first row.
pub fn read_catalog<R: Read>(reader: R, config: FeatureConfiguration) -> Result<Catalog, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = ColumnMap::from_headers(csv_reader.headers()?, &config)?;

    let mut builder = SongGraphBuilder::new(config);
    let mut stats = CatalogStats::default();

    for (row_number, result) in csv_reader.records().enumerate() {
        stats.rows_read += 1;

        let parsed = match result {
            Ok(record) => columns.parse_row(&record),
            Err(error) => {
                tracing::debug!(row = row_number + 2, %error, "unreadable catalog row");
                None
            }
        };

        let Some((key, features, metadata)) = parsed else {
            stats.skipped_rows += 1;
            continue;
        };

        if builder.add_song(key, features, metadata) {
            stats.songs_added += 1;
        } else {
            stats.duplicate_rows += 1;
        }
    }

    tracing::info!(
        rows = stats.rows_read,
        songs = stats.songs_added,
        duplicates = stats.duplicate_rows,
        skipped = stats.skipped_rows,
        "loaded catalog"
    );

    Ok(Catalog { builder, stats })
}
