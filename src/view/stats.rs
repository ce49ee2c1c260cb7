use std::collections::HashSet;

use crate::library::{Track, format_duration_secs, parse_duration_secs};

/// Aggregate numbers over the whole catalog, independent of view controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub total_tracks: usize,
    pub artists: usize,
    pub albums: usize,
    pub genres: usize,
    pub total_duration_secs: u64,
}

impl CatalogStats {
    pub fn compute(tracks: &[Track]) -> Self {
        let mut artists = HashSet::new();
        let mut albums = HashSet::new();
        let mut genres = HashSet::new();
        let mut total_duration_secs = 0u64;

        for t in tracks {
            artists.insert(t.artist.as_str());
            albums.insert(t.album.as_str());
            genres.insert(t.genre.as_str());
            // Unparseable durations count as zero.
            total_duration_secs =
                total_duration_secs.saturating_add(parse_duration_secs(&t.duration).unwrap_or(0));
        }

        Self {
            total_tracks: tracks.len(),
            artists: artists.len(),
            albums: albums.len(),
            genres: genres.len(),
            total_duration_secs,
        }
    }

    /// Total duration as `M:SS`.
    pub fn total_duration(&self) -> String {
        format_duration_secs(self.total_duration_secs)
    }
}
