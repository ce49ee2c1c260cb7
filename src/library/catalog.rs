use tracing::debug;

use super::model::{NewTrack, Track};

/// In-memory ordered collection of tracks. Append and remove only.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
    last_id: u64,
}

impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Self {
        let last_id = tracks
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { tracks, last_id }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Append `candidate` if title, artist and album are present.
    ///
    /// Returns the id assigned to the new track, or `None` when declined.
    pub fn add(&mut self, candidate: NewTrack) -> Option<String> {
        let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.add_at(candidate, now_ms)
    }

    pub(crate) fn add_at(&mut self, candidate: NewTrack, now_ms: u64) -> Option<String> {
        if !candidate.is_complete() {
            debug!("add declined: title, artist and album are required");
            return None;
        }

        // Ids come from the clock; two adds in the same millisecond get bumped.
        let id_num = now_ms.max(self.last_id + 1);
        self.last_id = id_num;
        let id = id_num.to_string();

        debug!(id = %id, title = %candidate.title, "track added");
        self.tracks.push(candidate.into_track(id.clone()));
        Some(id)
    }

    /// Remove the track with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != id);
        let removed = self.tracks.len() != before;
        if removed {
            debug!(id = %id, "track removed");
        }
        removed
    }
}
