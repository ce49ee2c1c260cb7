/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: i32,
    pub genre: String,
    /// Free text, expected as `minutes:seconds`.
    pub duration: String,
}

/// A track as entered by the user, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrack {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: i32,
    pub genre: String,
    pub duration: String,
}

impl NewTrack {
    /// Title, artist and album must all be present.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.artist.is_empty() && !self.album.is_empty()
    }

    pub(crate) fn into_track(self, id: String) -> Track {
        Track {
            id,
            title: self.title,
            artist: self.artist,
            album: self.album,
            year: self.year,
            genre: self.genre,
            duration: self.duration,
        }
    }
}

/// Parse a `minutes:seconds` duration into seconds.
///
/// Returns `None` for anything that is not two integer parts separated by `:`,
/// or whose total does not fit in a `u64`.
pub fn parse_duration_secs(s: &str) -> Option<u64> {
    let (m, sec) = s.trim().split_once(':')?;
    let m: u64 = m.trim().parse().ok()?;
    let sec: u64 = sec.trim().parse().ok()?;
    m.checked_mul(60)?.checked_add(sec)
}

/// Format seconds as `M:SS`.
pub fn format_duration_secs(total: u64) -> String {
    format!("{}:{:02}", total / 60, total % 60)
}
