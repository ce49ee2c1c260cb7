//! The add-song form: six text inputs and a focus cursor.

use chrono::Datelike;

use crate::library::NewTrack;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormField {
    Title,
    Artist,
    Album,
    Year,
    Genre,
    Duration,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        Self::Title,
        Self::Artist,
        Self::Album,
        Self::Year,
        Self::Genre,
        Self::Duration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Artist => "Artist",
            Self::Album => "Album",
            Self::Year => "Year",
            Self::Genre => "Genre",
            Self::Duration => "Duration (MM:SS)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSongForm {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub genre: String,
    pub duration: String,
    pub focus: FormField,
}

impl Default for AddSongForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            year: chrono::Local::now().year().to_string(),
            genre: String::new(),
            duration: String::new(),
            focus: FormField::Title,
        }
    }
}

impl AddSongForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Artist => &self.artist,
            FormField::Album => &self.album,
            FormField::Year => &self.year,
            FormField::Genre => &self.genre,
            FormField::Duration => &self.duration,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Artist => &mut self.artist,
            FormField::Album => &mut self.album,
            FormField::Year => &mut self.year,
            FormField::Genre => &mut self.genre,
            FormField::Duration => &mut self.duration,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        self.value_mut(focus).push(c);
    }

    pub fn pop_char(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = crate::view::cycle(&FormField::ALL, self.focus);
    }

    pub fn focus_prev(&mut self) {
        let pos = FormField::ALL
            .iter()
            .position(|&f| f == self.focus)
            .unwrap_or(0);
        self.focus = FormField::ALL[(pos + FormField::ALL.len() - 1) % FormField::ALL.len()];
    }

    /// The track this form describes. Non-numeric years become `0`.
    pub fn to_candidate(&self) -> NewTrack {
        NewTrack {
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: self.album.clone(),
            year: parse_year(&self.year),
            genre: self.genre.clone(),
            duration: self.duration.clone(),
        }
    }
}

/// Leading integer of `s` (after whitespace), or 0 when there is none.
pub fn parse_year(s: &str) -> i32 {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + sign_len);
    s[..digits].parse().unwrap_or(0)
}
