use serde::Deserialize;

use crate::library::Track;

/// Which field the search term is additionally matched against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterField {
    #[default]
    All,
    Title,
    Artist,
    Album,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    #[default]
    Title,
    Artist,
    Album,
    Year,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupField {
    #[default]
    None,
    Album,
    Artist,
    Year,
    Genre,
}

/// A sort key borrowed from a track.
pub enum SortKey<'a> {
    Text(&'a str),
    Number(i32),
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [Self::All, Self::Title, Self::Artist, Self::Album];

    /// The text this filter checks, or `None` for `All`.
    pub fn value<'a>(&self, track: &'a Track) -> Option<&'a str> {
        match self {
            Self::All => None,
            Self::Title => Some(track.title.as_str()),
            Self::Artist => Some(track.artist.as_str()),
            Self::Album => Some(track.album.as_str()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Title => "Title",
            Self::Artist => "Artist",
            Self::Album => "Album",
        }
    }
}

impl SortField {
    pub const ALL: [SortField; 4] = [Self::Title, Self::Artist, Self::Album, Self::Year];

    pub fn key<'a>(&self, track: &'a Track) -> SortKey<'a> {
        match self {
            Self::Title => SortKey::Text(track.title.as_str()),
            Self::Artist => SortKey::Text(track.artist.as_str()),
            Self::Album => SortKey::Text(track.album.as_str()),
            Self::Year => SortKey::Number(track.year),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Artist => "Artist",
            Self::Album => "Album",
            Self::Year => "Year",
        }
    }
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

impl GroupField {
    pub const ALL: [GroupField; 5] = [
        Self::None,
        Self::Album,
        Self::Artist,
        Self::Year,
        Self::Genre,
    ];

    /// The group label for `track`, or `None` when grouping is off.
    pub fn key(&self, track: &Track) -> Option<String> {
        match self {
            Self::None => None,
            Self::Album => Some(track.album.clone()),
            Self::Artist => Some(track.artist.clone()),
            Self::Year => Some(track.year.to_string()),
            Self::Genre => Some(track.genre.clone()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No Grouping",
            Self::Album => "Album",
            Self::Artist => "Artist",
            Self::Year => "Year",
            Self::Genre => "Genre",
        }
    }
}

/// Step to the element after `current` in `all`, wrapping around.
pub fn cycle<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let pos = all.iter().position(|&v| v == current).unwrap_or(0);
    all[(pos + 1) % all.len()]
}

/// User-adjustable parameters that decide what part of the catalog is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewControls {
    pub search: String,
    pub filter_by: FilterField,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub group_by: GroupField,
}
