//! Filter, sort and group steps of the derived view.

use std::cmp::Ordering;

use crate::library::Track;

use super::controls::{FilterField, GroupField, SortField, SortKey, SortOrder, ViewControls};

/// Label of the single group produced when grouping is off.
pub const ALL_SONGS: &str = "All Songs";

/// A labeled run of tracks in the derived view.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<'a> {
    pub label: String,
    pub tracks: Vec<&'a Track>,
}

/// The filtered, sorted and grouped view of a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a> {
    pub groups: Vec<Group<'a>>,
    /// Number of tracks across all groups.
    pub len: usize,
}

impl<'a> DerivedView<'a> {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tracks in display order, concatenating the groups.
    pub fn tracks(&self) -> impl Iterator<Item = &'a Track> + '_ {
        self.groups.iter().flat_map(|g| g.tracks.iter().copied())
    }
}

/// Run the whole pipeline for `controls` over `tracks`.
pub fn derive<'a>(tracks: &'a [Track], controls: &ViewControls) -> DerivedView<'a> {
    let filtered = filter_tracks(tracks, &controls.search, controls.filter_by);
    let sorted = sort_tracks(filtered, controls.sort_by, controls.sort_order);
    let len = sorted.len();
    DerivedView {
        groups: group_tracks(sorted, controls.group_by),
        len,
    }
}

/// Keep tracks whose title, artist, album or genre contain `term`, ignoring case.
pub fn search_tracks<'a>(tracks: &'a [Track], term: &str) -> Vec<&'a Track> {
    if term.is_empty() {
        return tracks.iter().collect();
    }
    let term = term.to_lowercase();
    tracks
        .iter()
        .filter(|t| {
            [&t.title, &t.artist, &t.album, &t.genre]
                .iter()
                .any(|v| v.to_lowercase().contains(&term))
        })
        .collect()
}

/// Search, then narrow by `filter_by` using the same term.
///
/// With a field selected, a track must contain the term in that field as well
/// as passing the general search.
pub fn filter_tracks<'a>(tracks: &'a [Track], term: &str, filter_by: FilterField) -> Vec<&'a Track> {
    let mut out = search_tracks(tracks, term);
    if filter_by != FilterField::All {
        let term = term.to_lowercase();
        out.retain(|t| {
            filter_by
                .value(t)
                .map(|v| v.to_lowercase().contains(&term))
                .unwrap_or(true)
        });
    }
    out
}

/// Stable sort by `field` in `order`.
pub fn sort_tracks(mut tracks: Vec<&Track>, field: SortField, order: SortOrder) -> Vec<&Track> {
    tracks.sort_by(|a, b| {
        let ord = compare_keys(field.key(a), field.key(b));
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    tracks
}

fn compare_keys(a: SortKey<'_>, b: SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Text(a), SortKey::Text(b)) => locale_cmp(a, b),
        (SortKey::Number(a), SortKey::Number(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

/// Dictionary-style string comparison: case-insensitive first, and on a tie
/// lowercase sorts before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<String>();
    fold(a).cmp(&fold(b)).then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(x, y)| x != y)
            .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            })
            .unwrap_or_else(|| a.len().cmp(&b.len()))
    })
}

/// Partition sorted tracks by `field`, in first-occurrence order.
pub fn group_tracks(sorted: Vec<&Track>, field: GroupField) -> Vec<Group<'_>> {
    if field == GroupField::None {
        return vec![Group {
            label: ALL_SONGS.to_string(),
            tracks: sorted,
        }];
    }

    let mut groups: Vec<Group<'_>> = Vec::new();
    for track in sorted {
        let Some(key) = field.key(track) else {
            continue;
        };
        match groups.iter_mut().find(|g| g.label == key) {
            Some(g) => g.tracks.push(track),
            None => groups.push(Group {
                label: key,
                tracks: vec![track],
            }),
        }
    }
    groups
}
