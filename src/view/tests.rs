use super::*;
use crate::library::{Catalog, NewTrack, Track, seed_tracks};

fn titles<'a>(tracks: impl IntoIterator<Item = &'a Track>) -> Vec<&'a str> {
    tracks.into_iter().map(|t| t.title.as_str()).collect()
}

fn controls() -> ViewControls {
    ViewControls::default()
}

#[test]
fn search_matches_any_text_field_case_insensitively() {
    let seed = seed_tracks();

    for term in ["queen", "ROCK", "thriller", "jude", "e"] {
        let found = search_tracks(&seed, term);
        assert!(!found.is_empty(), "expected matches for {term:?}");
        let lower = term.to_lowercase();
        for t in found {
            assert!(
                [&t.title, &t.artist, &t.album, &t.genre]
                    .iter()
                    .any(|v| v.to_lowercase().contains(&lower)),
                "{} does not contain {term:?}",
                t.title
            );
        }
    }
}

#[test]
fn search_for_love_finds_nothing_in_seed() {
    let seed = seed_tracks();
    let view = derive(
        &seed,
        &ViewControls {
            search: "love".into(),
            ..controls()
        },
    );
    assert!(view.is_empty());
    assert_eq!(view.groups.len(), 1);
    assert_eq!(view.groups[0].label, ALL_SONGS);
    assert!(view.groups[0].tracks.is_empty());
}

#[test]
fn empty_search_keeps_everything() {
    let seed = seed_tracks();
    assert_eq!(search_tracks(&seed, "").len(), 8);
    assert_eq!(filter_tracks(&seed, "", FilterField::Album).len(), 8);
}

#[test]
fn field_filter_applies_search_term_to_the_chosen_field_too() {
    let seed = seed_tracks();

    // "hotel" hits title and album of one track.
    let by_title = filter_tracks(&seed, "hotel", FilterField::Title);
    assert_eq!(titles(by_title), vec!["Hotel California"]);

    // "queen" is only an artist, so filtering by title drops it.
    assert!(filter_tracks(&seed, "queen", FilterField::Title).is_empty());
    assert_eq!(
        titles(filter_tracks(&seed, "queen", FilterField::Artist)),
        vec!["Bohemian Rhapsody"]
    );

    // Genre-only matches survive the search step but not a field filter.
    assert_eq!(filter_tracks(&seed, "grunge", FilterField::All).len(), 1);
    assert!(filter_tracks(&seed, "grunge", FilterField::Album).is_empty());
}

#[test]
fn sort_by_year_ascending_runs_1965_to_1991() {
    let seed = seed_tracks();
    let view = derive(
        &seed,
        &ViewControls {
            sort_by: SortField::Year,
            ..controls()
        },
    );
    let order = titles(view.tracks());
    assert_eq!(order.first(), Some(&"Like a Rolling Stone"));
    assert_eq!(order.last(), Some(&"Smells Like Teen Spirit"));
}

#[test]
fn sorted_output_is_ordered_for_every_field_and_direction() {
    let seed = seed_tracks();
    for field in SortField::ALL {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            let sorted = sort_tracks(seed.iter().collect(), field, order);
            for pair in sorted.windows(2) {
                let ord = match field {
                    SortField::Year => pair[0].year.cmp(&pair[1].year),
                    SortField::Title => locale_cmp(&pair[0].title, &pair[1].title),
                    SortField::Artist => locale_cmp(&pair[0].artist, &pair[1].artist),
                    SortField::Album => locale_cmp(&pair[0].album, &pair[1].album),
                };
                match order {
                    SortOrder::Asc => assert_ne!(ord, std::cmp::Ordering::Greater),
                    SortOrder::Desc => assert_ne!(ord, std::cmp::Ordering::Less),
                }
            }
        }
    }
}

#[test]
fn title_sort_is_case_insensitive() {
    let seed = seed_tracks();
    let sorted = sort_tracks(seed.iter().collect(), SortField::Title, SortOrder::Asc);
    assert_eq!(
        titles(sorted),
        vec![
            "Billie Jean",
            "Bohemian Rhapsody",
            "Hey Jude",
            "Hotel California",
            "Imagine",
            "Like a Rolling Stone",
            "Smells Like Teen Spirit",
            "Stairway to Heaven",
        ]
    );
}

#[test]
fn locale_cmp_orders_like_a_dictionary() {
    use std::cmp::Ordering::*;
    assert_eq!(locale_cmp("apple", "Banana"), Less);
    assert_eq!(locale_cmp("Zed", "alpha"), Greater);
    assert_eq!(locale_cmp("a", "A"), Less);
    assert_eq!(locale_cmp("same", "same"), Equal);
    assert_eq!(locale_cmp("ab", "abc"), Less);
}

#[test]
fn equal_years_keep_catalog_order() {
    let seed = seed_tracks();
    let sorted = sort_tracks(seed.iter().collect(), SortField::Year, SortOrder::Asc);
    let pos = |title: &str| sorted.iter().position(|t| t.title == title).unwrap();
    // Both 1971; Imagine comes first in the seed.
    assert!(pos("Imagine") < pos("Stairway to Heaven"));
}

#[test]
fn group_by_genre_collects_rock_tracks() {
    let seed = seed_tracks();
    let view = derive(
        &seed,
        &ViewControls {
            group_by: GroupField::Genre,
            ..controls()
        },
    );
    let rock = view.groups.iter().find(|g| g.label == "Rock").unwrap();
    assert_eq!(
        titles(rock.tracks.iter().copied()),
        vec!["Bohemian Rhapsody", "Hotel California", "Stairway to Heaven"]
    );
}

#[test]
fn groups_follow_first_occurrence_in_sorted_order() {
    let seed = seed_tracks();
    let view = derive(
        &seed,
        &ViewControls {
            sort_by: SortField::Year,
            sort_order: SortOrder::Desc,
            group_by: GroupField::Year,
            ..controls()
        },
    );
    let labels: Vec<&str> = view.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["1991", "1982", "1976", "1975", "1971", "1968", "1965"]
    );
    let g1971 = view.groups.iter().find(|g| g.label == "1971").unwrap();
    assert_eq!(g1971.tracks.len(), 2);
}

#[test]
fn grouping_is_a_partition_of_the_sorted_view() {
    let seed = seed_tracks();
    for group_by in GroupField::ALL {
        let c = ViewControls {
            search: "o".into(),
            sort_by: SortField::Artist,
            group_by,
            ..controls()
        };
        let view = derive(&seed, &c);
        let sorted = sort_tracks(filter_tracks(&seed, &c.search, c.filter_by), c.sort_by, c.sort_order);

        let mut grouped: Vec<&str> = view.tracks().map(|t| t.id.as_str()).collect();
        let mut expected: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(view.len, expected.len());
        if group_by == GroupField::None {
            assert_eq!(grouped, expected);
        }
        grouped.sort_unstable();
        expected.sort_unstable();
        assert_eq!(grouped, expected);
    }
}

#[test]
fn seed_stats_match_catalog() {
    let seed = seed_tracks();
    let stats = CatalogStats::compute(&seed);
    assert_eq!(stats.total_tracks, 8);
    assert_eq!(stats.artists, 8);
    assert_eq!(stats.albums, 8);
    assert_eq!(stats.genres, 5);

    let expected: u64 = [355, 390, 183, 482, 294, 373, 301, 431].iter().sum();
    assert_eq!(stats.total_duration_secs, expected);
    assert_eq!(stats.total_duration(), "46:49");
}

#[test]
fn stats_ignore_view_controls_and_follow_catalog_changes() {
    let mut catalog = Catalog::new(seed_tracks());
    let before = CatalogStats::compute(catalog.tracks());

    let view = derive(
        catalog.tracks(),
        &ViewControls {
            search: "queen".into(),
            group_by: GroupField::Artist,
            ..controls()
        },
    );
    assert_eq!(view.len, 1);
    assert_eq!(CatalogStats::compute(catalog.tracks()), before);

    catalog
        .add(NewTrack {
            title: "Under Pressure".into(),
            artist: "Queen".into(),
            album: "Hot Space".into(),
            year: 1982,
            genre: "Rock".into(),
            duration: "not a time".into(),
        })
        .unwrap();
    let after = CatalogStats::compute(catalog.tracks());
    assert_eq!(after.total_tracks, 9);
    assert_eq!(after.artists, 8);
    assert_eq!(after.albums, 9);
    assert_eq!(after.genres, 5);
    assert_eq!(after.total_duration_secs, before.total_duration_secs);
}

#[test]
fn huge_durations_do_not_overflow_the_total() {
    let mut tracks = seed_tracks();
    let huge = |id: &str, duration: &str| Track {
        id: id.into(),
        title: "Forever".into(),
        artist: "Drone".into(),
        album: "Endless".into(),
        year: 2024,
        genre: "Ambient".into(),
        duration: duration.into(),
    };

    tracks.push(huge("100", "999999999999999999:00"));
    let stats = CatalogStats::compute(&tracks);
    assert_eq!(stats.total_duration(), "46:49");

    tracks.push(huge("101", "307445734561825860:00"));
    tracks.push(huge("102", "307445734561825860:00"));
    let stats = CatalogStats::compute(&tracks);
    assert_eq!(stats.total_duration_secs, u64::MAX);
    assert_eq!(stats.total_tracks, 11);
}

#[test]
fn cycle_wraps_around() {
    assert_eq!(cycle(&SortField::ALL, SortField::Title), SortField::Artist);
    assert_eq!(cycle(&SortField::ALL, SortField::Year), SortField::Title);
    assert_eq!(cycle(&GroupField::ALL, GroupField::Genre), GroupField::None);
    assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
}
