use super::model::Track;

const SEED: [(&str, &str, &str, &str, i32, &str, &str); 8] = [
    ("1", "Bohemian Rhapsody", "Queen", "A Night at the Opera", 1975, "Rock", "5:55"),
    ("2", "Hotel California", "Eagles", "Hotel California", 1976, "Rock", "6:30"),
    ("3", "Imagine", "John Lennon", "Imagine", 1971, "Pop", "3:03"),
    ("4", "Stairway to Heaven", "Led Zeppelin", "Led Zeppelin IV", 1971, "Rock", "8:02"),
    ("5", "Billie Jean", "Michael Jackson", "Thriller", 1982, "Pop", "4:54"),
    ("6", "Like a Rolling Stone", "Bob Dylan", "Highway 61 Revisited", 1965, "Folk Rock", "6:13"),
    ("7", "Smells Like Teen Spirit", "Nirvana", "Nevermind", 1991, "Grunge", "5:01"),
    ("8", "Hey Jude", "The Beatles", "The Beatles 1967-1970", 1968, "Pop Rock", "7:11"),
];

/// The sample catalog every session starts from.
pub fn seed_tracks() -> Vec<Track> {
    SEED.iter()
        .map(|&(id, title, artist, album, year, genre, duration)| Track {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            year,
            genre: genre.to_string(),
            duration: duration.to_string(),
        })
        .collect()
}
