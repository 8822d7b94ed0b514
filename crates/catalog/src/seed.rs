//! Built-in seed catalog.
//!
//! The store is seeded from this fixed list at startup unless a seed file is
//! given. Ids are assigned here and never reused.

use crate::types::{CatalogEntry, MovieId};

fn entry(
    id: MovieId,
    title: &str,
    year: i32,
    genre: &[&str],
    rating: f64,
    overview: &str,
    tags: &[&str],
) -> CatalogEntry {
    CatalogEntry {
        id,
        title: title.to_string(),
        year,
        genre: genre.iter().map(|g| g.to_string()).collect(),
        rating,
        poster_url: String::new(),
        overview: overview.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The default catalog, in catalog order.
pub fn seed_entries() -> Vec<CatalogEntry> {
    vec![
        entry(
            1,
            "Midnight Echoes",
            2023,
            &["Sci-Fi", "Drama"],
            4.7,
            "A reclusive sound engineer discovers a hidden signal in late-night broadcasts that seems to predict the future.",
            &["slow-burn", "atmospheric", "futuristic"],
        ),
        entry(
            2,
            "Neon Alley",
            2021,
            &["Thriller", "Crime"],
            4.3,
            "In a city that never sleeps, a freelance hacker gets pulled into a conspiracy that blurs the line between real and virtual.",
            &["neo-noir", "cyberpunk", "stylish"],
        ),
        entry(
            3,
            "Quiet Orbit",
            2020,
            &["Sci-Fi"],
            4.1,
            "A lone astronaut stationed on a failing orbital station starts receiving messages from someone claiming to be their future self.",
            &["minimal", "space", "psychological"],
        ),
        entry(
            4,
            "Blackout City",
            2019,
            &["Action", "Thriller"],
            3.9,
            "A city-wide power failure traps a getaway driver, a detective, and a mysterious stranger on the same dark streets.",
            &["high-energy", "dark", "urban"],
        ),
        entry(
            5,
            "Glass Horizon",
            2018,
            &["Drama", "Romance"],
            4.0,
            "Two strangers share nightly conversations through the glass walls of neighboring skyscrapers.",
            &["intimate", "character-driven", "cityscape"],
        ),
        entry(
            6,
            "Afterimage",
            2017,
            &["Mystery", "Drama"],
            4.4,
            "A photographer begins to notice people disappearing from their old photos—and from real life.",
            &["mind-bending", "mystery", "slow-burn"],
        ),
        entry(
            7,
            "Midnight Laughs",
            2024,
            &["Comedy"],
            4.2,
            "Three tired roommates decide to watch one terrible horror movie every night—and accidentally become viral critics.",
            &["funny", "found-footage", "meta"],
        ),
        entry(
            8,
            "Neon Panic",
            2022,
            &["Horror", "Thriller"],
            4.1,
            "A power outage traps a group of friends inside an old multiplex where the horror movie on screen starts bleeding into reality.",
            &["horror", "urban-legend", "ensemble"],
        ),
        entry(
            9,
            "Echo Park Nights",
            2020,
            &["Comedy", "Romance"],
            3.9,
            "Two rival food-truck owners are forced to share a late-night parking spot and accidentally build a following together.",
            &["feel-good", "funny", "cityscape"],
        ),
        entry(
            10,
            "Static Creek",
            2019,
            &["Horror", "Mystery"],
            4.0,
            "In a small town where the radio never quite tunes in, a group of teens investigate a broadcast that only plays after midnight.",
            &["slow-burn", "folk-horror", "teen"],
        ),
        entry(
            11,
            "Soft Reset",
            2022,
            &["Sci-Fi", "Thriller"],
            4.3,
            "A customer success agent realizes the same callers reset their lives every 24 hours—and she's the only one who remembers.",
            &["time-loop", "high-concept", "office"],
        ),
        entry(
            12,
            "Sunset Queue",
            2021,
            &["Drama"],
            3.8,
            "Strangers waiting overnight for a movie premiere share stories that change how they see each other—and their own lives.",
            &["ensemble", "talky", "character-driven"],
        ),
        entry(
            13,
            "Laugh Track",
            2023,
            &["Comedy"],
            4.0,
            "A stand-up comic discovers their new special has a mysterious laugh track that reacts to jokes they didn't tell.",
            &["surreal", "funny", "standup"],
        ),
        entry(
            14,
            "Dark Window",
            2018,
            &["Horror"],
            3.7,
            "A night security guard in an empty office tower starts seeing people reflected in the windows who aren't really there.",
            &["minimal", "one-location", "creepy"],
        ),
        entry(
            15,
            "Skyline Loop",
            2019,
            &["Sci-Fi", "Action"],
            4.1,
            "A bike courier stuck in a time loop must deliver one package perfectly to break out of the reset.",
            &["high-energy", "time-loop", "chase"],
        ),
    ]
}
