// src/data.rs
//
// Normalized scrape result shared by the extractor and the exporters.
//
// - Film: one filmography row.
// - FilmographyCategory: `count` + `films`; count can only move with `push`.
// - Filmography: category buckets in page order.
// - ActorRecord: display name + filmography, read-only once built.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    /// Absolute URL.
    pub link: String,
    /// First token of the year column, or "No Year".
    pub year: String,
}

/// A bucket of films under one category key ("actor", "director", …).
///
/// Serialized as `{"count": n, "films": [...]}`. Deserializing an object
/// whose `count` disagrees with the number of films is an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CategoryParts")]
pub struct FilmographyCategory {
    count: usize,
    films: Vec<Film>,
}

impl FilmographyCategory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, film: Film) {
        self.films.push(film);
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }
}

#[derive(Deserialize)]
struct CategoryParts {
    count: usize,
    films: Vec<Film>,
}

impl TryFrom<CategoryParts> for FilmographyCategory {
    type Error = String;

    fn try_from(parts: CategoryParts) -> Result<Self, Self::Error> {
        if parts.count != parts.films.len() {
            return Err(format!(
                "count {} does not match {} films",
                parts.count,
                parts.films.len()
            ));
        }
        Ok(Self { count: parts.count, films: parts.films })
    }
}

/// Category key → bucket, in the order the page lists the categories.
pub type Filmography = IndexMap<String, FilmographyCategory>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorRecord {
    full_name: String,
    filmography: Filmography,
}

impl ActorRecord {
    pub fn new(full_name: String, filmography: Filmography) -> Self {
        Self { full_name, filmography }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn filmography(&self) -> &Filmography {
        &self.filmography
    }

    /// (category, count) pairs in page order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.filmography.iter().map(|(k, c)| (k.as_str(), c.count()))
    }
}
