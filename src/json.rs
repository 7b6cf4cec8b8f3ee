// src/json.rs
use std::{
    error::Error,
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::data::Filmography;

/// Serialize with 4-space indentation. Non-ASCII stays UTF-8.
pub fn to_json_string(filmography: &Filmography) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    filmography.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `{category: {count, films}}` to `path`, replacing any existing file.
pub fn write_filmography(path: &Path, filmography: &Filmography) -> Result<(), Box<dyn Error>> {
    let text = to_json_string(filmography)?;
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Read a file written by [`write_filmography`]. Category order and the
/// count/films invariant are preserved.
pub fn read_filmography(path: &Path) -> Result<Filmography, Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    let filmography = serde_json::from_reader(reader)?;
    Ok(filmography)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Film, FilmographyCategory};

    fn sample() -> Filmography {
        let mut actor = FilmographyCategory::new();
        actor.push(Film {
            title: "Forrest Gump".into(),
            link: "https://www.imdb.com/title/tt0109830/".into(),
            year: "1994".into(),
        });
        let mut f = Filmography::new();
        f.insert("actor".into(), actor);
        f.insert("director".into(), FilmographyCategory::new());
        f
    }

    #[test]
    fn four_space_indent_and_field_order() {
        let s = to_json_string(&sample()).unwrap();
        let expected = r#"{
    "actor": {
        "count": 1,
        "films": [
            {
                "title": "Forrest Gump",
                "link": "https://www.imdb.com/title/tt0109830/",
                "year": "1994"
            }
        ]
    },
    "director": {
        "count": 0,
        "films": []
    }
}"#;
        assert_eq!(s, expected);
    }

    #[test]
    fn non_ascii_is_not_escaped() {
        let mut cat = FilmographyCategory::new();
        cat.push(Film { title: "Amélie".into(), link: "l".into(), year: "2001".into() });
        let mut f = Filmography::new();
        f.insert("actress".into(), cat);
        assert!(to_json_string(&f).unwrap().contains("Amélie"));
    }
}
