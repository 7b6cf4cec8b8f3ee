// src/specs/filmography.rs

// Person page → ActorRecord.
//
// Expected markup (the classic name page):
//
//   <table id="name-overview-widget-layout"> … <h1> Name</h1> … </table>
//   <div id="filmography">
//     <div class="head" data-category="actor">…</div>
//     <div class="filmo-category-section">
//       <div class="filmo-row odd" id="actor-tt0109830">
//         <span class="year_column">&nbsp;1994</span>
//         <b><a href="/title/tt0109830/">Forrest Gump</a></b>
//       </div>
//     </div>
//     …
//   </div>

use std::error::Error;

use log::debug;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::consts::NO_YEAR;
use crate::data::{ActorRecord, Film, Filmography, FilmographyCategory};

struct Selectors {
    anchor: Selector,
    name_heading: Selector,
    head: Selector,
    section: Selector,
    row: Selector,
    title: Selector,
    link: Selector,
    year: Selector,
}

impl Selectors {
    fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            anchor: selector("div#filmography")?,
            name_heading: selector("table#name-overview-widget-layout h1")?,
            head: selector("div.head")?,
            section: selector("div.filmo-category-section")?,
            row: selector("div.filmo-row")?,
            title: selector("b")?,
            link: selector("a")?,
            year: selector("span.year_column")?,
        })
    }
}

fn selector(css: &'static str) -> Result<Selector, Box<dyn Error>> {
    Selector::parse(css).map_err(|e| format!("invalid selector {css:?}: {e:?}").into())
}

/// Parse a person page into an [`ActorRecord`].
///
/// Categories come from the `div.head` elements after `div#filmography`,
/// in page order. Rows are then filed under the category named by their id
/// prefix. Links are resolved against `base`.
///
/// Fails on the first missing piece of markup, and on a row whose category
/// has no header.
pub fn parse_actor_record(html: &str, base: &Url) -> Result<ActorRecord, Box<dyn Error>> {
    let s = Selectors::new()?;
    let doc = Html::parse_document(html);

    let anchor = doc
        .select(&s.anchor)
        .next()
        .ok_or("filmography anchor (div#filmography) not found")?;
    let heads = following(&doc, anchor, &s.head);
    let sections = following(&doc, anchor, &s.section);

    let heading = doc
        .select(&s.name_heading)
        .next()
        .ok_or("name heading (table#name-overview-widget-layout h1) not found")?;
    let full_name = assemble_display_name(&heading.text().collect::<String>());

    let mut filmography = Filmography::new();
    for head in heads {
        let key = head
            .value()
            .attr("data-category")
            .ok_or("category header (div.head) without data-category")?;
        // A repeated header starts over but keeps its first position
        filmography.insert(key.to_string(), FilmographyCategory::new());
    }

    for section in sections {
        for row in section.select(&s.row) {
            let (key, film) = parse_row(row, &s, base)?;
            let bucket = filmography.get_mut(key).ok_or_else(|| {
                format!("row {:?}: category {key:?} has no header on the page", row.value().id().unwrap_or(""))
            })?;
            bucket.push(film);
        }
    }

    debug!(
        "Parsed {full_name:?}: {}",
        filmography
            .iter()
            .map(|(k, c)| format!("{k}={}", c.count()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(ActorRecord::new(full_name, filmography))
}

fn parse_row<'a>(
    row: ElementRef<'a>,
    s: &Selectors,
    base: &Url,
) -> Result<(&'a str, Film), Box<dyn Error>> {
    let id = row.value().attr("id").ok_or("filmo-row without id attribute")?;
    let key = category_key_from_row_id(id)
        .ok_or_else(|| format!("row id {id:?} has no '-' to take a category from"))?;

    let bold = row
        .select(&s.title)
        .next()
        .ok_or_else(|| format!("row {id:?}: no <b> title"))?;
    let title = bold.text().collect::<String>();

    let year_span = row
        .select(&s.year)
        .next()
        .ok_or_else(|| format!("row {id:?}: no span.year_column"))?;
    let year = normalize_year(&year_span.text().collect::<String>());

    let href = bold
        .select(&s.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| format!("row {id:?}: title has no link"))?;
    let link = resolve_link(base, href)?;

    Ok((key, Film { title, link, year }))
}

/// Elements matching `sel` that come after `anchor` in document order,
/// its own descendants included, `anchor` itself excluded.
fn following<'a>(doc: &'a Html, anchor: ElementRef<'a>, sel: &Selector) -> Vec<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .skip_while(|node| node.id() != anchor.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|el| sel.matches(el))
        .collect()
}

/* ---------- markup heuristics ---------- */

/// Display name from the heading's full text.
///
/// Split on `'\n'`, drop the last piece, append one space to each remaining
/// piece, concatenate, then remove exactly one character from each end.
///
/// `" Tom Hanks\n"` → `"Tom Hanks"`. Text without any `'\n'` yields `""`.
/// The trim is positional: `"Tom\nHanks\n"` → `"om Hanks"`.
pub fn assemble_display_name(raw: &str) -> String {
    let pieces: Vec<&str> = raw.split('\n').collect();
    let kept = &pieces[..pieces.len() - 1];

    let mut joined = String::new();
    for piece in kept {
        joined.push_str(piece);
        joined.push(' ');
    }

    let mut chars = joined.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}

/// Category key from a row id: everything before the first `'-'`.
///
/// `"actor-tt0109830"` → `Some("actor")`, `"-tt1"` → `Some("")`,
/// `"actor"` → `None`.
pub fn category_key_from_row_id(row_id: &str) -> Option<&str> {
    row_id.find('-').map(|i| &row_id[..i])
}

/// Year column text → year.
///
/// Newlines are removed first, then the first whitespace-separated token
/// (Unicode whitespace, so `&nbsp;` counts) is the year. No token → `"No Year"`.
///
/// `"\u{a0}1994"` → `"1994"`, `" 2019/I "` → `"2019/I"`, `"\u{a0}"` → `"No Year"`.
pub fn normalize_year(raw: &str) -> String {
    raw.replace('\n', "")
        .split_whitespace()
        .next()
        .unwrap_or(NO_YEAR)
        .to_string()
}

/// Title href → absolute URL, resolved against the site base.
///
/// `"/title/tt0109830/"` → `"https://www.imdb.com/title/tt0109830/"`.
/// Absolute hrefs pass through.
pub fn resolve_link(base: &Url, href: &str) -> Result<String, url::ParseError> {
    base.join(href).map(String::from)
}
