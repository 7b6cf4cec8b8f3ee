// src/specs/profile.rs

use std::error::Error;

use reqwest::blocking::Client;
use url::Url;

use crate::core::net::{self, PageResponse};

/// `https://www.imdb.com/` + `nm0000158` → `https://www.imdb.com/name/nm0000158/`
pub fn profile_url(base: &Url, id: &str) -> Result<Url, url::ParseError> {
    base.join(&format!("name/{id}/"))
}

/// Parse the configured site base. A missing trailing slash is added so that
/// relative joins keep the last path segment.
pub fn site_base(base: &str) -> Result<Url, url::ParseError> {
    if base.ends_with('/') {
        Url::parse(base)
    } else {
        Url::parse(&format!("{base}/"))
    }
}

/// One GET for the person page. The status is not checked.
pub fn fetch(client: &Client, base: &Url, id: &str) -> Result<PageResponse, Box<dyn Error>> {
    let url = profile_url(base, id)?;
    net::http_get_page(client, url.as_str())
}
