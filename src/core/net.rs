// src/core/net.rs

// Blocking HTTP on top of reqwest. One client per run.

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
    time::Duration,
};

use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;

use crate::config::consts::{ACCEPT, ACCEPT_LANGUAGE, PART_SUFFIX};

/// Raw page as the server sent it, error pages included.
#[derive(Clone, Debug)]
pub struct PageResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Build the run's client. `timeout: None` disables reqwest's default 30 s limit.
pub fn build_client(timeout: Option<Duration>) -> Result<Client, Box<dyn Error>> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(client)
}

/// The fixed browser-like headers sent with every page request.
pub fn page_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE));
    headers
}

/// GET a page. A non-success status is logged, not returned as an error:
/// the body travels downstream either way.
pub fn http_get_page(client: &Client, url: &str) -> Result<PageResponse, Box<dyn Error>> {
    debug!("GET {url}");
    let resp = client.get(url).headers(page_headers()).send()?;
    let status = resp.status();
    if !status.is_success() {
        warn!("GET {url} answered {status}; parsing the body anyway");
    }
    let body = resp.text()?;
    Ok(PageResponse { status, body })
}

/// Stream `url` into `dest`. Bytes land in `<dest>.part` first and are renamed
/// into place only after the whole body was written.
pub fn download_to_file(client: &Client, url: &str, dest: &Path) -> Result<u64, Box<dyn Error>> {
    info!("Download {url} → {}", dest.display());
    let mut resp = client.get(url).send()?.error_for_status()?;

    let part = part_path(dest);
    let written = (|| -> Result<u64, Box<dyn Error>> {
        let mut out = BufWriter::new(File::create(&part)?);
        let n = resp.copy_to(&mut out)?;
        out.flush()?;
        Ok(n)
    })();

    match written {
        Ok(n) => {
            fs::rename(&part, dest)?;
            info!("Download done: {n} bytes");
            Ok(n)
        }
        Err(e) => {
            let _ = fs::remove_file(&part);
            Err(e)
        }
    }
}

/// `foo.tsv.gz` → `foo.tsv.gz.part`
pub fn part_path(dest: &Path) -> std::path::PathBuf {
    let mut name = dest.as_os_str().to_os_string();
    name.push(".");
    name.push(PART_SUFFIX);
    name.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_headers_are_fixed() {
        let h = page_headers();
        assert_eq!(
            h.get(header::ACCEPT).unwrap(),
            "text/html,application/xhtml+xml,application/xml;q=0.5, image/webp,*/*;q=0.5"
        );
        assert_eq!(h.get(header::ACCEPT_LANGUAGE).unwrap(), "en-US;q=0.5,en;q=0.3");
    }

    #[test]
    fn part_path_appends_suffix() {
        let p = part_path(Path::new("dir/name.basics.tsv.gz"));
        assert_eq!(p, Path::new("dir/name.basics.tsv.gz.part"));
    }
}
