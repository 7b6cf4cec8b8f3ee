// src/bin/cli.rs
use std::error::Error;

use color_eyre::eyre::{eyre, Report};
use filmo_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().map_err(report)
}

/// Rebuild a boxed error as a report, keeping every `source()` as a cause.
fn report(err: Box<dyn Error>) -> Report {
    let mut messages = Vec::new();
    let mut cur: Option<&(dyn Error + 'static)> = Some(err.as_ref());
    while let Some(e) = cur {
        messages.push(e.to_string());
        cur = e.source();
    }

    // innermost cause first, then wrap outwards
    let mut messages = messages.into_iter().rev();
    let root = messages.next().unwrap_or_default();
    messages.fold(eyre!(root), |report, msg| report.wrap_err(msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fmt, io};

    #[derive(Debug)]
    struct Download(io::Error);

    impl fmt::Display for Download {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "archive download failed")
        }
    }

    impl Error for Download {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn report_keeps_source_chain() {
        let err: Box<dyn Error> =
            Box::new(Download(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused")));
        let chain: Vec<String> = report(err).chain().map(|e| e.to_string()).collect();
        assert_eq!(chain, ["archive download failed", "connection refused"]);
    }

    #[test]
    fn plain_message_stays_single() {
        let err: Box<dyn Error> = "no filmography categories".into();
        let chain: Vec<String> = report(err).chain().map(|e| e.to_string()).collect();
        assert_eq!(chain, ["no filmography categories"]);
    }
}
