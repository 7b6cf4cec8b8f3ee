// src/reference.rs
//
// Local copy of the name.basics dataset: provisioning and loading.
//
// Layout inside the data dir:
//   name.basics.tsv.gz   downloaded archive (kept after unpacking)
//   data.tsv             unpacked TSV, one person per line, id first

use std::{
    error::Error,
    fs::{self, File},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use flate2::read::MultiGzDecoder;
use indexmap::IndexSet;
use log::info;
use reqwest::blocking::Client;

use crate::{
    config::{consts::{ARCHIVE_FILE, DATA_FILE}, ReferenceOptions},
    core::{net, RetryPolicy},
    progress::Progress,
};

/// Which branch `ensure_provisioned` took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provisioned {
    AlreadyPresent,
    FromArchive,
    Downloaded,
}

/// Make sure `data.tsv` exists in the data dir. Idempotent.
///
/// 1. `data.tsv` present → nothing to do.
/// 2. archive present → unpack it.
/// 3. otherwise download the archive, then unpack it.
pub fn ensure_provisioned(
    opts: &ReferenceOptions,
    client: &Client,
    retry: &RetryPolicy,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Provisioned, Box<dyn Error>> {
    let data_file = opts.data_file();
    let archive = opts.archive_file();

    if data_file.is_file() {
        say(&mut progress, &format!("Database file {DATA_FILE} found."));
        return Ok(Provisioned::AlreadyPresent);
    }

    let outcome = if archive.is_file() {
        say(&mut progress, &format!("Database zip file {ARCHIVE_FILE} found."));
        Provisioned::FromArchive
    } else {
        say(
            &mut progress,
            &format!("Database file {DATA_FILE} not found.\nDatabase zip file {ARCHIVE_FILE} not found.\nFile download starts..."),
        );
        fs::create_dir_all(&opts.data_dir)?;
        retry.run("dataset download", || {
            net::download_to_file(client, &opts.dataset_url, &archive)
        })?;
        say(&mut progress, &format!("File {ARCHIVE_FILE} downloaded successfully."));
        Provisioned::Downloaded
    };

    decompress_archive(&archive, &data_file)?;
    say(&mut progress, &format!("File unzip to {} successfully.", data_file.display()));
    Ok(outcome)
}

/// Unpack a (possibly multi-member) gzip file. Writes through `<to>.part`
/// so a failed unpack leaves no half-written `to` behind.
pub fn decompress_archive(from: &Path, to: &Path) -> Result<u64, Box<dyn Error>> {
    info!("Unpack {} → {}", from.display(), to.display());
    let part = net::part_path(to);

    let unpacked = (|| -> io::Result<u64> {
        let mut reader = MultiGzDecoder::new(BufReader::new(File::open(from)?));
        let mut out = BufWriter::new(File::create(&part)?);
        let n = io::copy(&mut reader, &mut out)?;
        out.flush()?;
        Ok(n)
    })();

    match unpacked {
        Ok(n) => {
            fs::rename(&part, to)?;
            info!("Unpacked {n} bytes");
            Ok(n)
        }
        Err(e) => {
            let _ = fs::remove_file(&part);
            Err(format!("could not unpack {}: {e}", from.display()).into())
        }
    }
}

fn say(progress: &mut Option<&mut dyn Progress>, msg: &str) {
    info!("{msg}");
    if let Some(p) = progress.as_deref_mut() {
        p.log(msg);
    }
}

/* ---------------- Identifier set ---------------- */

/// Known person identifiers in file order. Duplicates keep their first slot.
#[derive(Clone, Debug, Default)]
pub struct ReferenceIdentifierSet {
    ids: IndexSet<String>,
}

impl ReferenceIdentifierSet {
    /// Load from a reference file. The file must be UTF-8.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)
            .map_err(|e| format!("cannot open reference file {}: {e}", path.display()))?;
        let set = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} identifiers from {}", set.len(), path.display());
        Ok(set)
    }

    /// First whitespace-delimited token of every non-blank line.
    /// The dataset's header line (`nconst ...`) is kept like any other line.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut ids = IndexSet::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(id) = first_token(&line) {
                ids.insert(id.to_string());
            }
        }
        Ok(Self { ids })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceIdentifierSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { ids: iter.into_iter().map(Into::into).collect() }
    }
}

/// `"nm0000001\tFred Astaire\t1899"` → `Some("nm0000001")`; blank → `None`.
pub fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}
