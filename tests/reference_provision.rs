// tests/reference_provision.rs
//
// ensure_provisioned: the three branches, plus failure cleanup.
//
mod common;

use std::fs;
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use common::{local_client, serve_once, tmp_dir, Recorder};
use filmo_scrape::config::ReferenceOptions;
use filmo_scrape::core::RetryPolicy;
use filmo_scrape::progress::Progress;
use filmo_scrape::reference::{ensure_provisioned, Provisioned, ReferenceIdentifierSet};

const TSV: &str = "nconst\tprimaryName\tbirthYear\nnm0000001\tFred Astaire\t1899\nnm0000158\tTom Hanks\t1956\n";

fn gzip(text: &str) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(text.as_bytes()).unwrap();
    enc.finish().unwrap()
}

fn opts_in(name: &str) -> ReferenceOptions {
    ReferenceOptions {
        data_dir: tmp_dir(name),
        // nothing listens here; a download attempt fails fast
        dataset_url: "http://127.0.0.1:9/name.basics.tsv.gz".into(),
    }
}

#[test]
fn existing_data_file_is_left_alone() {
    let opts = opts_in("prov_present");
    fs::write(opts.data_file(), "nm1\tA\n").unwrap();

    let mut rec = Recorder::default();
    let out = ensure_provisioned(&opts, &local_client(), &RetryPolicy::default(), Some(&mut rec as &mut dyn Progress)).unwrap();

    assert_eq!(out, Provisioned::AlreadyPresent);
    assert_eq!(fs::read_to_string(opts.data_file()).unwrap(), "nm1\tA\n");
    assert_eq!(rec.lines, vec!["Database file data.tsv found."]);
}

#[test]
fn local_archive_is_unpacked() {
    let opts = opts_in("prov_archive");
    fs::write(opts.archive_file(), gzip(TSV)).unwrap();

    let out = ensure_provisioned(&opts, &local_client(), &RetryPolicy::default(), None).unwrap();

    assert_eq!(out, Provisioned::FromArchive);
    assert_eq!(fs::read_to_string(opts.data_file()).unwrap(), TSV);
    assert!(opts.archive_file().is_file(), "archive is kept");
    assert!(!opts.data_dir.join("data.tsv.part").exists());

    let ids = ReferenceIdentifierSet::load(&opts.data_file()).unwrap();
    assert!(ids.contains("nm0000158"));
    assert_eq!(ids.len(), 3);

    // idempotent
    let again = ensure_provisioned(&opts, &local_client(), &RetryPolicy::default(), None).unwrap();
    assert_eq!(again, Provisioned::AlreadyPresent);
}

#[test]
fn corrupt_archive_fails_without_leftovers() {
    let opts = opts_in("prov_corrupt");
    fs::write(opts.archive_file(), b"definitely not gzip").unwrap();

    let err = ensure_provisioned(&opts, &local_client(), &RetryPolicy::default(), None).unwrap_err();

    assert!(err.to_string().contains("could not unpack"), "{err}");
    assert!(!opts.data_file().exists());
    assert!(!opts.data_dir.join("data.tsv.part").exists());
}

#[test]
fn missing_archive_is_downloaded_then_unpacked() {
    let (base, server) = serve_once("200 OK", gzip(TSV));
    let mut opts = opts_in("prov_download");
    opts.dataset_url = format!("{base}name.basics.tsv.gz");

    let mut rec = Recorder::default();
    let out = ensure_provisioned(&opts, &local_client(), &RetryPolicy::default(), Some(&mut rec as &mut dyn Progress)).unwrap();

    assert_eq!(out, Provisioned::Downloaded);
    assert_eq!(fs::read_to_string(opts.data_file()).unwrap(), TSV);
    assert!(opts.archive_file().is_file());
    assert!(rec.lines.iter().any(|l| l == "File name.basics.tsv.gz downloaded successfully."));
    assert!(rec.lines.last().unwrap().starts_with("File unzip to "));

    let head = server.join().unwrap();
    assert!(head.starts_with("GET /name.basics.tsv.gz HTTP/1.1"), "{head}");
}

#[test]
fn failed_download_leaves_nothing_behind() {
    let (base, server) = serve_once("404 Not Found", b"gone".to_vec());
    let mut opts = opts_in("prov_404");
    opts.dataset_url = format!("{base}name.basics.tsv.gz");

    let err = ensure_provisioned(&opts, &local_client(), &RetryPolicy::default(), None).unwrap_err();

    assert!(err.to_string().contains("404"), "{err}");
    assert!(!opts.archive_file().exists());
    assert!(!opts.data_dir.join("name.basics.tsv.gz.part").exists());
    assert!(!opts.data_file().exists());
    server.join().unwrap();
}
