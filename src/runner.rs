// src/runner.rs
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::info;
use reqwest::blocking::Client;

use crate::{
    config::AppOptions,
    core::{net, RetryPolicy},
    data::ActorRecord,
    file,
    progress::{Progress, Stage},
    prompt,
    reference::{self, Provisioned, ReferenceIdentifierSet},
    specs::{filmography, profile},
};

/// What a run produced.
pub struct RunSummary {
    pub provisioned: Provisioned,
    pub actor_id: String,
    pub record: ActorRecord,
    pub files_written: Vec<PathBuf>,
}

/// Top-level pipeline:
/// provision → validate id → fetch page → extract → export.
///
/// `input`/`output` carry the id prompt. `progress` receives status lines
/// and stage completions; `None` keeps the run silent.
pub fn run<R: BufRead, W: Write>(
    opts: &AppOptions,
    input: R,
    output: W,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let client = net::build_client(opts.scrape.timeout)?;
    run_with_client(opts, &client, input, output, progress)
}

/// [`run`] with a caller-supplied HTTP client.
pub fn run_with_client<R: BufRead, W: Write>(
    opts: &AppOptions,
    client: &Client,
    input: R,
    output: W,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::ALL.len());
    }

    let result = run_stages(opts, client, input, output, reborrow(&mut progress));

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn run_stages<R: BufRead, W: Write>(
    opts: &AppOptions,
    client: &Client,
    input: R,
    output: W,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let retry = RetryPolicy::with_attempts(opts.scrape.attempts);

    // 1. Reference data
    let provisioned =
        reference::ensure_provisioned(&opts.reference, client, &retry, reborrow(&mut progress))?;
    done(&mut progress, Stage::Provision);

    // 2. Actor id (the reference set is large; it is dropped with this block)
    let actor_id = {
        let known = ReferenceIdentifierSet::load(&opts.reference.data_file())?;
        match &opts.scrape.actor_id {
            Some(id) => prompt::validate_identifier(&known, id)?,
            None => prompt::prompt_for_identifier(&known, input, output)?,
        }
    };
    done(&mut progress, Stage::Validate);

    // 3. Profile page
    let base = profile::site_base(&opts.scrape.base_url)?;
    let page = retry.run("profile fetch", || profile::fetch(client, &base, &actor_id))?;
    info!("Fetched profile {actor_id}: {} ({} bytes)", page.status, page.body.len());
    done(&mut progress, Stage::Fetch);

    // 4. Extract
    let record = filmography::parse_actor_record(&page.body, &base)?;
    done(&mut progress, Stage::Extract);

    // 5. Export
    let files_written = file::export_record(&opts.export, &record)?;
    done(&mut progress, Stage::Export);

    Ok(RunSummary { provisioned, actor_id, record, files_written })
}

// The cast shortens the trait object's lifetime so the caller's option stays usable.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}

fn done(progress: &mut Option<&mut dyn Progress>, stage: Stage) {
    info!("Stage done: {stage:?}");
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(stage);
    }
}

/// Human summary printed after a run.
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Your actor is {}", summary.record.full_name()),
        "Filmography: ".to_string(),
    ];
    for (category, count) in summary.record.counts() {
        lines.push(format!("{category}: {count}"));
    }
    let paths: Vec<String> = summary
        .files_written
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    if !paths.is_empty() {
        lines.push(format!("Full information saved to {}", paths.join(" and to ")));
    }
    lines
}
