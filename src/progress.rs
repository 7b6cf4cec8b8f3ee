// src/progress.rs
/// Status reporting for the pipeline stages.
/// The CLI prints to stdout; tests pass `None` or a recorder.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Provision,
    Validate,
    Fetch,
    Extract,
    Export,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Provision,
        Stage::Validate,
        Stage::Fetch,
        Stage::Extract,
        Stage::Export,
    ];
}

/// Prints status lines to stdout.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}
