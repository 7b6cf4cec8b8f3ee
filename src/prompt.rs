// src/prompt.rs

use std::{
    error::Error,
    io::{BufRead, Write},
};

use log::{info, warn};

use crate::config::consts::PROMPT;
use crate::reference::ReferenceIdentifierSet;

/// Ask for an identifier until one from `known` is entered.
///
/// Only the line terminator is stripped; the rest of the line must match a
/// known identifier exactly. Unknown input is reported and asked again, with
/// no attempt limit. End of input before a match is an error.
pub fn prompt_for_identifier<R: BufRead, W: Write>(
    known: &ReferenceIdentifierSet,
    mut input: R,
    mut output: W,
) -> Result<String, Box<dyn Error>> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err("input closed before a known actor id was entered".into());
        }
        let candidate = strip_line_ending(&line);

        if known.contains(candidate) {
            info!("Actor id accepted: {candidate}");
            return Ok(candidate.to_string());
        }
        warn!("Actor id rejected: {candidate:?}");
        writeln!(output, "{}", not_found_message(candidate))?;
    }
}

/// Non-interactive variant for `--id`: one shot, unknown id is an error.
pub fn validate_identifier(known: &ReferenceIdentifierSet, id: &str) -> Result<String, Box<dyn Error>> {
    if known.contains(id) {
        Ok(id.to_string())
    } else {
        Err(not_found_message(id).into())
    }
}

pub fn not_found_message(id: &str) -> String {
    format!("Actor with ID = {id} not found in the database. Try another ID")
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> ReferenceIdentifierSet {
        ["nm0000001", "nm0000158"].into_iter().collect()
    }

    fn run(input: &str) -> (Result<String, Box<dyn Error>>, String) {
        let mut out = Vec::new();
        let r = prompt_for_identifier(&known(), input.as_bytes(), &mut out);
        (r, String::from_utf8(out).unwrap())
    }

    #[test]
    fn known_id_accepted_first_time() {
        let (r, out) = run("nm0000158\n");
        assert_eq!(r.unwrap(), "nm0000158");
        assert_eq!(out, PROMPT);
    }

    #[test]
    fn unknown_ids_reprompt_until_known() {
        let (r, out) = run("nm9999999\nfoo\nnm0000001\n");
        assert_eq!(r.unwrap(), "nm0000001");
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert!(out.contains("Actor with ID = nm9999999 not found in the database. Try another ID"));
        assert!(out.contains("Actor with ID = foo not found"));
    }

    #[test]
    fn surrounding_spaces_are_not_trimmed() {
        let (r, out) = run(" nm0000001\nnm0000001 \r\nnm0000001\r\n");
        assert_eq!(r.unwrap(), "nm0000001");
        assert_eq!(out.matches("not found").count(), 2);
    }

    #[test]
    fn unknown_ids_never_accepted_before_eof() {
        let (r, out) = run("nm1\nnm2\nnm3");
        assert!(r.unwrap_err().to_string().contains("input closed"));
        assert_eq!(out.matches("not found").count(), 3);
    }

    #[test]
    fn validate_identifier_one_shot() {
        assert_eq!(validate_identifier(&known(), "nm0000001").unwrap(), "nm0000001");
        let err = validate_identifier(&known(), "nm404").unwrap_err();
        assert!(err.to_string().contains("ID = nm404 not found"));
    }
}
