// tests/common/mod.rs
//
// Shared helpers: scratch dirs, a one-shot local HTTP server, a recording
// progress sink.
#![allow(dead_code)]

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use filmo_scrape::progress::{Progress, Stage};
use reqwest::blocking::Client;

pub const FIXTURE: &str = include_str!("../fixtures/profile.html");

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("filmo_scrape_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Client that never goes through a proxy, so 127.0.0.1 stays local.
pub fn local_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

/// Serve exactly one request with `status` and `body`.
/// Returns the base URL and a handle yielding the raw request head.
pub fn serve_once(status: &str, body: Vec<u8>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status = status.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 { break; }
            head.extend_from_slice(&buf[..n]);
        }

        let preamble = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(preamble.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{addr}/"), handle)
}

#[derive(Default)]
pub struct Recorder {
    pub lines: Vec<String>,
    pub stages: Vec<Stage>,
    pub began: Option<usize>,
    pub finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.began = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn stage_done(&mut self, stage: Stage) { self.stages.push(stage); }
    fn finish(&mut self) { self.finished = true; }
}
