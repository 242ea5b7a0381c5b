///// Otter: External command execution - merged stdout/stderr capture as ordered lines.
///// Schneefuchs: One collector thread per stream into a shared buffer; CR stripped.
///// Maus: Exit code passed through; spawn failure distinguishes not-found from the rest.
///// Datei: src/runner.rs

use std::io::{self, BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::errors::AppError;

#[derive(Debug)]
pub struct CaptureResult {
    pub lines: Vec<String>,
    pub code: i32,
}

/// Run `exe args...`, capture stdout and stderr merged into one ordered
/// line sequence, and return it together with the child's exit code.
pub fn run_captured(exe: &str, args: &[String]) -> Result<CaptureResult, AppError> {
    let mut cmd = Command::new(exe);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::CommandNotFound(exe.to_string()),
        _ => AppError::Spawn { exe: exe.to_string(), source: e },
    })?;

    let sink: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let mut collectors = Vec::new();
    if let Some(out) = child.stdout.take() {
        collectors.push(spawn_collector(out, Arc::clone(&sink)));
    }
    if let Some(err) = child.stderr.take() {
        collectors.push(spawn_collector(err, Arc::clone(&sink)));
    }

    let status = child.wait()?;
    for c in collectors {
        let _ = c.join();
    }

    let lines = match Arc::try_unwrap(sink) {
        Ok(m) => m.into_inner().unwrap_or_else(|p| p.into_inner()),
        Err(arc) => arc.lock().map(|g| g.clone()).unwrap_or_default(),
    };

    Ok(CaptureResult { lines, code: status.code().unwrap_or(1) })
}

fn spawn_collector<R>(stream: R, sink: Arc<Mutex<Vec<String>>>) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let reader = BufReader::new(stream);
        for line in reader.lines() {
            let Ok(raw) = line else { break };
            let cleaned = sanitize_line(&raw);
            if let Ok(mut buf) = sink.lock() {
                buf.push(cleaned);
            }
        }
    })
}

/// Strip carriage returns; everything else is the engine's business.
fn sanitize_line(s: &str) -> String {
    s.replace('\r', "")
}
