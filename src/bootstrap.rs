//! Bootstrap entry point.
//!
//! Writes the fixed startup banner and walks the engine status from
//! `Running` to `Terminated`. The banner carries no dynamic content, so
//! every run prints the same three lines.

use std::io::{self, Write};
use tracing::{debug, info};

use crate::types::EngineStatus;

pub const ENGINE_TITLE: &str = concat!("ArbitraX Strategy Engine v", env!("CARGO_PKG_VERSION"));
pub const INITIALIZING: &str = "Initializing...";
pub const READY: &str = "Strategy engine ready!";

/// The banner, in output order.
pub const BANNER_LINES: [&str; 3] = [ENGINE_TITLE, INITIALIZING, READY];

/// Run the bootstrap sequence against `out`.
///
/// Returns the final status, which is always [`EngineStatus::Terminated`]
/// unless writing to `out` fails.
pub fn run<W: Write>(out: &mut W) -> io::Result<EngineStatus> {
    let status = EngineStatus::Running;
    debug!(%status, "Bootstrap started");

    writeln!(out, "{ENGINE_TITLE}")?;
    writeln!(out, "{INITIALIZING}")?;

    // Database connection, API server and strategy executor are not wired
    // up yet; startup goes straight to ready.

    writeln!(out, "{READY}")?;
    out.flush()?;

    let status = status.terminate();
    info!(%status, "Strategy engine bootstrap complete");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_carries_version() {
        assert_eq!(ENGINE_TITLE, "ArbitraX Strategy Engine v0.1.0");
    }

    #[test]
    fn test_run_writes_banner_in_order() {
        let mut buf = Vec::new();
        let status = run(&mut buf).unwrap();

        assert_eq!(status, EngineStatus::Terminated);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "ArbitraX Strategy Engine v0.1.0\nInitializing...\nStrategy engine ready!\n"
        );
    }

    #[test]
    fn test_run_is_repeatable() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        run(&mut first).unwrap();
        run(&mut second).unwrap();
        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, BANNER_LINES);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_surfaces_write_error() {
        let err = run(&mut BrokenPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
