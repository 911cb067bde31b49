use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Largest source text accepted in one translation (256 KiB).
pub const MAX_INPUT_SIZE: usize = 256 * 1024;

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// Text given directly on the command line.
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl SourceInput {
    /// Picks the source from the `--text` option and the file argument.
    ///
    /// Inline text wins over a file; with neither, stdin is read.
    pub fn from_args(text: Option<&str>, file: Option<&Path>) -> Self {
        match (text, file) {
            (Some(text), _) => Self::Inline(text.to_string()),
            (None, Some(path)) => Self::File(path.to_path_buf()),
            (None, None) => Self::Stdin,
        }
    }
}

pub struct InputReader;

impl InputReader {
    pub fn read(source: &SourceInput) -> Result<String> {
        match source {
            SourceInput::Inline(text) => {
                check_size(text.len(), "text")?;
                Ok(text.clone())
            }
            SourceInput::File(path) => Self::read_file(path),
            SourceInput::Stdin => Self::read_stdin(),
        }
    }

    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        check_size(metadata.len() as usize, "file")?;

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            // Nothing piped in; let the orchestrator report the empty source.
            return Ok(String::new());
        }

        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = stdin.lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);
            check_size(buffer.len(), "input")?;
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn check_size(size: usize, what: &str) -> Result<()> {
    if size > MAX_INPUT_SIZE {
        bail!(
            "Source {what} ({:.1} KiB) exceeds maximum allowed size ({} KiB).\n\n\
             Consider translating it in smaller parts.",
            size as f64 / 1024.0,
            MAX_INPUT_SIZE / 1024
        );
    }
    Ok(())
}
