//! Output sink: rendered bytes go to a file or stdout.
//!
//! When the destination is a file, an octal mode string is applied
//! after the write. A mode parse or chmod failure is reported as a
//! warning; the written content stands.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::error::Result;

/// Destination stream for command output.
pub enum Sink {
    Stdout(io::Stdout),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Sink {
    /// Open the destination: the named file (created or truncated) or
    /// stdout.
    pub fn open(out: Option<&Path>) -> Result<Self> {
        match out {
            Some(path) => Ok(Self::File {
                writer: BufWriter::new(File::create(path)?),
                path: path.to_path_buf(),
            }),
            None => Ok(Self::Stdout(io::stdout())),
        }
    }

    /// Flush, then apply the requested mode when the destination is a
    /// file.
    pub fn finish(self, mode: &str) -> Result<()> {
        match self {
            Self::Stdout(mut stream) => Ok(stream.flush()?),
            Self::File { mut writer, path } => {
                writer.flush()?;
                apply_mode(&path, mode);
                Ok(())
            }
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(stream) => stream.write(buf),
            Self::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(stream) => stream.flush(),
            Self::File { writer, .. } => writer.flush(),
        }
    }
}

/// Apply an octal mode string to a file, warning instead of failing.
pub fn apply_mode(path: &Path, mode: &str) {
    let bits = match u32::from_str_radix(mode, 8) {
        Ok(bits) => bits,
        Err(_) => {
            output::warn(&format!("invalid file mode: {mode}"));
            return;
        }
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(err) = fs::set_permissions(path, fs::Permissions::from_mode(bits)) {
            output::warn(&format!(
                "could not set mode {mode} on {}: {err}",
                path.display()
            ));
        }
    }
    #[cfg(not(unix))]
    {
        let _ = bits;
        output::warn("file modes are not supported on this platform");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_applies_mode_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut sink = Sink::open(Some(&path)).unwrap();
        sink.write_all(b"rendered").unwrap();
        sink.finish("0644").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "rendered");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o644);
        }
    }

    #[test]
    fn invalid_mode_does_not_fail_the_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut sink = Sink::open(Some(&path)).unwrap();
        sink.write_all(b"rendered").unwrap();
        sink.finish("not-octal").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "rendered");
    }
}
