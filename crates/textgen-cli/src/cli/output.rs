use anyhow::{Context, bail};
use std::{
    io,
    path::{Path, PathBuf},
};
use textgen::WriterSink;
use tokio::fs::{File, OpenOptions};

/// Name that selects standard output instead of a file.
pub const STDOUT_NAME: &str = "std";

/// Where generated text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// `std` in any letter case selects standard output, anything else is a
    /// path.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(STDOUT_NAME) {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Returns `true` for standard output.
    pub const fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }
}

/// Creates `path`, refusing to touch a file that is already there.
pub async fn create_new(path: &Path) -> anyhow::Result<WriterSink<File>> {
    let opened = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await;

    let file = match opened {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            bail!("output file exists already: {}", path.display())
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("can't create output file {}", path.display()));
        }
    };

    Ok(WriterSink::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use textgen::Sink;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("textgen-cli-{}-{name}", std::process::id()))
    }

    #[test]
    fn std_in_any_case_is_stdout() {
        assert_eq!(Output::parse("std"), Output::Stdout);
        assert_eq!(Output::parse("STD"), Output::Stdout);
        assert_eq!(Output::parse("Std"), Output::Stdout);
        assert!(Output::parse("std").is_stdout());
    }

    #[test]
    fn anything_else_is_a_path() {
        assert_eq!(
            Output::parse("out/std.txt"),
            Output::File(PathBuf::from("out/std.txt"))
        );
        assert!(!Output::parse("stdout").is_stdout());
    }

    #[tokio::test]
    async fn creates_and_writes_a_new_file() {
        let path = scratch_path("new");
        let _ = std::fs::remove_file(&path);

        let mut sink = create_new(&path).await.unwrap();
        sink.write(b"hello").await.unwrap();
        sink.finish().await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn refuses_an_existing_file() {
        let path = scratch_path("existing");
        std::fs::write(&path, b"keep me").unwrap();

        let err = create_new(&path).await.unwrap_err();
        assert!(format!("{err:#}").contains("output file exists already"));
        assert_eq!(std::fs::read(&path).unwrap(), b"keep me");
        std::fs::remove_file(&path).unwrap();
    }
}
