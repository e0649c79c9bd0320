//! Claiming an output file for `plot` and `export` before anything is written.

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// What is about to be written, for the user-facing messages.
#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputKind {
    Chart,
    Segments(ExportFormat),
}

impl OutputKind {
    fn describe(&self) -> String {
        match self {
            OutputKind::Chart => "PDF chart".to_string(),
            OutputKind::Segments(format) => {
                format!("{} segment export", format.as_str().to_uppercase())
            }
        }
    }
}

/// Make sure `path` can receive a new chart or export.
///
/// A directory or a missing parent directory is refused outright. An existing
/// file is replaced with `force`, otherwise only after the user agrees.
pub(crate) fn claim_output(path: &Path, kind: OutputKind, force: bool) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "output path '{}' is a directory",
            path.display()
        )));
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.is_dir()
    {
        return Err(AppError::Export(format!(
            "output directory '{}' does not exist",
            dir.display()
        )));
    }

    if force || !path.exists() {
        return Ok(());
    }

    let what = kind.describe();
    warning(format!("{what} '{}' already exists.", path.display()));

    if confirm("Replace it?")? {
        info(format!("Replacing {what}."));
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "{what} not written, '{}' kept",
            path.display()
        )))
    }
}

/// Yes/no question on stdin; anything but `y`/`yes` (or EOF) is a no.
fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
