//! Packaging the install tree into a zip archive.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::ARCHIVE_ROOT;
use crate::util::context::GlobalContext;
use crate::util::fs::{relative_path, to_slash_path, walk_files};
use crate::util::shell::Status;

/// Result of an archive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// The written archive.
    pub path: PathBuf,
    /// Entry names in the order they were written.
    pub entries: Vec<String>,
}

/// Zip every file under the install root into `builds/discord-rpc-<platform>.zip`.
///
/// Entries are named `discord-rpc/<path relative to the install root>`.
/// An existing archive is overwritten.
pub fn archive(ctx: &GlobalContext) -> Result<ArchiveReport> {
    let layout = ctx.layout();
    let install_root = layout.install_root();
    if !install_root.is_dir() {
        bail!(
            "nothing to archive, {} does not exist\n\
             \n\
             Run `rpc-build libs` first.",
            install_root.display()
        );
    }

    let archive_path = layout.archive_path(ctx.platform());
    let span = ctx.shell().span(Status::Archiving, archive_path.display());

    let file = File::create(&archive_path)
        .with_context(|| format!("failed to create archive: {}", archive_path.display()))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = Vec::new();
    for path in walk_files(&install_root)? {
        let name = format!(
            "{}/{}",
            ARCHIVE_ROOT,
            to_slash_path(&relative_path(&install_root, &path))
        );
        ctx.shell().status(Status::Adding, &name);

        zip.start_file(name.as_str(), options)
            .with_context(|| format!("failed to add `{}` to archive", name))?;
        let mut src = File::open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        io::copy(&mut src, &mut zip)
            .with_context(|| format!("failed to write `{}` to archive", name))?;

        entries.push(name);
    }

    let mut writer = zip
        .finish()
        .with_context(|| format!("failed to finish archive: {}", archive_path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to write archive: {}", archive_path.display()))?;

    tracing::info!("archived {} file(s)", entries.len());
    span.finish();

    Ok(ArchiveReport {
        path: archive_path,
        entries,
    })
}
