//! Batch commands: walk a target and apply one operation per MP3.
//!
//! Every command writes its status lines to the runner's output and talks
//! to disk tags only through the runner's [`TagStore`]. The first failing
//! file aborts the batch; the error names that file.

use std::collections::HashSet;
use std::io::Write;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::core::format::{self, FormatError};
use crate::core::library::{self, LibraryError};
use crate::core::tags::{TagError, TagStore};
use crate::core::types::{Field, FieldSet};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error("{path:?} does not fit format {template:?}: {source}")]
    Format {
        path: PathBuf,
        template: String,
        #[source]
        source: FormatError,
    },

    #[error("{path:?}: rendered name {name:?} is not a valid file name")]
    InvalidName { path: PathBuf, name: String },

    #[error("{path:?}: {target:?} already exists")]
    Exists { path: PathBuf, target: PathBuf },

    #[error("failed to rename {path:?}: {source}")]
    Rename {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Switches that change how a batch runs. Passed explicitly, never global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print every field that gets written or removed.
    pub verbose: bool,
    /// Report what would happen without touching any file.
    pub dry_run: bool,
}

pub struct Runner<S, W> {
    store: S,
    out: W,
    options: RunOptions,
}

impl<S: TagStore, W: Write> Runner<S, W> {
    pub fn new(store: S, out: W, options: RunOptions) -> Self {
        Self {
            store,
            out,
            options,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Print the tags of every file, or render `template` for each one.
    pub fn query(&mut self, target: &Path, template: Option<&str>) -> Result<(), CommandError> {
        self.each_mp3(target, |runner, path| {
            let fields = runner.store.read(path)?;
            match template {
                Some(template) => {
                    let line = render_for(path, &fields, template)?;
                    writeln!(runner.out, "{line}")?;
                }
                None => {
                    writeln!(runner.out, "[+] Querying {}", library::display_name(path))?;
                    runner.print_fields(&fields)?;
                }
            }
            Ok(())
        })
    }

    /// Extract fields from each file name with `template` and write them.
    pub fn tag(&mut self, target: &Path, template: &str) -> Result<(), CommandError> {
        self.dry_run_banner()?;
        self.each_mp3(target, |runner, path| {
            let content = library::content_stem(path);
            let fields = format::extract(&content, template).map_err(|source| {
                CommandError::Format {
                    path: path.to_path_buf(),
                    template: template.to_string(),
                    source,
                }
            })?;
            debug!(file = %path.display(), ?fields, "extracted");

            writeln!(runner.out, "[+] Tagging {}", library::display_name(path))?;
            if runner.options.verbose {
                runner.print_fields(&fields)?;
            }

            runner.commit(path, &fields)
        })
    }

    /// Write the same hand-entered fields to every file.
    pub fn manually(&mut self, target: &Path, fields: &FieldSet) -> Result<(), CommandError> {
        self.dry_run_banner()?;
        self.each_mp3(target, |runner, path| {
            writeln!(runner.out, "[+] Tagging {}", library::display_name(path))?;
            if runner.options.verbose {
                runner.print_fields(fields)?;
            }

            runner.commit(path, fields)
        })
    }

    /// Remove the selected fields from every file.
    pub fn remove(&mut self, target: &Path, fields: &[Field]) -> Result<(), CommandError> {
        self.dry_run_banner()?;
        self.each_mp3(target, |runner, path| {
            writeln!(runner.out, "[+] Clearing {}", library::display_name(path))?;
            if runner.options.verbose {
                for field in fields {
                    writeln!(runner.out, "\tremoved {field} tag")?;
                }
            }

            if runner.options.dry_run {
                return Ok(());
            }
            runner.store.clear(path, fields)?;
            info!(file = %path.display(), "cleared {} field(s)", fields.len());
            Ok(())
        })
    }

    /// Rename every file to `template` rendered from its own tags.
    /// The original extension is kept.
    pub fn rename(&mut self, target: &Path, template: &str) -> Result<(), CommandError> {
        self.dry_run_banner()?;
        // Names taken by earlier files in this batch, so a dry run fails
        // where the real run would.
        let mut claimed: HashSet<PathBuf> = HashSet::new();
        self.each_mp3(target, |runner, path| {
            let fields = runner.store.read(path)?;
            let name = render_for(path, &fields, template)?;
            let renamed = renamed_path(path, &name)?;

            writeln!(
                runner.out,
                "[+] Renaming {} -> {}",
                library::display_name(path),
                library::display_name(&renamed)
            )?;

            if renamed == path {
                return Ok(());
            }
            if claimed.contains(&renamed) || renamed.exists() {
                return Err(CommandError::Exists {
                    path: path.to_path_buf(),
                    target: renamed,
                });
            }
            claimed.insert(renamed.clone());
            if runner.options.dry_run {
                return Ok(());
            }

            std::fs::rename(path, &renamed).map_err(|source| CommandError::Rename {
                path: path.to_path_buf(),
                source,
            })?;
            info!(from = %path.display(), to = %renamed.display(), "renamed");
            Ok(())
        })
    }

    /// Run `op` on every MP3 under `target`, skipping everything else.
    fn each_mp3<F>(&mut self, target: &Path, mut op: F) -> Result<(), CommandError>
    where
        F: FnMut(&mut Self, &Path) -> Result<(), CommandError>,
    {
        let paths = library::targets(target)?;
        debug!(target = %target.display(), count = paths.len(), "walking target");

        for path in paths {
            if !library::is_mp3(&path) {
                writeln!(self.out, "[*] Skipping {}", library::display_name(&path))?;
                continue;
            }
            op(self, &path)?;
        }

        Ok(())
    }

    fn commit(&mut self, path: &Path, fields: &FieldSet) -> Result<(), CommandError> {
        if self.options.dry_run || fields.is_empty() {
            return Ok(());
        }
        self.store.write(path, fields)?;
        info!(file = %path.display(), "wrote {} field(s)", fields.status().len());
        Ok(())
    }

    fn print_fields(&mut self, fields: &FieldSet) -> Result<(), CommandError> {
        for (field, value) in fields.status() {
            writeln!(self.out, "\t{field}: {value}")?;
        }
        Ok(())
    }

    fn dry_run_banner(&mut self) -> Result<(), CommandError> {
        if self.options.dry_run {
            writeln!(self.out, "[*] Running in dry-run mode")?;
        }
        Ok(())
    }
}

fn render_for(path: &Path, fields: &FieldSet, template: &str) -> Result<String, CommandError> {
    format::render(fields, template).map_err(|source| CommandError::Format {
        path: path.to_path_buf(),
        template: template.to_string(),
        source,
    })
}

/// Sibling of `path` named `name` plus the original extension.
fn renamed_path(path: &Path, name: &str) -> Result<PathBuf, CommandError> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains(MAIN_SEPARATOR);
    if invalid {
        return Err(CommandError::InvalidName {
            path: path.to_path_buf(),
            name: name.to_string(),
        });
    }

    let file_name = match path.extension() {
        Some(ext) => format!("{name}.{}", ext.to_string_lossy()),
        None => name.to_string(),
    };
    Ok(path.with_file_name(file_name))
}
