//! Command line arguments, parsed with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::RunOptions;
use crate::core::types::{Field, FieldSet};

#[derive(Parser, Debug)]
#[command(name = "tagger")]
#[command(about = "Tag mp3 files from the command line")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Adds more output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Disable colored log output")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query tags
    #[command(visible_alias = "q")]
    Query {
        #[arg(short, long, help = "File or directory to query")]
        target: PathBuf,

        #[arg(short, long, help = "Print this template per file instead of every tag")]
        format: Option<String>,
    },

    /// Tag files from their names, e.g. --format "%a - %t"
    #[command(visible_alias = "t")]
    Tag {
        #[arg(short, long, help = "File or directory to tag")]
        target: PathBuf,

        #[arg(short, long, help = "How to read fields out of the file name")]
        format: String,

        #[arg(long, help = "Only show what would be done")]
        dry_run: bool,
    },

    /// Tag with manual values
    #[command(visible_alias = "m")]
    Manually {
        #[arg(short, long, help = "File or directory to tag")]
        target: PathBuf,

        #[command(flatten)]
        values: ManualValues,

        #[arg(long, help = "Only show what would be done")]
        dry_run: bool,
    },

    /// Remove tags
    #[command(visible_alias = "r")]
    Remove {
        #[arg(short, long, help = "File or directory to clear")]
        target: PathBuf,

        #[command(flatten)]
        selection: FieldSelection,

        #[arg(long, help = "Only show what would be done")]
        dry_run: bool,
    },

    /// Rename files from their tags, e.g. --format "%a - %t"
    #[command(visible_alias = "n")]
    Rename {
        #[arg(short, long, help = "File or directory to rename")]
        target: PathBuf,

        #[arg(short, long, help = "New file name, without extension")]
        format: String,

        #[arg(long, help = "Only show what would be done")]
        dry_run: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct ManualValues {
    #[arg(long, help = "Specifies artist manually")]
    pub artist: Option<String>,
    #[arg(long, help = "Specifies title manually")]
    pub title: Option<String>,
    #[arg(long, help = "Specifies album manually")]
    pub album: Option<String>,
    #[arg(long, help = "Specifies year manually")]
    pub year: Option<String>,
    #[arg(long, help = "Specifies genre manually")]
    pub genre: Option<String>,
}

impl ManualValues {
    /// Empty strings are dropped, same as everywhere else.
    pub fn to_fields(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        let values = [
            (Field::Artist, &self.artist),
            (Field::Title, &self.title),
            (Field::Album, &self.album),
            (Field::Year, &self.year),
            (Field::Genre, &self.genre),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                fields.set(field, value.as_str());
            }
        }
        fields
    }
}

#[derive(clap::Args, Debug, Default)]
pub struct FieldSelection {
    #[arg(long, help = "Removes the artist tag")]
    pub artist: bool,
    #[arg(long, help = "Removes the title tag")]
    pub title: bool,
    #[arg(long, help = "Removes the album tag")]
    pub album: bool,
    #[arg(long, help = "Removes the year tag")]
    pub year: bool,
    #[arg(long, help = "Removes the genre tag")]
    pub genre: bool,
}

impl FieldSelection {
    pub fn fields(&self) -> Vec<Field> {
        [
            (Field::Artist, self.artist),
            (Field::Title, self.title),
            (Field::Album, self.album),
            (Field::Year, self.year),
            (Field::Genre, self.genre),
        ]
        .into_iter()
        .filter_map(|(field, selected)| selected.then_some(field))
        .collect()
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn options(&self) -> RunOptions {
        let dry_run = match &self.command {
            Commands::Query { .. } => false,
            Commands::Tag { dry_run, .. }
            | Commands::Manually { dry_run, .. }
            | Commands::Remove { dry_run, .. }
            | Commands::Rename { dry_run, .. } => *dry_run,
        };

        RunOptions {
            verbose: self.verbose,
            dry_run,
        }
    }
}
