use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Stamp the stored preference onto the page.
    Apply,
    /// Flip the preference once, then stamp it.
    Toggle,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// HTML page to stamp.
    #[arg(long)]
    pub page: PathBuf,

    /// Origin the preference is scoped to (e.g. `https://example.com`).
    ///
    /// Pages without an origin share one default scope.
    #[arg(long)]
    pub origin: Option<Url>,

    /// Preference store file.
    #[arg(long, default_value = "theme-prefs.json")]
    pub prefs: PathBuf,

    /// What to do with the page.
    #[arg(long, value_enum, default_value = "apply")]
    pub action: Action,

    /// Output path. Defaults to rewriting the page in place.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Write a starter page (toggle button + built-in CSS) when the page
    /// file does not exist yet.
    #[arg(long)]
    pub scaffold: bool,

    /// Page title used by `--scaffold`.
    #[arg(long, default_value = "Untitled page")]
    pub title: String,
}
