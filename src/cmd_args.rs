use std::ffi::OsString;

pub use clap::Parser;

use crate::settings::views::DEFAULT_CAPACITY;

/// A replacement of one row's text, given as `INDEX=URL`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEdit {
    pub position: usize,
    pub url: String,
}

fn parse_row_edit(raw: &str) -> Result<RowEdit, String> {
    let (position, url) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=URL, got '{raw}'"))?;
    let position = position
        .trim()
        .parse()
        .map_err(|_| format!("invalid row index '{position}'"))?;
    Ok(RowEdit {
        position,
        url: url.to_string(),
    })
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile section to load the server list from
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Settings file; defaults to $WSURLS_SETTINGS_PATH or ~/.wsurls/settings
    #[clap(short = 's', long, help = "settings file path")]
    settings: Option<String>,

    /// Replace the text of a row, applied first
    #[clap(long = "edit", value_name = "INDEX=URL", value_parser = parse_row_edit)]
    edits: Vec<RowEdit>,

    /// Append a URL, applied after edits
    #[clap(long = "add", value_name = "URL")]
    additions: Vec<String>,

    /// Delete the row at INDEX in the list as it is at that moment, applied last
    #[clap(long = "remove", value_name = "INDEX")]
    removals: Vec<usize>,

    /// Rows kept on screen by the list view
    #[clap(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    settings: Option<String>,
    edits: Vec<RowEdit>,
    additions: Vec<String>,
    removals: Vec<usize>,
    capacity: usize,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            settings: args.settings,
            edits: args.edits,
            additions: args.additions,
            removals: args.removals,
            capacity: args.capacity,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn settings_path(&self) -> Option<&str> {
        self.settings.as_deref()
    }

    pub fn edits(&self) -> &[RowEdit] {
        &self.edits
    }

    pub fn additions(&self) -> &[String] {
        &self.additions
    }

    pub fn removals(&self) -> &[usize] {
        &self.removals
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
