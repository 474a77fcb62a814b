//! Command-line argument parsing
//!
//! Supports:
//! - Opening a specific document at startup
//! - Theme override for the session
//! - Skipping session restore

use clap::Parser;

/// A portfolio that pretends to be a code editor
#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "A portfolio that pretends to be a code editor")]
pub struct CliArgs {
    /// Document id or file name to open (e.g. "about" or "atlas.rs")
    #[arg(value_name = "DOC")]
    pub doc: Option<String>,

    /// Start from defaults, ignoring the saved config
    #[arg(short = 'n', long)]
    pub fresh: bool,

    /// Use this theme for the session without persisting it
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// List the available documents and exit
    #[arg(long)]
    pub list: bool,
}

impl CliArgs {
    /// Resolve the requested document against the content registry
    pub fn startup_doc(&self) -> Result<Option<crate::content::DocId>, String> {
        match self.doc.as_deref() {
            None => Ok(None),
            Some(name) => crate::content::document(name)
                .or_else(|| crate::content::document_by_title(name))
                .map(|d| Some(d.id))
                .ok_or_else(|| format!("unknown document: {}", name)),
        }
    }
}
