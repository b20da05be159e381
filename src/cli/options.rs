//! Publication option flags shared by `preview` and `publish`

use clap::Args;
use staticpub_admin::error::{Error, Result};
use staticpub_admin::nodes::{ParentNode, PublicationNode};
use staticpub_admin::types::{ItemRef, LanguageMode, PublicationOptions};
use std::fs;
use std::path::PathBuf;

/// Flags describing what to publish
#[derive(Args, Debug, Default, Clone)]
pub struct OptionArgs {
    /// Destination id
    #[arg(short, long)]
    pub destination: Option<u64>,

    /// Only items with changes since their last publication
    #[arg(short, long)]
    pub pending: bool,

    /// Also publish descendants of the selected documents
    #[arg(long)]
    pub descendants: bool,

    /// Skip language-neutral content (files, images)
    #[arg(long)]
    pub no_neutral: bool,

    /// Only these languages (comma separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "exclude")]
    pub include: Vec<String>,

    /// Every language except these (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Read the options from a JSON file instead
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["destination", "pending", "descendants", "no_neutral", "include", "exclude", "items"]
    )]
    pub options: Option<PathBuf>,

    /// Item ids to publish (default: the whole site)
    pub items: Vec<u64>,
}

impl OptionArgs {
    /// Turn the flags into publication options
    pub fn resolve(&self) -> Result<PublicationOptions> {
        if let Some(path) = &self.options {
            let data = fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&data)?);
        }

        let destination = self.destination.ok_or_else(|| {
            Error::InvalidOptions("a destination is required (--destination or --options)".into())
        })?;

        // Positional items play the part of the listing selection
        let node = PublicationNode::new(ParentNode::with_selection(
            self.items.iter().copied().map(ItemRef::Id).collect(),
        ));

        let (language_mode, language_subset) = if !self.include.is_empty() {
            (LanguageMode::Include, self.include.clone())
        } else if !self.exclude.is_empty() {
            (LanguageMode::Exclude, self.exclude.clone())
        } else {
            (LanguageMode::All, Vec::new())
        };

        Ok(PublicationOptions {
            pending_only: self.pending,
            include_descendants: self.descendants,
            include_neutral_language: !self.no_neutral,
            language_mode,
            language_subset,
            ..node.options(ItemRef::Id(destination))
        })
    }
}
