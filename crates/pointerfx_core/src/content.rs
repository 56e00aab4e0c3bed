//! Page content model
//!
//! Profile and portfolio records, the [`PortfolioSource`] query seam, a
//! RON-file backed source, and [`PageContent`] with the display fallbacks the
//! page applies when a field is missing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content_error::ContentError;

/// Shown when a portfolio item has no image
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/400x250?text=No+Image";
/// Link target when a portfolio item has no link
pub const PLACEHOLDER_LINK: &str = "#";
/// Hero title when no profile (or no intro title) is available
pub const DEFAULT_INTRO_TITLE: &str =
    "Creating <span class=\"accent-text\">Value</span><br />through Design.";

/// The single site owner profile
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name_ko: String,
    pub name_en: String,
    pub job_title: String,
    /// May contain inline markup
    #[serde(default)]
    pub intro_title: String,
    #[serde(default)]
    pub intro_desc: String,
}

impl Profile {
    /// "name_ko (name_en)"
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name_ko, self.name_en)
    }
}

/// One portfolio card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub order_index: i64,
}

impl PortfolioItem {
    /// Image to show, falling back to the placeholder
    pub fn image_or_placeholder(&self) -> &str {
        non_empty(self.image_url.as_deref()).unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    /// Link target, falling back to `#`
    pub fn link_or_placeholder(&self) -> &str {
        non_empty(self.link.as_deref()).unwrap_or(PLACEHOLDER_LINK)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// On-disk content document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub portfolio: Vec<PortfolioItem>,
}

impl PortfolioDocument {
    /// Parse a document from RON text
    pub fn from_ron_str(text: &str) -> Result<Self, ContentError> {
        Ok(ron::from_str(text)?)
    }

    /// Load a document from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }
}

/// Read-only queries the page issues once on startup
pub trait PortfolioSource {
    /// The profile record, if one exists
    fn get_profile(&self) -> Result<Option<Profile>, ContentError>;
    /// All portfolio items, ordered by `order_index` ascending
    fn list_portfolio_items(&self) -> Result<Vec<PortfolioItem>, ContentError>;
}

/// Sort by `order_index`, keeping the stored order for ties
pub fn sort_portfolio(items: &mut [PortfolioItem]) {
    items.sort_by_key(|item| item.order_index);
}

/// Content served from a RON file on disk
///
/// The file is read on each query, so edits show up on the next load.
#[derive(Clone, Debug)]
pub struct RonContentSource {
    path: PathBuf,
}

impl RonContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PortfolioSource for RonContentSource {
    fn get_profile(&self) -> Result<Option<Profile>, ContentError> {
        Ok(PortfolioDocument::load(&self.path)?.profile)
    }

    fn list_portfolio_items(&self) -> Result<Vec<PortfolioItem>, ContentError> {
        let mut items = PortfolioDocument::load(&self.path)?.portfolio;
        sort_portfolio(&mut items);
        Ok(items)
    }
}

impl PortfolioSource for PortfolioDocument {
    fn get_profile(&self) -> Result<Option<Profile>, ContentError> {
        Ok(self.profile.clone())
    }

    fn list_portfolio_items(&self) -> Result<Vec<PortfolioItem>, ContentError> {
        let mut items = self.portfolio.clone();
        sort_portfolio(&mut items);
        Ok(items)
    }
}

/// What the page renders once loading has settled
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageContent {
    pub profile: Option<Profile>,
    pub portfolio: Vec<PortfolioItem>,
}

impl PageContent {
    /// Hero title markup, or the default tagline
    pub fn hero_title(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|p| non_empty(Some(p.intro_title.as_str())))
            .unwrap_or(DEFAULT_INTRO_TITLE)
    }

    pub fn hero_description(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.intro_desc.as_str())
    }

    pub fn display_name(&self) -> Option<String> {
        self.profile.as_ref().map(Profile::display_name)
    }

    pub fn job_title(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.job_title.as_str())
    }

    /// No profile and no portfolio items
    pub fn is_empty(&self) -> bool {
        self.profile.is_none() && self.portfolio.is_empty()
    }
}
