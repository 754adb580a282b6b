use serde::{Deserialize, Serialize};

use super::common::Label;

/// A map as returned by map search and the browse listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub creator: MapCreator,
    #[serde(rename = "coordinateCount", default)]
    pub coordinate_count: Option<Label>,
    #[serde(default)]
    pub difficulty: Option<Label>,
    #[serde(default)]
    pub likes: Option<u64>,
}

impl MapSummary {
    /// Map page on the site served at `base_url`.
    pub fn map_url(&self, base_url: &str) -> String {
        format!("{}/maps/{}", base_url.trim_end_matches('/'), self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapCreator {
    pub nick: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Curated map listings under `/api/v3/maps/browse/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MapCategory {
    Popular,
    Featured,
    New,
    Hot,
}

impl MapCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            MapCategory::Popular => "popular",
            MapCategory::Featured => "featured",
            MapCategory::New => "new",
            MapCategory::Hot => "hot",
        }
    }
}
