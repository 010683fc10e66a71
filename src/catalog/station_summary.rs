use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SummaryMetadata {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SummaryImage {
    #[serde(default)]
    pub url: Option<String>,
}

/// One entry of the catalog array.
///
/// Every field is optional, the catalog has changed shape more than once
/// and nothing here is validated. Selection of the fields that end up in
/// the playlist happens in `track::normalize_summary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSummary {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub audio_url_aac: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub triton_mount: Option<String>,
    #[serde(default, rename = "type")]
    pub station_type: Option<String>,
    #[serde(default)]
    pub metadata: Option<SummaryMetadata>,
    #[serde(default)]
    pub image: Option<SummaryImage>,
}

impl StationSummary {
    pub fn description(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.description.as_deref())
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(|i| i.url.as_deref())
    }
}
