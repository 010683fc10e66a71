use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MediaEntry {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub image_type: Option<String>,
}

/// Station as delivered by the detail lookup, plus the description the
/// catalog entry carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationDetail {
    pub slug: String,
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub description: Option<String>,
    pub media: Vec<MediaEntry>,
    pub images: Vec<ImageEntry>,
    pub summary_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailResponse {
    pub data: DetailData,
}

#[derive(Debug, Deserialize)]
pub(super) struct DetailData {
    #[serde(default)]
    pub station: Option<StationPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct StationPayload {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    short_title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    media: Option<Vec<MediaEntry>>,
    #[serde(default)]
    images: Option<Vec<ImageEntry>>,
}

impl StationPayload {
    pub(super) fn into_detail(self, slug: &str, summary_description: Option<&str>) -> StationDetail {
        StationDetail {
            slug: slug.to_string(),
            title: self.title,
            short_title: self.short_title,
            description: self.description,
            media: self.media.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            summary_description: summary_description.map(String::from),
        }
    }
}
