//! Catalog item domain model.
//!
//! A [`CatalogItem`] is one entry of the remote catalog (a movie, for the
//! default TMDb provider). Items are immutable once received: identity is
//! [`CatalogItem::id`], every other field is display-only.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a catalog item, unique within the catalog.
pub type ItemId = u64;

/// Fallback text shown in the detail overlay when an item has no overview.
pub const NO_OVERVIEW: &str = "No description available.";

/// One entry of the remote catalog.
///
/// Field names follow the catalog wire format so records deserialize
/// directly from the provider payload. `null` strings in the payload become
/// `None` (or empty, for `release_date`), and a missing `vote_average` is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CatalogItem {
    /// Creates an item with only identity and title set.
    ///
    /// The remaining display fields start empty. Mostly useful for tests and
    /// for providers that fill fields incrementally.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::CatalogItem;
    ///
    /// let item = CatalogItem::new(1, "X");
    /// assert_eq!(item.id, 1);
    /// assert!(item.poster_path.is_none());
    /// ```
    #[must_use]
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_path: None,
            overview: None,
            vote_average: 0.0,
            release_date: String::new(),
        }
    }

    /// Returns the overview, or [`NO_OVERVIEW`] when it is absent or blank.
    #[must_use]
    pub fn overview_or_default(&self) -> &str {
        self.overview
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_OVERVIEW)
    }

    /// Formats the rating with one decimal, e.g. `"7.4"`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// Formats the release date for display.
    ///
    /// ISO dates (`2024-03-14`) become `"Mar 14, 2024"`. Anything else is
    /// shown verbatim, and an empty date reads `"unknown"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use marquee::CatalogItem;
    ///
    /// let mut item = CatalogItem::new(7, "Dune");
    /// item.release_date = "2024-03-14".to_string();
    /// assert_eq!(item.release_label(), "Mar 14, 2024");
    /// ```
    #[must_use]
    pub fn release_label(&self) -> String {
        let raw = self.release_date.trim();
        if raw.is_empty() {
            return "unknown".to_string();
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_or_else(|_| raw.to_string(), |date| date.format("%b %-d, %Y").to_string())
    }

    /// Builds the poster URL by joining `image_base` and the poster path.
    ///
    /// Returns `None` when the item has no poster.
    #[must_use]
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        let path = self.poster_path.as_deref().filter(|p| !p.is_empty())?;
        let base = image_base.trim_end_matches('/');
        if path.starts_with('/') {
            Some(format!("{base}{path}"))
        } else {
            Some(format!("{base}/{path}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_tmdb_record_with_nulls() {
        let json = r#"{
            "id": 550,
            "title": "Fight Club",
            "poster_path": null,
            "overview": null,
            "vote_average": 8.4,
            "release_date": null,
            "popularity": 61.4
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 550);
        assert_eq!(item.title, "Fight Club");
        assert!(item.poster_path.is_none());
        assert_eq!(item.release_date, "");
        assert_eq!(item.release_label(), "unknown");
    }

    #[test]
    fn blank_overview_falls_back() {
        let mut item = CatalogItem::new(1, "X");
        assert_eq!(item.overview_or_default(), NO_OVERVIEW);

        item.overview = Some("   ".to_string());
        assert_eq!(item.overview_or_default(), NO_OVERVIEW);

        item.overview = Some("A heist.".to_string());
        assert_eq!(item.overview_or_default(), "A heist.");
    }

    #[test]
    fn release_label_keeps_unparseable_dates() {
        let mut item = CatalogItem::new(1, "X");
        item.release_date = "2024".to_string();
        assert_eq!(item.release_label(), "2024");
    }

    #[test]
    fn poster_url_joins_without_double_slash() {
        let mut item = CatalogItem::new(1, "X");
        assert_eq!(item.poster_url("https://img/t/p/w500"), None);

        item.poster_path = Some("/abc.jpg".to_string());
        assert_eq!(
            item.poster_url("https://img/t/p/w500/").as_deref(),
            Some("https://img/t/p/w500/abc.jpg")
        );
    }

    #[test]
    fn rating_has_one_decimal() {
        let mut item = CatalogItem::new(1, "X");
        item.vote_average = 7.456;
        assert_eq!(item.rating_label(), "7.5");
    }
}
