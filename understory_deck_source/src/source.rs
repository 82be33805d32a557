// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Remote sources and the JSON shapes they answer with.

use core::num::NonZeroUsize;

use serde::Deserialize;
use understory_deck::Item;

/// Response shape of a source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// An array of `{ "id": .., "url": .. }` objects.
    TheCatApi,
    /// An array of `{ "_id": .. }` objects; image URLs are derived from the id.
    Cataas,
}

/// One remote endpoint that answers with a JSON array of images.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Source {
    /// Human-readable name used in logs.
    pub name: String,
    /// Request URL; `{limit}` is replaced with the requested batch size.
    pub url: String,
    /// How to read the response.
    pub kind: SourceKind,
}

#[derive(Deserialize)]
struct CatApiImage {
    id: Option<String>,
    #[serde(default)]
    url: String,
}

#[derive(Deserialize)]
struct CataasCat {
    #[serde(rename = "_id")]
    id: Option<String>,
}

const CATAAS_IMAGE_BASE: &str = "https://cataas.com/cat/";

impl Source {
    /// TheCatAPI image search.
    #[must_use]
    pub fn the_cat_api() -> Self {
        Self {
            name: "TheCatAPI".to_owned(),
            url: "https://api.thecatapi.com/v1/images/search?limit={limit}".to_owned(),
            kind: SourceKind::TheCatApi,
        }
    }

    /// Cataas cat listing.
    #[must_use]
    pub fn cataas() -> Self {
        Self {
            name: "Cataas".to_owned(),
            url: "https://cataas.com/api/cats?limit={limit}".to_owned(),
            kind: SourceKind::Cataas,
        }
    }

    /// The URL to request a batch of `limit` items.
    #[must_use]
    pub fn request_url(&self, limit: NonZeroUsize) -> String {
        self.url.replace("{limit}", &limit.to_string())
    }

    /// Decodes a response body into items, in response order.
    ///
    /// Entries without an id are dropped. Entries with an id but no image
    /// URL are kept; the deck renders them as broken images.
    pub fn decode(&self, body: &str) -> Result<Vec<Item>, serde_json::Error> {
        let items = match self.kind {
            SourceKind::TheCatApi => serde_json::from_str::<Vec<CatApiImage>>(body)?
                .into_iter()
                .filter_map(|image| Some(Item::new(image.id?, image.url)))
                .collect(),
            SourceKind::Cataas => serde_json::from_str::<Vec<CataasCat>>(body)?
                .into_iter()
                .filter_map(|cat| {
                    let id = cat.id?;
                    let url = format!("{CATAAS_IMAGE_BASE}{id}");
                    Some(Item::new(id, url))
                })
                .collect(),
        };
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_substitutes_limit() {
        let limit = NonZeroUsize::new(7).unwrap();
        assert_eq!(
            Source::the_cat_api().request_url(limit),
            "https://api.thecatapi.com/v1/images/search?limit=7"
        );
        assert_eq!(
            Source::cataas().request_url(limit),
            "https://cataas.com/api/cats?limit=7"
        );
    }

    #[test]
    fn cat_api_entries_map_directly() {
        let body = r#"[
            {"id": "abc", "url": "https://cdn2.thecatapi.com/images/abc.jpg", "width": 500},
            {"id": "def", "url": "https://cdn2.thecatapi.com/images/def.png"}
        ]"#;
        let items = Source::the_cat_api().decode(body).unwrap();
        assert_eq!(
            items,
            [
                Item::new("abc", "https://cdn2.thecatapi.com/images/abc.jpg"),
                Item::new("def", "https://cdn2.thecatapi.com/images/def.png"),
            ]
        );
    }

    #[test]
    fn cataas_urls_are_derived_from_ids() {
        let body = r#"[{"_id": "x1", "tags": ["cute"]}, {"_id": "x2"}]"#;
        let items = Source::cataas().decode(body).unwrap();
        assert_eq!(items[0], Item::new("x1", "https://cataas.com/cat/x1"));
        assert_eq!(items[1].url(), "https://cataas.com/cat/x2");
    }

    #[test]
    fn entries_without_ids_are_dropped_and_missing_urls_kept() {
        let body = r#"[{"url": "https://a"}, {"id": "b"}]"#;
        let items = Source::the_cat_api().decode(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id(), "b");
        assert!(!items[0].has_image());
    }

    #[test]
    fn non_array_body_is_a_decode_error() {
        assert!(Source::cataas().decode(r#"{"error": "nope"}"#).is_err());
        assert!(Source::the_cat_api().decode("<html>").is_err());
    }

    #[test]
    fn sources_deserialize_from_json() {
        let source: Source = serde_json::from_str(
            r#"{"name": "Mirror", "url": "https://mirror.example/cats?n={limit}", "kind": "cataas"}"#,
        )
        .unwrap();
        assert_eq!(source.kind, SourceKind::Cataas);
        assert_eq!(
            source.request_url(NonZeroUsize::MIN),
            "https://mirror.example/cats?n=1"
        );
    }
}
