use serde::{Deserialize, Serialize};

/// Pagination metadata. The API spells the page size `limit` or `perPage`, and
/// the page count `totalPages` or `pages`, depending on the resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default, alias = "perPage")]
    pub limit: u32,
    #[serde(default, alias = "pages")]
    pub total_pages: u32,
}

/// A page of resources, accepting both `{items, meta}` and `{data, meta}` /
/// `{data, pagination}` envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(alias = "data")]
    pub items: Vec<T>,
    #[serde(default, alias = "pagination")]
    pub meta: PageMeta,
}

/// `{"data": ...}` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_accepts_every_envelope_spelling() {
        let commandes: Page<u32> = serde_json::from_value(json!({
            "items": [1, 2],
            "meta": { "total": 2, "page": 1, "limit": 25, "totalPages": 1 }
        }))
        .unwrap();
        let retours: Page<u32> = serde_json::from_value(json!({
            "data": [1, 2],
            "meta": { "total": 2, "page": 1, "perPage": 25, "totalPages": 1 }
        }))
        .unwrap();
        let produits: Page<u32> = serde_json::from_value(json!({
            "data": [1, 2],
            "pagination": { "total": 2, "page": 1, "limit": 25, "pages": 1 }
        }))
        .unwrap();

        assert_eq!(commandes, retours);
        assert_eq!(retours, produits);
        assert_eq!(produits.meta.total_pages, 1);
    }

    #[test]
    fn missing_meta_defaults() {
        let page: Page<u32> = serde_json::from_value(json!({ "data": [] })).unwrap();
        assert_eq!(page.meta, PageMeta::default());
    }
}
