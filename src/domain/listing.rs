use serde::Serialize;

/// Result of a full-table read: either an explicit "no data" signal or at least one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum Listing<T> {
    NoData,
    Rows(Vec<T>),
}

impl<T> Listing<T> {
    /// Rows of the listing; empty for `NoData`.
    pub fn rows(&self) -> &[T] {
        match self {
            Listing::NoData => &[],
            Listing::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::NoData)
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }
}

impl<T> From<Vec<T>> for Listing<T> {
    fn from(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Listing::NoData
        } else {
            Listing::Rows(rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vec_becomes_no_data() {
        let listing: Listing<i32> = Vec::new().into();
        assert!(listing.is_empty());
        assert_eq!(listing.len(), 0);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let empty: Listing<i32> = Listing::NoData;
        let rows: Listing<i32> = vec![1, 2].into();

        assert_eq!(
            serde_json::to_value(&empty).expect("serialize"),
            serde_json::json!({ "kind": "no_data" })
        );
        assert_eq!(
            serde_json::to_value(&rows).expect("serialize"),
            serde_json::json!({ "kind": "rows", "rows": [1, 2] })
        );
    }
}
