/// Paging controls accepted by every pfSense collection endpoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of objects to return. `0` lets the appliance decide.
    pub limit: Option<u32>,
    /// Number of objects to skip.
    pub offset: Option<u32>,
}

impl Pagination {
    /// Convert into URL query pairs.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_pagination_adds_no_query() {
        assert!(Pagination::default().to_pairs().is_empty());
    }

    #[test]
    fn pairs_in_stable_order() {
        let paging = Pagination {
            limit: Some(25),
            offset: Some(50),
        };
        assert_eq!(
            paging.to_pairs(),
            vec![("limit", "25".to_string()), ("offset", "50".to_string())]
        );
    }
}
