//! Row-filter query builder for the backend's data plane.

use std::fmt::Display;

/// Builds the query string for a table read or targeted write.
///
/// Filters use the backend's `column=op.value` convention; every query
/// selects full rows.
#[derive(Debug, Clone)]
pub(crate) struct TableQuery {
    params: Vec<(String, String)>,
}

impl TableQuery {
    pub(crate) fn new() -> Self {
        Self {
            params: vec![("select".to_string(), "*".to_string())],
        }
    }

    /// Restrict to rows where `column` equals `value`.
    pub(crate) fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Restrict to rows where `column` is strictly greater than `value`.
    pub(crate) fn gt(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.to_string(), format!("gt.{value}")));
        self
    }

    /// Order results by `column`, most recent first.
    pub(crate) fn order_desc(mut self, column: &str) -> Self {
        self.params
            .push(("order".to_string(), format!("{column}.desc")));
        self
    }

    /// Cap the number of returned rows.
    pub(crate) fn limit(mut self, limit: u32) -> Self {
        self.params.push(("limit".to_string(), limit.to_string()));
        self
    }

    pub(crate) fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &TableQuery) -> Vec<(&str, &str)> {
        query
            .params()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn always_selects_full_rows() {
        assert_eq!(pairs(&TableQuery::new()), vec![("select", "*")]);
    }

    #[test]
    fn eq_and_gt_use_operator_prefixes() {
        let query = TableQuery::new().eq("email", "a@b.c").gt("stock_quantity", 0);

        assert_eq!(
            pairs(&query),
            vec![
                ("select", "*"),
                ("email", "eq.a@b.c"),
                ("stock_quantity", "gt.0"),
            ]
        );
    }

    #[test]
    fn ordering_and_limit_compose() {
        let query = TableQuery::new()
            .eq("user_id", "u1")
            .order_desc("created_at")
            .limit(1);

        assert_eq!(
            pairs(&query),
            vec![
                ("select", "*"),
                ("user_id", "eq.u1"),
                ("order", "created_at.desc"),
                ("limit", "1"),
            ]
        );
    }
}
