//! In-memory list filtering. Every list screen loads its rows ordered by
//! last update and then narrows them with a case-insensitive substring match
//! against two text fields. The filter is a pure function over the loaded
//! rows; it performs no I/O and runs on every keystroke upstream.

use crate::entities::{
    customer, delivery_note, invoice, invoice_delivery_log, project, quote, sales_order, supplier,
};

/// The two fields a record exposes to the list filter. Master data matches
/// on name and code; documents match on their number and notes.
pub trait SearchFields {
    fn name_field(&self) -> &str;
    fn code_field(&self) -> &str;
}

/// True when `query` is a case-insensitive substring of either search field.
/// An empty query matches everything.
pub fn matches_query<T: SearchFields>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    record.name_field().to_lowercase().contains(&q)
        || record.code_field().to_lowercase().contains(&q)
}

/// Narrow loaded rows to those matching `query`, preserving order.
pub fn filter_records<T: SearchFields>(records: Vec<T>, query: &str) -> Vec<T> {
    if query.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| matches_query(r, query))
        .collect()
}

impl SearchFields for customer::Model {
    fn name_field(&self) -> &str {
        &self.name
    }
    fn code_field(&self) -> &str {
        &self.code
    }
}

impl SearchFields for supplier::Model {
    fn name_field(&self) -> &str {
        &self.name
    }
    fn code_field(&self) -> &str {
        &self.code
    }
}

impl SearchFields for project::Model {
    fn name_field(&self) -> &str {
        &self.name
    }
    fn code_field(&self) -> &str {
        &self.code
    }
}

impl SearchFields for quote::Model {
    fn name_field(&self) -> &str {
        &self.notes
    }
    fn code_field(&self) -> &str {
        &self.quote_number
    }
}

impl SearchFields for sales_order::Model {
    fn name_field(&self) -> &str {
        &self.notes
    }
    fn code_field(&self) -> &str {
        &self.order_number
    }
}

impl SearchFields for invoice::Model {
    fn name_field(&self) -> &str {
        &self.notes
    }
    fn code_field(&self) -> &str {
        &self.invoice_number
    }
}

impl SearchFields for delivery_note::Model {
    fn name_field(&self) -> &str {
        &self.notes
    }
    fn code_field(&self) -> &str {
        &self.delivery_number
    }
}

impl SearchFields for invoice_delivery_log::Model {
    fn name_field(&self) -> &str {
        &self.notes
    }
    fn code_field(&self) -> &str {
        &self.recipient_email
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Row {
        name: String,
        code: String,
    }

    impl SearchFields for Row {
        fn name_field(&self) -> &str {
            &self.name
        }
        fn code_field(&self) -> &str {
            &self.code
        }
    }

    fn row(name: &str, code: &str) -> Row {
        Row {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    #[test]
    fn empty_query_returns_full_set() {
        let rows = vec![row("株式会社サンプル", "C001"), row("株式会社テスト", "C002")];
        let filtered = filter_records(rows, "");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn matches_either_field_case_insensitively() {
        let rows = vec![
            row("Alpha Industries", "C001"),
            row("Beta Works", "c002"),
            row("株式会社サンプル", "C003"),
        ];

        let by_name = filter_records(rows, "alpha");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].code, "C001");

        let rows = vec![row("Alpha Industries", "C001"), row("Beta Works", "c002")];
        let by_code = filter_records(rows, "C002");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].name, "Beta Works");
    }

    #[test]
    fn japanese_text_matches_exactly() {
        let rows = vec![row("株式会社サンプル", "C001"), row("株式会社テスト", "C002")];
        let filtered = filter_records(rows, "テスト");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].code, "C002");
    }

    #[test]
    fn unmatched_query_yields_empty() {
        let rows = vec![row("Alpha", "C001")];
        assert!(filter_records(rows, "zzz").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let rows = vec![row("A one", "1"), row("B one", "2"), row("C one", "3")];
        let filtered = filter_records(rows, "one");
        let codes: Vec<_> = filtered.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["1", "2", "3"]);
    }

    proptest! {
        /// The filtered list equals the subset of rows whose name or code
        /// contains the query case-insensitively.
        #[test]
        fn filter_equals_manual_subset(
            rows in proptest::collection::vec(("\\PC{0,12}", "\\PC{0,6}"), 0..24),
            query in "\\PC{0,6}",
        ) {
            let records: Vec<Row> = rows
                .iter()
                .map(|(name, code)| row(name, code))
                .collect();

            let expected: Vec<(String, String)> = records
                .iter()
                .filter(|r| {
                    query.is_empty()
                        || r.name.to_lowercase().contains(&query.to_lowercase())
                        || r.code.to_lowercase().contains(&query.to_lowercase())
                })
                .map(|r| (r.name.clone(), r.code.clone()))
                .collect();

            let actual: Vec<(String, String)> = filter_records(records, &query)
                .into_iter()
                .map(|r| (r.name, r.code))
                .collect();

            prop_assert_eq!(actual, expected);
        }

        /// An empty query is the identity.
        #[test]
        fn empty_query_is_identity(
            rows in proptest::collection::vec(("\\PC{0,12}", "\\PC{0,6}"), 0..24),
        ) {
            let records: Vec<Row> = rows.iter().map(|(n, c)| row(n, c)).collect();
            prop_assert_eq!(filter_records(records, "").len(), rows.len());
        }
    }
}
