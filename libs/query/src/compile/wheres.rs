//! Leaf clause compilation for `where` conditions.

use serde_json::{json, Value};

use crate::request::Condition;

/// Compile each `where` entry into one leaf clause, preserving input order.
pub(crate) fn compile(wheres: &[(String, Condition)]) -> Vec<Value> {
    wheres
        .iter()
        .map(|(field, condition)| match condition {
            Condition::List(values) => json!({ "terms": { field.as_str(): values } }),
            Condition::Document(doc) => json!({ field.as_str(): doc }),
            Condition::Scalar(value) => json!({ "match": { field.as_str(): value } }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(field: &str, value: Value) -> (String, Condition) {
        (field.to_string(), Condition::classify(value))
    }

    #[test]
    fn list_compiles_to_terms_clause() {
        let clauses = compile(&[entry("taxon_id", json!([1, 2, 3]))]);
        assert_eq!(clauses, vec![json!({ "terms": { "taxon_id": [1, 2, 3] } })]);
    }

    #[test]
    fn document_passes_through_under_field_name() {
        let clauses = compile(&[entry("range", json!({ "observed_on": { "gte": "2015-01-01" } }))]);
        assert_eq!(
            clauses,
            vec![json!({ "range": { "observed_on": { "gte": "2015-01-01" } } })]
        );
    }

    #[test]
    fn scalar_compiles_to_match_clause() {
        let clauses = compile(&[entry("quality_grade", json!("research"))]);
        assert_eq!(
            clauses,
            vec![json!({ "match": { "quality_grade": "research" } })]
        );
    }

    #[test]
    fn one_clause_per_entry_in_order() {
        let clauses = compile(&[
            entry("b", json!(1)),
            entry("a", json!([2])),
            entry("c", json!(3)),
        ]);
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[0], json!({ "match": { "b": 1 } }));
        assert_eq!(clauses[1], json!({ "terms": { "a": [2] } }));
        assert_eq!(clauses[2], json!({ "match": { "c": 3 } }));
    }

    #[test]
    fn empty_input_yields_no_clauses() {
        assert!(compile(&[]).is_empty());
    }
}
