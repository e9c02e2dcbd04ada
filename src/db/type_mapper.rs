use super::condition_parser::parse;
use super::schema::{
    CombinedRow, CombinedTable, DatabaseMappings, MappingEntry, ParsedCondition, UNRESOLVED,
};
use super::type_names::{extract_detail_suffix, is_large_object, strip_detail_suffix};

/// Guard text some documentation pages use for an unguarded row.
const NO_CONDITION: &str = "No condition";

/// Resolve every source row, branch by branch, against the target rows.
///
/// Output order follows the source rows, then the branch order inside each
/// row. Unmatched replicate types resolve to [`UNRESOLVED`].
pub fn resolve(source_entries: &[MappingEntry], target_entries: &[MappingEntry]) -> Vec<CombinedRow> {
    let mut rows = Vec::new();

    for source in source_entries {
        for branch in parse(&source.replicate_or_target_type) {
            rows.push(resolve_branch(source, &branch, target_entries));
        }
    }

    rows
}

/// Combine two scraped pages. A missing page contributes no rows and an
/// empty URL.
pub fn combine(source: Option<&DatabaseMappings>, target: Option<&DatabaseMappings>) -> CombinedTable {
    let source_rows = source.map_or(&[][..], |s| s.data_types.as_slice());
    let target_rows = target.map_or(&[][..], |t| t.data_types.as_slice());

    CombinedTable {
        table_data: resolve(source_rows, target_rows),
        source_url: source.map(|s| s.url.clone()).unwrap_or_default(),
        target_url: target.map(|t| t.url.clone()).unwrap_or_default(),
    }
}

/// First target row whose replicate type equals `replicate_type`, ignoring
/// case and bracketed details.
pub fn lookup_target_type<'a>(replicate_type: &str, target_entries: &'a [MappingEntry]) -> Option<&'a str> {
    target_entries
        .iter()
        .find(|entry| {
            strip_detail_suffix(&entry.source_or_replicate_type).eq_ignore_ascii_case(replicate_type)
        })
        .map(|entry| entry.replicate_or_target_type.as_str())
}

fn resolve_branch(
    source: &MappingEntry,
    branch: &ParsedCondition,
    target_entries: &[MappingEntry],
) -> CombinedRow {
    let replicate_type = strip_detail_suffix(&branch.type_name);
    let detail = extract_detail_suffix(&branch.type_name);

    let target_type = match lookup_target_type(&replicate_type, target_entries) {
        Some(found) => finish_target_type(&replicate_type, &detail, found),
        None => {
            log::warn!("No match found for replicate type: {}", replicate_type);
            UNRESOLVED.to_string()
        }
    };

    CombinedRow {
        source_type: source_label(&source.source_or_replicate_type, branch.condition.as_deref()),
        replicate_type,
        target_type,
    }
}

/// Large objects lose their qualifier, everything else gets the replicate
/// detail carried over.
fn finish_target_type(replicate_type: &str, detail: &str, target_type: &str) -> String {
    if is_large_object(replicate_type) {
        strip_detail_suffix(target_type)
    } else if !detail.is_empty() && target_type != UNRESOLVED {
        format!("{} {}", target_type, detail)
    } else {
        target_type.to_string()
    }
}

fn source_label(source_type: &str, condition: Option<&str>) -> String {
    match condition {
        Some(cond) if !cond.is_empty() && cond != NO_CONDITION => {
            format!("{} ({})", source_type, cond)
        }
        _ => source_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> Vec<MappingEntry> {
        vec![
            MappingEntry::new("REAL8", "FLOAT8"),
            MappingEntry::new("INT1", "TINYINT"),
            MappingEntry::new("INT4", "INTEGER"),
            MappingEntry::new("NUMERIC (p,s)", "DECIMAL"),
            MappingEntry::new("CLOB", "CLOB(4000)"),
            MappingEntry::new("BLOB", "VARBINARY (MAX)"),
            MappingEntry::new("STRING", "VARCHAR"),
        ]
    }

    #[test]
    fn test_conditional_source_resolves_each_branch() {
        let sources = vec![MappingEntry::new(
            "NUMBER(P,S)",
            "If scale < 0: REAL8\nIf scale = 0 and precision <= 2: INT1",
        )];
        let rows = resolve(&sources, &targets());
        assert_eq!(
            rows,
            vec![
                CombinedRow {
                    source_type: "NUMBER(P,S) (scale < 0)".to_string(),
                    replicate_type: "REAL8".to_string(),
                    target_type: "FLOAT8".to_string(),
                },
                CombinedRow {
                    source_type: "NUMBER(P,S) (scale = 0 and precision <= 2)".to_string(),
                    replicate_type: "INT1".to_string(),
                    target_type: "TINYINT".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_large_object_target_loses_qualifier() {
        let rows = resolve(&[MappingEntry::new("CLOB", "CLOB")], &targets());
        assert_eq!(rows[0].target_type, "CLOB");

        let rows = resolve(&[MappingEntry::new("LONG RAW", "BLOB")], &targets());
        assert_eq!(rows[0].target_type, "VARBINARY");
    }

    #[test]
    fn test_detail_is_reattached() {
        let rows = resolve(&[MappingEntry::new("DECIMAL(p,s)", "NUMERIC (p,s)")], &targets());
        assert_eq!(rows[0].replicate_type, "NUMERIC");
        assert_eq!(rows[0].target_type, "DECIMAL (p,s)");
        assert_eq!(rows[0].source_type, "DECIMAL(p,s)");
    }

    #[test]
    fn test_unmatched_type_is_unresolved() {
        let rows = resolve(&[MappingEntry::new("GEOMETRY", "NOT SUPPORTED")], &targets());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].target_type, UNRESOLVED);
        assert!(!rows[0].is_resolved());
    }

    #[test]
    fn test_unresolved_keeps_sentinel_even_with_detail() {
        let rows = resolve(&[MappingEntry::new("VARCHAR(n)", "WSTRING (n)")], &targets());
        assert_eq!(rows[0].target_type, UNRESOLVED);
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_first_match() {
        let entries = vec![
            MappingEntry::new("int4", "INT"),
            MappingEntry::new("INT4", "INTEGER"),
        ];
        assert_eq!(lookup_target_type("INT4", &entries), Some("INT"));
        assert_eq!(lookup_target_type("INT8", &entries), None);
    }

    #[test]
    fn test_no_condition_literal_is_not_embedded() {
        assert_eq!(source_label("DATE", Some(NO_CONDITION)), "DATE");
        assert_eq!(source_label("DATE", Some("")), "DATE");
        assert_eq!(source_label("DATE", None), "DATE");
        assert_eq!(source_label("DATE", Some("year < 1900")), "DATE (year < 1900)");
    }

    #[test]
    fn test_source_order_is_preserved() {
        let sources = vec![
            MappingEntry::new("INTEGER", "INT4"),
            MappingEntry::new("VARCHAR2 (n)", "Length <= 4000 bytes: STRING (n)\nLength > 4000 bytes: CLOB"),
            MappingEntry::new("FLOAT", "REAL8"),
        ];
        let rows = resolve(&sources, &targets());
        let replicate: Vec<&str> = rows.iter().map(|r| r.replicate_type.as_str()).collect();
        assert_eq!(replicate, vec!["INT4", "STRING", "CLOB", "REAL8"]);
        assert_eq!(rows[1].target_type, "VARCHAR (n)");
        assert_eq!(rows[1].source_type, "VARCHAR2 (n) (Length <= 4000 bytes)");
        assert_eq!(rows[2].target_type, "CLOB");
    }

    #[test]
    fn test_combine_with_missing_side() {
        let source = DatabaseMappings {
            data_types: vec![MappingEntry::new("INTEGER", "INT4")],
            url: "https://docs.example/source".to_string(),
        };
        let table = combine(Some(&source), None);
        assert_eq!(table.source_url, "https://docs.example/source");
        assert_eq!(table.target_url, "");
        assert_eq!(table.table_data[0].target_type, UNRESOLVED);

        let empty = combine(None, None);
        assert!(empty.table_data.is_empty());
    }
}
