/// Replicate and target type tokens that never carry a condition.
///
/// A mapping cell that is exactly one of these is taken as-is. Multi-line cells
/// only emit a branch when its leading identifier is one of these tokens.
pub const SIMPLE_TYPES: &[&str] = &[
    // Numeric
    "INT1", "INT2", "INT4", "INT8", "UINT1", "UINT2", "UINT4", "UINT8",
    "REAL4", "REAL8", "NUMERIC", "NUMBER", "FLOAT", "FLOAT4", "FLOAT8", "DOUBLE",
    "INT", "INTEGER", "LONG", "TINYINT", "SMALLINT", "BIGINT", "BYTEINT", "REAL",
    // Character
    "STRING", "WSTRING", "TEXT", "UNITEXT", "CLOB", "NCLOB", "XMLTYPE",
    // Binary
    "BYTES", "BLOB", "BYTEA", "IMAGE", "BIT",
    // Temporal
    "DATE", "TIME", "DATETIME", "TIMESTAMP",
    // Boolean
    "BOOLEAN", "BOOL",
    // Sentinels
    "IGNORED", "NOT SUPPORTED",
];

/// Exact, case-sensitive membership in [`SIMPLE_TYPES`].
pub fn is_simple_type(token: &str) -> bool {
    SIMPLE_TYPES.contains(&token)
}
