pub mod condition_parser;
pub mod schema;
pub mod type_mapper;
pub mod type_names;
pub mod vocabulary;

pub use condition_parser::{classify_guard, parse};
pub use schema::{
    CombinedRow, CombinedTable, DatabaseMappings, GuardKind, MappingCatalog, MappingEntry,
    ParsedCondition, PrecisionRule, ScaleRule, UNRESOLVED,
};
pub use type_mapper::{combine, lookup_target_type, resolve};
pub use type_names::{
    extract_detail_suffix, is_large_object, strip_detail_suffix, strip_large_object_suffix,
};
