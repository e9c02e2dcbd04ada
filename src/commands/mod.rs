pub mod mapping;

pub use mapping::{
    get_combined_table, get_mappings, get_progress, list_databases, refresh_mappings,
    update_mappings_and_get_combined_table, DatabaseLists,
};
