pub mod store;
pub mod urls;

pub use store::MappingStore;
pub use urls::{parse_url_list, read_url_list, UrlSpec, UNKNOWN_DATABASE};
