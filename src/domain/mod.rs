pub mod profile_url;
pub mod scout_report;
pub mod search_query;

pub use profile_url::*;
pub use scout_report::*;
pub use search_query::*;
