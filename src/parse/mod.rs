pub mod date_stamp;
pub mod list_parser;
pub mod list_serializer;

pub use date_stamp::DateStamp;
pub use list_parser::{ParsedList, parse_list};
pub use list_serializer::serialize_list;

/// Prefix marking a completed task line
pub const DONE_MARKER: &str = "✅ ";
