//! Encoding of requests and decoding/rendering of responses.

pub mod decoder;
pub mod encoder;
pub mod endpoint;
pub mod filter;
pub mod formatter;
pub mod table;

pub use decoder::{DnsRecord, FieldValue, RecordData, decode_domains, decode_records};
pub use encoder::encode;
pub use filter::FilterSet;
pub use formatter::{ResponseShape, format, pretty_json};
pub use table::Table;
