//! Mapping of a decoded TLV list onto typed records via serde.
//!
//! Fields bind to tags through the serde rename string, which holds the
//! tag followed by optional comma-separated hints:
//!
//! ```ignore
//! #[derive(Default, Deserialize)]
//! #[serde(default)]
//! struct Application {
//!     #[serde(rename = "4F")]
//!     application_id: String, // uppercase hex text
//!     #[serde(rename = "50,ascii")]
//!     application_label: String, // ASCII text
//!     #[serde(rename = "87")]
//!     priority: Vec<u8>, // raw value bytes
//! }
//!
//! let application: Application = bertlv::from_tlv(&tlvs)?;
//! ```
//!
//! Tags are looked up among the immediate siblings only. A bound tag that
//! is absent from the data leaves the field at its default; a failed
//! conversion fails the whole mapping with an error naming the field.

mod deserializer;
mod field_spec;

pub use deserializer::from_tlv;
