//! BER-TLV encoding and decoding
//!
//! This crate implements the tag-length-value layer of ASN.1 BER as used
//! by smart card and payment protocols (ISO/IEC 7816, EMV):
//!
//! - [`tag`]: identifier octets, up to 4 octets per tag
//! - [`length`]: definite length octets, short and long form
//! - [`node`]: the [`Tlv`] tree with shared node handles
//! - [`decoder`]: depth-limited parser producing [`Tlv`] trees
//! - [`encoder`]: serializer writing trees back to bytes
//! - [`traversal`]: depth-first and breadth-first walks
//!
//! # Usage Example
//!
//! ```rust
//! use tlv_ber::{Tlv, parse_all};
//!
//! let data = [0x6F, 0x05, 0x84, 0x03, 0xA0, 0x00, 0x01, 0x9F, 0x01, 0x01, 0x07];
//! let parsed = parse_all(&data, 2).unwrap();
//! assert_eq!(parsed.consumed, data.len());
//!
//! let fci = parsed.node.front().unwrap();
//! assert_eq!(fci.len(), 1);
//! assert_eq!(parsed.node.back().unwrap().as_u8(), 7);
//! assert_eq!(parsed.node.dump(), data);
//! ```

pub mod decoder;
pub mod encoder;
pub mod length;
pub mod node;
pub mod tag;
pub mod traversal;
pub mod value;

pub use decoder::{DEFAULT_PARSE_DEPTH, Parsed, TlvDecoder, parse, parse_all, status_of};
pub use encoder::TlvEncoder;
pub use length::{MAX_LENGTH, MAX_LENGTH_OCTETS, MAX_SHORT_LENGTH, decode_length, encode_length, encoded_length_size};
pub use node::Tlv;
pub use tag::{MAX_TAG_NUMBER, MAX_TAG_OCTETS, Tag, TagClass, UniversalTag};
pub use traversal::{Order, Visit};
pub use value::{IntoValue, Value};
