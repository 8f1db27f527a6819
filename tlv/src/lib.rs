//! tlv - Rust implementation of a BER-TLV codec
//!
//! Builds, parses, edits and serializes tag-length-value trees in the
//! ASN.1 BER flavour used by smart card and payment protocols.
//!
//! # Architecture
//!
//! This library is organized as a workspace with multiple crates:
//!
//! - `tlv-core`: Error and status types, hex helpers
//! - `tlv-ber`: Tag and length codecs, node tree, parser, serializer, traversal
//!
//! # Usage
//!
//! ```rust
//! use tlv::{Tlv, Visit, hexify, parse_all, unhexify};
//!
//! let data = unhexify("9F1001318A03414243");
//! let parsed = parse_all(&data, 1).unwrap();
//! assert_eq!(parsed.consumed, data.len());
//!
//! let mut tags = Vec::new();
//! parsed.node.dfs(|node| {
//!     tags.push(node.tag().raw());
//!     Visit::Continue
//! });
//! assert_eq!(tags, vec![0, 0x9F10, 0x8A]);
//!
//! parsed.node.push_back(&Tlv::with_value(0x5F20, "CARDHOLDER"));
//! assert_eq!(
//!     hexify(&parsed.node.dump(), false),
//!     "9F1001318A034142435F200A43415244484F4C444552"
//! );
//! ```

// Re-export core types
pub use tlv_core::{Status, StatusKind, TlvError, TlvResult, hexify, unhexify};

// Re-export codec
pub use tlv_ber::{
    DEFAULT_PARSE_DEPTH, IntoValue, MAX_TAG_NUMBER, Order, Parsed, Tag, TagClass, Tlv,
    TlvDecoder, TlvEncoder, UniversalTag, Value, Visit, parse, parse_all, status_of,
};

/// Tag and length codecs
pub mod codec {
    pub use tlv_ber::length::*;
    pub use tlv_ber::tag::*;
}
