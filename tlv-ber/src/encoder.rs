//! TLV serializer
//!
//! Nodes are written in post-order: children are encoded first so the
//! parent's length can be taken from their concatenated bytes. Lengths
//! stored nowhere else; every dump recomputes them.
//!
//! # Usage Example
//!
//! ```rust
//! use tlv_ber::{Tlv, TlvEncoder};
//!
//! let root = Tlv::with_tag(0xA1);
//! root.push_back(&Tlv::with_value(0x81, 1));
//!
//! let mut encoder = TlvEncoder::new();
//! encoder.encode_node(&root);
//! assert_eq!(&encoder.as_bytes()[..], &[0xA1, 0x03, 0x81, 0x01, 0x01]);
//! ```

use crate::length::encode_length;
use crate::node::Tlv;
use crate::tag::Tag;
use bytes::{BufMut, Bytes, BytesMut};

/// Serializer for TLV trees
///
/// Accumulates encoded elements in a `BytesMut` buffer. Encoding never
/// fails: the value/children invariant is kept by the node mutators.
pub struct TlvEncoder {
    buffer: BytesMut,
}

impl TlvEncoder {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::new(),
        }
    }

    /// Create a new encoder with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// Encode a TLV triplet
    ///
    /// An empty tag writes `value` without tag or length octets.
    pub fn encode_tlv(&mut self, tag: Tag, value: &[u8]) {
        if !tag.is_empty() {
            self.buffer.put_slice(&tag.to_bytes());
            encode_length(value.len(), &mut self.buffer);
        }
        self.buffer.put_slice(value);
    }

    /// Encode `node` and everything below it
    ///
    /// # Why Post-Order?
    /// A parent's length octets give the encoded size of all its children,
    /// which is only known once the children have been written.
    pub fn encode_node(&mut self, node: &Tlv) {
        let data = node.data.borrow();
        if data.children.is_empty() {
            self.encode_tlv(data.tag, &data.value);
            return;
        }

        let mut inner = TlvEncoder::new();
        for child in &data.children {
            inner.encode_node(child);
        }
        self.encode_tlv(data.tag, &inner.buffer);
    }

    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for TlvEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Tlv {
    /// Serialize this node and its subtree
    ///
    /// An untagged node contributes only its children (or raw value), so
    /// an empty root serializes to zero bytes. Element contents longer than
    /// [`MAX_LENGTH`](crate::length::MAX_LENGTH) cannot be represented; see
    /// [`encode_length`].
    pub fn dump(&self) -> Vec<u8> {
        let mut encoder = TlvEncoder::new();
        encoder.encode_node(self);
        encoder.into_bytes().into()
    }

    /// Serialize a series of sibling nodes back to back
    pub fn dump_all(nodes: &[Tlv]) -> Vec<u8> {
        let mut encoder = TlvEncoder::new();
        for node in nodes {
            encoder.encode_node(node);
        }
        encoder.into_bytes().into()
    }
}
