//! TLV parser
//!
//! # Usage Example
//!
//! ```rust
//! use tlv_ber::decoder::parse;
//!
//! let data = [0x9F, 0x01, 0x02, 0x12, 0x34];
//! let parsed = parse(&data, 1)?;
//! assert_eq!(parsed.node.tag().raw(), 0x9F01);
//! assert_eq!(parsed.consumed, 5);
//! # Ok::<(), tlv_core::TlvError>(())
//! ```

use crate::length::decode_length;
use crate::node::Tlv;
use crate::tag::Tag;
use std::ops::Range;
use tlv_core::{Status, TlvError, TlvResult};

/// Depth used when the caller has no preference: no constructed tag is
/// expanded
pub const DEFAULT_PARSE_DEPTH: u32 = 1;

/// Result of a successful parse
#[derive(Debug, Clone)]
pub struct Parsed {
    /// Parsed element, or the virtual root of a parsed series
    pub node: Tlv,
    /// Number of input bytes consumed, padding included
    pub consumed: usize,
}

/// Parse one element, expanding constructed tags up to `depth` levels
///
/// Leading `0x00` padding is skipped. Bytes after the element are left
/// unread. An empty or all-padding buffer yields an empty node.
pub fn parse(data: &[u8], depth: u32) -> TlvResult<Parsed> {
    check_depth(depth)?;
    let mut decoder = TlvDecoder::new(data);
    let node = decoder.next_node(depth)?.unwrap_or_default();
    Ok(Parsed {
        node,
        consumed: decoder.position(),
    })
}

/// Parse a series of sibling elements under a virtual untagged root
pub fn parse_all(data: &[u8], depth: u32) -> TlvResult<Parsed> {
    check_depth(depth)?;
    let mut decoder = TlvDecoder::new(data);
    let root = Tlv::new();
    decoder.parse_siblings(&root, depth)?;
    Ok(Parsed {
        node: root,
        consumed: decoder.position(),
    })
}

/// Flatten a parse result into a [`Status`]
pub fn status_of(result: &TlvResult<Parsed>) -> Status {
    match result {
        Ok(parsed) => Status::ok(parsed.consumed),
        Err(e) => Status::from(e),
    }
}

fn check_depth(depth: u32) -> TlvResult<()> {
    if depth == 0 {
        return Err(TlvError::BadArgument("Minimum parse depth is 1".to_string()));
    }
    Ok(())
}

/// Tag and value location of an element whose header has been read
struct Header {
    tag: Tag,
    value: Range<usize>,
}

/// Cursor over a TLV buffer
///
/// The decoder reads from `position` up to `end` of a shared buffer.
/// Nested values are parsed by child cursors over the same buffer, so
/// positions and error offsets are always absolute.
pub struct TlvDecoder<'a> {
    buffer: &'a [u8],
    position: usize,
    end: usize,
}

impl<'a> TlvDecoder<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
            end: buffer.len(),
        }
    }

    fn window(buffer: &'a [u8], range: Range<usize>) -> Self {
        Self {
            buffer,
            position: range.start,
            end: range.end,
        }
    }

    /// Get current position in buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get remaining bytes
    pub fn remaining(&self) -> usize {
        self.end.saturating_sub(self.position)
    }

    /// Check if any element is left, skipping padding
    pub fn has_remaining(&mut self) -> bool {
        self.skip_padding();
        self.position < self.end
    }

    fn skip_padding(&mut self) {
        while self.position < self.end && self.buffer[self.position] == 0 {
            self.position += 1;
        }
    }

    /// Parse the next element, or `None` once only padding is left
    ///
    /// # Why a Depth Limit?
    /// A primitive value may happen to look like nested TLV data. Only
    /// constructed tags within `depth` levels are expanded; anything
    /// deeper stays as raw value bytes.
    pub fn next_node(&mut self, depth: u32) -> TlvResult<Option<Tlv>> {
        check_depth(depth)?;
        if !self.has_remaining() {
            return Ok(None);
        }

        let header = self.read_header()?;
        let node = Tlv::with_tag(header.tag);
        if header.tag.constructed() && depth > 1 {
            TlvDecoder::window(self.buffer, header.value).parse_siblings(&node, depth - 1)?;
        } else {
            node.data.borrow_mut().value = self.buffer[header.value].to_vec();
        }
        Ok(Some(node))
    }

    fn parse_siblings(&mut self, parent: &Tlv, depth: u32) -> TlvResult<()> {
        while let Some(child) = self.next_node(depth)? {
            parent.push_back(&child);
        }
        Ok(())
    }

    /// Read tag and length, and step over the value
    fn read_header(&mut self) -> TlvResult<Header> {
        let buffer = self.buffer;
        let start = self.position;
        let input = &buffer[start..self.end];

        let (tag, tag_len) = Tag::decode(input).map_err(|e| self.fail(e, start))?;
        self.position += tag_len;

        let (length, length_len) = decode_length(&input[tag_len..])
            .map_err(|e| self.fail(e, self.position))?;
        self.position += length_len;

        let value_start = self.position;
        if length > self.remaining() {
            let err = TlvError::unexpected_end(
                value_start,
                format!(
                    "value of tag {} needs {} bytes, {} left",
                    tag,
                    length,
                    self.remaining()
                ),
            );
            log::debug!("TLV parse failed: {}", err);
            return Err(err);
        }
        self.position += length;

        log::trace!(
            "TLV element tag={} length={} at offset {}",
            tag,
            length,
            start
        );
        Ok(Header {
            tag,
            value: value_start..self.position,
        })
    }

    fn fail(&self, err: TlvError, offset: usize) -> TlvError {
        let err = err.offset_by(offset);
        log::debug!("TLV parse failed: {}", err);
        err
    }
}

impl Tlv {
    /// Parse one element, see [`parse`]
    pub fn parse(data: &[u8], depth: u32) -> TlvResult<Parsed> {
        parse(data, depth)
    }

    /// Parse a series of sibling elements, see [`parse_all`]
    pub fn parse_all(data: &[u8], depth: u32) -> TlvResult<Parsed> {
        parse_all(data, depth)
    }
}
