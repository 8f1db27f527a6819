//! BER tag (identifier octets)

use serde::{Deserialize, Serialize};
use std::fmt;
use tlv_core::{TlvError, TlvResult};

/// Highest tag number that fits into a 4 octet identifier
pub const MAX_TAG_NUMBER: u32 = 0x1F_FFFF;

/// Maximum number of identifier octets
pub const MAX_TAG_OCTETS: usize = 4;

const CONSTRUCTED_BIT: u8 = 0x20;
const MULTI_OCTET_MARKER: u8 = 0x1F;
const MORE_OCTETS: u8 = 0x80;
const PAYLOAD_BITS: u8 = 0x7F;

/// BER Tag Class
///
/// ASN.1 defines four tag classes:
/// - **Universal**: Standard ASN.1 types (INTEGER, OCTET STRING, etc.)
/// - **Application**: Application-specific types
/// - **Context-specific**: Context-dependent types (used in SEQUENCE/SET)
/// - **Private**: Private/implementation-specific types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagClass {
    /// Universal class (00)
    Universal = 0,
    /// Application class (01)
    Application = 1,
    /// Context-specific class (10)
    ContextSpecific = 2,
    /// Private class (11)
    Private = 3,
}

impl TagClass {
    /// Get tag class from bits 7-6 of the first identifier octet
    pub fn from_bits(byte: u8) -> Self {
        match (byte >> 6) & 0x03 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        }
    }

    /// Convert tag class to bits (for encoding)
    pub fn to_bits(self) -> u8 {
        (self as u8) << 6
    }
}

/// Universal class tag numbers (X.680)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniversalTag {
    EndOfContent = 0,
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectIdentifier,
    ObjectDescriptor,
    External,
    Real,
    Enumerated,
    EmbeddedPdv,
    Utf8String,
    RelativeOid,
    Time,
    Reserved,
    Sequence,
    Set,
    NumericString,
    PrintableString,
    T61String,
    VideotexString,
    Ia5String,
    UtcTime,
    GeneralizedTime,
    GraphicString,
    VisibleString,
    GeneralString,
    UniversalString,
    CharacterString,
    BmpString,
    Date,
    TimeOfDay,
    DateTime,
    Duration,
    OidIri,
    RelativeOidIri,
}

/// BER Tag
///
/// Stored as the encoded identifier octets packed big-endian into a `u32`,
/// e.g. the two octet identifier `9F 01` is `Tag(0x9F01)`. Class,
/// constructed flag and tag number are derived from those octets.
///
/// The raw value `0` is the empty tag. It marks untagged (virtual) nodes,
/// encodes to zero octets and counts as constructed.
///
/// # Encoding Format
///
/// Short form (tag number 0-30):
/// ```text
/// Bits: 8 7 6 5 4 3 2 1
///       C C P T T T T T
/// ```
///
/// Long form (tag number > 30):
/// ```text
/// First byte:  C C P 1 1 1 1 1
/// Following:   1 T T T T T T T  ... 0 T T T T T T T
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag(u32);

impl Tag {
    /// The empty tag
    pub const EMPTY: Tag = Tag(0);

    /// Build a tag from its semantic fields
    ///
    /// Returns [`Tag::EMPTY`] when `number` exceeds [`MAX_TAG_NUMBER`];
    /// callers must check [`Tag::is_empty`].
    pub fn build(class: TagClass, constructed: bool, number: u32) -> Self {
        if number > MAX_TAG_NUMBER {
            return Tag::EMPTY;
        }

        let first = class.to_bits() | if constructed { CONSTRUCTED_BIT } else { 0 };

        if number < MULTI_OCTET_MARKER as u32 {
            return Tag(u32::from(first) | number);
        }

        let mut raw = u32::from(first | MULTI_OCTET_MARKER);
        let significant_bits = 32 - number.leading_zeros();
        let groups = significant_bits.div_ceil(7);
        for i in (0..groups).rev() {
            let mut octet = ((number >> (7 * i)) as u8) & PAYLOAD_BITS;
            if i > 0 {
                octet |= MORE_OCTETS;
            }
            raw = (raw << 8) | u32::from(octet);
        }
        Tag(raw)
    }

    /// Build a universal class tag
    pub fn universal(kind: UniversalTag, constructed: bool) -> Self {
        Self::build(TagClass::Universal, constructed, kind as u32)
    }

    /// Wrap already encoded identifier octets
    pub const fn from_raw(raw: u32) -> Self {
        Tag(raw)
    }

    /// Encoded identifier octets packed into a `u32`
    pub const fn raw(&self) -> u32 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of identifier octets
    pub fn size(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            4 - (self.0.leading_zeros() / 8) as usize
        }
    }

    /// First identifier octet
    fn leading_octet(&self) -> u8 {
        match self.size() {
            0 => 0,
            n => (self.0 >> (8 * (n - 1))) as u8,
        }
    }

    pub fn tag_class(&self) -> TagClass {
        TagClass::from_bits(self.leading_octet())
    }

    /// Whether the value holds nested TLV elements
    pub fn constructed(&self) -> bool {
        self.is_empty() || self.leading_octet() & CONSTRUCTED_BIT != 0
    }

    pub fn tag_number(&self) -> u32 {
        let size = self.size();
        if size <= 1 {
            return self.0 & u32::from(MULTI_OCTET_MARKER);
        }
        (0..size - 1).rev().fold(0, |number, i| {
            (number << 7) | ((self.0 >> (8 * i)) & u32::from(PAYLOAD_BITS))
        })
    }

    /// Identifier octets in wire order
    pub fn to_bytes(&self) -> Vec<u8> {
        let size = self.size();
        self.0.to_be_bytes()[4 - size..].to_vec()
    }

    /// Decode identifier octets from the start of `data`
    ///
    /// # Returns
    /// Returns `Ok((Tag, bytes_consumed))` if successful
    ///
    /// # Error Handling
    /// - `UnexpectedEnd` if `data` ends inside the identifier
    /// - `BadTag` if the identifier is longer than 4 octets
    ///
    /// # Why Four Octets?
    /// A tag is kept as its packed identifier octets in a `u32`. A fifth
    /// octet has nowhere to go, so it is rejected instead of truncated.
    pub fn decode(data: &[u8]) -> TlvResult<(Self, usize)> {
        let Some(&first) = data.first() else {
            return Err(TlvError::unexpected_end(0, "no identifier octet left"));
        };

        let mut raw = u32::from(first);
        if first & MULTI_OCTET_MARKER != MULTI_OCTET_MARKER {
            return Ok((Tag(raw), 1));
        }

        let mut pos = 1;
        loop {
            if pos == MAX_TAG_OCTETS {
                return Err(TlvError::bad_tag(
                    pos,
                    format!("tag {:X}.. longer than {} octets", raw, MAX_TAG_OCTETS),
                ));
            }
            let Some(&octet) = data.get(pos) else {
                return Err(TlvError::unexpected_end(
                    pos,
                    format!("input ends inside tag {:X}..", raw),
                ));
            };
            raw = (raw << 8) | u32::from(octet);
            pos += 1;
            if octet & MORE_OCTETS == 0 {
                return Ok((Tag(raw), pos));
            }
        }
    }
}

impl From<u32> for Tag {
    fn from(raw: u32) -> Self {
        Tag(raw)
    }
}

impl From<UniversalTag> for Tag {
    fn from(kind: UniversalTag) -> Self {
        Tag::universal(kind, false)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}
