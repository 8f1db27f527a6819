//! Conversions between primitive Rust values and leaf value bytes

/// Leaf payload of a node
pub type Value = Vec<u8>;

/// Types that can be stored as a leaf value
///
/// Integers are written big-endian in the width of their type with
/// leading `0x00` octets dropped, keeping at least one octet. Negative
/// numbers therefore keep their full width (`-5i8` is `FB`,
/// `-1365i16` is `FA AB`).
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for &[u8] {
    fn into_value(self) -> Value {
        self.to_vec()
    }
}

impl<const N: usize> IntoValue for [u8; N] {
    fn into_value(self) -> Value {
        self.to_vec()
    }
}

impl<const N: usize> IntoValue for &[u8; N] {
    fn into_value(self) -> Value {
        self.to_vec()
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        self.as_bytes().to_vec()
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        self.into_bytes()
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        vec![u8::from(self)]
    }
}

fn strip_leading_zeros(bytes: &[u8]) -> Value {
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[start..].to_vec()
}

macro_rules! int_into_value {
    ($($t:ty),*) => {
        $(
            impl IntoValue for $t {
                fn into_value(self) -> Value {
                    strip_leading_zeros(&self.to_be_bytes())
                }
            }
        )*
    };
}

int_into_value!(u8, u16, u32, u64, i8, i16, i32, i64);

/// Read up to the first 8 value bytes as a big-endian unsigned integer
pub(crate) fn read_u64(value: &[u8]) -> u64 {
    value
        .iter()
        .take(8)
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}
