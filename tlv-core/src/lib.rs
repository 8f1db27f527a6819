//! Core types and utilities for the BER-TLV codec
//!
//! This crate provides the error taxonomy shared by the codec crates and
//! the hex conversion helpers used around them.

pub mod error;
pub mod hex_string;

pub use error::{Status, StatusKind, TlvError, TlvResult};
pub use hex_string::{hexify, unhexify};
