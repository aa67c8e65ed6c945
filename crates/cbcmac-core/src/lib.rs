//! CBC-MAC over an abstract single-block cipher.
//!
//! This crate provides:
//! - Shared block/tag types for a 16-byte-block cipher family.
//! - The [`KeyExpander`] and [`BlockEncryptor`] capabilities describing the
//!   external cipher collaborator.
//! - The CBC-MAC construction itself: a serial fold of single-block
//!   encryptions with a zero initial chaining value, returning the final
//!   chaining value as the tag.
//!
//! The cipher's internal round function is deliberately out of scope; any
//! implementation of the two capability traits, whether portable, hardware
//! accelerated, or a test stub, satisfies the MAC contract.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod mac;

pub use crate::block::{xor_in_place, Block, BLOCK_BYTES};
pub use crate::cipher::{BlockEncryptor, KeyExpander};
pub use crate::error::MacError;
pub use crate::mac::{compute_mac, CbcMac, Tag};
