//! Decode failure types.
//!
//! Every fallible operation in this crate returns one of these as an explicit
//! `Err` value. Nothing is logged-and-swallowed and nothing panics on
//! malformed input: a failed decode names the record and the reason, and
//! never yields a record with garbage fields.

use solana_address::Address;
use thiserror::Error;

use crate::layout::MAX_WRITER_SLOTS;

/// A single account buffer failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer is not exactly
    /// [`OptionMarketData::LEN`](crate::layout::OptionMarketData::LEN) bytes.
    ///
    /// The market layout has a fixed total size; a short or long buffer is
    /// rejected outright rather than partially decoded.
    #[error("account data is {actual} bytes, expected exactly {expected}")]
    SizeMismatch {
        /// The fixed layout size
        /// ([`OptionMarketData::LEN`](crate::layout::OptionMarketData::LEN)).
        expected: usize,
        /// The length of the buffer that was supplied.
        actual: usize,
    },

    /// `registry_length` claims more writers than the fixed array holds.
    ///
    /// The layout stores exactly [`MAX_WRITER_SLOTS`] slots, so a larger
    /// count cannot refer to real data. Rejected rather than clamped.
    #[error(
        "registry length {len} exceeds the fixed writer capacity of {max}",
        max = MAX_WRITER_SLOTS
    )]
    RegistryOverflow {
        /// The `registry_length` value read from the buffer.
        len: u16,
    },

    /// `underlying_amount_per_contract` is zero, so the strike price
    /// (quote amount / underlying amount) is undefined.
    #[error("underlying amount per contract is zero, strike price is undefined")]
    DivisionByZero,
}

/// A batch decode aborted on an undecodable account.
///
/// Batch decoding is fail-fast: the first bad buffer stops the batch and is
/// reported here together with the address it was fetched from, so the
/// caller can attribute the failure to a concrete on-chain account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to decode market account {address}")]
pub struct BatchDecodeError {
    /// Address of the account whose data failed to decode.
    pub address: Address,
    /// The underlying per-record failure.
    #[source]
    pub source: DecodeError,
}
