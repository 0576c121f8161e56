//! Byte-exact market account layout.
//!
//! This module pins down the raw storage format of an option market account
//! as written by the external options program. The layout is little-endian
//! with no padding between fields; every multi-byte integer is stored as a
//! byte array so the structs have alignment 1 and their `size_of` matches
//! the on-chain byte count exactly.
//!
//! [`OptionMarketData::parse`] is the only entry point: it validates the
//! buffer length and reinterprets the bytes in place. Converting the raw
//! view into an owned, validated record (including the derived strike
//! price) is the job of [`OptionMarket`](crate::market::OptionMarket).

use solana_address::Address;

use crate::error::DecodeError;

/// Number of writer slots in every market account.
///
/// The registry is a fixed array: all slots are always present in the byte
/// layout, and `registry_length` says how many of them hold real entries.
/// Trailing slots are zero-filled padding.
pub const MAX_WRITER_SLOTS: usize = 10;

/// One slot of the option writer registry.
///
/// # Layout (96 bytes)
///
/// | Offset | Size | Field |
/// |--------|------|-------|
/// | 0 | 32 | underlying_asset_acct |
/// | 32 | 32 | quote_asset_acct |
/// | 64 | 32 | contract_token_acct |
///
/// A writer has no lifecycle of its own: it exists only as a fixed-position
/// slot inside a market's registry. A zeroed slot is padding, not data.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionWriter {
    /// Token account the writer's underlying assets were drawn from.
    pub underlying_asset_acct: Address,
    /// Token account the writer receives quote assets into on exercise.
    pub quote_asset_acct: Address,
    /// Token account holding the writer's contract tokens.
    pub contract_token_acct: Address,
}

// Safety: three [u8; 32] addresses - alignment 1, no padding
unsafe impl bytemuck::Pod for OptionWriter {}
unsafe impl bytemuck::Zeroable for OptionWriter {}

const _: () = assert!(core::mem::size_of::<OptionWriter>() == OptionWriter::LEN);

impl OptionWriter {
    /// Size of one registry slot in bytes.
    pub const LEN: usize = 96;
}

/// Option market account data layout.
///
/// This struct provides zero-copy access to a market account's fields.
/// Integer fields are private byte arrays with little-endian accessor
/// methods; key fields are exposed directly as [`Address`]es.
///
/// # Layout (1114 bytes)
///
/// | Offset | Size | Field |
/// |--------|------|-------|
/// | 0 | 32 | option_mint |
/// | 32 | 32 | underlying_asset_mint |
/// | 64 | 32 | quote_asset_mint |
/// | 96 | 8 | underlying_amount_per_contract (u64 LE) |
/// | 104 | 8 | quote_amount_per_contract (u64 LE) |
/// | 112 | 8 | expiration_unix_timestamp (i64 LE) |
/// | 120 | 32 | underlying_asset_pool |
/// | 152 | 2 | registry_length (u16 LE) |
/// | 154 | 960 | option_writer_registry (10 x 96 bytes) |
///
/// # Example
///
/// ```ignore
/// use optmarket::OptionMarketData;
///
/// let data = OptionMarketData::parse(&account_data)?;
/// let quote = data.quote_amount_per_contract();
/// let mint = &data.underlying_asset_mint;
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct OptionMarketData {
    /// Mint of the tokens that denote an option contract.
    pub option_mint: Address,
    /// Mint of the underlying asset.
    pub underlying_asset_mint: Address,
    /// Mint of the asset that denominates the strike price.
    pub quote_asset_mint: Address,
    underlying_amount_per_contract: [u8; 8],
    quote_amount_per_contract: [u8; 8],
    expiration_unix_timestamp: [u8; 8],
    /// Pool that holds the underlying assets backing written contracts.
    pub underlying_asset_pool: Address,
    registry_length: [u8; 2],
    /// All writer slots, valid and padding alike. Only the first
    /// [`registry_length`](Self::registry_length) entries are meaningful.
    pub option_writer_registry: [OptionWriter; MAX_WRITER_SLOTS],
}

// Safety: Address is [u8; 32], all other fields are byte arrays or arrays
// of alignment-1 Pod structs - alignment 1, no padding
unsafe impl bytemuck::Pod for OptionMarketData {}
unsafe impl bytemuck::Zeroable for OptionMarketData {}

const _: () = assert!(core::mem::size_of::<OptionMarketData>() == OptionMarketData::LEN);

impl OptionMarketData {
    /// Total fixed size of a market account in bytes.
    pub const LEN: usize = 32 + 32 + 32 + 8 + 8 + 8 + 32 + 2 + MAX_WRITER_SLOTS * OptionWriter::LEN;

    /// Byte offset of `option_mint`.
    pub const OPTION_MINT_OFFSET: usize = 0;
    /// Byte offset of `underlying_asset_mint`.
    pub const UNDERLYING_ASSET_MINT_OFFSET: usize = 32;
    /// Byte offset of `quote_asset_mint`.
    pub const QUOTE_ASSET_MINT_OFFSET: usize = 64;
    /// Byte offset of `underlying_amount_per_contract`.
    pub const UNDERLYING_AMOUNT_OFFSET: usize = 96;
    /// Byte offset of `quote_amount_per_contract`.
    pub const QUOTE_AMOUNT_OFFSET: usize = 104;
    /// Byte offset of `expiration_unix_timestamp`.
    pub const EXPIRATION_OFFSET: usize = 112;
    /// Byte offset of `underlying_asset_pool`.
    pub const UNDERLYING_ASSET_POOL_OFFSET: usize = 120;
    /// Byte offset of `registry_length`.
    pub const REGISTRY_LENGTH_OFFSET: usize = 152;
    /// Byte offset of the first writer registry slot.
    pub const REGISTRY_OFFSET: usize = 154;

    /// Reinterpret a raw account buffer as a market layout.
    ///
    /// The buffer must be exactly [`Self::LEN`] bytes; decoding is never
    /// partial. The cast itself cannot fail once the length is right since
    /// the struct has alignment 1 and every bit pattern is a valid value.
    ///
    /// # Errors
    ///
    /// [`DecodeError::SizeMismatch`] if the buffer length differs from
    /// [`Self::LEN`].
    #[inline]
    pub fn parse(data: &[u8]) -> Result<&Self, DecodeError> {
        if data.len() != Self::LEN {
            return Err(DecodeError::SizeMismatch {
                expected: Self::LEN,
                actual: data.len(),
            });
        }
        Ok(bytemuck::from_bytes(data))
    }

    /// Amount of the underlying asset that backs a single contract.
    #[inline]
    pub fn underlying_amount_per_contract(&self) -> u64 {
        u64::from_le_bytes(self.underlying_amount_per_contract)
    }

    /// Amount of the quote asset transferred when a contract is exercised.
    #[inline]
    pub fn quote_amount_per_contract(&self) -> u64 {
        u64::from_le_bytes(self.quote_amount_per_contract)
    }

    /// Unix timestamp (seconds) at which contracts in this market expire.
    ///
    /// Any representable value is accepted at this layer; no range check.
    #[inline]
    pub fn expiration_unix_timestamp(&self) -> i64 {
        i64::from_le_bytes(self.expiration_unix_timestamp)
    }

    /// Number of registry slots that hold real writer entries.
    ///
    /// Returned as stored; bounds against [`MAX_WRITER_SLOTS`] are enforced
    /// when building an [`OptionMarket`](crate::market::OptionMarket).
    #[inline]
    pub fn registry_length(&self) -> u16 {
        u16::from_le_bytes(self.registry_length)
    }
}
