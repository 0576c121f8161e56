//! Decoded option market records.
//!
//! [`OptionMarket`] is the owned, validated form of a market account: an
//! immutable snapshot of on-chain state at decode time, not a live handle.
//! Building one from the raw layout is where value-level invariants are
//! enforced and the strike price is derived, kept separate from byte
//! parsing so the division failure mode is testable on its own.

use solana_address::Address;

use crate::error::DecodeError;
use crate::layout::{OptionMarketData, OptionWriter, MAX_WRITER_SLOTS};

/// All the information needed to describe an open option market.
///
/// Field values are fixed at decode time; clone it freely, drop it freely.
/// The strike price is derived, not stored on chain: it is the exact integer
/// ratio `quote_amount_per_contract / underlying_amount_per_contract`,
/// computed with floor division. Floating point is never involved, so the
/// financial ratio carries no rounding artifacts; the raw quote amount is
/// kept alongside so nothing is lost to the floor.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionMarket {
    /// Mint of the tokens that denote an option contract.
    pub option_mint: Address,
    /// Mint of the underlying asset.
    pub underlying_asset_mint: Address,
    /// Mint of the asset that denominates the strike price.
    pub quote_asset_mint: Address,
    /// Pool that holds the underlying assets backing written contracts.
    pub underlying_asset_pool: Address,
    /// Amount of the underlying asset that backs a single contract.
    /// Always non-zero in a decoded record.
    pub underlying_amount_per_contract: u64,
    /// Amount of the quote asset transferred when a contract is exercised,
    /// exactly as stored on chain.
    pub quote_amount_per_contract: u64,
    /// Derived exchange ratio between quote and underlying amounts.
    pub strike_price: u64,
    /// Unix timestamp (seconds) at which contracts in this market expire.
    pub expiration_unix_timestamp: i64,
    /// Number of occupied slots in the writer registry.
    pub registry_length: u16,
    /// The full fixed-size writer registry, padding slots included.
    /// Prefer [`writers`](Self::writers) for the occupied prefix.
    pub option_writer_registry: [OptionWriter; MAX_WRITER_SLOTS],
}

impl OptionMarket {
    /// Decode a raw account buffer into an owned market record.
    ///
    /// Equivalent to [`OptionMarketData::parse`] followed by
    /// [`from_layout`](Self::from_layout).
    ///
    /// # Errors
    ///
    /// * [`DecodeError::SizeMismatch`] - buffer is not exactly 1114 bytes
    /// * [`DecodeError::RegistryOverflow`] - `registry_length` > 10
    /// * [`DecodeError::DivisionByZero`] - `underlying_amount_per_contract`
    ///   is zero
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let layout = OptionMarketData::parse(data)?;
        Self::from_layout(layout)
    }

    /// Validate a raw layout view and build the owned record.
    ///
    /// The registry bound is checked before the division so that a buffer
    /// that is wrong in both ways reports the structural problem first.
    /// The external program stores the ratio operands and divides on use;
    /// here the zero divisor is an explicit error rather than a crash.
    pub fn from_layout(layout: &OptionMarketData) -> Result<Self, DecodeError> {
        let registry_length = layout.registry_length();
        if usize::from(registry_length) > MAX_WRITER_SLOTS {
            return Err(DecodeError::RegistryOverflow {
                len: registry_length,
            });
        }

        let underlying_amount_per_contract = layout.underlying_amount_per_contract();
        if underlying_amount_per_contract == 0 {
            return Err(DecodeError::DivisionByZero);
        }
        let quote_amount_per_contract = layout.quote_amount_per_contract();
        let strike_price = quote_amount_per_contract / underlying_amount_per_contract;

        Ok(Self {
            option_mint: layout.option_mint,
            underlying_asset_mint: layout.underlying_asset_mint,
            quote_asset_mint: layout.quote_asset_mint,
            underlying_asset_pool: layout.underlying_asset_pool,
            underlying_amount_per_contract,
            quote_amount_per_contract,
            strike_price,
            expiration_unix_timestamp: layout.expiration_unix_timestamp(),
            registry_length,
            option_writer_registry: layout.option_writer_registry,
        })
    }

    /// The occupied prefix of the writer registry.
    ///
    /// Slots past `registry_length` are zero-filled padding and are not
    /// included.
    #[inline]
    pub fn writers(&self) -> &[OptionWriter] {
        &self.option_writer_registry[..usize::from(self.registry_length)]
    }
}
