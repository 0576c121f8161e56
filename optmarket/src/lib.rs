//! # Optmarket - Option Market Account Codec
//!
//! Optmarket decodes the fixed-layout option market accounts maintained by
//! an external on-chain options program into typed Rust values, and filters
//! collections of decoded markets by an allowed asset set.
//!
//! ## Philosophy
//!
//! - **Byte-exact**: the 1114-byte account layout is pinned down with
//!   alignment-1 `#[repr(C)]` structs and compile-time size assertions; a
//!   buffer either matches it exactly or the decode fails, never partially
//! - **Exact arithmetic**: the derived strike price is computed with integer
//!   division, never floating point, so the financial ratio is exact
//! - **Pure functions**: decode and filter take bytes in and return values
//!   out; no network, no retries, no shared mutable state, safe to call
//!   concurrently
//!
//! Fetching the raw buffers (RPC, pagination, retries) belongs to the
//! caller. This crate's contract is: given a batch of `(address, bytes)`
//! pairs, decode and filter them deterministically.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::collections::HashSet;
//! use optmarket::{decode_all, filter_by_asset_set, Address};
//!
//! // Buffers fetched by your own RPC layer, paired with their addresses.
//! let markets = decode_all(fetched)?;
//!
//! let allowed: HashSet<Address> = [usdc_mint, sol_mint].into();
//! let tradable = filter_by_asset_set(markets, &allowed);
//! for (address, market) in &tradable {
//!     println!("{address}: strike {}", market.strike_price);
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`layout`]: the raw byte layout and zero-copy parse
//! - [`market`]: the owned [`OptionMarket`] record and derived strike price
//! - [`filter`]: the asset-set membership predicate
//! - [`collection`]: fail-fast batch decode and order-preserving filter
//! - [`error`]: the decode error taxonomy

pub mod collection;
pub mod error;
pub mod filter;
pub mod layout;
pub mod market;

pub use collection::{decode_all, filter_by_asset_set};
pub use error::{BatchDecodeError, DecodeError};
pub use filter::matches_asset_set;
pub use layout::{OptionMarketData, OptionWriter, MAX_WRITER_SLOTS};
pub use market::OptionMarket;

// Re-export the key type so callers don't need a direct solana-address
// dependency for basic use.
pub use solana_address::{address_eq, Address};
