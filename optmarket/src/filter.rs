//! Asset-set filtering over decoded markets.

use std::collections::HashSet;

use solana_address::Address;

use crate::market::OptionMarket;

/// Whether both of a market's assets belong to an allowed set.
///
/// A market matches only when its underlying asset mint *and* its quote
/// asset mint are members of `allowed`; a market trading one allowed asset
/// against one unknown asset is excluded. Membership is exact byte equality
/// on the 32-byte keys.
#[inline]
pub fn matches_asset_set(market: &OptionMarket, allowed: &HashSet<Address>) -> bool {
    allowed.contains(&market.underlying_asset_mint) && allowed.contains(&market.quote_asset_mint)
}
