//! Batch decode and filter over fetched account buffers.
//!
//! The surrounding system fetches raw account data however it likes (RPC,
//! snapshots, test fixtures); this module takes the resulting
//! `(address, bytes)` pairs and turns them into decoded, optionally filtered
//! markets. Both operations are synchronous pure functions with no shared
//! mutable state, so they are safe to call from multiple threads at once.

use std::collections::HashSet;

use solana_address::Address;
use tracing::{debug, trace};

use crate::error::BatchDecodeError;
use crate::filter::matches_asset_set;
use crate::market::OptionMarket;

/// Decode a batch of fetched market accounts, preserving order.
///
/// Fail-fast: the first undecodable buffer aborts the whole batch and is
/// reported with the address it was fetched from. Records decoded before the
/// failure are discarded: the caller never sees a partially decoded batch,
/// which keeps the result auditable against the fetch.
///
/// # Errors
///
/// [`BatchDecodeError`] naming the first failing account and why it failed.
pub fn decode_all<'a, I>(accounts: I) -> Result<Vec<(Address, OptionMarket)>, BatchDecodeError>
where
    I: IntoIterator<Item = (Address, &'a [u8])>,
{
    let mut markets = Vec::new();
    for (address, data) in accounts {
        match OptionMarket::decode(data) {
            Ok(market) => markets.push((address, market)),
            Err(source) => {
                debug!(%address, %source, "aborting batch decode");
                return Err(BatchDecodeError { address, source });
            }
        }
    }
    trace!(markets = markets.len(), "decoded market batch");
    Ok(markets)
}

/// Keep the markets whose asset pair is fully inside `allowed`.
///
/// Input order and the address pairing of surviving entries are preserved;
/// nothing is reordered or deduplicated.
pub fn filter_by_asset_set(
    markets: Vec<(Address, OptionMarket)>,
    allowed: &HashSet<Address>,
) -> Vec<(Address, OptionMarket)> {
    let before = markets.len();
    let kept: Vec<_> = markets
        .into_iter()
        .filter(|(_, market)| matches_asset_set(market, allowed))
        .collect();
    trace!(before, after = kept.len(), "filtered markets by asset set");
    kept
}

#[cfg(test)]
mod tests {
    use crate::error::DecodeError;
    use crate::layout::fixtures::SampleMarket;
    use crate::layout::OptionMarketData;

    use super::*;

    fn addr(byte: u8) -> Address {
        Address::new_from_array([byte; 32])
    }

    fn market_with_assets(underlying: Address, quote: Address) -> Vec<u8> {
        let mut sample = SampleMarket::new();
        sample.underlying_asset_mint = underlying;
        sample.quote_asset_mint = quote;
        sample.to_bytes()
    }

    #[test]
    fn decode_all_preserves_order_and_pairing() {
        let buffers = [
            market_with_assets(addr(11), addr(12)),
            market_with_assets(addr(13), addr(14)),
            market_with_assets(addr(15), addr(16)),
        ];
        let accounts = [
            (addr(101), buffers[0].as_slice()),
            (addr(102), buffers[1].as_slice()),
            (addr(103), buffers[2].as_slice()),
        ];

        let markets = decode_all(accounts).unwrap();
        assert_eq!(markets.len(), 3);
        assert_eq!(markets[0].0, addr(101));
        assert_eq!(markets[0].1.underlying_asset_mint, addr(11));
        assert_eq!(markets[1].0, addr(102));
        assert_eq!(markets[1].1.underlying_asset_mint, addr(13));
        assert_eq!(markets[2].0, addr(103));
        assert_eq!(markets[2].1.underlying_asset_mint, addr(15));
    }

    #[test]
    fn decode_all_fails_fast_on_first_bad_buffer() {
        let good = market_with_assets(addr(11), addr(12));
        let truncated = vec![0u8; 500];
        let never_reached = market_with_assets(addr(13), addr(14));
        let accounts = [
            (addr(101), good.as_slice()),
            (addr(102), truncated.as_slice()),
            (addr(103), never_reached.as_slice()),
        ];

        let err = decode_all(accounts).unwrap_err();
        assert_eq!(err.address, addr(102));
        assert_eq!(
            err.source,
            DecodeError::SizeMismatch {
                expected: OptionMarketData::LEN,
                actual: 500,
            }
        );
    }

    #[test]
    fn decode_all_of_empty_batch_is_empty() {
        let accounts: [(Address, &[u8]); 0] = [];
        let markets = decode_all(accounts).unwrap();
        assert!(markets.is_empty());
    }

    #[test]
    fn filter_keeps_matches_in_original_relative_order() {
        let usdc = addr(50);
        let sol = addr(51);
        let other = addr(52);
        let buffers = [
            market_with_assets(sol, usdc),
            market_with_assets(other, usdc),
            market_with_assets(usdc, sol),
            market_with_assets(sol, other),
        ];
        let accounts = buffers
            .iter()
            .enumerate()
            .map(|(i, data)| (addr(101 + i as u8), data.as_slice()));
        let markets = decode_all(accounts).unwrap();

        let allowed: HashSet<Address> = [usdc, sol].into();
        let kept = filter_by_asset_set(markets, &allowed);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].0, addr(101));
        assert_eq!(kept[1].0, addr(103));
    }

    #[test]
    fn bad_length_buffer_aborts_before_any_filtering() {
        // Three fetched accounts: one fully allowed, one with only the
        // underlying asset allowed, one of the wrong length. The batch must
        // fail at the third; with it removed, decode-then-filter yields
        // exactly the first market.
        let usdc = addr(50);
        let sol = addr(51);
        let stranger = addr(52);
        let allowed: HashSet<Address> = [usdc, sol].into();

        let both_allowed = market_with_assets(sol, usdc);
        let half_allowed = market_with_assets(sol, stranger);
        let wrong_length = vec![0u8; 64];

        let err = decode_all([
            (addr(101), both_allowed.as_slice()),
            (addr(102), half_allowed.as_slice()),
            (addr(103), wrong_length.as_slice()),
        ])
        .unwrap_err();
        assert_eq!(err.address, addr(103));

        let markets = decode_all([
            (addr(101), both_allowed.as_slice()),
            (addr(102), half_allowed.as_slice()),
        ])
        .unwrap();
        let kept = filter_by_asset_set(markets, &allowed);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, addr(101));
        assert_eq!(kept[0].1.quote_asset_mint, usdc);
    }
}
