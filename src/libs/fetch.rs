use {
    crate::constants::is_anchor,
    crate::libs::tokens::TokenEntry,
    crate::libs::writing::{cc, short_addr},
    crate::log,
    alloy::primitives::Address,
    alloy::providers::DynProvider,
    anyhow::{Context, Result},
    futures_util::stream::{self, StreamExt},
    onchain::abi::{IErc20View, IPairView},
    onchain::pair::{snapshot_pair, LpShare, PairSnapshot},
    onchain::stake::{balance_stake, vault_amount},
    onchain::units::{format_units, units_to_f64},
    std::collections::BTreeMap,
};

/// The wallet's stake in one configured pool, with the snapshot the
/// amounts were derived from. Anchor-token entries keep zero amounts;
/// their snapshots feed the price walk only.
#[derive(Clone, Debug)]
pub struct LpPosition {
    pub snapshot: PairSnapshot,
    pub paired_symbol: String,
    pub main_amount: f64,
    pub paired_amount: f64,
}

/// Everything fetched for one token entry: wallet balance, staking
/// positions and per-pool LP exposure.
#[derive(Clone, Debug)]
pub struct TokenPosition {
    pub entry: TokenEntry,
    pub in_wallet: f64,
    pub bonded: f64,
    pub unbonded: f64,
    pub pools: Vec<LpPosition>,
}

impl TokenPosition {
    /// Per-symbol exposure of this entry. The entry's own symbol collects
    /// wallet + bonded + unbonded + the main side of every pool; each
    /// paired symbol collects the opposite side.
    pub fn totals(&self) -> BTreeMap<String, f64> {
        let mut out = BTreeMap::new();
        let own = self.in_wallet + self.bonded + self.unbonded
            + self.pools.iter().map(|p| p.main_amount).sum::<f64>();
        out.insert(self.entry.symbol.clone(), own);
        for pool in &self.pools {
            *out.entry(pool.paired_symbol.clone()).or_insert(0.0) += pool.paired_amount;
        }
        out
    }
}

pub async fn fetch_token(
    provider: DynProvider,
    wallet: Address,
    entry: TokenEntry,
) -> Result<TokenPosition> {
    let erc20 = IErc20View::new(entry.token_address, provider.clone());
    let raw = erc20
        .balanceOf(wallet)
        .call()
        .await
        .with_context(|| format!("balanceOf failed for {}", entry.symbol))?;
    let in_wallet = units_to_f64(raw, entry.decimals);

    let bonded = match &entry.bonded_staking {
        Some(stake) => {
            let raw = balance_stake(provider.clone(), stake.contract_address, wallet)
                .await
                .with_context(|| format!("bonded staking read failed for {}", entry.symbol))?;
            units_to_f64(raw, entry.decimals)
        }
        None => 0.0,
    };

    let unbonded = match &entry.unbonded_staking {
        Some(stake) => {
            let raw = vault_amount(
                provider.clone(),
                stake.contract_address,
                stake.user_info_number,
                wallet,
            )
            .await
            .with_context(|| format!("unbonded staking read failed for {}", entry.symbol))?;
            units_to_f64(raw, entry.decimals)
        }
        None => 0.0,
    };

    let mut pools = Vec::with_capacity(entry.liquidity_pools.len());
    for pool in &entry.liquidity_pools {
        let pair = pool.liquidity_pool_address;
        let snapshot = snapshot_pair(provider.clone(), pair)
            .await
            .with_context(|| format!("pair read failed for {} ({})", entry.symbol, short_addr(&pair)))?;

        // Anchor entries carry pools for pricing, never for ownership.
        let share = if is_anchor(&entry.symbol) {
            LpShare::default()
        } else {
            let pairc = IPairView::new(pair, provider.clone());
            let mut my_lp = pairc.balanceOf(wallet).call().await?;
            if let Some(vault) = pool.liquidity_token_staking_address {
                let pid = pool
                    .liquidity_token_staking_number
                    .with_context(|| format!("{}: vault {} has no liquidityTokenStakingNumber", entry.symbol, short_addr(&vault)))?;
                my_lp += vault_amount(provider.clone(), vault, pid, wallet).await?;
            }
            let total_lp = pairc.totalSupply().call().await?;
            LpShare { my_lp, total_lp }
        };

        let (main_amount, paired_amount) = snapshot.owned_amounts(entry.token_address, share)?;
        pools.push(LpPosition {
            snapshot,
            paired_symbol: pool.paired_token_symbol.clone(),
            main_amount,
            paired_amount,
        });
    }

    // raw balance rendered losslessly; staking amounts are human-scale
    log!(
        cc::DARK_GRAY,
        "fetched {}: wallet {}, bonded {:.4}, unbonded {:.4}, {} pool(s)",
        entry.symbol,
        format_units(raw, entry.decimals),
        bonded,
        unbonded,
        pools.len()
    );

    Ok(TokenPosition {
        entry,
        in_wallet,
        bonded,
        unbonded,
        pools,
    })
}

/// Drive the per-token fetch futures with at most `limit` in flight at
/// once, so a large descriptor file cannot stampede the endpoints.
pub async fn fetch_bounded<T, F>(futs: Vec<F>, limit: usize) -> Vec<T>
where
    F: std::future::Future<Output = T>,
{
    stream::iter(futs)
        .buffer_unordered(limit.max(1))
        .collect()
        .await
}

/// Merge per-entry totals into the portfolio-wide symbol map.
pub fn sum_positions(positions: &[TokenPosition]) -> BTreeMap<String, f64> {
    let mut all = BTreeMap::new();
    for pos in positions {
        for (symbol, amount) in pos.totals() {
            *all.entry(symbol).or_insert(0.0) += amount;
        }
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::chain::Chain;
    use alloy::primitives::U256;

    fn entry(symbol: &str, token: Address) -> TokenEntry {
        TokenEntry {
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            decimals: 18,
            blockchain: Chain::Ethereum,
            token_address: token,
            bonded_staking: None,
            unbonded_staking: None,
            liquidity_pools: vec![],
        }
    }

    fn snap(token: Address, paired: Address) -> PairSnapshot {
        PairSnapshot {
            pair: Address::repeat_byte(0xcc),
            token0: token,
            token1: paired,
            reserve0: U256::from(1u8),
            reserve1: U256::from(1u8),
            decimals0: 18,
            decimals1: 18,
        }
    }

    #[test]
    fn totals_combine_wallet_staking_and_pools() {
        let token = Address::repeat_byte(0x01);
        let eth = Address::repeat_byte(0x02);
        let pos = TokenPosition {
            entry: entry("AGIX", token),
            in_wallet: 100.0,
            bonded: 25.0,
            unbonded: 10.0,
            pools: vec![LpPosition {
                snapshot: snap(token, eth),
                paired_symbol: "ETH".to_string(),
                main_amount: 40.0,
                paired_amount: 0.5,
            }],
        };
        let totals = pos.totals();
        assert!((totals["AGIX"] - 175.0).abs() < 1e-9);
        assert!((totals["ETH"] - 0.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn fetch_bounded_caps_in_flight_work() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let live = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let futs: Vec<_> = (0..20)
            .map(|i| {
                let live = live.clone();
                let peak = peak.clone();
                async move {
                    let now = live.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                    live.fetch_sub(1, Ordering::SeqCst);
                    i
                }
            })
            .collect();

        let mut out = fetch_bounded(futs, 4).await;
        out.sort();
        assert_eq!(out, (0..20).collect::<Vec<_>>());
        assert!(peak.load(Ordering::SeqCst) <= 4);
    }

    #[test]
    fn sum_positions_merges_shared_symbols() {
        let t1 = Address::repeat_byte(0x01);
        let t2 = Address::repeat_byte(0x03);
        let eth = Address::repeat_byte(0x02);
        let a = TokenPosition {
            entry: entry("AGIX", t1),
            in_wallet: 1.0,
            bonded: 0.0,
            unbonded: 0.0,
            pools: vec![LpPosition {
                snapshot: snap(t1, eth),
                paired_symbol: "ETH".to_string(),
                main_amount: 0.0,
                paired_amount: 2.0,
            }],
        };
        let b = TokenPosition {
            entry: entry("RJV", t2),
            in_wallet: 5.0,
            bonded: 0.0,
            unbonded: 0.0,
            pools: vec![LpPosition {
                snapshot: snap(t2, eth),
                paired_symbol: "ETH".to_string(),
                main_amount: 0.0,
                paired_amount: 3.0,
            }],
        };
        let all = sum_positions(&[a, b]);
        assert!((all["ETH"] - 5.0).abs() < 1e-9);
        assert!((all["AGIX"] - 1.0).abs() < 1e-9);
        assert!((all["RJV"] - 5.0).abs() < 1e-9);
    }
}
