use anyhow::Result;

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;

use crate::abi::{IErc20View, IPairView};
use crate::units::units_to_f64;
use crate::writing::cc;

/// One read of a v2-style pair: token ordering, reserves and the decimals
/// of both sides. Taken once per pool per run; all ownership and pricing
/// arithmetic happens on the snapshot afterwards.
#[derive(Clone, Debug)]
pub struct PairSnapshot {
    pub pair: Address,
    pub token0: Address,
    pub token1: Address,
    pub reserve0: U256,
    pub reserve1: U256,
    pub decimals0: u32,
    pub decimals1: u32,
}

pub async fn snapshot_pair<P: Provider + Clone>(provider: P, pair: Address) -> Result<PairSnapshot> {
    let pairc = IPairView::new(pair, provider.clone());
    let token0 = pairc.token0().call().await?;
    let token1 = pairc.token1().call().await?;
    let reserves = pairc.getReserves().call().await?;
    let decimals0 = IErc20View::new(token0, provider.clone()).decimals().call().await? as u32;
    let decimals1 = IErc20View::new(token1, provider).decimals().call().await? as u32;

    let snap = PairSnapshot {
        pair,
        token0,
        token1,
        reserve0: U256::from(reserves.reserve0),
        reserve1: U256::from(reserves.reserve1),
        decimals0,
        decimals1,
    };
    if snap.reserve0.is_zero() || snap.reserve1.is_zero() {
        crate::elog!(cc::ORANGE, "pair {} has an empty reserve side", pair);
    }
    Ok(snap)
}

/// The wallet's LP balance plus LP parked in a yield vault, as fetched by
/// the caller, against the pair's total supply.
#[derive(Clone, Copy, Debug, Default)]
pub struct LpShare {
    pub my_lp: U256,
    pub total_lp: U256,
}

impl PairSnapshot {
    fn human_reserves(&self) -> (f64, f64) {
        (
            units_to_f64(self.reserve0, self.decimals0),
            units_to_f64(self.reserve1, self.decimals1),
        )
    }

    /// Mid price of `token` denominated in the opposite side of the pair,
    /// from normalized reserves. Errors if `token` is not in the pair or a
    /// reserve side is empty.
    pub fn mid_price_of(&self, token: Address) -> Result<f64> {
        let (r0, r1) = self.human_reserves();
        if r0 == 0.0 || r1 == 0.0 {
            anyhow::bail!("pair {} has empty reserves", self.pair);
        }
        if token == self.token0 {
            Ok(r1 / r0)
        } else if token == self.token1 {
            Ok(r0 / r1)
        } else {
            anyhow::bail!("token {token} is not a side of pair {}", self.pair)
        }
    }

    /// Proportional ownership of both reserves for an LP share, in human
    /// units, ordered so `main` corresponds to `main_token`.
    /// A zero total supply yields (0, 0).
    pub fn owned_amounts(&self, main_token: Address, share: LpShare) -> Result<(f64, f64)> {
        if main_token != self.token0 && main_token != self.token1 {
            anyhow::bail!("token {main_token} is not a side of pair {}", self.pair);
        }
        if share.total_lp.is_zero() || share.my_lp.is_zero() {
            return Ok((0.0, 0.0));
        }
        let fraction = units_to_f64(share.my_lp, 0) / units_to_f64(share.total_lp, 0);
        let (r0, r1) = self.human_reserves();
        if main_token == self.token0 {
            Ok((r0 * fraction, r1 * fraction))
        } else {
            Ok((r1 * fraction, r0 * fraction))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap() -> PairSnapshot {
        // token0: 8-decimal token, token1: USDT-like 6 decimals
        // 1_000 token0 vs 250 token1 -> token0 is worth 0.25
        PairSnapshot {
            pair: Address::repeat_byte(0xaa),
            token0: Address::repeat_byte(0x01),
            token1: Address::repeat_byte(0x02),
            reserve0: U256::from(100_000_000_000u128), // 1_000 * 10^8
            reserve1: U256::from(250_000_000u128),     // 250 * 10^6
            decimals0: 8,
            decimals1: 6,
        }
    }

    #[test]
    fn mid_price_both_orientations() {
        let s = snap();
        let p0 = s.mid_price_of(s.token0).unwrap();
        let p1 = s.mid_price_of(s.token1).unwrap();
        assert!((p0 - 0.25).abs() < 1e-12);
        assert!((p1 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn mid_price_rejects_foreign_token() {
        let s = snap();
        assert!(s.mid_price_of(Address::repeat_byte(0x99)).is_err());
    }

    #[test]
    fn mid_price_rejects_empty_reserves() {
        let mut s = snap();
        s.reserve1 = U256::ZERO;
        assert!(s.mid_price_of(s.token0).is_err());
    }

    #[test]
    fn owned_amounts_follow_lp_fraction() {
        let s = snap();
        // own 10% of the pool
        let share = LpShare { my_lp: U256::from(10u8), total_lp: U256::from(100u8) };
        let (main, paired) = s.owned_amounts(s.token0, share).unwrap();
        assert!((main - 100.0).abs() < 1e-9);
        assert!((paired - 25.0).abs() < 1e-9);

        // same share queried from the token1 side flips the ordering
        let (main, paired) = s.owned_amounts(s.token1, share).unwrap();
        assert!((main - 25.0).abs() < 1e-9);
        assert!((paired - 100.0).abs() < 1e-9);
    }

    #[test]
    fn owned_amounts_zero_supply_is_zero() {
        let s = snap();
        let share = LpShare { my_lp: U256::from(10u8), total_lp: U256::ZERO };
        assert_eq!(s.owned_amounts(s.token0, share).unwrap(), (0.0, 0.0));
    }
}
