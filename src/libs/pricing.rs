use {
    crate::constants::{PRICE_HOPS, USDT},
    crate::libs::fetch::TokenPosition,
    crate::libs::writing::cc,
    crate::log,
    std::collections::{HashMap, HashSet},
    thiserror::Error,
};

#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    #[error("no USDT/ETH/BNB price route for {0}")]
    NoRoute(String),
}

/// Mid-price of one pool: 1 unit of the symbol in `paired` units.
#[derive(Clone, Debug)]
pub struct PoolRate {
    pub paired: String,
    pub rate: f64,
}

/// The price graph, keyed by symbol. Built once from the fetched pool
/// snapshots; the USD walk is pure from here on.
#[derive(Debug, Default)]
pub struct RateBook {
    rates: HashMap<String, Vec<PoolRate>>,
}

impl RateBook {
    pub fn from_positions(positions: &[TokenPosition]) -> Self {
        let mut book = RateBook::default();
        for pos in positions {
            for pool in &pos.pools {
                match pool.snapshot.mid_price_of(pos.entry.token_address) {
                    Ok(rate) => book.insert(&pos.entry.symbol, &pool.paired_symbol, rate),
                    Err(e) => {
                        log!(cc::ORANGE, "unusable pool for {}: {}", pos.entry.symbol, e);
                    }
                }
            }
        }
        book
    }

    pub fn insert(&mut self, symbol: &str, paired: &str, rate: f64) {
        self.rates
            .entry(symbol.to_string())
            .or_default()
            .push(PoolRate {
                paired: paired.to_string(),
                rate,
            });
    }

    /// USD price of one unit of `symbol`: USDT is 1 by definition, a
    /// direct USDT pool wins, otherwise hop through ETH then BNB. The
    /// visited set keeps anchor pools that only reference each other
    /// from looping.
    pub fn price_in_usdt(&self, symbol: &str) -> Result<f64, PriceError> {
        let mut visited = HashSet::new();
        self.resolve(symbol, &mut visited)
    }

    fn resolve(&self, symbol: &str, visited: &mut HashSet<String>) -> Result<f64, PriceError> {
        if symbol == USDT {
            return Ok(1.0);
        }
        visited.insert(symbol.to_string());

        let pools = self
            .rates
            .get(symbol)
            .ok_or_else(|| PriceError::NoRoute(symbol.to_string()))?;

        if let Some(direct) = pools.iter().find(|p| p.paired == USDT) {
            return Ok(direct.rate);
        }
        for hop in PRICE_HOPS {
            if visited.contains(hop) {
                continue;
            }
            if let Some(pool) = pools.iter().find(|p| p.paired == hop) {
                // a dead anchor route falls through to the next hop
                if let Ok(hop_usd) = self.resolve(hop, visited) {
                    return Ok(pool.rate * hop_usd);
                }
            }
        }
        Err(PriceError::NoRoute(symbol.to_string()))
    }
}
