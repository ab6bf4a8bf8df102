use std::collections::HashMap;
use std::sync::LazyLock;

#[macro_export]
macro_rules! env_lazy {
    ($( $vis:vis $name:ident : $ty:ty = ($key:literal, $default:expr); )* ) => {
        $(
            $vis static $name: ::std::sync::LazyLock<$ty> = ::std::sync::LazyLock::new(|| {
                $crate::libs::config::load_env();
                $crate::libs::config::Config::get_var_t::<$ty>($key, $default)
            });
        )*
    };
}

env_lazy! {
    pub DUST_THRESHOLD: f64 = ("DUST_THRESHOLD", 0.0001);
    pub FETCH_BUFFER: usize = ("FETCH_BUFFER", 8);
    pub ETH_CHAIN_ID: u64   = ("ETH_CHAIN_ID", 1);
    pub BSC_CHAIN_ID: u64   = ("BSC_CHAIN_ID", 56);
}

pub const USDT: &str = "USDT";

/// Anchor hop order when a token has no direct USDT pool.
pub const PRICE_HOPS: [&str; 2] = ["ETH", "BNB"];

/// Quote-side tokens whose pools exist for pricing, not for LP ownership.
pub static ANCHOR_DECIMALS: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    HashMap::from([("USDT", 6), ("ETH", 18), ("BNB", 18), ("USDC", 6)])
});

pub fn is_anchor<S: AsRef<str>>(symbol: S) -> bool {
    ANCHOR_DECIMALS.contains_key(symbol.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_buffer_is_usable_as_a_concurrency_cap() {
        assert!(*FETCH_BUFFER >= 1);
    }

    #[test]
    fn anchors_cover_quote_currencies() {
        for s in ["USDT", "ETH", "BNB", "USDC"] {
            assert!(is_anchor(s));
        }
        assert!(!is_anchor("AGIX"));
    }
}
