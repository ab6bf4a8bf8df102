use {
    alloy::primitives::Address,
    anyhow::{Context, Result},
    dotenv::dotenv,
    std::{fmt::Debug, str::FromStr},
};

pub fn load_env() {
    dotenv().ok();
}

/// Environment-driven settings. The RPC endpoints fall back to public
/// nodes; the wallet is mandatory and must be a valid address.
#[derive(Debug, Clone)]
pub struct Config {
    pub wallet_address: Address,
    pub eth_rpc: String,
    pub bnb_rpc: String,
}

impl Config {
    pub fn new() -> Result<Self> {
        let wallet = std::env::var("WALLET_ADDRESS")
            .context("config.rs: WALLET_ADDRESS is not set")?;
        let wallet_address = wallet
            .parse::<Address>()
            .with_context(|| format!("WALLET_ADDRESS `{wallet}` is not a valid address"))?;
        Ok(Self {
            wallet_address,
            eth_rpc: std::env::var("ETH_RPC")
                .unwrap_or_else(|_| "https://eth.llamarpc.com".to_string()),
            bnb_rpc: std::env::var("BNB_RPC")
                .unwrap_or_else(|_| "https://bsc-dataseed.binance.org".to_string()),
        })
    }

    /// Parse env var to T; fall back to typed default.
    pub fn get_var_t<T>(key: &str, default: T) -> T
    where
        T: FromStr,
        <T as FromStr>::Err: Debug,
    {
        std::env::var(key)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .unwrap_or(default)
    }
}
