use {
    crate::libs::chain::Chain,
    alloy::primitives::Address,
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::{fs, path::Path},
};

/// One token descriptor from the portfolio file. Unknown keys are
/// ignored so hand-maintained files can carry notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntry {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub blockchain: Chain,
    pub token_address: Address,
    #[serde(default)]
    pub bonded_staking: Option<BondedStaking>,
    #[serde(default)]
    pub unbonded_staking: Option<UnbondedStaking>,
    #[serde(default, rename = "liquidityPool")]
    pub liquidity_pools: Vec<PoolEntry>,
}

/// Balance-mapping staking: `balances(wallet)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondedStaking {
    pub contract_address: Address,
}

/// MasterChef-style staking: `userInfo(userInfoNumber, wallet)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnbondedStaking {
    pub contract_address: Address,
    pub user_info_number: u64,
}

/// A v2-style pool the wallet may hold LP in, plus the optional yield
/// vault those LP tokens can be parked in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolEntry {
    pub liquidity_pool_address: Address,
    pub paired_token_symbol: String,
    #[serde(default)]
    pub liquidity_token_staking_address: Option<Address>,
    #[serde(default)]
    pub liquidity_token_staking_number: Option<u64>,
}

/// Load the portfolio descriptor file (default `tokenInfo.json`).
pub fn load_token_file(path: &Path) -> Result<Vec<TokenEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let entries: Vec<TokenEntry> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "name": "SingularityNET",
            "symbol": "AGIX",
            "decimals": 8,
            "blockchain": "Ethereum",
            "tokenAddress": "0x5b7533812759b45c2b44c19e320ba2cd2681b542",
            "bondedStaking": { "contractAddress": "0x25a813fb1f076407a557b5e4d98bb0a55dca14db" },
            "liquidityPool": [
                {
                    "liquidityPoolAddress": "0xe45b4a84e0ad24b8617a489d743c52b84b7acebe",
                    "pairedTokenSymbol": "ETH",
                    "liquidityTokenStakingAddress": "0x0000000000000000000000000000000000000002",
                    "liquidityTokenStakingNumber": 2
                }
            ],
            "notes": "unknown keys are fine"
        },
        {
            "name": "Tether",
            "symbol": "USDT",
            "decimals": 6,
            "blockchain": "Binance",
            "tokenAddress": "0x55d398326f99059ff775485246999027b3197955"
        }
    ]"#;

    #[test]
    fn parses_full_and_minimal_entries() {
        let entries: Vec<TokenEntry> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);

        let agix = &entries[0];
        assert_eq!(agix.symbol, "AGIX");
        assert_eq!(agix.blockchain, Chain::Ethereum);
        assert!(agix.bonded_staking.is_some());
        assert!(agix.unbonded_staking.is_none());
        assert_eq!(agix.liquidity_pools.len(), 1);
        let pool = &agix.liquidity_pools[0];
        assert_eq!(pool.paired_token_symbol, "ETH");
        assert_eq!(pool.liquidity_token_staking_number, Some(2));

        let usdt = &entries[1];
        assert_eq!(usdt.blockchain, Chain::Binance);
        assert!(usdt.liquidity_pools.is_empty());
    }

    #[test]
    fn rejects_malformed_address() {
        let bad = r#"[{ "name": "x", "symbol": "X", "decimals": 18,
            "blockchain": "Ethereum", "tokenAddress": "0x1234" }]"#;
        assert!(serde_json::from_str::<Vec<TokenEntry>>(bad).is_err());
    }

    #[test]
    fn load_names_missing_file() {
        let err = load_token_file(Path::new("/no/such/tokenInfo.json")).unwrap_err();
        assert!(format!("{err:#}").contains("tokenInfo.json"));
    }
}
