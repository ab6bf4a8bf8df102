use {
    crate::app::results,
    crate::constants::FETCH_BUFFER,
    crate::libs::chain::{self, Chain},
    crate::libs::config::{load_env, Config},
    crate::libs::fetch::{fetch_bounded, fetch_token, sum_positions, TokenPosition},
    crate::libs::pricing::RateBook,
    crate::libs::tokens::load_token_file,
    crate::libs::writing::{cc, short_addr},
    crate::log,
    alloy::providers::DynProvider,
    anyhow::{Context, Result},
    futures_util::future::join_all,
    std::collections::HashMap,
    std::path::Path,
};

/// The whole pipeline: config -> endpoint sanity checks -> concurrent
/// per-token fetch -> per-symbol aggregation -> price walk -> report.
pub async fn init() -> Result<()> {
    load_env();
    let cfg = Config::new()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tokenInfo.json".to_string());
    let entries = load_token_file(Path::new(&path))?;
    if entries.is_empty() {
        crate::warn!("{path} holds no token entries, nothing to value");
        return Ok(());
    }
    log!(
        cc::LIGHT_CYAN,
        "valuing {} token entries for wallet {}",
        entries.len(),
        short_addr(&cfg.wallet_address)
    );

    // One provider per chain actually present in the file. Every
    // endpoint answers eth_chainId with the expected id before any
    // contract call goes out.
    let mut chains: Vec<Chain> = entries.iter().map(|e| e.blockchain).collect();
    chains.sort_by_key(|c| c.label());
    chains.dedup();

    let checks = chains
        .iter()
        .map(|c| chain::sanity_check(*c, c.rpc_url(&cfg)));
    for (chain, res) in chains.iter().zip(join_all(checks).await) {
        res.with_context(|| format!("{} endpoint failed its sanity check", chain.label()))?;
        log!(cc::LIGHT_GREEN, "{} endpoint ok", chain.label());
    }

    let mut providers: HashMap<Chain, DynProvider> = HashMap::new();
    for chain in &chains {
        providers.insert(*chain, chain::connect(chain.rpc_url(&cfg))?);
    }

    // Best-effort parallel fetch, at most FETCH_BUFFER tokens in flight.
    // A failed token is logged and skipped.
    let fetches: Vec<_> = entries
        .into_iter()
        .map(|entry| {
            let provider = providers[&entry.blockchain].clone();
            let wallet = cfg.wallet_address;
            async move {
                let symbol = entry.symbol.clone();
                (symbol, fetch_token(provider, wallet, entry).await)
            }
        })
        .collect();

    let mut positions: Vec<TokenPosition> = Vec::new();
    for (symbol, res) in fetch_bounded(fetches, *FETCH_BUFFER).await {
        match res {
            Ok(pos) => positions.push(pos),
            Err(e) => log!(cc::LIGHT_RED, "skipping {}: {:#}", symbol, e),
        }
    }
    positions.sort_by(|a, b| a.entry.symbol.cmp(&b.entry.symbol));

    let all_tokens = sum_positions(&positions);
    let rates = RateBook::from_positions(&positions);
    results::print_report(&all_tokens, &rates);
    Ok(())
}
