use {
    crate::constants::{BSC_CHAIN_ID, ETH_CHAIN_ID},
    crate::libs::config::Config,
    alloy::providers::{DynProvider, Provider, ProviderBuilder},
    anyhow::{Context, Result},
    reqwest::Client as HttpClient,
    serde::{Deserialize, Serialize},
    serde_json::Value,
    url::Url,
};

/// The chains a token entry may live on. Descriptor files name them the
/// same way ("Ethereum" / "Binance").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    Ethereum,
    Binance,
}

impl Chain {
    pub fn rpc_url<'a>(&self, cfg: &'a Config) -> &'a str {
        match self {
            Chain::Ethereum => &cfg.eth_rpc,
            Chain::Binance => &cfg.bnb_rpc,
        }
    }

    pub fn expected_chain_id(&self) -> u64 {
        match self {
            Chain::Ethereum => *ETH_CHAIN_ID,
            Chain::Binance => *BSC_CHAIN_ID,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Binance => "Binance",
        }
    }
}

/// Read-only alloy provider for contract views. No signer: this tool
/// never submits anything.
pub fn connect(rpc_url: &str) -> Result<DynProvider> {
    let url: Url = rpc_url
        .parse()
        .with_context(|| format!("Failed to parse RPC URL: {rpc_url}"))?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Minimal raw JSON-RPC client used for the startup sanity check, before
/// any contract call goes out on the endpoint.
#[derive(Clone, Debug)]
pub struct RpcProbe {
    rpc_url: Url,
    http: HttpClient,
}

impl RpcProbe {
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = Url::parse(rpc_url)
            .with_context(|| format!("Failed to parse RPC URL: {rpc_url}"))?;
        Ok(Self {
            rpc_url: url,
            http: HttpClient::new(),
        })
    }

    /// `eth_chainId` as a native u64.
    pub async fn chain_id(&self) -> Result<u64> {
        let res = self.rpc("eth_chainId", serde_json::json!([])).await?;
        let hex = res.as_str().context("chainId not string")?;
        let val =
            u64::from_str_radix(hex.trim_start_matches("0x"), 16).context("bad chainId hex")?;
        Ok(val)
    }

    async fn rpc(&self, method: &str, params: Value) -> Result<Value> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let res = self
            .http
            .post(self.rpc_url.as_str())
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        let bytes = res.bytes().await?;
        // Try to decode JSON; if it fails, surface useful diagnostics
        let v: Value = match serde_json::from_slice(&bytes) {
            Ok(json) => json,
            Err(e) => {
                let mut sample = String::from_utf8_lossy(&bytes).to_string();
                if sample.len() > 512 {
                    sample.truncate(512);
                }
                // common provider misconfig: HTML/empty response or wrong endpoint (e.g. WSS passed as HTTP)
                let hint = if sample.trim_start().starts_with('<') {
                    "Response looks like HTML; the endpoint may be a gateway page or blocked. Ensure it is a valid HTTPS JSON-RPC endpoint."
                } else if sample.trim().is_empty() {
                    "Empty body from RPC. Endpoint may be down or require authentication."
                } else {
                    "Non-JSON response from RPC."
                };
                return Err(anyhow::anyhow!(
                    "RPC decode error ({status}): {e}. {hint}\nEndpoint: {}\nSample: {}",
                    self.rpc_url,
                    sample
                ));
            }
        };
        if let Some(err) = v.get("error") {
            anyhow::bail!("rpc error: {}", err);
        }
        Ok(v.get("result").cloned().unwrap_or(Value::Null))
    }
}

/// Probe a chain and verify the node really serves the chain id we
/// expect for it. Aborting here beats decoding garbage reserves later.
pub async fn sanity_check(chain: Chain, rpc_url: &str) -> Result<()> {
    let probe = RpcProbe::new(rpc_url)?;
    let id = probe
        .chain_id()
        .await
        .with_context(|| format!("{} node at {rpc_url} did not answer eth_chainId", chain.label()))?;
    if id != chain.expected_chain_id() {
        anyhow::bail!(
            "{} endpoint reports chain id {id}, expected {}",
            chain.label(),
            chain.expected_chain_id()
        );
    }
    Ok(())
}
