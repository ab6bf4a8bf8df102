use anyhow::Result;

use alloy::primitives::{Address, U256};
use alloy::providers::Provider;

use crate::abi::{IBalanceStake, IStakeVault};

/// Staked amount in a MasterChef-style vault for `(pid, wallet)`.
/// Reward debt is ignored; pending rewards are not resolvable through
/// `userInfo` alone.
pub async fn vault_amount<P: Provider + Clone>(
    provider: P,
    vault: Address,
    pid: u64,
    wallet: Address,
) -> Result<U256> {
    let v = IStakeVault::new(vault, provider);
    let ret = v.userInfo(U256::from(pid), wallet).call().await?;
    Ok(ret.amount)
}

/// Staked amount in a plain balance-mapping staking contract.
pub async fn balance_stake<P: Provider + Clone>(
    provider: P,
    stake: Address,
    wallet: Address,
) -> Result<U256> {
    let s = IBalanceStake::new(stake, provider);
    Ok(s.balances(wallet).call().await?)
}
