//! View-only contract interfaces shared by the portfolio fetchers.
//!
//! Everything here is read-only; the tool never signs or submits.

alloy::sol! {
    #[sol(rpc)]
    interface IErc20View {
        function balanceOf(address owner) view returns (uint256);
        function decimals() view returns (uint8);
        function symbol() view returns (string);
    }

    // Uniswap/Pancake v2 style pair. The pair itself is the LP token,
    // hence balanceOf/totalSupply next to the reserve getters.
    #[sol(rpc)]
    interface IPairView {
        function token0() view returns (address);
        function token1() view returns (address);
        function getReserves() view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
        function balanceOf(address owner) view returns (uint256);
        function totalSupply() view returns (uint256);
    }

    // MasterChef style vault: one contract, many pools, positions keyed
    // by (pid, user). Covers both the unbonded staking contracts and the
    // LP yield vaults.
    #[sol(rpc)]
    interface IStakeVault {
        function userInfo(uint256 pid, address user) view returns (uint256 amount, uint256 rewardDebt);
    }

    // Single-token staking that exposes a plain balance mapping.
    #[sol(rpc)]
    interface IBalanceStake {
        function balances(address owner) view returns (uint256);
    }
}
