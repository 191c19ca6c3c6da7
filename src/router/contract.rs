use alloy::sol;

// Router ABI for the swap entry points whose calldata this crate produces
sol! {
    /// Uniswap V2 style Router02 interface.
    ///
    /// Only the nine swap entry points are declared. Argument names and order
    /// match the deployed router exactly, since calldata is positional.
    interface IUniswapV2Router02 {
        /// Swaps an exact amount of native currency for as many output tokens as possible.
        function swapExactETHForTokens(
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external payable returns (uint256[] memory amounts);

        /// Same as `swapExactETHForTokens`, but tolerates tokens that take a fee on transfer.
        function swapExactETHForTokensSupportingFeeOnTransferTokens(
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external payable;

        /// Swaps an exact amount of tokens for as much native currency as possible.
        function swapExactTokensForETH(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);

        /// Same as `swapExactTokensForETH`, but tolerates tokens that take a fee on transfer.
        function swapExactTokensForETHSupportingFeeOnTransferTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external;

        /// Swaps an exact amount of input tokens for as many output tokens as possible.
        function swapExactTokensForTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);

        /// Same as `swapExactTokensForTokens`, but tolerates tokens that take a fee on transfer.
        function swapExactTokensForTokensSupportingFeeOnTransferTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external;

        /// Receives an exact amount of tokens for as little native currency as possible.
        function swapETHForExactTokens(
            uint256 amountOut,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external payable returns (uint256[] memory amounts);

        /// Receives an exact amount of native currency for as few tokens as possible.
        function swapTokensForExactETH(
            uint256 amountOut,
            uint256 amountInMax,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);

        /// Receives an exact amount of output tokens for as few input tokens as possible.
        function swapTokensForExactTokens(
            uint256 amountOut,
            uint256 amountInMax,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);
    }
}
