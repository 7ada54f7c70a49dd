use super::*;

/// Contract token ID type. IDs are assigned sequentially from 0, so a plain
/// `u64` token ID is sufficient.
pub type ContractTokenId = TokenIdU64;

/// Every token is unique, so token amounts are only ever 0 or 1.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;

pub type ContractResult<A> = Result<A, ContractError>;
