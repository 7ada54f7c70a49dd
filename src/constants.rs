use super::*;

/// Price of one token on the public `mint` entrypoint. Fixed for the lifetime
/// of the contract.
pub const MINT_PRICE: Amount = Amount::from_micro_ccd(100_000_000);

/// Suffix appended to every token metadata URL.
pub const JSON_SUFFIX: &str = ".json";

/// Tag for the custom SetBaseUri event.
pub const SET_BASE_URI_TAG: u8 = u8::MAX - 5;

/// Tag for the custom Withdraw event.
pub const WITHDRAW_TAG: u8 = u8::MAX - 6;
