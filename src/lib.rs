//! A fixed-price NFT issuance smart contract.
//!
//! # Description
//! An instance of this smart contract tracks a single collection of unique
//! tokens with sequentially assigned IDs, starting at 0. Tokens are created
//! through one of two paths and never destroyed:
//!
//! - `adminMint`: only the account that initialized the contract may mint,
//!   free of charge, to an arbitrary address, attaching a metadata URI
//!   fragment for the new token.
//! - `mint`: anyone may mint to themselves by attaching at least the fixed
//!   mint price in CCD. Any overpayment is returned to the sender within the
//!   same invocation, so a failed refund rejects the mint entirely.
//!
//! The metadata location of a token is `<base URI><fragment>.json`, where the
//! fragment is the one registered at `adminMint` time, or the decimal token
//! ID when none was registered. The base URI can be replaced by the admin at
//! any time, which retroactively moves every token without a fragment of its
//! own.
//!
//! CCD held by the contract (mint proceeds and plain donations received
//! through `deposit`) can be withdrawn by the admin with `withdraw`.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, errors::*, events::*, structs::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod errors;
mod events;
mod impls;
mod structs;
mod types;

/// Build the metadata URL for a token from the base URI and either its
/// registered URI fragment or its decimal token ID. No separator is inserted
/// between the base URI and the fragment.
fn build_token_uri(base_uri: &str, fragment: Option<&str>, token_id: ContractTokenId) -> String {
    let mut url = String::with_capacity(base_uri.len() + JSON_SUFFIX.len() + 20);
    url.push_str(base_uri);
    match fragment {
        Some(fragment) => url.push_str(fragment),
        None => push_decimal(&mut url, token_id.0),
    }
    url.push_str(JSON_SUFFIX);
    url
}

/// Append the decimal representation of `value` to `string`.
fn push_decimal(string: &mut String, mut value: u64) {
    // u64::MAX has 20 decimal digits.
    let mut digits = [0u8; 20];
    let mut len = 0;
    loop {
        digits[len] = b'0' + (value % 10) as u8;
        len += 1;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    while len > 0 {
        len -= 1;
        string.push(digits[len] as char);
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn token_id_formatting() {
        let cases = [0u64, 1, 9, 10, 42, 1000, u64::MAX - 1, u64::MAX];
        for value in cases {
            let mut string = String::new();
            push_decimal(&mut string, value);
            claim_eq!(string, value.to_string());
        }
    }

    #[concordium_test]
    fn token_uri_composition() {
        // No separator normalization: the base URI is used verbatim.
        claim_eq!(
            build_token_uri("https://x/", None, TokenIdU64(7)),
            "https://x/7.json"
        );
        claim_eq!(
            build_token_uri("https://x", None, TokenIdU64(7)),
            "https://x7.json"
        );
        claim_eq!(
            build_token_uri("https://x/", Some("foo"), TokenIdU64(7)),
            "https://x/foo.json"
        );
        // An empty fragment is a valid override.
        claim_eq!(
            build_token_uri("https://x/", Some(""), TokenIdU64(7)),
            "https://x/.json"
        );
    }
}
