use super::*;

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// The account that initialized the contract. Immutable. The only
    /// identity allowed to call `adminMint`, `setBaseUri` and `withdraw`.
    pub admin: AccountAddress,
    /// The ID that the next minted token will receive. Equal to the number
    /// of tokens minted so far.
    pub counter: u64,
    /// Display name of the collection. Uninterpreted.
    pub name: String,
    /// Display symbol of the collection. Uninterpreted.
    pub symbol: String,
    /// Common prefix of all token metadata URLs.
    pub base_uri: String,
    /// The owner of each minted token.
    pub owners: StateMap<ContractTokenId, Address, S>,
    /// Number of tokens held by each address. Kept in sync with `owners` by
    /// `State::mint`, the only place ownership is assigned.
    pub balances: StateMap<Address, u64, S>,
    /// Sparse URI fragment table. A token without an entry resolves through
    /// its decimal token ID; presence of an entry is the override flag, so an
    /// empty fragment is a valid override.
    pub uri_overrides: StateMap<ContractTokenId, String, S>,
}

/// Parameter for contract initialization.
#[derive(Serialize, SchemaType)]
pub struct InitParams {
    /// Common prefix of all token metadata URLs.
    pub base_uri: String,
    /// Display name of the collection.
    pub name: String,
    /// Display symbol of the collection.
    pub symbol: String,
}

/// Parameter for the `adminMint` entrypoint.
#[derive(Serialize, SchemaType)]
pub struct AdminMintParams {
    /// Owner of the newly minted token.
    pub to: Address,
    /// URI fragment registered for the new token, replacing the decimal
    /// token ID in its metadata URL. May be empty.
    pub uri: String,
}

/// Return type of the `view` entrypoint.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ViewState {
    /// Display name of the collection.
    pub name: String,
    /// Display symbol of the collection.
    pub symbol: String,
    /// Common prefix of all token metadata URLs.
    pub base_uri: String,
    /// The contract admin.
    pub admin: AccountAddress,
    /// Number of tokens minted so far.
    pub minted: u64,
    /// Price of one token on the public `mint` entrypoint.
    pub mint_price: Amount,
}
