use super::*;

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a state with no tokens, administered by `admin`.
    pub fn new(state_builder: &mut StateBuilder<S>, admin: AccountAddress, params: InitParams) -> Self {
        State {
            admin,
            counter: 0,
            name: params.name,
            symbol: params.symbol,
            base_uri: params.base_uri,
            owners: state_builder.new_map(),
            balances: state_builder.new_map(),
            uri_overrides: state_builder.new_map(),
        }
    }

    /// Mint the next token with a given address as the owner, registering the
    /// URI fragment for it when one is given. Token IDs are assigned
    /// sequentially, so this cannot clash with an existing token. Returns the
    /// ID of the new token.
    pub fn mint(&mut self, owner: Address, uri: Option<String>) -> ContractTokenId {
        let token_id = TokenIdU64(self.counter);
        self.counter += 1;

        self.owners.insert(token_id, owner);
        let mut balance = self.balances.entry(owner).or_insert_with(|| 0);
        *balance += 1;

        if let Some(fragment) = uri {
            self.uri_overrides.insert(token_id, fragment);
        }
        token_id
    }

    /// Check that the token ID has been minted by this contract.
    #[inline(always)]
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        token_id.0 < self.counter
    }

    /// Get the number of tokens held by the given address. Addresses that
    /// never owned a token have a balance of 0.
    pub fn balance(&self, address: &Address) -> u64 {
        self.balances.get(address).map_or(0, |balance| *balance)
    }

    /// Get the owner of a given token ID.
    /// Results in an error if the token ID has not been minted.
    pub fn owner(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.owners
            .get(token_id)
            .map(|owner| *owner)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Resolve the metadata URL of a given token ID, consulting the URI
    /// fragment table and falling back to the decimal token ID.
    /// Results in an error if the token ID has not been minted.
    pub fn token_uri(&self, token_id: &ContractTokenId) -> ContractResult<String> {
        ensure!(self.contains_token(token_id), ContractError::InvalidTokenId);

        let fragment = self.uri_overrides.get(token_id);
        Ok(build_token_uri(
            &self.base_uri,
            fragment.as_deref().map(String::as_str),
            *token_id,
        ))
    }
}
