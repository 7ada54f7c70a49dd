use super::*;

/// Initialize the contract instance with no tokens. The account deploying the
/// instance becomes the contract admin.
#[init(contract = "SequentialNFT", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params: InitParams = ctx.parameter_cursor().get()?;
    Ok(State::new(state_builder, ctx.init_origin(), params))
}

/// Mint the next token free of charge with a given address as the owner,
/// registering a URI fragment for it. Logs a `Mint` and a `TokenMetadata`
/// event and returns the new token ID.
///
/// It rejects if:
/// - The sender is not the contract admin.
/// - Fails to parse parameter.
/// - Fails to log an event.
#[receive(
    contract = "SequentialNFT",
    name = "adminMint",
    parameter = "AdminMintParams",
    return_value = "ContractTokenId",
    mutable,
    enable_logger
)]
fn admin_mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    ensure!(
        ctx.sender().matches_account(&host.state().admin),
        ContractError::Unauthorized
    );

    // Parse the parameter.
    let params: AdminMintParams = ctx.parameter_cursor().get()?;

    let owner = params.to;
    let token_id = host.state_mut().mint(owner, Some(params.uri));

    // Event for the minted token.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner,
    }))?;

    // Metadata URL for the token.
    let url = host.state().token_uri(&token_id)?;
    logger.log(&token_metadata_event(token_id, url))?;

    Ok(token_id)
}

/// Mint the next token with the sender as the owner, against payment of the
/// fixed mint price. Exactly the mint price is retained; any overpayment is
/// returned to the sender within the same invocation, so a failed refund
/// rejects the mint and no token is allocated. Logs a `Mint` and a
/// `TokenMetadata` event and returns the new token ID.
///
/// It rejects if:
/// - The sender is a contract.
/// - The attached amount is below the mint price.
/// - The refund transfer fails.
/// - Fails to log an event.
#[receive(
    contract = "SequentialNFT",
    name = "mint",
    return_value = "ContractTokenId",
    mutable,
    payable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    // The refund below must have a well defined receiving account.
    let sender = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    ensure!(amount >= MINT_PRICE, CustomContractError::InvalidPrice.into());

    // Return the overpaid CCD, keeping exactly the mint price.
    let excess = amount - MINT_PRICE;
    if excess != Amount::zero() {
        host.invoke_transfer(&sender, excess)?;
    }

    let owner = Address::Account(sender);
    let token_id = host.state_mut().mint(owner, None);

    // Event for the minted token.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner,
    }))?;

    // Metadata URL for the token.
    let url = host.state().token_uri(&token_id)?;
    logger.log(&token_metadata_event(token_id, url))?;

    Ok(token_id)
}

/// Replace the base URI. Takes effect immediately for every token without a
/// URI fragment of its own. Logs a `SetBaseUri` event.
///
/// It rejects if:
/// - The sender is not the contract admin.
/// - Fails to parse parameter.
/// - Fails to log an event.
#[receive(
    contract = "SequentialNFT",
    name = "setBaseUri",
    parameter = "String",
    mutable,
    enable_logger
)]
fn set_base_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    ensure!(
        ctx.sender().matches_account(&host.state().admin),
        ContractError::Unauthorized
    );

    // Parse the parameter.
    let to: String = ctx.parameter_cursor().get()?;

    let state = host.state_mut();
    let from = core::mem::replace(&mut state.base_uri, to.clone());

    // Event for the base URI change.
    logger.log(&CustomEvent::SetBaseUri(SetBaseUriEvent { from, to }))?;

    Ok(())
}

/// Transfer the entire CCD balance of the contract to the admin. Calling with
/// a zero balance is a no-op, not an error. Logs a `Withdraw` event when a
/// transfer takes place.
///
/// It rejects if:
/// - The sender is not the contract admin.
/// - The transfer fails.
/// - Fails to log an event.
#[receive(contract = "SequentialNFT", name = "withdraw", mutable, enable_logger)]
fn withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let admin = host.state().admin;
    ensure!(ctx.sender().matches_account(&admin), ContractError::Unauthorized);

    let balance = host.self_balance();
    if balance == Amount::zero() {
        return Ok(());
    }

    host.invoke_transfer(&admin, balance)?;

    // Event for the withdrawal.
    logger.log(&CustomEvent::Withdraw(WithdrawEvent {
        to: admin,
        amount: balance,
    }))?;

    Ok(())
}

/// Accept plain CCD transfers. The received amount becomes part of the
/// balance available to `withdraw`; no other state changes.
#[receive(contract = "SequentialNFT", name = "deposit", payable)]
fn deposit<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
    _amount: Amount,
) -> ContractResult<()> {
    Ok(())
}

/// Get the number of tokens held by an address. An address that owns no
/// tokens has a balance of 0.
#[receive(
    contract = "SequentialNFT",
    name = "balanceOf",
    parameter = "Address",
    return_value = "u64"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    // Parse the parameter.
    let owner: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().balance(&owner))
}

/// Get the owner of a given token ID.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token ID has not been minted.
#[receive(
    contract = "SequentialNFT",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().owner(&token_id)
}

/// Get the metadata URL of a given token ID, composed from the current base
/// URI and either the token's URI fragment or its decimal token ID.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token ID has not been minted.
#[receive(
    contract = "SequentialNFT",
    name = "tokenUri",
    parameter = "ContractTokenId",
    return_value = "String"
)]
fn token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().token_uri(&token_id)
}

/// View function that returns the collection metadata and mint parameters.
#[receive(contract = "SequentialNFT", name = "view", return_value = "ViewState")]
fn view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewState> {
    let state = host.state();
    Ok(ViewState {
        name: state.name.clone(),
        symbol: state.symbol.clone(),
        base_uri: state.base_uri.clone(),
        admin: state.admin,
        minted: state.counter,
        mint_price: MINT_PRICE,
    })
}

fn token_metadata_event(
    token_id: ContractTokenId,
    url: String,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl { url, hash: None },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([0u8; 32]);
    const ADMIN_ADDR: Address = Address::Account(ADMIN);
    const USER: AccountAddress = AccountAddress([1u8; 32]);
    const USER_ADDR: Address = Address::Account(USER);
    const USER_2: AccountAddress = AccountAddress([2u8; 32]);
    const USER_2_ADDR: Address = Address::Account(USER_2);

    const BASE_URI: &str = "https://my-domain.com/collection/metadata/";

    fn init_params() -> InitParams {
        InitParams {
            base_uri: String::from(BASE_URI),
            name: String::from("My collection"),
            symbol: String::from("MC"),
        }
    }

    /// Test helper function which creates a contract host administered by
    /// `ADMIN` with no tokens minted.
    fn new_host() -> TestHost<State<TestStateApi>> {
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(&mut state_builder, ADMIN, init_params());
        TestHost::new(state, state_builder)
    }

    fn receive_ctx<'a>(sender: Address) -> TestReceiveContext<'a> {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(sender);
        ctx
    }

    /// Mint a token to `USER` through the public mint at the exact price.
    fn public_mint(host: &mut TestHost<State<TestStateApi>>) -> ContractTokenId {
        let ctx = receive_ctx(USER_ADDR);
        let mut logger = TestLogger::init();
        host.set_self_balance(host.self_balance() + MINT_PRICE);
        mint(&ctx, host, MINT_PRICE, &mut logger).expect_report("Public mint failed")
    }

    /// Mint a token to `to` with URI fragment `uri` through the admin mint.
    fn admin_mint_token(
        host: &mut TestHost<State<TestStateApi>>,
        to: Address,
        uri: &str,
    ) -> ContractTokenId {
        let params = AdminMintParams {
            to,
            uri: String::from(uri),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADMIN_ADDR);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();
        admin_mint(&ctx, host, &mut logger).expect_report("Admin mint failed")
    }

    /// Test initialization succeeds and stores the construction arguments.
    #[concordium_test]
    fn test_init() {
        let params = init_params();
        let parameter_bytes = to_bytes(&params);
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ADMIN);
        ctx.set_parameter(&parameter_bytes);
        let mut state_builder = TestStateBuilder::new();

        // Call the contract function.
        let result = init(&ctx, &mut state_builder);

        // Check the state
        let state = result.expect_report("Contract initialization failed");
        claim_eq!(state.admin, ADMIN, "Deployer should become the admin");
        claim_eq!(state.counter, 0, "No token should be minted initially");
        claim_eq!(state.base_uri, BASE_URI);
        claim_eq!(state.name, "My collection");
        claim_eq!(state.symbol, "MC");
    }

    /// Test admin minting, ensuring the new tokens are owned by the given
    /// address, the balance tracks the mint count and the appropriate events
    /// are logged.
    #[concordium_test]
    fn test_admin_mint() {
        let mut host = new_host();

        let params = AdminMintParams {
            to: USER_ADDR,
            uri: String::from("link_to_token_json1"),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(ADMIN_ADDR);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        // Call the contract function.
        let result = admin_mint(&ctx, &mut host, &mut logger);

        // Check the result
        let token_id = result.expect_report("Results in rejection");
        claim_eq!(token_id, TokenIdU64(0), "First token ID should be 0");

        // Check the state
        claim_eq!(host.state().counter, 1);
        claim_eq!(host.state().balance(&USER_ADDR), 1);
        claim_eq!(
            host.state().owner(&token_id).expect_report("Token should exist"),
            USER_ADDR
        );

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                token_id,
                amount: ContractTokenAmount::from(1),
                owner: USER_ADDR,
            }))),
            "Expected an event for minting the token"
        );
        claim!(
            logger.logs.contains(&to_bytes(&token_metadata_event(
                token_id,
                String::from("https://my-domain.com/collection/metadata/link_to_token_json1.json"),
            ))),
            "Expected an event with the metadata URL of the token"
        );
    }

    /// Test that five admin mints to the same address result in a balance of
    /// five.
    #[concordium_test]
    fn test_admin_mint_balance() {
        let mut host = new_host();

        for i in 0..5u64 {
            let token_id = admin_mint_token(&mut host, USER_ADDR, "link_to_token_json");
            claim_eq!(token_id, TokenIdU64(i));
        }

        claim_eq!(host.state().balance(&USER_ADDR), 5);
        claim_eq!(host.state().balance(&USER_2_ADDR), 0);
    }

    /// Test admin mint fails when the sender is not the admin and leaves the
    /// state unchanged.
    #[concordium_test]
    fn test_admin_mint_unauthorized() {
        let mut host = new_host();

        let params = AdminMintParams {
            to: USER_ADDR,
            uri: String::from("link_to_token_json1"),
        };
        let parameter_bytes = to_bytes(&params);
        let mut ctx = receive_ctx(USER_ADDR);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        // Call the contract function.
        let result = admin_mint(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized, "Error is expected to be Unauthorized");

        // Check the state is unchanged.
        claim_eq!(host.state().counter, 0, "No token should be minted");
        claim_eq!(host.state().balance(&USER_ADDR), 0);
        claim_eq!(logger.logs.len(), 0, "No events should be logged");
    }

    /// Test public minting at the exact price, ensuring the sender becomes
    /// the owner and no refund transfer occurs.
    #[concordium_test]
    fn test_public_mint() {
        let mut host = new_host();

        let ctx = receive_ctx(USER_ADDR);
        let mut logger = TestLogger::init();
        host.set_self_balance(MINT_PRICE);

        // Call the contract function.
        let result = mint(&ctx, &mut host, MINT_PRICE, &mut logger);

        // Check the result
        let token_id = result.expect_report("Results in rejection");
        claim_eq!(token_id, TokenIdU64(0), "First token ID should be 0");

        // Check the state
        claim_eq!(host.state().balance(&USER_ADDR), 1);
        claim_eq!(
            host.state().owner(&token_id).expect_report("Token should exist"),
            USER_ADDR
        );

        // The full attached amount is retained.
        claim_eq!(host.get_transfers().len(), 0, "No refund should occur");
        claim_eq!(host.self_balance(), MINT_PRICE);

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                token_id,
                amount: ContractTokenAmount::from(1),
                owner: USER_ADDR,
            }))),
            "Expected an event for minting the token"
        );
    }

    /// Test public minting below the mint price fails with InvalidPrice and
    /// has no side effects.
    #[concordium_test]
    fn test_public_mint_invalid_price() {
        let mut host = new_host();

        let ctx = receive_ctx(USER_ADDR);
        let mut logger = TestLogger::init();
        let amount = MINT_PRICE - Amount::from_micro_ccd(1);
        host.set_self_balance(amount);

        // Call the contract function.
        let result = mint(&ctx, &mut host, amount, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InvalidPrice.into(),
            "Error is expected to be InvalidPrice"
        );

        // Check the state is unchanged.
        claim_eq!(host.state().counter, 0, "No token should be minted");
        claim_eq!(host.get_transfers().len(), 0, "No transfer should occur");
        claim_eq!(logger.logs.len(), 0, "No events should be logged");
    }

    /// Test public minting above the mint price refunds exactly the excess to
    /// the sender within the same invocation.
    #[concordium_test]
    fn test_public_mint_refund() {
        let mut host = new_host();

        let ctx = receive_ctx(USER_ADDR);
        let mut logger = TestLogger::init();
        let excess = Amount::from_ccd(2);
        let amount = MINT_PRICE + excess;
        host.set_self_balance(amount);

        // Call the contract function.
        let result = mint(&ctx, &mut host, amount, &mut logger);

        // Check the result
        let token_id = result.expect_report("Results in rejection");
        claim_eq!(token_id, TokenIdU64(0));

        // Exactly the mint price is retained, the rest is returned.
        claim!(host.transfer_occurred(&USER, excess), "Excess should be refunded");
        claim_eq!(host.self_balance(), MINT_PRICE);
        claim_eq!(host.state().balance(&USER_ADDR), 1);
    }

    /// Test public minting from a contract address fails.
    #[concordium_test]
    fn test_public_mint_contract_sender() {
        let mut host = new_host();

        let sender = Address::Contract(ContractAddress {
            index: 42,
            subindex: 0,
        });
        let ctx = receive_ctx(sender);
        let mut logger = TestLogger::init();
        host.set_self_balance(MINT_PRICE);

        // Call the contract function.
        let result = mint(&ctx, &mut host, MINT_PRICE, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::OnlyAccountAddress.into(),
            "Error is expected to be OnlyAccountAddress"
        );
        claim_eq!(host.state().counter, 0, "No token should be minted");
    }

    /// Test that token IDs are assigned sequentially with no gaps across
    /// interleaved admin and public mints.
    #[concordium_test]
    fn test_sequential_token_ids() {
        let mut host = new_host();

        let id_0 = public_mint(&mut host);
        let id_1 = admin_mint_token(&mut host, USER_2_ADDR, "foo");
        let id_2 = public_mint(&mut host);
        let id_3 = admin_mint_token(&mut host, USER_ADDR, "bar");

        claim_eq!(id_0, TokenIdU64(0));
        claim_eq!(id_1, TokenIdU64(1));
        claim_eq!(id_2, TokenIdU64(2));
        claim_eq!(id_3, TokenIdU64(3));

        claim_eq!(host.state().counter, 4);
        claim_eq!(host.state().balance(&USER_ADDR), 3);
        claim_eq!(host.state().balance(&USER_2_ADDR), 1);
    }

    /// Test URI resolution: public mints resolve through the decimal token
    /// ID, admin mints through their registered fragment, and replacing the
    /// base URI retargets both immediately.
    #[concordium_test]
    fn test_token_uri_resolution() {
        let mut host = new_host();

        let id_0 = public_mint(&mut host);
        let id_1 = admin_mint_token(&mut host, USER_ADDR, "foo");

        claim_eq!(
            host.state().token_uri(&id_0).expect_report("Token should exist"),
            String::from(BASE_URI) + "0.json"
        );
        claim_eq!(
            host.state().token_uri(&id_1).expect_report("Token should exist"),
            String::from(BASE_URI) + "foo.json"
        );

        // Change the base URI.
        let new_base_uri = String::from("https://new_domain_or_ipfs/");
        let parameter_bytes = to_bytes(&new_base_uri);
        let mut ctx = receive_ctx(ADMIN_ADDR);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        let result = set_base_uri(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        // Both tokens resolve against the new prefix.
        claim_eq!(
            host.state().token_uri(&id_0).expect_report("Token should exist"),
            String::from("https://new_domain_or_ipfs/0.json")
        );
        claim_eq!(
            host.state().token_uri(&id_1).expect_report("Token should exist"),
            String::from("https://new_domain_or_ipfs/foo.json")
        );

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&CustomEvent::SetBaseUri(SetBaseUriEvent {
                from: String::from(BASE_URI),
                to: new_base_uri,
            }))),
            "Expected an event for the base URI change"
        );
    }

    /// Test that an explicitly empty URI fragment is a valid override,
    /// resolving to the bare base URI with the suffix.
    #[concordium_test]
    fn test_token_uri_empty_fragment() {
        let mut host = new_host();

        let token_id = admin_mint_token(&mut host, USER_ADDR, "");

        claim_eq!(
            host.state().token_uri(&token_id).expect_report("Token should exist"),
            String::from(BASE_URI) + ".json"
        );
    }

    /// Test the tokenUri entrypoint rejects IDs that have not been minted.
    #[concordium_test]
    fn test_token_uri_nonexistent() {
        let mut host = new_host();
        public_mint(&mut host);

        let parameter_bytes = to_bytes(&TokenIdU64(1));
        let mut ctx = receive_ctx(USER_ADDR);
        ctx.set_parameter(&parameter_bytes);

        // Call the contract function.
        let result = token_uri(&ctx, &host);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test setBaseUri fails when the sender is not the admin and leaves the
    /// base URI unchanged.
    #[concordium_test]
    fn test_set_base_uri_unauthorized() {
        let mut host = new_host();

        let parameter_bytes = to_bytes(&String::from("https://new_domain_or_ipfs/"));
        let mut ctx = receive_ctx(USER_ADDR);
        ctx.set_parameter(&parameter_bytes);
        let mut logger = TestLogger::init();

        // Call the contract function.
        let result = set_base_uri(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized, "Error is expected to be Unauthorized");
        claim_eq!(host.state().base_uri, BASE_URI, "Base URI should be unchanged");
    }

    /// Test the balanceOf entrypoint, including an address that owns nothing.
    #[concordium_test]
    fn test_balance_of() {
        let mut host = new_host();
        public_mint(&mut host);

        let parameter_bytes = to_bytes(&USER_ADDR);
        let mut ctx = receive_ctx(USER_ADDR);
        ctx.set_parameter(&parameter_bytes);

        let balance = balance_of(&ctx, &host).expect_report("Query failed");
        claim_eq!(balance, 1);

        let parameter_bytes = to_bytes(&USER_2_ADDR);
        let mut ctx = receive_ctx(USER_ADDR);
        ctx.set_parameter(&parameter_bytes);

        let balance = balance_of(&ctx, &host).expect_report("Query failed");
        claim_eq!(balance, 0, "Unknown owners have a balance of 0");
    }

    /// Test the ownerOf entrypoint, including the rejection of unminted IDs.
    #[concordium_test]
    fn test_owner_of() {
        let mut host = new_host();
        let token_id = public_mint(&mut host);

        let parameter_bytes = to_bytes(&token_id);
        let mut ctx = receive_ctx(USER_ADDR);
        ctx.set_parameter(&parameter_bytes);

        let owner = owner_of(&ctx, &host).expect_report("Query failed");
        claim_eq!(owner, USER_ADDR);

        let parameter_bytes = to_bytes(&TokenIdU64(7));
        let mut ctx = receive_ctx(USER_ADDR);
        ctx.set_parameter(&parameter_bytes);

        let err = owner_of(&ctx, &host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);
    }

    /// Test withdrawing moves the entire contract balance to the admin and
    /// that an immediate second call is a no-op.
    #[concordium_test]
    fn test_withdraw() {
        let mut host = new_host();

        // Proceeds from a mint plus a donation through `deposit`.
        public_mint(&mut host);
        let donation = Amount::from_ccd(3);
        host.set_self_balance(host.self_balance() + donation);

        let ctx = receive_ctx(ADMIN_ADDR);
        let mut logger = TestLogger::init();

        // Call the contract function.
        let result = withdraw(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        // The full balance moves to the admin.
        claim!(
            host.transfer_occurred(&ADMIN, MINT_PRICE + donation),
            "Full balance should be transferred to the admin"
        );
        claim_eq!(host.self_balance(), Amount::zero());

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&CustomEvent::Withdraw(WithdrawEvent {
                to: ADMIN,
                amount: MINT_PRICE + donation,
            }))),
            "Expected an event for the withdrawal"
        );

        // A second call with nothing left is a no-op.
        let result = withdraw(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Withdrawing a zero balance should succeed");
        claim_eq!(host.get_transfers().len(), 1, "No further transfer should occur");
    }

    /// Test withdraw fails when the sender is not the admin.
    #[concordium_test]
    fn test_withdraw_unauthorized() {
        let mut host = new_host();
        host.set_self_balance(Amount::from_ccd(1));

        let ctx = receive_ctx(USER_ADDR);
        let mut logger = TestLogger::init();

        // Call the contract function.
        let result = withdraw(&ctx, &mut host, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized, "Error is expected to be Unauthorized");
        claim_eq!(host.get_transfers().len(), 0, "No transfer should occur");
    }

    /// Test a public mint whose refund cannot be completed rejects without
    /// allocating a token.
    #[concordium_test]
    fn test_public_mint_failed_refund() {
        let mut host = new_host();

        let ctx = receive_ctx(USER_ADDR);
        let mut logger = TestLogger::init();
        let amount = MINT_PRICE + Amount::from_ccd(2);
        // The host balance is below the refund amount, so the transfer fails.
        host.set_self_balance(Amount::from_ccd(1));

        // Call the contract function.
        let result = mint(&ctx, &mut host, amount, &mut logger);

        // Check the result.
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InvokeTransferError.into(),
            "Error is expected to be InvokeTransferError"
        );
        claim_eq!(host.state().counter, 0, "No token should be minted");
    }

    /// Test the deposit entrypoint accepts CCD with no state change.
    #[concordium_test]
    fn test_deposit() {
        let mut host = new_host();
        let ctx = receive_ctx(USER_ADDR);

        let result = deposit(&ctx, &host, Amount::from_ccd(5));
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(host.state().counter, 0, "No state change expected");
    }

    /// Test the view entrypoint.
    #[concordium_test]
    fn test_view() {
        let mut host = new_host();
        public_mint(&mut host);

        let ctx = receive_ctx(USER_ADDR);
        let result = view(&ctx, &host).expect_report("Query failed");

        claim_eq!(
            result,
            ViewState {
                name: String::from("My collection"),
                symbol: String::from("MC"),
                base_uri: String::from(BASE_URI),
                admin: ADMIN,
                minted: 1,
                mint_price: MINT_PRICE,
            }
        );
    }
}
