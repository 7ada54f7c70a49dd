use super::*;

/// An untagged event of the base URI being replaced.
#[derive(Debug, Serialize, SchemaType)]
pub struct SetBaseUriEvent {
    /// Previous base URI.
    pub from: String,
    /// New base URI.
    pub to: String,
}

/// An untagged event of the contract balance being withdrawn.
#[derive(Debug, Serialize, SchemaType)]
pub struct WithdrawEvent {
    /// Receiving account, always the contract admin.
    pub to: AccountAddress,
    /// Amount withdrawn.
    pub amount: Amount,
}

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum CustomEvent {
    /// Replacing the base URI.
    SetBaseUri(SetBaseUriEvent),
    /// Withdrawing the contract balance.
    Withdraw(WithdrawEvent),
}

impl Serial for CustomEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            CustomEvent::SetBaseUri(event) => {
                out.write_u8(SET_BASE_URI_TAG)?;
                event.serial(out)
            }
            CustomEvent::Withdraw(event) => {
                out.write_u8(WITHDRAW_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for CustomEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let tag = source.read_u8()?;
        match tag {
            SET_BASE_URI_TAG => SetBaseUriEvent::deserial(source).map(CustomEvent::SetBaseUri),
            WITHDRAW_TAG => WithdrawEvent::deserial(source).map(CustomEvent::Withdraw),
            _ => Err(ParseError::default()),
        }
    }
}
