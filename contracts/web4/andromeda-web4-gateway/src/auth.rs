use andromeda_web4::{error::ContractError, ExecuteContext};
use cosmwasm_std::{attr, ensure, Attribute};

use crate::state::get_owner;

/// The signer may mutate configuration when it is the contract itself or the
/// owner.
pub(crate) fn is_authorized(
    current_account_id: &str,
    signer_account_id: &str,
    owner_id: &str,
) -> bool {
    signer_account_id == current_account_id || signer_account_id == owner_id
}

/// An unset owner falls back to the contract; a stored empty owner does not.
pub(crate) fn resolve_owner<'a>(
    owner: Option<&'a str>,
    current_account_id: &'a str,
) -> &'a str {
    owner.unwrap_or(current_account_id)
}

/// Fails with [`ContractError::AccessDenied`] unless the signer of `ctx` may
/// mutate configuration. Runs before any write.
pub fn assert_authorized(ctx: &ExecuteContext) -> Result<Vec<Attribute>, ContractError> {
    let deps = ctx.deps.as_ref();
    let current_account_id = ctx.current_account_id();
    let signer_account_id = ctx.signer_account_id();
    let owner = get_owner(deps.storage)?;
    let owner_id = resolve_owner(owner.as_deref(), current_account_id);

    deps.api.debug(&format!(
        "current_account_id: {current_account_id} signer_account_id: {signer_account_id} owner: {owner_id}"
    ));
    ensure!(
        is_authorized(current_account_id, signer_account_id, owner_id),
        ContractError::AccessDenied {}
    );
    deps.api.debug("Access allowed");

    Ok(vec![
        attr("current_account_id", current_account_id),
        attr("signer_account_id", signer_account_id),
        attr("owner_account_id", owner_id),
    ])
}
