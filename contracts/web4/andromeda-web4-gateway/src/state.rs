use andromeda_web4::gateway::DEFAULT_STATIC_URL;
use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Item;

pub const STATIC_URL: Item<String> = Item::new("web4:staticUrl");
/// When unset the contract's own address acts as owner.
pub const OWNER: Item<String> = Item::new("web4:owner");

pub fn get_static_url(storage: &dyn Storage) -> StdResult<String> {
    Ok(STATIC_URL
        .may_load(storage)?
        .unwrap_or_else(|| DEFAULT_STATIC_URL.to_string()))
}

pub fn set_static_url(storage: &mut dyn Storage, url: &str) -> StdResult<()> {
    STATIC_URL.save(storage, &url.to_string())
}

pub fn get_owner(storage: &dyn Storage) -> StdResult<Option<String>> {
    OWNER.may_load(storage)
}

pub fn set_owner(storage: &mut dyn Storage, account_id: &str) -> StdResult<()> {
    OWNER.save(storage, &account_id.to_string())
}
