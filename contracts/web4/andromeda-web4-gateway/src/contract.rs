#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{ensure, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::{get_contract_version, set_contract_version};

use andromeda_web4::{
    error::{from_semver, ContractError},
    gateway::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    ExecuteContext,
};
use semver::Version;

use crate::{
    execute::handle_execute,
    query::{owner, static_url, web4_get},
    state::set_owner,
};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:andromeda-web4-gateway";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mut response = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("type", "web4-gateway")
        .add_attribute("sender", info.sender);
    // Without an owner only the contract itself can reconfigure the gateway.
    if let Some(account_id) = msg.owner {
        set_owner(deps.storage, &account_id)?;
        response = response.add_attribute("owner", account_id);
    }
    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let ctx = ExecuteContext::new(deps, info, env);
    handle_execute(ctx, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Web4Get { request } => Ok(web4_get(deps, &request)?.to_raw_json()),
        QueryMsg::StaticUrl {} => Ok(to_json_binary(&static_url(deps)?)?),
        QueryMsg::Owner {} => Ok(to_json_binary(&owner(deps)?)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // New version
    let version: Version = CONTRACT_VERSION.parse().map_err(from_semver)?;

    // Old version
    let stored = get_contract_version(deps.storage)?;
    let storage_version: Version = stored.version.parse().map_err(from_semver)?;

    ensure!(
        stored.contract == CONTRACT_NAME,
        ContractError::CannotMigrate {
            previous_contract: stored.contract,
        }
    );

    // New version has to be newer/greater than the old version
    ensure!(
        storage_version < version,
        ContractError::CannotMigrate {
            previous_contract: stored.version,
        }
    );

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::default()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
