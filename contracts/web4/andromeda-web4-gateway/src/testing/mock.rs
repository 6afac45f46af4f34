use andromeda_web4::{
    error::ContractError,
    gateway::{ExecuteMsg, InstantiateMsg, OwnerResponse, QueryMsg, StaticUrlResponse},
};
use cosmwasm_std::{
    from_json,
    testing::{message_info, mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage},
    Addr, Binary, Deps, DepsMut, OwnedDeps, Response,
};

use crate::contract::{execute, instantiate, query};

pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

pub fn proper_initialization(owner: Option<&str>) -> MockDeps {
    let mut deps = mock_dependencies();
    let creator = deps.api.addr_make("creator");
    let info = message_info(&creator, &[]);
    let msg = InstantiateMsg {
        owner: owner.map(str::to_string),
    };
    instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
    deps
}

/// The address the contract runs under in `mock_env`.
pub fn contract_address() -> Addr {
    mock_env().contract.address
}

/// Raw bytes returned by a `web4_get` query.
pub fn web4_get(deps: Deps, request: &str) -> Result<Binary, ContractError> {
    let msg = QueryMsg::Web4Get {
        request: Binary::from(request.as_bytes()),
    };
    query(deps, mock_env(), msg)
}

pub fn query_static_url(deps: Deps) -> String {
    let res = query(deps, mock_env(), QueryMsg::StaticUrl {}).unwrap();
    from_json::<StaticUrlResponse>(&res).unwrap().static_url
}

pub fn query_owner(deps: Deps) -> Option<String> {
    let res = query(deps, mock_env(), QueryMsg::Owner {}).unwrap();
    from_json::<OwnerResponse>(&res).unwrap().owner
}

pub fn set_static_url(
    deps: DepsMut<'_>,
    request: &str,
    sender: &Addr,
) -> Result<Response, ContractError> {
    let msg = ExecuteMsg::Web4SetStaticUrl {
        request: Binary::from(request.as_bytes()),
    };
    execute(deps, mock_env(), message_info(sender, &[]), msg)
}

pub fn set_owner(deps: DepsMut<'_>, request: &str, sender: &Addr) -> Result<Response, ContractError> {
    let msg = ExecuteMsg::Web4SetOwner {
        request: Binary::from(request.as_bytes()),
    };
    execute(deps, mock_env(), message_info(sender, &[]), msg)
}
