use andromeda_web4::{
    error::ContractError,
    gateway::{OwnerResponse, StaticUrlResponse, Web4Response, DEFAULT_PATH, PATH_FIELD},
    json::extract_string_field,
};
use cosmwasm_std::{Binary, Deps};

use crate::state::{get_owner, get_static_url};

pub fn web4_get(deps: Deps, request: &Binary) -> Result<Web4Response, ContractError> {
    let path = extract_string_field(request.as_slice(), PATH_FIELD, DEFAULT_PATH)?;
    deps.api.debug(&format!("path: {path}"));

    let static_url = get_static_url(deps.storage)?;
    Ok(Web4Response::redirect(&static_url, &path))
}

pub fn static_url(deps: Deps) -> Result<StaticUrlResponse, ContractError> {
    Ok(StaticUrlResponse {
        static_url: get_static_url(deps.storage)?,
    })
}

pub fn owner(deps: Deps) -> Result<OwnerResponse, ContractError> {
    Ok(OwnerResponse {
        owner: get_owner(deps.storage)?,
    })
}
