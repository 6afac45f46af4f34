use andromeda_web4::{
    error::ContractError,
    gateway::{ExecuteMsg, ACCOUNT_ID_FIELD, URL_FIELD},
    json::extract_string_field,
    ExecuteContext,
};
use cosmwasm_std::{Binary, Response};
use cw_utils::nonpayable;

use crate::{auth::assert_authorized, state};

pub fn handle_execute(ctx: ExecuteContext, msg: ExecuteMsg) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Web4SetStaticUrl { request } => set_static_url(ctx, request),
        ExecuteMsg::Web4SetOwner { request } => set_owner(ctx, request),
    }
}

pub fn set_static_url(ctx: ExecuteContext, request: Binary) -> Result<Response, ContractError> {
    nonpayable(&ctx.info)?;
    let access = assert_authorized(&ctx)?;

    let url = extract_string_field(request.as_slice(), URL_FIELD, "")?;
    state::set_static_url(ctx.deps.storage, &url)?;

    Ok(Response::new()
        .add_attribute("method", "web4_set_static_url")
        .add_attribute("sender", ctx.info.sender)
        .add_attributes(access)
        .add_attribute("static_url", url))
}

pub fn set_owner(ctx: ExecuteContext, request: Binary) -> Result<Response, ContractError> {
    nonpayable(&ctx.info)?;
    let access = assert_authorized(&ctx)?;

    let account_id = extract_string_field(request.as_slice(), ACCOUNT_ID_FIELD, "")?;
    state::set_owner(ctx.deps.storage, &account_id)?;

    Ok(Response::new()
        .add_attribute("method", "web4_set_owner")
        .add_attribute("sender", ctx.info.sender)
        .add_attributes(access)
        .add_attribute("owner", account_id))
}
