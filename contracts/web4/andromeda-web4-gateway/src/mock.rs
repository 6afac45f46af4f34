#![cfg(all(not(target_arch = "wasm32"), feature = "testing"))]
use crate::contract::{execute, instantiate, migrate, query};
use andromeda_web4::gateway::{
    ExecuteMsg, InstantiateMsg, OwnerResponse, QueryMsg, StaticUrlResponse, Web4Response,
};
use anyhow::Result as AnyResult;
use cosmwasm_std::{Addr, Binary, Empty};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

pub type ExecuteResult = AnyResult<AppResponse>;

pub struct MockWeb4Gateway(Addr);

impl MockWeb4Gateway {
    pub fn instantiate(
        code_id: u64,
        sender: Addr,
        app: &mut App,
        owner: Option<String>,
    ) -> MockWeb4Gateway {
        let addr = app
            .instantiate_contract(
                code_id,
                sender.clone(),
                &mock_web4_gateway_instantiate_msg(owner),
                &[],
                "Web4 Gateway Contract",
                Some(sender.to_string()),
            )
            .unwrap();
        MockWeb4Gateway(addr)
    }

    pub fn addr(&self) -> &Addr {
        &self.0
    }

    pub fn execute_set_static_url(
        &self,
        app: &mut App,
        sender: Addr,
        request: &str,
    ) -> ExecuteResult {
        let msg = mock_web4_set_static_url_msg(request);
        app.execute_contract(sender, self.0.clone(), &msg, &[])
    }

    pub fn execute_set_owner(&self, app: &mut App, sender: Addr, request: &str) -> ExecuteResult {
        let msg = mock_web4_set_owner_msg(request);
        app.execute_contract(sender, self.0.clone(), &msg, &[])
    }

    pub fn query_web4_get(&self, app: &App, request: &str) -> Web4Response {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &mock_web4_get_msg(request))
            .unwrap()
    }

    pub fn query_static_url(&self, app: &App) -> StaticUrlResponse {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::StaticUrl {})
            .unwrap()
    }

    pub fn query_owner(&self, app: &App) -> OwnerResponse {
        app.wrap()
            .query_wasm_smart(self.0.clone(), &QueryMsg::Owner {})
            .unwrap()
    }
}

pub fn mock_andromeda_web4_gateway() -> Box<dyn Contract<Empty>> {
    let contract =
        ContractWrapper::new_with_empty(execute, instantiate, query).with_migrate(migrate);
    Box::new(contract)
}

pub fn mock_web4_gateway_instantiate_msg(owner: Option<String>) -> InstantiateMsg {
    InstantiateMsg { owner }
}

/// `request` is the raw JSON argument object, e.g. `{"url":"ipfs://..."}`.
pub fn mock_web4_set_static_url_msg(request: &str) -> ExecuteMsg {
    ExecuteMsg::Web4SetStaticUrl {
        request: Binary::from(request.as_bytes()),
    }
}

/// `request` is the raw JSON argument object, e.g. `{"accountId":"..."}`.
pub fn mock_web4_set_owner_msg(request: &str) -> ExecuteMsg {
    ExecuteMsg::Web4SetOwner {
        request: Binary::from(request.as_bytes()),
    }
}

pub fn mock_web4_get_msg(request: &str) -> QueryMsg {
    QueryMsg::Web4Get {
        request: Binary::from(request.as_bytes()),
    }
}
