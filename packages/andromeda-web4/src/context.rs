use cosmwasm_std::{DepsMut, Env, MessageInfo};

/// Everything a single execute invocation may touch. Built once per call and
/// dropped when the call returns.
pub struct ExecuteContext<'a> {
    pub deps: DepsMut<'a>,
    pub info: MessageInfo,
    pub env: Env,
}

impl<'a> ExecuteContext<'a> {
    #[inline]
    pub fn new(deps: DepsMut, info: MessageInfo, env: Env) -> ExecuteContext {
        ExecuteContext { deps, info, env }
    }

    /// The contract's own identity.
    pub fn current_account_id(&self) -> &str {
        self.env.contract.address.as_str()
    }

    /// The identity that authorised this call.
    pub fn signer_account_id(&self) -> &str {
        self.info.sender.as_str()
    }
}
