use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Binary;

/// Locator served when no static url has been configured.
pub const DEFAULT_STATIC_URL: &str =
    "ipfs://bafybeidc4lvv4bld66h4rmy2jvgjdrgul5ub5s75vbqrcbjd3jeaqnyd5e";

/// Path served when the request does not name one.
pub const DEFAULT_PATH: &str = "/";

/// Request fields read by the gateway.
pub const PATH_FIELD: &str = "path";
pub const URL_FIELD: &str = "url";
pub const ACCOUNT_ID_FIELD: &str = "accountId";

#[cw_serde]
pub struct InstantiateMsg {
    /// Account allowed to reconfigure the gateway besides the contract itself.
    /// Stored verbatim; when omitted no owner is recorded.
    pub owner: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// `request` is a JSON object; its `url` field replaces the static url.
    /// Only the contract itself or the configured owner may call this.
    Web4SetStaticUrl { request: Binary },
    /// `request` is a JSON object; its `accountId` field replaces the owner.
    /// Only the contract itself or the configured owner may call this.
    Web4SetOwner { request: Binary },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// `request` is a JSON object with an optional `path` field.
    /// The returned bytes are a serialized [`Web4Response`].
    #[returns(Web4Response)]
    Web4Get { request: Binary },
    #[returns(StaticUrlResponse)]
    StaticUrl {},
    #[returns(OwnerResponse)]
    Owner {},
}

#[cw_serde]
pub struct Web4Response {
    pub status: u16,
    #[serde(rename = "bodyUrl")]
    pub body_url: String,
}

impl Web4Response {
    /// A `200` response pointing at `path` under `static_url`. The two are
    /// joined verbatim, so `static_url` carries no trailing `/` and `path`
    /// starts with one.
    pub fn redirect(static_url: &str, path: &str) -> Self {
        Self {
            status: 200,
            body_url: format!("{static_url}{path}"),
        }
    }

    /// Wire form of the response. `body_url` is quoted as-is without JSON
    /// escaping, so the locator and path must not contain `"` or `\`.
    pub fn to_raw_json(&self) -> Binary {
        Binary::from(
            format!(
                r#"{{"status":{},"bodyUrl":"{}"}}"#,
                self.status, self.body_url
            )
            .into_bytes(),
        )
    }
}

#[cw_serde]
pub struct StaticUrlResponse {
    pub static_url: String,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Option<String>,
}
