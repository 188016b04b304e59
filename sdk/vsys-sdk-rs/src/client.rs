//! HTTP client for a VSYS node's REST API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use vsys_types::tx::{
    DbPutPayload, ExecCtrtPayload, LeaseCancelPayload, LeasePayload, PaymentPayload,
    RegCtrtPayload,
};
use vsys_types::{Addr, CtrtId, DataStack};

use crate::errors::{Result, SdkError};

/// `GET /blocks/height` response.
#[derive(Debug, Deserialize)]
struct HeightResp {
    height: u64,
}

/// `GET /addresses/balance/{addr}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResp {
    pub address: String,
    pub confirmations: u64,
    pub balance: u64,
}

/// `GET /contract/data/{ctrtId}/{key}` response. `value` is the base58
/// form of a serialized data entry; feed it to [`decode_data_stack`] after
/// prepending a count, or decode it with the contract's own schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtrtDataResp {
    pub contract_id: String,
    pub key: String,
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(default)]
    pub data_type: Option<String>,
    pub value: serde_json::Value,
}

/// Decode a base58 string into a data-entry stack.
pub fn decode_data_stack(b58: &str) -> Result<DataStack> {
    let bytes = bs58::decode(b58)
        .into_vec()
        .map_err(|e| SdkError::Serialization(e.to_string()))?;
    Ok(DataStack::deserialize(&bytes)?)
}

/// VSYS node REST client.
#[derive(Debug, Clone)]
pub struct NodeClient {
    http: reqwest::Client,
    host: String,
}

impl NodeClient {
    /// Create a client for the node at `host` (e.g. `http://veldidina.vos.systems:9928`).
    ///
    /// Fails if the underlying HTTP client cannot be constructed; falling
    /// back to a default client would drop the request timeout.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            host: host.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Current chain height.
    pub async fn height(&self) -> Result<u64> {
        let resp: HeightResp = self.get("/blocks/height").await?;
        Ok(resp.height)
    }

    /// VSYS balance of an address, in raw units.
    pub async fn balance(&self, addr: &Addr) -> Result<BalanceResp> {
        self.get(&format!("/addresses/balance/{}", addr)).await
    }

    /// Stored contract data under `db_key`.
    pub async fn contract_data(&self, ctrt_id: &CtrtId, db_key: &str) -> Result<CtrtDataResp> {
        self.get(&format!("/contract/data/{}/{}", ctrt_id, db_key)).await
    }

    /// Submit a signed payment.
    pub async fn broadcast_payment(&self, payload: &PaymentPayload) -> Result<serde_json::Value> {
        self.post("/vsys/broadcast/payment", payload).await
    }

    /// Submit a signed lease.
    pub async fn broadcast_lease(&self, payload: &LeasePayload) -> Result<serde_json::Value> {
        self.post("/leasing/broadcast/lease", payload).await
    }

    /// Submit a signed lease cancellation.
    pub async fn broadcast_lease_cancel(
        &self,
        payload: &LeaseCancelPayload,
    ) -> Result<serde_json::Value> {
        self.post("/leasing/broadcast/cancel", payload).await
    }

    /// Submit a signed contract registration.
    pub async fn broadcast_reg_ctrt(&self, payload: &RegCtrtPayload) -> Result<serde_json::Value> {
        self.post("/contract/broadcast/register", payload).await
    }

    /// Submit a signed contract execution.
    pub async fn broadcast_exec_ctrt(
        &self,
        payload: &ExecCtrtPayload,
    ) -> Result<serde_json::Value> {
        self.post("/contract/broadcast/execute", payload).await
    }

    /// Submit a signed database put.
    pub async fn broadcast_db_put(&self, payload: &DbPutPayload) -> Result<serde_json::Value> {
        self.post("/database/broadcast/put", payload).await
    }

    /// Poll until the chain reaches `target` height.
    pub async fn wait_for_height(&self, target: u64, timeout: Duration) -> Result<u64> {
        let start = std::time::Instant::now();

        loop {
            let height = self.height().await?;
            if height >= target {
                return Ok(height);
            }

            if start.elapsed() > timeout {
                return Err(SdkError::Connection(format!(
                    "timed out waiting for height {}",
                    target
                )));
            }

            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.http.get(format!("{}{}", self.host, path)).send().await?;
        Self::parse(resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let resp = self
            .http
            .post(format!("{}{}", self.host, path))
            .json(body)
            .send()
            .await?;
        Self::parse(resp).await
    }

    async fn parse<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SdkError::Node {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body)
            .map_err(|e| SdkError::Serialization(format!("bad node response: {}", e)))
    }
}
