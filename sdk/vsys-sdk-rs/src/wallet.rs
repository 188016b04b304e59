//! Seed phrases and chain-bound signing accounts.

use vsys_crypto::KeyPair;
use vsys_types::hash::{hash_chain, sha256};
use vsys_types::{
    Addr, ChainId, DbPutTxReq, ExecCtrtTxReq, LeaseCancelTxReq, LeaseTxReq, PaymentTxReq,
    PriKey, PubKey, RegCtrtTxReq,
};
use vsys_types::tx::{
    DbPutPayload, ExecCtrtPayload, LeaseCancelPayload, LeasePayload, PaymentPayload,
    RegCtrtPayload,
};

use crate::client::NodeClient;
use crate::errors::{Result, SdkError};

/// Word-based wallet seed. One seed derives any number of accounts, indexed
/// by nonce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    phrase: String,
}

impl Seed {
    /// Validates the phrase: non-empty, ASCII only.
    pub fn new(phrase: impl Into<String>) -> Result<Self> {
        let phrase = phrase.into();
        if phrase.is_empty() || !phrase.is_ascii() {
            return Err(SdkError::Wallet("malformed word-based seed".to_string()));
        }
        Ok(Self { phrase })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Derive the keypair for account `nonce`: the curve seed is
    /// `sha256(keccak256(blake2b256("{nonce}{phrase}")))`.
    pub fn key_pair(&self, nonce: u32) -> KeyPair {
        let acc_seed = format!("{}{}", nonce, self.phrase);
        KeyPair::from_seed(sha256(&hash_chain(acc_seed.as_bytes())))
    }

    /// Account `nonce` on the given chain.
    pub fn account(&self, chain: ChainId, nonce: u32) -> Account {
        Account::new(chain, self.key_pair(nonce))
    }
}

/// A keypair bound to a chain. Signs transaction requests and submits them
/// through a [`NodeClient`].
#[derive(Clone, Debug)]
pub struct Account {
    chain: ChainId,
    key: KeyPair,
}

impl Account {
    pub fn new(chain: ChainId, key: KeyPair) -> Self {
        Self { chain, key }
    }

    pub fn from_pri_key(chain: ChainId, pri_key: &PriKey) -> Self {
        Self::new(chain, KeyPair::from_seed(*pri_key.as_bytes()))
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain
    }

    pub fn pub_key(&self) -> PubKey {
        self.key.pub_key()
    }

    pub fn pri_key(&self) -> PriKey {
        self.key.pri_key()
    }

    pub fn addr(&self) -> Addr {
        Addr::from_public_key(self.chain, &self.key.pub_key())
    }

    /// Sign a payment request. The recipient must live on this account's
    /// chain.
    pub fn sign_payment(&self, req: &PaymentTxReq) -> Result<PaymentPayload> {
        req.recipient.must_on(self.chain)?;
        let sig = self.key.sign(&req.data_to_sign()?);
        Ok(req.broadcast_payload(&self.key.pub_key(), &sig))
    }

    /// Sign a leasing request. The supernode must live on this account's
    /// chain.
    pub fn sign_lease(&self, req: &LeaseTxReq) -> Result<LeasePayload> {
        req.supernode_addr.must_on(self.chain)?;
        let sig = self.key.sign(&req.data_to_sign()?);
        Ok(req.broadcast_payload(&self.key.pub_key(), &sig))
    }

    pub fn sign_lease_cancel(&self, req: &LeaseCancelTxReq) -> Result<LeaseCancelPayload> {
        let sig = self.key.sign(&req.data_to_sign()?);
        Ok(req.broadcast_payload(&self.key.pub_key(), &sig))
    }

    pub fn sign_reg_ctrt(&self, req: &RegCtrtTxReq) -> Result<RegCtrtPayload> {
        let sig = self.key.sign(&req.data_to_sign()?);
        Ok(req.broadcast_payload(&self.key.pub_key(), &sig)?)
    }

    pub fn sign_exec_ctrt(&self, req: &ExecCtrtTxReq) -> Result<ExecCtrtPayload> {
        let sig = self.key.sign(&req.data_to_sign()?);
        Ok(req.broadcast_payload(&self.key.pub_key(), &sig)?)
    }

    pub fn sign_db_put(&self, req: &DbPutTxReq) -> Result<DbPutPayload> {
        let sig = self.key.sign(&req.data_to_sign()?);
        Ok(req.broadcast_payload(&self.key.pub_key(), &sig))
    }

    /// Sign and broadcast a payment.
    pub async fn pay(&self, client: &NodeClient, req: &PaymentTxReq) -> Result<serde_json::Value> {
        client.broadcast_payment(&self.sign_payment(req)?).await
    }

    /// Sign and broadcast a lease to a supernode.
    pub async fn lease(&self, client: &NodeClient, req: &LeaseTxReq) -> Result<serde_json::Value> {
        client.broadcast_lease(&self.sign_lease(req)?).await
    }

    /// Sign and broadcast a lease cancellation.
    pub async fn cancel_lease(
        &self,
        client: &NodeClient,
        req: &LeaseCancelTxReq,
    ) -> Result<serde_json::Value> {
        client.broadcast_lease_cancel(&self.sign_lease_cancel(req)?).await
    }

    /// Sign and broadcast a contract registration.
    pub async fn register_contract(
        &self,
        client: &NodeClient,
        req: &RegCtrtTxReq,
    ) -> Result<serde_json::Value> {
        client.broadcast_reg_ctrt(&self.sign_reg_ctrt(req)?).await
    }

    /// Sign and broadcast a contract function call.
    pub async fn execute_contract(
        &self,
        client: &NodeClient,
        req: &ExecCtrtTxReq,
    ) -> Result<serde_json::Value> {
        client.broadcast_exec_ctrt(&self.sign_exec_ctrt(req)?).await
    }

    /// Sign and broadcast a database put.
    pub async fn db_put(&self, client: &NodeClient, req: &DbPutTxReq) -> Result<serde_json::Value> {
        client.broadcast_db_put(&self.sign_db_put(req)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsys_crypto::verify;
    use vsys_types::{ModelError, PaymentFee, Str, Vsys, VsysTimestamp};

    const PHRASE: &str =
        "vivid boring brief cheap black rough follow soul rare mixed hire hotel rude kit sort";

    #[test]
    fn test_seed_rejects_malformed_phrases() {
        assert!(Seed::new("").is_err());
        assert!(Seed::new("caf\u{e9} au lait").is_err());
        assert!(Seed::new(PHRASE).is_ok());
    }

    #[test]
    fn test_key_derivation_is_deterministic_per_nonce() {
        let seed = Seed::new(PHRASE).unwrap();
        assert_eq!(seed.key_pair(0).public_key(), seed.key_pair(0).public_key());
        assert_ne!(seed.key_pair(0).public_key(), seed.key_pair(1).public_key());
    }

    #[test]
    fn test_account_addr_lives_on_its_chain() {
        let seed = Seed::new(PHRASE).unwrap();
        let acnt = seed.account(ChainId::Testnet, 0);
        assert_eq!(acnt.addr().chain_id(), ChainId::Testnet);

        let mainnet = seed.account(ChainId::Mainnet, 0);
        assert_eq!(mainnet.pub_key(), acnt.pub_key());
        assert_ne!(mainnet.addr(), acnt.addr());
    }

    fn payment_to(recipient: Addr) -> PaymentTxReq {
        PaymentTxReq {
            recipient,
            amount: Vsys::from_raw(1_000_000_000),
            timestamp: VsysTimestamp::from_unix_ms(1_654_043_244_000).unwrap(),
            attachment: Str::new("").unwrap(),
            fee: PaymentFee::default(),
        }
    }

    #[test]
    fn test_sign_payment_rejects_cross_chain_recipient() {
        let seed = Seed::new(PHRASE).unwrap();
        let acnt = seed.account(ChainId::Testnet, 0);
        let mainnet_recipient =
            Addr::from_public_key(ChainId::Mainnet, &PubKey::from_bytes([9u8; 32]));

        let err = acnt.sign_payment(&payment_to(mainnet_recipient)).unwrap_err();
        assert!(matches!(
            err,
            SdkError::Model(ModelError::WrongChain { .. })
        ));
    }

    #[test]
    fn test_sign_payment_signature_verifies() {
        let seed = Seed::new(PHRASE).unwrap();
        let acnt = seed.account(ChainId::Testnet, 0);
        let recipient = Addr::from_public_key(ChainId::Testnet, &PubKey::from_bytes([9u8; 32]));
        let req = payment_to(recipient);

        let payload = acnt.sign_payment(&req).unwrap();
        let sig_bytes = bs58::decode(&payload.signature).into_vec().unwrap();
        let sig: [u8; 64] = sig_bytes.try_into().unwrap();
        let key = *acnt.pub_key().as_bytes();
        assert!(verify(&key, &req.data_to_sign().unwrap(), &sig).unwrap());
        assert_eq!(payload.sender_public_key, acnt.pub_key().to_string());
    }
}
