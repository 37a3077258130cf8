use std::sync::Arc;

use anyhow::Result;
use ethers::{
    contract::ContractFactory,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::H160,
    utils::hex,
};

use crate::artifacts;

pub struct Deploy {
    client: Arc<SignerMiddleware<Provider<Http>, LocalWallet>>,
}

impl Deploy {
    pub async fn new(rpc: &str, sk: &str) -> Result<Self> {
        let wallet = parse_wallet(sk)?;
        let provider = Provider::<Http>::try_from(rpc)?;

        let chain_id = provider.get_chainid().await?.as_u64();
        log::info!("connected to chain id:{}", chain_id);

        let client = Arc::new(SignerMiddleware::new(
            provider,
            wallet.with_chain_id(chain_id),
        ));

        Ok(Self { client })
    }

    pub async fn run(&self) -> Result<H160> {
        println!("Getting artifacts");
        let factory = contract_factory(self.client.clone(), "PriceConsumer")?;

        println!("Deploying");
        let price_consumer = factory.deploy(())?.legacy().send().await?;

        let address = price_consumer.address();
        println!("priceConsumer deployed to: {:?}", address);
        Ok(address)
    }
}

fn parse_wallet(sk: &str) -> Result<LocalWallet> {
    Ok(LocalWallet::from_bytes(&hex::decode(
        sk.strip_prefix("0x").unwrap_or(sk),
    )?)?)
}

fn contract_factory<M: Middleware>(client: Arc<M>, name: &str) -> Result<ContractFactory<M>> {
    let artifact = artifacts::get(name)?;
    Ok(ContractFactory::new(artifact.abi, artifact.bytecode, client))
}
