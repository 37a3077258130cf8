use anyhow::{anyhow, Result};
use ethers::{abi::Abi, types::Bytes};
use serde::Deserialize;

static PRICE_CONSUMER: &str = include_str!("../compiled-contracts/PriceConsumer.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

pub fn get(name: &str) -> Result<Artifact> {
    let raw = match name {
        "PriceConsumer" => PRICE_CONSUMER,
        _ => return Err(anyhow!("no compiled artifact for contract:{}", name)),
    };
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_consumer_artifact_parses() {
        let artifact = get("PriceConsumer").unwrap();
        assert_eq!(artifact.contract_name, "PriceConsumer");
        assert!(!artifact.bytecode.is_empty());
        assert!(artifact.abi.function("getLatestPrice").is_ok());
    }

    #[test]
    fn unknown_contract_is_rejected() {
        let err = get("FeeOracle").unwrap_err();
        assert!(err.to_string().contains("FeeOracle"));
    }
}
