use anyhow::Result;
use clap::Parser;

use crate::deploy::Deploy;

#[derive(Debug, Parser)]
pub struct CommandLine {
    #[clap(short, long)]
    rpc: String,

    #[clap(long)]
    sk: String,
}

impl CommandLine {
    pub async fn execute(self) -> Result<()> {
        let deploy = Deploy::new(&self.rpc, &self.sk).await?;
        deploy.run().await?;
        Ok(())
    }
}
