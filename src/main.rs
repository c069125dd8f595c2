use clap::Parser;
use dotenv::dotenv;

use fbrapi::cmd::Cmd;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    Cmd::parse().run().await
}
