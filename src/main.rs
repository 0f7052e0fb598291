use clap::Parser;
use filedrop_lib::config::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    filedrop_lib::logging::init();
    filedrop_lib::run(Cli::parse()).await
}
