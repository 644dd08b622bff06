use anyhow::Context;
use post_cli::ui;
use post_core::{Config, PostClient};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::from_env().context("cannot resolve the backend address")?;
    let client = PostClient::from_config(&config);
    ui::run(client)
}
