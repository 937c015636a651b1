use anyhow::Result;
use atrium_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    atrium_api::setup::init_tracing();

    let config = Config::from_env()?;

    let router = atrium_api::setup::initialize_app(&config).await?;

    atrium_api::setup::server::start_server(&config, router).await
}
