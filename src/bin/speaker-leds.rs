#![warn(unsafe_op_in_unsafe_fn)]
#![warn(clippy::pedantic)]

use clap::Parser;
use eyre::Result;
use speaker_leds::{
    async_main,
    cli::Cli,
    config::Config,
    consts::LED_COUNT,
    led::{State, StateController},
    logger,
    strip::Fake,
};
use tokio::signal::ctrl_c;

fn main() -> Result<()> {
    async_main(run(Cli::parse()))
}

async fn run(cli: Cli) -> Result<()> {
    logger::init();

    let config = if let Some(path) = &cli.config {
        Config::load(path).await?
    } else {
        Config::default()
    };

    // The physical strip driver is configured outside of the core; this
    // binary drives the in-memory strip.
    let strip = Fake::new(LED_COUNT);
    let mut controller = StateController::new(strip, config);
    controller.request(cli.action.into()).await?;
    log::info!("rendering {:?}, press ctrl-c to exit", cli.action);

    ctrl_c().await?;
    if cli.clear {
        controller.request(State::Cleared).await?;
    }
    controller.shutdown().await?;
    Ok(())
}
