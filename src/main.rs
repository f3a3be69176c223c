use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use clockdeck::cli::CliArgs;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    clockdeck::tracing::init();

    let startup = args.into_config().map_err(|e| anyhow::anyhow!(e))?;
    let config = startup.apply(startup.load_config());
    tracing::info!(?config, "Starting clockdeck");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
