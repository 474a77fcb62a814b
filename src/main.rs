//! Entry point: parse arguments, initialize tracing, run the event loop

use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use folio::cli::CliArgs;
use folio::runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    folio::trace::init();

    if args.list {
        for doc in folio::content::DOCUMENTS {
            println!("{:<18} {}", doc.id, doc.title);
        }
        return Ok(());
    }

    // Validate the requested document before opening a window
    if let Err(e) = args.startup_doc() {
        anyhow::bail!("{}", e);
    }

    tracing::info!("folio starting");

    let event_loop = EventLoop::new()?;
    let mut app = App::new(1280, 800, &args);
    event_loop.run_app(&mut app)?;

    tracing::info!("folio exiting");
    Ok(())
}
