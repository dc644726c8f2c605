use std::io;

use anyhow::Result;
use tracing::info;

use drafts_console::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("drafts starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    Session::default().run(stdin.lock(), &mut output)?;
    Ok(())
}
