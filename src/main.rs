use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = ppath::cli::parse();
    app::run(args)
}
