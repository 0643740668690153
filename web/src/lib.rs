use anyhow::Context;
use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod host;
mod screen;
mod sound;
mod stats;
mod utils;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

/// Reads options from the page hash, e.g. `#-vv&--seed=42&--difficulty=hard`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(location_hash.split(['#', '&']))
}

fn mount(args: Args) -> anyhow::Result<()> {
    use gloo::utils::document;

    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).context("Error initializing logger")?;
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .context("Could not find id=\"game\" element")?;

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::window;

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = parse_args(&location_hash).unwrap_or_else(|err| {
        gloo::console::warn!(format!("Ignoring page options: {}", err));
        Args::default()
    });

    if let Err(err) = mount(args) {
        gloo::console::error!(format!("{:#}", err));
    }
}
