use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Options come from the location hash, e.g. `#-vv&--seed=42`
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    /// Like `from_location_hash`, but a malformed hash falls back to the defaults
    fn from_location_hash_or_default(hash: &str) -> (Self, Option<clap::Error>) {
        match Self::from_location_hash(hash) {
            Ok(args) => (args, None),
            Err(err) => (Self::parse_from([""]), Some(err)),
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = Args::from_location_hash_or_default(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::error!("Ignoring options in {:?}: {}", location_hash, err);
    }

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}
