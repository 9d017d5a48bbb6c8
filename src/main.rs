#[macro_use]
extern crate slog;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;
extern crate num;
extern crate rayon;
extern crate serde;
extern crate serde_json;
extern crate slog_term;

use std::process;
use atlas::TileTable;
use config::BakeConfig;

mod atlas;
mod config;
mod error;
mod logging;
mod store;
mod worldgen;

fn main() {
    let log = logging::root_logger();
    let config = BakeConfig::overworld();
    match worldgen::bake(&config, TileTable::overworld()) {
        Ok(summary) => {
            info!(log, "done: {} chunks in {:.1}s", summary.chunks_written, summary.elapsed.as_secs_f64());
        }
        Err(e) => {
            error!(log, "bake failed: {}", e);
            process::exit(1);
        }
    }
}
