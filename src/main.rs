#[macro_use]
extern crate log;

mod catalog;
mod config;
mod detail;
mod fetch;
mod logger;
mod pipeline;
mod playlist;
mod playlist_error;
mod track;

use std::process;

use crate::fetch::HttpFetcher;

fn main() {
    let config = match config::load_config() {
        Ok(config) => config,
        Err(err) => {
            if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
            println!("[-] Unable to load config: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = logger::setup_logger(config.log_level, config.log_dir.as_deref()) {
        println!("[-] Unable to set up logging: {}", err);
        process::exit(1);
    }

    info!("Catalog: {}", config.catalog_url);
    if config.missing_api_key() {
        warn!("No api key configured for the detail endpoint");
    }
    match config.details {
        Some(ref endpoint) => info!("Details: {} (profile: {})", endpoint.url, endpoint.profile),
        None => info!("Details: off"),
    }

    let fetcher = match HttpFetcher::new(&config.useragent, config.timeout) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            println!("[-] Unable to create http client: {}", err);
            process::exit(1);
        }
    };

    match pipeline::run(&fetcher, &config) {
        Ok(summary) => {
            info!(
                "Wrote {} tracks, skipped {} stations",
                summary.tracks, summary.skipped
            );
            println!("[+] Playlist saved to: {}", summary.output.display());
        }
        Err(err) => {
            error!("{}", err);
            println!("[-] An error occured while generating the playlist: {}", err);
            process::exit(1);
        }
    }
}
