//! Spot price proxy server entry point

mod api;

use clap::{Arg, Command};

const DEFAULT_UPSTREAM: &str = "https://api.spot-hinta.fi";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("spot-proxy")
        .version("0.1")
        .about("Validating, caching proxy in front of the upstream spot price API")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Port to listen on")
                .default_value("8080"),
        )
        .arg(
            Arg::new("upstream")
                .short('u')
                .long("upstream")
                .value_name("URL")
                .help("Base URL of the upstream price API")
                .default_value(DEFAULT_UPSTREAM),
        )
        .get_matches();

    let port: u16 = matches
        .get_one::<String>("port")
        .map(String::as_str)
        .unwrap_or("8080")
        .parse()?;
    let upstream = matches
        .get_one::<String>("upstream")
        .cloned()
        .unwrap_or_else(|| DEFAULT_UPSTREAM.to_string());

    api::serve(upstream, port).await
}
