use tradedash::api::http::HttpApi;
use tradedash::config::Config;
use tradedash::services::dashboard_service::DashboardService;

use clap::{App, Arg, SubCommand};
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    let app = App::new("tradedash")
        .version("1.0.0")
        .about("Console dashboard client for the trading server")
        .arg(
            Arg::with_name("server")
                .short('s')
                .long("server")
                .value_name("URL")
                .help("Base URL of the trading server")
                .takes_value(true)
                .default_value("http://127.0.0.1:8000"),
        )
        .subcommand(
            SubCommand::with_name("watch")
                .about("Poll the dashboard endpoints and render them"),
        )
        .subcommand(
            SubCommand::with_name("add-stock")
                .about("Subscribe a stock symbol with its instrument token")
                .arg(
                    Arg::with_name("symbol")
                        .long("symbol")
                        .value_name("SYMBOL")
                        .help("Stock symbol to subscribe")
                        .required(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Instrument token for the symbol")
                        .required(true)
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("save-algo")
                .about("Save an algorithm config")
                .arg(
                    Arg::with_name("config")
                        .short('c')
                        .long("config")
                        .value_name("JSON")
                        .help("Algorithm config as a JSON document")
                        .required(true)
                        .takes_value(true),
                ),
        );

    let matches = app.get_matches();
    let server = matches.value_of("server").unwrap();

    let config = Config::new().with_base_url(server);
    let api = Arc::new(HttpApi::new(&config)?);
    let service = DashboardService::new(api);

    if matches.subcommand_matches("watch").is_some() {
        info!("Watching dashboard at {}", server);
        service.run().await?;
    } else if let Some(matches) = matches.subcommand_matches("add-stock") {
        let symbol = matches.value_of("symbol").unwrap();
        let token = matches.value_of("token").unwrap();

        service.add_stock(symbol, token).await?;
        service.draw(&mut std::io::stdout())?;
    } else if let Some(matches) = matches.subcommand_matches("save-algo") {
        let text = matches.value_of("config").unwrap();

        service.save_algo(text).await?;
        service.draw(&mut std::io::stdout())?;
    } else {
        info!("No command specified. Use --help for usage information.");
    }

    Ok(())
}
