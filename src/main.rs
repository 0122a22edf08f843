use clap::Parser;
use dotenvy::dotenv;
use levelscope::config::Config;
use levelscope::indicators::parser::parse_price_list;
use levelscope::indicators::structure::calculate_support_resistance;
use levelscope::indicators::validation::validate_level_parameters;
use levelscope::logging;
use levelscope::models::catalog::{find_listing, resolve_symbol, BarInterval, Timeframe, STOCK_CATALOG};
use levelscope::models::levels::{LevelParameters, LevelTable};
use levelscope::services::market_data::MarketDataProvider;
use levelscope::services::yahoo::YahooMarketDataProvider;

/// Find support and resistance levels for a stock
#[derive(Debug, Parser)]
#[command(name = "levelscope", version)]
struct Args {
    /// Stock display name (e.g. "Reliance Industries") or ticker (e.g. RELIANCE.NS)
    #[arg(long, default_value = "Reliance Industries")]
    stock: String,

    /// Look-back window: 1mo, 3mo, 6mo, 1y, 2y, 5y
    #[arg(long, default_value = "6mo")]
    period: Timeframe,

    /// Bar size: 1d, 1wk, 1mo
    #[arg(long, default_value = "1d")]
    interval: BarInterval,

    #[arg(long)]
    min_touches: Option<usize>,

    #[arg(long)]
    distance: Option<f64>,

    #[arg(long)]
    tolerance: Option<f64>,

    /// Analyse these comma-separated closes instead of fetching market data
    #[arg(long)]
    closes: Option<String>,

    /// List the stock catalogue and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env();
    logging::init_logging(&config);

    if args.list {
        for listing in STOCK_CATALOG {
            println!("  {:<28} {}", listing.name, listing.symbol);
        }
        return Ok(());
    }

    let defaults = config.default_parameters;
    let params = LevelParameters {
        min_touches: args.min_touches.unwrap_or(defaults.min_touches),
        distance: args.distance.unwrap_or(defaults.distance),
        tolerance: args.tolerance.unwrap_or(defaults.tolerance),
    };

    let prices = match &args.closes {
        Some(raw) => {
            println!("Custom series");
            parse_price_list(raw)?
        }
        None => {
            validate_level_parameters(&params)?;
            let symbol = resolve_symbol(&args.stock);
            let name = find_listing(&symbol)
                .map(|l| l.name.to_string())
                .unwrap_or_else(|| symbol.clone());
            println!("{} ({}) - {}", name, symbol, args.period.label());

            let provider = YahooMarketDataProvider::new(&config.market_data)?;
            provider.get_closes(&symbol, args.period, args.interval).await?
        }
    };

    if prices.is_empty() {
        println!("No data available for the selected options.");
        return Ok(());
    }

    let result = calculate_support_resistance(&prices, params);
    println!(
        "  Bars: {} | Min touches: {} | Distance: {} | Tolerance: {}",
        prices.len(),
        params.min_touches,
        params.distance,
        params.tolerance
    );
    print_table(&result.table);

    Ok(())
}

fn print_table(table: &LevelTable) {
    if table.is_empty() {
        println!("  No support or resistance levels found.");
        return;
    }

    let cell = |value: Option<f64>| match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    };

    println!("  {:>16} | {:>18}", "Support Levels", "Resistance Levels");
    for row in table.rows() {
        println!("  {:>16} | {:>18}", cell(row.support), cell(row.resistance));
    }
}
