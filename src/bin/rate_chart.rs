use tracing::info;
use tracing_subscriber::EnvFilter;

use kurs_charts::api::yahoo::YahooChartClient;
use kurs_charts::services::{chart_service, rate_service};
use kurs_charts::utils::Table;
use kurs_charts::viewer;

/// Yahoo ticker for the USD -> EUR exchange rate
const SYMBOL: &str = "USDEUR=X";
const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;
const PREVIEW_ROWS: usize = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; diagnostics go to stderr, stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("kurs_charts=info".parse().unwrap())
                .add_directive("rate_chart=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = YahooChartClient::new();
    info!("Fetching {} daily history over the last year", SYMBOL);

    // Fetch failures propagate out of main untouched
    let points = rate_service::fetch_rate_history(&client, SYMBOL).await?;

    if points.is_empty() {
        println!("Нет данных для отображения");
        return Ok(());
    }

    info!("Fetched {} observations", points.len());

    // Head preview of the fetched series
    let mut preview = Table::new(vec!["Date", "Close"]);
    for point in points.iter().take(PREVIEW_ROWS) {
        let date = point.date.format("%Y-%m-%d").to_string();
        let close = format!("{:.6}", point.close);
        preview.add_row(vec![&date, &close]);
    }
    print!("{}", preview.render());

    let frame = chart_service::render_rate_chart(&points, WIDTH, HEIGHT)?;

    info!("Displaying chart, close the window to exit");
    viewer::show("Курс USD/EUR за последний год", WIDTH, HEIGHT, frame)
}
