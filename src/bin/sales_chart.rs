use tracing::info;
use tracing_subscriber::EnvFilter;

use kurs_charts::models::sales::demo_sales;
use kurs_charts::services::chart_service;
use kurs_charts::viewer;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; diagnostics go to stderr, stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("kurs_charts=info".parse().unwrap())
                .add_directive("sales_chart=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let table = demo_sales();
    info!("Rendering sales chart from {} rows", table.len());

    let frame = chart_service::render_sales_chart(&table, WIDTH, HEIGHT)?;

    info!("Displaying chart, close the window to exit");
    viewer::show("Sales", WIDTH, HEIGHT, frame)
}
