use chrono::Duration;
use plotters::prelude::*;

use crate::models::{PricePoint, SalesRecord};

/// Generate the fixed-table sales chart as an RGB888 frame
///
/// Line chart of sales over day: blue line, "sales" legend entry, "day"
/// x-axis label. Returns `width * height * 3` bytes.
pub fn render_sales_chart(
    records: &[SalesRecord],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    if records.is_empty() {
        return Err("Cannot render a chart from an empty table".to_string());
    }

    let mut frame = vec![0u8; (width * height * 3) as usize];

    {
        let backend = BitMapBackend::with_buffer(&mut frame, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        // Find sales range
        let min_sales = records.iter().map(|r| r.sales as f64).fold(f64::INFINITY, f64::min);
        let max_sales = records.iter().map(|r| r.sales as f64).fold(f64::NEG_INFINITY, f64::max);

        // Add some padding to the value range
        let sales_range = (max_sales - min_sales).max(1e-8); // Avoid division by zero
        let padding = sales_range * 0.1;
        let y_min = (min_sales - padding).max(0.0);
        let y_max = max_sales + padding;

        let x_min = records[0].day;
        let x_max = records[records.len() - 1].day;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .x_desc("day")
            .x_labels(records.len())
            .draw()
            .map_err(|e| format!("Failed to draw mesh: {}", e))?;

        chart
            .draw_series(LineSeries::new(
                records.iter().map(|r| (r.day, r.sales as f64)),
                &BLUE,
            ))
            .map_err(|e| format!("Failed to draw line: {}", e))?
            .label("sales")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| format!("Failed to draw legend: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    Ok(frame)
}

/// Generate the exchange rate chart as an RGB888 frame
///
/// Solid green line with filled circular markers over the date axis, one
/// x label requested per observation, labels rotated, grid drawn.
/// Returns `width * height * 3` bytes.
pub fn render_rate_chart(
    points: &[PricePoint],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, String> {
    if points.is_empty() {
        return Err("Cannot render a chart from an empty series".to_string());
    }

    let mut frame = vec![0u8; (width * height * 3) as usize];

    {
        let backend = BitMapBackend::with_buffer(&mut frame, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        // Find price range
        let min_price = points.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
        let max_price = points.iter().map(|p| p.close).fold(f64::NEG_INFINITY, f64::max);

        // Add some padding to the price range
        let price_range = (max_price - min_price).max(1e-8); // Avoid division by zero
        let padding = price_range * 0.1;
        let y_min = (min_price - padding).max(0.0);
        let y_max = max_price + padding;

        // Get date range; widen a single-point range so the axis stays usable
        let x_min = points[0].date;
        let mut x_max = points[points.len() - 1].date;
        if x_min == x_max {
            x_max = x_max + Duration::days(1);
        }

        let mut chart = ChartBuilder::on(&root)
            .caption("Курс USD/EUR за последний год", ("sans-serif", 30.0).into_font())
            .margin(15)
            .x_label_area_size(80)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?;

        chart
            .configure_mesh()
            .x_desc("Дата")
            .y_desc("Курс")
            .x_labels(points.len())
            .x_label_formatter(&|d| d.format("%Y-%m-%d").to_string())
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .draw()
            .map_err(|e| format!("Failed to draw mesh: {}", e))?;

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.date, p.close)),
                &GREEN,
            ))
            .map_err(|e| format!("Failed to draw line: {}", e))?
            .label("USD/EUR")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));

        // Circle marker at every observation
        chart
            .draw_series(
                points
                    .iter()
                    .map(|p| Circle::new((p.date, p.close), 3, GREEN.filled())),
            )
            .map_err(|e| format!("Failed to draw points: {}", e))?;

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| format!("Failed to draw legend: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sales::demo_sales;
    use chrono::NaiveDate;

    fn sample_points(n: usize) -> Vec<PricePoint> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        (0..n)
            .map(|i| PricePoint {
                date: start + Duration::days(i as i64),
                close: 0.9 + 0.001 * i as f64,
            })
            .collect()
    }

    fn has_pixel<F: Fn(u8, u8, u8) -> bool>(frame: &[u8], pred: F) -> bool {
        frame.chunks_exact(3).any(|px| pred(px[0], px[1], px[2]))
    }

    #[test]
    fn test_sales_chart_frame_shape() {
        let frame = render_sales_chart(&demo_sales(), 320, 240).unwrap();
        assert_eq!(frame.len(), 320 * 240 * 3);
        // Something was drawn over the white canvas
        assert!(has_pixel(&frame, |r, g, b| (r, g, b) != (255, 255, 255)));
    }

    #[test]
    fn test_sales_chart_draws_blue_series() {
        let frame = render_sales_chart(&demo_sales(), 320, 240).unwrap();
        assert!(has_pixel(&frame, |r, g, b| b > r && b > g));
    }

    #[test]
    fn test_sales_chart_is_deterministic() {
        let a = render_sales_chart(&demo_sales(), 320, 240).unwrap();
        let b = render_sales_chart(&demo_sales(), 320, 240).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rate_chart_frame_shape() {
        let frame = render_rate_chart(&sample_points(30), 400, 300).unwrap();
        assert_eq!(frame.len(), 400 * 300 * 3);
        assert!(has_pixel(&frame, |r, g, b| (r, g, b) != (255, 255, 255)));
    }

    #[test]
    fn test_rate_chart_draws_green_series() {
        let frame = render_rate_chart(&sample_points(30), 400, 300).unwrap();
        assert!(has_pixel(&frame, |r, g, b| g > r && g > b));
    }

    #[test]
    fn test_rate_chart_accepts_single_point() {
        let frame = render_rate_chart(&sample_points(1), 400, 300).unwrap();
        assert_eq!(frame.len(), 400 * 300 * 3);
    }

    #[test]
    fn test_rate_chart_rejects_empty_series() {
        assert!(render_rate_chart(&[], 400, 300).is_err());
    }

    #[test]
    fn test_sales_chart_rejects_empty_table() {
        assert!(render_sales_chart(&[], 320, 240).is_err());
    }
}
