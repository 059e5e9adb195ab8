use crate::domain::model::EmissionBreakdown;
use crate::utils::error::{CarbonError, Result};
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;

const CATEGORIES: [&str; 3] = ["Energy", "Waste", "Business travel"];

fn chart_error<E: std::fmt::Display>(e: E) -> CarbonError {
    CarbonError::ChartError {
        message: e.to_string(),
    }
}

/// Renders the component bar chart as a standalone SVG document.
pub fn render_chart(breakdown: &EmissionBreakdown, width: u32, height: u32) -> Result<String> {
    let values = [breakdown.energy_kg, breakdown.waste_kg, breakdown.travel_kg];

    // Leave headroom above the tallest bar; extend below zero when the
    // waste term is an offset.
    let y_max = values.iter().fold(1.0_f64, |acc, &v| acc.max(v)) * 1.15;
    let y_min = values.iter().fold(0.0_f64, |acc, &v| acc.min(v)) * 1.15;

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let caption = format!(
            "Carbon footprint: {} ({:.1} kg CO2e per year)",
            breakdown.company_name, breakdown.total_kg
        );

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, ("sans-serif", 36))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d((0u32..CATEGORIES.len() as u32).into_segmented(), y_min..y_max)
            .map_err(chart_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc("kg CO2e per year")
            .axis_desc_style(("sans-serif", 24))
            .label_style(("sans-serif", 20))
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(i) if (*i as usize) < CATEGORIES.len() => {
                    CATEGORIES[*i as usize].to_string()
                }
                _ => String::new(),
            })
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(GREEN.mix(0.7).filled())
                    .margin(60)
                    .data(values.iter().enumerate().map(|(i, v)| (i as u32, *v))),
            )
            .map_err(chart_error)?;

        root.present().map_err(chart_error)?;
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn breakdown() -> EmissionBreakdown {
        EmissionBreakdown {
            company_name: "Acme Corp".to_string(),
            energy_kg: 1399.56,
            waste_kg: 307.2,
            travel_kg: 3465.0,
            total_kg: 5171.76,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_chart_is_nonempty_svg() {
        let svg = render_chart(&breakdown(), 1400, 800).unwrap();

        assert!(!svg.is_empty());
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Acme Corp"));
    }

    #[test]
    fn test_chart_is_deterministic() {
        let first = render_chart(&breakdown(), 1400, 800).unwrap();
        let second = render_chart(&breakdown(), 1400, 800).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_chart_handles_negative_waste_offset() {
        let mut offset = breakdown();
        offset.waste_kg = -412.8;

        let svg = render_chart(&offset, 800, 600).unwrap();
        assert!(svg.contains("<svg"));
    }
}
