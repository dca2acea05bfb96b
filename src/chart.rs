//! Renders the frequency table as a bar chart PNG.

use std::path::Path;

use anyhow::{anyhow, Result};
use plotters::prelude::*;

use crate::model::{NUMBER_MAX, NUMBER_MIN};

pub fn save_frequency_chart(path: &Path, ranked: &[(u8, u32)]) -> Result<()> {
    let max_count = ranked.iter().map(|&(_, c)| c).max().unwrap_or(0).max(1);

    let root = BitMapBackend::new(path, (960, 540)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("chart fill: {}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Number frequency", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(32)
        .y_label_area_size(44)
        .build_cartesian_2d(
            u32::from(NUMBER_MIN)..u32::from(NUMBER_MAX) + 1,
            0u32..max_count + 1,
        )
        .map_err(|e| anyhow!("chart layout: {}", e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("number")
        .y_desc("times drawn")
        .draw()
        .map_err(|e| anyhow!("chart mesh: {}", e))?;

    chart
        .draw_series(ranked.iter().map(|&(number, count)| {
            Rectangle::new(
                [(u32::from(number), 0), (u32::from(number) + 1, count)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(|e| anyhow!("chart bars: {}", e))?;

    root.present().map_err(|e| anyhow!("chart write: {}", e))?;
    Ok(())
}
