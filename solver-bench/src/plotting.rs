use std::{collections::HashMap, error::Error, path::Path};

use plotters::prelude::*;

/// Plots, per heuristic, the sorted decision counts across the benchmark
/// suite (one line per heuristic, x axis ranks instances by difficulty).
pub fn plot_decisions(
    measurement: HashMap<String, Vec<usize>>,
    path: impl AsRef<Path>,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let drawing_area = BitMapBackend::new(path.as_ref(), size).into_drawing_area();
    drawing_area.fill(&WHITE)?;

    let max_instances = measurement.values().map(|v| v.len()).max().expect("measurement was empty");

    let max_decisions = measurement
        .values()
        .filter_map(|v| v.iter().max())
        .max()
        .copied()
        .expect("measurement was empty");

    let mut chart = ChartBuilder::on(&drawing_area)
        .x_label_area_size(30)
        .y_label_area_size(80)
        .margin(20)
        .build_cartesian_2d(0..max_instances, 0..max_decisions)?;

    chart.configure_mesh().x_desc("Number of solved instances").y_desc("Decisions").draw()?;

    let mut colors = vec![(255, 0, 0), (0, 255, 0), (0, 255, 255), (0, 0, 255), (255, 0, 255), (255, 165, 0)]
        .into_iter()
        .cycle();

    for (name, counts) in measurement.iter() {
        let (r, g, b) = colors.next().unwrap();
        let line_color = RGBColor(r, g, b);

        let mut sorted = counts.clone();
        sorted.sort_unstable();

        let points = PointSeries::of_element(sorted.iter().cloned().enumerate(), 5, &line_color, &|c, s, st| {
            Circle::new(c, s, st)
        });
        chart.draw_series(points)?;

        let lines = LineSeries::new(sorted.into_iter().enumerate(), &line_color);
        chart.draw_series(lines)?.label(name).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x - 20, y)], &line_color)
        });
    }

    chart.configure_series_labels().position(SeriesLabelPosition::UpperLeft).margin(5).draw()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::plot_decisions;
    use std::collections::HashMap;

    #[test]
    fn plotting_produces_a_file() {
        let mut map = HashMap::new();
        map.insert("DEFAULT".to_string(), vec![10, 5, 7, 9, 200, 3]);
        map.insert("DLIS".to_string(), vec![1, 30, 24, 7, 50, 20, 3]);

        let dir = std::env::temp_dir().join("solver-bench-plot-test.png");
        plot_decisions(map, &dir, (640, 480)).unwrap();
        assert!(dir.exists());
        let _ = std::fs::remove_file(&dir);
    }
}
