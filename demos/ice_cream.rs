use std::error::Error;

use ndarray::ArrayView1;
use plotters::prelude::*;

use olsline::datasets::Dataset;
use olsline::estimators::traits::Fit;
use olsline::estimators::LinearRegression;
use olsline::metrics::mean_squared_error;
use olsline::model_selection::TrainTestSplit;

/// Ice cream sales observed at various daytime temperatures, including the
/// three near-zero cold-day entries of the original survey.
const ICE_CREAM: [(f64, f64); 13] = [
    (15., 34.),
    (24., 587.),
    (34., 1200.),
    (31., 1080.),
    (29., 989.),
    (26., 734.),
    (17., 80.),
    (11., 1.),
    (23., 523.),
    (25., 651.),
    (0., 0.),
    (2., 0.),
    (12., 5.),
];

fn main() -> Result<(), Box<dyn Error>> {
    let data = Dataset::from_samples(&ICE_CREAM)?;

    let split = TrainTestSplit::params().test_fraction(1. / 3.).split(&data)?;
    let (train, test) = split.into_parts();

    let model = LinearRegression::params().fit(&train)?;
    let predictions = model.predict(test.xs());
    let mse = mean_squared_error(test.ys(), predictions.view())?;

    draw_fit("ice_cream_fit.png", &data, &test, &model)?;

    println!("Coefficient: {}", model.slope());
    println!("Intercept: {}", model.intercept());
    println!("Mean Squared Error: {:.2}", mse);

    Ok(())
}

/// Renders a scatter plot of the full dataset, highlights the held-out test
/// samples and overlays the fitted line.
fn draw_fit(
    path: &str,
    data: &Dataset<f64>,
    test: &Dataset<f64>,
    model: &LinearRegression<f64>,
) -> Result<(), Box<dyn Error>> {
    let (x_max, y_max) = (axis_max(data.xs()), axis_max(data.ys()));

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Ice cream sales vs. temperature", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;
    chart
        .configure_mesh()
        .x_desc("Temperature (C)")
        .y_desc("Sales")
        .draw()?;

    chart
        .draw_series(
            data.xs()
                .iter()
                .zip(data.ys().iter())
                .map(|(&x, &y)| Circle::new((x, y), 4, BLUE.filled())),
        )?
        .label("observed")
        .legend(|(x, y)| Circle::new((x, y), 4, BLUE.filled()));

    chart
        .draw_series(
            test.xs()
                .iter()
                .zip(test.ys().iter())
                .map(|(&x, &y)| Circle::new((x, y), 4, RED.filled())),
        )?
        .label("held out")
        .legend(|(x, y)| Circle::new((x, y), 4, RED.filled()));

    let line = [0., x_max].map(|x| (x, model.slope() * x + model.intercept()));
    chart
        .draw_series(LineSeries::new(line, &BLACK))?
        .label("fitted line")
        .legend(|(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], &BLACK));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

fn axis_max(values: ArrayView1<f64>) -> f64 {
    1.1 * values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}
