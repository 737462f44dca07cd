//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::Col;
use ols_engine::Matrix;

/// Generate simple linear data: y = x * beta + intercept + noise
pub fn generate_linear_data(
    n_samples: usize,
    n_features: usize,
    intercept: f64,
    noise_std: f64,
    seed: u64,
) -> (Matrix, Col<f64>, Col<f64>) {
    // Simple deterministic "random" for reproducibility
    let mut rng_state = seed;
    let mut next_rand = move || -> f64 {
        rng_state = rng_state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        ((rng_state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let true_coefficients = Col::from_fn(n_features, |j| (j + 1) as f64);

    let mut rows = Vec::with_capacity(n_samples);
    let mut y = Col::zeros(n_samples);

    for i in 0..n_samples {
        let row: Vec<f64> = (0..n_features).map(|_| next_rand()).collect();
        let mut yi = intercept;
        for j in 0..n_features {
            yi += row[j] * true_coefficients[j];
        }
        yi += noise_std * next_rand();
        y[i] = yi;
        rows.push(row);
    }

    let x = Matrix::from_rows(&rows).expect("generated rows are rectangular");
    (x, y, true_coefficients)
}

/// Generate data with collinear features.
pub fn generate_collinear_data(n_samples: usize) -> (Matrix, Col<f64>) {
    let x = Matrix::from_fn(n_samples, 3, |i, j| match j {
        0 => i as f64,
        1 => 2.0 * i as f64, // Perfectly collinear with x0
        _ => (i * i) as f64,
    });
    let y = Col::from_fn(n_samples, |i| 1.0 + 2.0 * x[(i, 0)] + 3.0 * x[(i, 2)]);

    (x, y)
}

/// Generate data with a constant column.
pub fn generate_constant_column_data(n_samples: usize) -> (Matrix, Col<f64>) {
    let x = Matrix::from_fn(n_samples, 3, |i, j| match j {
        0 => i as f64,
        1 => 5.0, // Constant column
        _ => (i * i) as f64,
    });
    let y = Col::from_fn(n_samples, |i| 1.0 + 2.0 * x[(i, 0)] + 3.0 * x[(i, 2)]);

    (x, y)
}

/// Five points close to y = 2x: the residuals alternate 0.08, -0.12.
pub fn small_noisy_line() -> (Matrix, Col<f64>) {
    let x = Matrix::from_fn(5, 1, |i, _| (i + 1) as f64);
    let y = Col::from_fn(5, |i| [2.1, 3.9, 6.1, 7.9, 10.1][i]);
    (x, y)
}
