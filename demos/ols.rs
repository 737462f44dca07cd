//! # Ordinary Least Squares (OLS) Regression
//!
//! Fits straight lines and planes through noisy data by solving the normal
//! equations with a Cholesky factorization.
//!
//! ## Key Features
//! - Closed-form simple regression
//! - Multiple regression with an optional constant term
//! - Coefficient standard errors, t-statistics and p-values
//! - Residual diagnostics and the overall F-test
//! - Explicit errors for singular and degenerate inputs
//!
//! Run with: `RUST_LOG=debug cargo run --example ols`

use faer::Col;
use ols_engine::prelude::*;

fn main() {
    env_logger::init();

    println!("=== Ordinary Least Squares (OLS) Regression ===\n");

    simple_regression();
    multiple_regression();
    model_diagnostics();
    singular_design();
}

/// Simple linear regression with one predictor
fn simple_regression() {
    println!("--- Simple Linear Regression ---\n");

    // Generate data: y = 2 + 3*x + noise
    let n = 50;
    let noise = [
        0.5, -0.3, 0.8, -0.2, 0.1, -0.6, 0.4, -0.1, 0.3, -0.5, 0.2, -0.4, 0.6, -0.3, 0.1, -0.2,
        0.4, -0.5, 0.3, -0.1, 0.5, -0.3, 0.2, -0.4, 0.1, -0.6, 0.4, -0.2, 0.3, -0.5, 0.2, -0.4,
        0.6, -0.3, 0.1, -0.2, 0.4, -0.5, 0.3, -0.1, 0.5, -0.3, 0.2, -0.4, 0.1, -0.6, 0.4, -0.2,
        0.3, -0.5,
    ];

    let x = Col::from_fn(n, |i| i as f64 * 0.2);
    let y = Col::from_fn(n, |i| 2.0 + 3.0 * (i as f64 * 0.2) + noise[i]);

    let fit = simple_linear_regression(&y, &x).expect("fit should succeed");

    println!("True model: y = 2 + 3*x + noise");
    println!("Estimated intercept: {:.4}", fit.intercept);
    println!("Estimated slope: {:.4}", fit.slope);
    println!("R-squared: {:.4}", fit.r_squared);
    println!("Standard error: {:.4}", fit.standard_error);
    println!();
}

/// Multiple linear regression with several predictors
fn multiple_regression() {
    println!("--- Multiple Linear Regression ---\n");

    // Generate data: y = 1 + 2*x1 - 0.5*x2 + 0.8*x3 + noise
    let n = 100;
    let x = Matrix::from_fn(n, 3, |i, j| match j {
        0 => (i as f64) * 0.1,
        1 => ((i as f64) * 0.15).sin(),
        _ => ((i as f64) * 0.05).powi(2),
    });

    let y = Col::from_fn(n, |i| {
        let noise = ((i as f64 * 0.7).sin()) * 0.3;
        1.0 + 2.0 * x[(i, 0)] - 0.5 * x[(i, 1)] + 0.8 * x[(i, 2)] + noise
    });

    let result = multiple_linear_regression(&y, &x, false, true).expect("fit should succeed");

    println!("True model: y = 1 + 2*x1 - 0.5*x2 + 0.8*x3 + noise\n");
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10}",
        "term", "estimate", "std err", "t", "p"
    );
    let names = ["(constant)", "x1", "x2", "x3"];
    for (j, name) in names.iter().enumerate() {
        println!(
            "{:<12} {:>10.4} {:>10.4} {:>10.3} {:>10.4}",
            name,
            result.coefficients[j],
            result.coefficient_std_errors[j],
            result.t_statistics[j],
            result.p_values[j]
        );
    }
    println!();
    println!("R-squared: {:.4}", result.r_squared);
    println!("Adjusted R-squared: {:.4}", result.adjusted_r_squared);
    println!("Standard error: {:.4}", result.standard_error);
    println!("CV: {:.4}", result.coefficient_of_variation);
    println!("NMBE: {:.2e}", result.normalized_mean_bias_error);
    println!();
}

/// Residual diagnostics and the overall F-test
fn model_diagnostics() {
    println!("--- Model Diagnostics ---\n");

    let n = 30;
    let x = Matrix::from_fn(n, 1, |i, _| i as f64);
    let y = Col::from_fn(n, |i| {
        let outlier = if i == 17 { 12.0 } else { 0.0 };
        5.0 + 0.5 * i as f64 + ((i as f64) * 1.3).cos() + outlier
    });

    let fitted = OlsRegressor::builder()
        .with_intercept(true)
        .compute_advanced_stats(true)
        .build()
        .fit(&x, &y)
        .expect("fit should succeed");

    let advanced = fitted
        .result()
        .advanced
        .as_ref()
        .expect("advanced stats requested");

    println!(
        "F-statistic: {:.2} (p = {:.2e})",
        advanced.f_statistic, advanced.f_p_value
    );

    let outliers = residual_outliers(&advanced.standardized_residuals, 2.5);
    println!("Observations with |standardized residual| > 2.5: {outliers:?}");

    let predicted: Vec<f64> = advanced.predictions.iter().copied().collect();
    let measured: Vec<f64> = y.iter().copied().collect();
    let rmse = calculate_rmse(&predicted, &measured).expect("equal lengths");
    println!("RMSE: {rmse:.4}");
    println!();
}

/// A predictor that duplicates the constant term cannot be fit
fn singular_design() {
    println!("--- Singular Design ---\n");

    let x = Matrix::from_fn(10, 2, |i, j| if j == 0 { i as f64 } else { 3.0 });
    let y = Col::from_fn(10, |i| 1.0 + i as f64);

    match multiple_linear_regression(&y, &x, false, true) {
        Ok(result) => println!("unexpected fit: {:?}", result.coefficients),
        Err(err) => println!("error: {err}"),
    }
    println!();
}
