//! OLS regression tests.

mod common;

use approx::assert_relative_eq;
use faer::Col;
use ols_engine::solvers::{
    multiple_linear_regression, Degeneracy, FittedRegressor, OlsRegressor, RegressionError,
    Regressor,
};
use ols_engine::Matrix;

// ============================================================================
// Basic Regression Tests
// ============================================================================

#[test]
fn test_exact_recovery_with_constant() {
    // y = 2 + 3*x
    let x = Matrix::from_fn(5, 1, |i, _| (i + 1) as f64);
    let y = Col::from_fn(5, |i| 2.0 + 3.0 * (i + 1) as f64);

    let result = multiple_linear_regression(&y, &x, false, true).expect("fit should succeed");

    assert_eq!(result.coefficients.nrows(), 2);
    assert_relative_eq!(result.coefficients[0], 2.0, epsilon = 1e-9);
    assert_relative_eq!(result.coefficients[1], 3.0, epsilon = 1e-9);
    assert_relative_eq!(result.r_squared, 1.0, epsilon = 1e-10);
    assert!(result.ss_error.abs() < 1e-9);
    assert!(result.ss_error >= 0.0, "SSE is clamped at zero");
    assert!(result.advanced.is_none());
}

#[test]
fn test_regression_without_constant() {
    // y = 3*x (no intercept)
    let x = Matrix::from_fn(5, 1, |i, _| (i + 1) as f64);
    let y = Col::from_fn(5, |i| 3.0 * (i + 1) as f64);

    let model = OlsRegressor::builder().with_intercept(false).build();
    let fitted = model.fit(&x, &y).expect("fit should succeed");

    assert_eq!(fitted.coefficients().nrows(), 1);
    assert_relative_eq!(fitted.coefficients()[0], 3.0, epsilon = 1e-10);
    assert!(fitted.result().intercept().is_none());
    assert_eq!(fitted.result().model_df(), 0);
}

#[test]
fn test_multiple_regression() {
    // y = 1 + 2*x1 + 3*x2 with non-collinear features
    let x = Matrix::from_fn(10, 2, |i, j| if j == 0 { i as f64 } else { (i * i) as f64 });
    let y = Col::from_fn(10, |i| 1.0 + 2.0 * x[(i, 0)] + 3.0 * x[(i, 1)]);

    let model = OlsRegressor::builder().with_intercept(true).build();
    let fitted = model.fit(&x, &y).expect("fit should succeed");

    assert_relative_eq!(fitted.coefficients()[0], 1.0, epsilon = 1e-8);
    assert_relative_eq!(fitted.coefficients()[1], 2.0, epsilon = 1e-8);
    assert_relative_eq!(fitted.coefficients()[2], 3.0, epsilon = 1e-8);
    assert_relative_eq!(fitted.r_squared(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_recovers_noisy_coefficients() {
    let (x, y, true_coefs) = common::generate_linear_data(200, 3, 5.0, 0.01, 42);

    let result = multiple_linear_regression(&y, &x, false, true).expect("fit should succeed");

    assert_relative_eq!(result.coefficients[0], 5.0, epsilon = 0.01);
    for j in 0..3 {
        assert_relative_eq!(result.coefficients[j + 1], true_coefs[j], epsilon = 0.01);
    }
    assert!(result.r_squared > 0.999);
}

// ============================================================================
// Fit Statistics
// ============================================================================

#[test]
fn test_statistics_on_small_noisy_line() {
    // x̄ = 3, ȳ = 6.02, Sxx = 10, Sxy = 20, Syy = 40.048
    let (x, y) = common::small_noisy_line();

    let result = multiple_linear_regression(&y, &x, false, true).expect("fit should succeed");

    assert_relative_eq!(result.coefficients[0], 0.02, epsilon = 1e-9);
    assert_relative_eq!(result.coefficients[1], 2.0, epsilon = 1e-9);

    assert_relative_eq!(result.y_mean, 6.02, epsilon = 1e-12);
    assert_relative_eq!(result.ss_total, 40.048, epsilon = 1e-9);
    assert_relative_eq!(result.ss_error, 0.048, epsilon = 1e-9);
    assert_relative_eq!(result.ss_regression, 40.0, epsilon = 1e-9);

    assert_relative_eq!(result.r_squared, 1.0 - 0.048 / 40.048, epsilon = 1e-10);
    assert_relative_eq!(
        result.adjusted_r_squared,
        1.0 - (4.0 / 3.0) * (0.048 / 40.048),
        epsilon = 1e-10
    );

    let se = 0.016_f64.sqrt();
    assert_relative_eq!(result.standard_error, se, epsilon = 1e-9);
    assert_relative_eq!(result.coefficient_of_variation, se / 6.02, epsilon = 1e-9);
    assert!(result.normalized_mean_bias_error.abs() < 1e-10);

    // (X'X)⁻¹ diagonal = [1.1, 0.1]
    assert_relative_eq!(result.coefficient_std_errors[0], se * 1.1_f64.sqrt(), epsilon = 1e-9);
    assert_relative_eq!(result.coefficient_std_errors[1], 0.04, epsilon = 1e-9);
    assert_relative_eq!(result.t_statistics[1], 50.0, epsilon = 1e-6);
    assert!(result.p_values[1] < 1e-4);
    assert!(result.p_values[0] > 0.5);

    assert!(result.conf_interval_lower[1] < 2.0 && result.conf_interval_upper[1] > 2.0);
    assert_relative_eq!(result.confidence_level, 0.95);
}

#[test]
fn test_advanced_statistics() {
    let (x, y) = common::small_noisy_line();

    let result = multiple_linear_regression(&y, &x, true, true).expect("fit should succeed");
    let advanced = result.advanced.as_ref().expect("advanced stats requested");

    let expected_residuals = [0.08, -0.12, 0.08, -0.12, 0.08];
    let residual_sd = 0.012_f64.sqrt();
    for i in 0..5 {
        assert_relative_eq!(advanced.predictions[i], 2.02 + 2.0 * i as f64, epsilon = 1e-9);
        assert_relative_eq!(advanced.residuals[i], expected_residuals[i], epsilon = 1e-9);
        assert_relative_eq!(
            advanced.standardized_residuals[i],
            expected_residuals[i] / residual_sd,
            epsilon = 1e-7
        );
    }

    // F = SSR / (SSE / 3) = 40 / 0.016
    assert_relative_eq!(advanced.f_statistic, 2500.0, epsilon = 1e-4);
    assert!(advanced.f_p_value < 1e-4);

    assert_eq!(advanced.y.nrows(), 5);
    assert!((0..5).all(|i| advanced.y[i] == y[i]));
    assert_eq!(advanced.x, x);
}

#[test]
fn test_statistics_without_constant() {
    // Σxy = 110.3, Σx² = 55, y'y = 221.25, SST (centred) = 40.048
    let (x, y) = common::small_noisy_line();

    let result = multiple_linear_regression(&y, &x, true, false).expect("fit should succeed");
    assert!(!result.has_constant);
    assert_eq!(result.n_parameters, 1);

    let slope = 110.3 / 55.0;
    let sse = 221.25 - 110.3 * 110.3 / 55.0;
    let r_squared = 1.0 - sse / 40.048;
    assert_relative_eq!(result.coefficients[0], slope, epsilon = 1e-12);
    assert_relative_eq!(result.ss_error, sse, epsilon = 1e-9);
    assert_relative_eq!(result.ss_total, 40.048, epsilon = 1e-9);
    assert_relative_eq!(result.r_squared, r_squared, epsilon = 1e-10);
    // (n - 1) / (n - p) = 4 / 4
    assert_relative_eq!(result.adjusted_r_squared, r_squared, epsilon = 1e-10);
    assert_relative_eq!(result.standard_error, (sse / 4.0).sqrt(), epsilon = 1e-9);

    // One parameter leaves zero numerator degrees of freedom.
    let advanced = result.advanced.as_ref().expect("advanced stats requested");
    assert!(advanced.f_statistic.is_infinite());
    assert!(advanced.f_p_value.is_nan());
}

#[test]
fn test_f_statistic_without_constant_uses_p_minus_one() {
    // An explicit column of ones reproduces the fit with an added constant.
    let (line, y) = common::small_noisy_line();
    let x = Matrix::from_fn(5, 2, |i, j| if j == 0 { 1.0 } else { line[(i, 0)] });

    let explicit = multiple_linear_regression(&y, &x, true, false).expect("fit should succeed");
    let added = multiple_linear_regression(&y, &line, true, true).expect("fit should succeed");

    let explicit_adv = explicit.advanced.as_ref().expect("advanced stats requested");
    let added_adv = added.advanced.as_ref().expect("advanced stats requested");

    // F = (R² / 1) / ((1 - R²) / 3) = 40 / 0.016
    assert_relative_eq!(explicit_adv.f_statistic, 2500.0, epsilon = 1e-4);
    assert_relative_eq!(explicit_adv.f_statistic, added_adv.f_statistic, max_relative = 1e-8);
    assert_relative_eq!(explicit_adv.f_p_value, added_adv.f_p_value, epsilon = 1e-12);
    assert_relative_eq!(
        explicit.adjusted_r_squared,
        1.0 - (4.0 / 3.0) * (0.048 / 40.048),
        epsilon = 1e-10
    );
}

#[test]
fn test_f_statistic_formula_without_constant() {
    let (x, y, _) = common::generate_linear_data(6, 2, 0.0, 0.1, 21);

    let result = multiple_linear_regression(&y, &x, true, false).expect("fit should succeed");
    let advanced = result.advanced.as_ref().expect("advanced stats requested");

    let (n, p) = (6.0, 2.0);
    let r2 = result.r_squared;
    let expected = (r2 / (p - 1.0)) / ((1.0 - r2) / (n - p));
    assert_relative_eq!(advanced.f_statistic, expected, max_relative = 1e-12);
}

#[test]
fn test_r_squared_bounds() {
    for seed in [1, 7, 99, 1234] {
        let (x, y, _) = common::generate_linear_data(40, 2, 1.0, 2.0, seed);
        let result = multiple_linear_regression(&y, &x, false, true).expect("fit should succeed");
        assert!(
            (0.0..=1.0).contains(&result.r_squared),
            "r_squared {} out of bounds for seed {seed}",
            result.r_squared
        );
        assert!(result.adjusted_r_squared <= result.r_squared);
    }
}

#[test]
fn test_sum_of_squares_decomposition() {
    let (x, y, _) = common::generate_linear_data(30, 2, -3.0, 0.5, 11);
    let result = multiple_linear_regression(&y, &x, true, true).expect("fit should succeed");

    assert_relative_eq!(
        result.ss_total,
        result.ss_regression + result.ss_error,
        epsilon = 1e-9
    );

    let advanced = result.advanced.as_ref().expect("advanced stats requested");
    let rss: f64 = advanced.residuals.iter().map(|r| r * r).sum();
    assert_relative_eq!(rss, result.ss_error, epsilon = 1e-8);
}

#[test]
fn test_score_matches_r_squared_on_training_data() {
    let (x, y, _) = common::generate_linear_data(50, 2, 0.5, 0.3, 3);
    let fitted = OlsRegressor::builder().build().fit(&x, &y).expect("fit should succeed");

    let score = fitted.score(&x, &y).expect("same shape");
    assert_relative_eq!(score, fitted.r_squared(), epsilon = 1e-9);
}

// ============================================================================
// Singular and Degenerate Inputs
// ============================================================================

#[test]
fn test_constant_column_is_singular() {
    let (x, y) = common::generate_constant_column_data(10);

    let err = multiple_linear_regression(&y, &x, false, true).unwrap_err();
    assert_eq!(err, RegressionError::SingularMatrix);
}

#[test]
fn test_collinear_columns_are_singular() {
    let (x, y) = common::generate_collinear_data(10);

    let err = multiple_linear_regression(&y, &x, true, true).unwrap_err();
    assert_eq!(err, RegressionError::SingularMatrix);
}

#[test]
fn test_constant_column_without_intercept_fits() {
    // Without the added constant the constant predictor plays its role.
    let (x, y) = common::generate_constant_column_data(10);

    let result = multiple_linear_regression(&y, &x, false, false).expect("fit should succeed");
    assert_relative_eq!(result.coefficients[0], 2.0, epsilon = 1e-8);
    assert_relative_eq!(result.coefficients[1], 0.2, epsilon = 1e-8);
    assert_relative_eq!(result.coefficients[2], 3.0, epsilon = 1e-8);
}

#[test]
fn test_large_offset_predictor_is_singular() {
    // Sxx = 10 is far below 1e-10 of the X'X diagonal (about 5e12).
    let (line, y) = common::small_noisy_line();
    let offset = Matrix::from_fn(5, 1, |i, _| 1e6 + line[(i, 0)]);

    let err = multiple_linear_regression(&y, &offset, false, true).unwrap_err();
    assert_eq!(err, RegressionError::SingularMatrix);

    // The same data, centred, fits.
    let centred = Matrix::from_fn(5, 1, |i, _| offset[(i, 0)] - 1e6);
    let result = multiple_linear_regression(&y, &centred, false, true).expect("fit should succeed");
    assert_relative_eq!(result.coefficients[1], 2.0, epsilon = 1e-9);
}

#[test]
fn test_dimension_mismatch() {
    let x = Matrix::from_fn(5, 2, |i, j| (i + j) as f64);
    let y = Col::from_fn(4, |i| i as f64);

    let err = multiple_linear_regression(&y, &x, true, true).unwrap_err();
    assert_eq!(
        err,
        RegressionError::DimensionMismatch {
            expected: 4,
            found: 5
        }
    );
}

#[test]
fn test_too_few_observations() {
    let x = Matrix::from_fn(2, 1, |i, _| i as f64);
    let y = Col::from_fn(2, |i| 1.0 + 2.0 * i as f64);

    let err = multiple_linear_regression(&y, &x, false, true).unwrap_err();
    assert_eq!(
        err,
        RegressionError::DegenerateInput(Degeneracy::TooFewObservations { n: 2, p: 2 })
    );
}

#[test]
fn test_too_few_observations_allowed_propagates_nan() {
    let x = Matrix::from_fn(2, 1, |i, _| i as f64);
    let y = Col::from_fn(2, |i| 1.0 + 2.0 * i as f64);

    let fitted = OlsRegressor::builder()
        .allow_degenerate(true)
        .build()
        .fit(&x, &y)
        .expect("degenerate input allowed");

    assert_relative_eq!(fitted.coefficients()[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(fitted.coefficients()[1], 2.0, epsilon = 1e-10);
    assert!(fitted.result().standard_error.is_nan());
    assert!(!fitted.result().is_valid());
}

#[test]
fn test_constant_response() {
    let x = Matrix::from_fn(6, 1, |i, _| i as f64);
    let y = Col::from_fn(6, |_| 4.0);

    let err = multiple_linear_regression(&y, &x, false, true).unwrap_err();
    assert_eq!(
        err,
        RegressionError::DegenerateInput(Degeneracy::ConstantResponse)
    );
}
