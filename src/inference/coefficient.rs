//! Coefficient inference calculations.

use crate::linalg::Matrix;
use faer::Col;
use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

/// Computes inference statistics for regression coefficients.
pub struct CoefficientInference;

impl CoefficientInference {
    /// Compute standard errors for OLS coefficients.
    ///
    /// SE(β_j) = s * sqrt((X'X)^(-1)_{jj}), where s is the residual standard error.
    pub fn standard_errors(xtx_inverse: &Matrix, standard_error: f64) -> Col<f64> {
        let diagonal = xtx_inverse.diagonal();
        Col::from_fn(diagonal.nrows(), |j| {
            if diagonal[j] >= 0.0 {
                standard_error * diagonal[j].sqrt()
            } else {
                f64::NAN
            }
        })
    }

    /// Compute t-statistics for coefficients.
    ///
    /// t_j = β_j / SE(β_j). A zero standard error (exact fit) gives an
    /// infinite statistic, or NaN for a zero coefficient.
    pub fn t_statistics(coefficients: &Col<f64>, std_errors: &Col<f64>) -> Col<f64> {
        Col::from_fn(coefficients.nrows(), |j| coefficients[j] / std_errors[j])
    }

    /// Compute p-values from t-statistics.
    ///
    /// p_j = 2 * P(|T| > |t_j|) where T ~ t(df)
    pub fn p_values(t_statistics: &Col<f64>, df: f64) -> Col<f64> {
        let n = t_statistics.nrows();

        let t_dist = match Self::t_distribution(df) {
            Some(d) => d,
            None => return Col::from_fn(n, |_| f64::NAN),
        };

        Col::from_fn(n, |j| {
            let t = t_statistics[j];
            if t.is_nan() {
                f64::NAN
            } else if t.is_infinite() {
                0.0
            } else {
                2.0 * (1.0 - t_dist.cdf(t.abs()))
            }
        })
    }

    /// Compute confidence intervals for coefficients.
    ///
    /// CI_j = β_j ± t_{α/2, df} * SE(β_j)
    pub fn confidence_intervals(
        coefficients: &Col<f64>,
        std_errors: &Col<f64>,
        df: f64,
        confidence_level: f64,
    ) -> (Col<f64>, Col<f64>) {
        let n = coefficients.nrows();

        let t_dist = match Self::t_distribution(df) {
            Some(d) => d,
            None => return (Col::from_fn(n, |_| f64::NAN), Col::from_fn(n, |_| f64::NAN)),
        };

        let alpha = 1.0 - confidence_level;
        let t_crit = t_dist.inverse_cdf(1.0 - alpha / 2.0);

        let lower = Col::from_fn(n, |j| coefficients[j] - t_crit * std_errors[j]);
        let upper = Col::from_fn(n, |j| coefficients[j] + t_crit * std_errors[j]);

        (lower, upper)
    }

    /// Upper-tail probability of the F-statistic with (df_model, df_resid) degrees of freedom.
    pub fn f_p_value(f_statistic: f64, df_model: f64, df_resid: f64) -> f64 {
        if f_statistic.is_nan() || !(df_model > 0.0 && df_resid > 0.0) {
            return f64::NAN;
        }
        if f_statistic.is_infinite() {
            return 0.0;
        }

        FisherSnedecor::new(df_model, df_resid).map_or(f64::NAN, |d| 1.0 - d.cdf(f_statistic))
    }

    fn t_distribution(df: f64) -> Option<StudentsT> {
        if df > 0.0 && df.is_finite() {
            StudentsT::new(0.0, 1.0, df).ok()
        } else {
            None
        }
    }
}
