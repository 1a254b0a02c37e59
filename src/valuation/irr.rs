//! Internal Rate of Return (IRR) calculation
//!
//! Solves for the discount rate at which the NPV of the free-cash-flow
//! sequence is zero.

/// Calculate the Internal Rate of Return for a series of annual cash flows
/// using the Newton-Raphson method with a bisection fallback.
///
/// # Arguments
/// * `cashflows` - Annual cash flows indexed by year (positive = inflow,
///   negative = outflow), year 0 first
///
/// # Returns
/// * `Option<f64>` - Annual IRR as a decimal (e.g., 0.14 for 14%), or `None`
///   if no solution exists in the search bracket. Same-signed cash flows have
///   no IRR and always return `None` rather than a misleading approximation.
pub fn internal_rate_of_return(cashflows: &[f64]) -> Option<f64> {
    if cashflows.is_empty() {
        return None;
    }

    // All-zero sequence is a degenerate root at any rate
    if cashflows.iter().all(|&cf| cf.abs() < 1e-10) {
        return Some(0.0);
    }

    // At least one sign change is required for an IRR to exist
    let has_positive = cashflows.iter().any(|&cf| cf > 1e-10);
    let has_negative = cashflows.iter().any(|&cf| cf < -1e-10);
    if !has_positive || !has_negative {
        return None;
    }

    let mut rate = 0.05; // Initial guess: 5%
    let tolerance = 1e-10;
    let max_iterations = 1000;

    for _ in 0..max_iterations {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);

        if dnpv.abs() < 1e-20 {
            // Derivative too small, try bisection instead
            return irr_bisection(cashflows);
        }

        let new_rate = (rate - npv / dnpv).clamp(-0.99, 10.0);

        if (new_rate - rate).abs() < tolerance {
            // A stalled step is not enough: the clamp can pin the iterate at a
            // bracket bound, so accept only if the NPV residual vanishes too.
            let (residual, _) = npv_and_derivative(cashflows, new_rate);
            let scale = cashflows.iter().fold(1.0_f64, |m, &cf| m.max(cf.abs()));
            if residual.abs() < scale * 1e-9 {
                return Some(new_rate);
            }
            return irr_bisection(cashflows);
        }

        rate = new_rate;
    }

    // Newton-Raphson didn't converge, try bisection
    irr_bisection(cashflows)
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        let discount = (1.0 + rate).powi(t as i32);
        npv += cf / discount;
        if t > 0 {
            dnpv -= (t as f64) * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (npv, dnpv)
}

/// Fallback IRR calculation using bisection over [-99%, 1000%]
fn irr_bisection(cashflows: &[f64]) -> Option<f64> {
    let mut low = -0.99_f64;
    let mut high = 10.0_f64;
    let tolerance = 1e-10;
    let max_iterations = 1000;

    let npv_low = npv_at_rate(cashflows, low);
    let npv_high = npv_at_rate(cashflows, high);

    // Check that we have a root in this interval
    if npv_low * npv_high > 0.0 {
        return None;
    }

    for _ in 0..max_iterations {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(cashflows, mid);

        if npv_mid.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(mid);
        }

        if npv_mid * npv_at_rate(cashflows, low) < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    None
}

/// Calculate NPV at a given annual rate
fn npv_at_rate(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_irr() {
        // Investment of $1000, returns $1100 after 1 year
        let cashflows = vec![-1000.0, 1100.0];

        let irr = internal_rate_of_return(&cashflows).unwrap();
        assert!((irr - 0.10).abs() < 1e-6, "Expected 10% IRR, got {}", irr);
    }

    #[test]
    fn test_multi_year_irr() {
        // $1000 out, three $500 inflows: IRR ~ 23.38%
        let cashflows = vec![-1000.0, 500.0, 500.0, 500.0];

        let irr = internal_rate_of_return(&cashflows).unwrap();
        assert!((irr - 0.2338).abs() < 0.001, "got {}", irr);
    }

    #[test]
    fn test_no_sign_change_has_no_irr() {
        assert_eq!(internal_rate_of_return(&[-100.0, -50.0, -25.0]), None);
        assert_eq!(internal_rate_of_return(&[100.0, 50.0, 25.0]), None);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(internal_rate_of_return(&[]), None);
    }

    #[test]
    fn test_sign_change_without_real_root() {
        // -1 + 3x - 2.6x^2 (x = 1/(1+r)) has a negative discriminant: the
        // flows change sign twice but admit no real rate in the bracket
        assert_eq!(internal_rate_of_return(&[-1.0, 3.0, -2.6]), None);
    }

    #[test]
    fn test_near_tangent_flows_have_no_irr() {
        // NPV grazes zero without crossing it; neither a stalled Newton step
        // nor a bracket bound may be reported as a root
        assert_eq!(internal_rate_of_return(&[-1.0, 2.0, -1.0001]), None);
    }

    #[test]
    fn test_irr_zeroes_npv() {
        let cashflows = vec![-110.0, 36.5, 47.0, 54.4, 62.7, 167.6];
        let irr = internal_rate_of_return(&cashflows).unwrap();
        assert!(npv_at_rate(&cashflows, irr).abs() < 1e-4);
    }
}
