use crate::error::{MathError, MathResult};

/// Rejects NaN and infinite values, naming `param` in the error.
#[inline]
pub(crate) fn ensure_finite(param: &'static str, value: f64) -> MathResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::trace!("rejecting non-finite {}={}", param, value);
        Err(MathError::NonFinite { param, value })
    }
}

/// Checks a batch of named values, stopping at the first non-finite one.
pub(crate) fn ensure_all_finite(values: &[(&'static str, f64)]) -> MathResult<()> {
    for &(param, value) in values {
        ensure_finite(param, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_values_pass_through() {
        assert_eq!(ensure_finite("k", 2.5), Ok(2.5));
        assert_eq!(ensure_finite("k", -0.0), Ok(-0.0));
        assert_eq!(ensure_finite("k", f64::MAX), Ok(f64::MAX));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(matches!(
            ensure_finite("k", f64::NAN),
            Err(MathError::NonFinite { param: "k", .. })
        ));
        assert_eq!(
            ensure_finite("theta", f64::NEG_INFINITY),
            Err(MathError::NonFinite {
                param: "theta",
                value: f64::NEG_INFINITY
            })
        );
    }

    #[test]
    fn test_first_failure_is_reported() {
        let result = ensure_all_finite(&[("x", 1.0), ("y", f64::INFINITY), ("z", f64::NAN)]);
        assert!(matches!(result, Err(MathError::NonFinite { param: "y", .. })));
        assert!(ensure_all_finite(&[("x", 1.0), ("y", 2.0)]).is_ok());
    }
}
