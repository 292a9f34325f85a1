use crate::errors::*;

make_log_macro!(debug, "curve");

/// Exponential fit `y = k * a^x` through two calibration points.
///
/// Perceived brightness is roughly logarithmic in emitted light, so a
/// linear walk through the percentage domain has to move the raw value
/// along an exponential curve for the steps to look uniform.
#[derive(Clone, Copy, Debug)]
pub struct BrightnessCurve {
    k: f64,
    a: f64,
}

impl BrightnessCurve {
    /// Fit the unique exponential through `(x1, y1)` and `(x2, y2)`, where
    /// `domain` holds the percentage endpoints and `range` the raw
    /// brightness endpoints.
    ///
    /// Requires `x1 != x2` and `0 < y1 < y2`.
    pub fn fit(domain: [f64; 2], range: [u32; 2]) -> Result<Self> {
        let [x1, x2] = domain;
        let [min, max] = range;

        if x1 == x2 {
            return Err(LightError::DegenerateDomain);
        }
        if min == 0 {
            return Err(LightError::ZeroFloor);
        }
        if min >= max {
            return Err(LightError::InvalidRange { min, max });
        }

        let y1 = f64::from(min);
        let y2 = f64::from(max);
        let k = y2.powf(x1 / (x1 - x2)) * y1.powf(x2 / (x2 - x1));
        let a = (y1 / y2).powf((x1 - x2).recip());
        debug!("k = {k}, a = {a}");

        Ok(Self { k, a })
    }

    /// Raw brightness at `percent`, rounded to the nearest raw unit so
    /// that both calibration endpoints map back exactly.
    pub fn percent_to_raw(&self, percent: f64) -> u32 {
        (self.k * self.a.powf(percent)).round() as u32
    }

    /// Percentage at which the curve passes through `raw`.
    pub fn raw_to_percent(&self, raw: u32) -> Result<f64> {
        if raw == 0 {
            return Err(LightError::NonPositiveBrightness);
        }
        Ok((f64::from(raw) / self.k).ln() / self.a.ln())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PERCENT_DOMAIN;

    #[test]
    fn endpoints_hit_range_bounds() {
        let curve = BrightnessCurve::fit(PERCENT_DOMAIN, [10, 100]).unwrap();
        assert_eq!(curve.percent_to_raw(0.0), 10);
        assert_eq!(curve.percent_to_raw(100.0), 100);

        let curve = BrightnessCurve::fit(PERCENT_DOMAIN, [1, 96000]).unwrap();
        assert_eq!(curve.percent_to_raw(0.0), 1);
        assert_eq!(curve.percent_to_raw(100.0), 96000);
    }

    #[test]
    fn halfway_point_of_a_decade_range() {
        // k = 1, a = 100^(1/100), so 50% lands on sqrt(100) exactly.
        let curve = BrightnessCurve::fit(PERCENT_DOMAIN, [1, 100]).unwrap();
        assert_eq!(curve.percent_to_raw(50.0), 10);
    }

    #[test]
    fn forward_is_monotone() {
        let curve = BrightnessCurve::fit(PERCENT_DOMAIN, [1, 4000]).unwrap();
        let mut prev = 0;
        for x in 0..=100 {
            let raw = curve.percent_to_raw(f64::from(x));
            assert!(raw >= prev, "not monotone at {x}%: {raw} < {prev}");
            prev = raw;
        }
        assert!(curve.percent_to_raw(0.0) < curve.percent_to_raw(50.0));
        assert!(curve.percent_to_raw(50.0) < curve.percent_to_raw(100.0));
    }

    #[test]
    fn round_trip_within_quantization_error() {
        let curve = BrightnessCurve::fit(PERCENT_DOMAIN, [1, 100_000]).unwrap();
        for x in [40.0, 45.0, 50.0, 60.0, 75.0, 90.0, 100.0] {
            let raw = curve.percent_to_raw(x);
            let back = curve.raw_to_percent(raw).unwrap();
            assert!(
                (back - x).abs() < 0.05,
                "round trip of {x}% came back as {back}%"
            );
        }
    }

    #[test]
    fn degenerate_parameters_are_rejected() {
        assert!(matches!(
            BrightnessCurve::fit(PERCENT_DOMAIN, [10, 10]),
            Err(LightError::InvalidRange { min: 10, max: 10 })
        ));
        assert!(matches!(
            BrightnessCurve::fit(PERCENT_DOMAIN, [100, 10]),
            Err(LightError::InvalidRange { .. })
        ));
        assert!(matches!(
            BrightnessCurve::fit(PERCENT_DOMAIN, [0, 100]),
            Err(LightError::ZeroFloor)
        ));
        assert!(matches!(
            BrightnessCurve::fit([50.0, 50.0], [10, 100]),
            Err(LightError::DegenerateDomain)
        ));
    }

    #[test]
    fn zero_raw_cannot_be_inverted() {
        let curve = BrightnessCurve::fit(PERCENT_DOMAIN, [10, 100]).unwrap();
        assert!(matches!(
            curve.raw_to_percent(0),
            Err(LightError::NonPositiveBrightness)
        ));
    }
}
