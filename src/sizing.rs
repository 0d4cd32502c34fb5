/*
 * Dialog-unit sizing context. Win32 layout constants are expressed in dialog
 * units so they scale with the system font; a `Sizing` snapshot carries the
 * per-axis base metrics needed to convert them to pixels. Contexts are cheap,
 * acquired for one layout pass, and never retained across passes.
 */

/// Per-axis base metrics for dialog-unit conversion. On Windows these come
/// from the window's text metrics (average character width and line height);
/// tests construct them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizing {
    pub base_x: i32,
    pub base_y: i32,
}

impl Sizing {
    pub fn new(base_x: i32, base_y: i32) -> Self {
        Sizing { base_x, base_y }
    }

    /// Converts horizontal dialog units to pixels. Four horizontal units
    /// equal one base-width unit.
    pub fn dlg_units_to_x(&self, units: i32) -> i32 {
        mul_div(units, self.base_x, 4)
    }

    /// Converts vertical dialog units to pixels. Eight vertical units equal
    /// one base-height unit.
    pub fn dlg_units_to_y(&self, units: i32) -> i32 {
        mul_div(units, self.base_y, 8)
    }
}

/// `(number * numerator) / denominator` with the intermediate widened to 64
/// bits and the result rounded half away from zero, matching Win32 `MulDiv`.
fn mul_div(number: i32, numerator: i32, denominator: i32) -> i32 {
    debug_assert!(denominator != 0);
    let product = i64::from(number) * i64::from(numerator);
    let denominator = i64::from(denominator);
    let half = denominator.abs() / 2;
    let rounded = if product >= 0 {
        (product + half) / denominator
    } else {
        (product - half) / denominator
    };
    rounded as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_bases_give_one_to_one_conversion() {
        // base_x = 4 and base_y = 8 make one dialog unit exactly one pixel.
        let sizing = Sizing::new(4, 8);
        assert_eq!(sizing.dlg_units_to_x(7), 7);
        assert_eq!(sizing.dlg_units_to_y(7), 7);
    }

    #[test]
    fn test_conversion_scales_with_base_metrics() {
        let sizing = Sizing::new(8, 16);
        assert_eq!(sizing.dlg_units_to_x(7), 14);
        assert_eq!(sizing.dlg_units_to_y(7), 14);
    }

    #[test]
    fn test_mul_div_rounds_half_away_from_zero() {
        assert_eq!(mul_div(1, 1, 2), 1);
        assert_eq!(mul_div(-1, 1, 2), -1);
        assert_eq!(mul_div(7, 6, 4), 11); // 42/4 = 10.5 rounds up
    }

    #[test]
    fn test_mul_div_widens_intermediate_product() {
        // i32 overflow in the product must not corrupt the result.
        assert_eq!(mul_div(1_000_000, 3_000, 1_000), 3_000_000);
    }
}
