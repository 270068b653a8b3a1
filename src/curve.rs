// Continuous pricing for dimension products. Price per square foot falls
// along a fitted quadratic between a small-area floor and a large-area
// ceiling. The coefficients are the fitted values, not an exact join at
// the breakpoints.
pub fn base_price_per_sq_ft(sq_ft: f64) -> f64 {
    if sq_ft <= 10.0 {
        return 5.20;
    }
    if sq_ft >= 80.0 {
        return 2.75;
    }
    (-0.000333333 * sq_ft.powi(2)) - (0.005 * sq_ft) + 5.2833333
}
