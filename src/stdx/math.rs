pub(crate) trait MathExt {
    /// Rounds `self` to one decimal place.
    ///
    /// Rounding is done on the scaled value, so halves round up for positive
    /// inputs (`4.25 -> 4.3`).
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(4.25f64.round_to_tenths(), 4.3);
    /// assert_eq!(4.24f64.round_to_tenths(), 4.2);
    /// assert_eq!(5.0f64.round_to_tenths(), 5.0);
    /// ```
    fn round_to_tenths(self) -> Self;
}

impl MathExt for f64 {
    fn round_to_tenths(self) -> Self {
        (self * 10.0).round() / 10.0
    }
}
