pub mod random;

#[macro_export]
macro_rules! assert_eq_delta {
    ($x:expr, $y:expr, $d:expr) => {
        assert!(
            ($x - $y).abs() <= $d,
            "{} vs {} (tolerance {})",
            $x,
            $y,
            $d
        );
    };
}
