/// Ternary expression.  Rust's `if` already is one, but `cargo fmt`
/// spreads it over five lines, and the border rules of the energy
/// function and the relaxation step read better as a table of one-line
/// choices.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
