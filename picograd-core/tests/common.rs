// Shared helpers for the integration tests.

/// Installs a test logger once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic initializer: yields `sin(1.7 * k)` for `k = 1, 2, ...`.
#[allow(dead_code)]
pub fn sine_init() -> impl FnMut() -> f64 {
    let mut k = 0.0_f64;
    move || {
        k += 1.0;
        (1.7 * k).sin()
    }
}
