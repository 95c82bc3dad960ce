use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Half-width of the default uniform initialization, `1 / fan_in`.
pub fn uniform_bound(fan_in: usize) -> f64 {
    1.0 / fan_in as f64
}

/// Array of `shape` drawn element-wise from `U[-bound, bound]`.
pub fn uniform_array<R: Rng + ?Sized>(shape: &[usize], bound: f64, rng: &mut R) -> ArrayD<f64> {
    let dist = Uniform::new_inclusive(-bound, bound);
    ArrayD::from_shape_simple_fn(IxDyn(shape), || dist.sample(rng))
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
