//! Embedding vector arithmetic.
//!
//! All similarity math accumulates in `f64` even though annotation providers
//! hand out `f32` embeddings, so feature values do not depend on summation
//! order noise at `f32` precision.

/// Euclidean norm of `v`.
#[inline]
pub fn norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|&x| f64::from(x) * f64::from(x))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity of two vectors.
///
/// Returns exactly `0.0` when either vector has zero norm, when the vectors are
/// empty or when their dimensions differ.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (&av, &bv)| {
                let av = f64::from(av);
                let bv = f64::from(bv);
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Adds `scale * v` into `acc` elementwise (`acc` is grown to `v.len()` if shorter).
#[inline]
pub fn add_scaled(acc: &mut Vec<f32>, v: &[f32], scale: f32) {
    if acc.len() < v.len() {
        acc.resize(v.len(), 0.0);
    }
    for (a, &x) in acc.iter_mut().zip(v.iter()) {
        *a += x * scale;
    }
}

/// Scales `v` to unit length in place (zero vectors are left untouched).
pub fn normalize(v: &mut [f32]) {
    let n = norm(v);
    if n > 0.0 {
        for x in v.iter_mut() {
            *x = (f64::from(*x) / n) as f32;
        }
    }
}
