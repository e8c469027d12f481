use nalgebra::Vector2;

use crate::{RgeBuilder, RgeOp, RgeProblem, RgeSolution};

type V = Vector2<f64>;

// dy/dt = -ay (a = [0.1, 1.0])
fn rhs(x: &V, _t: f64, y: &mut V) {
    y[0] = -0.1 * x[0];
    y[1] = -1.0 * x[1];
}

/// Linear decay on a bare nalgebra vector, with the exact solution at `t = 0.1, 0.2, ..., 1.0`.
pub fn exponential_decay_problem(
    builder: RgeBuilder,
) -> (RgeProblem<impl RgeOp<T = f64, V = V>>, V, RgeSolution<V>) {
    let y0 = V::new(1.0, 1.0);
    let problem = builder.t0(0.0).build_closure(rhs).unwrap();
    let mut soln = RgeSolution::default();
    for i in 1..=10 {
        let t = i as f64 / 10.0;
        soln.push(V::new((-0.1 * t).exp(), (-t).exp()), t);
    }
    (problem, y0, soln)
}
