use nalgebra::{Matrix3, Vector1};

use crate::{ParameterState, RgeBuilder, RgeOp, RgeProblem};

pub type PoleState = ParameterState<f64, 1, 1>;

// dg/dt = g^2, g(t) = g0 / (1 - g0 t)
fn rhs(x: &PoleState, _t: f64, y: &mut PoleState) {
    y.set_zero();
    y.g[0] = x.g[0] * x.g[0];
}

/// A single coupling with a genuine pole at `t = 1 / g0`, starting from `g0 = 1`.
/// It crosses the perturbativity bound of 3.5 at `t = 1 - 1 / 3.5`.
pub fn dydt_y2_problem(builder: RgeBuilder) -> (RgeProblem<impl RgeOp<T = f64, V = PoleState>>, PoleState) {
    let y0 = PoleState::with_nloops(
        Vector1::new(1.0),
        Vector1::new(0.1),
        Matrix3::from_diagonal_element(0.5),
        Matrix3::zeros(),
        Matrix3::zeros(),
        1,
    );
    let problem = builder.t0(0.0).build_closure(rhs).unwrap();
    (problem, y0)
}
