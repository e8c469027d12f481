use std::f64::consts::PI;

use nalgebra::{Matrix3, Vector1, Vector3};

use crate::{ParameterState, RgeBuilder, RgeOp, RgeProblem, RgeSolution};

pub type GaugeState = ParameterState<f64, 3, 1>;

/// one-loop coefficients of the U(1)_Y (GUT normalised), SU(2)_L and SU(3)_c couplings
pub const B: [f64; 3] = [41.0 / 10.0, -19.0 / 6.0, -7.0];

fn loop_factor() -> f64 {
    1.0 / (16.0 * PI * PI)
}

// dg_i/dt = b_i g_i^3 / (16 pi^2)
// dYu/dt = -8 g_3^2 Yu / (16 pi^2)
// the self-coupling, Yd and Ye are frozen
fn rhs(x: &GaugeState, _t: f64, y: &mut GaugeState) {
    y.set_zero();
    for i in 0..3 {
        y.g[i] = B[i] * x.g[i].powi(3) * loop_factor();
    }
    y.yu = x.yu * (-8.0 * x.g[2] * x.g[2] * loop_factor());
}

pub fn gauge_one_loop_init() -> GaugeState {
    GaugeState::new(
        Vector3::new(0.46, 0.65, 1.2),
        Vector1::new(0.13),
        Matrix3::from_diagonal(&Vector3::new(1.2e-5, 7.3e-3, 0.95)),
        Matrix3::from_diagonal(&Vector3::new(2.9e-5, 5.5e-4, 2.4e-2)),
        Matrix3::from_diagonal(&Vector3::new(2.8e-6, 5.9e-4, 1.0e-2)),
    )
}

/// The exact flow from [gauge_one_loop_init] at `t0 = 0`.
pub fn gauge_one_loop_exact(t: f64) -> GaugeState {
    let mut x = gauge_one_loop_init();
    let x0 = x;
    for i in 0..3 {
        let g0 = x0.g[i];
        x.g[i] = g0 / (1.0 - 2.0 * B[i] * g0 * g0 * t * loop_factor()).sqrt();
    }
    let g3 = x0.g[2];
    let d = 1.0 - 2.0 * B[2] * g3 * g3 * t * loop_factor();
    x.yu = x0.yu * d.powf(4.0 / B[2]);
    x
}

/// One-loop running of the gauge couplings plus the QCD part of the up-type Yukawa running,
/// both of which have closed forms. `t` is the log of the energy scale over the start scale.
pub fn gauge_one_loop_problem(
    builder: RgeBuilder,
) -> (RgeProblem<impl RgeOp<T = f64, V = GaugeState>>, GaugeState, RgeSolution<GaugeState>) {
    let problem = builder.build_closure(rhs).unwrap();
    let mut soln = RgeSolution::default();
    for i in 1..=8 {
        let t = 4.0 * i as f64;
        soln.push(gauge_one_loop_exact(t), t);
    }
    (problem, gauge_one_loop_init(), soln)
}
