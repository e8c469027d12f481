//! # rgeflow
//!
//! Parameter states for renormalization group flows, and explicit Runge-Kutta drivers
//! that integrate them.
//!
//! A [ParameterState] bundles the couplings of a gauge theory at one energy scale: the
//! gauge couplings `g`, the scalar self-couplings `la` and the three 3x3 Yukawa matrices
//! `yu`, `yd`, `ye`, together with the loop order `nloops` at which the beta functions
//! are evaluated. The state forms a real vector space under element-wise arithmetic
//! (see [VectorSpace]), so any driver written against that trait can integrate it.
//!
//! Divergence of the flow (a Landau pole) is detected by [ParameterState::check], which
//! fails once any entry leaves the range `|x| < 3.5` or stops being finite.
//!
//! ## Running a flow
//!
//! Use [RgeBuilder] to set the start time, step size and tolerances, and to wrap the beta
//! functions into an [RgeProblem]. The driver [ExplicitRk] then integrates the problem
//! with a fixed step ([ExplicitRk::integrate_const]) or with error control
//! ([ExplicitRk::integrate_adaptive]), checking the state after every accepted step.
//!
//! The available [Tableau]s are forward Euler, explicit midpoint, classical RK4, and the
//! embedded Bogacki-Shampine 3(2) and Dormand-Prince 5(4) pairs. Only the embedded pairs
//! can be used with error control.
//!
//! ## Custom right-hand sides
//!
//! A closure `rhs(x, t, y)` is enough for most uses, see [RgeBuilder::build_closure]. To
//! carry extra data or statistics, implement [RgeOp] directly and use [RgeBuilder::build].

pub mod error;
pub mod ode_solver;
pub mod op;
pub mod scalar;
pub mod state;
pub mod vector;

pub use error::{BuilderError, FlowError, RgeError};
pub use ode_solver::{
    builder::RgeBuilder,
    method::{ExplicitRk, RkStep, SolverStatistics},
    problem::RgeProblem,
    solution::RgeSolution,
    tableau::Tableau,
};
pub use op::{closure::RgeClosure, OpStatistics, RgeOp};
pub use scalar::Scalar;
pub use state::{
    abs, GaugeVector, ParameterState, SelfCouplingVector, YukawaMatrix, DEFAULT_NLOOPS,
    LANDAU_POLE_BOUND,
};
pub use vector::{StateCheck, VectorSpace};
