use std::rc::Rc;

use crate::op::RgeOp;

/// Everything a driver needs to run a flow, apart from the initial state: the
/// right-hand side, the start time and the step-size controls. Built with
/// [crate::RgeBuilder].
pub struct RgeProblem<Eqn: RgeOp> {
    pub eqn: Rc<Eqn>,
    pub t0: Eqn::T,
    pub h0: Eqn::T,
    pub h_min: Eqn::T,
    pub rtol: Eqn::T,
    pub atol: Eqn::T,
    pub max_steps: usize,
}

// impl clone
impl<Eqn: RgeOp> Clone for RgeProblem<Eqn> {
    fn clone(&self) -> Self {
        Self {
            eqn: self.eqn.clone(),
            t0: self.t0,
            h0: self.h0,
            h_min: self.h_min,
            rtol: self.rtol,
            atol: self.atol,
            max_steps: self.max_steps,
        }
    }
}

impl<Eqn: RgeOp> RgeProblem<Eqn> {
    pub fn new(
        eqn: Eqn,
        t0: Eqn::T,
        h0: Eqn::T,
        h_min: Eqn::T,
        rtol: Eqn::T,
        atol: Eqn::T,
        max_steps: usize,
    ) -> Self {
        Self {
            eqn: Rc::new(eqn),
            t0,
            h0,
            h_min,
            rtol,
            atol,
            max_steps,
        }
    }
}
