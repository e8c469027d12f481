pub mod builder;
pub mod method;
pub mod problem;
pub mod solution;
pub mod tableau;
pub mod test_models;

#[cfg(test)]
mod tests {
    use nalgebra::Vector1;

    use super::test_models::{
        dydt_y2::dydt_y2_problem,
        exponential_decay::exponential_decay_problem,
        gauge_one_loop::{gauge_one_loop_exact, gauge_one_loop_init, gauge_one_loop_problem},
    };
    use crate::error::{FlowError, RgeError};
    use crate::vector::assert_eq_st;
    use crate::{
        ExplicitRk, RgeBuilder, RgeOp, RgeProblem, RgeSolution, StateCheck, Tableau, VectorSpace,
    };

    fn test_flow<Eqn>(
        solver: &mut ExplicitRk<f64>,
        problem: &RgeProblem<Eqn>,
        x0: &Eqn::V,
        exact: &RgeSolution<Eqn::V>,
        adaptive: bool,
        tol: f64,
    ) where
        Eqn: RgeOp<T = f64>,
        Eqn::V: StateCheck,
    {
        for (&t, expect) in exact.t.iter().zip(exact.y.iter()) {
            let soln = if adaptive {
                solver.integrate_adaptive(problem, x0.clone(), t)
            } else {
                solver.integrate_const(problem, x0.clone(), t)
            }
            .unwrap();
            let (t_last, y) = soln.last().unwrap();
            assert_eq!(t_last, t);
            assert_eq_st(y, expect, tol);
        }
    }

    fn flow_error(err: RgeError) -> FlowError {
        match err {
            RgeError::FlowError(err) => err,
            err => panic!("expected a flow error, got {}", err),
        }
    }

    #[test]
    fn test_rk4_exponential_decay() {
        let (problem, x0, exact) = exponential_decay_problem(RgeBuilder::new().h0(1e-2));
        let mut s = ExplicitRk::rk4();
        test_flow(&mut s, &problem, &x0, &exact, false, 1e-9);

        // to t = 1 in 100 steps of four stages each
        let stats = s.get_statistics();
        assert_eq!(stats.number_of_steps, 100);
        assert_eq!(stats.number_of_rhs_evals, 4 * stats.number_of_steps);
        assert_eq!(stats.initial_step_size, 1e-2);
    }

    #[test]
    fn test_dormand_prince_exponential_decay() {
        let (problem, x0, exact) =
            exponential_decay_problem(RgeBuilder::new().rtol(1e-8).atol(1e-8));
        let mut s = ExplicitRk::default();
        test_flow(&mut s, &problem, &x0, &exact, true, 1e-6);
        assert!(s.get_statistics().number_of_steps > 0);
    }

    #[test]
    fn test_bogacki_shampine_exponential_decay() {
        let (problem, x0, exact) =
            exponential_decay_problem(RgeBuilder::new().rtol(1e-8).atol(1e-8));
        let mut s = ExplicitRk::new(Tableau::bogacki_shampine());
        test_flow(&mut s, &problem, &x0, &exact, true, 1e-5);
    }

    #[test]
    fn test_low_order_tableaux_converge() {
        let (problem, x0, exact) = exponential_decay_problem(RgeBuilder::new().h0(1e-3));
        test_flow(&mut ExplicitRk::new(Tableau::euler()), &problem, &x0, &exact, false, 1e-3);
        test_flow(&mut ExplicitRk::new(Tableau::midpoint()), &problem, &x0, &exact, false, 1e-6);
    }

    #[test]
    fn test_gauge_one_loop_forward() {
        let (problem, x0, exact) = gauge_one_loop_problem(RgeBuilder::new().rtol(1e-8).atol(1e-10));
        test_flow(&mut ExplicitRk::default(), &problem, &x0, &exact, true, 1e-6);

        let (problem, x0, exact) = gauge_one_loop_problem(RgeBuilder::new().h0(0.1));
        test_flow(&mut ExplicitRk::rk4(), &problem, &x0, &exact, false, 1e-8);
    }

    #[test]
    fn test_gauge_one_loop_backward() {
        let t_high = 32.0;
        let (problem, _x0, _exact) =
            gauge_one_loop_problem(RgeBuilder::new().t0(t_high).rtol(1e-8).atol(1e-10));
        let x_high = gauge_one_loop_exact(t_high);
        let mut s = ExplicitRk::default();
        let soln = s.integrate_adaptive(&problem, x_high, 0.0).unwrap();
        let (t_last, y) = soln.last().unwrap();
        assert_eq!(t_last, 0.0);
        assert_eq_st(y, &gauge_one_loop_init(), 1e-6);
        assert!(soln.t.windows(2).all(|w| w[1] < w[0]));
        assert!(s.get_statistics().initial_step_size < 0.0);
        assert_eq!(y.nloops(), x_high.nloops());
    }

    #[test]
    fn test_solution_records_every_accepted_step() {
        let (problem, x0, _exact) = gauge_one_loop_problem(RgeBuilder::new().h0(0.25));
        let mut s = ExplicitRk::rk4();
        let soln = s.integrate_const(&problem, x0, 1.1).unwrap();
        // 0.0, 0.25, .., 1.0 and the shortened last step to 1.1
        assert_eq!(soln.len(), 6);
        assert_eq!(soln.t[0], 0.0);
        assert_eq!(soln.y[0], x0);
        assert_eq!(soln.t[5], 1.1);
        assert_eq!(s.get_statistics().number_of_steps, 5);
        assert!((s.get_statistics().final_step_size - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_rhs_evals_match_op_calls() {
        let (problem, x0, _exact) = gauge_one_loop_problem(RgeBuilder::new());
        let mut s = ExplicitRk::default();
        s.integrate_adaptive(&problem, x0, 10.0).unwrap();
        let stats = s.get_statistics();
        assert_eq!(
            stats.number_of_rhs_evals,
            problem.eqn.statistics().number_of_calls
        );
        assert_eq!(
            stats.number_of_rhs_evals,
            7 * (stats.number_of_steps + stats.number_of_error_test_failures)
        );
    }

    #[test]
    fn test_landau_pole_const() {
        let (problem, x0) = dydt_y2_problem(RgeBuilder::new().h0(1e-2));
        let err = ExplicitRk::rk4()
            .integrate_const(&problem, x0, 2.0)
            .unwrap_err();
        match flow_error(err) {
            FlowError::LandauPole { t } => assert!(t > 0.71 && t < 0.73, "t = {}", t),
            err => panic!("unexpected error {}", err),
        }
    }

    #[test]
    fn test_landau_pole_adaptive() {
        let (problem, x0) = dydt_y2_problem(RgeBuilder::new());
        let err = ExplicitRk::default()
            .integrate_adaptive(&problem, x0, 2.0)
            .unwrap_err();
        match flow_error(err) {
            FlowError::LandauPole { t } => assert!(t > 0.71 && t <= 1.0, "t = {}", t),
            err => panic!("unexpected error {}", err),
        }
    }

    #[test]
    fn test_invalid_initial_state() {
        let (problem, mut x0, _exact) = gauge_one_loop_problem(RgeBuilder::new());
        x0.set_nloops(0);
        let err = ExplicitRk::default()
            .integrate_adaptive(&problem, x0, 1.0)
            .unwrap_err();
        assert!(matches!(flow_error(err), FlowError::InvalidInitialState));

        let mut x0 = gauge_one_loop_init();
        x0.yd[(2, 0)] = 4.0;
        let err = ExplicitRk::rk4()
            .integrate_const(&problem, x0, 1.0)
            .unwrap_err();
        assert!(matches!(flow_error(err), FlowError::InvalidInitialState));
    }

    #[test]
    fn test_empty_interval() {
        let (problem, x0, _exact) = exponential_decay_problem(RgeBuilder::new());
        let err = ExplicitRk::rk4()
            .integrate_const(&problem, x0, 0.0)
            .unwrap_err();
        assert!(matches!(flow_error(err), FlowError::EmptyInterval { .. }));
    }

    #[test]
    fn test_adaptive_needs_error_estimate() {
        let (problem, x0, _exact) = exponential_decay_problem(RgeBuilder::new());
        let err = ExplicitRk::rk4()
            .integrate_adaptive(&problem, x0, 1.0)
            .unwrap_err();
        assert!(matches!(flow_error(err), FlowError::NoErrorEstimate));
    }

    #[test]
    fn test_max_steps_exceeded() {
        let (problem, x0, _exact) = exponential_decay_problem(RgeBuilder::new().max_steps(5));
        let err = ExplicitRk::rk4()
            .integrate_const(&problem, x0, 1.0)
            .unwrap_err();
        match flow_error(err) {
            FlowError::MaxStepsExceeded { max_steps, time } => {
                assert_eq!(max_steps, 5);
                assert!((time - 0.05).abs() < 1e-12);
            }
            err => panic!("unexpected error {}", err),
        }
    }

    #[test]
    fn test_nan_rhs() {
        let problem = RgeBuilder::new()
            .h_min(1e-6)
            .build_closure(|_x: &Vector1<f64>, _t: f64, y: &mut Vector1<f64>| {
                y[0] = f64::NAN;
            })
            .unwrap();

        // every step fails the error test until the step size runs out
        let mut s = ExplicitRk::default();
        let err = s
            .integrate_adaptive(&problem, Vector1::new(1.0), 1.0)
            .unwrap_err();
        assert!(matches!(flow_error(err), FlowError::StepSizeTooSmall { .. }));
        assert_eq!(s.get_statistics().number_of_steps, 0);
        assert!(s.get_statistics().number_of_error_test_failures > 0);

        // without error control the first accepted state is caught by the check
        let err = ExplicitRk::rk4()
            .integrate_const(&problem, Vector1::new(1.0), 1.0)
            .unwrap_err();
        assert!(matches!(flow_error(err), FlowError::LandauPole { .. }));
    }

    #[test]
    fn test_step_on_bare_vector() {
        let (problem, x0, _exact) = exponential_decay_problem(RgeBuilder::new());
        let mut s = ExplicitRk::default();
        let step = s.step(&problem, &x0, 0.0, 0.1);
        assert_eq!(step.dy, nalgebra::Vector2::new(-0.1, -1.0));
        assert!(VectorSpace::norm_inf(step.error.as_ref().unwrap()) < 1e-6);
        assert!((step.y[1] - (-0.1f64).exp()).abs() < 1e-6);
        assert_eq!(s.get_statistics().number_of_rhs_evals, 7);
    }
}
