use criterion::{criterion_group, criterion_main, Criterion};
use rgeflow::{
    ode_solver::test_models::{
        exponential_decay::exponential_decay_problem, gauge_one_loop::gauge_one_loop_problem,
    },
    ExplicitRk, RgeBuilder, Tableau,
};

fn criterion_benchmark(c: &mut Criterion) {
    macro_rules! bench {
        ($name:ident, $model_problem:ident, $solver:expr, $integrate:ident, $builder:expr) => {
            c.bench_function(stringify!($name), |b| {
                let (problem, x0, soln) = $model_problem($builder);
                let t1 = *soln.t.last().unwrap();
                b.iter(|| {
                    let mut s = $solver;
                    s.$integrate(&problem, x0.clone(), t1).unwrap()
                })
            });
        };
    }

    bench!(
        dormand_prince_exponential_decay,
        exponential_decay_problem,
        ExplicitRk::<f64>::default(),
        integrate_adaptive,
        RgeBuilder::new().rtol(1e-8).atol(1e-8)
    );
    bench!(
        rk4_exponential_decay,
        exponential_decay_problem,
        ExplicitRk::<f64>::rk4(),
        integrate_const,
        RgeBuilder::new()
    );
    bench!(
        dormand_prince_gauge_one_loop,
        gauge_one_loop_problem,
        ExplicitRk::<f64>::default(),
        integrate_adaptive,
        RgeBuilder::new().rtol(1e-8).atol(1e-10)
    );
    bench!(
        bogacki_shampine_gauge_one_loop,
        gauge_one_loop_problem,
        ExplicitRk::<f64>::new(Tableau::bogacki_shampine()),
        integrate_adaptive,
        RgeBuilder::new().rtol(1e-8).atol(1e-10)
    );
    bench!(
        rk4_gauge_one_loop,
        gauge_one_loop_problem,
        ExplicitRk::<f64>::rk4(),
        integrate_const,
        RgeBuilder::new().h0(0.1)
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
