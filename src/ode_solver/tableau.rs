use nalgebra::{DMatrix, DVector};

use crate::Scalar;

/// Butcher tableau of an explicit Runge-Kutta method.
///
/// `a` is strictly lower triangular, `b` are the weights of the propagated solution and
/// `c` the stage nodes. When the method has an embedded lower order solution `b_hat`,
/// `d = b - b_hat` holds the weights of the local error estimate.
pub struct Tableau<T: Scalar> {
    a: DMatrix<T>,
    b: DVector<T>,
    c: DVector<T>,
    d: Option<DVector<T>>,
    order: usize,
}

fn ratio<T: Scalar>(num: f64, den: f64) -> T {
    T::from(num / den)
}

impl<T: Scalar> Tableau<T> {
    /// forward Euler, first order
    pub fn euler() -> Self {
        let a = DMatrix::zeros(1, 1);
        let b = DVector::from_vec(vec![T::one()]);
        let c = DVector::from_vec(vec![T::zero()]);
        Self::new(a, b, c, None, 1)
    }

    /// explicit midpoint rule, second order
    pub fn midpoint() -> Self {
        let mut a = DMatrix::zeros(2, 2);
        a[(1, 0)] = ratio(1.0, 2.0);
        let b = DVector::from_vec(vec![T::zero(), T::one()]);
        let c = DVector::from_vec(vec![T::zero(), ratio(1.0, 2.0)]);
        Self::new(a, b, c, None, 2)
    }

    /// classical fourth order Runge-Kutta
    pub fn rk4() -> Self {
        let mut a = DMatrix::zeros(4, 4);
        a[(1, 0)] = ratio(1.0, 2.0);
        a[(2, 1)] = ratio(1.0, 2.0);
        a[(3, 2)] = T::one();
        let b = DVector::from_vec(vec![
            ratio(1.0, 6.0),
            ratio(1.0, 3.0),
            ratio(1.0, 3.0),
            ratio(1.0, 6.0),
        ]);
        let c = DVector::from_vec(vec![T::zero(), ratio(1.0, 2.0), ratio(1.0, 2.0), T::one()]);
        Self::new(a, b, c, None, 4)
    }

    /// Bogacki-Shampine 3(2) pair
    ///
    /// P. Bogacki and L.F. Shampine, A 3(2) pair of Runge-Kutta formulas, Appl. Math. Lett. 2 (1989) 321-325.
    pub fn bogacki_shampine() -> Self {
        let mut a = DMatrix::zeros(4, 4);
        a[(1, 0)] = ratio(1.0, 2.0);
        a[(2, 1)] = ratio(3.0, 4.0);
        a[(3, 0)] = ratio(2.0, 9.0);
        a[(3, 1)] = ratio(1.0, 3.0);
        a[(3, 2)] = ratio(4.0, 9.0);

        let b = DVector::from_vec(vec![a[(3, 0)], a[(3, 1)], a[(3, 2)], T::zero()]);
        let b_hat: DVector<T> = DVector::from_vec(vec![
            ratio(7.0, 24.0),
            ratio(1.0, 4.0),
            ratio(1.0, 3.0),
            ratio(1.0, 8.0),
        ]);
        let d = &b - &b_hat;
        let c = DVector::from_vec(vec![T::zero(), ratio(1.0, 2.0), ratio(3.0, 4.0), T::one()]);
        Self::new(a, b, c, Some(d), 3)
    }

    /// Dormand-Prince 5(4) pair
    ///
    /// J.R. Dormand and P.J. Prince, A family of embedded Runge-Kutta formulae, J. Comput. Appl. Math. 6 (1980) 19-26.
    pub fn dormand_prince() -> Self {
        let mut a = DMatrix::zeros(7, 7);
        a[(1, 0)] = ratio(1.0, 5.0);

        a[(2, 0)] = ratio(3.0, 40.0);
        a[(2, 1)] = ratio(9.0, 40.0);

        a[(3, 0)] = ratio(44.0, 45.0);
        a[(3, 1)] = ratio(-56.0, 15.0);
        a[(3, 2)] = ratio(32.0, 9.0);

        a[(4, 0)] = ratio(19372.0, 6561.0);
        a[(4, 1)] = ratio(-25360.0, 2187.0);
        a[(4, 2)] = ratio(64448.0, 6561.0);
        a[(4, 3)] = ratio(-212.0, 729.0);

        a[(5, 0)] = ratio(9017.0, 3168.0);
        a[(5, 1)] = ratio(-355.0, 33.0);
        a[(5, 2)] = ratio(46732.0, 5247.0);
        a[(5, 3)] = ratio(49.0, 176.0);
        a[(5, 4)] = ratio(-5103.0, 18656.0);

        a[(6, 0)] = ratio(35.0, 384.0);
        a[(6, 2)] = ratio(500.0, 1113.0);
        a[(6, 3)] = ratio(125.0, 192.0);
        a[(6, 4)] = ratio(-2187.0, 6784.0);
        a[(6, 5)] = ratio(11.0, 84.0);

        let b = DVector::from_vec(vec![
            a[(6, 0)],
            T::zero(),
            a[(6, 2)],
            a[(6, 3)],
            a[(6, 4)],
            a[(6, 5)],
            T::zero(),
        ]);
        let b_hat: DVector<T> = DVector::from_vec(vec![
            ratio(5179.0, 57600.0),
            T::zero(),
            ratio(7571.0, 16695.0),
            ratio(393.0, 640.0),
            ratio(-92097.0, 339200.0),
            ratio(187.0, 2100.0),
            ratio(1.0, 40.0),
        ]);
        let d = &b - &b_hat;

        let c = DVector::from_vec(vec![
            T::zero(),
            ratio(1.0, 5.0),
            ratio(3.0, 10.0),
            ratio(4.0, 5.0),
            ratio(8.0, 9.0),
            T::one(),
            T::one(),
        ]);

        Self::new(a, b, c, Some(d), 5)
    }

    pub fn new(
        a: DMatrix<T>,
        b: DVector<T>,
        c: DVector<T>,
        d: Option<DVector<T>>,
        order: usize,
    ) -> Self {
        let s = c.len();
        assert_eq!(a.ncols(), s, "Invalid number of columns in a, expected {}", s);
        assert_eq!(a.nrows(), s, "Invalid number of rows in a, expected {}", s);
        assert_eq!(
            b.len(),
            s,
            "Invalid number of elements in b, expected {}",
            s
        );
        if let Some(d) = &d {
            assert_eq!(
                d.len(),
                s,
                "Invalid number of elements in d, expected {}",
                s
            );
        }
        for i in 0..s {
            for j in i..s {
                assert!(
                    a[(i, j)] == T::zero(),
                    "Explicit tableau must be strictly lower triangular, a[({}, {})] = {}",
                    i,
                    j,
                    a[(i, j)]
                );
            }
        }
        Self { a, b, c, d, order }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// number of stages
    pub fn s(&self) -> usize {
        self.c.len()
    }

    pub fn a(&self) -> &DMatrix<T> {
        &self.a
    }

    pub fn b(&self) -> &DVector<T> {
        &self.b
    }

    pub fn c(&self) -> &DVector<T> {
        &self.c
    }

    pub fn d(&self) -> Option<&DVector<T>> {
        self.d.as_ref()
    }
}
