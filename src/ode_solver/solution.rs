use serde::{Deserialize, Serialize};

use crate::VectorSpace;

/// The accepted points of a flow, starting with the initial state.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "V: Serialize, V::T: Serialize",
    deserialize = "V: Deserialize<'de>, V::T: Deserialize<'de>"
))]
pub struct RgeSolution<V: VectorSpace> {
    pub t: Vec<V::T>,
    pub y: Vec<V>,
}

impl<V: VectorSpace> Default for RgeSolution<V> {
    fn default() -> Self {
        Self {
            t: Vec::new(),
            y: Vec::new(),
        }
    }
}

impl<V: VectorSpace> RgeSolution<V> {
    pub fn push(&mut self, y: V, t: V::T) {
        self.t.push(t);
        self.y.push(y);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// the last accepted time and state
    pub fn last(&self) -> Option<(V::T, &V)> {
        self.t.last().copied().zip(self.y.last())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector2;

    use super::*;
    use crate::state::tests::{sample_state, State};
    use crate::vector::assert_eq_st;

    #[test]
    fn test_serialize_parameter_states() {
        let mut soln = RgeSolution::<State>::default();
        assert!(soln.is_empty());
        soln.push(sample_state(0.0), 0.0);
        soln.push(sample_state(0.1), 0.5);

        let json = serde_json::to_string(&soln).unwrap();
        let back: RgeSolution<State> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.t, vec![0.0, 0.5]);
        for (y, expect) in back.y.iter().zip(soln.y.iter()) {
            assert_eq_st(y, expect, 1e-12);
            assert_eq!(y.nloops(), expect.nloops());
        }
    }

    #[test]
    fn test_serialize_bare_vectors() {
        let mut soln = RgeSolution::<Vector2<f64>>::default();
        soln.push(Vector2::new(1.0, -2.0), 3.0);
        let value = serde_json::to_value(&soln).unwrap();
        assert_eq!(value["t"], serde_json::json!([3.0]));
        let (t, y) = soln.last().unwrap();
        assert_eq!(t, 3.0);
        assert_eq!(*y, Vector2::new(1.0, -2.0));
    }
}
