//! Nonlinear system model contracts.
//!
//! Model functions are defined as a trait and kept pure: a concrete model
//! computes the next state or the observation and returns it, nothing else.
//! The [`NonlinearState`] driver owns the state vector, the last output and
//! the fixed time step, and is solely responsible for committing computed
//! results into storage. A model implementation can therefore be tested in
//! isolation and can never desynchronize the stored state from its returned
//! value.

use na::{allocator::Allocator, DefaultAllocator, Dim, RealField, VectorN, U1};
use nalgebra as na;

use crate::mine::matrix::{check_positive, check_same_dim};

/// A discrete-time nonlinear model of a MIMO system.
///
/// `D` is the state dimension, `UD` the control dimension and `ZD` the
/// observation dimension. Both functions must be pure: all state lives in
/// the [`NonlinearState`] that drives them. The fixed time step is passed to
/// [`NonlinearModel::transition`] for explicit-integration arithmetic.
///
/// A dimensionally inconsistent result from a `Dynamic`-dimensioned model is
/// a programming error in the implementation, not a condition the driver
/// detects.
pub trait NonlinearModel<N: RealField, D: Dim, UD: Dim, ZD: Dim>
where
    DefaultAllocator: Allocator<N, D> + Allocator<N, UD> + Allocator<N, ZD>,
{
    /// The next state from the current state and control.
    fn transition(&self, x: &VectorN<N, D>, u: &VectorN<N, UD>, dt: N) -> VectorN<N, D>;

    /// The observation from the current state and control.
    fn observe(&self, x: &VectorN<N, D>, u: &VectorN<N, UD>) -> VectorN<N, ZD>;
}

/// State of a discrete-time nonlinear system: the state vector, the last
/// computed output and the fixed time step.
#[derive(PartialEq, Clone)]
pub struct NonlinearState<N: RealField, D: Dim, ZD: Dim>
where
    DefaultAllocator: Allocator<N, D> + Allocator<N, ZD>,
{
    x: VectorN<N, D>,
    y: VectorN<N, ZD>,
    dt: N,
}

impl<N: RealField, D: Dim, ZD: Dim> NonlinearState<N, D, ZD>
where
    DefaultAllocator: Allocator<N, D> + Allocator<N, ZD>,
{
    /// Creates a system state with an explicit initial state and a zero
    /// initial output.
    ///
    /// Fails if the time step is not strictly positive.
    pub fn new(dt: N, x: VectorN<N, D>, zd: ZD) -> Result<Self, &'static str> {
        check_positive(dt, "time step not positive")?;

        Ok(NonlinearState {
            x,
            y: VectorN::zeros_generic(zd, U1),
            dt,
        })
    }

    /// Creates a system state with a zero initial state.
    pub fn new_zero(dt: N, d: D, zd: ZD) -> Result<Self, &'static str> {
        Self::new(dt, VectorN::zeros_generic(d, U1), zd)
    }

    /// Advances the state by one step, committing
    /// `x ← model.transition(x, u, dt)`. The stored output is untouched.
    pub fn update<UD: Dim, M>(&mut self, model: &M, u: &VectorN<N, UD>)
    where
        M: NonlinearModel<N, D, UD, ZD>,
        DefaultAllocator: Allocator<N, UD>,
    {
        self.x = model.transition(&self.x, u, self.dt);
    }

    /// Computes and commits the observation from the current state,
    /// `y ← model.observe(x, u)`.
    pub fn observe<UD: Dim, M>(&mut self, model: &M, u: &VectorN<N, UD>) -> &VectorN<N, ZD>
    where
        M: NonlinearModel<N, D, UD, ZD>,
        DefaultAllocator: Allocator<N, UD>,
    {
        self.y = model.observe(&self.x, u);
        &self.y
    }

    /// One combined per-cycle step: the state is advanced first, then the
    /// observation is computed from the updated state with the same control.
    /// The same convention as `StateSpaceModel::step`.
    pub fn step<UD: Dim, M>(&mut self, model: &M, u: &VectorN<N, UD>) -> &VectorN<N, ZD>
    where
        M: NonlinearModel<N, D, UD, ZD>,
        DefaultAllocator: Allocator<N, UD>,
    {
        self.update(model, u);
        self.observe(model, u)
    }

    /// The current state.
    pub fn state(&self) -> &VectorN<N, D> {
        &self.x
    }

    /// Reinitializes the state, bypassing the model functions entirely.
    /// Used e.g. by an estimator's correction step.
    ///
    /// Fails if the state dimension changes (`Dynamic` dimensions).
    pub fn set_state(&mut self, x: VectorN<N, D>) -> Result<(), &'static str> {
        check_same_dim(x.nrows(), self.x.nrows(), "state dimension changed")?;
        self.x = x;
        Ok(())
    }

    /// The last computed output.
    pub fn output(&self) -> &VectorN<N, ZD> {
        &self.y
    }

    /// The fixed time step.
    pub fn time_step(&self) -> N {
        self.dt
    }
}
