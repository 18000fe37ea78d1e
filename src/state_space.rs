#![allow(non_snake_case)]

//! Linear state-space model.
//!
//! A discrete MIMO system represented by an explicit state vector and linear
//! transition and observation equations:
//! ```text
//! x(k+1) = Fx·x(k) + Gu·u(k)
//! y(k)   = Hx·x(k) + Du·u(k)
//! ```
//! The matrices are fixed at construction; only the state vector changes
//! over the model's lifetime.

use na::storage::Storage;
use na::{allocator::Allocator, DefaultAllocator, Dim, MatrixMN, MatrixN, RealField, VectorN, U1};
use nalgebra as na;

use crate::mine::matrix::check_same_dim;

/// Linear state-space model of a discrete MIMO system.
///
/// `D` is the state dimension, `UD` the control dimension and `ZD` the
/// observation dimension.
#[derive(PartialEq, Clone)]
pub struct StateSpaceModel<N: RealField, D: Dim, UD: Dim, ZD: Dim>
where
    DefaultAllocator: Allocator<N, D, D>
        + Allocator<N, D, UD>
        + Allocator<N, ZD, D>
        + Allocator<N, ZD, UD>
        + Allocator<N, D>,
{
    /// State vector
    x: VectorN<N, D>,
    /// State transition matrix
    Fx: MatrixN<N, D>,
    /// Input matrix
    Gu: MatrixMN<N, D, UD>,
    /// Measurement matrix
    Hx: MatrixMN<N, ZD, D>,
    /// Direct transfer matrix
    Du: MatrixMN<N, ZD, UD>,
}

impl<N: RealField, D: Dim, UD: Dim, ZD: Dim> StateSpaceModel<N, D, UD, ZD>
where
    DefaultAllocator: Allocator<N, D, D>
        + Allocator<N, D, UD>
        + Allocator<N, ZD, D>
        + Allocator<N, ZD, UD>
        + Allocator<N, D>
        + Allocator<N, UD>
        + Allocator<N, ZD>,
{
    /// Creates a model with no direct transfer and a zero initial state.
    pub fn new(
        Fx: MatrixN<N, D>,
        Gu: MatrixMN<N, D, UD>,
        Hx: MatrixMN<N, ZD, D>,
    ) -> Result<Self, &'static str> {
        let Du = MatrixMN::zeros_generic(Hx.data.shape().0, Gu.data.shape().1);
        Self::with_direct_transfer(Fx, Gu, Hx, Du)
    }

    /// Creates a model with a zero initial state.
    pub fn with_direct_transfer(
        Fx: MatrixN<N, D>,
        Gu: MatrixMN<N, D, UD>,
        Hx: MatrixMN<N, ZD, D>,
        Du: MatrixMN<N, ZD, UD>,
    ) -> Result<Self, &'static str> {
        let x = VectorN::zeros_generic(Fx.data.shape().0, U1);
        Self::with_state(Fx, Gu, Hx, Du, x)
    }

    /// Creates a model with an explicit initial state.
    ///
    /// Fails if the matrix and state dimensions are mutually inconsistent.
    /// With static dimensions consistency is already guaranteed by the
    /// types; with `Dynamic` dimensions this is the only guard, so no model
    /// with inconsistent dimensions can ever be stepped.
    pub fn with_state(
        Fx: MatrixN<N, D>,
        Gu: MatrixMN<N, D, UD>,
        Hx: MatrixMN<N, ZD, D>,
        Du: MatrixMN<N, ZD, UD>,
        x: VectorN<N, D>,
    ) -> Result<Self, &'static str> {
        check_same_dim(Fx.nrows(), Fx.ncols(), "Fx not square")?;
        check_same_dim(Gu.nrows(), Fx.nrows(), "Gu rows inconsistent with Fx")?;
        check_same_dim(Hx.ncols(), Fx.nrows(), "Hx columns inconsistent with Fx")?;
        check_same_dim(Du.nrows(), Hx.nrows(), "Du rows inconsistent with Hx")?;
        check_same_dim(Du.ncols(), Gu.ncols(), "Du columns inconsistent with Gu")?;
        check_same_dim(x.nrows(), Fx.nrows(), "state dimension inconsistent with Fx")?;

        Ok(StateSpaceModel { x, Fx, Gu, Hx, Du })
    }

    /// Advances the state by one step: `x ← Fx·x + Gu·u`.
    pub fn update_state(&mut self, u: &VectorN<N, UD>) {
        self.x = &self.Fx * &self.x + &self.Gu * u;
    }

    /// The observation from the current state: `y = Hx·x + Du·u`.
    ///
    /// Does not mutate the state.
    pub fn output(&self, u: &VectorN<N, UD>) -> VectorN<N, ZD> {
        &self.Hx * &self.x + &self.Du * u
    }

    /// One combined per-cycle step.
    ///
    /// The state is advanced first; the observation is then computed from
    /// the updated state with the same control, so a non-zero `Du` feeds the
    /// control through alongside the post-update state. Callers wanting the
    /// pre-update convention call [`Self::output`] before
    /// [`Self::update_state`].
    pub fn step(&mut self, u: &VectorN<N, UD>) -> VectorN<N, ZD> {
        self.update_state(u);
        self.output(u)
    }

    /// The state vector.
    pub fn state(&self) -> &VectorN<N, D> {
        &self.x
    }

    /// Mutable access to the state vector, for external reinitialization
    /// such as an estimator's correction step.
    pub fn state_mut(&mut self) -> &mut VectorN<N, D> {
        &mut self.x
    }

    /// The state transition matrix.
    pub fn state_transition(&self) -> &MatrixN<N, D> {
        &self.Fx
    }

    /// The input matrix.
    pub fn input_matrix(&self) -> &MatrixMN<N, D, UD> {
        &self.Gu
    }

    /// The measurement matrix.
    pub fn measurement_matrix(&self) -> &MatrixMN<N, ZD, D> {
        &self.Hx
    }

    /// The direct transfer matrix.
    pub fn direct_transfer(&self) -> &MatrixMN<N, ZD, UD> {
        &self.Du
    }
}
