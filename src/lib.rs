#![cfg_attr(not(feature = "std"), no_std)]

//! Discrete-time system model representations.
//!
//! Reusable mathematical models of discrete dynamical systems for control and
//! estimation pipelines. A caller constructs a model once with its fixed
//! parameters, then on every control cycle feeds it the current input or
//! control and reads the resulting state and output. The models do not
//! schedule themselves, read sensors or integrate continuous time; each call
//! advances exactly one discrete step, driven by an external executor.
//!
//! Three independent representations are provided:
//! - [`transfer_function`]: a SISO system as a ratio of polynomials in the
//!   unit-delay operator, with a finite memory of past inputs and outputs.
//! - [`state_space`]: a linear MIMO system with an explicit state vector and
//!   transition/observation matrices.
//! - [`models`]: the contract for nonlinear MIMO models, to be specialized by
//!   concrete physical models, together with the state driver that commits
//!   their results.
//!
//! All representations are numerically and dimensionally generic using
//! nalgebra. With statically sized dimensions a mismatch is rejected at
//! compile time; with `Dynamic` dimensions it is rejected at construction,
//! before any instance can be stepped.

pub mod models;
pub mod state_space;
pub mod transfer_function;

mod mine;
