//! Discrete transfer function model.
//!
//! A SISO system represented in the z-domain as the ratio of two polynomials
//! in the unit-delay operator:
//! ```text
//! H(z) = (b0 + b1·z⁻¹ + … + b_m·z⁻ᵐ) / (a0 + a1·z⁻¹ + … + a_n·z⁻ⁿ)
//! ```
//! The leading denominator coefficient `a0` normalizes the output on every
//! step and must never be zero; this is validated when coefficients are set,
//! never while stepping.

use na::storage::Storage;
use na::{allocator::Allocator, DefaultAllocator, Dim, DimDiff, DimSub, RealField, VectorN, U1};
use nalgebra as na;

use crate::mine::matrix::{check_non_zero, check_same_dim};

/// Discrete transfer function of a SISO system.
///
/// Holds the polynomial coefficients together with the memory of the `BD`
/// most recent raw inputs and the `AD − 1` most recent outputs, both ordered
/// most-recent-first. Stepping advances each memory by exactly one place.
#[derive(PartialEq, Clone)]
pub struct DiscreteTransferFunction<N: RealField, BD: Dim, AD: DimSub<U1>>
where
    DefaultAllocator: Allocator<N, BD> + Allocator<N, DimDiff<AD, U1>>,
{
    /// Numerator coefficients
    b: VectorN<N, BD>,
    /// Denominator coefficients, leading coefficient excluded
    a: VectorN<N, DimDiff<AD, U1>>,
    /// Leading denominator coefficient, never zero
    a0: N,
    /// Past inputs, most recent first
    input_mem: VectorN<N, BD>,
    /// Past outputs, most recent first
    output_mem: VectorN<N, DimDiff<AD, U1>>,
    /// Last computed output
    output: N,
}

impl<N: RealField, BD: Dim, AD: DimSub<U1>> DiscreteTransferFunction<N, BD, AD>
where
    DefaultAllocator: Allocator<N, BD> + Allocator<N, AD> + Allocator<N, DimDiff<AD, U1>>,
{
    /// Creates a transfer function from the full numerator and denominator
    /// coefficient vectors, with zeroed memory.
    ///
    /// Fails if either polynomial is empty or the leading denominator
    /// coefficient is zero.
    pub fn new(b: VectorN<N, BD>, a: VectorN<N, AD>) -> Result<Self, &'static str> {
        if b.nrows() == 0 {
            return Err("numerator is empty");
        }
        if a.nrows() == 0 {
            return Err("denominator is empty");
        }
        let a0 = check_non_zero(a[0], "leading denominator coefficient is zero")?;

        let bd = b.data.shape().0;
        let ad1 = a.data.shape().0.sub(U1);
        let mut a_tail = VectorN::zeros_generic(ad1, U1);
        for j in 0..a_tail.nrows() {
            a_tail[j] = a[j + 1];
        }

        Ok(DiscreteTransferFunction {
            b,
            a: a_tail,
            a0,
            input_mem: VectorN::zeros_generic(bd, U1),
            output_mem: VectorN::zeros_generic(ad1, U1),
            output: N::zero(),
        })
    }

    /// Identity (passthrough) transfer function: output equals input.
    ///
    /// The explicit replacement for a default constructor; always satisfies
    /// the leading-coefficient invariant.
    pub fn passthrough(bd: BD, ad: AD) -> Self {
        assert!(bd.value() > 0, "numerator is empty");
        let mut b = VectorN::zeros_generic(bd, U1);
        b[0] = N::one();
        let ad1 = ad.sub(U1);

        DiscreteTransferFunction {
            b,
            a: VectorN::zeros_generic(ad1, U1),
            a0: N::one(),
            input_mem: VectorN::zeros_generic(bd, U1),
            output_mem: VectorN::zeros_generic(ad1, U1),
            output: N::zero(),
        }
    }

    /// Applies the transfer function to the next input sample.
    ///
    /// The output is the normalized recursion
    /// `y(k) = (Σ b_i·u(k−i) − Σ a_j·y(k−j)) / a0`; both memories then shift
    /// by one place, evicting their oldest value.
    pub fn step(&mut self, input: N) -> N {
        let mut acc = self.b[0] * input;
        for i in 1..self.b.nrows() {
            acc += self.b[i] * self.input_mem[i - 1];
        }
        for j in 0..self.a.nrows() {
            acc -= self.a[j] * self.output_mem[j];
        }
        let output = acc / self.a0;

        shift_front(&mut self.input_mem, input);
        shift_front(&mut self.output_mem, output);
        self.output = output;

        output
    }

    /// Processes a slice of input samples into an output slice.
    ///
    /// # Panics
    ///
    /// Panics if `output.len() < input.len()`.
    pub fn process(&mut self, input: &[N], output: &mut [N]) {
        assert!(output.len() >= input.len());
        for (i, &u) in input.iter().enumerate() {
            output[i] = self.step(u);
        }
    }

    /// Zero-fills the input and output memory, removing any transient
    /// response. Coefficients are untouched.
    pub fn clear_memory(&mut self) {
        self.input_mem.fill(N::zero());
        self.output_mem.fill(N::zero());
        self.output = N::zero();
    }

    /// Replaces the numerator coefficients. Memory is untouched.
    ///
    /// Fails if the numerator length changes (`Dynamic` dimensions).
    pub fn set_num(&mut self, b: VectorN<N, BD>) -> Result<(), &'static str> {
        check_same_dim(b.nrows(), self.b.nrows(), "numerator length changed")?;
        self.b = b;
        Ok(())
    }

    /// Replaces the full denominator coefficients. Memory is untouched.
    ///
    /// Fails if the denominator length changes (`Dynamic` dimensions) or the
    /// leading coefficient is zero; the previous coefficients are kept in
    /// either case.
    pub fn set_den(&mut self, a: VectorN<N, AD>) -> Result<(), &'static str> {
        check_same_dim(a.nrows(), self.a.nrows() + 1, "denominator length changed")?;
        let a0 = check_non_zero(a[0], "leading denominator coefficient is zero")?;

        for j in 0..self.a.nrows() {
            self.a[j] = a[j + 1];
        }
        self.a0 = a0;
        Ok(())
    }

    /// The numerator coefficients.
    pub fn num(&self) -> &VectorN<N, BD> {
        &self.b
    }

    /// The denominator coefficients, leading coefficient excluded.
    pub fn den(&self) -> &VectorN<N, DimDiff<AD, U1>> {
        &self.a
    }

    /// The leading denominator coefficient. Generally normalized to 1.
    pub fn den_lead(&self) -> N {
        self.a0
    }

    /// The most recently computed output, without recomputation.
    pub fn output(&self) -> N {
        self.output
    }
}

/// Shifts a memory vector one place: the newest value enters at the front,
/// the oldest is evicted.
fn shift_front<N: RealField, D: Dim>(mem: &mut VectorN<N, D>, value: N)
where
    DefaultAllocator: Allocator<N, D>,
{
    for i in (1..mem.nrows()).rev() {
        mem[i] = mem[i - 1];
    }
    if mem.nrows() > 0 {
        mem[0] = value;
    }
}
