use core::f32::consts::PI as PI32;

// Minimal float trait for the generic transforms (no_std, trig via libm)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    /// Convert a `usize` into the floating-point type.
    ///
    /// Exact below 2^24 for `f32` and 2^53 for `f64`; larger values round.
    fn from_usize(x: usize) -> Self;
    fn abs(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn pi() -> Self;
    #[inline(always)]
    fn two_pi() -> Self {
        Self::pi() + Self::pi()
    }
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn from_usize(x: usize) -> Self {
        x as f32
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        (libm::sinf(self), libm::cosf(self))
    }
    fn pi() -> Self {
        PI32
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn from_usize(x: usize) -> Self {
        x as f64
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn sin_cos(self) -> (Self, Self) {
        (libm::sin(self), libm::cos(self))
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    /// Unit phasor `e^{iθ}`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl<T: Float> core::ops::AddAssign for Complex<T> {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        self.re = self.re + other.re;
        self.im = self.im + other.im;
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;
