//! Numeric traits the containers are generic over.

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + PartialEq
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + ops::AddAssign
        + ops::SubAssign
        + ops::MulAssign
        + ops::DivAssign
        + PartialEq
        + PartialOrd
        + Copy
{
}

/// Widest representation of a primitive number, used to implement `as`-casts generically.
#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
}

impl Primitive {
    pub(crate) fn to_i128(self) -> i128 {
        match self {
            Primitive::Signed(v) => v,
            Primitive::Unsigned(v) => v as i128,
            Primitive::Float(v) => v as i128,
        }
    }
}

/// A primitive numeric type that can be stored in a [`Vector`] or [`Matrix`].
///
/// This is implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`, `f32` and `f64`.
/// Any two scalar types can be converted into each other with [`Scalar::cast`], which behaves
/// exactly like an `as` cast.
///
/// [`Vector`]: crate::Vector
/// [`Matrix`]: crate::Matrix
pub trait Scalar: Number + fmt::Debug + Send + Sync + 'static {
    /// Whether this is an integer type.
    const INTEGRAL: bool;

    #[doc(hidden)]
    fn into_primitive(self) -> Primitive;

    #[doc(hidden)]
    fn from_primitive(prim: Primitive) -> Self;

    /// Returns the magnitude of `self`. Unsigned types return `self` unchanged.
    fn abs(self) -> Self;

    /// Converts `self` to another scalar type, with the semantics of an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_linalg::*;
    /// assert_eq!(2.9f64.cast::<i32>(), 2);
    /// assert_eq!(300i32.cast::<u8>(), 44);
    /// assert_eq!(7u8.cast::<f32>(), 7.0);
    /// ```
    #[inline]
    fn cast<U: Scalar>(self) -> U {
        U::from_primitive(self.into_primitive())
    }

    /// Converts `self` to an [`f64`].
    #[inline]
    fn to_f64(self) -> f64 {
        self.cast()
    }

    /// Converts an index or count to this type.
    #[inline]
    fn from_usize(n: usize) -> Self {
        Self::from_primitive(Primitive::Unsigned(n as u128))
    }
}

/// Scalars that can be negated.
pub trait Signed: Scalar + ops::Neg<Output = Self> {}
impl<T> Signed for T where T: Scalar + ops::Neg<Output = Self> {}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Floating-point scalars.
///
/// Operations that need a square root or a true division (length, normalization, inversion) are
/// only available for these.
pub trait Float: Signed + Sqrt {}
impl<T> Float for T where T: Signed + Sqrt {}

macro_rules! scalar_impls {
    (@common $t:ty, $zero:expr, $one:expr) => {
        impl Zero for $t {
            const ZERO: Self = $zero;
        }
        impl One for $t {
            const ONE: Self = $one;
        }
    };
    (@from_primitive) => {
        #[inline]
        fn from_primitive(prim: Primitive) -> Self {
            match prim {
                Primitive::Signed(v) => v as Self,
                Primitive::Unsigned(v) => v as Self,
                Primitive::Float(v) => v as Self,
            }
        }
    };
    (signed: $($t:ty),+) => {
        $(
            scalar_impls!(@common $t, 0, 1);
            impl Scalar for $t {
                const INTEGRAL: bool = true;

                #[inline]
                fn into_primitive(self) -> Primitive {
                    Primitive::Signed(self as i128)
                }

                scalar_impls!(@from_primitive);

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
        )+
    };
    (unsigned: $($t:ty),+) => {
        $(
            scalar_impls!(@common $t, 0, 1);
            impl Scalar for $t {
                const INTEGRAL: bool = true;

                #[inline]
                fn into_primitive(self) -> Primitive {
                    Primitive::Unsigned(self as u128)
                }

                scalar_impls!(@from_primitive);

                #[inline]
                fn abs(self) -> Self {
                    self
                }
            }
        )+
    };
    (float: $($t:ty),+) => {
        $(
            scalar_impls!(@common $t, 0.0, 1.0);
            impl Scalar for $t {
                const INTEGRAL: bool = false;

                #[inline]
                fn into_primitive(self) -> Primitive {
                    Primitive::Float(self as f64)
                }

                scalar_impls!(@from_primitive);

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }

            impl Sqrt for $t {
                #[inline]
                fn sqrt(self) -> Self {
                    <$t>::sqrt(self)
                }
            }
        )+
    };
}

scalar_impls!(signed: i8, i16, i32, i64);
scalar_impls!(unsigned: u8, u16, u32, u64);
scalar_impls!(float: f32, f64);
