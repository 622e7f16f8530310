//! Implementations of `std::ops` and `std::cmp`.

use std::{
    cmp::Ordering,
    ops::{
        Add, AddAssign, BitXor, BitXorAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg,
        Sub, SubAssign,
    },
};

use crate::{Bounded, Number, Promote, Scalar};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, const N: usize> Index<Bounded<N>> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: Bounded<N>) -> &Self::Output {
        &self.0[index.get()]
    }
}

impl<T, const N: usize> IndexMut<Bounded<N>> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: Bounded<N>) -> &mut Self::Output {
        &mut self.0[index.get()]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.0.eq(other)
    }
}

/// Lexicographic ordering, in axis order.
impl<T: PartialOrd, const N: usize> PartialOrd for Vector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Lexicographic ordering, in axis order.
impl<T: Ord, const N: usize> Ord for Vector<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! promoted_binop {
    ($($trait:ident, $method:ident, $op:tt, $doc:literal;)+) => {
        $(
            #[doc = $doc]
            ///
            /// Both operands are converted to their common scalar type first.
            impl<T, U, const N: usize> $trait<Vector<U, N>> for Vector<T, N>
            where
                T: Promote<U>,
                U: Scalar,
            {
                type Output = Vector<<T as Promote<U>>::Common, N>;

                fn $method(self, rhs: Vector<U, N>) -> Self::Output {
                    Vector::from_fn(|i| self.0[i].cast::<T::Common>() $op rhs.0[i].cast())
                }
            }
        )+
    };
}

promoted_binop! {
    Add, add, +, "Element-wise addition.";
    Sub, sub, -, "Element-wise subtraction.";
    Mul, mul, *, "Element-wise multiplication.";
    Div, div, /, "Element-wise division.";
}

macro_rules! assign_op {
    ($($trait:ident, $method:ident, $op:tt, $doc:literal;)+) => {
        $(
            #[doc = $doc]
            impl<T, const N: usize> $trait<Vector<T, N>> for Vector<T, N>
            where
                T: $trait,
            {
                fn $method(&mut self, rhs: Vector<T, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| *lhs $op rhs);
                }
            }
        )+
    };
}

assign_op! {
    AddAssign, add_assign, +=, "Element-wise addition.";
    SubAssign, sub_assign, -=, "Element-wise subtraction.";
    MulAssign, mul_assign, *=, "Element-wise multiplication.";
    DivAssign, div_assign, /=, "Element-wise division.";
}

/// Cross product.
impl<T: Number> BitXor for Vector<T, 3> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.cross(rhs)
    }
}

/// Cross product.
impl<T: Number> BitXorAssign for Vector<T, 3> {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = self.cross(rhs);
    }
}

// Broadcasting ops are implemented per primitive type: a blanket `Add<T> for Vector<T, N>` would
// overlap with the promoting vector-vector impls above.
macro_rules! scalar_ops {
    ($($t:ty),+) => {
        $(
            scalar_ops!(@op $t, Add, add, AddAssign, add_assign, +);
            scalar_ops!(@op $t, Sub, sub, SubAssign, sub_assign, -);
            scalar_ops!(@op $t, Mul, mul, MulAssign, mul_assign, *);
            scalar_ops!(@op $t, Div, div, DivAssign, div_assign, /);
        )+
    };
    (@op $t:ty, $trait:ident, $method:ident, $assign:ident, $assign_method:ident, $op:tt) => {
        /// Vector-Scalar operation, applied to each element.
        impl<const N: usize> $trait<$t> for Vector<$t, N> {
            type Output = Vector<$t, N>;

            #[inline]
            fn $method(self, rhs: $t) -> Self::Output {
                self.map(|elem| elem $op rhs)
            }
        }

        /// Scalar-Vector operation, applied to each element.
        impl<const N: usize> $trait<Vector<$t, N>> for $t {
            type Output = Vector<$t, N>;

            #[inline]
            fn $method(self, rhs: Vector<$t, N>) -> Self::Output {
                rhs.map(|elem| self $op elem)
            }
        }

        /// Vector-Scalar operation, applied to each element.
        impl<const N: usize> $assign<$t> for Vector<$t, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: $t) {
                self.0 = self.0.map(|elem| elem $op rhs);
            }
        }
    };
}

scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
