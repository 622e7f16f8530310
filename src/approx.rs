//! Approximate equality through the [`approx`](::approx) crate.
//!
//! [`Vector`] and [`Matrix`] compare element-wise: two containers are approximately equal if every
//! pair of corresponding elements is.

use ::approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Vector};

macro_rules! approx_impls {
    ($( [$($params:tt)*] $ty:ty; )+) => {
        $(
            impl<T: AbsDiffEq, $($params)*> AbsDiffEq for $ty
            where
                T::Epsilon: Clone,
            {
                type Epsilon = T::Epsilon;

                fn default_epsilon() -> Self::Epsilon {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    self.as_slice().abs_diff_eq(other.as_slice(), epsilon)
                }
            }

            impl<T: RelativeEq, $($params)*> RelativeEq for $ty
            where
                T::Epsilon: Clone,
            {
                fn default_max_relative() -> Self::Epsilon {
                    T::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: Self::Epsilon,
                    max_relative: Self::Epsilon,
                ) -> bool {
                    self.as_slice()
                        .relative_eq(other.as_slice(), epsilon, max_relative)
                }
            }

            impl<T: UlpsEq, $($params)*> UlpsEq for $ty
            where
                T::Epsilon: Clone,
            {
                fn default_max_ulps() -> u32 {
                    T::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                    self.as_slice().ulps_eq(other.as_slice(), epsilon, max_ulps)
                }
            }
        )+
    };
}

approx_impls! {
    [const N: usize] Vector<T, N>;
    [const R: usize, const C: usize] Matrix<T, R, C>;
}
