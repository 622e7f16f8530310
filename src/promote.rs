//! Common-type selection for mixed-type arithmetic.

use crate::Scalar;

/// Selects the type two scalar operands are converted to before being combined.
///
/// The rules mirror C's usual arithmetic conversions, minus the promotion of small integers to
/// `int`:
///
/// 1. Two operands of the same type stay in that type.
/// 2. A floating-point operand wins over an integer; `f64` wins over `f32`.
/// 3. Between integers of different width, the wider type wins.
/// 4. Between a signed and an unsigned integer of the same width, the unsigned type wins.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let v = vec2(1i32, 2) + vec2(0.5f32, 0.5);
/// assert_eq!(v, vec2(1.5f32, 2.5));
///
/// let w = vec2(1u8, 2) * vec2(1000i64, 1000);
/// assert_eq!(w, vec2(1000i64, 2000));
/// ```
pub trait Promote<Rhs: Scalar = Self>: Scalar {
    /// The common type of `Self` and `Rhs`.
    type Common: Scalar;
}

macro_rules! promote_self {
    ($($t:ty),+) => {
        $(
            impl Promote for $t {
                type Common = $t;
            }
        )+
    };
}

macro_rules! promote {
    ($($a:ty, $b:ty => $common:ty;)+) => {
        $(
            impl Promote<$b> for $a {
                type Common = $common;
            }
            impl Promote<$a> for $b {
                type Common = $common;
            }
        )+
    };
}

promote_self!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

promote! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, u8 => u8;
    i8, u16 => u16;
    i8, u32 => u32;
    i8, u64 => u64;

    i16, i32 => i32;
    i16, i64 => i64;
    i16, u8 => i16;
    i16, u16 => u16;
    i16, u32 => u32;
    i16, u64 => u64;

    i32, i64 => i64;
    i32, u8 => i32;
    i32, u16 => i32;
    i32, u32 => u32;
    i32, u64 => u64;

    i64, u8 => i64;
    i64, u16 => i64;
    i64, u32 => i64;
    i64, u64 => u64;

    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;

    u16, u32 => u32;
    u16, u64 => u64;

    u32, u64 => u64;

    i8, f32 => f32;
    i16, f32 => f32;
    i32, f32 => f32;
    i64, f32 => f32;
    u8, f32 => f32;
    u16, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;

    i8, f64 => f64;
    i16, f64 => f64;
    i32, f64 => f64;
    i64, f64 => f64;
    u8, f64 => f64;
    u16, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;

    f32, f64 => f64;
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn common<A: Promote<B>, B: Scalar>() -> TypeId {
        TypeId::of::<A::Common>()
    }

    #[test]
    fn table() {
        assert_eq!(common::<i32, i32>(), TypeId::of::<i32>());
        assert_eq!(common::<i32, f32>(), TypeId::of::<f32>());
        assert_eq!(common::<f64, u8>(), TypeId::of::<f64>());
        assert_eq!(common::<f32, f64>(), TypeId::of::<f64>());
        assert_eq!(common::<i8, i64>(), TypeId::of::<i64>());
        assert_eq!(common::<u32, i32>(), TypeId::of::<u32>());
        assert_eq!(common::<u32, i64>(), TypeId::of::<i64>());
        assert_eq!(common::<i16, u8>(), TypeId::of::<i16>());
    }

    #[test]
    fn symmetric() {
        assert_eq!(common::<u16, i64>(), common::<i64, u16>());
        assert_eq!(common::<f32, i8>(), common::<i8, f32>());
    }
}
