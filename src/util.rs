/// 「0」に相当する値が存在することを表すトレイト
pub trait HasZero {
    /// 0の値を返す
    fn zero() -> Self;
}

/// 数値型にHasZeroを実装するマクロ
macro_rules! impl_zero {
    ($z: literal; $($t: ty),*) => {$(
        impl HasZero for $t {
            fn zero() -> $t { $z }
        }
    )*};
}

impl_zero! { 0; u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize }
impl_zero! { 0.0; f32, f64 }
