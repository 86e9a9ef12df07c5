/// Grid element types the filters accept as input.
///
/// Every implementor converts to `f64` without loss, so the threshold test
/// and the median average see exact values.
pub trait Sample: Copy + Send + Sync {
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Sample for $t {
                #[inline(always)]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }
        )+
    };
}

impl_sample!(i8, i16, i32, u8, u16, u32, f32, f64);
