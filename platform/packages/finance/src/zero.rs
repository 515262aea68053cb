pub trait Zero {
    const ZERO: Self;
}

macro_rules! impl_zero {
    ($($type: ty),+ $(,)?) => {
        $(
            impl Zero for $type {
                const ZERO: Self = 0;
            }
        )+
    };
}

impl_zero!(u8, u16, u32, u64, u128, usize);
