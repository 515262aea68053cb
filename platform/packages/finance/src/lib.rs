pub mod coin;
pub mod duration;
pub mod error;
pub mod fraction;
pub mod fractionable;
pub mod interest;
pub mod liability;
pub mod percent;
pub mod period;
pub mod price;
pub mod ratio;
pub mod zero;
