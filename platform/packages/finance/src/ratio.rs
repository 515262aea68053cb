use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// A part of a total
pub trait Ratio<U> {
    fn parts(&self) -> U;
    fn total(&self) -> U;
}

/// A fraction that may exceed one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Rational<U> {
    nominator: U,
    denominator: U,
}

impl<U> Rational<U>
where
    U: Copy + Debug + PartialEq + Default,
{
    #[track_caller]
    pub fn new(nominator: U, denominator: U) -> Self {
        debug_assert_ne!(denominator, U::default(), "Denominator should not be zero");
        Self {
            nominator,
            denominator,
        }
    }
}

impl<U> Ratio<U> for Rational<U>
where
    U: Copy,
{
    fn parts(&self) -> U {
        self.nominator
    }

    fn total(&self) -> U {
        self.denominator
    }
}
