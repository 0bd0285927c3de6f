use std::ops::Deref;

use crate::{validate, BoolVar, DomainError, Home};

/// A fixed-size sequence of boolean variables sharing the same initial bounds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoolVarArray {
    vars: Vec<BoolVar>,
}

impl BoolVarArray {
    /// Creates `n` variables with domain `min..=max`.
    ///
    /// The bounds are checked before anything is allocated, so an error leaves `home` untouched.
    pub fn new<H: Home + ?Sized>(
        home: &mut H,
        n: usize,
        min: i32,
        max: i32,
    ) -> Result<Self, DomainError> {
        let bounds =
            validate(min, max).map_err(|error| error.in_operation("BoolVarArray::new"))?;
        let vars = (0..n)
            .map(|_| BoolVar::from_validated(&mut *home, bounds))
            .collect();
        Ok(Self { vars })
    }
}

impl Deref for BoolVarArray {
    type Target = [BoolVar];

    fn deref(&self) -> &Self::Target {
        &self.vars
    }
}

impl<'a> IntoIterator for &'a BoolVarArray {
    type Item = &'a BoolVar;
    type IntoIter = std::slice::Iter<'a, BoolVar>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
