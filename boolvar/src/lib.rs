//! Boolean variables for a constraint solver.
//!
//! A [`BoolVar`] is created from a pair of bounds. Bounds are checked by [`validate`], then
//! [`select_imp`] decides where the variable's storage lives: assigned variables share one of the
//! two [`canonical`] instances, while unassigned ones get fresh storage from their [`Home`].

pub mod canonical;

mod array;
mod display_bool_var;
mod domain;
mod error;
mod home;
mod imp;
mod imp_ref;
mod select;
mod validate;
mod var;


pub use array::BoolVarArray;
pub use display_bool_var::DisplayBoolVar;
pub use domain::BoolDomain;
pub use error::DomainError;
pub use home::{BoolSpace, Home};
pub use imp::BoolVarImp;
pub use imp_ref::BoolVarImpRef;
pub use select::select_imp;
pub use validate::{validate, ValidBounds};
pub use var::BoolVar;
