//! Contact form: field state, validation rules, and the submit flow

mod controller;
mod field;
mod transport;
mod validator;

pub use controller::*;
pub use field::*;
pub use transport::*;
pub use validator::*;
