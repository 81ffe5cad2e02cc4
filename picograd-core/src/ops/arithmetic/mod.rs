//! Arithmetic builders: addition, multiplication, negation and subtraction.
//!
//! Only `add_op` and `mul_op` introduce propagation rules of their own.
//! `neg_op` and `sub_op` are compositions and inherit the rules of the nodes
//! they build.

pub mod add;
pub mod mul;
pub mod neg;
pub mod sub;

pub use add::add_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use sub::sub_op;
