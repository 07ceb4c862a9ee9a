//! Control-point data model.
//!
//! A channel curve is an ordered list of stops. Color stops carry three
//! components, opacity stops carry one; both share the same generic types.

mod point;
mod set;

pub use point::{ColorPoint, ControlPoint, OpacityPoint};
pub use set::{ColorPoints, ControlPointSet, OpacityPoints};
