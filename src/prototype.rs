//! Prototype pattern: shapes that duplicate themselves.
//!
//! New objects are created by cloning an existing prototype instead of building
//! from scratch. A clone is a deep copy: it owns independent copies of all of
//! the prototype's data, so mutating one never shows through the other.
//!
//! Concrete shapes derive `Clone`; the [`Shape`] capability adds
//! [`Shape::clone_shape`] so a prototype can also be duplicated through a
//! `Box<dyn Shape>` without knowing its concrete type.

use std::fmt;

/// A tagged geometric object that can produce an independent copy of itself.
pub trait Shape: ShapeClone + fmt::Debug {
    /// The tag supplied at construction, e.g. `"Circle"`.
    fn shape_type(&self) -> &str;
}

/// Boxed cloning for [`Shape`] trait objects.
///
/// Implemented for every `Shape + Clone`; not meant to be implemented by hand.
pub trait ShapeClone {
    /// Deep-copy `self` into a new boxed shape.
    fn clone_shape(&self) -> Box<dyn Shape>;
}

impl<T> ShapeClone for T
where
    T: Shape + Clone + 'static,
{
    fn clone_shape(&self) -> Box<dyn Shape> {
        log::trace!("cloning {} prototype", self.shape_type());
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_shape()
    }
}

/// The concrete prototype: a circle with a mutable radius.
///
/// ```rust
/// use creational_patterns::{Circle, Shape};
///
/// let original = Circle::new(5.0);
/// let mut copy = original.clone();
/// copy.set_radius(10.0);
///
/// assert_eq!(copy.shape_type(), "Circle");
/// assert_eq!(original.radius(), 5.0);
/// assert_eq!(copy.radius(), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    shape_type: String,
    radius: f64,
}

impl Circle {
    pub const SHAPE_TYPE: &'static str = "Circle";

    pub fn new(radius: f64) -> Self {
        Self {
            shape_type: Self::SHAPE_TYPE.to_string(),
            radius,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }
}

impl Shape for Circle {
    fn shape_type(&self) -> &str {
        &self.shape_type
    }
}
