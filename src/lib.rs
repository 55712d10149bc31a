//! # Creational Patterns
//!
//! Small, self-contained implementations of three creational design patterns.
//!
//! ## Quick Start
//!
//! ```rust
//! use creational_patterns::{Circle, PersonBuilder, Singleton};
//! use std::sync::Arc;
//!
//! // Singleton: one shared instance per process
//! assert!(Arc::ptr_eq(&Singleton::instance(), &Singleton::instance()));
//!
//! // Prototype: clones are independent deep copies
//! let circle = Circle::new(5.0);
//! let mut copy = circle.clone();
//! copy.set_radius(10.0);
//! assert_eq!(circle.radius(), 5.0);
//!
//! // Builder: stepwise construction
//! let mut builder = PersonBuilder::new();
//! builder.set_name("John").set_age(30);
//! assert_eq!(builder.build().borrow().age, Some(30));
//! ```
//!
//! ## Patterns
//!
//! - **Singleton** - [`Singleton`] has exactly one instance per process;
//!   [`SingletonRegistry`] keeps at most one instance per type and
//!   [`define_singleton_registry!`] creates isolated registries
//! - **Prototype** - [`Shape`] and [`Circle`]; `Box<dyn Shape>` is cloneable too
//! - **Builder** - [`PersonBuilder`] assembles a [`Person`]
//!
//! Instance creation and builder steps are logged through the `log` facade.

#[macro_use]
mod macros;

mod builder;
mod prototype;
mod singleton;

pub use builder::{Person, PersonBuilder, SharedPerson};
pub use prototype::{Circle, Shape, ShapeClone};
pub use singleton::{Singleton, SingletonRegistry, SingletonStorage};
