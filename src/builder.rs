//! Builder pattern: assemble a [`Person`] one field at a time.
//!
//! The builder owns a shared in-progress `Person`. Setters write into it,
//! [`PersonBuilder::build`] hands out another handle to that same object, and
//! [`PersonBuilder::reset`] swaps in a fresh one. There is no finalized state:
//! until `reset` is called, later setter calls remain visible through every
//! handle previously returned by `build`. Use [`PersonBuilder::snapshot`] for a
//! detached copy instead.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The record being constructed. Every field is optional and independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
}

/// Handle to a person owned by a [`PersonBuilder`].
pub type SharedPerson = Rc<RefCell<Person>>;

struct Field<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for Field<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", Field(&self.name))?;
        writeln!(f, "Age: {}", Field(&self.age))?;
        writeln!(f, "Gender: {}", Field(&self.gender))?;
        write!(f, "Ethnicity: {}", Field(&self.ethnicity))
    }
}

/// Stepwise constructor for [`Person`].
///
/// ```rust
/// use creational_patterns::PersonBuilder;
///
/// let mut builder = PersonBuilder::new();
/// builder.set_name("John").set_age(30).set_gender("Male");
///
/// let person = builder.build();
/// assert_eq!(person.borrow().name.as_deref(), Some("John"));
/// assert_eq!(person.borrow().ethnicity, None);
/// ```
#[derive(Debug, Default)]
pub struct PersonBuilder {
    person: SharedPerson,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the in-progress person and start a new one with every field unset.
    ///
    /// Handles returned by earlier `build` calls keep their last values.
    pub fn reset(&mut self) -> &mut Self {
        log::trace!("person builder reset");
        self.person = SharedPerson::default();
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.person.borrow_mut().name = Some(name.into());
        self
    }

    pub fn set_age(&mut self, age: u32) -> &mut Self {
        self.person.borrow_mut().age = Some(age);
        self
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) -> &mut Self {
        self.person.borrow_mut().gender = Some(gender.into());
        self
    }

    pub fn set_ethnicity(&mut self, ethnicity: impl Into<String>) -> &mut Self {
        self.person.borrow_mut().ethnicity = Some(ethnicity.into());
        self
    }

    /// Return a handle to the in-progress person. This is not a copy.
    ///
    /// # Panics
    ///
    /// The setters borrow the person mutably. Calling one while a
    /// `borrow()` of a handle returned here is still alive panics with a
    /// `BorrowMutError`; drop the borrow (or use [`snapshot`](Self::snapshot))
    /// before setting further fields.
    pub fn build(&self) -> SharedPerson {
        log::trace!("person builder build: {:?}", self.person.borrow());
        Rc::clone(&self.person)
    }

    /// Return a detached copy of the in-progress person.
    pub fn snapshot(&self) -> Person {
        self.person.borrow().clone()
    }
}
