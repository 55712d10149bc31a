//! Demonstration of the Singleton, Prototype and Builder patterns.
//!
//! Prints the result of each pattern to stdout. Logging goes to stderr and is
//! controlled by `RUST_LOG` (default `warn`).

use std::io::{self, Write};
use std::sync::Arc;

use creational_patterns::{Circle, PersonBuilder, Shape, Singleton};
use env_logger::Env;
use log::info;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    info!("running creational pattern demo");

    let stdout = io::stdout();
    run(&mut stdout.lock())
}

fn run(out: &mut impl Write) -> io::Result<()> {
    // -------------------------------------------------------------------------
    // Singleton
    // -------------------------------------------------------------------------
    let singleton_one = Singleton::instance();
    let singleton_two = Singleton::instance();
    writeln!(
        out,
        "singleton_one is singleton_two = {}\n",
        Arc::ptr_eq(&singleton_one, &singleton_two)
    )?;

    // -------------------------------------------------------------------------
    // Prototype
    // -------------------------------------------------------------------------
    let circle_one = Circle::new(5.0);
    let mut circle_two = circle_one.clone();

    writeln!(
        out,
        "circle_one is circle_two = {}",
        std::ptr::eq(&circle_one, &circle_two)
    )?;
    writeln!(
        out,
        "circle_one.shape_type = {:?} circle_one.radius = {}",
        circle_one.shape_type(),
        circle_one.radius()
    )?;
    writeln!(
        out,
        "circle_two.shape_type = {:?} circle_two.radius = {}",
        circle_two.shape_type(),
        circle_two.radius()
    )?;

    circle_two.set_radius(10.0);
    writeln!(
        out,
        "circle_one.radius = {} circle_two.radius = {}\n",
        circle_one.radius(),
        circle_two.radius()
    )?;

    // -------------------------------------------------------------------------
    // Builder
    // -------------------------------------------------------------------------
    let mut person_builder = PersonBuilder::new();
    person_builder
        .set_name("John")
        .set_age(30)
        .set_gender("Male");

    let person_one = person_builder.build();
    writeln!(out, "{}", person_one.borrow())?;

    person_builder.reset();
    Ok(())
}
