//! Integration tests for prototype cloning.

use creational_patterns::{Circle, Shape, ShapeClone};

#[test]
fn test_clone_has_same_attributes() {
    let circle_one = Circle::new(5.0);
    let circle_two = circle_one.clone();

    assert!(!std::ptr::eq(&circle_one, &circle_two));
    assert_eq!(circle_two.shape_type(), "Circle");
    assert_eq!(circle_two.radius(), 5.0);
    assert_eq!(circle_one, circle_two);
}

#[test]
fn test_clone_is_independent() {
    let circle_one = Circle::new(5.0);
    let mut circle_two = circle_one.clone();

    circle_two.set_radius(10.0);

    assert_eq!(circle_one.radius(), 5.0);
    assert_eq!(circle_two.radius(), 10.0);
    assert_ne!(circle_one, circle_two);
}

#[test]
fn test_clone_through_base_capability() {
    let prototype: Box<dyn Shape> = Box::new(Circle::new(3.0));
    let copy = prototype.clone_shape();

    assert_eq!(copy.shape_type(), Circle::SHAPE_TYPE);
    assert!(!std::ptr::addr_eq(&*prototype, &*copy));
}

#[test]
fn test_prototype_catalog() {
    let catalog: Vec<Box<dyn Shape>> = vec![Box::new(Circle::new(1.0)), Box::new(Circle::new(2.0))];

    let first_batch = catalog.clone();
    let second_batch = catalog.clone();

    assert_eq!(first_batch.len(), 2);
    assert_eq!(format!("{:?}", first_batch), format!("{:?}", second_batch));
    assert!(!std::ptr::addr_eq(&*first_batch[0], &*second_batch[0]));
}
