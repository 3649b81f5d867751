//! Handler tests

mod get_component_example_test;
