//! Port interfaces implemented by the application use cases

pub mod services;

pub use services::{
    ComponentIndexInterface, ComponentReaderInterface, ExampleServiceInterface,
    RulesServiceInterface,
};
