//! The multi-step preference wizard.
//!
//! `model` holds the draft record, `steps` the branching step topology,
//! `controller` the operations, and `routes` the REST exposure.

pub mod controller;
pub mod model;
pub mod routes;
pub mod steps;

pub use controller::{WizardController, WizardView};
pub use model::{Draft, FieldPatch, UserType};
