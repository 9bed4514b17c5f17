//! Concrete page and region objects for the marketplace UI.

pub mod destinations;
pub mod home;
pub mod regions;
