//! Placeholder pages behind each route. The real listings and forms are
//! separate feature modules; these keep the shell navigable on its own.

pub mod anonymous;
pub mod apis;
pub mod application_create;
pub mod application_edit;
pub mod applications;
pub mod not_found;
