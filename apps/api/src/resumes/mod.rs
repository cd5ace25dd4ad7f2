//! Resume CRUD and the LaTeX import/export boundary.

pub mod handlers;
pub mod store;
