//! Page modules for route-level views.
//!
//! Each view navigates to the other through `use_router`; neither knows the
//! route table that renders it.

pub mod about;
pub mod root;
