//! New Bill UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: store-facing logic (upload, submit)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::NewBill;
pub use view_model::NewBillViewModel;
