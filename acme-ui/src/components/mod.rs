//! Pure view components

mod customers_layout;

pub use customers_layout::CustomersLayout;
