pub mod change;
pub mod invalidation;
pub mod list_view;
