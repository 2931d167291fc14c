pub mod script;
pub mod store;
pub mod view;
