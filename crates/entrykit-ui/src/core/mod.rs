//! Core, DOM-free primitives and helpers for the components.
pub mod fields;
pub mod form;
pub mod layout;
pub mod nav;
pub mod theme;
pub mod ui;
