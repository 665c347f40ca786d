//! Yew components exported by the crate.

pub mod atoms;
pub mod auth;
pub mod sidebar;

pub use atoms::{Button, ButtonProps};
pub use auth::{LoginCard, ResponsiveLoginForm};
pub use sidebar::{NavItem, SidebarNav};
