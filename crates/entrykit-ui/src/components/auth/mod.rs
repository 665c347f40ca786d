//! Sign-in components.

mod field;
mod form_body;
mod login_card;
mod responsive;

pub use field::{FormField, FormFieldProps};
pub use login_card::{LoginCard, LoginCardProps};
pub use responsive::{ResponsiveLoginForm, ResponsiveLoginFormProps};
