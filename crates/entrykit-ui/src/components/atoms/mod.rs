//! Small building blocks shared by the composed components.

mod alert;
mod brand_mark;
mod button;
mod input;
mod spinner;

pub use alert::{AlertBanner, AlertBannerProps};
pub use brand_mark::{BrandMark, BrandMarkProps};
pub use button::{Button, ButtonProps};
pub use input::{Input, InputProps};
pub use spinner::{Spinner, SpinnerProps};
