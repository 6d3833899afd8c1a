//! DaisyUI-styled wrappers shared by the portal views.

mod badge;
mod card;
mod foundations;

pub(crate) use badge::Badge;
pub(crate) use card::Card;
pub(crate) use foundations::DaisyColor;
