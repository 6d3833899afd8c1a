pub(crate) mod daisy;
pub(crate) mod language_toggle;
pub(crate) mod navbar;
pub(crate) mod toast;
