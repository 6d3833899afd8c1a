/// DaisyUI color tokens used by badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DaisyColor {
    Primary,
    Neutral,
}

impl DaisyColor {
    /// Class suffix (e.g. `"primary"`) for the color.
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Neutral => "neutral",
        }
    }

    /// `prefix-color` class, e.g. `badge-primary`.
    pub(crate) fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.as_str())
    }
}
