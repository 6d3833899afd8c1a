//! Shared UI payloads that are not fixture records.

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// Alert modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Most toasts shown at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

/// Auto-dismiss delay in milliseconds.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Append a toast, trimming the oldest beyond [`MAX_TOASTS`].
pub fn push_capped(list: &mut Vec<Toast>, toast: Toast) {
    list.push(toast);
    if list.len() > MAX_TOASTS {
        let drain = list.len() - MAX_TOASTS;
        list.drain(0..drain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_toasts_are_dropped() {
        let mut list = Vec::new();
        for id in 1..=6 {
            push_capped(
                &mut list,
                Toast {
                    id,
                    message: format!("t{id}"),
                    kind: ToastKind::Success,
                },
            );
        }
        assert_eq!(list.len(), MAX_TOASTS);
        assert_eq!(list.first().map(|t| t.id), Some(3));
        assert_eq!(list.last().map(|t| t.id), Some(6));
    }
}
