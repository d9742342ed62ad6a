//! Single-slot double-click disambiguation for desktop icons.

use serde::{Deserialize, Serialize};

use crate::model::{IconId, TimerToken};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingClick {
    pub icon_id: IconId,
    pub token: TimerToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResolution {
    /// First click of a possible double-click; the caller schedules `token` and cancels
    /// `replaced` if a click on another icon was still pending.
    Pending {
        token: TimerToken,
        replaced: Option<TimerToken>,
    },
    /// Second click on the same icon inside the window; the caller cancels `cancelled`.
    DoubleClick { cancelled: TimerToken },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// The "last clicked icon" and its expiry timer. At most one click is pending desktop-wide.
pub struct ClickTracker {
    pending: Option<PendingClick>,
}

impl ClickTracker {
    pub fn pending(&self) -> Option<&PendingClick> {
        self.pending.as_ref()
    }

    /// Registers a click on `icon_id`. `allocate` is only called when a new timer is needed.
    pub fn click(
        &mut self,
        icon_id: &IconId,
        allocate: impl FnOnce() -> TimerToken,
    ) -> ClickResolution {
        match self.pending.take() {
            Some(pending) if &pending.icon_id == icon_id => ClickResolution::DoubleClick {
                cancelled: pending.token,
            },
            previous => {
                let token = allocate();
                self.pending = Some(PendingClick {
                    icon_id: icon_id.clone(),
                    token,
                });
                ClickResolution::Pending {
                    token,
                    replaced: previous.map(|p| p.token),
                }
            }
        }
    }

    /// Clears the pending click if `token` is its timer. Stale tokens are ignored.
    pub fn expire(&mut self, token: TimerToken) -> bool {
        if self.pending.as_ref().map(|p| p.token) == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tokens() -> impl FnMut() -> TimerToken {
        let mut next = 0;
        move || {
            next += 1;
            TimerToken(next)
        }
    }

    #[test]
    fn second_click_on_same_icon_is_a_double_click() {
        let mut next = tokens();
        let mut tracker = ClickTracker::default();
        let icon = IconId::new("computer");

        let first = tracker.click(&icon, &mut next);
        assert_eq!(
            first,
            ClickResolution::Pending {
                token: TimerToken(1),
                replaced: None
            }
        );
        assert_eq!(
            tracker.click(&icon, &mut next),
            ClickResolution::DoubleClick {
                cancelled: TimerToken(1)
            }
        );
        assert!(tracker.pending().is_none());
    }

    #[test]
    fn click_on_other_icon_replaces_pending_click() {
        let mut next = tokens();
        let mut tracker = ClickTracker::default();

        tracker.click(&IconId::new("a"), &mut next);
        let resolution = tracker.click(&IconId::new("b"), &mut next);

        assert_eq!(
            resolution,
            ClickResolution::Pending {
                token: TimerToken(2),
                replaced: Some(TimerToken(1))
            }
        );
        // The first icon's pending click is gone, so clicking it again starts over.
        assert!(matches!(
            tracker.click(&IconId::new("a"), &mut next),
            ClickResolution::Pending { .. }
        ));
    }

    #[test]
    fn stale_expiry_does_not_clear_newer_click() {
        let mut next = tokens();
        let mut tracker = ClickTracker::default();

        tracker.click(&IconId::new("a"), &mut next);
        tracker.click(&IconId::new("b"), &mut next);

        assert!(!tracker.expire(TimerToken(1)));
        assert_eq!(tracker.pending().map(|p| p.icon_id.as_str()), Some("b"));
        assert!(tracker.expire(TimerToken(2)));
        assert!(tracker.pending().is_none());
    }
}
