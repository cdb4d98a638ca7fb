//! Publishing calendar bounds
//!
//! The calendar is sized from the campaign length, clamped to
//! [`CalendarBounds::MIN_DAYS`]..=[`CalendarBounds::MAX_DAYS`], and spread
//! across platforms at a fixed cadence. Offsets never exceed the last day.

/// Pillars scheduled per platform
pub const PILLARS_PER_PLATFORM: usize = 3;

/// Calendar rows kept after generation (platform-major order)
pub const MAX_CALENDAR_ROWS: usize = 6;

/// Days between successive pillars on one platform
pub const PILLAR_SPACING: u32 = 2;

/// Effective calendar length and platform cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarBounds {
    /// Campaign length after clamping
    pub total_days: u32,
    /// Days between platform start offsets (at least 1)
    pub cadence: u32,
}

impl CalendarBounds {
    /// Lower clamp for the calendar length
    pub const MIN_DAYS: u32 = 3;

    /// Upper clamp for the calendar length
    pub const MAX_DAYS: u32 = 21;

    /// Derive bounds from the requested length and platform count
    #[must_use]
    pub fn new(campaign_length: u32, platform_count: usize) -> Self {
        let total_days = campaign_length.clamp(Self::MIN_DAYS, Self::MAX_DAYS);
        let platforms = u32::try_from(platform_count.max(1)).unwrap_or(u32::MAX);
        Self {
            total_days,
            cadence: (total_days / platforms).max(1),
        }
    }

    /// Last schedulable day offset
    #[inline]
    #[must_use]
    pub fn last_day(&self) -> u32 {
        self.total_days.saturating_sub(1)
    }

    /// Offset for a platform/pillar slot, clamped into `0..=last_day`
    #[must_use]
    pub fn day_offset(&self, platform_index: usize, pillar_index: usize) -> u32 {
        let platform = u32::try_from(platform_index).unwrap_or(u32::MAX);
        let pillar = u32::try_from(pillar_index).unwrap_or(u32::MAX);
        platform
            .saturating_mul(self.cadence)
            .saturating_add(pillar.saturating_mul(PILLAR_SPACING))
            .min(self.last_day())
    }
}
