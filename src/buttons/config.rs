use fugit::{HertzU32, MillisDurationU32};

/// Frequency at which [`Buttons::scan`](super::Buttons::scan) is called.
///
/// Every threshold in a [`ButtonConfig`] is a number of scan ticks, so the
/// rate is what gives them a wall-clock meaning.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanRate(HertzU32);

impl ScanRate {
    pub const DEFAULT: Self = Self(HertzU32::Hz(50));

    pub const fn new(rate: HertzU32) -> Self {
        Self(rate)
    }

    pub const fn rate(&self) -> HertzU32 {
        self.0
    }

    /// Number of whole ticks that fit in `duration`, saturating at `u16::MAX`.
    pub const fn ticks(&self, duration: MillisDurationU32) -> u16 {
        let ticks = duration.to_millis() as u64 * self.0.to_Hz() as u64 / 1000;
        if ticks > u16::MAX as u64 {
            u16::MAX
        } else {
            ticks as u16
        }
    }
}

impl Default for ScanRate {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Press classification thresholds of one button, in scan ticks.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Reserved, the state machine does not read it.
    pub debounce_ticks: u16,
    pub short_press_ticks: u16,
    pub long_press_ticks: u16,
    pub long_hold_ticks: u16,
    /// Longest gap between two short presses that still chains them into
    /// one multi-click sequence.
    pub max_multi_click_interval_ticks: u16,
}

impl ButtonConfig {
    pub const fn from_millis(
        rate: ScanRate,
        short_press: MillisDurationU32,
        long_press: MillisDurationU32,
        long_hold: MillisDurationU32,
        max_multi_click_interval: MillisDurationU32,
    ) -> Self {
        Self {
            debounce_ticks: rate.ticks(MillisDurationU32::millis(20)),
            short_press_ticks: rate.ticks(short_press),
            long_press_ticks: rate.ticks(long_press),
            long_hold_ticks: rate.ticks(long_hold),
            max_multi_click_interval_ticks: rate.ticks(max_multi_click_interval),
        }
    }
}

impl Default for ButtonConfig {
    /// 1.5 s short press, 3 s long press, 4.5 s long hold and a 300 ms
    /// multi-click window at the default scan rate.
    fn default() -> Self {
        Self::from_millis(
            ScanRate::DEFAULT,
            MillisDurationU32::millis(1500),
            MillisDurationU32::millis(3000),
            MillisDurationU32::millis(4500),
            MillisDurationU32::millis(300),
        )
    }
}
