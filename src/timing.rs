use std::time::Instant;

/// Measures the tick rate of the driver loop every `N_TICKS` ticks
pub struct TickTimer<const N_TICKS: usize> {
    /// Start of the current interval
    timer: Instant,
    /// Ticks counted since the start of the interval
    ticks: usize,
    /// Ticks per second over the last interval
    ticks_rate: f64,
}

impl<const N_TICKS: usize> TickTimer<N_TICKS> {
    pub fn new() -> Self {
        Self {
            timer: Instant::now(),
            ticks: 0,
            ticks_rate: f64::NAN,
        }
    }

    #[inline(always)]
    pub const fn ticks_rate(&self) -> f64 {
        self.ticks_rate
    }
}

impl<const N_TICKS: usize> Default for TickTimer<N_TICKS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N_TICKS: usize> TickTimer<N_TICKS> {
    /// Counts a tick, calls `func` each time an interval completes
    #[inline(always)]
    pub fn on_trigger<F>(&mut self, func: F)
    where
        F: Fn(&Self),
    {
        self.ticks += 1;
        if self.ticks % N_TICKS == 0 {
            self.ticks_rate = N_TICKS as f64 / self.timer.elapsed().as_secs_f64();

            func(&*self);

            self.timer = Instant::now();
        }
    }
}
