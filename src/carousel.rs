//! Auto-rotating carousel over a fixed set of fact panels.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use crate::error::CarouselError;

/// Time between two automatic transitions.
pub const DEFAULT_ROTATE_INTERVAL: Duration = Duration::from_secs(5);

/// Cyclic state machine over `N >= 1` panels.
///
/// Exactly one panel, and the indicator with the same index, is active at
/// any time. The active index always stays in `[0, N)`.
#[derive(Clone, Debug)]
pub struct FactCarousel<T> {
    panels: Vec<T>,
    current: usize,
}

impl<T> FactCarousel<T> {
    /// Creates a carousel showing the first of `panels`.
    ///
    /// Fails with [`CarouselError::Empty`] when there are no panels.
    pub fn new(panels: Vec<T>) -> Result<Self, CarouselError> {
        if panels.is_empty() {
            return Err(CarouselError::Empty);
        }
        Ok(Self { panels, current: 0 })
    }

    /// Number of panels, fixed at construction.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always false: construction rejects an empty panel list.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Index of the active panel and indicator.
    pub fn active_index(&self) -> usize {
        self.current
    }

    /// The panel currently shown.
    pub fn active_panel(&self) -> &T {
        &self.panels[self.current]
    }

    /// All panels in display order.
    pub fn panels(&self) -> &[T] {
        &self.panels
    }

    /// Whether the panel (and indicator) at `index` is active.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Active flag of every panel/indicator pair, in order.
    pub fn active_flags(&self) -> Vec<bool> {
        (0..self.panels.len()).map(|i| self.is_active(i)).collect()
    }

    /// Advances to the next panel, wrapping after the last one.
    pub fn tick(&mut self) -> usize {
        self.current = (self.current + 1) % self.panels.len();
        self.current
    }

    /// Jumps straight to `index`.
    pub fn select(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.panels.len() {
            return Err(CarouselError::OutOfRange {
                index,
                count: self.panels.len(),
            });
        }
        self.current = index;
        Ok(index)
    }

    /// Selects the panel named by an indicator's index attribute.
    pub fn select_indicator(&mut self, attribute: &str) -> Result<usize, CarouselError> {
        let index = attribute
            .trim()
            .parse::<usize>()
            .map_err(|_| CarouselError::InvalidIndicator(attribute.to_string()))?;
        self.select(index)
    }
}

/// Display layer the carousel is bound to.
pub trait CarouselDisplay<T> {
    /// Marks the active panel and indicator, clearing all others.
    fn show(&mut self, carousel: &FactCarousel<T>);
}

/// Ticks the carousel every `period` and pushes each transition to `display`.
///
/// The loop only keeps a weak handle and ends once every other owner of the
/// carousel has dropped it. A zero `period` is rejected with
/// [`CarouselError::ZeroInterval`] before anything is scheduled.
pub async fn run_rotation<T, D>(
    carousel: Arc<Mutex<FactCarousel<T>>>,
    period: Duration,
    mut display: D,
) -> Result<(), CarouselError>
where
    D: CarouselDisplay<T>,
{
    if period.is_zero() {
        return Err(CarouselError::ZeroInterval);
    }

    let weak = Arc::downgrade(&carousel);
    drop(carousel);

    let start = tokio::time::Instant::now() + period;
    let mut interval = tokio::time::interval_at(start, period);

    loop {
        interval.tick().await;

        let Some(carousel) = weak.upgrade() else {
            log::debug!("Carousel dropped, stopping rotation");
            break;
        };
        let mut carousel = carousel.lock().unwrap_or_else(PoisonError::into_inner);
        let index = carousel.tick();
        log::trace!("Rotated carousel to fact {index}");
        display.show(&carousel);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(count: usize) -> Result<FactCarousel<String>, CarouselError> {
        FactCarousel::new((0..count).map(|i| format!("fact {i}")).collect())
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(
            FactCarousel::<String>::new(vec![]).err(),
            Some(CarouselError::Empty)
        );
    }

    #[test]
    fn test_ticks_cycle_with_period_n() -> Result<(), CarouselError> {
        let mut carousel = facts(4)?;
        assert_eq!(carousel.active_index(), 0);

        let visited: Vec<usize> = (0..4).map(|_| carousel.tick()).collect();
        assert_eq!(visited, vec![1, 2, 3, 0]);
        assert_eq!(carousel.active_panel(), "fact 0");
        Ok(())
    }

    #[test]
    fn test_len_is_fixed_and_never_empty() -> Result<(), CarouselError> {
        let mut carousel = facts(2)?;
        assert_eq!(carousel.len(), 2);
        assert!(!carousel.is_empty());
        carousel.tick();
        assert_eq!(carousel.panels().len(), 2);
        assert!(!carousel.is_empty());
        Ok(())
    }

    #[test]
    fn test_single_panel_stays_put() -> Result<(), CarouselError> {
        let mut carousel = facts(1)?;
        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.tick(), 0);
        Ok(())
    }

    #[test]
    fn test_select_from_any_state() -> Result<(), CarouselError> {
        let mut carousel = facts(5)?;
        carousel.tick();
        carousel.tick();
        assert_eq!(carousel.select(4)?, 4);
        assert_eq!(carousel.active_flags(), vec![false, false, false, false, true]);
        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.select(0)?, 0);
        Ok(())
    }

    #[test]
    fn test_select_out_of_range_keeps_state() -> Result<(), CarouselError> {
        let mut carousel = facts(3)?;
        carousel.tick();
        assert_eq!(
            carousel.select(3),
            Err(CarouselError::OutOfRange { index: 3, count: 3 })
        );
        assert_eq!(carousel.active_index(), 1);
        Ok(())
    }

    #[test]
    fn test_select_indicator() -> Result<(), CarouselError> {
        let mut carousel = facts(3)?;
        assert_eq!(carousel.select_indicator(" 2 ")?, 2);
        assert_eq!(
            carousel.select_indicator("two"),
            Err(CarouselError::InvalidIndicator("two".to_string()))
        );
        assert_eq!(carousel.active_index(), 2);
        Ok(())
    }

    #[test]
    fn test_exactly_one_active() -> Result<(), CarouselError> {
        let mut carousel = facts(3)?;
        for _ in 0..7 {
            let flags = carousel.active_flags();
            assert_eq!(flags.iter().filter(|active| **active).count(), 1);
            carousel.tick();
        }
        Ok(())
    }

    #[derive(Clone, Default)]
    struct RecordingDisplay(Arc<Mutex<Vec<usize>>>);

    impl CarouselDisplay<String> for RecordingDisplay {
        fn show(&mut self, carousel: &FactCarousel<String>) {
            self.0.lock().unwrap().push(carousel.active_index());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rotation_timer() -> Result<(), Box<dyn std::error::Error>> {
        let carousel = Arc::new(Mutex::new(facts(3)?));
        let display = RecordingDisplay::default();

        let handle = tokio::spawn(run_rotation(
            carousel.clone(),
            DEFAULT_ROTATE_INTERVAL,
            display.clone(),
        ));

        tokio::time::sleep(DEFAULT_ROTATE_INTERVAL * 3 + Duration::from_millis(10)).await;
        assert_eq!(*display.0.lock().unwrap(), vec![1, 2, 0]);
        assert_eq!(carousel.lock().unwrap().active_index(), 0);

        carousel.lock().unwrap().select(2)?;
        tokio::time::sleep(DEFAULT_ROTATE_INTERVAL).await;
        assert_eq!(carousel.lock().unwrap().active_index(), 0);

        drop(carousel);
        handle.await??;
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let carousel = Arc::new(Mutex::new(facts(3)?));
        let display = RecordingDisplay::default();

        let handle = tokio::spawn(run_rotation(
            carousel.clone(),
            Duration::ZERO,
            display.clone(),
        ));

        assert_eq!(handle.await?, Err(CarouselError::ZeroInterval));
        assert!(display.0.lock().unwrap().is_empty());
        assert_eq!(carousel.lock().unwrap().active_index(), 0);
        Ok(())
    }
}
