//! Home page banner carousel.
//!
//! [`Carousel`] is the pure position state. [`CarouselTimer`] drives it from
//! a background task: the position advances every period, wrapping after the
//! last slide, and a manual jump restarts the period so the chosen slide gets
//! its full time on screen. The slide count is read again on every tick and
//! jump, so slides added or removed while the timer runs are picked up.
//! Dropping the timer cancels the task.

use std::sync::Arc;
use std::time::Duration;

use personalistar_core::BannerSlide;
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

/// Position within a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Index of the slide on screen. Always 0 for an empty carousel.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next slide, wrapping to the first after the last.
    pub const fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Change the number of slides. A position past the new end goes back
    /// to the first slide.
    pub const fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    /// Jump to `index`. Returns `false` and stays put if it is out of range.
    pub const fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

// =============================================================================
// Timer
// =============================================================================

/// Current number of slides, read by the timer on every tick.
pub type SlideCount = Arc<dyn Fn() -> usize + Send + Sync>;

/// Background task advancing a [`Carousel`] on a fixed period.
///
/// Must be created inside a tokio runtime.
pub struct CarouselTimer {
    slides: SlideCount,
    jumps: mpsc::UnboundedSender<usize>,
    position: watch::Receiver<usize>,
    task: JoinHandle<()>,
}

impl std::fmt::Debug for CarouselTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselTimer")
            .field("slides", &(self.slides)())
            .field("position", &*self.position.borrow())
            .finish_non_exhaustive()
    }
}

impl CarouselTimer {
    /// Start auto-advancing a fixed set of `len` slides every `period`.
    #[must_use]
    pub fn spawn(len: usize, period: Duration) -> Self {
        Self::spawn_with(Arc::new(move || len), period)
    }

    /// Start auto-advancing every `period` over however many slides
    /// `slides` reports at each step.
    #[must_use]
    pub fn spawn_with(slides: SlideCount, period: Duration) -> Self {
        let (jumps, jump_rx) = mpsc::unbounded_channel();
        let (position_tx, position) = watch::channel(0);
        let len = slides();
        let task = tokio::spawn(run_timer(
            Carousel::new(len),
            Arc::clone(&slides),
            period,
            jump_rx,
            position_tx,
        ));
        tracing::debug!(slides = len, period_ms = period.as_millis(), "Carousel timer started");

        Self {
            slides,
            jumps,
            position,
            task,
        }
    }

    /// Index of the slide on screen.
    #[must_use]
    pub fn current(&self) -> usize {
        *self.position.borrow()
    }

    /// Watch the position; the receiver errors once the timer is gone.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.position.clone()
    }

    /// Show slide `index` now and restart the period.
    ///
    /// Returns `false` for an out-of-range index.
    pub fn go_to(&self, index: usize) -> bool {
        index < (self.slides)() && self.jumps.send(index).is_ok()
    }
}

impl Drop for CarouselTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_timer(
    mut carousel: Carousel,
    slides: SlideCount,
    period: Duration,
    mut jumps: mpsc::UnboundedReceiver<usize>,
    position: watch::Sender<usize>,
) {
    let mut deadline = Instant::now() + period;
    loop {
        tokio::select! {
            () = sleep_until(deadline) => {
                carousel.resize(slides());
                carousel.advance();
                deadline += period;
            }
            jump = jumps.recv() => {
                let Some(index) = jump else { break };
                carousel.resize(slides());
                carousel.go_to(index);
                deadline = Instant::now() + period;
            }
        }
        position.send_replace(carousel.current());
    }
}

// =============================================================================
// View
// =============================================================================

/// One banner as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideView {
    pub image_url: String,
    /// First word of the title, set large.
    pub headline: String,
    /// Rest of the title after the first word.
    pub headline_rest: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    /// `true` when `button_link` is an absolute URL rather than a site path.
    pub external: bool,
}

impl From<&BannerSlide> for SlideView {
    fn from(slide: &BannerSlide) -> Self {
        let (headline, headline_rest) = split_headline(&slide.title);
        Self {
            image_url: slide.image_url.clone(),
            headline,
            headline_rest,
            subtitle: slide.subtitle.clone(),
            button_text: slide.button_text.clone(),
            button_link: slide.button_link.clone(),
            external: url::Url::parse(&slide.button_link).is_ok(),
        }
    }
}

/// An indicator dot under the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// The carousel at one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselView {
    pub current: SlideView,
    pub indicators: Vec<Indicator>,
}

impl CarouselView {
    /// Render `slides` with `index` on screen.
    ///
    /// Returns `None` when there are no slides; an out-of-range index falls
    /// back to the first slide.
    #[must_use]
    pub fn new(slides: &[BannerSlide], index: usize) -> Option<Self> {
        let index = if index < slides.len() { index } else { 0 };
        let current = SlideView::from(slides.get(index)?);
        let indicators = (0..slides.len())
            .map(|i| Indicator {
                index: i,
                active: i == index,
            })
            .collect();
        Some(Self {
            current,
            indicators,
        })
    }
}

fn split_headline(title: &str) -> (String, String) {
    let mut words = title.split_whitespace();
    let first = words.next().unwrap_or_default().to_string();
    let rest = words.collect::<Vec<_>>().join(" ");
    (first, rest)
}
