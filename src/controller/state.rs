use crate::catalog::{BREEDS, FACTS};

pub const PROGRESS_MAX: u8 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Characteristics,
    Breeds,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Characteristics => "Characteristics",
            Tab::Breeds => "Popular Breeds",
        }
    }
}

/// Everything that can change the page state, whether it came from a timer
/// or from the visitor.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    FactRevealed,
    FactTick,
    ProgressTick,
    Liked,
    EmailEdited(String),
    Subscribed,
    TabSelected(Tab),
    CarouselNext,
    CarouselPrev,
    TimersReset,
}

/// Snapshot of the page. Transitions are pure: `apply` consumes the old
/// state and returns the new one.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub like_count: u64,
    pub fact_index: usize,
    pub fact_visible: bool,
    pub progress: u8,
    pub email: String,
    pub active_tab: Tab,
    pub carousel_index: usize,
    fact_count: usize,
    breed_count: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(FACTS.len(), BREEDS.len())
    }
}

impl PageState {
    pub fn new(fact_count: usize, breed_count: usize) -> Self {
        Self {
            like_count: 0,
            fact_index: 0,
            fact_visible: false,
            progress: 0,
            email: String::new(),
            active_tab: Tab::default(),
            carousel_index: 0,
            fact_count,
            breed_count,
        }
    }

    pub fn apply(mut self, event: PageEvent) -> Self {
        match event {
            PageEvent::FactRevealed => self.fact_visible = true,
            PageEvent::FactTick => self.fact_index = wrap_forward(self.fact_index, self.fact_count),
            PageEvent::ProgressTick => {
                self.progress = if self.progress < PROGRESS_MAX {
                    self.progress + 1
                } else {
                    0
                };
            }
            PageEvent::Liked => self.like_count = self.like_count.saturating_add(1),
            PageEvent::EmailEdited(email) => self.email = email,
            PageEvent::Subscribed => self.email.clear(),
            PageEvent::TabSelected(tab) => self.active_tab = tab,
            PageEvent::CarouselNext => {
                self.carousel_index = wrap_forward(self.carousel_index, self.breed_count)
            }
            PageEvent::CarouselPrev => {
                self.carousel_index = wrap_back(self.carousel_index, self.breed_count)
            }
            PageEvent::TimersReset => {
                self.fact_visible = false;
                self.fact_index = 0;
                self.progress = 0;
            }
        }
        self
    }
}

fn wrap_forward(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

fn wrap_back(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + len - 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: PageState, events: impl IntoIterator<Item = PageEvent>) -> PageState {
        events.into_iter().fold(state, PageState::apply)
    }

    #[test]
    fn fact_tick_wraps_at_catalog_length() {
        let state = run(PageState::new(3, 1), std::iter::repeat(PageEvent::FactTick).take(3));
        assert_eq!(state.fact_index, 0);

        let state = run(state, [PageEvent::FactTick]);
        assert_eq!(state.fact_index, 1);
    }

    #[test]
    fn progress_wraps_after_reaching_max() {
        let state = run(
            PageState::default(),
            std::iter::repeat(PageEvent::ProgressTick).take(100),
        );
        assert_eq!(state.progress, 100);

        let state = state.apply(PageEvent::ProgressTick);
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn fact_reveal_is_terminal() {
        let state = run(
            PageState::default(),
            [PageEvent::FactRevealed, PageEvent::FactRevealed, PageEvent::FactTick],
        );
        assert!(state.fact_visible);
    }

    #[test]
    fn subscribed_clears_only_the_email() {
        let state = run(
            PageState::default(),
            [
                PageEvent::Liked,
                PageEvent::EmailEdited("kit@example.com".into()),
                PageEvent::Subscribed,
            ],
        );
        assert!(state.email.is_empty());
        assert_eq!(state.like_count, 1);
    }

    #[test]
    fn carousel_wraps_in_both_directions() {
        let state = PageState::new(5, 4).apply(PageEvent::CarouselPrev);
        assert_eq!(state.carousel_index, 3);

        let state = state.apply(PageEvent::CarouselNext);
        assert_eq!(state.carousel_index, 0);
    }

    #[test]
    fn empty_catalogs_keep_indices_at_zero() {
        let state = run(
            PageState::new(0, 0),
            [PageEvent::FactTick, PageEvent::CarouselNext, PageEvent::CarouselPrev],
        );
        assert_eq!(state.fact_index, 0);
        assert_eq!(state.carousel_index, 0);
    }

    #[test]
    fn timers_reset_keeps_visitor_owned_fields() {
        let state = run(
            PageState::default(),
            [
                PageEvent::Liked,
                PageEvent::Liked,
                PageEvent::FactRevealed,
                PageEvent::FactTick,
                PageEvent::ProgressTick,
                PageEvent::EmailEdited("tom@cats.io".into()),
                PageEvent::TabSelected(Tab::Breeds),
                PageEvent::CarouselNext,
                PageEvent::TimersReset,
            ],
        );
        assert_eq!(state.like_count, 2);
        assert!(!state.fact_visible);
        assert_eq!(state.fact_index, 0);
        assert_eq!(state.progress, 0);
        assert_eq!(state.email, "tom@cats.io");
        assert_eq!(state.active_tab, Tab::Breeds);
        assert_eq!(state.carousel_index, 1);
    }
}
