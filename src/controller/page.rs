use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::{PageTimings, LIKE_CONFETTI};
use crate::controller::effects::{Celebration, Notifier, Toast};
use crate::controller::error::{validate_email, ValidationError};
use crate::controller::scheduler::{Scheduler, TimerHandle};
use crate::controller::state::{PageEvent, PageState, Tab};

type Observer = Box<dyn Fn(&PageState)>;

/// State reachable from timer callbacks.
struct Shared {
    state: RefCell<PageState>,
    generation: Cell<u64>,
    observer: RefCell<Option<Observer>>,
}

impl Shared {
    fn dispatch(&self, event: PageEvent) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            let next = std::mem::take(&mut *state).apply(event);
            *state = next;
            state.clone()
        };
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }

    /// Timer firings carry the generation they were scheduled under; once the
    /// controller deactivates, late firings are dropped.
    fn dispatch_from_timer(&self, generation: u64, event: PageEvent) {
        if self.generation.get() != generation {
            debug!("dropping stale timer event {:?}", event);
            return;
        }
        self.dispatch(event);
    }
}

pub struct PageController<S: Scheduler> {
    scheduler: S,
    timings: PageTimings,
    celebration: Rc<dyn Celebration>,
    notifier: Rc<dyn Notifier>,
    shared: Rc<Shared>,
    timers: Vec<TimerHandle>,
}

impl<S: Scheduler> PageController<S> {
    pub fn new(
        scheduler: S,
        timings: PageTimings,
        celebration: Rc<dyn Celebration>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        Self {
            scheduler,
            timings,
            celebration,
            notifier,
            shared: Rc::new(Shared {
                state: RefCell::new(PageState::default()),
                generation: Cell::new(0),
                observer: RefCell::new(None),
            }),
            timers: Vec::new(),
        }
    }

    /// Called with a fresh snapshot after every mutation.
    pub fn set_observer(&mut self, observer: impl Fn(&PageState) + 'static) {
        *self.shared.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn state(&self) -> PageState {
        self.shared.state.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn on_activate(&mut self) {
        if self.is_active() {
            debug!("page re-activated, releasing previous timers first");
            self.on_deactivate();
        }
        self.shared.dispatch(PageEvent::TimersReset);

        let generation = self.shared.generation.get();

        let shared = Rc::clone(&self.shared);
        let reveal = self.scheduler.schedule_once(
            self.timings.fact_reveal_delay,
            Box::new(move || shared.dispatch_from_timer(generation, PageEvent::FactRevealed)),
        );

        let shared = Rc::clone(&self.shared);
        let rotate = self.scheduler.schedule_repeating(
            self.timings.fact_rotation,
            Box::new(move || shared.dispatch_from_timer(generation, PageEvent::FactTick)),
        );

        let shared = Rc::clone(&self.shared);
        let progress = self.scheduler.schedule_repeating(
            self.timings.progress_tick,
            Box::new(move || shared.dispatch_from_timer(generation, PageEvent::ProgressTick)),
        );

        self.timers = vec![reveal, rotate, progress];
        info!("page activated with {} timers", self.timers.len());
    }

    pub fn on_deactivate(&mut self) {
        self.shared
            .generation
            .set(self.shared.generation.get().wrapping_add(1));
        let released = self.timers.len();
        for handle in self.timers.drain(..) {
            self.scheduler.cancel(handle);
        }
        if released > 0 {
            info!("page deactivated, released {} timers", released);
        }
    }

    pub fn like(&mut self) {
        self.shared.dispatch(PageEvent::Liked);
        debug!("liked, count is now {}", self.shared.state.borrow().like_count);
        self.celebration.celebrate(&LIKE_CONFETTI);
    }

    pub fn set_email(&mut self, email: String) {
        self.shared.dispatch(PageEvent::EmailEdited(email));
    }

    /// Simulated newsletter signup. Nothing leaves the page.
    pub fn subscribe(&mut self) -> Result<(), ValidationError> {
        let email = self.shared.state.borrow().email.clone();
        match validate_email(&email) {
            Ok(()) => {
                self.notifier.notify(Toast::success(
                    "Subscribed!",
                    "Thanks for subscribing! Cat facts are on their way to your inbox.",
                ));
                self.shared.dispatch(PageEvent::Subscribed);
                info!("newsletter signup accepted");
                Ok(())
            }
            Err(err) => {
                warn!("newsletter signup rejected: {}", err);
                self.notifier
                    .notify(Toast::error("Oops!", "Please enter a valid email address."));
                Err(err)
            }
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.shared.dispatch(PageEvent::TabSelected(tab));
    }

    pub fn next_breed(&mut self) {
        self.shared.dispatch(PageEvent::CarouselNext);
    }

    pub fn previous_breed(&mut self) {
        self.shared.dispatch(PageEvent::CarouselPrev);
    }
}

impl<S: Scheduler> Drop for PageController<S> {
    fn drop(&mut self) {
        self.on_deactivate();
    }
}
