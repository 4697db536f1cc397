//! Idle session lock: DOM adapter around [`guard::IdleWatcher`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once inside the router. Every route change re-arms the watcher
//! (exempt routes disarm it); every qualifying window event feeds the
//! watcher's activity port. When the deadline passes the page is
//! hard-navigated to the lock route.
//!
//! DESIGN
//! ======
//! One sleeper task per arming. Activity only moves the watcher's deadline;
//! the sleeper asks [`guard::IdleWatcher::wake`] what to do when it wakes:
//! exit when a re-arm made it stale, sleep again for the remainder, or lock.

use leptos::prelude::*;

/// Window events that count as user activity.
pub const ACTIVITY_EVENTS: [&str; 6] = ["mousedown", "mousemove", "keydown", "scroll", "touchstart", "click"];

#[component]
pub fn AutoLockTimer() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    browser::install();
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use guard::{Clock, IdlePolicy, IdleWatcher, Wake};
    use leptos::prelude::*;
    use leptos_router::hooks::use_location;

    use super::ACTIVITY_EVENTS;
    use crate::util::clock::BrowserClock;
    use crate::util::navigation::hard_navigate;

    struct IdleLoop {
        watcher: RefCell<IdleWatcher>,
        sleeping: Cell<bool>,
        alive: Arc<AtomicBool>,
    }

    pub(super) fn install() {
        let alive = Arc::new(AtomicBool::new(true));
        let idle = Rc::new(IdleLoop {
            watcher: RefCell::new(IdleWatcher::new(IdlePolicy::default())),
            sleeping: Cell::new(false),
            alive: Arc::clone(&alive),
        });

        let location = use_location();
        let idle_route = Rc::clone(&idle);
        Effect::new(move || {
            let path = location.pathname.get();
            let delay = idle_route
                .watcher
                .borrow_mut()
                .arm(&path, BrowserClock.now_ms());
            idle_route.sleeping.set(false);
            if let Some(delay) = delay {
                start_sleeper(&idle_route, delay);
            }
        });

        let handles: Vec<WindowListenerHandle> = ACTIVITY_EVENTS
            .iter()
            .map(|name| {
                let idle = Rc::clone(&idle);
                window_event_listener_untyped(name, move |_| on_activity(&idle))
            })
            .collect();

        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            for handle in handles {
                handle.remove();
            }
        });
    }

    fn on_activity(idle: &Rc<IdleLoop>) {
        let delay = idle
            .watcher
            .borrow_mut()
            .record_activity(BrowserClock.now_ms());
        if let Some(delay) = delay {
            if !idle.sleeping.get() {
                start_sleeper(idle, delay);
            }
        }
    }

    fn start_sleeper(idle: &Rc<IdleLoop>, delay: Duration) {
        let generation = idle.watcher.borrow().generation();
        idle.sleeping.set(true);
        let idle = Rc::clone(idle);
        leptos::task::spawn_local(async move {
            let mut delay = delay;
            loop {
                gloo_timers::future::sleep(delay).await;
                if !idle.alive.load(Ordering::Relaxed) {
                    return;
                }
                let wake = idle
                    .watcher
                    .borrow_mut()
                    .wake(generation, BrowserClock.now_ms());
                match wake {
                    Wake::Stale => return,
                    Wake::Resleep(left) => delay = left,
                    Wake::Lock { route } => {
                        idle.sleeping.set(false);
                        hard_navigate(&route);
                        return;
                    }
                    Wake::Done => {
                        idle.sleeping.set(false);
                        return;
                    }
                }
            }
        });
    }
}
