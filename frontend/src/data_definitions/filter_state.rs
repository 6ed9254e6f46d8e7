//! Filter state of one search page visit.
//!
//! The authoritative value lives in a [`FilterStore`]; components observe it
//! through a signal fed by a store subscription.

use std::rc::Rc;

use common::{filter::Filter, state_store::{FilterStore, Subscription}};
use dioxus::prelude::*;


/// Read-only view of the search filter. Changes go through the store.
#[derive(Clone, Copy, PartialEq)]
pub struct FilterState {
    filter: SyncSignal<Filter>,
}

impl FilterState {
    /// Current filter snapshot; subscribes the calling scope to changes.
    pub fn current(&self) -> Filter {
        self.filter.read().clone()
    }
}

/// Creates the store seeded from the route argument and re-seeds it whenever
/// the route argument changes (the filter editor navigates back with a new one).
pub fn use_filter_state(route_filter: ReadSignal<Filter>) -> FilterState {
    let store = use_hook(|| FilterStore::new(route_filter.peek().clone()));
    let filter = use_signal_sync(|| store.filter());

    let _subscription: Rc<Subscription> = use_hook({
        let store = store.clone();
        move || {
            Rc::new(store.subscribe(move |new_filter: &Filter| {
                let mut filter = filter;
                if *filter.peek() != *new_filter {
                    filter.set(new_filter.clone());
                }
            }))
        }
    });

    let set_filter = use_callback({
        let store = store.clone();
        move |new_filter: Filter| store.set_filter(new_filter)
    });

    use_effect(move || {
        let new_filter = route_filter.read().clone();
        if store.filter() != new_filter {
            set_filter(new_filter);
        }
    });

    FilterState { filter }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use dioxus::core::VirtualDom;

    use super::*;

    thread_local! {
        static SEEN: RefCell<Vec<Filter>> = const { RefCell::new(Vec::new()) };
    }

    fn seeded() -> Filter {
        Filter { departure: "서울시".to_string(), arrival: "부산시".to_string(), ..Default::default() }
    }

    fn Observer() -> Element {
        let route = use_signal(seeded);
        let state = use_filter_state(ReadSignal::from(route));
        SEEN.with(|seen| seen.borrow_mut().push(state.current()));
        rsx! {}
    }

    #[test]
    fn test_current_reads_filter_seeded_from_route() {
        let mut dom = VirtualDom::new(Observer);
        dom.rebuild_in_place();
        assert_eq!(SEEN.with(|seen| seen.borrow().last().cloned()), Some(seeded()));
    }
}
