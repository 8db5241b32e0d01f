use payloads::Resource;
use query::Trigger;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};
use yew::prelude::*;
use yew_router::prelude::*;

use super::use_paginated_query::ResourceQuery;

/// Feed browser and router events into the query's revalidation triggers.
#[hook]
pub fn use_revalidation<R: Resource>(query: Rc<ResourceQuery<R>>) {
    {
        let query = query.clone();
        use_effect_with((), move |_| {
            let listeners = listen_for_browser_events(&query);
            // Listeners unregister themselves when dropped
            move || drop(listeners)
        });
    }

    // Each route renders its own page, so returning to a route remounts it
    // and the mount fetches. This only fires for location changes inside
    // the same page; its first run is the mount, which the query ignores.
    let location = use_location();
    use_effect_with(location, move |_| {
        revalidate(&query, Trigger::RouteEntered);
    });
}

fn revalidate<R: Resource>(query: &Rc<ResourceQuery<R>>, trigger: Trigger) {
    let query = query.clone();
    yew::platform::spawn_local(async move {
        let result = query.revalidate(trigger).await;
        tracing::trace!(table = R::TABLE, ?trigger, ?result, "Revalidation");
    });
}

fn listen_for_browser_events<R: Resource>(
    query: &Rc<ResourceQuery<R>>,
) -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let mut listeners = Vec::new();

    if let Some(document) = window.document() {
        query.observe_visibility(!document.hidden());
        let query = query.clone();
        let target: EventTarget = document.clone().into();
        listeners.extend(EventListener::new(
            target,
            "visibilitychange",
            move |_| {
                let visible = !document.hidden();
                revalidate(&query, Trigger::Visibility { visible });
            },
        ));
    }

    let query = query.clone();
    listeners.extend(EventListener::new(window.into(), "online", move |_| {
        revalidate(&query, Trigger::Online);
    }));
    listeners
}

/// A DOM event listener, removed when dropped.
struct EventListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    fn new(
        target: EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let closure =
            Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        match target.add_event_listener_with_callback(
            event,
            closure.as_ref().unchecked_ref(),
        ) {
            Ok(()) => Some(Self {
                target,
                event,
                closure,
            }),
            Err(e) => {
                tracing::warn!("Failed to listen for {event}: {e:?}");
                None
            }
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
