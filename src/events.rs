// src/events.rs
use log::debug;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Outgoing event names published by the views.
pub const BIDS_OPEN: &str = "bids:open";
pub const ORDER_OPEN: &str = "order:open";

/// The narrow publish capability handed to views.
pub trait Events {
    fn emit(&self, event: &str, payload: Option<Value>);
}

pub type Subscriber = Rc<dyn Fn(&str, Option<&Value>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
enum EventPattern {
    Any,
    Exact(String),
    /// `"order:*"` style namespace match.
    Prefix(String),
}

impl EventPattern {
    fn parse(pattern: &str) -> Self {
        match pattern {
            "*" => EventPattern::Any,
            _ => match pattern.strip_suffix('*') {
                Some(prefix) => EventPattern::Prefix(prefix.to_string()),
                None => EventPattern::Exact(pattern.to_string()),
            },
        }
    }

    fn matches(&self, event: &str) -> bool {
        match self {
            EventPattern::Any => true,
            EventPattern::Exact(name) => name == event,
            EventPattern::Prefix(prefix) => event.starts_with(prefix.as_str()),
        }
    }
}

struct Subscription {
    id: SubscriptionId,
    pattern: EventPattern,
    callback: Subscriber,
}

/// In-process broker: the application side of the publish/subscribe seam.
#[derive(Default)]
pub struct EventEmitter {
    subscriptions: RefCell<Vec<Subscription>>,
    next_id: Cell<u64>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to an exact event name, a `prefix:*` namespace or `*`.
    pub fn on<F>(&self, pattern: &str, callback: F) -> SubscriptionId
    where
        F: Fn(&str, Option<&Value>) + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscriptions.borrow_mut().push(Subscription {
            id,
            pattern: EventPattern::parse(pattern),
            callback: Rc::new(callback),
        });
        id
    }

    pub fn on_all<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str, Option<&Value>) + 'static,
    {
        self.on("*", callback)
    }

    pub fn off(&self, id: SubscriptionId) {
        self.subscriptions.borrow_mut().retain(|s| s.id != id);
    }

    pub fn off_all(&self) {
        self.subscriptions.borrow_mut().clear();
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    /// A callback that emits `event` with whatever payload it is given.
    pub fn trigger(self: &Rc<Self>, event: &str) -> impl Fn(Option<Value>) {
        let emitter = Rc::clone(self);
        let event = event.to_string();
        move |payload| emitter.emit(&event, payload)
    }
}

impl Events for EventEmitter {
    fn emit(&self, event: &str, payload: Option<Value>) {
        let callbacks: Vec<Subscriber> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.pattern.matches(event))
            .map(|s| s.callback.clone())
            .collect();
        debug!("emit {} to {} subscriber(s)", event, callbacks.len());
        for callback in callbacks {
            callback(event, payload.as_ref());
        }
    }
}
