// src/dom/event.rs
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::arena::NodeId;
use super::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
    Change,
    Input,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Click => write!(f, "click"),
            EventKind::Submit => write!(f, "submit"),
            EventKind::Change => write!(f, "change"),
            EventKind::Input => write!(f, "input"),
        }
    }
}

pub type Handler = Rc<dyn Fn(&Document, &Event)>;

pub(crate) struct Listener {
    pub node: NodeId,
    pub kind: EventKind,
    pub handler: Handler,
}

/// A UI event travelling from its target up through the ancestors.
#[derive(Debug)]
pub struct Event {
    kind: EventKind,
    target: NodeId,
    current_target: Cell<NodeId>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
}

impl Event {
    pub(crate) fn new(kind: EventKind, target: NodeId) -> Self {
        Event {
            kind,
            target,
            current_target: Cell::new(target),
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The node whose listener is currently running.
    pub fn current_target(&self) -> NodeId {
        self.current_target.get()
    }

    pub(crate) fn set_current_target(&self, node: NodeId) {
        self.current_target.set(node);
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}
