//! Analytics sink that keeps every event for assertions.

use std::cell::RefCell;

use urledit_core::collab::AnalyticsSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub category: String,
    pub action: String,
    pub label: String,
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<Event>>,
}

impl RecordingSink {
    pub fn labels(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.label.clone()).collect()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl AnalyticsSink for RecordingSink {
    fn notify(&self, category: &str, action: &str, label: &str) {
        self.events.borrow_mut().push(Event {
            category: category.to_string(),
            action: action.to_string(),
            label: label.to_string(),
        });
    }
}
