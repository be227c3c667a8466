//! Shared test infrastructure: a scripted in-memory backend
//!
//! Records every open, send and close so tests can check that handles are
//! released on every path and that nothing is sent for an invalid frame.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ethforge::backend::{AdapterEntry, LinkBackend, OpenConfig, TxHandle};
use ethforge::MacAddress;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Open(String, OpenConfig),
    Send(Vec<u8>),
    Close,
}

pub struct MockBackend {
    pub listing: Result<Vec<AdapterEntry>, String>,
    pub open_error: Option<String>,
    pub send_error: Option<String>,
    pub hardware: Option<MacAddress>,
    pub list_calls: Cell<usize>,
    pub events: Rc<RefCell<Vec<Event>>>,
}

pub struct MockHandle {
    send_error: Option<String>,
    events: Rc<RefCell<Vec<Event>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        MockBackend {
            listing: Ok(Vec::new()),
            open_error: None,
            send_error: None,
            hardware: None,
            list_calls: Cell::new(0),
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_adapters(entries: &[(Option<&str>, Option<&str>)]) -> Self {
        let mut backend = MockBackend::new();
        backend.listing = Ok(entries
            .iter()
            .map(|(name, desc)| AdapterEntry {
                name: name.map(String::from),
                description: desc.map(String::from),
            })
            .collect());
        backend
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn sent_frames(&self) -> Vec<Vec<u8>> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Send(bytes) => Some(bytes),
                _ => None,
            })
            .collect()
    }
}

impl TxHandle for MockHandle {
    fn send(&mut self, frame: &[u8]) -> Result<(), String> {
        self.events.borrow_mut().push(Event::Send(frame.to_vec()));
        match &self.send_error {
            Some(diag) => Err(diag.clone()),
            None => Ok(()),
        }
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.events.borrow_mut().push(Event::Close);
    }
}

impl LinkBackend for MockBackend {
    type Handle = MockHandle;

    fn list(&self) -> Result<Vec<AdapterEntry>, String> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.listing.clone()
    }

    fn open(&self, name: &str, config: &OpenConfig) -> Result<MockHandle, String> {
        self.events
            .borrow_mut()
            .push(Event::Open(name.to_string(), *config));
        if let Some(diag) = &self.open_error {
            return Err(diag.clone());
        }
        Ok(MockHandle {
            send_error: self.send_error.clone(),
            events: Rc::clone(&self.events),
        })
    }

    fn hardware_address(&self, _name: &str) -> Option<MacAddress> {
        self.hardware
    }
}
