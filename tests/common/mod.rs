#![allow(dead_code)]

use filedrop_lib::files::ServiceConfig;
use filedrop_lib::widget::{Anchor, BlobStore, FileBrowser, StatusMessage, Surface, ViewTree};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Status(StatusMessage),
    Render(ViewTree),
    ClearSelection,
    Click { anchor: Anchor, bytes: Vec<u8> },
}

/// Surface that records everything the widget does to it
#[derive(Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<Event>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<StatusMessage> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Status(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn renders(&self) -> Vec<ViewTree> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Render(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    pub fn last_render(&self) -> Option<ViewTree> {
        self.renders().pop()
    }

    pub fn clicks(&self) -> Vec<(Anchor, Vec<u8>)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Click { anchor, bytes } => Some((anchor, bytes)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn set_status(&self, status: &StatusMessage) {
        self.events.lock().unwrap().push(Event::Status(status.clone()));
    }

    fn render(&self, view: &ViewTree) {
        self.events.lock().unwrap().push(Event::Render(view.clone()));
    }

    fn clear_selection(&self) {
        self.events.lock().unwrap().push(Event::ClearSelection);
    }

    fn click(&self, anchor: &Anchor, blobs: &BlobStore) -> Result<(), String> {
        let blob = blobs
            .resolve(&anchor.href)
            .ok_or_else(|| "handle not live".to_string())?;
        self.events.lock().unwrap().push(Event::Click {
            anchor: anchor.clone(),
            bytes: blob.bytes.to_vec(),
        });
        Ok(())
    }
}

/// Surface whose save-as always fails, recording only status lines
#[derive(Default)]
pub struct FailingClickSurface {
    statuses: Mutex<Vec<StatusMessage>>,
}

impl FailingClickSurface {
    pub fn statuses(&self) -> Vec<StatusMessage> {
        self.statuses.lock().unwrap().clone()
    }
}

impl Surface for FailingClickSurface {
    fn set_status(&self, status: &StatusMessage) {
        self.statuses.lock().unwrap().push(status.clone());
    }

    fn render(&self, _view: &ViewTree) {}

    fn click(&self, _anchor: &Anchor, _blobs: &BlobStore) -> Result<(), String> {
        Err("disk full".to_string())
    }
}

pub fn browser_for(base_url: &str) -> (FileBrowser, Arc<RecordingSurface>) {
    browser_with(ServiceConfig::new(base_url))
}

pub fn browser_with(config: ServiceConfig) -> (FileBrowser, Arc<RecordingSurface>) {
    let surface = Arc::new(RecordingSurface::default());
    let browser = FileBrowser::new(config, surface.clone()).expect("valid config");
    (browser, surface)
}
