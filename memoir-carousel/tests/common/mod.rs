//! Shared fixtures for carousel integration tests

#![allow(dead_code)]

use memoir_carousel::capabilities::{FullScreenViewer, ViewerRecord};
use memoir_carousel::Carousel;
use memoir_model::Entry;

pub fn entry(id: u32, date: &str, year: i32, image: &str) -> Entry {
    Entry::new(id, date, year, format!("Memory {id}"), format!("About {id}"), image)
}

/// Six entries, stored out of display order, with two 2008 entries that
/// carry month tokens and two 2012 entries that do not.
pub fn memories() -> Vec<Entry> {
    vec![
        entry(1, "Aug 2008", 2008, "/img/1.jpg"),
        entry(2, "May 2006", 2006, "/img/2.jpg"),
        entry(3, "Mar 2008", 2008, "/img/3.png"),
        entry(4, "2012", 2012, "/img/4.jpeg"),
        entry(5, "Summer 2012", 2012, "/img/5.JPG"),
        entry(6, "Dec 29, 2018 – Jan 5, 2019", 2018, "/img/6.webp"),
    ]
}

pub fn carousel() -> Carousel {
    Carousel::new(memories()).expect("fixture carousel is valid")
}

pub fn titles(carousel: &Carousel) -> Vec<String> {
    carousel
        .collection()
        .iter()
        .map(|entry| entry.title.clone())
        .collect()
}

/// Viewer that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingViewer {
    pub opened: Vec<ViewerRecord>,
    pub closed: usize,
}

impl RecordingViewer {
    pub fn last_title(&self) -> Option<&str> {
        self.opened.last().map(|record| record.title.as_str())
    }
}

impl FullScreenViewer for RecordingViewer {
    fn open(&mut self, record: &ViewerRecord) {
        self.opened.push(record.clone());
    }

    fn close(&mut self) {
        self.closed += 1;
    }
}
