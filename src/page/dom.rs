//! Minimal document model the page behaviors act on
//!
//! Only what the behaviors touch is modelled: element ids, parent links,
//! class lists, bounding boxes, image sources and the body overflow style.

use crate::core::geo::Rect;
use crate::prelude::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

/// Set of CSS classes on an element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: HashSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) -> bool {
        self.classes.remove(class)
    }

    /// Flip `class`; returns whether it is present afterwards
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub parent: Option<String>,
    pub class_list: ClassList,
    pub bounds: Rect,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            class_list: ClassList::new(),
            bounds: Rect::from_xywh(0.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class_list.add(class);
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }
}

static NEXT_OBJECT_URL: AtomicU64 = AtomicU64::new(1);

/// An `<img>`: where it sits, what it shows, and the source it is waiting on
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub id: String,
    pub src: Option<String>,
    /// Deferred source (`data-src`), swapped into `src` when the image loads
    pub data_src: Option<String>,
    pub bounds: Rect,
    blob: Option<Vec<u8>>,
    content_type: Option<String>,
}

impl ImageElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: None,
            data_src: None,
            bounds: Rect::from_xywh(0.0, 0.0, 0.0, 0.0),
            blob: None,
            content_type: None,
        }
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn with_data_src(mut self, data_src: impl Into<String>) -> Self {
        self.data_src = Some(data_src.into());
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// The URL to fetch: `data-src` when present, otherwise `src`
    pub fn source_url(&self) -> Option<&str> {
        self.data_src.as_deref().or(self.src.as_deref())
    }

    /// Swap the deferred source into `src`. Returns false if there was none.
    pub fn promote_data_src(&mut self) -> bool {
        match self.data_src.take() {
            Some(data_src) => {
                self.src = Some(data_src);
                true
            }
            None => false,
        }
    }

    /// Show downloaded bytes: keeps the body and points `src` at a fresh
    /// object URL for it.
    pub fn set_blob(&mut self, bytes: Vec<u8>, content_type: Option<String>) -> &str {
        let n = NEXT_OBJECT_URL.fetch_add(1, Ordering::Relaxed);
        self.blob = Some(bytes);
        self.content_type = content_type;
        self.src.insert(format!("blob:apod-utils/{}", n))
    }

    pub fn blob(&self) -> Option<&[u8]> {
        self.blob.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// The page: title, body style, and elements in document order
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub title: String,
    /// Inline `overflow` style of `<body>`
    pub body_overflow: Option<String>,
    elements: Vec<Element>,
    images: Vec<ImageElement>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.add_element(element);
        self
    }

    pub fn with_image(mut self, image: ImageElement) -> Self {
        self.add_image(image);
        self
    }

    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn add_image(&mut self, image: ImageElement) {
        self.images.push(image);
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    pub fn image(&self, id: &str) -> Option<&ImageElement> {
        self.images.iter().find(|i| i.id == id)
    }

    pub fn image_mut(&mut self, id: &str) -> Option<&mut ImageElement> {
        self.images.iter_mut().find(|i| i.id == id)
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageElement> {
        self.images.iter()
    }

    /// Whether `target` is `ancestor` or sits somewhere below it
    pub fn contains(&self, ancestor: &str, target: &str) -> bool {
        let mut current = Some(target);
        // Bounded walk so a parent cycle cannot hang the page.
        for _ in 0..=self.elements.len() {
            match current {
                Some(id) if id == ancestor => return true,
                Some(id) => current = self.element(id).and_then(|e| e.parent.as_deref()),
                None => return false,
            }
        }
        false
    }
}
