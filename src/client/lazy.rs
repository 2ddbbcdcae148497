//! Deferred image loading for `img[data-src]`.

use super::observer::{IntersectionOptions, Rect};

pub const LAZY_CLASS: &str = "lazy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    /// Value of `data-src`
    pub data_src: String,
    /// Assigned once the image has intersected the viewport
    pub src: Option<String>,
    pub classes: Vec<String>,
    observed: bool,
}

impl LazyImage {
    pub fn new(data_src: &str) -> Self {
        Self {
            data_src: data_src.to_string(),
            src: None,
            classes: vec![LAZY_CLASS.to_string()],
            observed: true,
        }
    }

    pub fn is_observed(&self) -> bool {
        self.observed
    }
}

/// All deferred images of a page and the observer watching them.
#[derive(Debug, Clone)]
pub struct LazyImages {
    images: Vec<LazyImage>,
    options: IntersectionOptions,
}

impl LazyImages {
    pub fn new(images: Vec<LazyImage>) -> Self {
        Self { images, options: IntersectionOptions::default() }
    }

    pub fn images(&self) -> &[LazyImage] {
        &self.images
    }

    /// Loads every observed image that intersects the viewport and stops observing it.
    ///
    /// Returns the indices loaded by this call.
    pub fn observe(&mut self, rects: &[Rect], viewport_height: f64) -> Vec<usize> {
        let mut loaded = Vec::new();
        for (index, (image, rect)) in self.images.iter_mut().zip(rects).enumerate() {
            if image.observed && self.options.is_intersecting(*rect, viewport_height) {
                image.src = Some(image.data_src.clone());
                image.classes.retain(|c| c != LAZY_CLASS);
                image.observed = false;
                loaded.push(index);
            }
        }
        loaded
    }
}
