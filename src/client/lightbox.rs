//! Lightbox modal for gallery artworks and digital projects.

/// Media shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Image { src: String, alt: String },
    Video { src: String },
}

/// A `.gallery-item` on the analog art page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryItem {
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub medium: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// A link in a project's `.project-links`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub href: String,
    pub class: String,
    pub text: String,
}

/// A `.project-card` on the digital work page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    /// `(src, alt)` of the card image
    pub image: Option<(String, String)>,
    /// Source of the card video, preferred over the image
    pub video_src: Option<String>,
    pub tags: Vec<String>,
    pub links: Vec<ProjectLink>,
}

/// Link rendered into `#modalLinks`; always opens in a new tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLink {
    pub href: String,
    pub class: String,
    pub text: String,
    pub target: &'static str,
}

/// Playback state of `#modalVideo`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VideoState {
    pub playing: bool,
    /// Current time in seconds
    pub position: f64,
}

/// State of `#imageModal` and the page scroll lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    active: bool,
    scroll_locked: bool,
    pub media: Option<Media>,
    pub title: String,
    pub medium: String,
    pub date: String,
    pub description: String,
    pub tags: Vec<String>,
    pub links: Vec<ModalLink>,
    pub video: VideoState,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active
    }

    /// `document.body.style.overflow` is `hidden` while the modal is open
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    fn show(&mut self) {
        self.active = true;
        self.scroll_locked = true;
    }

    pub fn open_gallery_item(&mut self, item: &GalleryItem) {
        self.media = Some(Media::Image { src: item.image_src.clone(), alt: item.image_alt.clone() });
        self.title = item.title.clone();
        self.medium = item.medium.clone().unwrap_or_default();
        self.date = item.date.clone().unwrap_or_default();
        self.description = item.description.clone().unwrap_or_default();
        self.tags.clear();
        self.links.clear();
        self.show();
    }

    /// Opens a project card. A video autoplays when present; without video or image the
    /// previously shown media stays in place.
    pub fn open_project(&mut self, card: &ProjectCard) {
        self.title = card.title.clone();
        self.description = card.description.clone();

        if let Some(src) = &card.video_src {
            self.media = Some(Media::Video { src: src.clone() });
            self.video = VideoState { playing: true, position: 0.0 };
        } else if let Some((src, alt)) = &card.image {
            self.media = Some(Media::Image { src: src.clone(), alt: alt.clone() });
        }

        self.medium.clear();
        self.date.clear();
        self.tags = card.tags.clone();
        self.links = card
            .links
            .iter()
            .map(|l| ModalLink {
                href: l.href.clone(),
                class: l.class.clone(),
                text: l.text.clone(),
                target: "_blank",
            })
            .collect();
        self.show();
    }

    /// Closes the modal, restores scrolling and pauses and rewinds the video.
    pub fn close(&mut self) {
        self.active = false;
        self.scroll_locked = false;
        self.video = VideoState { playing: false, position: 0.0 };
    }

    pub fn overlay_click(&mut self) {
        self.close();
    }

    /// Escape closes the modal, but only while it is active.
    pub fn key_down(&mut self, key: &str) {
        if key == "Escape" && self.active {
            self.close();
        }
    }

    /// Advances video playback, as the browser would while the video plays.
    pub fn advance_video(&mut self, seconds: f64) {
        if self.video.playing {
            self.video.position += seconds;
        }
    }
}
