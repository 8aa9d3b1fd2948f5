use crate::model::{Image, Link, Section};
use crate::text::truncate_with_ellipsis;

pub const MAX_VISIBLE_LINKS: usize = 10;
pub const MAX_VISIBLE_IMAGES: usize = 5;
pub const MAX_RAW_HTML_PREVIEW: usize = 500;

/// One accordion group of the sectioned result view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub tag: String,
    pub text: Option<String>,
    pub headings: Vec<String>,
    pub links: Capped<LinkView>,
    pub images: Capped<ImageView>,
    /// Raw markup as inert text, never interpreted.
    pub raw_html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub label: String,
    pub src: String,
}

/// The first few entries of a list plus its full length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capped<T> {
    pub shown: Vec<T>,
    pub total: usize,
}

impl<T> Capped<T> {
    fn new(all: impl ExactSizeIterator<Item = T>, limit: usize) -> Self {
        let total = all.len();
        Self {
            shown: all.take(limit).collect(),
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of entries left out of `shown`.
    pub fn hidden(&self) -> usize {
        self.total - self.shown.len()
    }

    /// `+N more`, when anything was left out.
    pub fn overflow_label(&self) -> Option<String> {
        match self.hidden() {
            0 => None,
            hidden => Some(format!("+{hidden} more")),
        }
    }
}

pub fn section_views(sections: &[Section]) -> Vec<SectionView> {
    sections
        .iter()
        .enumerate()
        .map(|(index, section)| section_view(index, section))
        .collect()
}

fn section_view(index: usize, section: &Section) -> SectionView {
    let content = &section.content;
    let title = if section.label.is_empty() {
        format!("Section {}", index + 1)
    } else {
        section.label.clone()
    };

    let links = content.links.as_deref().unwrap_or_default();
    let images = content.images.as_deref().unwrap_or_default();

    SectionView {
        title,
        tag: section.kind.clone(),
        text: content.text.clone().filter(|text| !text.is_empty()),
        headings: content.headings.clone().unwrap_or_default(),
        links: Capped::new(links.iter().map(link_view), MAX_VISIBLE_LINKS),
        images: Capped::new(images.iter().map(image_view), MAX_VISIBLE_IMAGES),
        raw_html: section
            .raw_html
            .as_deref()
            .filter(|html| !html.is_empty())
            .map(|html| truncate_with_ellipsis(html, MAX_RAW_HTML_PREVIEW).0),
    }
}

fn link_view(link: &Link) -> LinkView {
    LinkView {
        label: first_non_empty(&link.text, &link.href),
        href: link.href.clone(),
    }
}

fn image_view(image: &Image) -> ImageView {
    ImageView {
        label: first_non_empty(image.alt.as_deref().unwrap_or_default(), &image.src),
        src: image.src.clone(),
    }
}

pub(crate) fn first_non_empty(preferred: &str, fallback: &str) -> String {
    if preferred.is_empty() {
        fallback.to_string()
    } else {
        preferred.to_string()
    }
}
