//! Navigation links, dot indicators and scroll-spy.

use std::fmt;

/// Id of a `section.page` element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// `#about` -> `about`. A bare `#` or an external link names no page.
    pub fn from_href(href: &str) -> Option<Self> {
        match href.strip_prefix('#') {
            Some(id) if !id.is_empty() => Some(Self(id.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBounds {
    pub top: f64,
    pub height: f64,
}

impl PageBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Both edges are inclusive.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom()
    }

    fn center_distance(&self, y: f64) -> f64 {
        (self.top + self.height / 2.0 - y).abs()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_y: f64,
    pub inner_height: f64,
}

impl ViewportMetrics {
    pub fn midpoint(&self) -> f64 {
        self.scroll_y + self.inner_height / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub target: PageId,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    pub target: PageId,
    pub active: bool,
}

/// Keeps nav links and dots pointing at the same active page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavSync {
    links: Vec<NavLink>,
    dots: Vec<Dot>,
    active: Option<PageId>,
}

impl NavSync {
    pub fn new(
        links: impl IntoIterator<Item = PageId>,
        dots: impl IntoIterator<Item = PageId>,
    ) -> Self {
        Self {
            links: links
                .into_iter()
                .map(|target| NavLink {
                    target,
                    active: false,
                })
                .collect(),
            dots: dots
                .into_iter()
                .map(|target| Dot {
                    target,
                    active: false,
                })
                .collect(),
            active: None,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn active(&self) -> Option<&PageId> {
        self.active.as_ref()
    }

    pub fn is_active(&self, page: &PageId) -> bool {
        self.active.as_ref() == Some(page)
    }

    /// Clears every link and dot, then marks the ones targeting `page`.
    pub fn activate(&mut self, page: &PageId) {
        for link in &mut self.links {
            link.active = link.target == *page;
        }
        for dot in &mut self.dots {
            dot.active = dot.target == *page;
        }
        self.active = Some(page.clone());
    }

    /// Page under the viewport midpoint.
    ///
    /// When several pages contain the midpoint, the one whose center is closest
    /// wins; equal distances go to the earlier page.
    pub fn spy_target<'a>(
        viewport: ViewportMetrics,
        pages: impl IntoIterator<Item = (&'a PageId, PageBounds)>,
    ) -> Option<&'a PageId> {
        let midpoint = viewport.midpoint();
        let mut best: Option<(&PageId, f64)> = None;

        for (page, bounds) in pages {
            if !bounds.contains(midpoint) {
                continue;
            }
            let distance = bounds.center_distance(midpoint);
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((page, distance)),
            }
        }

        best.map(|(page, _)| page)
    }
}
