pub mod dot_nav;
pub mod footer;
pub mod header;
pub mod page_context;
pub mod sections;

use leptos::prelude::*;

use crate::shared::components::flash_banners::FlashBanners;
use crate::system::auth::{LoginModal, RegisterModal};

/// Whole single-page layout.
///
/// ```text
/// +--------------------------------------+
/// | FlashBanners                         |
/// | Header (nav links, login button)     |
/// +--------------------------------+-----+
/// | Sections                       | Dot |
/// |                                | Nav |
/// +--------------------------------+-----+
/// | Footer                               |
/// +--------------------------------------+
///   LoginModal / RegisterModal (overlays)
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <FlashBanners />
        <header::Header />
        <dot_nav::DotNav />
        <sections::Sections />
        <footer::Footer />
        <LoginModal />
        <RegisterModal />
    }
}
