use contracts::shared::flash::FlashMessage;
use contracts::shared::page_config::PageConfig;
use contracts::system::auth::{FormKind, LoginForm, RegisterForm, UserType};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::page::{AdminField, Banner, BannerEvent, BannerId, ModalTrigger, PageId, PageState};
use crate::shared::browser_host::BrowserHost;

/// Page-wide state shared through leptos context.
///
/// Wraps [`PageState`] in a signal and supplies the browser host to every
/// operation that needs one.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub config: StoredValue<PageConfig>,
    state: RwSignal<PageState>,
}

impl PageContext {
    pub fn new(config: PageConfig, flashes: Vec<FlashMessage>) -> Self {
        let state = PageState::new(&config, flashes);
        log::debug!(
            "page state ready: {} sections, {} banners",
            state.pages().len(),
            state.banners.banners().len()
        );
        Self {
            config: StoredValue::new(config),
            state: RwSignal::new(state),
        }
    }

    pub fn is_page_active(&self, page: &PageId) -> bool {
        self.state.with(|s| s.nav.is_active(page))
    }

    pub fn nav_click(&self, href: &str) {
        self.state.update(|s| {
            s.nav_click(href, &BrowserHost);
        });
    }

    pub fn dot_click(&self, page: &str) {
        self.state.update(|s| {
            s.dot_click(page, &BrowserHost);
        });
    }

    /// Scroll-spy. Only writes the signal when the active page changes.
    pub fn sync_scroll(&self) {
        let changed = self
            .state
            .with_untracked(|s| s.scroll_change(&BrowserHost).is_some());
        if changed {
            self.state.update(|s| {
                s.sync_scroll(&BrowserHost);
            });
        }
    }

    pub fn modal_visible(&self, kind: FormKind) -> bool {
        self.state.with(|s| s.modal.is_visible(kind))
    }

    pub fn trigger(&self, trigger: ModalTrigger) {
        self.state.update(|s| s.trigger(trigger));
        log::debug!("modal {:?} -> {:?}", trigger, self.state.with_untracked(|s| s.modal.state()));
    }

    pub fn user_type(&self, form: FormKind) -> UserType {
        self.state.with(|s| s.role(form).selection())
    }

    pub fn admin_field(&self, form: FormKind) -> AdminField {
        self.state.with(|s| s.role(form).admin_field())
    }

    pub fn select_user_type(&self, form: FormKind, user_type: UserType) {
        self.state.update(|s| s.select_user_type(form, user_type));
    }

    /// `true` when the native submission may go ahead.
    pub fn guard_login(&self, form: &LoginForm) -> bool {
        self.state
            .with_untracked(|s| s.guard_login(form, &BrowserHost))
            .is_ok()
    }

    pub fn guard_register(&self, form: &RegisterForm) -> bool {
        self.state
            .with_untracked(|s| s.guard_register(form, &BrowserHost))
            .is_ok()
    }

    pub fn banners(&self) -> Vec<Banner> {
        self.state.with(|s| s.banners.banners().to_vec())
    }

    pub fn dismiss_banner(&self, id: BannerId) {
        self.state.update(|s| {
            s.dismiss_banner(id);
        });
    }

    /// Drive the banner schedule with real timers until nothing is pending.
    pub fn start_banner_timers(&self) {
        let state = self.state;
        spawn_local(async move {
            while let Some((deadline, now)) = state
                .try_with_untracked(|s| s.banners.next_deadline().map(|d| (d, s.banners.now_ms())))
                .flatten()
            {
                let wait = u32::try_from(deadline.saturating_sub(now)).unwrap_or(u32::MAX);
                TimeoutFuture::new(wait).await;

                let events = state
                    .try_update(|s| s.advance_banners(deadline))
                    .unwrap_or_default();
                for event in events {
                    match event {
                        BannerEvent::FadeStarted(id) => log::debug!("banner {} fading", id),
                        BannerEvent::Removed(id) => log::debug!("banner {} removed", id),
                    }
                }
            }
        });
    }
}
