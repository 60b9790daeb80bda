//! The page controller: one value built at mount, owning every sub-behaviour.

use contracts::shared::flash::FlashMessage;
use contracts::shared::page_config::PageConfig;
use contracts::system::auth::{FormError, FormKind, LoginForm, RegisterForm, UserType};

use super::banner::{BannerEvent, BannerId, BannerSchedule};
use super::field_toggle::FieldToggle;
use super::host::PageHost;
use super::modal::{ModalController, ModalTrigger};
use super::nav_sync::{NavSync, PageId};

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pages: Vec<PageId>,
    min_password_len: usize,
    pub nav: NavSync,
    pub modal: ModalController,
    pub login_role: FieldToggle,
    pub register_role: FieldToggle,
    pub banners: BannerSchedule,
}

impl PageState {
    /// Every configured section gets one nav link and one dot.
    pub fn new(config: &PageConfig, flashes: impl IntoIterator<Item = FlashMessage>) -> Self {
        let pages: Vec<PageId> = config.pages.iter().map(|p| PageId::new(&p.id)).collect();

        let mut banners = BannerSchedule::new(config.banner_display_ms, config.banner_fade_ms);
        for flash in flashes {
            banners.push(flash);
        }

        Self {
            nav: NavSync::new(pages.clone(), pages.clone()),
            pages,
            min_password_len: config.min_password_len,
            modal: ModalController::default(),
            login_role: FieldToggle::default(),
            register_role: FieldToggle::default(),
            banners,
        }
    }

    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    /// Nav link click. The default navigation is already prevented by the caller.
    pub fn nav_click(&mut self, href: &str, host: &impl PageHost) -> bool {
        match PageId::from_href(href) {
            Some(page) => self.navigate(&page, host),
            None => false,
        }
    }

    /// Dot click, `page` being the dot's `data-page` value.
    pub fn dot_click(&mut self, page: &str, host: &impl PageHost) -> bool {
        self.navigate(&PageId::new(page), host)
    }

    fn navigate(&mut self, page: &PageId, host: &impl PageHost) -> bool {
        if !host.scroll_into_view(page) {
            log::debug!("navigation target #{} not found", page);
            return false;
        }
        self.nav.activate(page);
        true
    }

    /// Page the scroll-spy would activate right now, if it differs from the
    /// current one.
    pub fn scroll_change(&self, host: &impl PageHost) -> Option<PageId> {
        let viewport = host.viewport();
        let measured: Vec<_> = self
            .pages
            .iter()
            .filter_map(|page| host.page_bounds(page).map(|bounds| (page, bounds)))
            .collect();

        NavSync::spy_target(viewport, measured)
            .filter(|page| !self.nav.is_active(page))
            .cloned()
    }

    /// Scroll-spy step. Returns `true` when the active page changed.
    pub fn sync_scroll(&mut self, host: &impl PageHost) -> bool {
        match self.scroll_change(host) {
            Some(page) => {
                log::debug!("scroll-spy: #{} active", page);
                self.nav.activate(&page);
                true
            }
            None => false,
        }
    }

    pub fn trigger(&mut self, trigger: ModalTrigger) {
        self.modal.handle(trigger);
    }

    pub fn select_user_type(&mut self, form: FormKind, user_type: UserType) {
        self.role_mut(form).select(user_type);
    }

    pub fn role(&self, form: FormKind) -> &FieldToggle {
        match form {
            FormKind::Login => &self.login_role,
            FormKind::Register => &self.register_role,
        }
    }

    fn role_mut(&mut self, form: FormKind) -> &mut FieldToggle {
        match form {
            FormKind::Login => &mut self.login_role,
            FormKind::Register => &mut self.register_role,
        }
    }

    /// Returns `Ok` when the native submission may proceed. On failure the
    /// message has already been shown through the host.
    pub fn guard_login(&self, form: &LoginForm, host: &impl PageHost) -> Result<(), FormError> {
        form.validate().inspect_err(|err| host.alert(&err.to_string()))
    }

    pub fn guard_register(
        &self,
        form: &RegisterForm,
        host: &impl PageHost,
    ) -> Result<(), FormError> {
        form.validate(self.min_password_len)
            .inspect_err(|err| host.alert(&err.to_string()))
    }

    pub fn advance_banners(&mut self, now_ms: u64) -> Vec<BannerEvent> {
        self.banners.advance_to(now_ms)
    }

    pub fn dismiss_banner(&mut self, id: BannerId) -> bool {
        self.banners.cancel(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::banner::BannerPhase;
    use crate::page::modal::ModalState;
    use crate::page::nav_sync::{PageBounds, ViewportMetrics};
    use contracts::shared::flash::FlashCategory;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// Stacked 800px sections; only the ids in `bounds` exist.
    struct FakeHost {
        bounds: HashMap<String, PageBounds>,
        viewport: Cell<ViewportMetrics>,
        scrolled: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl FakeHost {
        fn new(ids: &[&str]) -> Self {
            let bounds = ids
                .iter()
                .enumerate()
                .map(|(i, id)| (id.to_string(), PageBounds::new(i as f64 * 800.0, 800.0)))
                .collect();
            Self {
                bounds,
                viewport: Cell::new(ViewportMetrics {
                    scroll_y: 0.0,
                    inner_height: 800.0,
                }),
                scrolled: RefCell::new(Vec::new()),
                alerts: RefCell::new(Vec::new()),
            }
        }

        fn scroll_to(&self, y: f64) {
            let mut viewport = self.viewport.get();
            viewport.scroll_y = y;
            self.viewport.set(viewport);
        }
    }

    impl PageHost for FakeHost {
        fn scroll_into_view(&self, page: &PageId) -> bool {
            let found = self.bounds.contains_key(page.as_str());
            if found {
                self.scrolled.borrow_mut().push(page.to_string());
            }
            found
        }

        fn page_bounds(&self, page: &PageId) -> Option<PageBounds> {
            self.bounds.get(page.as_str()).copied()
        }

        fn viewport(&self) -> ViewportMetrics {
            self.viewport.get()
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn state() -> PageState {
        PageState::new(&PageConfig::default(), Vec::new())
    }

    fn active(state: &PageState) -> Option<&str> {
        state.nav.active().map(PageId::as_str)
    }

    #[test]
    fn test_nav_click_scrolls_and_activates() {
        let host = FakeHost::new(&["home", "about", "services", "contact"]);
        let mut state = state();

        assert!(state.nav_click("#services", &host));
        assert_eq!(active(&state), Some("services"));
        assert_eq!(*host.scrolled.borrow(), vec!["services".to_string()]);

        assert!(state.dot_click("about", &host));
        assert_eq!(active(&state), Some("about"));
        let active_dots: Vec<_> = state.nav.dots().iter().filter(|d| d.active).collect();
        assert_eq!(active_dots.len(), 1);
        assert_eq!(active_dots[0].target.as_str(), "about");
    }

    #[test]
    fn test_click_on_missing_section_changes_nothing() {
        let host = FakeHost::new(&["home"]);
        let mut state = state();
        state.nav_click("#home", &host);

        assert!(!state.nav_click("#contact", &host));
        assert!(!state.nav_click("#", &host));
        assert!(!state.dot_click("pricing", &host));
        assert_eq!(active(&state), Some("home"));
    }

    #[test]
    fn test_initial_sync_and_scroll_spy() {
        let host = FakeHost::new(&["home", "about", "services", "contact"]);
        let mut state = state();

        assert!(state.sync_scroll(&host));
        assert_eq!(active(&state), Some("home"));
        // Same page again is not a change.
        assert!(!state.sync_scroll(&host));

        host.scroll_to(1700.0);
        assert!(state.sync_scroll(&host));
        assert_eq!(active(&state), Some("services"));
    }

    #[test]
    fn test_scroll_skips_missing_sections() {
        // "about" is absent from the page; its slot is taken by "services".
        let host = FakeHost::new(&["home", "services"]);
        let mut state = state();
        host.scroll_to(800.0);
        state.sync_scroll(&host);
        assert_eq!(active(&state), Some("services"));

        host.scroll_to(10_000.0);
        assert!(!state.sync_scroll(&host));
        assert_eq!(active(&state), Some("services"));
    }

    #[test]
    fn test_modal_triggers() {
        let mut state = state();
        state.trigger(ModalTrigger::LoginButton);
        state.trigger(ModalTrigger::ShowRegister);
        assert_eq!(state.modal.state(), ModalState::RegisterVisible);
        state.trigger(ModalTrigger::Backdrop);
        assert_eq!(state.modal.state(), ModalState::None);
    }

    #[test]
    fn test_forms_toggle_independently() {
        let mut state = state();
        state.select_user_type(FormKind::Login, UserType::Admin);
        assert!(state.role(FormKind::Login).admin_field().required);
        assert!(!state.role(FormKind::Register).admin_field().visible);

        state.select_user_type(FormKind::Register, UserType::Admin);
        state.select_user_type(FormKind::Login, UserType::Standard);
        assert!(!state.role(FormKind::Login).admin_field().visible);
        assert!(state.role(FormKind::Register).admin_field().visible);
    }

    #[test]
    fn test_guard_alerts_first_failure_only() {
        let host = FakeHost::new(&[]);
        let state = state();
        let form = RegisterForm {
            username: "bob".into(),
            email: "not-an-email".into(),
            password: "abc".into(),
            ..Default::default()
        };

        assert_eq!(state.guard_register(&form, &host), Err(FormError::InvalidEmail));
        assert_eq!(
            *host.alerts.borrow(),
            vec!["Please enter a valid email address.".to_string()]
        );
    }

    #[test]
    fn test_guard_passes_silently() {
        let host = FakeHost::new(&[]);
        let state = state();
        let login = LoginForm {
            username: "alice".into(),
            password: "secret".into(),
            ..Default::default()
        };
        let register = RegisterForm {
            username: "bob".into(),
            email: "user@example.com".into(),
            password: "abcdef".into(),
            ..Default::default()
        };

        assert!(state.guard_login(&login, &host).is_ok());
        assert!(state.guard_register(&register, &host).is_ok());
        assert!(host.alerts.borrow().is_empty());
    }

    #[test]
    fn test_guard_uses_configured_password_length() {
        let host = FakeHost::new(&[]);
        let config = PageConfig {
            min_password_len: 10,
            ..PageConfig::default()
        };
        let state = PageState::new(&config, Vec::new());
        let form = RegisterForm {
            username: "bob".into(),
            email: "user@example.com".into(),
            password: "abcdef".into(),
            ..Default::default()
        };
        assert_eq!(
            state.guard_register(&form, &host),
            Err(FormError::PasswordTooShort { min: 10 })
        );
    }

    #[test]
    fn test_load_banners_gone_by_5300ms() {
        let flashes = vec![
            FlashMessage::new(FlashCategory::Success, "Registration successful! Please login."),
            FlashMessage::new(FlashCategory::Error, "Invalid user credentials"),
        ];
        let mut state = PageState::new(&PageConfig::default(), flashes);
        assert_eq!(state.banners.banners().len(), 2);

        state.advance_banners(5000);
        assert!(state
            .banners
            .banners()
            .iter()
            .all(|b| b.phase == BannerPhase::Fading));

        state.advance_banners(5300);
        assert!(state.banners.banners().is_empty());
    }

    #[test]
    fn test_dismiss_banner_early() {
        let flashes = vec![FlashMessage::new(FlashCategory::Info, "Logged out")];
        let mut state = PageState::new(&PageConfig::default(), flashes);
        let id = state.banners.banners()[0].id;
        assert!(state.dismiss_banner(id));
        assert!(state.advance_banners(6000).is_empty());
    }
}
