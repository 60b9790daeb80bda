use contracts::system::auth::FormKind;

/// At most one dialog is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    None,
    LoginVisible,
    RegisterVisible,
}

/// Controls that open or close the dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTrigger {
    /// `#loginBtn` in the header.
    LoginButton,
    /// `#loginFooter`.
    LoginFooter,
    /// `#showRegister`, inside the login dialog.
    ShowRegister,
    /// `#showLogin`, inside the register dialog.
    ShowLogin,
    /// `#backToLogin`, inside the register dialog.
    BackToLogin,
    /// Any `.close` control.
    CloseButton,
    /// A click on the dimmed container itself, outside the dialog content.
    Backdrop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_visible(&self, kind: FormKind) -> bool {
        matches!(
            (self.state, kind),
            (ModalState::LoginVisible, FormKind::Login)
                | (ModalState::RegisterVisible, FormKind::Register)
        )
    }

    pub fn show_login(&mut self) {
        self.state = ModalState::LoginVisible;
    }

    pub fn show_register(&mut self) {
        self.state = ModalState::RegisterVisible;
    }

    pub fn hide_all(&mut self) {
        self.state = ModalState::None;
    }

    pub fn handle(&mut self, trigger: ModalTrigger) {
        match trigger {
            ModalTrigger::LoginButton
            | ModalTrigger::LoginFooter
            | ModalTrigger::ShowLogin
            | ModalTrigger::BackToLogin => self.show_login(),
            ModalTrigger::ShowRegister => self.show_register(),
            ModalTrigger::CloseButton | ModalTrigger::Backdrop => self.hide_all(),
        }
    }
}
