use contracts::system::auth::UserType;

/// Visibility and required-ness of the admin-name input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminField {
    pub visible: bool,
    pub required: bool,
}

impl AdminField {
    /// Value for the field wrapper's `display` style.
    pub fn display(&self) -> &'static str {
        if self.visible {
            "block"
        } else {
            "none"
        }
    }
}

/// Role selection of one form and the admin field it drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldToggle {
    selection: UserType,
    field: AdminField,
}

impl FieldToggle {
    pub fn selection(&self) -> UserType {
        self.selection
    }

    pub fn admin_field(&self) -> AdminField {
        self.field
    }

    pub fn select(&mut self, user_type: UserType) {
        let admin = user_type.is_admin();
        self.selection = user_type;
        self.field = AdminField {
            visible: admin,
            required: admin,
        };
    }
}
