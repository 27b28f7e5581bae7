use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, BUTTON_SMALL_SECONDARY_STYLE, InputField, PANEL_DESCRIPTION_STYLE,
        PANEL_STYLE, PANEL_TITLE_STYLE, submit_button,
    },
};

/// The ID of the element holding the contents of the selected tab.
pub const SETTINGS_PANEL_ID: &str = "settings-panel";
const SETTINGS_PANEL_TARGET: &str = "#settings-panel";

/// A tab of the settings page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Profile,
    Security,
    Notifications,
}

impl SettingsTab {
    const ALL: [SettingsTab; 3] = [
        SettingsTab::Profile,
        SettingsTab::Security,
        SettingsTab::Notifications,
    ];

    /// Parse the value of the `tab` query parameter.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == value)
    }

    fn as_str(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "profile",
            SettingsTab::Security => "security",
            SettingsTab::Notifications => "notifications",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Security => "Security",
            SettingsTab::Notifications => "Notifications",
        }
    }

    fn url(&self) -> String {
        format!("{}?tab={}", endpoints::SETTINGS_VIEW, self.as_str())
    }
}

/// The values shown on the profile tab.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct ProfileErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

/// The password fields of the security tab.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct SecurityErrors {
    pub current_password: Option<&'static str>,
    pub new_password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

/// Which notification channels are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: true,
        }
    }
}

/// The tab links, the sign out link and the contents of the selected tab.
pub fn settings_layout(selected: SettingsTab, panel: &Markup) -> Markup {
    html! {
        div class="grid md:grid-cols-4 gap-4 md:gap-6 max-w-5xl mx-auto"
        {
            div class="md:col-span-1 bg-white rounded-lg shadow dark:bg-gray-800"
            {
                nav class="flex md:flex-col gap-2 md:gap-1 p-2 overflow-x-auto md:overflow-visible"
                {
                    @for tab in SettingsTab::ALL {
                        @let style = if tab == selected {
                            "px-3 py-2 text-sm rounded-lg whitespace-nowrap bg-blue-50 text-blue-900"
                        } else {
                            "px-3 py-2 text-sm rounded-lg whitespace-nowrap text-gray-700 hover:bg-gray-50 dark:text-gray-300"
                        };

                        a
                            href=(tab.url())
                            class=(style)
                            aria-current=[(tab == selected).then_some("page")]
                        {
                            (tab.label())
                        }
                    }
                }

                div class="border-t border-gray-100 dark:border-gray-700 p-4"
                {
                    a href=(endpoints::LOG_OUT) class={"block " (BUTTON_SECONDARY_STYLE)} { "Sign Out" }
                }
            }

            div id=(SETTINGS_PANEL_ID) class="md:col-span-3"
            {
                (panel)
            }
        }
    }
}

fn panel_header(title: &str, description: &str) -> Markup {
    html! {
        div
        {
            h2 class=(PANEL_TITLE_STYLE) { (title) }
            p class=(PANEL_DESCRIPTION_STYLE) { (description) }
        }
    }
}

/// The profile tab, read-only unless `editing` is set.
pub fn profile_panel(profile: &ProfileForm, errors: &ProfileErrors, editing: bool) -> Markup {
    let fields = html! {
        (InputField::new("name", "Full Name")
            .value(&profile.name)
            .error(errors.name)
            .disabled(!editing)
            .into_html())

        (InputField::new("email", "Email Address")
            .type_("email")
            .value(&profile.email)
            .error(errors.email)
            .disabled(!editing)
            .into_html())

        (InputField::new("phone_number", "Phone Number")
            .type_("tel")
            .value(&profile.phone_number)
            .optional()
            .disabled(!editing)
            .into_html())

        (InputField::new("address", "Address")
            .value(&profile.address)
            .optional()
            .disabled(!editing)
            .into_html())
    };

    html! {
        div class=(PANEL_STYLE)
        {
            div class="flex items-center justify-between"
            {
                (panel_header("Profile Settings", "Manage your personal information"))

                @if !editing {
                    a
                        href={(SettingsTab::Profile.url()) "&edit=true"}
                        class=(BUTTON_SMALL_SECONDARY_STYLE)
                    {
                        "Edit Profile"
                    }
                }
            }

            @if editing {
                form
                    hx-post=(endpoints::SETTINGS_PROFILE)
                    hx-target=(SETTINGS_PANEL_TARGET)
                    hx-target-error="#alert-container"
                    hx-indicator="#indicator"
                    hx-disabled-elt="find button"
                    class="space-y-4"
                {
                    (fields)

                    div class="flex gap-4"
                    {
                        a href=(SettingsTab::Profile.url()) class=(BUTTON_SECONDARY_STYLE) { "Cancel" }
                        (submit_button("Save Changes"))
                    }
                }
            } @else {
                div class="space-y-4" { (fields) }
            }
        }
    }
}

pub fn security_panel(errors: &SecurityErrors) -> Markup {
    html! {
        div class=(PANEL_STYLE)
        {
            (panel_header("Security Settings", "Manage your account security"))

            form
                hx-post=(endpoints::SETTINGS_SECURITY)
                hx-target=(SETTINGS_PANEL_TARGET)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="find button"
                class="space-y-4"
            {
                (InputField::new("current_password", "Current Password")
                    .type_("password")
                    .error(errors.current_password)
                    .into_html())

                (InputField::new("new_password", "New Password")
                    .type_("password")
                    .error(errors.new_password)
                    .into_html())

                (InputField::new("confirm_password", "Confirm New Password")
                    .type_("password")
                    .error(errors.confirm_password)
                    .into_html())

                (submit_button("Update Password"))
            }
        }
    }
}

fn notification_toggle(name: &str, title: &str, description: &str, checked: bool) -> Markup {
    html! {
        div class="flex items-center justify-between py-3"
        {
            div
            {
                label for=(name) class="font-medium text-gray-900 dark:text-white" { (title) }
                p class="text-sm text-gray-500" { (description) }
            }

            input
                type="checkbox"
                id=(name)
                name=(name)
                value="on"
                checked[checked]
                class="w-5 h-5 accent-blue-900";
        }
    }
}

pub fn notifications_panel(preferences: NotificationPreferences) -> Markup {
    html! {
        div class=(PANEL_STYLE)
        {
            (panel_header("Notification Preferences", "Manage how you receive notifications"))

            form
                hx-post=(endpoints::SETTINGS_NOTIFICATIONS)
                hx-target=(SETTINGS_PANEL_TARGET)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="find button"
                class="space-y-2"
            {
                (notification_toggle(
                    "email_notifications",
                    "Email Notifications",
                    "Receive transaction alerts via email",
                    preferences.email,
                ))
                (notification_toggle(
                    "push_notifications",
                    "Push Notifications",
                    "Receive push notifications on your device",
                    preferences.push,
                ))
                (notification_toggle(
                    "sms_notifications",
                    "SMS Notifications",
                    "Receive transaction alerts via SMS",
                    preferences.sms,
                ))

                (submit_button("Save Preferences"))
            }
        }
    }
}
