//! Admin dashboard branding and theme.
//!
//! These values are static; they are served as JSON to the admin frontend.

use std::collections::BTreeMap;

use serde::Serialize;

/// Entry in the admin top menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TopMenuLink {
    Url {
        name: String,
        url: String,
        permissions: Vec<String>,
    },
    Model {
        model: String,
    },
}

/// Layout of admin change forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeformFormat {
    Single,
    HorizontalTabs,
    VerticalTabs,
    Collapsible,
    Carousel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonClasses {
    pub primary: String,
    pub secondary: String,
    pub info: String,
    pub warning: String,
    pub danger: String,
    pub success: String,
}

/// Colour scheme and sizing tweaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiTweaks {
    pub navbar_small_text: bool,
    pub footer_small_text: bool,
    pub body_small_text: bool,
    pub brand_small_text: bool,
    pub brand_colour: String,
    pub accent: String,
    pub navbar: String,
    pub no_navbar_border: bool,
    pub navbar_fixed: bool,
    pub layout_boxed: bool,
    pub footer_fixed: bool,
    pub sidebar_fixed: bool,
    pub sidebar: String,
    pub sidebar_nav_small_text: bool,
    pub sidebar_disable_expand: bool,
    pub sidebar_nav_child_indent: bool,
    pub sidebar_nav_compact_style: bool,
    pub sidebar_nav_legacy_style: bool,
    pub sidebar_nav_flat_style: bool,
    pub theme: String,
    pub dark_mode_theme: String,
    pub button_classes: ButtonClasses,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSettings {
    pub site_title: String,
    pub site_header: String,
    pub site_brand: String,
    pub site_icon: String,
    pub site_logo: String,
    pub welcome_sign: String,
    pub copyright: String,
    pub user_avatar: String,
    pub topmenu_links: Vec<TopMenuLink>,
    pub show_sidebar: bool,
    pub navigation_expanded: bool,
    pub order_with_respect_to: Vec<String>,
    pub icons: BTreeMap<String, String>,
    pub default_icon_parents: String,
    pub default_icon_children: String,
    pub related_modal_active: bool,
    pub custom_js: Option<String>,
    pub show_ui_builder: bool,
    pub changeform_format: ChangeformFormat,
    pub changeform_format_overrides: BTreeMap<String, ChangeformFormat>,
    pub ui_tweaks: UiTweaks,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn string_map<V: Copy + Into<T>, T>(items: &[(&str, V)]) -> BTreeMap<String, T> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), (*v).into()))
        .collect()
}

impl Default for AdminSettings {
    fn default() -> Self {
        const BRAND: &str = "STANDGATES";
        const LOGO: &str = "backend/media/about-1.png";

        Self {
            site_title: BRAND.to_string(),
            site_header: BRAND.to_string(),
            site_brand: BRAND.to_string(),
            site_icon: LOGO.to_string(),
            site_logo: LOGO.to_string(),
            welcome_sign: format!("Welcome To {BRAND}"),
            copyright: BRAND.to_string(),
            user_avatar: LOGO.to_string(),
            topmenu_links: vec![
                TopMenuLink::Url {
                    name: "Dashboard".to_string(),
                    url: "home".to_string(),
                    permissions: strings(&["auth.view_user"]),
                },
                TopMenuLink::Model {
                    model: "auth.User".to_string(),
                },
            ],
            show_sidebar: true,
            navigation_expanded: true,
            order_with_respect_to: strings(&[
                "store",
                "store.product",
                "store.cartorder",
                "store.cartorderitem",
                "store.cart",
                "store.category",
                "store.brand",
                "store.productfaq",
                "store.review",
                "store.Coupon",
                "store.DeliveryCouriers",
                "userauths",
                "userauths.user",
                "userauths.profile",
            ]),
            icons: string_map(&[
                ("admin.LogEntry", "fas fa-file"),
                ("auth", "fas fa-users-cog"),
                ("auth.user", "fas fa-user"),
                ("userauths.User", "fas fa-user"),
                ("userauths.Profile", "fas fa-address-card"),
                ("store.Product", "fas fa-th"),
                ("store.CartOrder", "fas fa-shopping-cart"),
                ("store.Cart", "fas fa-cart-plus"),
                ("store.CartOrderItem", "fas fa-shopping-basket"),
                ("store.Brand", "fas fa-check-circle"),
                ("store.productfaq", "fas fa-question"),
                ("store.Review", "fas fa-star fa-beat"),
                ("store.Category", "fas fa-tag"),
                ("store.Coupon", "fas fa-percentage"),
                ("store.DeliveryCouriers", "fas fa-truck"),
                ("store.Address", "fas fa-location-arrow"),
                ("store.Tag", "fas fa-tag"),
                ("store.Wishlist", "fas fa-heart"),
                ("store.Notification", "fas fa-bell"),
            ]),
            default_icon_parents: "fas fa-chevron-circle-right".to_string(),
            default_icon_children: "fas fa-arrow-circle-right".to_string(),
            related_modal_active: false,
            custom_js: None,
            show_ui_builder: false,
            changeform_format: ChangeformFormat::HorizontalTabs,
            changeform_format_overrides: string_map(&[
                ("auth.user", ChangeformFormat::Collapsible),
                ("auth.group", ChangeformFormat::VerticalTabs),
            ]),
            ui_tweaks: UiTweaks::default(),
        }
    }
}

impl Default for UiTweaks {
    fn default() -> Self {
        Self {
            navbar_small_text: false,
            footer_small_text: false,
            body_small_text: true,
            brand_small_text: false,
            brand_colour: "navbar-indigo".to_string(),
            accent: "accent-olive".to_string(),
            navbar: "navbar-indigo navbar-dark".to_string(),
            no_navbar_border: false,
            navbar_fixed: false,
            layout_boxed: false,
            footer_fixed: false,
            sidebar_fixed: false,
            sidebar: "sidebar-dark-indigo".to_string(),
            sidebar_nav_small_text: false,
            sidebar_disable_expand: false,
            sidebar_nav_child_indent: false,
            sidebar_nav_compact_style: false,
            sidebar_nav_legacy_style: false,
            sidebar_nav_flat_style: false,
            theme: "cyborg".to_string(),
            dark_mode_theme: "cyborg".to_string(),
            button_classes: ButtonClasses {
                primary: "btn-primary".to_string(),
                secondary: "btn-secondary".to_string(),
                info: "btn-info".to_string(),
                warning: "btn-warning".to_string(),
                danger: "btn-danger".to_string(),
                success: "btn-success".to_string(),
            },
        }
    }
}

impl AdminSettings {
    /// Icon class for an `app.Model` label; model names match case-insensitively.
    ///
    /// Unknown apps get the parent icon, unknown models the child icon.
    pub fn icon_for(&self, label: &str) -> &str {
        if let Some((_, icon)) = self
            .icons
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(label))
        {
            return icon;
        }
        if label.contains('.') {
            &self.default_icon_children
        } else {
            &self.default_icon_parents
        }
    }

    /// Change-form layout for a model label, honouring per-model overrides.
    pub fn changeform_format_for(&self, label: &str) -> ChangeformFormat {
        self.changeform_format_overrides
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(label))
            .map(|(_, format)| *format)
            .unwrap_or(self.changeform_format)
    }
}
