//! Control panel dashboard
//!
//! Static catalogue of sections and boxes. Titles and labels are message
//! keys; icon names double as stable identifiers.

/// One box of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPanelBox {
    pub icon_name: &'static str,
    pub label_key: &'static str,
    pub link: &'static str,
}

impl ControlPanelBox {
    /// Boxes pointing outside the app open a full page load.
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http")
    }
}

/// Titled group of boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPanelSection {
    pub title: &'static str,
    pub boxes: &'static [ControlPanelBox],
}

const ACCOUNT_PREFERENCES: &[ControlPanelBox] = &[
    ControlPanelBox {
        icon_name: "account_information",
        label_key: "control_panel.account_preferences.account_information",
        link: "https://app.fromdoppler.com/ControlPanel/AccountPreferences/GetAccountInformation",
    },
    ControlPanelBox {
        icon_name: "billing_information",
        label_key: "control_panel.account_preferences.billing_information",
        link: "https://app.fromdoppler.com/ControlPanel/AccountPreferences/GetBillingInformation",
    },
    ControlPanelBox {
        icon_name: "my_plan",
        label_key: "control_panel.account_preferences.my_plan",
        link: "/my-plan",
    },
    ControlPanelBox {
        icon_name: "invoices",
        label_key: "control_panel.account_preferences.invoices",
        link: "/control-panel/invoices",
    },
];

const CAMPAIGN_PREFERENCES: &[ControlPanelBox] = &[
    ControlPanelBox {
        icon_name: "contact_policy",
        label_key: "control_panel.campaing_preferences.contact_policy",
        link: "/sending-preferences/contact-policies",
    },
    ControlPanelBox {
        icon_name: "unsubscription_link",
        label_key: "control_panel.campaing_preferences.unsubscription_link",
        link: "https://app.fromdoppler.com/ControlPanel/CampaignsPreferences/UnsubscriptionsLinkSettings",
    },
];

const INTEGRATIONS: &[ControlPanelBox] = &[
    ControlPanelBox {
        icon_name: "api_and_integrations",
        label_key: "control_panel.advanced_preferences.api_and_integrations",
        link: "/integrations",
    },
    ControlPanelBox {
        icon_name: "site_tracking",
        label_key: "control_panel.advanced_preferences.site_tracking",
        link: "https://app.fromdoppler.com/ControlPanel/CampaignsPreferences/SiteTrackingSettings",
    },
];

const SECTIONS: &[ControlPanelSection] = &[
    ControlPanelSection {
        title: "control_panel.account_preferences.title",
        boxes: ACCOUNT_PREFERENCES,
    },
    ControlPanelSection {
        title: "control_panel.campaing_preferences.title",
        boxes: CAMPAIGN_PREFERENCES,
    },
    ControlPanelSection {
        title: "control_panel.advanced_preferences.title",
        boxes: INTEGRATIONS,
    },
];

/// Control panel view-model.
#[derive(Debug, Clone, Copy)]
pub struct ControlPanel {
    sections: &'static [ControlPanelSection],
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self { sections: SECTIONS }
    }

    pub fn sections(&self) -> &'static [ControlPanelSection] {
        self.sections
    }

    pub fn find_box(&self, icon_name: &str) -> Option<&'static ControlPanelBox> {
        self.sections
            .iter()
            .flat_map(|section| section.boxes.iter())
            .find(|item| item.icon_name == icon_name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_section_has_title_and_boxes() {
        let panel = ControlPanel::new();
        for section in panel.sections() {
            assert!(!section.title.is_empty());
            assert!(!section.boxes.is_empty(), "section {} has no boxes", section.title);
            for item in section.boxes {
                assert!(!item.icon_name.is_empty());
                assert!(!item.label_key.is_empty());
            }
        }
    }

    #[test]
    fn icon_names_are_unique() {
        let panel = ControlPanel::new();
        let mut seen = HashSet::new();
        for item in panel.sections().iter().flat_map(|section| section.boxes) {
            assert!(seen.insert(item.icon_name), "duplicate icon {}", item.icon_name);
        }
    }

    #[test]
    fn find_box_by_icon_name() {
        let panel = ControlPanel::new();

        let plan = panel.find_box("my_plan").unwrap();
        assert!(!plan.is_external());

        let billing = panel.find_box("billing_information").unwrap();
        assert!(billing.is_external());

        assert!(panel.find_box("missing").is_none());
    }
}
