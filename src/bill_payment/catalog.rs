//! The bill categories, providers and plans on offer.

use crate::html::format_currency;

/// A kind of bill that can be paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillCategory {
    Airtime,
    Data,
    Tv,
}

impl BillCategory {
    /// Every category, in the order shown to the user.
    pub const ALL: [BillCategory; 3] = [BillCategory::Airtime, BillCategory::Data, BillCategory::Tv];

    /// Parse the value used in forms and query strings.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
    }

    /// The value used in forms and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            BillCategory::Airtime => "airtime",
            BillCategory::Data => "data",
            BillCategory::Tv => "tv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillCategory::Airtime => "Airtime",
            BillCategory::Data => "Data Bundle",
            BillCategory::Tv => "TV Subscription",
        }
    }

    /// The heading of the details step.
    pub fn title(&self) -> &'static str {
        match self {
            BillCategory::Airtime => "Buy Airtime",
            BillCategory::Data => "Buy Data Bundle",
            BillCategory::Tv => "TV Subscription",
        }
    }

    pub fn providers(&self) -> &'static [Provider] {
        match self {
            BillCategory::Airtime | BillCategory::Data => &MOBILE_NETWORKS,
            BillCategory::Tv => &TV_PROVIDERS,
        }
    }

    /// Find the provider with `id` among the providers of this category.
    pub fn provider(&self, id: &str) -> Option<&'static Provider> {
        self.providers().iter().find(|provider| provider.id == id)
    }

    /// The plans `provider` sells in this category.
    ///
    /// Airtime is bought by amount, so it has no plans.
    pub fn plans(&self, provider: &Provider) -> &'static [Plan] {
        match (self, provider.id) {
            (BillCategory::Airtime, _) => &[],
            (BillCategory::Data, _) => &DATA_PLANS,
            (BillCategory::Tv, "dstv") => &DSTV_PLANS,
            (BillCategory::Tv, "gotv") => &GOTV_PLANS,
            (BillCategory::Tv, "startimes") => &STARTIMES_PLANS,
            (BillCategory::Tv, _) => &[],
        }
    }

    /// Find the plan with `id` among the plans `provider` sells in this category.
    pub fn plan(&self, provider: &Provider, id: &str) -> Option<&'static Plan> {
        self.plans(provider).iter().find(|plan| plan.id == id)
    }
}

/// A company that bills can be paid to.
#[derive(Debug, PartialEq)]
pub struct Provider {
    pub id: &'static str,
    pub name: &'static str,
}

/// A data bundle or TV subscription with a fixed price.
#[derive(Debug, PartialEq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    /// The price in naira.
    pub price: f64,
    /// How long the plan lasts, if shown to the user.
    pub validity: Option<&'static str>,
}

impl Plan {
    /// The text of the plan's option in the plan select, e.g. "1GB - ₦1,000.00 (30 days)".
    pub fn label(&self) -> String {
        match self.validity {
            Some(validity) => format!(
                "{} - {} ({validity})",
                self.name,
                format_currency(self.price)
            ),
            None => format!("{} - {}", self.name, format_currency(self.price)),
        }
    }
}

const MOBILE_NETWORKS: [Provider; 4] = [
    Provider {
        id: "mtn",
        name: "MTN Nigeria",
    },
    Provider {
        id: "airtel",
        name: "Airtel Nigeria",
    },
    Provider {
        id: "glo",
        name: "Glo Nigeria",
    },
    Provider {
        id: "9mobile",
        name: "9mobile",
    },
];

const TV_PROVIDERS: [Provider; 3] = [
    Provider {
        id: "dstv",
        name: "DSTV",
    },
    Provider {
        id: "gotv",
        name: "GOtv",
    },
    Provider {
        id: "startimes",
        name: "StarTimes",
    },
];

/// Every network sells the same bundles at the same prices.
const DATA_PLANS: [Plan; 4] = [
    Plan {
        id: "100mb",
        name: "100MB",
        price: 200.0,
        validity: Some("24hrs"),
    },
    Plan {
        id: "1gb",
        name: "1GB",
        price: 1_000.0,
        validity: Some("30 days"),
    },
    Plan {
        id: "2gb",
        name: "2GB",
        price: 1_500.0,
        validity: Some("30 days"),
    },
    Plan {
        id: "5gb",
        name: "5GB",
        price: 3_500.0,
        validity: Some("30 days"),
    },
];

const DSTV_PLANS: [Plan; 4] = [
    tv_plan("dstv-access", "DStv Access", 2_000.0),
    tv_plan("dstv-family", "DStv Family", 4_000.0),
    tv_plan("dstv-compact", "DStv Compact", 9_000.0),
    tv_plan("dstv-premium", "DStv Premium", 21_000.0),
];

const GOTV_PLANS: [Plan; 4] = [
    tv_plan("gotv-lite", "GOtv Lite", 900.0),
    tv_plan("gotv-jinja", "GOtv Jinja", 1_900.0),
    tv_plan("gotv-jolli", "GOtv Jolli", 3_300.0),
    tv_plan("gotv-max", "GOtv Max", 4_850.0),
];

const STARTIMES_PLANS: [Plan; 4] = [
    tv_plan("startimes-nova", "StarTimes Nova", 900.0),
    tv_plan("startimes-basic", "StarTimes Basic", 1_850.0),
    tv_plan("startimes-smart", "StarTimes Smart", 2_600.0),
    tv_plan("startimes-super", "StarTimes Super", 4_900.0),
];

const fn tv_plan(id: &'static str, name: &'static str, price: f64) -> Plan {
    Plan {
        id,
        name,
        price,
        validity: None,
    }
}

#[cfg(test)]
mod tests {
    use super::BillCategory;

    #[test]
    fn parses_form_values() {
        for category in BillCategory::ALL {
            assert_eq!(BillCategory::parse(category.as_str()), Some(category));
        }

        assert_eq!(BillCategory::parse("electricity"), None);
    }

    #[test]
    fn providers_belong_to_their_category() {
        assert!(BillCategory::Airtime.provider("mtn").is_some());
        assert!(BillCategory::Data.provider("9mobile").is_some());
        assert!(BillCategory::Tv.provider("mtn").is_none());
        assert!(BillCategory::Airtime.provider("dstv").is_none());
    }

    #[test]
    fn every_network_sells_the_same_data_plans() {
        let prices = |provider_id: &str| {
            let provider = BillCategory::Data.provider(provider_id).unwrap();
            BillCategory::Data
                .plans(provider)
                .iter()
                .map(|plan| plan.price)
                .collect::<Vec<_>>()
        };

        assert_eq!(prices("mtn"), [200.0, 1_000.0, 1_500.0, 3_500.0]);
        assert_eq!(prices("mtn"), prices("glo"));
    }

    #[test]
    fn tv_plans_depend_on_provider() {
        let gotv = BillCategory::Tv.provider("gotv").unwrap();
        let dstv = BillCategory::Tv.provider("dstv").unwrap();

        let plan = BillCategory::Tv.plan(gotv, "gotv-max").unwrap();

        assert_eq!(plan.name, "GOtv Max");
        assert_eq!(plan.price, 4_850.0);
        assert!(BillCategory::Tv.plan(dstv, "gotv-max").is_none());
    }

    #[test]
    fn airtime_has_no_plans() {
        let mtn = BillCategory::Airtime.provider("mtn").unwrap();

        assert!(BillCategory::Airtime.plans(mtn).is_empty());
    }

    #[test]
    fn plan_label_includes_validity() {
        let mtn = BillCategory::Data.provider("mtn").unwrap();
        let plan = BillCategory::Data.plan(mtn, "100mb").unwrap();

        let label = plan.label();

        assert!(label.starts_with("100MB - ₦200"), "got {label}");
        assert!(label.ends_with("(24hrs)"), "got {label}");
    }
}
