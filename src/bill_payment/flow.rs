//! The steps of the bill payment flow and the transitions between them.

use serde::Deserialize;

use crate::{
    bill_payment::catalog::{BillCategory, Plan, Provider},
    validation::{is_digits, is_local_phone_number, parse_amount},
};

/// The smallest amount of airtime that can be bought, in naira.
pub const MIN_AIRTIME_AMOUNT: f64 = 50.0;
/// The largest amount of airtime that can be bought, in naira.
pub const MAX_AIRTIME_AMOUNT: f64 = 10_000.0;

/// The raw values of the bill details form.
///
/// Every step submits these so the flow can be rebuilt from any request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BillForm {
    pub category: String,
    pub provider: String,
    pub phone_number: String,
    pub amount: String,
    pub plan: String,
    pub smart_card_number: String,
}

impl BillForm {
    /// An empty form for `category`.
    pub fn new(category: BillCategory) -> Self {
        Self {
            category: category.as_str().to_owned(),
            ..Default::default()
        }
    }
}

/// The validation messages for the bill details form.
#[derive(Debug, Default, PartialEq)]
pub struct BillErrors {
    pub provider: Option<&'static str>,
    pub phone_number: Option<&'static str>,
    pub amount: Option<&'static str>,
    pub plan: Option<&'static str>,
    pub smart_card_number: Option<&'static str>,
}

/// A validated bill, ready to be paid.
#[derive(Debug, PartialEq)]
pub struct BillPayment {
    pub category: BillCategory,
    pub provider: &'static Provider,
    /// The phone number for airtime and data, the smart card number for TV.
    pub account: String,
    pub plan: Option<&'static Plan>,
    /// The amount to pay in naira.
    pub amount: f64,
}

impl BillPayment {
    /// The description of the transaction recorded for this payment.
    pub fn description(&self) -> String {
        let plan_name = self.plan.map(|plan| plan.name).unwrap_or_default();

        match self.category {
            BillCategory::Airtime => format!("{} Airtime Recharge", self.provider.name),
            BillCategory::Data => format!("{} Data Bundle - {plan_name}", self.provider.name),
            BillCategory::Tv => format!("{} Subscription - {plan_name}", self.provider.name),
        }
    }
}

/// Check the submitted details of a bill in `category`.
///
/// # Errors
///
/// Returns the messages to show next to each invalid field.
pub fn validate(category: BillCategory, form: &BillForm) -> Result<BillPayment, BillErrors> {
    let mut errors = BillErrors::default();

    let provider = if form.provider.is_empty() {
        errors.provider = Some("Provider is required");
        None
    } else {
        let provider = category.provider(&form.provider);
        if provider.is_none() {
            errors.provider = Some("Select a provider from the list");
        }
        provider
    };

    let plan = match category {
        BillCategory::Airtime => None,
        BillCategory::Data | BillCategory::Tv => {
            let (required, unknown) = match category {
                BillCategory::Data => ("Data plan is required", "Select a data plan from the list"),
                _ => (
                    "Subscription plan is required",
                    "Select a subscription plan from the list",
                ),
            };

            if form.plan.is_empty() {
                errors.plan = Some(required);
                None
            } else {
                let plan = provider.and_then(|provider| category.plan(provider, &form.plan));
                if plan.is_none() && provider.is_some() {
                    errors.plan = Some(unknown);
                }
                plan
            }
        }
    };

    let account = match category {
        BillCategory::Airtime | BillCategory::Data => {
            let phone_number = form.phone_number.trim();
            errors.phone_number = if phone_number.is_empty() {
                Some("Phone number is required")
            } else if !is_local_phone_number(phone_number) {
                Some("Please enter a valid 11-digit phone number")
            } else {
                None
            };
            phone_number
        }
        BillCategory::Tv => {
            let smart_card_number = form.smart_card_number.trim();
            errors.smart_card_number = if smart_card_number.is_empty() {
                Some("Smart card number is required")
            } else if !is_digits(smart_card_number) {
                Some("Please enter a valid smart card number")
            } else {
                None
            };
            smart_card_number
        }
    };

    let amount = match (category, plan) {
        (BillCategory::Airtime, _) => match parse_amount(&form.amount) {
            Ok(amount) if amount < MIN_AIRTIME_AMOUNT => {
                errors.amount = Some("Minimum amount is ₦50");
                None
            }
            Ok(amount) if amount > MAX_AIRTIME_AMOUNT => {
                errors.amount = Some("Maximum amount is ₦10,000");
                None
            }
            Ok(amount) => Some(amount),
            Err(message) => {
                errors.amount = Some(message);
                None
            }
        },
        (_, plan) => plan.map(|plan| plan.price),
    };

    match (provider, amount) {
        (Some(provider), Some(amount)) if errors == BillErrors::default() => Ok(BillPayment {
            category,
            provider,
            account: account.to_owned(),
            plan,
            amount,
        }),
        _ => Err(errors),
    }
}

/// A step of the bill payment flow.
#[derive(Debug, PartialEq)]
pub enum BillStep {
    /// Choose between airtime, data and TV.
    Category,
    /// Fill in the provider, account and plan or amount.
    Details {
        category: BillCategory,
        form: BillForm,
        errors: BillErrors,
    },
    /// Review the bill before paying.
    Confirm { form: BillForm, payment: BillPayment },
    /// The bill has been paid.
    Success,
}

impl BillStep {
    /// The first step, or the details step if `category` names a valid category.
    pub fn start(category: Option<&str>) -> Self {
        match category.and_then(BillCategory::parse) {
            Some(category) => BillStep::Details {
                category,
                form: BillForm::new(category),
                errors: BillErrors::default(),
            },
            None => BillStep::Category,
        }
    }

    /// Show the details step again with the values in `form` and no errors.
    ///
    /// A plan that the selected provider does not sell is cleared, e.g. after
    /// switching from DSTV to GOtv.
    pub fn edit(mut form: BillForm) -> Self {
        let Some(category) = BillCategory::parse(&form.category) else {
            return BillStep::Category;
        };

        let plan_is_sold = category
            .provider(&form.provider)
            .and_then(|provider| category.plan(provider, &form.plan))
            .is_some();
        if !plan_is_sold {
            form.plan.clear();
        }

        BillStep::Details {
            category,
            form,
            errors: BillErrors::default(),
        }
    }

    /// Move to the confirmation step if the details in `form` are valid.
    pub fn submit_details(form: BillForm) -> Self {
        let Some(category) = BillCategory::parse(&form.category) else {
            return BillStep::Category;
        };

        match validate(category, &form) {
            Ok(payment) => BillStep::Confirm { form, payment },
            Err(errors) => BillStep::Details {
                category,
                form,
                errors,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bill_payment::catalog::BillCategory;

    use super::{BillErrors, BillForm, BillStep, validate};

    fn airtime_form(amount: &str) -> BillForm {
        BillForm {
            provider: "mtn".to_owned(),
            phone_number: "08012345678".to_owned(),
            amount: amount.to_owned(),
            ..BillForm::new(BillCategory::Airtime)
        }
    }

    #[test]
    fn airtime_payment_is_described_by_provider() {
        let payment = validate(BillCategory::Airtime, &airtime_form("500")).unwrap();

        assert_eq!(payment.amount, 500.0);
        assert_eq!(payment.account, "08012345678");
        assert_eq!(payment.description(), "MTN Nigeria Airtime Recharge");
    }

    #[test]
    fn airtime_amount_must_be_within_limits() {
        let cases = [
            ("", "Amount is required"),
            ("abc", "Amount must be a number"),
            ("49", "Minimum amount is ₦50"),
            ("10001", "Maximum amount is ₦10,000"),
        ];

        for (amount, want) in cases {
            let errors = validate(BillCategory::Airtime, &airtime_form(amount)).unwrap_err();

            assert_eq!(errors.amount, Some(want), "amount {amount:?}");
        }

        assert!(validate(BillCategory::Airtime, &airtime_form("50")).is_ok());
        assert!(validate(BillCategory::Airtime, &airtime_form("10000")).is_ok());
    }

    #[test]
    fn phone_number_must_have_eleven_digits() {
        let mut form = airtime_form("500");
        form.phone_number = "0801234".to_owned();

        let errors = validate(BillCategory::Airtime, &form).unwrap_err();

        assert_eq!(
            errors.phone_number,
            Some("Please enter a valid 11-digit phone number")
        );
    }

    #[test]
    fn provider_must_belong_to_category() {
        let form = BillForm {
            provider: "dstv".to_owned(),
            ..airtime_form("500")
        };

        let errors = validate(BillCategory::Airtime, &form).unwrap_err();

        assert_eq!(errors.provider, Some("Select a provider from the list"));
    }

    #[test]
    fn empty_data_form_reports_every_field() {
        let errors = validate(BillCategory::Data, &BillForm::new(BillCategory::Data)).unwrap_err();

        assert_eq!(
            errors,
            BillErrors {
                provider: Some("Provider is required"),
                phone_number: Some("Phone number is required"),
                plan: Some("Data plan is required"),
                ..Default::default()
            }
        );
    }

    #[test]
    fn data_plan_sets_amount() {
        let form = BillForm {
            provider: "glo".to_owned(),
            phone_number: "08012345678".to_owned(),
            plan: "1gb".to_owned(),
            // Ignored, the plan decides the price.
            amount: "5".to_owned(),
            ..BillForm::new(BillCategory::Data)
        };

        let payment = validate(BillCategory::Data, &form).unwrap();

        assert_eq!(payment.amount, 1_000.0);
        assert_eq!(payment.description(), "Glo Nigeria Data Bundle - 1GB");
    }

    #[test]
    fn tv_needs_digits_only_smart_card() {
        let mut form = BillForm {
            provider: "dstv".to_owned(),
            plan: "dstv-compact".to_owned(),
            smart_card_number: "12AB".to_owned(),
            ..BillForm::new(BillCategory::Tv)
        };

        let errors = validate(BillCategory::Tv, &form).unwrap_err();
        assert_eq!(
            errors.smart_card_number,
            Some("Please enter a valid smart card number")
        );

        form.smart_card_number = "7012345678".to_owned();
        let payment = validate(BillCategory::Tv, &form).unwrap();
        assert_eq!(payment.amount, 9_000.0);
        assert_eq!(payment.description(), "DSTV Subscription - DStv Compact");
    }

    #[test]
    fn tv_plan_must_be_sold_by_provider() {
        let form = BillForm {
            provider: "gotv".to_owned(),
            plan: "dstv-compact".to_owned(),
            smart_card_number: "7012345678".to_owned(),
            ..BillForm::new(BillCategory::Tv)
        };

        let errors = validate(BillCategory::Tv, &form).unwrap_err();

        assert_eq!(
            errors.plan,
            Some("Select a subscription plan from the list")
        );
    }

    #[test]
    fn start_deep_links_into_details() {
        assert_eq!(BillStep::start(None), BillStep::Category);
        assert_eq!(BillStep::start(Some("electricity")), BillStep::Category);
        assert!(matches!(
            BillStep::start(Some("data")),
            BillStep::Details {
                category: BillCategory::Data,
                ..
            }
        ));
    }

    #[test]
    fn valid_details_move_to_confirm() {
        let step = BillStep::submit_details(airtime_form("500"));

        assert!(matches!(step, BillStep::Confirm { .. }), "got {step:?}");
    }

    #[test]
    fn invalid_details_stay_on_details() {
        let step = BillStep::submit_details(airtime_form("5"));

        assert!(
            matches!(step, BillStep::Details { ref errors, .. } if errors.amount.is_some()),
            "got {step:?}"
        );
    }

    #[test]
    fn changing_provider_clears_unsold_plan() {
        let form = BillForm {
            provider: "gotv".to_owned(),
            plan: "dstv-compact".to_owned(),
            ..BillForm::new(BillCategory::Tv)
        };

        let BillStep::Details { form, errors, .. } = BillStep::edit(form) else {
            panic!("want details step");
        };

        assert_eq!(form.plan, "");
        assert_eq!(form.provider, "gotv");
        assert_eq!(errors, BillErrors::default());
    }
}
