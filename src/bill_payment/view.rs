use maud::{Markup, html};

use crate::{
    bill_payment::{
        catalog::BillCategory,
        flow::{BillErrors, BillForm, BillPayment, BillStep},
    },
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FLOW_TARGET, InputField, PANEL_DESCRIPTION_STYLE,
        PANEL_STYLE, PANEL_TITLE_STYLE, format_currency, hidden_input, select_field, submit_button,
        success_banner, summary_row,
    },
};

/// Render `step` as the contents of the flow container.
pub fn step_view(step: &BillStep) -> Markup {
    match step {
        BillStep::Category => category_step(),
        BillStep::Details {
            category,
            form,
            errors,
        } => details_step(*category, form, errors),
        BillStep::Confirm { form, payment } => confirm_step(form, payment),
        BillStep::Success => success_step(),
    }
}

fn category_description(category: BillCategory) -> &'static str {
    match category {
        BillCategory::Airtime => "Recharge any mobile number",
        BillCategory::Data => "Buy data bundles for any network",
        BillCategory::Tv => "Pay for DSTV, GOtv or StarTimes",
    }
}

fn category_step() -> Markup {
    html! {
        div class=(PANEL_STYLE)
        {
            h2 class=(PANEL_TITLE_STYLE) { "Select Bill Category" }
            p class=(PANEL_DESCRIPTION_STYLE) { "Choose the type of bill you want to pay" }

            div class="grid grid-cols-1 sm:grid-cols-3 gap-4"
            {
                @for category in BillCategory::ALL {
                    form
                        hx-post=(endpoints::BILL_PAYMENT_CATEGORY)
                        hx-target=(FLOW_TARGET)
                        hx-target-error="#alert-container"
                    {
                        (hidden_input("category", category.as_str()))

                        button
                            type="submit"
                            class="w-full h-full p-4 text-left rounded-lg border border-gray-200
                            hover:border-blue-900 hover:bg-blue-50 dark:border-gray-600 dark:hover:bg-gray-700"
                        {
                            span class="block font-semibold" { (category.label()) }
                            span class={"block " (PANEL_DESCRIPTION_STYLE)} { (category_description(category)) }
                        }
                    }
                }
            }
        }
    }
}

/// A form field that asks the server to re-render the details step when it changes.
fn rerender_on_change(field: Markup) -> Markup {
    html! {
        div
            hx-post=(endpoints::BILL_PAYMENT_FORM)
            hx-trigger="change"
            hx-target=(FLOW_TARGET)
            hx-include="closest form"
        {
            (field)
        }
    }
}

fn details_step(category: BillCategory, form: &BillForm, errors: &BillErrors) -> Markup {
    let providers = category
        .providers()
        .iter()
        .map(|provider| (provider.id, provider.name))
        .collect::<Vec<_>>();
    let provider = category.provider(&form.provider);
    let plans = provider
        .map(|provider| category.plans(provider))
        .unwrap_or_default();
    let plan_options = plans
        .iter()
        .map(|plan| (plan.id.to_owned(), plan.label()))
        .collect::<Vec<_>>();
    let plan_options = plan_options
        .iter()
        .map(|(id, label)| (id.as_str(), label.as_str()))
        .collect::<Vec<_>>();
    let plan = provider.and_then(|provider| category.plan(provider, &form.plan));

    html! {
        div class=(PANEL_STYLE)
        {
            h2 class=(PANEL_TITLE_STYLE) { (category.title()) }
            p class=(PANEL_DESCRIPTION_STYLE) { "Enter details to continue" }

            form
                hx-post=(endpoints::BILL_PAYMENT_DETAILS)
                hx-target=(FLOW_TARGET)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="find button"
                class="space-y-4"
            {
                (hidden_input("category", category.as_str()))

                (rerender_on_change(select_field(
                    "provider",
                    "Select Provider",
                    "Select provider",
                    &providers,
                    &form.provider,
                    errors.provider,
                )))

                @match category {
                    BillCategory::Airtime => {
                        (InputField::new("phone_number", "Phone Number")
                            .type_("tel")
                            .value(&form.phone_number)
                            .placeholder("08012345678")
                            .error(errors.phone_number)
                            .into_html())

                        div class="input-wrapper"
                        {
                            (InputField::new("amount", "Amount")
                                .type_("number")
                                .value(&form.amount)
                                .placeholder("0.00")
                                .error(errors.amount)
                                .into_html())
                        }
                    }
                    BillCategory::Data => {
                        (InputField::new("phone_number", "Phone Number")
                            .type_("tel")
                            .value(&form.phone_number)
                            .placeholder("08012345678")
                            .error(errors.phone_number)
                            .into_html())
                    }
                    BillCategory::Tv => {
                        (InputField::new("smart_card_number", "Smart Card / IUC Number")
                            .value(&form.smart_card_number)
                            .error(errors.smart_card_number)
                            .into_html())
                    }
                }

                @if category != BillCategory::Airtime && (provider.is_some() || errors.plan.is_some()) {
                    (rerender_on_change(select_field(
                        "plan",
                        if category == BillCategory::Data { "Select Data Plan" } else { "Select Subscription Plan" },
                        "Select plan",
                        &plan_options,
                        &form.plan,
                        errors.plan,
                    )))
                }

                @if let Some(plan) = plan {
                    div class="p-3 rounded-lg bg-gray-50 dark:bg-gray-700"
                    {
                        (summary_row("Amount", &format_currency(plan.price)))
                    }
                }

                div class="flex gap-4"
                {
                    a href=(endpoints::BILL_PAYMENT_VIEW) class=(BUTTON_SECONDARY_STYLE) { "Back" }
                    (submit_button("Continue"))
                }
            }
        }
    }
}

/// The values of `form` as hidden inputs so that the next step can rebuild the bill.
fn carried_fields(form: &BillForm) -> Markup {
    html! {
        (hidden_input("category", &form.category))
        (hidden_input("provider", &form.provider))
        (hidden_input("phone_number", &form.phone_number))
        (hidden_input("amount", &form.amount))
        (hidden_input("plan", &form.plan))
        (hidden_input("smart_card_number", &form.smart_card_number))
    }
}

fn confirm_step(form: &BillForm, payment: &BillPayment) -> Markup {
    let account_label = match payment.category {
        BillCategory::Tv => "Smart Card Number",
        BillCategory::Airtime | BillCategory::Data => "Phone Number",
    };
    let plan_label = match payment.category {
        BillCategory::Data => "Data Plan",
        BillCategory::Airtime | BillCategory::Tv => "Subscription",
    };

    html! {
        div class=(PANEL_STYLE)
        {
            h2 class=(PANEL_TITLE_STYLE) { "Confirm Payment" }
            p class=(PANEL_DESCRIPTION_STYLE) { "Please review your payment details" }

            div id="payment-summary" class="p-4 rounded-lg bg-gray-50 dark:bg-gray-700"
            {
                (summary_row("Service", payment.category.label()))
                (summary_row("Provider", payment.provider.name))
                (summary_row(account_label, &payment.account))

                @if let Some(plan) = payment.plan {
                    (summary_row(plan_label, plan.name))
                }

                div class="flex justify-between pt-2 mt-2 border-t border-gray-200 dark:border-gray-600"
                {
                    span class="text-gray-600 dark:text-gray-400" { "Amount" }
                    span class="font-bold text-green-600" { (format_currency(payment.amount)) }
                }
            }

            div class="p-4 rounded-lg bg-amber-50 border border-amber-200 text-sm text-amber-800"
            {
                "This transaction cannot be reversed once completed. \
                Please ensure all details are correct."
            }

            form
                hx-post=(endpoints::BILL_PAYMENT_CONFIRM)
                hx-target=(FLOW_TARGET)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="find button"
            {
                (carried_fields(form))

                div class="flex gap-4"
                {
                    button
                        type="button"
                        hx-post=(endpoints::BILL_PAYMENT_EDIT)
                        hx-target=(FLOW_TARGET)
                        hx-include="closest form"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Back"
                    }

                    (submit_button("Pay Now"))
                }
            }
        }
    }
}

fn success_step() -> Markup {
    html! {
        div class={(PANEL_STYLE) " text-center"}
        {
            (success_banner(
                "Payment Successful!",
                "Your transaction has been completed successfully.",
            ))

            div class="flex flex-col sm:flex-row gap-4"
            {
                a href=(endpoints::DASHBOARD_VIEW) class=(BUTTON_PRIMARY_STYLE) { "Return to Dashboard" }
                a href=(endpoints::BILL_PAYMENT_VIEW) class=(BUTTON_SECONDARY_STYLE) { "Make Another Payment" }
            }
        }
    }
}
