use maud::{Markup, html};

use crate::{
    User, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FLOW_TARGET, InputField, PANEL_DESCRIPTION_STYLE,
        PANEL_STYLE, PANEL_TITLE_STYLE, field_error, format_currency, hidden_input, select_field,
        submit_button, success_banner, summary_row,
    },
    transfer::flow::{NIGERIAN_BANKS, Transfer, TransferErrors, TransferForm, TransferStep},
};

/// Render `step` as the contents of the flow container.
pub fn step_view(step: &TransferStep, user: &User) -> Markup {
    match step {
        TransferStep::Details { form, errors } => details_step(form, errors),
        TransferStep::Confirm { form, transfer } => confirm_step(form, transfer, user),
        TransferStep::Success { transfer } => success_step(transfer),
    }
}

fn recipient_status(form: &TransferForm, errors: &TransferErrors) -> Markup {
    html! {
        div id="recipient" class="flex items-center justify-between gap-4"
        {
            @if form.is_verified() {
                p class="text-sm text-green-700 dark:text-green-400"
                {
                    "Account name: "
                    span class="font-semibold" { (form.recipient) }
                }
            } @else {
                (field_error(errors.recipient))
            }

            button
                type="button"
                hx-post=(endpoints::TRANSFER_RECIPIENT)
                hx-target=(FLOW_TARGET)
                hx-include="closest form"
                hx-indicator="#lookup-indicator"
                hx-disabled-elt="this"
                class="shrink-0 px-3 py-1.5 text-sm font-medium text-blue-900 border border-blue-900 rounded
                hover:bg-blue-50 disabled:opacity-50"
            {
                span class="htmx-indicator" id="lookup-indicator" { "Verifying… " }
                "Verify Account"
            }
        }
    }
}

fn details_step(form: &TransferForm, errors: &TransferErrors) -> Markup {
    let banks = NIGERIAN_BANKS
        .iter()
        .map(|bank| (bank.id, bank.name))
        .collect::<Vec<_>>();

    html! {
        div class=(PANEL_STYLE)
        {
            h2 class=(PANEL_TITLE_STYLE) { "Make a Transfer" }
            p class=(PANEL_DESCRIPTION_STYLE) { "Send money to any bank account in Nigeria" }

            form
                hx-post=(endpoints::TRANSFER_DETAILS)
                hx-target=(FLOW_TARGET)
                hx-target-error="#alert-container"
                hx-indicator="#indicator"
                hx-disabled-elt="find button"
                class="space-y-4"
            {
                (hidden_input("recipient", &form.recipient))
                (hidden_input("verified_account", &form.verified_account))

                (InputField::new("account_number", "Account Number")
                    .value(&form.account_number)
                    .placeholder("0123456789")
                    .error(errors.account_number)
                    .into_html())

                (select_field(
                    "bank",
                    "Bank Name",
                    "Select Bank",
                    &banks,
                    &form.bank,
                    errors.bank,
                ))

                (recipient_status(form, errors))

                div class="input-wrapper"
                {
                    (InputField::new("amount", "Amount (₦)")
                        .type_("number")
                        .value(&form.amount)
                        .placeholder("0.00")
                        .error(errors.amount)
                        .into_html())
                }

                (InputField::new("narration", "Narration (Optional)")
                    .value(&form.narration)
                    .placeholder("What's this for?")
                    .optional()
                    .into_html())

                (submit_button("Continue"))
            }
        }
    }
}

/// The values of `form` as hidden inputs so that the next step can rebuild the transfer.
fn carried_fields(form: &TransferForm) -> Markup {
    html! {
        (hidden_input("bank", &form.bank))
        (hidden_input("account_number", &form.account_number))
        (hidden_input("amount", &form.amount))
        (hidden_input("narration", &form.narration))
        (hidden_input("recipient", &form.recipient))
        (hidden_input("verified_account", &form.verified_account))
    }
}

fn confirm_step(form: &TransferForm, transfer: &Transfer, user: &User) -> Markup {
    html! {
        div class=(PANEL_STYLE)
        {
            h2 class=(PANEL_TITLE_STYLE) { "Confirm Transfer" }
            p class=(PANEL_DESCRIPTION_STYLE) { "Please review your transfer details" }

            div id="sender-summary" class="p-4 rounded-lg bg-blue-50 dark:bg-gray-700"
            {
                (summary_row("From", &user.name))
                (summary_row("Available Balance", &format_currency(user.balance)))
            }

            div class="flex justify-center text-blue-900 text-xl" { "↓" }

            div id="transfer-summary" class="p-4 rounded-lg bg-gray-50 dark:bg-gray-700"
            {
                (summary_row("To", transfer.recipient))
                (summary_row("Bank", transfer.bank.name))
                (summary_row("Account Number", &transfer.account_number))
                (summary_row("Amount", &format_currency(transfer.amount)))

                @if let Some(narration) = &transfer.narration {
                    (summary_row("Narration", narration))
                }
            }

            div class="p-4 rounded-lg bg-amber-50 border border-amber-200 text-sm text-amber-800"
            {
                "Please verify all details carefully. Transfers cannot be reversed once completed."
            }

            form
                hx-post=(endpoints::TRANSFER_CONFIRM)
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
                        hx-post=(endpoints::TRANSFER_EDIT)
                        hx-target=(FLOW_TARGET)
                        hx-include="closest form"
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "Back"
                    }

                    (submit_button("Confirm Transfer"))
                }
            }
        }
    }
}

fn success_step(transfer: &Transfer) -> Markup {
    let message = format!(
        "{} has been sent to {}",
        format_currency(transfer.amount),
        transfer.recipient
    );

    html! {
        div class={(PANEL_STYLE) " text-center"}
        {
            (success_banner("Transfer Successful!", &message))

            div class="space-y-3"
            {
                a href=(endpoints::DASHBOARD_VIEW) class={"block " (BUTTON_PRIMARY_STYLE)} { "Return to Dashboard" }
                a href=(endpoints::TRANSFER_VIEW) class={"block " (BUTTON_SECONDARY_STYLE)} { "Make Another Transfer" }
            }
        }
    }
}
