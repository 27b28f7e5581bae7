use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, FLOW_TARGET, PANEL_DESCRIPTION_STYLE, PANEL_STYLE, PANEL_TITLE_STYLE,
        success_banner,
    },
    ledger::Card,
};

/// A step of the cards page.
#[derive(Debug, PartialEq)]
pub enum CardsStep<'a> {
    /// Every card issued so far.
    List(&'a [Card]),
    /// A new virtual card is being issued.
    Creating,
    /// The new virtual card has been issued.
    Success,
}

/// Render `step` as the contents of the flow container.
pub fn step_view(step: &CardsStep) -> Markup {
    match step {
        CardsStep::List(cards) => list_step(cards),
        CardsStep::Creating => creating_step(),
        CardsStep::Success => success_step(),
    }
}

/// The ID of the element holding the card with `card`'s ID.
fn card_element_id(card: &Card) -> String {
    format!("card-{}", card.id)
}

fn create_card_button() -> Markup {
    html! {
        button
            type="button"
            hx-post=(endpoints::CARDS_CREATING)
            hx-target=(FLOW_TARGET)
            hx-target-error="#alert-container"
            class={"sm:w-auto " (BUTTON_PRIMARY_STYLE)}
        {
            "+ Create Virtual Card"
        }
    }
}

/// A bank card with its details masked unless `reveal` is set.
pub fn card_tile(card: &Card, reveal: bool) -> Markup {
    let element_id = card_element_id(card);
    let target = format!("#{element_id}");
    let (background, badge_style, badge, toggle_style, toggle_text) = if card.is_active {
        (
            "bg-gradient-to-r from-blue-900 to-blue-700",
            "bg-green-500",
            "Active",
            "bg-red-600 hover:bg-red-700",
            "Deactivate",
        )
    } else {
        (
            "bg-gray-700",
            "bg-gray-500",
            "Inactive",
            "bg-white/10 border border-white/20 hover:bg-white/20",
            "Activate",
        )
    };
    let reveal_url = format!(
        "{}?reveal={}",
        format_endpoint(endpoints::CARD, card.id),
        !reveal
    );

    html! {
        div id=(element_id) class={"relative overflow-hidden rounded-xl p-4 sm:p-6 shadow-lg text-white " (background)}
        {
            span class={"card-status absolute top-3 right-3 px-2 py-1 rounded text-xs " (badge_style)}
            {
                (badge)
            }

            p class="text-sm uppercase mb-4" { (card.type_.label()) }

            div class="mb-4"
            {
                p class="text-sm mb-1" { "Card Number" }
                div class="flex items-center gap-2"
                {
                    span class="card-number font-mono text-xl"
                    {
                        @if reveal { (card.card_number) } @else { "•••• •••• •••• ••••" }
                    }

                    button
                        type="button"
                        hx-get=(reveal_url)
                        hx-target=(target)
                        hx-swap="outerHTML"
                        class="text-xs underline opacity-70"
                    {
                        @if reveal { "Hide" } @else { "Show" }
                    }
                }
            }

            div class="flex justify-between"
            {
                div
                {
                    p class="text-xs mb-1" { "Expiry Date" }
                    p class="font-mono" { @if reveal { (card.expiry_date) } @else { "••/••" } }
                }

                div
                {
                    p class="text-xs mb-1" { "CVV" }
                    p class="font-mono" { @if reveal { (card.cvv) } @else { "•••" } }
                }
            }

            button
                type="button"
                hx-post=(format_endpoint(endpoints::CARD_TOGGLE, card.id))
                hx-target=(target)
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
                hx-disabled-elt="this"
                class={"w-full mt-4 px-3 py-1.5 text-sm font-medium rounded " (toggle_style)}
            {
                (toggle_text)
            }
        }
    }
}

fn list_step(cards: &[Card]) -> Markup {
    html! {
        div class="space-y-4 sm:space-y-6"
        {
            div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4"
            {
                h2 class="text-lg font-semibold text-gray-900 dark:text-white" { "Your Cards" }
                (create_card_button())
            }

            @if cards.is_empty() {
                div class={(PANEL_STYLE) " text-center py-10"}
                {
                    h3 class="text-lg font-semibold text-gray-900 dark:text-white" { "No Cards Yet" }
                    p class="text-gray-500"
                    {
                        "You don't have any cards yet. Create a virtual card to get started."
                    }
                }
            } @else {
                div class="grid sm:grid-cols-2 gap-4 sm:gap-6"
                {
                    @for card in cards {
                        (card_tile(card, false))
                    }
                }
            }
        }
    }
}

fn creating_step() -> Markup {
    html! {
        div class=(PANEL_STYLE)
        {
            h2 class=(PANEL_TITLE_STYLE) { "Create Virtual Card" }
            p class=(PANEL_DESCRIPTION_STYLE) { "Your new virtual card is being created" }

            div
                hx-post=(endpoints::CARDS_API)
                hx-trigger="load"
                hx-target=(FLOW_TARGET)
                hx-target-error="#alert-container"
                class="flex flex-col items-center py-10"
            {
                div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-blue-900 mb-4" {}
                p class="text-center text-gray-600 dark:text-gray-400"
                {
                    "Please wait while we create your virtual card. This may take a moment."
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
                "Virtual Card Created!",
                "Your new virtual card has been created successfully. \
                You can now use it for online transactions.",
            ))

            a href=(endpoints::CARDS_VIEW) class={"block " (BUTTON_PRIMARY_STYLE)} { "View My Cards" }
        }
    }
}
