use dioxus::prelude::*;

/// Large landing-page card for one metric family.
#[component]
pub fn MetricCard(
    title: &'static str,
    description: &'static str,
    card_class: &'static str,
    badge: &'static str,
    on_select: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "metric-card {card_class}",
            onclick: move |_| on_select.call(()),
            h3 { class: "metric-card__title", "{title}" }
            p { class: "metric-card__description", "{description}" }
            span { class: "metric-card__badge", "{badge}" }
        }
    }
}

/// One row of a metric menu: either an explorable metric or a stub.
#[component]
pub fn MetricRow(
    name: &'static str,
    description: &'static str,
    active: bool,
    on_select: EventHandler<()>,
) -> Element {
    let row_class = if active {
        "metric-row metric-row--active"
    } else {
        "metric-row metric-row--stub"
    };
    let status = if active { "Explore more →" } else { "Coming soon..." };
    rsx! {
        div {
            class: "{row_class}",
            onclick: move |_| {
                if active {
                    on_select.call(());
                }
            },
            div { class: "metric-row__heading",
                h3 { "{name}" }
                p { class: "metric-row__description", "{description}" }
            }
            span { class: "metric-row__status", "{status}" }
        }
    }
}
