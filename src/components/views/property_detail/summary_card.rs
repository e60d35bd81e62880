// Right-hand card with headline facts and contact buttons.

#[component]
pub fn SummaryCard(property: Property, mailto: String, on_contact: EventHandler<()>) -> Element {
    let area = property.area_label();

    rsx! {
        div { class: "lg:col-span-1",
            div { class: "glass-morphism p-6 rounded-lg h-full flex flex-col",
                h1 { class: "text-2xl font-semibold mb-2", "{property.title}" }

                if let Some(subtitle) = property.subtitle() {
                    p { class: "text-muted-foreground mb-4", "{subtitle}" }
                }

                div { class: "flex items-center text-muted-foreground mb-4",
                    Icon { name: "map-pin".to_string(), class: "w-4 h-4 mr-1".to_string() }
                    span { "{property.location}" }
                }

                div { class: "text-2xl font-bold mb-6", "{property.price}" }

                div { class: "grid grid-cols-3 gap-4 mb-8",
                    FactTile { icon: "bed", label: format!("{} Beds", property.bedrooms) }
                    FactTile { icon: "bath", label: format!("{} Baths", property.bathrooms) }
                    FactTile { icon: "area", label: format!("{area} sqft") }
                }

                div { class: "space-y-4 mb-8",
                    if let Some(power_supply) = property.power_supply() {
                        FeatureRow { icon: "power", heading: "Power Supply", value: power_supply.to_string() }
                    }
                    if let Some(style) = property.style() {
                        FeatureRow { icon: "style", heading: "Style", value: style.to_string() }
                    }
                }

                div { class: "mt-auto space-y-3",
                    button {
                        class: "w-full inline-flex items-center justify-center rounded-md bg-white text-black font-medium px-4 py-2 hover:bg-white/90 transition-colors",
                        onclick: move |_| on_contact.call(()),
                        Icon { name: "phone".to_string(), class: "mr-2 h-4 w-4".to_string() }
                        "WhatsApp Contact"
                    }
                    a {
                        class: "w-full inline-flex items-center justify-center rounded-md border border-white/20 text-white font-medium px-4 py-2 hover:bg-white/10 transition-colors",
                        href: "{mailto}",
                        Icon { name: "message".to_string(), class: "mr-2 h-4 w-4".to_string() }
                        "Email Inquiry"
                    }
                }
            }
        }
    }
}

#[component]
fn FactTile(icon: &'static str, label: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center p-3 bg-white/5 rounded-lg",
            Icon { name: icon.to_string(), class: "w-5 h-5 mb-1".to_string() }
            span { class: "text-sm", "{label}" }
        }
    }
}

#[component]
fn FeatureRow(icon: &'static str, heading: &'static str, value: String) -> Element {
    rsx! {
        div { class: "flex items-center",
            div { class: "mr-3 p-2 bg-white/10 rounded-full",
                Icon { name: icon.to_string(), class: "w-4 h-4 text-accent".to_string() }
            }
            div {
                h4 { class: "text-sm font-medium", "{heading}" }
                p { class: "text-muted-foreground text-sm", "{value}" }
            }
        }
    }
}
