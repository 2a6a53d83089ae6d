//! Sustainability label badge.

use leptos::prelude::*;

use crate::products::{EcoLabel, EcoPrediction};

fn badge_modifier(label: EcoLabel) -> &'static str {
    match label {
        EcoLabel::Harmful => "eco-badge--harmful",
        EcoLabel::Moderate => "eco-badge--moderate",
        EcoLabel::EcoFriendly => "eco-badge--eco-friendly",
    }
}

/// Badge for a label, with the model confidence when a prediction is shown.
#[component]
pub fn EcoBadge(label: EcoLabel, prediction: Option<EcoPrediction>) -> impl IntoView {
    let confidence = prediction.map(|p| format!("{:.0}% confidence", p.confidence * 100.0));
    view! {
        <span class=format!("eco-badge {}", badge_modifier(label))>
            <span class="eco-badge__label">{label.label()}</span>
            {confidence.map(|text| view! { <span class="eco-badge__confidence">{text}</span> })}
        </span>
    }
}
