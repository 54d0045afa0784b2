use crate::shared::icons::icon;
use contracts::shared::list_view::EMPTY_DISPLAY;
use leptos::prelude::*;

/// Visual tone of a [`StatCard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Error => "stat-card stat-card--error",
        }
    }
}

/// Thousands separated with a non-breaking space: 12345 -> "12 345".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{00a0}');
        }
        out.push(ch);
    }
    out
}

/// Counter card. `None` renders "—" (loading or failed).
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    #[prop(into)] value: Signal<Option<u64>>,
    #[prop(optional)] tone: StatTone,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => EMPTY_DISPLAY.to_string(),
    };

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(1234), "1\u{00a0}234");
        assert_eq!(format_count(1_234_567), "1\u{00a0}234\u{00a0}567");
    }
}
