//! Metric card rendering.
//!
//! Each card is a fixed-size panel with the metric name, its formatted
//! value, and a colored status pill.

use super::{escape_html, Locale, Theme};
use crate::app::Card;

/// Render one metric card.
pub fn render_card(card: &Card, theme: &Theme, locale: Locale) -> String {
    let name = locale.metric_name(card.metric.kind);
    let label = locale.status_label(card.status.status);

    // Utilization caption only makes sense when a percentage backs the status
    let basis = match card.metric.utilization() {
        Some(u) => format!("{} {:.0}%", locale.strings().utilization, u),
        None => String::new(),
    };

    format!(
        r#"<div class="card" data-metric="{key}" data-status="{status}" style="background:{panel};border:1px solid {border};box-shadow:0 2px 6px {shadow};">
  <div class="card-name" style="color:{text};">{name}</div>
  <div class="card-body">
    <div class="card-value" style="color:{value_color};">{value}</div>
    <div class="card-status">
      <div class="card-basis" style="color:{muted};">{basis}</div>
      <div class="pill" style="background:{color};">{label}</div>
    </div>
  </div>
</div>
"#,
        key = card.metric.kind.key(),
        status = card.status.label,
        panel = theme.panel,
        border = theme.border,
        shadow = theme.shadow,
        text = theme.text,
        name = escape_html(name),
        value_color = theme.value,
        value = escape_html(&card.metric.display_value),
        muted = theme.muted,
        basis = escape_html(&basis),
        color = card.status.color,
        label = escape_html(label),
    )
}

/// Render the row of cards.
pub fn render_cards(cards: &[Card], theme: &Theme, locale: Locale) -> String {
    let mut html = String::from("<section class=\"cards\">\n");
    for card in cards {
        html.push_str(&render_card(card, theme, locale));
    }
    html.push_str("</section>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Metric, MetricEvaluator, MetricKind};

    fn card(metric: Metric) -> Card {
        let status = MetricEvaluator::default().evaluate(&metric);
        Card { metric, status }
    }

    #[test]
    fn test_card_shows_value_and_status() {
        let c = card(Metric::from_reading(MetricKind::WaterLevel, 4.2, 2));
        let html = render_card(&c, &Theme::light(), Locale::En);
        assert!(html.contains("Water level"));
        assert!(html.contains("4.20 m"));
        assert!(html.contains(">caution<"));
        assert!(html.contains("background:#f59e0b"));
        assert!(html.contains(r#"data-metric="water_level""#));
        assert!(!html.contains("Utilization"));
    }

    #[test]
    fn test_utilization_card_in_japanese() {
        let c = card(Metric::with_utilization(MetricKind::PumpDischarge, "120 m3/h", 120.0, 90.0));
        let html = render_card(&c, &Theme::light(), Locale::Ja);
        assert!(html.contains("揚水量"));
        assert!(html.contains("稼働率 90%"));
        assert!(html.contains(">稼働中<"));
        assert!(html.contains("background:#16a34a"));
    }

    #[test]
    fn test_card_value_is_escaped() {
        let c = card(Metric::with_utilization(MetricKind::Pressure, "<b>1.8</b>", 1.8, 55.0));
        let html = render_card(&c, &Theme::light(), Locale::En);
        assert!(html.contains("&lt;b&gt;1.8&lt;/b&gt;"));
    }

    #[test]
    fn test_render_cards_wraps_every_card() {
        let cards: Vec<Card> = crate::data::sample_metrics().into_iter().map(card).collect();
        let html = render_cards(&cards, &Theme::dark(), Locale::En);
        assert_eq!(html.matches("class=\"card\"").count(), 5);
        assert!(html.starts_with("<section class=\"cards\">"));
    }
}
