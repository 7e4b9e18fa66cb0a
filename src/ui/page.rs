//! Full page assembly.

use super::cards::render_cards;
use super::chart::chart_config;
use super::common::{render_errors, render_header, render_legend};
use super::{escape_html, Theme};
use crate::app::Dashboard;
use crate::config::DashboardConfig;

const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
const ZOOM_PLUGIN_JS: &str =
    "https://cdn.jsdelivr.net/npm/chartjs-plugin-zoom@2.0.1/dist/chartjs-plugin-zoom.min.js";

/// Render the dashboard as a standalone HTML document.
///
/// Sections, top to bottom: header, error banner (if any), the five metric
/// cards, the chart (unless suppressed), and the legend.
pub fn render_page(dashboard: &Dashboard, config: &DashboardConfig) -> String {
    let render = &config.render;
    let locale = render.locale;
    let strings = locale.strings();
    let theme = Theme::from_name(render.theme);
    let title = render.title.as_deref().unwrap_or(strings.title);

    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{css}
</style>
</head>
<body style="background:{background};">
<main>
"#,
        lang = strings.lang,
        title = escape_html(title),
        css = stylesheet(&theme),
        background = theme.background,
    ));

    html.push_str(&render_header(dashboard, title, &theme, locale));
    html.push_str(&render_errors(dashboard, &theme, locale));
    html.push_str(&render_cards(&dashboard.cards, &theme, locale));
    html.push_str("<hr>\n");

    if let Some(chart) = &dashboard.chart {
        let options = chart_config(
            chart,
            &render.water_axis,
            config.thresholds.water_level_caution,
            &theme,
            strings,
        );
        html.push_str(&format!(
            r#"<section class="chart">
  <h2 style="color:{text};">{heading}</h2>
  <p class="caption" style="color:{muted};">{caption}</p>
"#,
            text = theme.text,
            muted = theme.muted,
            heading = escape_html(strings.chart_title),
            caption = escape_html(strings.chart_caption),
        ));
        if chart.zoom {
            html.push_str(&format!(
                "  <p class=\"caption\" style=\"color:{}\">{} <button type=\"button\" id=\"reset-zoom\">{}</button></p>\n",
                theme.muted,
                escape_html(strings.zoom_hint),
                escape_html(strings.reset_zoom),
            ));
        }
        html.push_str(&format!(
            r#"  <div class="chart-panel" style="background:{panel};border:1px solid {border};">
    <canvas id="levelChart"></canvas>
  </div>
</section>
<script src="{chart_js}"></script>
"#,
            panel = theme.panel,
            border = theme.border,
            chart_js = CHART_JS,
        ));
        if chart.zoom {
            html.push_str(&format!("<script src=\"{}\"></script>\n", ZOOM_PLUGIN_JS));
        }
        html.push_str(&format!(
            r#"<script>
const levelChart = new Chart(document.getElementById('levelChart'), {options});
const resetZoom = document.getElementById('reset-zoom');
if (resetZoom) {{ resetZoom.addEventListener('click', () => levelChart.resetZoom()); }}
</script>
"#,
            options = script_json(&options),
        ));
    }

    html.push_str(&render_legend(&config.thresholds, &theme, locale));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Serialize JSON for inline `<script>` use.
fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn stylesheet(theme: &Theme) -> String {
    format!(
        r#"body {{ margin: 0; font-family: system-ui, -apple-system, "Segoe UI", "Hiragino Sans", "Noto Sans JP", sans-serif; }}
main {{ max-width: 1280px; margin: 0 auto; padding: 24px; }}
h1 {{ margin: 0 0 4px; font-size: 28px; }}
h2 {{ margin: 16px 0 4px; font-size: 20px; }}
.caption, .meta {{ margin: 4px 0; font-size: 14px; }}
.errors {{ margin: 16px 0; padding: 8px 16px; border-radius: 8px; }}
.errors p {{ margin: 4px 0; }}
.cards {{ display: grid; grid-template-columns: repeat(5, minmax(0, 1fr)); gap: 16px; margin: 16px 0; }}
.card {{ border-radius: 8px; padding: 16px; min-height: 96px; }}
.card-name {{ font-size: 16px; font-weight: 700; }}
.card-body {{ margin-top: 8px; display: flex; align-items: center; justify-content: space-between; }}
.card-value {{ font-size: 24px; font-weight: 700; }}
.card-status {{ text-align: right; }}
.card-basis {{ font-size: 12px; min-height: 14px; }}
.pill {{ margin-top: 6px; padding: 6px 12px; border-radius: 14px; color: #fff; font-weight: 700; white-space: nowrap; }}
hr {{ border: none; border-top: 1px solid {border}; margin: 24px 0; }}
.chart-panel {{ position: relative; height: 420px; padding: 12px; border-radius: 8px; }}
.legend {{ margin-top: 24px; padding-top: 8px; font-size: 14px; }}"#,
        border = theme.border,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Dashboard, FallbackPolicy};
    use crate::source::{MemorySource, SensorTable};
    use crate::ui::Locale;
    use chrono::NaiveDate;

    fn now() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_sample_page() {
        let config = DashboardConfig::default();
        let dashboard = Dashboard::build(None, &config, now());
        let html = render_page(&dashboard, &config);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("Pumping Test Operations Dashboard"));
        assert_eq!(html.matches("class=\"card\"").count(), 5);
        assert!(html.contains("<canvas id=\"levelChart\">"));
        assert!(html.contains("\"borderDash\":[6,4]"));
        assert!(!html.contains("chartjs-plugin-zoom"));
        assert!(!html.contains("role=\"alert\""));
        assert!(html.contains("Legend"));
    }

    #[test]
    fn test_file_page_offers_zoom() {
        let table = SensorTable::from_text(
            ["水位", "揚水量", "バルブ開閉率", "揚水圧力", "ポンプ電流値"],
            vec![vec!["3.1", "120", "50", "0.8", "9"], vec!["3.2", "121", "50", "0.8", "9"]],
        );
        let mut source = MemorySource::new(table, "log");
        let config = DashboardConfig::default();
        let dashboard = Dashboard::build(Some(&mut source), &config, now());
        let html = render_page(&dashboard, &config);

        assert!(html.contains("chartjs-plugin-zoom"));
        assert!(html.contains("id=\"reset-zoom\""));
        assert!(html.contains("\"drag\":{\"enabled\":true}"));
    }

    #[test]
    fn test_cards_only_page_has_no_chart() {
        let mut config = DashboardConfig::default();
        config.data.fallback = FallbackPolicy::CardsOnly;
        config.render.locale = Locale::Ja;
        let mut source = MemorySource::empty("none");
        let dashboard = Dashboard::build(Some(&mut source), &config, now());
        let html = render_page(&dashboard, &config);

        assert!(html.contains("<html lang=\"ja\">"));
        assert!(html.contains("揚水試験リアルタイム稼働ダッシュボード"));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Spreadsheet has no data rows"));
        assert!(!html.contains("<canvas"));
        assert!(!html.contains("new Chart("));
        assert_eq!(html.matches("class=\"card\"").count(), 5);
    }

    #[test]
    fn test_custom_title_is_escaped() {
        let mut config = DashboardConfig::default();
        config.render.title = Some("Well #3 </title><script>".to_string());
        let dashboard = Dashboard::build(None, &config, now());
        let html = render_page(&dashboard, &config);
        assert!(html.contains("Well #3 &lt;/title&gt;&lt;script&gt;"));
        assert!(!html.contains("</title><script>"));
    }

    #[test]
    fn test_script_json_cannot_close_tag() {
        let value = serde_json::json!({ "label": "</script><b>" });
        assert_eq!(script_json(&value), r#"{"label":"<\/script><b>"}"#);
    }
}
