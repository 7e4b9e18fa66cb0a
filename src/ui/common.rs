//! Common page sections: header, error banner, and legend.

use super::{escape_html, Locale, Theme};
use crate::app::{Dashboard, DataOrigin};
use crate::data::Thresholds;

/// Timestamp format for the "updated" line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the title block: title, caption, update time and data source.
pub fn render_header(dashboard: &Dashboard, title: &str, theme: &Theme, locale: Locale) -> String {
    let strings = locale.strings();
    let caption = match dashboard.card_origin {
        DataOrigin::File => strings.caption_file,
        DataOrigin::Sample => strings.caption_sample,
    };

    format!(
        r#"<header>
  <h1 style="color:{text};">{title}</h1>
  <p class="caption" style="color:{muted};">{caption}</p>
  <p class="meta" style="color:{muted};">{updated}: {time} | {source_label}: {source}</p>
</header>
"#,
        text = theme.text,
        muted = theme.muted,
        title = escape_html(title),
        caption = escape_html(caption),
        updated = escape_html(strings.updated),
        time = dashboard.generated_at.format(TIMESTAMP_FORMAT),
        source_label = escape_html(strings.source),
        source = escape_html(&dashboard.source),
    )
}

/// Render load errors and fallback notices. Empty when nothing went wrong.
pub fn render_errors(dashboard: &Dashboard, theme: &Theme, locale: Locale) -> String {
    if dashboard.errors.is_empty() {
        return String::new();
    }
    let strings = locale.strings();

    let mut lines: Vec<&str> = dashboard.errors.iter().map(String::as_str).collect();
    if dashboard.card_origin == DataOrigin::Sample {
        lines.push(strings.cards_sample);
    }
    match &dashboard.chart {
        None => lines.push(strings.chart_omitted),
        Some(chart) if chart.origin == DataOrigin::Sample => lines.push(strings.chart_sample),
        Some(_) => {}
    }

    let mut html = format!(
        r#"<div class="errors" role="alert" style="background:{};color:{};border:1px solid {};">
"#,
        theme.error_background, theme.error_text, theme.error_text
    );
    for line in lines {
        html.push_str(&format!("  <p>{}</p>\n", escape_html(line)));
    }
    html.push_str("</div>\n");
    html
}

/// The half-open caution interval `[caution, running)`.
///
/// Whole-number bands read as an inclusive range ("50-79%"); anything else is
/// spelled out so the upper bound is not misstated.
fn caution_band(t: &Thresholds, locale: Locale) -> String {
    let whole = |v: f64| v.fract() == 0.0 && v.is_finite();
    if whole(t.utilization_caution) && whole(t.utilization_running) {
        return format!("{}-{}%", t.utilization_caution, t.utilization_running - 1.0);
    }
    match locale {
        Locale::En => format!(
            "{}% to below {}%",
            t.utilization_caution, t.utilization_running
        ),
        Locale::Ja => format!(
            "{}%以上{}%未満",
            t.utilization_caution, t.utilization_running
        ),
    }
}

/// Render the static legend describing status colors.
pub fn render_legend(thresholds: &Thresholds, theme: &Theme, locale: Locale) -> String {
    let t = thresholds;
    let (bands, rules) = match locale {
        Locale::En => (
            format!(
                "running ({run}% and above: green) / caution ({band}: amber) / stopped (below {cau}%: red)",
                run = t.utilization_running,
                cau = t.utilization_caution,
                band = caution_band(t, locale),
            ),
            format!(
                "Per-metric: water level above {} m, pressure above {} MPa, pump current above {} A: caution / discharge 0: stopped / valve 0%: closed",
                t.water_level_caution, t.pressure_caution, t.pump_current_caution,
            ),
        ),
        Locale::Ja => (
            format!(
                "稼働中（{run}%以上：緑） / 注意（{band}：黄） / 停止（{cau}%未満：赤）",
                run = t.utilization_running,
                cau = t.utilization_caution,
                band = caution_band(t, locale),
            ),
            format!(
                "個別判定：水位 {} m 超・揚水圧力 {} MPa 超・ポンプ電流値 {} A 超は注意 / 揚水量 0 は停止 / バルブ開閉率 0% は閉",
                t.water_level_caution, t.pressure_caution, t.pump_current_caution,
            ),
        ),
    };

    format!(
        r#"<footer class="legend" style="color:{muted};border-top:1px solid {border};">
  <p><strong>{legend}</strong>: {bands}</p>
  <p>{rules}</p>
</footer>
"#,
        muted = theme.muted,
        border = theme.border,
        legend = escape_html(locale.strings().legend),
        bands = escape_html(&bands),
        rules = escape_html(&rules),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ChartData, Dashboard};
    use chrono::NaiveDate;

    fn dashboard(errors: Vec<String>, chart: Option<ChartData>) -> Dashboard {
        Dashboard {
            generated_at: NaiveDate::from_ymd_opt(2026, 10, 19)
                .unwrap()
                .and_hms_opt(14, 5, 9)
                .unwrap(),
            source: "file: <pumping>.xlsx".to_string(),
            card_origin: DataOrigin::Sample,
            cards: Vec::new(),
            chart,
            errors,
        }
    }

    #[test]
    fn test_header_has_timestamp_and_escaped_source() {
        let html = render_header(&dashboard(vec![], None), "Title", &Theme::light(), Locale::En);
        assert!(html.contains("Updated: 2026-10-19 14:05:09"));
        assert!(html.contains("file: &lt;pumping&gt;.xlsx"));
        assert!(html.contains("Showing sample data"));
    }

    #[test]
    fn test_no_errors_no_banner() {
        assert!(render_errors(&dashboard(vec![], None), &Theme::light(), Locale::En).is_empty());
    }

    #[test]
    fn test_error_banner_names_fallbacks() {
        let d = dashboard(vec!["Data file not found: x.xlsx".to_string()], None);
        let html = render_errors(&d, &Theme::light(), Locale::En);
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains("Data file not found: x.xlsx"));
        assert!(html.contains("Cards show sample data."));
        assert!(html.contains("Chart not shown"));
    }

    #[test]
    fn test_legend_bands() {
        let en = render_legend(&Thresholds::default(), &Theme::light(), Locale::En);
        assert!(en.contains("running (80% and above: green)"));
        assert!(en.contains("caution (50-79%: amber)"));
        assert!(en.contains("stopped (below 50%: red)"));

        let ja = render_legend(&Thresholds::default(), &Theme::light(), Locale::Ja);
        assert!(ja.contains("稼働中（80%以上：緑） / 注意（50-79%：黄） / 停止（50%未満：赤）"));
    }

    #[test]
    fn test_legend_fractional_band_keeps_upper_bound() {
        let thresholds = Thresholds {
            utilization_running: 80.5,
            ..Thresholds::default()
        };
        let en = render_legend(&thresholds, &Theme::light(), Locale::En);
        assert!(en.contains("caution (50% to below 80.5%: amber)"));
        assert!(!en.contains("79.5"));

        let ja = render_legend(&thresholds, &Theme::light(), Locale::Ja);
        assert!(ja.contains("注意（50%以上80.5%未満：黄）"));
    }
}
