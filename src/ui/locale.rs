//! Page text in English and Japanese.

use serde::{Deserialize, Serialize};

use crate::data::{MetricKind, Status};

/// Display language of the page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

/// Fixed strings used by the page.
#[derive(Debug)]
pub struct Strings {
    pub lang: &'static str,
    pub title: &'static str,
    pub caption_file: &'static str,
    pub caption_sample: &'static str,
    pub updated: &'static str,
    pub source: &'static str,
    pub utilization: &'static str,
    pub chart_title: &'static str,
    pub chart_caption: &'static str,
    pub chart_omitted: &'static str,
    pub chart_sample: &'static str,
    pub zoom_hint: &'static str,
    pub reset_zoom: &'static str,
    pub water_level: &'static str,
    pub discharge: &'static str,
    pub threshold: &'static str,
    pub elapsed: &'static str,
    pub cards_sample: &'static str,
    pub legend: &'static str,
}

const EN: Strings = Strings {
    lang: "en",
    title: "Pumping Test Operations Dashboard",
    caption_file: "Latest readings from the data file. Status follows the configured thresholds.",
    caption_sample: "Showing sample data. Status is judged by utilization.",
    updated: "Updated",
    source: "Source",
    utilization: "Utilization",
    chart_title: "Water level and pump discharge",
    chart_caption: "Left axis: water level (m). Right axis: pump discharge (m3/h). X axis: elapsed time (min).",
    chart_omitted: "Chart not shown: time series could not be loaded.",
    chart_sample: "Chart shows sample data.",
    zoom_hint: "Drag across the chart to zoom the time axis.",
    reset_zoom: "Reset zoom",
    water_level: "Water level (m)",
    discharge: "Pump discharge (m3/h)",
    threshold: "Low water threshold",
    elapsed: "Elapsed time (min)",
    cards_sample: "Cards show sample data.",
    legend: "Legend",
};

const JA: Strings = Strings {
    lang: "ja",
    title: "揚水試験リアルタイム稼働ダッシュボード",
    caption_file: "データファイルの最新値を表示します。設定したしきい値で状態を判定しています。",
    caption_sample: "サンプルデータを表示します。稼働率で状態を判定しています。",
    updated: "更新",
    source: "データ元",
    utilization: "稼働率",
    chart_title: "水位・揚水量（時系列）",
    chart_caption: "左軸：水位（m）、右軸：揚水量（m3/h）、横軸：経過時間（分）",
    chart_omitted: "時系列データを読み込めなかったため、グラフは表示しません。",
    chart_sample: "グラフはサンプルデータです。",
    zoom_hint: "グラフ上をドラッグすると時間軸を拡大できます。",
    reset_zoom: "拡大解除",
    water_level: "水位（m）",
    discharge: "揚水量（m3/h）",
    threshold: "低水位しきい値",
    elapsed: "経過時間（分）",
    cards_sample: "カードはサンプルデータです。",
    legend: "凡例",
};

impl Locale {
    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::Ja => &JA,
        }
    }

    pub fn metric_name(&self, kind: MetricKind) -> &'static str {
        match self {
            Locale::En => kind.name_en(),
            Locale::Ja => kind.name_ja(),
        }
    }

    pub fn status_label(&self, status: Status) -> &'static str {
        match self {
            Locale::En => status.label(),
            Locale::Ja => status.label_ja(),
        }
    }
}
