//! Static chart configuration handed to the external renderer.
//!
//! The renderer is a black box on the far side of a JSON bridge, so callback
//! formatters can't travel with the option. Instead the payload carries
//! [`Unit`] tags per y-axis and per series label; the bridge script installs
//! the matching callbacks before mounting the option.

use serde::Serialize;

use crate::profiling::aggregate::Unit;
use crate::profiling::series::{Series, SERIES_ORDER};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub option: ChartOption,
    pub y_axis_units: [Unit; 2],
    pub series_units: Vec<SeriesUnit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesUnit {
    pub label: &'static str,
    pub unit: Unit,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub grid: [GridSpec; 2],
    pub legend: LegendSpec,
    pub axis_pointer: AxisPointerSpec,
    pub x_axis: [XAxisSpec; 2],
    pub y_axis: [YAxisSpec; 2],
    pub tooltip: TooltipSpec,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridSpec {
    pub top: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub bottom: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendSpec {
    pub right: u32,
    pub top: u32,
    pub data: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisPointerSpec {
    pub link: Vec<AxisPointerLink>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisPointerLink {
    pub x_axis_index: [u8; 2],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxisSpec {
    pub grid_index: u8,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisSpec {
    pub grid_index: u8,
    pub scale: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TooltipSpec {
    pub trigger: &'static str,
}

/// Assemble the full payload: fixed two-grid layout with a linked crosshair,
/// time axes, scaled value axes, and the built series.
pub fn profile_chart_payload(series: Vec<Series>) -> ChartPayload {
    let legend_labels: Vec<&'static str> = SERIES_ORDER
        .iter()
        .filter_map(|aggregate| aggregate.label())
        .collect();

    ChartPayload {
        option: ChartOption {
            grid: [
                GridSpec {
                    top: "32px",
                    left: "24px",
                    right: "52%",
                    bottom: "16px",
                },
                GridSpec {
                    top: "32px",
                    left: "52%",
                    right: "24px",
                    bottom: "16px",
                },
            ],
            legend: LegendSpec {
                right: 16,
                top: 12,
                data: legend_labels,
            },
            axis_pointer: AxisPointerSpec {
                link: vec![AxisPointerLink {
                    x_axis_index: [0, 1],
                }],
            },
            x_axis: [
                XAxisSpec {
                    grid_index: 0,
                    kind: "time",
                },
                XAxisSpec {
                    grid_index: 1,
                    kind: "time",
                },
            ],
            y_axis: [
                YAxisSpec {
                    grid_index: 0,
                    scale: true,
                },
                YAxisSpec {
                    grid_index: 1,
                    scale: true,
                },
            ],
            tooltip: TooltipSpec { trigger: "axis" },
            series,
        },
        y_axis_units: [Unit::Integer, Unit::Duration],
        series_units: SERIES_ORDER
            .iter()
            .filter_map(|aggregate| {
                aggregate.label().map(|label| SeriesUnit {
                    label,
                    unit: aggregate.unit(),
                })
            })
            .collect(),
    }
}

impl ChartPayload {
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|err| format!("couldn't encode chart payload: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_layout_matches_the_fixed_configuration() {
        let payload = profile_chart_payload(Vec::new());
        let json = serde_json::to_value(&payload).unwrap();
        let option = &json["option"];

        assert_eq!(option["grid"].as_array().unwrap().len(), 2);
        assert_eq!(option["grid"][0]["right"], "52%");
        assert_eq!(option["grid"][1]["left"], "52%");

        assert_eq!(
            option["legend"]["data"],
            serde_json::json!(["count()", "p99()", "p75()"])
        );

        assert_eq!(
            option["axisPointer"]["link"],
            serde_json::json!([{ "xAxisIndex": [0, 1] }])
        );

        assert_eq!(option["xAxis"][0]["type"], "time");
        assert_eq!(option["xAxis"][1]["type"], "time");
        assert_eq!(option["xAxis"][0]["gridIndex"], 0);
        assert_eq!(option["xAxis"][1]["gridIndex"], 1);

        assert_eq!(option["yAxis"][0]["scale"], true);
        assert_eq!(option["yAxis"][1]["scale"], true);

        assert_eq!(json["yAxisUnits"], serde_json::json!(["integer", "duration"]));
    }

    #[test]
    fn series_units_cover_every_legend_label() {
        let payload = profile_chart_payload(Vec::new());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json["seriesUnits"],
            serde_json::json!([
                { "label": "count()", "unit": "integer" },
                { "label": "p99()", "unit": "duration" },
                { "label": "p75()", "unit": "duration" },
            ])
        );
    }
}
