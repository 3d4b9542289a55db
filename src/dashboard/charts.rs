//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations of the rental data:
//! - **Seasonal Chart**: Average hourly rentals per season, one bar per year
//! - **Monthly Trend Charts**: Casual and registered rentals per month, one line per year
//! - **Hourly Chart**: Average rentals for each hour of the day
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with a container and the JavaScript that initializes it.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    datatype::DataPoint,
    element::{AxisPointer, AxisPointerType, AxisType, JsFunction, Symbol, Tooltip, Trigger},
    series::{Line, bar},
};
use maud::{Markup, PreEscaped, html};
use time::Month;

use crate::{
    dashboard::year_label,
    dataset::Season,
    rentals::{HourlyProfile, MonthlySeries, SeasonalAverages},
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the containers for `charts` followed by the scripts that draw them.
///
/// The scripts run as soon as they are parsed, so the markup works both as
/// part of a full page and when swapped in by HTMX. The ECharts library
/// must already be loaded in the page head.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        div class="grid grid-cols-1 xl:grid-cols-2 gap-4 w-full"
        {
            @for chart in charts {
                div
                    id=(chart.id)
                    class="min-h-[380px] rounded dark:bg-gray-100"
                {}
            }
        }

        @for chart in charts {
            script { (chart_script(chart)) }
        }
    )
}

/// Draws one chart and keeps it in `window.dashboardCharts` by container ID.
///
/// An HTMX swap replaces the container, so the chart previously drawn under
/// the same ID is disposed first. The resize and color scheme listeners are
/// registered once per page and update every chart in the registry.
fn chart_script(chart: &DashboardChart) -> PreEscaped<String> {
    PreEscaped(format!(
        r#"(function() {{
            const charts = window.dashboardCharts ??= new Map();
            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const themeName = () => darkModeMediaQuery.matches ? 'dark' : 'default';

            if (!window.dashboardChartListeners) {{
                window.dashboardChartListeners = true;
                window.addEventListener('resize', () => charts.forEach((chart) => chart.resize()));
                darkModeMediaQuery.addEventListener('change', () => {{
                    charts.forEach((chart) => chart.setTheme(themeName()));
                }});
            }}

            charts.get("{id}")?.dispose();

            const chart = echarts.init(document.getElementById("{id}"));
            chart.setOption({options});
            chart.setTheme(themeName());
            charts.set("{id}", chart);
        }})();"#,
        id = chart.id,
        options = chart.options
    ))
}

pub(super) fn seasonal_chart(averages: &SeasonalAverages, first_year: u16) -> Chart {
    let labels: Vec<&str> = Season::ALL.iter().map(|season| season.name()).collect();

    let mut chart = Chart::new()
        .title(
            Title::new()
                .text("Rentals by Season")
                .subtext("Average rentals per hour"),
        )
        .tooltip(count_tooltip().axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)))
        .legend(Legend::new().left("center").top("1%"))
        .grid(default_grid())
        .x_axis(Axis::new().type_(AxisType::Category).name("Season").data(labels))
        .y_axis(Axis::new().type_(AxisType::Value).name("Rentals"));

    for (year, values) in averages.columns() {
        chart = chart.series(
            bar::Bar::new()
                .name(year_label(first_year, year))
                .data(data_points(values.iter().copied())),
        );
    }

    chart
}

/// A line chart with one line per year over the twelve months.
///
/// Months without data are left as gaps in the line.
pub(super) fn monthly_trend_chart(
    title: &str,
    series: &MonthlySeries,
    symbol: Symbol,
    first_year: u16,
) -> Chart {
    let labels: Vec<&str> = series.months().into_iter().map(short_month_name).collect();

    let mut chart = Chart::new()
        .title(Title::new().text(title).subtext("Total rentals per month"))
        .tooltip(count_tooltip())
        .legend(Legend::new().left("center").top("1%"))
        .grid(default_grid())
        .x_axis(Axis::new().type_(AxisType::Category).name("Month").data(labels))
        .y_axis(Axis::new().type_(AxisType::Value).name("Rentals"));

    for (year, values) in series.columns() {
        let data = data_points(values.iter().map(|value| value.map(|count| count as f64)));

        chart = chart.series(
            Line::new()
                .name(year_label(first_year, year))
                .symbol(symbol.clone())
                .data(data),
        );
    }

    chart
}

pub(super) fn hourly_chart(profile: &HourlyProfile) -> Chart {
    let labels: Vec<String> = (0..profile.averages().len())
        .map(|hour| format!("{hour:02}:00"))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Average Rentals per Hour")
                .subtext("All days in both years"),
        )
        .tooltip(count_tooltip())
        .grid(default_grid())
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Hour of day")
                .data(labels),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("Average rentals"))
        .series(
            Line::new()
                .name("Average rentals")
                .symbol(Symbol::Circle)
                .data(data_points(profile.averages().iter().copied())),
        )
}

/// The three-letter abbreviation used for axis labels, e.g. "Jan".
pub(super) fn short_month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// ECharts leaves a gap for the "-" placeholder instead of drawing a zero.
const MISSING_VALUE: &str = "-";

fn data_points(values: impl Iterator<Item = Option<f64>>) -> Vec<DataPoint> {
    values
        .map(|value| match value {
            Some(value) => DataPoint::from(value),
            None => DataPoint::from(MISSING_VALUE),
        })
        .collect()
}

fn default_grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .top(90)
        .contain_label(true)
}

#[inline]
fn count_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "value",
        "return (typeof value !== 'number' || isNaN(value))
            ? \"-\"
            : Math.round(value).toLocaleString('en-US');",
    )
}

/// Creates a tooltip configuration for rental counts, missing values show as "-".
fn count_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(count_formatter())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use charming::{Chart, element::Symbol};
    use serde_json::Value;
    use time::Month;

    use crate::{
        dashboard::charts::{
            DashboardChart, chart_script, hourly_chart, monthly_trend_chart, seasonal_chart,
            short_month_name,
        },
        dataset::Season,
        rentals::{
            CANONICAL_MONTHS, MonthFilter, aggregate_monthly_rentals, average_rentals_by_hour,
            average_rentals_by_season,
        },
        test_utils::{daily, hourly},
    };

    fn chart_options(chart: &Chart) -> Value {
        serde_json::to_value(chart).unwrap()
    }

    fn series_names(options: &Value) -> Vec<&str> {
        options["series"]
            .as_array()
            .unwrap()
            .iter()
            .map(|series| series["name"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn short_month_names_are_three_letters() {
        let names: Vec<_> = CANONICAL_MONTHS.into_iter().map(short_month_name).collect();

        assert_eq!(
            names,
            vec![
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"
            ]
        );
    }

    #[test]
    fn monthly_trend_chart_has_a_line_per_year_with_gaps() {
        let records = vec![
            daily(0, Month::March, 5, 6),
            daily(1, Month::April, 7, 8),
        ];
        let rentals =
            aggregate_monthly_rentals(&records, &BTreeSet::from([0, 1]), &MonthFilter::all());

        let chart = monthly_trend_chart("Casual Rentals", &rentals.casual, Symbol::Circle, 2011);
        let options = chart_options(&chart);

        assert_eq!(series_names(&options), vec!["2011", "2012"]);
        assert_eq!(options["xAxis"]["data"][0], "Jan");

        let data = options["series"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 12);
        assert_eq!(data[0], "-");
        assert_eq!(data[2], 5.0);
        assert_eq!(data[3], "-");
    }

    #[test]
    fn rendered_options_keep_the_tooltip_formatter_as_javascript() {
        let rentals = aggregate_monthly_rentals(
            &[daily(0, Month::March, 5, 6)],
            &BTreeSet::from([0]),
            &MonthFilter::all(),
        );

        let options =
            monthly_trend_chart("Casual Rentals", &rentals.casual, Symbol::Circle, 2011)
                .to_string();

        assert!(options.contains("Math.round(value)"));
        assert!(serde_json::from_str::<Value>(&options).is_err());
    }

    #[test]
    fn seasonal_chart_has_a_bar_series_per_year_in_season_order() {
        let records = vec![
            hourly(Season::Spring, 0, 8, 10),
            hourly(Season::Fall, 0, 8, 30),
            hourly(Season::Fall, 0, 9, 50),
            hourly(Season::Winter, 1, 8, 20),
        ];

        let chart = seasonal_chart(&average_rentals_by_season(&records), 2011);
        let options = chart_options(&chart);

        assert_eq!(series_names(&options), vec!["2011", "2012"]);
        assert_eq!(
            options["xAxis"]["data"],
            serde_json::json!(["Spring", "Summer", "Fall", "Winter"])
        );
        assert_eq!(
            options["series"][0]["data"],
            serde_json::json!([10.0, "-", 40.0, "-"])
        );
        assert_eq!(
            options["series"][1]["data"],
            serde_json::json!(["-", "-", "-", 20.0])
        );
        assert_eq!(options["series"][0]["type"], "bar");
    }

    #[test]
    fn hourly_chart_has_a_point_per_hour_with_gaps() {
        let records = vec![
            hourly(Season::Summer, 0, 0, 4),
            hourly(Season::Summer, 1, 17, 300),
            hourly(Season::Fall, 0, 17, 500),
        ];

        let chart = hourly_chart(&average_rentals_by_hour(&records));
        let options = chart_options(&chart);

        let labels = options["xAxis"]["data"].as_array().unwrap();
        assert_eq!(labels.len(), 24);
        assert_eq!(labels[0], "00:00");
        assert_eq!(labels[17], "17:00");

        let data = options["series"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), 24);
        assert_eq!(data[0], 4.0);
        assert_eq!(data[1], "-");
        assert_eq!(data[17], 400.0);
    }

    #[test]
    fn chart_script_disposes_the_previous_chart_and_registers_listeners_once() {
        let script = chart_script(&DashboardChart {
            id: "casual-chart",
            options: "{}".to_owned(),
        })
        .into_string();

        let dispose = script
            .find(r#"charts.get("casual-chart")?.dispose()"#)
            .expect("previous chart should be disposed");
        let init = script.find("echarts.init").unwrap();
        assert!(dispose < init);

        let guard = script.find("if (!window.dashboardChartListeners)").unwrap();
        let resize = script.find("addEventListener('resize'").unwrap();
        assert!(guard < resize);
        assert_eq!(script.matches("addEventListener").count(), 2);
        assert!(script.contains(r#"charts.set("casual-chart", chart)"#));
    }
}
