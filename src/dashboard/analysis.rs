//! The rental analysis page.
//!
//! Shows the average rentals per season, the filter form for the monthly
//! trends, the monthly casual and registered trend charts with their totals
//! table, and the conclusions drawn from the charts.

use std::collections::BTreeSet;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use axum_htmx::HxRequest;
use charming::element::Symbol;
use maud::{Markup, html};
use time::Month;

use crate::{
    Error,
    dashboard::{
        DashboardState,
        charts::{
            DashboardChart, charts_view, monthly_trend_chart, seasonal_chart, short_month_name,
        },
        filters::{MonthMode, MonthlyFilterQuery, Selection},
        tables::monthly_totals_table,
        year_label,
    },
    endpoints,
    html::{
        ECHARTS_SCRIPT, FORM_CHECKBOX_STYLE, FORM_LABEL_STYLE, FORM_SELECT_STYLE, HeadElement,
        PAGE_CONTAINER_STYLE, base, no_data_notice,
    },
    navigation::NavBar,
    rentals::{
        CANONICAL_MONTHS, MonthFilter, MonthlyRentals, aggregate_monthly_rentals,
        average_rentals_by_season,
    },
};

/// The ID of the element that HTMX swaps when the filters change.
const MONTHLY_TREND_ID: &str = "monthly-trend";

/// Display the rental analysis page.
///
/// HTMX requests only get the monthly trend section so that changing the
/// filters does not redraw the rest of the page.
///
/// # Errors
/// Returns [Error::InvalidMonth] if the query has a month outside 1 to 12.
pub async fn get_analysis_page(
    State(state): State<DashboardState>,
    HxRequest(is_htmx_request): HxRequest,
    Query(query): Query<MonthlyFilterQuery>,
) -> Result<Response, Error> {
    let available_years = state.dataset.daily_years();
    let selection = query.resolve(&available_years)?;

    let rentals =
        aggregate_monthly_rentals(&state.dataset.daily, &selection.years, &selection.months);
    tracing::debug!(
        "Aggregated {} daily records for years {:?} and months {:?}",
        rentals.row_count,
        selection.years,
        selection.months.allowed_months()
    );

    let monthly_trend = monthly_trend_view(&rentals, state.first_year);

    if is_htmx_request {
        return Ok(monthly_trend.into_response());
    }

    let seasonal = DashboardChart {
        id: "seasonal-chart",
        options: seasonal_chart(
            &average_rentals_by_season(&state.dataset.hourly),
            state.first_year,
        )
        .to_string(),
    };

    let content = html!(
        (NavBar::new(endpoints::ANALYSIS_VIEW).into_html())

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-6 self-start" { "Bike Rental Dashboard" }

            section id="seasonal" class="w-full mb-8"
            {
                h2 class="text-2xl font-semibold mb-4" { "Effect of Season on Rentals" }
                (charts_view(&[seasonal]))
            }

            section id="monthly" class="w-full mb-8"
            {
                h2 class="text-2xl font-semibold mb-4" { "Monthly Rental Trends" }
                (filter_form(&selection, &available_years, state.first_year))
                (monthly_trend)
            }

            (conclusions_view())
        }
    );

    let head_elements = [HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned())];

    Ok(base("Rental Analysis", &head_elements, &content).into_response())
}

/// The monthly trend charts and totals, or a notice if the selection matched nothing.
fn monthly_trend_view(rentals: &MonthlyRentals, first_year: u16) -> Markup {
    html!(
        div id=(MONTHLY_TREND_ID) class="w-full"
        {
            @if rentals.is_empty() {
                (no_data_notice(
                    "No data for this selection",
                    "Select at least one year and one month to see the monthly trends.",
                ))
            } @else {
                (charts_view(&[
                    DashboardChart {
                        id: "casual-chart",
                        options: monthly_trend_chart(
                            "Casual Rentals per Month",
                            &rentals.casual,
                            Symbol::Circle,
                            first_year,
                        )
                        .to_string(),
                    },
                    DashboardChart {
                        id: "registered-chart",
                        options: monthly_trend_chart(
                            "Registered Rentals per Month",
                            &rentals.registered,
                            Symbol::Rect,
                            first_year,
                        )
                        .to_string(),
                    },
                ]))

                div class="mt-4" { (monthly_totals_table(rentals, first_year)) }
            }
        }
    )
}

fn filter_form(selection: &Selection, available_years: &BTreeSet<u16>, first_year: u16) -> Markup {
    let (range_start, range_end) = match selection.months {
        MonthFilter::Range { start, end } => (start, end),
        MonthFilter::Months(_) => (Month::January, Month::December),
    };
    let target = format!("#{MONTHLY_TREND_ID}");

    html!(
        form
            id="monthly-filters"
            method="get"
            action=(endpoints::ANALYSIS_VIEW)
            hx-get=(endpoints::ANALYSIS_VIEW)
            hx-target=(target)
            hx-swap="outerHTML"
            hx-trigger="change"
            hx-push-url="true"
            class="bg-gray-50 dark:bg-gray-800 p-4 rounded-lg mb-4 space-y-4"
        {
            input type="hidden" name="filtered" value="true";

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Years" }

                div class="flex flex-wrap gap-3"
                {
                    @for &year in available_years {
                        label class="flex items-center space-x-2"
                        {
                            input
                                type="checkbox"
                                name="years"
                                value=(year)
                                checked[selection.years.contains(&year)]
                                class=(FORM_CHECKBOX_STYLE);

                            span { (year_label(first_year, year)) }
                        }
                    }
                }
            }

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Months" }

                div class="flex gap-4 mb-2"
                {
                    label class="flex items-center space-x-2"
                    {
                        input
                            type="radio"
                            name="month_mode"
                            value="list"
                            checked[selection.mode == MonthMode::List];
                        span { "Pick months" }
                    }

                    label class="flex items-center space-x-2"
                    {
                        input
                            type="radio"
                            name="month_mode"
                            value="range"
                            checked[selection.mode == MonthMode::Range];
                        span { "Month range" }
                    }
                }

                div class="grid grid-cols-3 md:grid-cols-6 lg:grid-cols-12 gap-3 mb-2"
                {
                    @for month in CANONICAL_MONTHS {
                        label class="flex items-center space-x-2"
                        {
                            input
                                type="checkbox"
                                name="months"
                                value=(u8::from(month))
                                checked[selection.mode == MonthMode::List
                                    && selection.months.contains(month)]
                                class=(FORM_CHECKBOX_STYLE);

                            span { (short_month_name(month)) }
                        }
                    }
                }

                div class="grid grid-cols-2 gap-4"
                {
                    (month_select("start_month", "From", range_start))
                    (month_select("end_month", "To", range_end))
                }
            }

            button
                type="submit"
                class="px-4 py-2 rounded text-sm text-white bg-blue-600 hover:bg-blue-800"
            {
                "Apply"
            }
        }
    )
}

fn month_select(name: &str, label: &str, selected: Month) -> Markup {
    html!(
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            select id=(name) name=(name) class=(FORM_SELECT_STYLE)
            {
                @for month in CANONICAL_MONTHS {
                    option value=(u8::from(month)) selected[month == selected]
                    {
                        (month)
                    }
                }
            }
        }
    )
}

fn conclusions_view() -> Markup {
    html!(
        section id="conclusions" class="w-full mb-8"
        {
            h2 class="text-2xl font-semibold mb-4" { "Conclusions" }

            ol class="list-decimal list-inside space-y-4"
            {
                li
                {
                    span class="font-semibold" { "Effect of season on rentals" }
                    ul class="list-disc list-inside ml-6"
                    {
                        li { "Fall is the season with the most bike rentals in both years." }
                        li
                        {
                            "The weather in fall is comfortable for cycling and the roads
                            are safer because they are not slippery."
                        }
                    }
                }

                li
                {
                    span class="font-semibold" { "Monthly rental trends" }
                    ul class="list-disc list-inside ml-6"
                    {
                        li
                        {
                            "Both casual and registered rentals rose sharply in August 2012."
                        }
                        li
                        {
                            "The rise coincides with the London 2012 Olympics, which
                            increased public interest in cycling."
                        }
                    }
                }
            }
        }
    )
}
