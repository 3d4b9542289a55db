//! The "Get to Know" page with the average rentals for each hour of the day.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    dashboard::{
        DashboardState,
        charts::{DashboardChart, charts_view, hourly_chart},
    },
    endpoints,
    html::{
        ECHARTS_SCRIPT, HeadElement, LINK_STYLE, PAGE_CONTAINER_STYLE, base, format_average,
        no_data_notice,
    },
    navigation::NavBar,
    rentals::{HourlyProfile, average_rentals_by_hour},
};

/// Display the average rentals per hour of the day and the busiest hour.
pub async fn get_hourly_page(State(state): State<DashboardState>) -> Response {
    let profile = average_rentals_by_hour(&state.dataset.hourly);

    let content = html!(
        (NavBar::new(endpoints::HOURLY_VIEW).into_html())

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold mb-6 self-start" { "Busiest Time for Rentals" }

            @if profile.is_empty() {
                (no_data_notice(
                    "No hourly data",
                    "The hourly dataset has no records to plot.",
                ))
            } @else {
                section class="w-full mb-8"
                {
                    (charts_view(&[DashboardChart {
                        id: "hourly-chart",
                        options: hourly_chart(&profile).to_string(),
                    }]))
                }

                (peak_hour_view(&profile))
            }

            (did_you_know_view())
        }
    );

    let head_elements = [HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned())];

    base("Get to Know", &head_elements, &content).into_response()
}

fn peak_hour_view(profile: &HourlyProfile) -> Markup {
    let Some(hour) = profile.peak_hour() else {
        return html! {};
    };
    let average = profile.average(hour).unwrap_or_default();

    html!(
        p id="peak-hour" class="w-full mb-8 text-lg"
        {
            "The busiest hour is "
            span class="font-semibold" { (format!("{hour:02}:00")) }
            " with an average of "
            span class="font-semibold" { (format_average(average)) }
            " rentals."
        }
    )
}

fn did_you_know_view() -> Markup {
    html!(
        section id="did-you-know" class="w-full mb-8"
        {
            h2 class="text-2xl font-semibold mb-4" { "Did You Know?" }

            p class="mb-2"
            {
                "Judging by the chart above, most people ride between 16:00 and
                19:00. An afternoon ride has several benefits:"
            }

            ul class="list-disc list-inside space-y-2"
            {
                li
                {
                    "It reduces stress and lifts your mood, since physical
                    activity releases endorphins."
                }
                li
                {
                    "It improves fitness. Riding regularly burns calories, helps
                    keep a healthy weight and strengthens the legs."
                }
                li
                {
                    "It improves sleep. Exercise in the afternoon helps regulate
                    the circadian rhythm so it is easier to sleep well at night."
                }
            }

            p class="mt-4"
            {
                "See how rentals change over the year on the "
                a href=(endpoints::ANALYSIS_VIEW) class=(LINK_STYLE) { "rental analysis" }
                " page."
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::State;
    use scraper::Selector;

    use crate::{
        Dataset,
        dashboard::{DashboardState, hourly::get_hourly_page},
        test_utils::{
            assert_element_exists, assert_element_missing, assert_valid_html,
            parse_html_document, sample_dataset,
        },
    };

    #[tokio::test]
    async fn hourly_page_shows_chart_and_peak_hour() {
        let state = DashboardState {
            dataset: Arc::new(sample_dataset()),
            first_year: 2011,
        };

        let response = get_hourly_page(State(state)).await;

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_element_exists(&html, "#hourly-chart");
        assert_element_exists(&html, "#did-you-know");

        let selector = Selector::parse("#peak-hour").unwrap();
        let text: String = html.select(&selector).next().unwrap().text().collect();
        assert_eq!(
            text.split_whitespace().collect::<Vec<_>>().join(" "),
            "The busiest hour is 17:00 with an average of 500.0 rentals."
        );
    }

    #[tokio::test]
    async fn hourly_page_without_data_shows_notice() {
        let state = DashboardState {
            dataset: Arc::new(Dataset::default()),
            first_year: 2011,
        };

        let response = get_hourly_page(State(state)).await;

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_element_exists(&html, "#no-data");
        assert_element_missing(&html, "#hourly-chart");
        assert_element_missing(&html, "#peak-hour");
    }
}
