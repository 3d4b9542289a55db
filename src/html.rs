use maud::{DOCTYPE, Markup, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

use crate::endpoints;

// Link styles
pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_SELECT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white bg-gray-50 dark:bg-gray-700 border \
    border-gray-300 dark:border-gray-600 focus:ring-blue-600 \
    focus:border-blue-600 focus:dark:border-blue-500 focus:dark:ring-blue-500";
pub const FORM_CHECKBOX_STYLE: &str = "rounded-sm border-gray-300 \
    text-blue-600 shadow-xs focus:border-blue-300 focus:ring-3 \
    focus:ring-blue-200/50";

// Table styles
pub const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";

pub const TABLE_ROW_STYLE: &str = "bg-white border-b dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "flex flex-col items-center px-2 lg:px-6 lg:py-8 \
    mx-auto max-w-screen-xl text-gray-900 dark:text-white";

/// The ECharts build served from the static directory.
pub const ECHARTS_SCRIPT: &str = "/static/echarts.6.0.0.min.js";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Bike Rentals" }
                link href="/static/main.css" rel="stylesheet";

                script src="/static/htmx-2.0.8-min.js" integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900 pb-[calc(5rem+env(safe-area-inset-bottom))] lg:pb-0"
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href=(endpoints::ROOT)
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// A notice shown in place of charts when there is nothing to plot.
pub fn no_data_notice(heading: &str, details: &str) -> Markup {
    html!(
        div
            id="no-data"
            role="status"
            class="flex flex-col items-center w-full px-6 py-8 mb-4 rounded-lg
                bg-yellow-50 text-yellow-800 dark:bg-gray-800 dark:text-yellow-300"
        {
            h3 class="text-lg font-semibold" { (heading) }
            p class="text-sm" { (details) }
        }
    )
}

/// Format a rental count with thousands separators, e.g. "12,345".
pub fn format_count(count: u64) -> String {
    static COUNT_FMT: OnceLock<Formatter> = OnceLock::new();

    if count == 0 {
        // numfmt formats zero without applying the precision
        return "0".to_owned();
    }

    let formatter = COUNT_FMT.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .expect("',' is a valid separator")
            .precision(Precision::Decimals(0))
    });

    formatter.fmt_string(count as f64)
}

/// Format an average with one decimal place, e.g. "461.5".
pub fn format_average(average: f64) -> String {
    format!("{average:.1}")
}
