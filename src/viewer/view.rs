//! HTML rendering for the transaction viewer.

use maud::{Markup, html};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_SELECT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
        loading_spinner,
    },
    model::{Employee, EmployeeId, Transaction},
};

use super::models::TransactionTableRow;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

/// The full viewer page: heading, filter control and transaction panel.
pub(crate) fn viewer_page(
    filter_options: &[Employee],
    selected: Option<&EmployeeId>,
    employees_loaded: bool,
    transaction_panel: Markup,
) -> Markup {
    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 w-full lg:max-w-5xl"
            {
                header
                {
                    h1 class="text-xl font-bold" { "Employee Transactions" }

                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        "Browse the company transaction feed, or pick an \
                        employee to see only their transactions."
                    }
                }

                (filter_control(filter_options, selected, employees_loaded))

                (transaction_panel)
            }
        }
    };

    base("Transactions", &content)
}

/// The employee filter: a select listing the sentinel first, wired to swap
/// the transaction panel on change.
fn filter_control(
    filter_options: &[Employee],
    selected: Option<&EmployeeId>,
    employees_loaded: bool,
) -> Markup {
    html! {
        div class="max-w-md"
        {
            label for="employee-filter" class=(FORM_LABEL_STYLE)
            {
                "Filter by employee"
            }

            @if !employees_loaded
            {
                p
                    class="text-sm text-gray-500 dark:text-gray-400"
                    data-loading-label="true"
                {
                    "Loading employees..."
                }
            }

            select
                id="employee-filter"
                name="employee_id"
                class=(FORM_SELECT_STYLE)
                hx-post=(endpoints::EMPLOYEE_FILTER)
                hx-target="#transaction-panel"
                hx-swap="outerHTML"
                hx-disabled-elt="this"
                disabled[filter_options.is_empty()]
            {
                @for employee in filter_options
                {
                    @let is_selected =
                        selected.map_or(employee.id.is_sentinel(), |id| *id == employee.id);

                    option value=(employee.id.as_str()) selected[is_selected]
                    {
                        (employee.full_name())
                    }
                }
            }
        }
    }
}

/// The swappable transaction panel: the table plus, in unfiltered mode with
/// pages remaining, the View More button.
pub(crate) fn transaction_panel(transactions: &[Transaction], can_load_more: bool) -> Markup {
    let rows: Vec<TransactionTableRow> = transactions
        .iter()
        .map(TransactionTableRow::new_from_transaction)
        .collect();

    html! {
        section
            id="transaction-panel"
            class="rounded bg-gray-50 dark:bg-gray-800 overflow-hidden w-full"
        {
            table class="w-full my-2 text-sm text-left rtl:text-right
                text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class="px-6 py-3 text-right"
                        {
                            "Amount"
                        }
                        th scope="col" class=(TABLE_CELL_STYLE)
                        {
                            "Date"
                        }
                        th scope="col" class=(TABLE_CELL_STYLE)
                        {
                            "Description"
                        }
                        th scope="col" class=(TABLE_CELL_STYLE)
                        {
                            "Employee"
                        }
                    }
                }

                tbody
                {
                    @for row in &rows
                    {
                        (transaction_row_view(row))
                    }

                    @if rows.is_empty()
                    {
                        tr
                        {
                            td
                                colspan="4"
                                data-empty-state="true"
                                class="px-6 py-4 text-center"
                            {
                                "No transactions to display."
                            }
                        }
                    }
                }
            }

            @if can_load_more
            {
                (view_more_button())
            }
        }
    }
}

fn transaction_row_view(row: &TransactionTableRow) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class="px-6 py-4 text-right font-medium text-gray-900 dark:text-white"
            {
                (format_currency(row.amount))
            }
            td class=(TABLE_CELL_STYLE)
            {
                (format_date(row.date))
            }
            td class=(TABLE_CELL_STYLE)
            {
                (row.description)
            }
            td class=(TABLE_CELL_STYLE)
            {
                (row.employee_name)
            }
        }
    }
}

fn view_more_button() -> Markup {
    html! {
        div class="px-6 pb-4"
        {
            button
                data-view-more="true"
                class=(BUTTON_PRIMARY_STYLE)
                hx-post=(endpoints::LOAD_MORE)
                hx-target="#transaction-panel"
                hx-swap="outerHTML"
                hx-disabled-elt="this"
            {
                (loading_spinner())
                "View More"
            }
        }
    }
}
