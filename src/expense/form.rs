//! Validation and rendering of the form for adding an expense.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    category::Category,
    endpoints,
    expense::{NewExpense, list::FILTER_SELECTOR},
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner},
};

/// The fewest characters a description may have.
pub const DESCRIPTION_MIN_LENGTH: usize = 3;
/// The smallest amount an expense may have.
pub const AMOUNT_MIN: f64 = 1.0;
/// The largest amount an expense may have.
pub const AMOUNT_MAX: f64 = 100_000.0;

pub const DESCRIPTION_TOO_SHORT: &str = "Description should be at least 3 characters long.";
pub const AMOUNT_REQUIRED: &str = "Amount is required.";
pub const AMOUNT_TOO_SMALL: &str = "Amount must be at least 1.";
pub const AMOUNT_TOO_LARGE: &str = "Amount must be at most 100,000.";
pub const CATEGORY_REQUIRED: &str = "Category is required.";

/// The raw form data as submitted by the browser.
///
/// Every field is kept as text so that invalid input can be echoed back to
/// the user alongside the error messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseFormData {
    /// The text of the description input.
    pub description: String,
    /// The text of the amount input.
    pub amount: String,
    /// The value of the selected category option.
    pub category: String,
    /// The category filter that was selected when the form was submitted.
    ///
    /// This is not validated, it only decides which list the user goes back to.
    #[serde(default)]
    pub filter: String,
}

/// Error messages for each field of the expense form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    /// Set if the description is too short.
    pub description: Option<&'static str>,
    /// Set if the amount is missing, not a number or out of range.
    pub amount: Option<&'static str>,
    /// Set if no expense category was selected.
    pub category: Option<&'static str>,
}

/// Check the submitted form against the rules for an expense.
///
/// Every field is checked, so the returned [FormErrors] holds a message for
/// each field that failed rather than just the first.
///
/// # Errors
///
/// Returns the field-level error messages if any field is invalid.
pub fn validate_expense(form: &ExpenseFormData) -> Result<NewExpense, FormErrors> {
    let description = validate_description(&form.description);
    let amount = validate_amount(&form.amount);
    let category = validate_category(&form.category);

    match (description, amount, category) {
        (Ok(()), Ok(amount), Ok(category)) => Ok(NewExpense {
            description: form.description.clone(),
            amount,
            category,
        }),
        (description, amount, category) => Err(FormErrors {
            description: description.err(),
            amount: amount.err(),
            category: category.err(),
        }),
    }
}

fn validate_description(description: &str) -> Result<(), &'static str> {
    // Count what the user sees as characters, so "café" is four long whether
    // or not the accent is a combining mark.
    if description.graphemes(true).count() < DESCRIPTION_MIN_LENGTH {
        Err(DESCRIPTION_TOO_SHORT)
    } else {
        Ok(())
    }
}

fn validate_amount(amount: &str) -> Result<f64, &'static str> {
    let amount = match amount.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => return Err(AMOUNT_REQUIRED),
    };

    if amount < AMOUNT_MIN {
        Err(AMOUNT_TOO_SMALL)
    } else if amount > AMOUNT_MAX {
        Err(AMOUNT_TOO_LARGE)
    } else {
        Ok(amount)
    }
}

fn validate_category(category: &str) -> Result<Category, &'static str> {
    category.parse().map_err(|_| CATEGORY_REQUIRED)
}

/// Render the expense form.
///
/// `values` prefills the inputs, which is how the user's input survives a
/// failed submission. Pass the default form data and no errors for an empty
/// form.
pub fn expense_form_view(values: &ExpenseFormData, errors: &FormErrors) -> Markup {
    html! {
        form
            id="expense-form"
            hx-post=(endpoints::EXPENSES_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-include=(FILTER_SELECTOR)
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            h2 class="text-xl font-bold" { "Add Expense" }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Description"
                    required
                    autofocus
                    minlength=(DESCRIPTION_MIN_LENGTH)
                    value=(values.description)
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error("description-error", errors.description))
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                div class="input-wrapper w-full"
                {
                    input
                        id="amount"
                        type="number"
                        name="amount"
                        step="0.01"
                        placeholder="0.00"
                        required
                        min=(AMOUNT_MIN)
                        max=(AMOUNT_MAX)
                        value=(values.amount)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                (field_error("amount-error", errors.amount))
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                select
                    id="category"
                    name="category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" {}

                    @for category in Category::ALL {
                        option
                            value=(category.name())
                            selected[values.category == category.name()]
                        {
                            (category.name())
                        }
                    }
                }

                (field_error("category-error", errors.category))
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator" { (loading_spinner()) }
                " Add Expense"
            }
        }
    }
}

fn field_error(id: &str, message: Option<&str>) -> Markup {
    html! {
        @if let Some(message) = message {
            p id=(id) class="text-red-500 text-xs" { (message) }
        }
    }
}


#[cfg(test)]
mod expense_form_view_tests {
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        test_utils::{
            assert_form_input, assert_form_input_with_value, assert_form_submit_button_with_text,
            assert_hx_endpoint, assert_valid_html, must_get_form,
        },
    };

    use super::{
        AMOUNT_TOO_SMALL, DESCRIPTION_TOO_SHORT, ExpenseFormData, FormErrors, expense_form_view,
    };

    fn render(values: &ExpenseFormData, errors: &FormErrors) -> Html {
        Html::parse_fragment(&expense_form_view(values, errors).into_string())
    }

    #[test]
    fn empty_form_has_expected_fields() {
        let html = render(&ExpenseFormData::default(), &FormErrors::default());
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::EXPENSES_API, "hx-post");
        assert_form_input(&form, "description", "text");
        assert_form_input(&form, "amount", "number");
        assert_form_submit_button_with_text(&form, "Add Expense");

        let p = Selector::parse("p").unwrap();
        assert_eq!(form.select(&p).count(), 0, "want no error messages");
    }

    #[test]
    fn category_select_excludes_sentinel() {
        let html = render(&ExpenseFormData::default(), &FormErrors::default());

        let option = Selector::parse("select[name=category] option").unwrap();
        let values = html
            .select(&option)
            .map(|option| option.value().attr("value").unwrap_or_default())
            .collect::<Vec<_>>();

        assert_eq!(values, vec!["", "Utilities", "Groceries", "Entertainment"]);
    }

    #[test]
    fn shows_field_errors_and_keeps_values() {
        let values = ExpenseFormData {
            description: "ab".to_owned(),
            amount: "0".to_owned(),
            category: "Groceries".to_owned(),
            filter: "Groceries".to_owned(),
        };
        let errors = FormErrors {
            description: Some(DESCRIPTION_TOO_SHORT),
            amount: Some(AMOUNT_TOO_SMALL),
            category: None,
        };

        let html = render(&values, &errors);
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "description", "text", "ab");
        assert_form_input_with_value(&form, "amount", "number", "0");
        assert_error(&html, "#description-error", DESCRIPTION_TOO_SHORT);
        assert_error(&html, "#amount-error", AMOUNT_TOO_SMALL);
        assert!(
            html.select(&Selector::parse("#category-error").unwrap())
                .next()
                .is_none(),
            "want no category error"
        );

        let selected = Selector::parse("select[name=category] option[selected]").unwrap();
        let selected = html.select(&selected).next().expect("no option selected");
        assert_eq!(selected.value().attr("value"), Some("Groceries"));
        assert_eq!(form.value().attr("hx-include"), Some("#category-filter"));
    }

    #[track_caller]
    fn assert_error(html: &Html, selector: &str, want: &str) {
        let selector = Selector::parse(selector).unwrap();
        let got = html
            .select(&selector)
            .next()
            .unwrap_or_else(|| panic!("no error message found"))
            .text()
            .collect::<String>();

        assert_eq!(got.trim(), want);
    }
}
