//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, get_expense_list, get_expenses_page,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::EXPENSE_LIST_VIEW, get(get_expense_list))
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the expenses page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::EXPENSES_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::Html;

    use crate::{
        AppState,
        category::ALL_CATEGORIES,
        endpoints::{self, format_endpoint},
        expense::{ExpenseFormData, ExpenseStore},
        test_utils::assert_valid_html,
    };

    use super::build_router;

    fn get_test_server(store: ExpenseStore) -> TestServer {
        let app = build_router(AppState::new(store));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn listed_descriptions(page: &str) -> Vec<String> {
        crate::expense::list_test_helpers::listed_descriptions(&Html::parse_document(page))
    }

    fn listed_ids(page: &str) -> Vec<i64> {
        crate::expense::list_test_helpers::listed_ids(&Html::parse_document(page))
    }

    #[tokio::test]
    async fn expenses_page_renders() {
        let server = get_test_server(ExpenseStore::with_demo_data());

        let response = server.get(endpoints::EXPENSES_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_valid_html(&html);
        assert_eq!(listed_ids(&response.text()), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn submit_filter_and_delete() {
        let server = get_test_server(ExpenseStore::new());

        for (description, amount, category) in [
            ("Power bill", "120", "Utilities"),
            ("Weekly shop", "85.50", "Groceries"),
            ("Cinema", "30", "Entertainment"),
        ] {
            server
                .post(endpoints::EXPENSES_API)
                .form(&ExpenseFormData {
                    description: description.to_owned(),
                    amount: amount.to_owned(),
                    category: category.to_owned(),
                    filter: ALL_CATEGORIES.to_owned(),
                })
                .await
                .assert_status(StatusCode::SEE_OTHER);
        }

        let page = server.get(endpoints::EXPENSES_VIEW).await.text();
        assert_eq!(
            listed_descriptions(&page),
            vec!["Power bill", "Weekly shop", "Cinema"]
        );

        let list = server
            .get(endpoints::EXPENSE_LIST_VIEW)
            .add_query_param("filter", "Groceries")
            .await
            .text();
        assert_eq!(listed_descriptions(&list), vec!["Weekly shop"]);

        let list = server
            .delete(&format_endpoint(endpoints::DELETE_EXPENSE, 1))
            .add_query_param("filter", ALL_CATEGORIES)
            .await
            .text();
        assert_eq!(listed_ids(&list), vec![2, 3]);

        server
            .post(endpoints::EXPENSES_API)
            .form(&ExpenseFormData {
                description: "Concert".to_owned(),
                amount: "60".to_owned(),
                category: "Entertainment".to_owned(),
                filter: String::new(),
            })
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let page = server.get(endpoints::EXPENSES_VIEW).await.text();
        assert_eq!(listed_ids(&page), vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn invalid_submission_leaves_store_unchanged() {
        let server = get_test_server(ExpenseStore::new());

        server
            .post(endpoints::EXPENSES_API)
            .form(&ExpenseFormData {
                description: "ab".to_owned(),
                amount: "abc".to_owned(),
                category: ALL_CATEGORIES.to_owned(),
                filter: String::new(),
            })
            .await
            .assert_status_ok();

        let page = server.get(endpoints::EXPENSES_VIEW).await.text();
        assert!(listed_ids(&page).is_empty());
    }

    #[tokio::test]
    async fn deleting_unknown_expense_succeeds() {
        let server = get_test_server(ExpenseStore::with_demo_data());

        server
            .delete(&format_endpoint(endpoints::DELETE_EXPENSE, 42))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let server = get_test_server(ExpenseStore::new());

        server
            .get("/does/not/exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn internal_error_page_returns_500() {
        let server = get_test_server(ExpenseStore::new());

        server
            .get(endpoints::INTERNAL_ERROR_VIEW)
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
