//! REST API end-to-end tests over an in-memory database
#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::http::StatusCode;
use employee_service::{CompanyApi, EmployeeApi, EmployeePatch, ServiceError};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;
use common::{
    body_bytes, body_json, delete, get, lily, new_company, sally, test_router, tom, with_json,
};

fn ids(list: &Value) -> Vec<i32> {
    list.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_i64().unwrap() as i32)
        .collect()
}

// ===== Employees =====

#[tokio::test]
async fn post_employee_returns_created_without_salary() {
    let (router, _) = test_router().await;

    let response = router
        .oneshot(with_json(
            "POST",
            "/employees",
            json!({"name": "Lisa", "age": 21, "gender": "female", "salary": 2000}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["name"], "Lisa");
    assert_eq!(body["age"], 21);
    assert_eq!(body["gender"], "female");
    assert!(body.get("salary").is_none());
    assert!(body.get("companyId").is_none());
}

#[tokio::test]
async fn post_employee_with_missing_field_is_bad_request() {
    let (router, module) = test_router().await;

    let response = router
        .oneshot(with_json(
            "POST",
            "/employees",
            json!({"name": "Lisa", "age": 21, "gender": "female"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let problem = body_json(response).await;
    assert_eq!(problem["status"], 400);
    assert_eq!(problem["detail"], "salary is required");
    assert!(module.employees().find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn post_employee_with_unknown_company_is_bad_request() {
    let (router, _) = test_router().await;

    let response = router
        .oneshot(with_json(
            "POST",
            "/employees",
            json!({"name": "Lisa", "age": 21, "gender": "female", "salary": 2000, "companyId": 77}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_employee_by_id() {
    let (router, module) = test_router().await;
    let sally = module.employees().create(sally(None)).await.unwrap();

    let response = router
        .oneshot(get(&format!("/employees/{}", sally.id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": sally.id, "name": "Sally", "age": 22, "gender": "Female"})
    );
}

#[tokio::test]
async fn get_unknown_employee_is_empty_404() {
    let (router, _) = test_router().await;

    let response = router.oneshot(get("/employees/9999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn list_employees_all_by_gender_and_by_page() {
    let (router, module) = test_router().await;
    let service = module.employees();
    let sally = service.create(sally(None)).await.unwrap();
    let lily = service.create(lily(None)).await.unwrap();
    let tom = service.create(tom(None)).await.unwrap();

    let all = router.clone().oneshot(get("/employees")).await.unwrap();
    assert_eq!(all.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(all).await), vec![sally.id, lily.id, tom.id]);

    let females = router
        .clone()
        .oneshot(get("/employees?gender=Female"))
        .await
        .unwrap();
    assert_eq!(ids(&body_json(females).await), vec![sally.id, lily.id]);

    let lowercase = router
        .clone()
        .oneshot(get("/employees?gender=female"))
        .await
        .unwrap();
    assert!(ids(&body_json(lowercase).await).is_empty());

    let first = router
        .clone()
        .oneshot(get("/employees?page=0&pageSize=2"))
        .await
        .unwrap();
    assert_eq!(ids(&body_json(first).await), vec![sally.id, lily.id]);

    let second = router
        .clone()
        .oneshot(get("/employees?page=1&pageSize=2"))
        .await
        .unwrap();
    assert_eq!(ids(&body_json(second).await), vec![tom.id]);

    // Paging wins over the gender filter
    let both = router
        .clone()
        .oneshot(get("/employees?page=1&pageSize=2&gender=Female"))
        .await
        .unwrap();
    assert_eq!(ids(&body_json(both).await), vec![tom.id]);

    // page without pageSize is not a page request
    let page_only = router.oneshot(get("/employees?page=1")).await.unwrap();
    assert_eq!(ids(&body_json(page_only).await).len(), 3);
}

#[tokio::test]
async fn list_employees_with_zero_page_size_is_bad_request() {
    let (router, _) = test_router().await;

    let response = router
        .oneshot(get("/employees?page=0&pageSize=0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let problem = body_json(response).await;
    assert_eq!(problem["title"], "Validation Error");
    assert_eq!(problem["status"], 400);
}

#[tokio::test]
async fn list_with_page_past_any_offset_is_empty() {
    let (router, module) = test_router().await;
    module.employees().create(sally(None)).await.unwrap();
    module.companies().create(new_company("ABC")).await.unwrap();

    for uri in [
        "/employees?page=18446744073709551615&pageSize=10",
        "/employees?page=9223372036854775808&pageSize=1",
        "/companies?page=18446744073709551615&pageSize=10",
        "/companies?page=9223372036854775808&pageSize=1",
    ] {
        let response = router.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_json(response).await, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn list_with_page_size_beyond_bigint_is_bad_request() {
    let (router, _) = test_router().await;

    let response = router
        .oneshot(get("/employees?page=0&pageSize=9223372036854775808"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["title"], "Validation Error");
}

#[tokio::test]
async fn put_employee_merges_age_and_salary_only() {
    let (router, module) = test_router().await;
    let lisa = module
        .employees()
        .create(common::new_employee("Lisa", 22, "female", 10000))
        .await
        .unwrap();

    let response = router
        .oneshot(with_json(
            "PUT",
            &format!("/employees/{}", lisa.id),
            json!({"name": "Changed", "age": 66, "gender": "male", "salary": 2000}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": lisa.id, "name": "Lisa", "age": 66, "gender": "female"})
    );
    let stored = module.employees().find_by_id(lisa.id).await.unwrap();
    assert_eq!(stored.salary, 2000);
}

#[tokio::test]
async fn put_unknown_employee_is_404() {
    let (router, _) = test_router().await;

    let response = router
        .oneshot(with_json("PUT", "/employees/31", json!({"age": 40})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_employee_then_404() {
    let (router, module) = test_router().await;
    let tom = module.employees().create(tom(None)).await.unwrap();
    let uri = format!("/employees/{}", tom.id);

    let first = router.clone().oneshot(delete(&uri)).await.unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(first).await.is_empty());

    let again = router.clone().oneshot(delete(&uri)).await.unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let fetched = router.oneshot(get(&uri)).await.unwrap();
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

// ===== Companies =====

#[tokio::test]
async fn list_companies_nests_employees_without_salary() {
    let (router, module) = test_router().await;
    let abc = module.companies().create(new_company("ABC")).await.unwrap();
    let sally = module.employees().create(sally(Some(abc.id))).await.unwrap();
    let lily = module.employees().create(lily(Some(abc.id))).await.unwrap();

    let response = router.oneshot(get("/companies")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{
            "id": abc.id,
            "companyName": "ABC",
            "employeeList": [
                {"id": sally.id, "name": "Sally", "age": 22, "gender": "Female"},
                {"id": lily.id, "name": "Lily", "age": 26, "gender": "Female"}
            ]
        }])
    );
}

#[tokio::test]
async fn get_company_and_its_employees() {
    let (router, module) = test_router().await;
    let abc = module.companies().create(new_company("ABC")).await.unwrap();
    let tom = module.employees().create(tom(Some(abc.id))).await.unwrap();

    let company = router
        .clone()
        .oneshot(get(&format!("/companies/{}", abc.id)))
        .await
        .unwrap();
    assert_eq!(company.status(), StatusCode::OK);
    let body = body_json(company).await;
    assert_eq!(body["companyName"], "ABC");
    assert_eq!(ids(&body["employeeList"]), vec![tom.id]);

    let employees = router
        .clone()
        .oneshot(get(&format!("/companies/{}/employees", abc.id)))
        .await
        .unwrap();
    assert_eq!(employees.status(), StatusCode::OK);
    assert_eq!(ids(&body_json(employees).await), vec![tom.id]);

    let missing = router
        .oneshot(get(&format!("/companies/{}/employees", abc.id + 1)))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_put_delete_company() {
    let (router, module) = test_router().await;

    let created = router
        .clone()
        .oneshot(with_json("POST", "/companies", json!({"companyName": "ABC"})))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = body_json(created).await;
    assert_eq!(created["companyName"], "ABC");
    assert_eq!(created["employeeList"], json!([]));
    let id = created["id"].as_i64().unwrap() as i32;

    let sally = module.employees().create(sally(Some(id))).await.unwrap();

    let renamed = router
        .clone()
        .oneshot(with_json(
            "PUT",
            &format!("/companies/{}", id),
            json!({"companyName": "DEF"}),
        ))
        .await
        .unwrap();
    assert_eq!(renamed.status(), StatusCode::OK);
    let renamed = body_json(renamed).await;
    assert_eq!(renamed["id"], id);
    assert_eq!(renamed["companyName"], "DEF");
    assert_eq!(ids(&renamed["employeeList"]), vec![sally.id]);

    let deleted = router
        .clone()
        .oneshot(delete(&format!("/companies/{}", id)))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = router
        .clone()
        .oneshot(get(&format!("/companies/{}", id)))
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    // The employee survives without a company
    let orphan = router
        .oneshot(get(&format!("/employees/{}", sally.id)))
        .await
        .unwrap();
    assert_eq!(orphan.status(), StatusCode::OK);
    assert_eq!(
        module.employees().find_by_id(sally.id).await.unwrap().company_id,
        None
    );
}

#[tokio::test]
async fn post_company_without_name_is_bad_request() {
    let (router, _) = test_router().await;

    let response = router
        .oneshot(with_json("POST", "/companies", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["detail"], "companyName is required");
}

#[tokio::test]
async fn delete_unknown_company_is_404() {
    let (router, _) = test_router().await;

    let response = router.oneshot(delete("/companies/404")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_companies_by_page() {
    let (router, module) = test_router().await;
    for name in ["ABC", "DEF", "GHI"] {
        module.companies().create(new_company(name)).await.unwrap();
    }

    let response = router
        .oneshot(get("/companies?page=0&pageSize=2"))
        .await
        .unwrap();

    let body = body_json(response).await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["companyName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["ABC", "DEF"]);
}

// ===== Service endpoints =====

#[tokio::test]
async fn health_reports_ok() {
    let (router, _) = test_router().await;

    let response = router.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn openapi_document_lists_dto_schemas() {
    let (router, _) = test_router().await;

    let response = router.oneshot(get("/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert_eq!(doc["info"]["title"], "Employee Service");
    let schemas = &doc["components"]["schemas"];
    assert!(schemas.get("EmployeeResponse").is_some());
    assert!(schemas.get("CompanyResponse").is_some());
    assert!(schemas["EmployeeResponse"]["properties"].get("salary").is_none());
}

// ===== Native client =====

#[tokio::test]
async fn native_client_shares_state_with_rest() {
    let (router, module) = test_router().await;
    let client = module.client();

    let abc = client.create_company(new_company("ABC")).await.unwrap();
    let lisa = client
        .create_employee(common::new_employee("Lisa", 21, "female", 2000))
        .await
        .unwrap();

    let updated = client
        .update_employee(
            lisa.id,
            EmployeePatch {
                age: Some(22),
                ..EmployeePatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.age, 22);
    assert_eq!(client.list_employees_by_gender("female").await.unwrap().len(), 1);
    assert!(client.get_company_employees(abc.id).await.unwrap().is_empty());

    let response = router
        .oneshot(get(&format!("/employees/{}", lisa.id)))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["age"], 22);

    client.delete_company(abc.id).await.unwrap();
    assert_eq!(
        client.get_company(abc.id).await.unwrap_err(),
        ServiceError::company_not_found(abc.id)
    );
}
