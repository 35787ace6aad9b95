mod common;

use aws_sdk_dynamodb::types::AttributeValue;
use common::{bare_request, json_request, parse_response_body, TestContext};
use http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
#[ignore = "requires DynamoDB Local (LocalStack) on localhost:4566"]
async fn product_lifecycle() {
    let ctx = TestContext::new().await;

    // Create without an image; the stock image URI gets assigned
    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/adicionar-produto",
            json!({
                "productName": "Feijoada",
                "productDescription": "Completa",
                "productCategory": "Pratos",
                "productValue": "R$ 39.90",
                "productStatus": "Ativo",
            }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "Servidor: Produto cadastrado com sucesso");
    let product_id = body["productId"].as_str().expect("Missing productId").to_string();

    // Listed with Portuguese attribute names
    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/listar-produtos"))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let products = parse_response_body(response).await;
    let products = products.as_array().expect("Expected an array");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["nome"], "Feijoada");
    assert_eq!(products[0]["valor"], 39.90);
    assert!(products[0]["imageUri"].as_str().unwrap().starts_with("https://"));

    // Update
    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/atualizar-produto/{product_id}"),
            json!({
                "productName": "Feijoada Completa",
                "productDescription": "Com couve e farofa",
                "productCategory": "Pratos",
                "productValue": "R$ 45.00",
            }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    // Menu-section rewrite
    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/atualizar-produto-cardapio/{product_id}"),
            json!({ "cardapio": { "secao": "Destaques", "ordem": 1 } }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    // Soft delete keeps the document, status flips to Inativo
    let response = ctx
        .router
        .clone()
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/excluir-produto/{product_id}"),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/listar-produtos"))
        .await
        .expect("Failed to send request");

    let products = parse_response_body(response).await;
    assert_eq!(products[0]["status"], "Inativo");
    assert_eq!(products[0]["nome"], "Feijoada Completa");
    assert_eq!(products[0]["cardapio"]["secao"], "Destaques");

    // Status filter no longer matches it
    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/listar-produtos?status=Ativo"))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let products = parse_response_body(response).await;
    assert_eq!(products.as_array().expect("Expected an array").len(), 0);
}

#[tokio::test]
#[ignore = "requires DynamoDB Local (LocalStack) on localhost:4566"]
async fn update_missing_product_is_404() {
    let ctx = TestContext::new().await;

    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/atualizar-produto/missing-id",
            json!({
                "productName": "Feijoada",
                "productDescription": "Completa",
                "productCategory": "Pratos",
                "productValue": "R$ 39.90",
            }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Produto não encontrado");
}

#[tokio::test]
#[ignore = "requires DynamoDB Local (LocalStack) on localhost:4566"]
async fn waiter_password_is_stored_hashed() {
    let ctx = TestContext::new().await;

    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/adicionar-garcom",
            json!({
                "waiterName": "João",
                "waiterSurname": "Silva",
                "waiterEmail": "joao@example.com",
                "waiterPassword": "segredo123",
                "waiterSituation": "Disponível",
                "waiterStatus": "Ativo",
            }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/listar-garcons"))
        .await
        .expect("Failed to send request");

    let waiters = parse_response_body(response).await;
    let senha = waiters[0]["senha"].as_str().expect("Missing senha");
    assert_ne!(senha, "segredo123");
    assert!(bcrypt::verify("segredo123", senha).unwrap());
}

#[tokio::test]
#[ignore = "requires DynamoDB Local (LocalStack) on localhost:4566"]
async fn orders_endpoints() {
    let ctx = TestContext::new().await;

    // No orders yet
    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/obter-pedidos"))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Nenhum pedido encontrado");

    // Orders are written by the client app, so seed one directly
    ctx.client
        .put_item()
        .table_name(&ctx.orders_table)
        .item("id", AttributeValue::S("order-1".to_string()))
        .item("status", AttributeValue::S("Pendente".to_string()))
        .item("mesa", AttributeValue::S("12".to_string()))
        .send()
        .await
        .expect("Failed to seed order");

    // Status filter matches
    let response = ctx
        .router
        .clone()
        .oneshot(bare_request(
            "GET",
            "/api/obter-pedidos?status=Pendente&status=Em%20preparo",
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let orders = parse_response_body(response).await;
    assert_eq!(orders[0]["id"], "order-1");
    assert_eq!(orders[0]["mesa"], "12");

    // Status update preserves the rest of the document
    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/atualizar-pedido/order-1",
            json!({ "status": "Entregue" }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "Status do pedido atualizado com sucesso");

    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/obter-pedidos"))
        .await
        .expect("Failed to send request");

    let orders = parse_response_body(response).await;
    assert_eq!(orders[0]["status"], "Entregue");
    assert_eq!(orders[0]["mesa"], "12");

    // Unknown order
    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/atualizar-pedido/missing-id",
            json!({ "status": "Entregue" }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Pedido não encontrado");
}

#[tokio::test]
#[ignore = "requires DynamoDB Local (LocalStack) on localhost:4566"]
async fn table_lifecycle_with_true_delete() {
    let ctx = TestContext::new().await;

    // Empty list is a 404 on this endpoint
    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/obter-mesas"))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The customer app sends the table number as a bare number
    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/adicionar-mesa",
            json!({ "numero": 12, "status": "Livre" }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["numero"], 12);
    let table_id = body["id"].as_str().expect("Missing id").to_string();

    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/atualizar-mesa/{table_id}"),
            json!({ "numero": "12", "status": "Ocupada" }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    // Delete removes the document entirely
    let response = ctx
        .router
        .clone()
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/deletar-mesa/{table_id}"),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/obter-mesas"))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again is a 404
    let response = ctx
        .router
        .clone()
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/deletar-mesa/{table_id}"),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Mesa não encontrada");
}

#[tokio::test]
#[ignore = "requires DynamoDB Local (LocalStack) on localhost:4566"]
async fn settings_merge_and_fetch() {
    let ctx = TestContext::new().await;

    // Nothing saved yet
    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/obter-configuracoes"))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "Configurações não encontradas");

    // An empty save still creates the singleton
    let response = ctx
        .router
        .clone()
        .oneshot(json_request("POST", "/api/salvar-configuracoes", json!({})))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/obter-configuracoes"))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await, json!({}));

    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/salvar-configuracoes",
            json!({
                "companyName": "Cantina da Nona",
                "linkWhatsApp": "https://wa.me/5511999999999",
            }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    // A later partial save merges instead of replacing
    let response = ctx
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/salvar-configuracoes",
            json!({ "primaryColor": "#8B0000" }),
        ))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let response = ctx
        .router
        .clone()
        .oneshot(bare_request("GET", "/api/obter-configuracoes"))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let settings = parse_response_body(response).await;
    assert_eq!(settings["companyName"], "Cantina da Nona");
    assert_eq!(settings["linkWhatsApp"], "https://wa.me/5511999999999");
    assert_eq!(settings["primaryColor"], "#8B0000");
}
