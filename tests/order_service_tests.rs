use nightrader_client::prelude::*;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

fn service_for(server: &mockito::ServerGuard) -> OrderServiceImpl<RestClient> {
    let config = Arc::new(Config::with_base_url(server.url()));
    OrderServiceImpl::new(Arc::new(RestClient::new(config)))
}

fn session() -> Session {
    Session::new("test-jwt")
}

#[tokio::test]
async fn list_transactions_decodes_and_filters_client_side() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/transaction/getStockTransactions")
        .match_header("authorization", "Bearer test-jwt")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": [
                    {
                        "stock_tx_id": "1",
                        "stock_id": "7",
                        "wallet_tx_id": null,
                        "parent_stock_tx_id": null,
                        "order_status": "IN_PROGRESS",
                        "is_buy": true,
                        "order_type": "LIMIT",
                        "stock_price": 50.0,
                        "quantity": 10,
                        "time_stamp": "2024-03-01T12:00:00Z"
                    },
                    {
                        "stock_tx_id": "2",
                        "stock_id": "8",
                        "wallet_tx_id": "w2",
                        "parent_stock_tx_id": null,
                        "order_status": "COMPLETED",
                        "is_buy": false,
                        "order_type": "MARKET",
                        "stock_price": 20.0,
                        "quantity": 5,
                        "time_stamp": "2024-03-01T12:01:00Z"
                    }
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = service_for(&server);
    let all = service.list_transactions(&session(), None).await.unwrap();
    assert_eq!(all.len(), 2);

    let scoped = service
        .list_transactions(&session(), Some("7"))
        .await
        .unwrap();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].stock_tx_id, "1");
    assert!(scoped[0].order_status.is_in_progress());
    assert_eq!(scoped[0].total_cost(), Some(500.0));

    mock.assert_async().await;
}

#[tokio::test]
async fn list_transactions_tolerates_null_data() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/transaction/getStockTransactions")
        .with_status(200)
        .with_body(r#"{"success":true,"data":null}"#)
        .create_async()
        .await;

    let service = service_for(&server);
    let orders = service.list_transactions(&session(), None).await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn place_order_posts_the_wire_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/engine/placeStockOrder")
        .match_header("authorization", "Bearer test-jwt")
        .match_body(mockito::Matcher::Json(json!({
            "stock_id": "7",
            "is_buy": true,
            "order_type": "MARKET",
            "quantity": 10,
            "price": null
        })))
        .with_status(200)
        .with_body(r#"{"success":true,"data":null}"#)
        .create_async()
        .await;

    let service = service_for(&server);
    let request = PlaceOrderRequest::market("7", true, 10);
    service.place_order(&session(), &request).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_limit_order_is_rejected_before_any_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/engine/placeStockOrder")
        .expect(0)
        .create_async()
        .await;

    let service = service_for(&server);
    // Scenario C: limit order without a price
    let request = PlaceOrderRequest {
        stock_id: "7".to_string(),
        is_buy: false,
        order_type: OrderType::Limit,
        quantity: 3,
        price: None,
    };
    let err = service.place_order(&session(), &request).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    mock.assert_async().await;
}

#[tokio::test]
async fn backend_rejection_message_is_forwarded_verbatim() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/engine/placeStockOrder")
        .with_status(200)
        .with_body(r#"{"success":false,"data":{"error":"Insufficient funds"}}"#)
        .create_async()
        .await;

    let service = service_for(&server);
    let request = PlaceOrderRequest::limit("7", true, 3, 80.0);
    let err = service.place_order(&session(), &request).await.unwrap_err();
    match err {
        AppError::Backend(msg) => assert_eq!(msg, "Insufficient funds"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn cancel_then_refetch_observes_the_terminal_status() {
    // Scenario D: cancellation does not touch any cached list; the next fetch
    // reflects the updated status.
    let mut server = mockito::Server::new_async().await;
    let cancel_mock = server
        .mock("POST", "/engine/cancelStockTransaction")
        .match_body(mockito::Matcher::Json(json!({"stock_tx_id": "1"})))
        .with_status(200)
        .with_body(r#"{"success":true,"data":null}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/transaction/getStockTransactions")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": [{
                    "stock_tx_id": "1",
                    "stock_id": "7",
                    "wallet_tx_id": null,
                    "parent_stock_tx_id": null,
                    "order_status": "CANCELLED",
                    "is_buy": true,
                    "order_type": "LIMIT",
                    "stock_price": 50.0,
                    "quantity": 10,
                    "time_stamp": "2024-03-01T12:00:00Z"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = service_for(&server);
    service.cancel_order(&session(), "1").await.unwrap();
    cancel_mock.assert_async().await;

    let orders = service
        .list_transactions(&session(), Some("7"))
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_status, OrderStatus::Cancelled);
    assert!(!has_pending(&orders));
}

#[tokio::test]
async fn transport_sends_bearer_token_uniformly() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/transaction/getStockTransactions")
        .match_header("authorization", "Bearer other-jwt")
        .with_status(200)
        .with_body(r#"{"success":true,"data":[]}"#)
        .create_async()
        .await;

    let config = Arc::new(Config::with_base_url(server.url()));
    let transport = RestClient::new(config);
    let session = Session::new("other-jwt");
    let data = transport
        .request(
            Method::GET,
            "transaction/getStockTransactions",
            Some(&session),
            None,
        )
        .await
        .unwrap();
    assert_eq!(data, json!([]));

    mock.assert_async().await;
}
