use nightrader_client::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn transport_for(server: &mockito::ServerGuard) -> Arc<RestClient> {
    Arc::new(RestClient::new(Arc::new(Config::with_base_url(
        server.url(),
    ))))
}

#[tokio::test]
async fn login_exchanges_credentials_for_a_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/authentication/login")
        .match_body(mockito::Matcher::Json(json!({
            "user_name": "VanguardETF",
            "password": "Vang@123"
        })))
        .with_status(200)
        .with_body(r#"{"success":true,"data":{"token":"issued-jwt"}}"#)
        .create_async()
        .await;

    let auth = AuthServiceImpl::new(transport_for(&server));
    let credentials = Credentials {
        user_name: "VanguardETF".to_string(),
        password: "Vang@123".to_string(),
    };
    let session = auth.login(&credentials).await.unwrap();
    assert_eq!(session.token, "issued-jwt");
    assert!(session.is_authenticated());

    mock.assert_async().await;
}

#[tokio::test]
async fn failed_login_surfaces_the_backend_message() {
    let mut server = mockito::Server::new_async().await;
    // The backend reports bad credentials with a 200 and a failure envelope
    server
        .mock("POST", "/authentication/login")
        .with_status(200)
        .with_body(r#"{"success":false,"data":{"error":"Incorrect password: "}}"#)
        .create_async()
        .await;

    let auth = AuthServiceImpl::new(transport_for(&server));
    let credentials = Credentials {
        user_name: "VanguardETF".to_string(),
        password: "wrong".to_string(),
    };
    let err = auth.login(&credentials).await.unwrap_err();
    assert!(matches!(err, AppError::Backend(msg) if msg.starts_with("Incorrect password")));
}

#[tokio::test]
async fn register_posts_the_new_account() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/authentication/register")
        .match_body(mockito::Matcher::Json(json!({
            "user_name": "VanguardETF",
            "name": "Vanguard Corp.",
            "password": "Vang@123"
        })))
        .with_status(200)
        .with_body(r#"{"success":true,"data":null}"#)
        .create_async()
        .await;

    let auth = AuthServiceImpl::new(transport_for(&server));
    auth.register("VanguardETF", "Vanguard Corp.", "Vang@123")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn wallet_balance_is_read_from_the_envelope() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/transaction/getWalletBalance")
        .match_header("authorization", "Bearer jwt")
        .with_status(200)
        .with_body(r#"{"success":true,"data":{"balance":1234.5}}"#)
        .create_async()
        .await;

    let wallet = WalletServiceImpl::new(transport_for(&server));
    let balance = wallet
        .get_wallet_balance(&Session::new("jwt"))
        .await
        .unwrap();
    assert_eq!(balance, 1234.5);
}

#[tokio::test]
async fn non_positive_deposit_never_reaches_the_backend() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/transaction/addMoneyToWallet")
        .expect(0)
        .create_async()
        .await;

    let wallet = WalletServiceImpl::new(transport_for(&server));
    let err = wallet
        .add_money(&Session::new("jwt"), -10.0)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    mock.assert_async().await;
}

#[tokio::test]
async fn wallet_transactions_decode_the_ledger() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/transaction/getWalletTransactions")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": [{
                    "wallet_tx_id": "w1",
                    "stock_tx_id": "s1",
                    "is_debit": true,
                    "amount": 500.0,
                    "time_stamp": "2024-03-01T12:00:00Z"
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let wallet = WalletServiceImpl::new(transport_for(&server));
    let ledger = wallet
        .get_wallet_transactions(&Session::new("jwt"))
        .await
        .unwrap();
    assert_eq!(ledger.len(), 1);
    assert!(ledger[0].is_debit);
}

#[tokio::test]
async fn stock_prices_and_portfolio_decode() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/transaction/getStockPrices")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": [
                    {"stock_id": "1", "stock_name": "Google", "current_price": 150.0},
                    {"stock_id": "2", "stock_name": "Apple", "current_price": 120.0}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/transaction/getStockPortfolio")
        .with_status(200)
        .with_body(
            json!({
                "success": true,
                "data": [{"stock_id": "1", "stock_name": "Google", "quantity_owned": 10.0}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let market = MarketServiceImpl::new(transport_for(&server));
    let session = Session::new("jwt");

    let prices = market.get_stock_prices(&session).await.unwrap();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices[0].stock_name, "Google");

    let portfolio = market.get_stock_portfolio(&session).await.unwrap();
    assert_eq!(portfolio.len(), 1);
    assert_eq!(portfolio[0].quantity_owned, 10.0);
}

#[test]
fn session_store_round_trip_blocking() {
    // Sync consumers drive the store with a lightweight executor
    let store = SessionStore::new();
    tokio_test::block_on(async {
        store.set(Session::new("jwt")).await;
        assert!(store.current().await.is_some());
        store.clear().await;
        assert!(store.current().await.is_none());
    });
}
